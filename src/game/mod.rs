// Game logic: the player entity and the collaborators it talks to

pub mod collision;
pub mod level;
pub mod player;
pub mod render;

/// Rejected tuning values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be positive")]
    NotPositive { field: &'static str },

    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}
