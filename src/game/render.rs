// Read-only view handed to the renderer once per frame

use crate::game::player::{AnimationState, Facing};

/// Everything needed to draw one entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderFrame {
    pub x: f32,
    pub y: f32,
    pub direction: Facing,
    pub animation: AnimationState,
    pub frame: usize,
}

impl RenderFrame {
    /// Sprites are authored facing right
    pub fn flip_horizontal(&self) -> bool {
        self.direction == Facing::Left
    }
}

pub trait Renderable {
    fn render_frame(&self) -> RenderFrame;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_when_facing_left() {
        let frame = RenderFrame {
            x: 0.0,
            y: 0.0,
            direction: Facing::Left,
            animation: AnimationState::Walk,
            frame: 2,
        };
        assert!(frame.flip_horizontal());
        assert!(!RenderFrame {
            direction: Facing::Right,
            ..frame
        }
        .flip_horizontal());
    }
}
