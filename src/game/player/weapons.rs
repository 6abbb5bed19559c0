// Weapons - turns shoot/bomb intentions into cooldown-gated actions

use super::physics::Facing;
use super::stats::WeaponConfig;
use crate::engine::input::PlayerIntentions;
use glam::Vec2;

/// Something the projectile system has to spawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerAction {
    Shoot { origin: Vec2, direction: Facing },
    DropBomb { origin: Vec2 },
}

#[derive(Debug, Clone, Default)]
pub struct Weapons {
    config: WeaponConfig,
    shoot_cooldown: u32,
    bomb_cooldown: u32,
}

impl Weapons {
    pub fn new(config: WeaponConfig) -> Self {
        Self {
            config,
            shoot_cooldown: 0,
            bomb_cooldown: 0,
        }
    }

    /// Count down cooldowns and fire whatever is requested and ready
    pub fn tick(
        &mut self,
        intentions: &PlayerIntentions,
        origin: Vec2,
        direction: Facing,
    ) -> Vec<PlayerAction> {
        self.shoot_cooldown = self.shoot_cooldown.saturating_sub(1);
        self.bomb_cooldown = self.bomb_cooldown.saturating_sub(1);

        let mut actions = Vec::new();
        if intentions.wants_to_shoot && self.shoot_cooldown == 0 {
            actions.push(PlayerAction::Shoot { origin, direction });
            self.shoot_cooldown = self.config.shoot_cooldown;
        }
        if intentions.wants_to_drop_bomb && self.bomb_cooldown == 0 {
            actions.push(PlayerAction::DropBomb { origin });
            self.bomb_cooldown = self.config.bomb_cooldown;
        }
        actions
    }

    /// Make every weapon ready again
    pub fn reset(&mut self) {
        self.shoot_cooldown = 0;
        self.bomb_cooldown = 0;
    }
}
