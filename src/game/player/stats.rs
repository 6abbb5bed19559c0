// Player tuning - physics, energy, weapons and hitbox
// All values are per tick (the simulation runs at a fixed tick rate)

use crate::game::ConfigError;

/// Physics tuning, immutable for a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    /// Downward acceleration added to vy each tick
    pub gravity: f32,
    /// Horizontal speed while a direction is held
    pub player_speed: f32,
    /// Upward acceleration subtracted from vy each thrusting tick
    pub thrust_power: f32,
    /// Cap on upward speed (vy never goes below -max_upward_speed)
    pub max_upward_speed: f32,
    /// Ticks spent charging on the ground before thrust kicks in
    pub fly_charge_time: u32,
}

/// Jetpack energy tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyConfig {
    pub capacity: f32,
    /// Spent per thrusting tick
    pub drain_per_tick: f32,
    /// Regained per grounded, non-thrusting tick
    pub recharge_per_tick: f32,
}

/// Weapon cooldowns in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponConfig {
    pub shoot_cooldown: u32,
    pub bomb_cooldown: u32,
}

/// Hitbox size in world units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub width: f32,
    pub height: f32,
}

pub const BASE_PHYSICS: PhysicsConfig = PhysicsConfig {
    gravity: 0.5,
    player_speed: 3.0,
    // Has to beat gravity or the jetpack only slows the fall
    thrust_power: 0.9,
    max_upward_speed: 6.0,
    fly_charge_time: 20,
};

pub const BASE_ENERGY: EnergyConfig = EnergyConfig {
    capacity: 100.0,
    drain_per_tick: 0.5,
    recharge_per_tick: 1.0,
};

pub const BASE_WEAPONS: WeaponConfig = WeaponConfig {
    shoot_cooldown: 12,
    bomb_cooldown: 45,
};

pub const BASE_HITBOX: Hitbox = Hitbox {
    width: 24.0,
    height: 32.0,
};

impl Default for PhysicsConfig {
    fn default() -> Self {
        BASE_PHYSICS
    }
}

impl PhysicsConfig {
    pub fn standard() -> Self {
        BASE_PHYSICS
    }

    /// Reject tuning the physics engine cannot run sensibly with.
    /// The engine itself never checks; call this once at start-up.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("gravity", self.gravity),
            ("player_speed", self.player_speed),
            ("thrust_power", self.thrust_power),
            ("max_upward_speed", self.max_upward_speed),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
        }
        for (field, value) in [
            ("player_speed", self.player_speed),
            ("max_upward_speed", self.max_upward_speed),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field });
            }
        }
        if self.gravity < 0.0 || self.thrust_power < 0.0 {
            return Err(ConfigError::Negative {
                field: if self.gravity < 0.0 {
                    "gravity"
                } else {
                    "thrust_power"
                },
            });
        }
        if self.fly_charge_time == 0 {
            return Err(ConfigError::NotPositive {
                field: "fly_charge_time",
            });
        }
        Ok(())
    }
}

impl Default for EnergyConfig {
    fn default() -> Self {
        BASE_ENERGY
    }
}

impl EnergyConfig {
    pub fn standard() -> Self {
        BASE_ENERGY
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.capacity > 0.0) {
            return Err(ConfigError::NotPositive { field: "capacity" });
        }
        if self.drain_per_tick < 0.0 {
            return Err(ConfigError::Negative {
                field: "drain_per_tick",
            });
        }
        if self.recharge_per_tick < 0.0 {
            return Err(ConfigError::Negative {
                field: "recharge_per_tick",
            });
        }
        Ok(())
    }
}

impl Default for WeaponConfig {
    fn default() -> Self {
        BASE_WEAPONS
    }
}

impl Default for Hitbox {
    fn default() -> Self {
        BASE_HITBOX
    }
}
