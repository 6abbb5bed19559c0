// Player physics - movement integration and the charge/thrust flight cycle

use super::stats::PhysicsConfig;
use crate::engine::input::PlayerIntentions;
use glam::Vec2;

/// Upward kick applied on the tick a charge starts
const CHARGE_IMPULSE: f32 = -1.0;

/// Direction the player is facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left = -1,
    #[default]
    Right = 1,
}

impl Facing {
    /// -1.0 for left, 1.0 for right
    pub fn sign(&self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Physical state of the player.
///
/// Never both charging and thrusting; a non-zero charge timer implies
/// charging. Screen coordinates: +y points down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhysicsState {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub is_grounded: bool,
    pub is_applying_thrust: bool,
    pub is_charging_fly: bool,
    pub fly_charge_timer: u32,
    pub direction: Facing,
}

impl PhysicsState {
    /// Idle state standing at (x, y)
    pub fn grounded_at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            is_grounded: true,
            ..Self::default()
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.vx, self.vy)
    }

    /// Which flight phase the state is in
    pub fn flight_phase(&self) -> FlightPhase {
        if self.is_charging_fly {
            FlightPhase::Charging
        } else if self.is_applying_thrust {
            FlightPhase::Thrusting
        } else {
            FlightPhase::Idle
        }
    }
}

/// The three phases of the flight cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightPhase {
    Idle,
    Charging,
    Thrusting,
}

/// Partial physics state for [`PhysicsEngine::reset`].
/// `None` fields are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhysicsStatePatch {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub vx: Option<f32>,
    pub vy: Option<f32>,
    pub is_grounded: Option<bool>,
    pub is_applying_thrust: Option<bool>,
    pub is_charging_fly: Option<bool>,
    pub fly_charge_timer: Option<u32>,
    pub direction: Option<Facing>,
}

impl PhysicsStatePatch {
    /// Patch for a respawn: new position, at rest, flight cycle cleared
    pub fn respawn_at(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            vx: Some(0.0),
            vy: Some(0.0),
            is_grounded: Some(false),
            is_applying_thrust: Some(false),
            is_charging_fly: Some(false),
            fly_charge_timer: Some(0),
            direction: None,
        }
    }

    fn apply(&self, state: &mut PhysicsState) {
        fn merge<T: Copy>(field: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *field = value;
            }
        }

        merge(&mut state.x, self.x);
        merge(&mut state.y, self.y);
        merge(&mut state.vx, self.vx);
        merge(&mut state.vy, self.vy);
        merge(&mut state.is_grounded, self.is_grounded);
        merge(&mut state.is_applying_thrust, self.is_applying_thrust);
        merge(&mut state.is_charging_fly, self.is_charging_fly);
        merge(&mut state.fly_charge_timer, self.fly_charge_timer);
        merge(&mut state.direction, self.direction);
    }
}

/// Integrates player intentions into physical state, one tick at a time
#[derive(Debug, Clone)]
pub struct PhysicsEngine {
    config: PhysicsConfig,
    state: PhysicsState,
}

impl PhysicsEngine {
    pub fn new(config: PhysicsConfig, initial: PhysicsState) -> Self {
        Self {
            config,
            state: initial,
        }
    }

    /// Advance one tick.
    ///
    /// `has_energy` gates thrust; running dry cancels thrust but leaves a
    /// charge in progress alone.
    pub fn update(&mut self, intentions: &PlayerIntentions, has_energy: bool) {
        self.update_horizontal(intentions);
        self.update_flight(intentions, has_energy);

        // Charging holds the player in place
        if !self.state.is_charging_fly {
            self.state.vy += self.config.gravity;
        }

        // Only upward speed is capped
        self.state.vy = self.state.vy.max(-self.config.max_upward_speed);

        self.state.x += self.state.vx;
        self.state.y += self.state.vy;
    }

    fn update_horizontal(&mut self, intentions: &PlayerIntentions) {
        // Left wins when both are held
        if intentions.move_left {
            self.state.vx = -self.config.player_speed;
            self.state.direction = Facing::Left;
        } else if intentions.move_right {
            self.state.vx = self.config.player_speed;
            self.state.direction = Facing::Right;
        } else {
            self.state.vx = 0.0;
        }
    }

    fn update_flight(&mut self, intentions: &PlayerIntentions, has_energy: bool) {
        let state = &mut self.state;

        if intentions.wants_to_fly
            && state.is_grounded
            && !state.is_applying_thrust
            && !state.is_charging_fly
        {
            state.is_charging_fly = true;
            state.vy = CHARGE_IMPULSE;
            log::debug!("Flight charge started at ({:.1}, {:.1})", state.x, state.y);
        } else if !intentions.wants_to_fly {
            if state.is_charging_fly || state.is_applying_thrust {
                log::debug!("Flight released ({:?})", state.flight_phase());
            }
            state.is_charging_fly = false;
            state.fly_charge_timer = 0;
            state.is_applying_thrust = false;
        } else if state.is_charging_fly {
            state.fly_charge_timer += 1;
            state.vy = 0.0;
            if state.fly_charge_timer >= self.config.fly_charge_time {
                state.is_charging_fly = false;
                state.fly_charge_timer = 0;
                state.is_applying_thrust = true;
                log::debug!("Flight charge complete, thrusting");
            }
        } else if !state.is_grounded && has_energy {
            state.is_applying_thrust = true;
        }

        if state.is_applying_thrust && has_energy {
            state.vy -= self.config.thrust_power;
        } else {
            if state.is_applying_thrust {
                log::debug!("Thrust cut: out of energy");
            }
            state.is_applying_thrust = false;
        }
    }

    /// Snapshot of the current state
    pub fn get_state(&self) -> PhysicsState {
        self.state
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Set by the collision resolver
    pub fn set_grounded(&mut self, grounded: bool) {
        self.state.is_grounded = grounded;
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.state.x = x;
        self.state.y = y;
    }

    pub fn set_velocity(&mut self, vx: f32, vy: f32) {
        self.state.vx = vx;
        self.state.vy = vy;
    }

    /// Overwrite the fields present in `patch`
    pub fn reset(&mut self, patch: PhysicsStatePatch) {
        patch.apply(&mut self.state);
    }
}
