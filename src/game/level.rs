// Platform level - static geometry, energy cells and the collision resolver

use crate::core::math::Rect;
use crate::game::collision::{notify_overlaps, Collider, CollisionLayer, CollisionResolver};
use crate::game::player::PhysicsEngine;

/// How far above a platform top a hitbox may hover and still count as
/// standing on it
const GROUND_PROBE: f32 = 0.5;

/// Solid, static piece of level geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub rect: Rect,
}

impl Collider for Platform {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn layer(&self) -> CollisionLayer {
        CollisionLayer::Platform
    }
}

/// Refills the jetpack when touched, once
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyCell {
    pub rect: Rect,
    pub collected: bool,
}

impl Collider for EnergyCell {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn layer(&self) -> CollisionLayer {
        CollisionLayer::Pickup
    }
}

#[derive(Debug, Clone)]
pub struct Level {
    platforms: Vec<Platform>,
    energy_cells: Vec<EnergyCell>,
    /// Where players (re)spawn; only x/y are used
    spawn: Rect,
    /// Anything whose top falls below this line is out of the level
    kill_line: f32,
}

impl Level {
    pub fn new(spawn: Rect) -> Self {
        Self {
            platforms: Vec::new(),
            energy_cells: Vec::new(),
            spawn,
            kill_line: f32::INFINITY,
        }
    }

    pub fn with_platform(mut self, rect: Rect) -> Self {
        self.platforms.push(Platform { rect });
        self
    }

    pub fn with_energy_cell(mut self, rect: Rect) -> Self {
        self.energy_cells.push(EnergyCell {
            rect,
            collected: false,
        });
        self
    }

    pub fn with_kill_line(mut self, y: f32) -> Self {
        self.kill_line = y;
        self
    }

    /// Small hand-built level for the desktop build
    pub fn test_arena() -> Self {
        Self::new(Rect::new(80.0, 300.0, 0.0, 0.0))
            // Ground with a gap in the middle
            .with_platform(Rect::new(0.0, 660.0, 560.0, 60.0))
            .with_platform(Rect::new(720.0, 660.0, 560.0, 60.0))
            // Side walls
            .with_platform(Rect::new(-40.0, 0.0, 40.0, 720.0))
            .with_platform(Rect::new(1280.0, 0.0, 40.0, 720.0))
            // Ledges
            .with_platform(Rect::new(200.0, 500.0, 180.0, 20.0))
            .with_platform(Rect::new(560.0, 380.0, 160.0, 20.0))
            .with_platform(Rect::new(900.0, 260.0, 200.0, 20.0))
            .with_energy_cell(Rect::new(630.0, 340.0, 16.0, 16.0))
            .with_energy_cell(Rect::new(1000.0, 220.0, 16.0, 16.0))
            .with_kill_line(900.0)
    }

    pub fn spawn_point(&self) -> (f32, f32) {
        (self.spawn.x, self.spawn.y)
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Whether a hitbox has fallen out of the level
    pub fn is_out_of_bounds(&self, bounds: &Rect) -> bool {
        bounds.top() > self.kill_line
    }

    /// Hand uncollected energy cells the entity overlaps to its collision
    /// hook and mark them collected. Returns how many were picked up.
    pub fn collect_pickups(&mut self, entity: &mut dyn Collider) -> usize {
        let mut collected = 0;
        for cell in self.energy_cells.iter_mut().filter(|cell| !cell.collected) {
            if notify_overlaps(entity, &[&*cell]) > 0 {
                cell.collected = true;
                collected += 1;
            }
        }
        collected
    }

    /// Energy cells still in play
    pub fn remaining_pickups(&self) -> usize {
        self.energy_cells.iter().filter(|cell| !cell.collected).count()
    }

    /// Put every energy cell back
    pub fn reset_pickups(&mut self) {
        for cell in &mut self.energy_cells {
            cell.collected = false;
        }
    }

    fn is_resting_on_platform(&self, bounds: &Rect) -> bool {
        self.platforms.iter().any(|platform| {
            bounds.overlaps_horizontally(&platform.rect)
                && (platform.rect.top() - bounds.bottom()).abs() <= GROUND_PROBE
        })
    }
}

impl CollisionResolver for Level {
    /// Push the hitbox out of every platform along the axis of least
    /// penetration, cancel velocity into the surface, then decide grounding.
    fn resolve(&self, bounds: Rect, physics: &mut PhysicsEngine) {
        let state = physics.get_state();
        let (mut vx, mut vy) = (state.vx, state.vy);
        let mut resolved = bounds;
        let mut landed = false;

        for platform in &self.platforms {
            let Some(push) = resolved.push_out(&platform.rect) else {
                continue;
            };
            resolved = resolved.translated(push.x, push.y);

            if push.x != 0.0 {
                vx = 0.0;
            } else if push.y < 0.0 {
                landed = true;
                vy = vy.min(0.0);
            } else {
                // Head bump
                vy = vy.max(0.0);
            }
        }

        let grounded = landed || (vy >= 0.0 && self.is_resting_on_platform(&resolved));

        if resolved != bounds {
            physics.set_position(
                state.x + (resolved.x - bounds.x),
                state.y + (resolved.y - bounds.y),
            );
        }
        physics.set_velocity(vx, vy);
        physics.set_grounded(grounded);
    }
}
