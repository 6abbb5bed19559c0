use crate::core::math::Rect;
use crate::game::player::PhysicsEngine;

/// What kind of thing a collider is, so the other side can decide how to react
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionLayer {
    /// Player characters
    Player,

    /// Projectiles (shots, bombs)
    Projectile,

    /// Static platforms and walls
    Platform,

    /// Level hazards (spikes, lava, etc.)
    Hazard,

    /// Pickups (energy cells)
    Pickup,
}

/// Geometry and reaction hook an entity exposes to collision handling.
/// Entities do not resolve collisions themselves.
pub trait Collider {
    /// Current hitbox
    fn bounds(&self) -> Rect;

    fn layer(&self) -> CollisionLayer;

    /// React to touching `other`
    fn on_collision(&mut self, _other: &dyn Collider) {}
}

/// Resolves an entity's hitbox against level geometry after integration,
/// pushing corrections back through the physics setters
pub trait CollisionResolver {
    fn resolve(&self, bounds: Rect, physics: &mut PhysicsEngine);
}

/// Resolver for open space: nothing to hit, never grounded
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCollision;

impl CollisionResolver for NoCollision {
    fn resolve(&self, _bounds: Rect, physics: &mut PhysicsEngine) {
        physics.set_grounded(false);
    }
}

/// Call `entity.on_collision` for every collider it strictly overlaps.
/// Returns how many overlaps were reported.
pub fn notify_overlaps(entity: &mut dyn Collider, others: &[&dyn Collider]) -> usize {
    let bounds = entity.bounds();
    let mut count = 0;
    for other in others {
        if bounds.intersects(&other.bounds()) {
            entity.on_collision(*other);
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::player::{PhysicsConfig, PhysicsState};

    struct Block {
        rect: Rect,
        layer: CollisionLayer,
        hits: Vec<CollisionLayer>,
    }

    impl Block {
        fn new(rect: Rect, layer: CollisionLayer) -> Self {
            Self {
                rect,
                layer,
                hits: Vec::new(),
            }
        }
    }

    impl Collider for Block {
        fn bounds(&self) -> Rect {
            self.rect
        }

        fn layer(&self) -> CollisionLayer {
            self.layer
        }

        fn on_collision(&mut self, other: &dyn Collider) {
            self.hits.push(other.layer());
        }
    }

    #[test]
    fn test_notify_only_overlapping() {
        let mut player = Block::new(Rect::new(0.0, 0.0, 10.0, 10.0), CollisionLayer::Player);
        let cell = Block::new(Rect::new(5.0, 5.0, 4.0, 4.0), CollisionLayer::Pickup);
        let far = Block::new(Rect::new(50.0, 0.0, 4.0, 4.0), CollisionLayer::Hazard);
        let touching = Block::new(Rect::new(10.0, 0.0, 4.0, 4.0), CollisionLayer::Hazard);

        let count = notify_overlaps(&mut player, &[&cell, &far, &touching]);
        assert_eq!(count, 1);
        assert_eq!(player.hits, vec![CollisionLayer::Pickup]);
    }

    #[test]
    fn test_default_hook_is_noop() {
        struct Wall(Rect);
        impl Collider for Wall {
            fn bounds(&self) -> Rect {
                self.0
            }
            fn layer(&self) -> CollisionLayer {
                CollisionLayer::Platform
            }
        }

        let mut wall = Wall(Rect::new(0.0, 0.0, 1.0, 1.0));
        let other = Wall(Rect::new(0.5, 0.5, 1.0, 1.0));
        assert_eq!(notify_overlaps(&mut wall, &[&other]), 1);
    }

    #[test]
    fn test_no_collision_resolver_ungrounds() {
        let mut physics = PhysicsEngine::new(
            PhysicsConfig::standard(),
            PhysicsState::grounded_at(0.0, 0.0),
        );
        NoCollision.resolve(Rect::default(), &mut physics);
        assert!(!physics.get_state().is_grounded);
    }
}
