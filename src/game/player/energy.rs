// Jetpack energy - gates thrust

use super::stats::EnergyConfig;

#[derive(Debug, Clone)]
pub struct EnergyPool {
    config: EnergyConfig,
    current: f32,
}

impl EnergyPool {
    /// Create a full pool
    pub fn new(config: EnergyConfig) -> Self {
        Self {
            current: config.capacity,
            config,
        }
    }

    /// Whether thrust may be applied this tick
    pub fn has_energy(&self) -> bool {
        self.current > 0.0
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    /// Fill level in [0, 1]
    pub fn fraction(&self) -> f32 {
        self.current / self.config.capacity
    }

    /// Drain while thrusting, recharge while resting on the ground
    pub fn tick(&mut self, thrusting: bool, grounded: bool) {
        let was_empty = !self.has_energy();

        if thrusting {
            self.current -= self.config.drain_per_tick;
        } else if grounded {
            self.current += self.config.recharge_per_tick;
        }
        self.current = self.current.clamp(0.0, self.config.capacity);

        if !was_empty && !self.has_energy() {
            log::debug!("Jetpack energy depleted");
        }
    }

    pub fn refill(&mut self) {
        self.current = self.config.capacity;
    }
}

impl Default for EnergyPool {
    fn default() -> Self {
        Self::new(EnergyConfig::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn small_pool() -> EnergyPool {
        EnergyPool::new(EnergyConfig {
            capacity: 2.0,
            drain_per_tick: 1.0,
            recharge_per_tick: 0.5,
        })
    }

    #[test]
    fn test_starts_full() {
        let pool = small_pool();
        assert!(pool.has_energy());
        assert_relative_eq!(pool.fraction(), 1.0);
    }

    #[test]
    fn test_drains_while_thrusting() {
        let mut pool = small_pool();
        pool.tick(true, false);
        assert!(pool.has_energy());
        pool.tick(true, false);
        assert!(!pool.has_energy());

        // Never goes negative
        pool.tick(true, false);
        assert_eq!(pool.current(), 0.0);
    }

    #[test]
    fn test_recharges_only_on_ground() {
        let mut pool = small_pool();
        pool.tick(true, false);
        pool.tick(true, false);

        pool.tick(false, false);
        assert!(!pool.has_energy());

        pool.tick(false, true);
        assert_relative_eq!(pool.current(), 0.5);
    }

    #[test]
    fn test_recharge_caps_at_capacity() {
        let mut pool = small_pool();
        for _ in 0..10 {
            pool.tick(false, true);
        }
        assert_relative_eq!(pool.current(), 2.0);
    }

    #[test]
    fn test_refill() {
        let mut pool = small_pool();
        pool.tick(true, false);
        pool.refill();
        assert_relative_eq!(pool.fraction(), 1.0);
    }
}
