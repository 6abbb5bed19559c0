// Fixed-timestep tick clock
//
// The simulation advances in whole ticks at a constant rate no matter how
// fast frames are presented. Each frame asks how many ticks are due.

use std::time::{Duration, Instant};

/// Simulation rate
pub const TICKS_PER_SECOND: u32 = 60;
pub const TICK_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Most ticks run in one frame; a longer stall drops the backlog
const MAX_TICKS_PER_FRAME: u32 = 5;

pub struct GameLoop {
    /// Time owed to the simulation
    accumulator: Duration,

    last_frame_time: Instant,

    paused: bool,

    /// Ticks run since start
    tick: u64,

    frame_count: u64,
}

impl GameLoop {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Start the clock at a given instant
    pub fn starting_at(now: Instant) -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: now,
            paused: false,
            tick: 0,
            frame_count: 0,
        }
    }

    /// Begin a frame at `now`, returning how many ticks to simulate
    pub fn begin_frame(&mut self, now: Instant) -> u32 {
        let frame_time = now.saturating_duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= TICK_DURATION && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= TICK_DURATION;
            ticks += 1;
        }

        if ticks == MAX_TICKS_PER_FRAME && self.accumulator >= TICK_DURATION {
            log::warn!(
                "Simulation fell behind, dropping {:?} of backlog",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        self.tick += ticks as u64;
        ticks
    }

    /// Ticks simulated so far
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Simulated time in seconds
    pub fn simulated_secs(&self) -> f32 {
        self.tick as f32 / TICKS_PER_SECOND as f32
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused at tick {}", self.tick);
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Don't replay the time spent paused
            self.accumulator = Duration::ZERO;
            log::info!("Game resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
