//! egui side of the simulator: the canvas surface, the log console and
//! frame pacing.

pub mod console;
pub mod painter;

/// Decides when the next simulation tick is due so the simulation runs at
/// a fixed rate no matter how often egui repaints.
#[derive(Clone, Copy, Debug)]
pub struct FramePacer {
    interval: f64,
    last: Option<f64>,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        Self {
            interval: 1.0 / fps.max(1) as f64,
            last: None,
        }
    }
    pub fn interval(&self) -> f64 {
        self.interval
    }
    /// Returns true and remembers `now` (in seconds) if a whole interval has
    /// passed since the last tick.
    pub fn due(&mut self, now: f64) -> bool {
        match self.last {
            Some(last) if now - last < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
    /// Time left until the next tick.
    pub fn remaining(&self, now: f64) -> f64 {
        self.last
            .map_or(0.0, |last| (last + self.interval - now).max(0.0))
    }
}
