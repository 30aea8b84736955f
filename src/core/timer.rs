/// One-shot delay driven by frame deltas
///
/// Nothing happens until `start`; `tick` then accumulates elapsed seconds and
/// returns true exactly once, on the tick that crosses the duration.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    duration: f32,
    elapsed: f32,
    active: bool,
}

impl Countdown {
    /// Create inactive countdown
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            active: false,
        }
    }

    /// Start (or restart) from zero
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.active = true;
    }

    /// Tick with delta, returns true if completed
    pub fn tick(&mut self, delta: f32) -> bool {
        if !self.active {
            return false;
        }

        self.elapsed += delta.max(0.0);

        if self.elapsed >= self.duration {
            self.active = false;
            true
        } else {
            false
        }
    }
}
