//! Held-key repeat pacing
//!
//! Movement steps are discrete, so a held key needs an explicit cadence:
//! one step on press, a short delay, then steady repeats while the key
//! stays held. Mirrors OS keyboard auto-repeat.

/// Delay before repeats start, seconds
const REPEAT_DELAY: f32 = 0.25;

/// Interval between repeats once started, seconds
const REPEAT_INTERVAL: f32 = 0.09;

/// Paces a held input into discrete fire events
#[derive(Debug, Clone)]
pub struct RepeatGate {
    held_for: f32,
    /// Time at which the next repeat fires, or None before the first press
    next_fire: Option<f32>,
}

impl RepeatGate {
    pub fn new() -> Self {
        Self {
            held_for: 0.0,
            next_fire: None,
        }
    }

    /// Forget hold history (call when the held input set changes)
    pub fn reset(&mut self) {
        self.held_for = 0.0;
        self.next_fire = None;
    }

    /// Advance by `dt` with the input `held` or not; returns true when a
    /// step should fire this frame.
    pub fn fire(&mut self, held: bool, dt: f32) -> bool {
        if !held {
            self.reset();
            return false;
        }

        match self.next_fire {
            None => {
                // First frame of the hold: immediate step
                self.held_for = 0.0;
                self.next_fire = Some(REPEAT_DELAY);
                true
            }
            Some(next) => {
                self.held_for += dt;
                if self.held_for >= next {
                    self.next_fire = Some(next + REPEAT_INTERVAL);
                    true
                } else {
                    false
                }
            }
        }
    }
}

impl Default for RepeatGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_immediately_on_press() {
        let mut gate = RepeatGate::new();
        assert!(gate.fire(true, 0.016));
        assert!(!gate.fire(true, 0.016));
    }

    #[test]
    fn test_repeats_after_delay() {
        let mut gate = RepeatGate::new();
        assert!(gate.fire(true, 0.016));

        // Hold through the initial delay
        let mut fired = 0;
        let mut t = 0.0;
        while t < REPEAT_DELAY - 0.02 {
            assert!(!gate.fire(true, 0.016));
            t += 0.016;
        }
        // Then steady repeats
        for _ in 0..60 {
            if gate.fire(true, 0.016) {
                fired += 1;
            }
        }
        assert!(fired >= 8, "expected steady repeats, got {fired}");
    }

    #[test]
    fn test_release_resets() {
        let mut gate = RepeatGate::new();
        assert!(gate.fire(true, 0.016));
        assert!(!gate.fire(false, 0.016));
        // Press again: immediate step again
        assert!(gate.fire(true, 0.016));
    }
}
