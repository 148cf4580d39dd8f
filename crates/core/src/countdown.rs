/// Seconds on the clock when a quiz starts, unless configured otherwise.
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 60;

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Time was taken off the clock and some is left.
    Running { remaining: u32 },
    /// This tick took the clock to zero. Reported once per run.
    Expired,
    /// The countdown is stopped; nothing changed.
    Idle,
}

/// Whole-second countdown behind the quiz timer.
///
/// Pure state: the host decides when a second has passed and calls
/// [`Countdown::tick`]. Once the clock reaches zero or is stopped, further
/// ticks are no-ops until [`Countdown::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    initial: u32,
    remaining: u32,
    running: bool,
}

impl Countdown {
    #[must_use]
    pub fn new(initial: u32) -> Self {
        Self {
            initial,
            remaining: initial,
            running: initial > 0,
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            return TickOutcome::Expired;
        }
        TickOutcome::Running {
            remaining: self.remaining,
        }
    }

    /// Freeze the clock where it is.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Put the initial time back on the clock and start running again.
    pub fn reset(&mut self) {
        *self = Self::new(self.initial);
    }

    #[must_use]
    pub fn initial(&self) -> u32 {
        self.initial
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn elapsed(&self) -> u32 {
        self.initial - self.remaining
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_LIMIT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_once_after_initial_ticks() {
        let mut countdown = Countdown::default();
        let mut expired = 0;
        for _ in 0..60 {
            if countdown.tick() == TickOutcome::Expired {
                expired += 1;
            }
        }
        assert_eq!(expired, 1);
        assert_eq!(countdown.remaining(), 0);
        assert!(!countdown.is_running());

        for _ in 0..5 {
            assert_eq!(countdown.tick(), TickOutcome::Idle);
        }
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn stop_freezes_remaining() {
        let mut countdown = Countdown::new(10);
        assert_eq!(countdown.tick(), TickOutcome::Running { remaining: 9 });
        countdown.stop();
        assert_eq!(countdown.tick(), TickOutcome::Idle);
        assert_eq!(countdown.remaining(), 9);
        assert_eq!(countdown.elapsed(), 1);
    }

    #[test]
    fn reset_restarts_from_initial() {
        let mut countdown = Countdown::new(2);
        countdown.tick();
        countdown.tick();
        countdown.reset();
        assert_eq!(countdown, Countdown::new(2));
        assert!(countdown.is_running());
    }
}
