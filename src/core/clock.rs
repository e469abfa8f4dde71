//! Timed flags sampled against the simulation clock.
//!
//! Every timer in the game (attack locks, invulnerability, hit-stun, switch
//! debounce) is a flag stamped with the tick-clock instant it was raised.
//! Nothing is scheduled: each tick the owner polls the flag and it drops once
//! the elapsed time since the stamp reaches its duration.

use std::time::Duration;

/// A flag that expires a fixed duration after it was raised.
///
/// A lowered flag carries no stamp, so polling it before first use is a
/// no-op instead of a comparison against a meaningless instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedFlag {
    duration: Duration,
    raised_at: Option<Duration>,
}

impl TimedFlag {
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            raised_at: None,
        }
    }

    pub const fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn is_raised(&self) -> bool {
        self.raised_at.is_some()
    }

    /// Raise the flag, (re)stamping it with `now`.
    pub fn raise(&mut self, now: Duration) {
        self.raised_at = Some(now);
    }

    pub fn lower(&mut self) {
        self.raised_at = None;
    }

    /// Time since the flag was raised, `None` while lowered.
    pub fn elapsed(&self, now: Duration) -> Option<Duration> {
        self.raised_at.map(|stamp| now.saturating_sub(stamp))
    }

    /// Lower the flag if its duration has passed.
    ///
    /// Returns `true` only on the tick the flag actually drops.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.elapsed(now) {
            Some(elapsed) if elapsed >= self.duration => {
                self.lower();
                true
            }
            _ => false,
        }
    }
}

/// Convert a millisecond setting into a `Duration`.
pub const fn millis(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowered_flag_never_expires() {
        let mut flag = TimedFlag::from_millis(400);
        assert!(!flag.is_raised());
        assert_eq!(flag.elapsed(millis(10_000)), None);
        assert!(!flag.poll(millis(10_000)));
    }

    #[test]
    fn flag_drops_exactly_at_duration() {
        let mut flag = TimedFlag::from_millis(400);
        flag.raise(millis(1_000));

        assert!(!flag.poll(millis(1_399)));
        assert!(flag.is_raised());

        assert!(flag.poll(millis(1_400)));
        assert!(!flag.is_raised());

        // Already lowered, nothing more to report.
        assert!(!flag.poll(millis(1_500)));
    }

    #[test]
    fn raising_again_restamps() {
        let mut flag = TimedFlag::from_millis(300);
        flag.raise(millis(0));
        flag.raise(millis(200));

        assert!(!flag.poll(millis(400)));
        assert!(flag.poll(millis(500)));
    }

    #[test]
    fn clock_running_backwards_saturates() {
        let flag = {
            let mut flag = TimedFlag::from_millis(300);
            flag.raise(millis(500));
            flag
        };
        assert_eq!(flag.elapsed(millis(100)), Some(Duration::ZERO));
    }
}
