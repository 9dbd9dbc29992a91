//! Spin delay utilities for hardware bring-up (CPU-speed dependent).

#[inline]
pub fn delay_us(us: u32) {
    for _ in 0..(us as u64 * 100) {
        core::hint::spin_loop();
    }
}

/// Bound on a status poll: how often to look and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    pub max_polls: u32,
    pub interval_us: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_polls: 100_000,
            interval_us: 1,
        }
    }
}

pub struct SpinWhile<F>
where
    F: Fn() -> bool,
{
    condition: F,
}

impl<F> SpinWhile<F>
where
    F: Fn() -> bool,
{
    #[must_use]
    pub fn new(condition: F) -> Self {
        Self { condition }
    }

    /// Spins until the condition clears. Returns how many polls saw it set,
    /// or `None` once `max_polls` is exhausted.
    pub fn wait(&self, poll: PollConfig) -> Option<u32> {
        for n in 0..poll.max_polls {
            if !(self.condition)() {
                return Some(n);
            }
            if poll.interval_us > 0 {
                delay_us(poll.interval_us);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    const FAST: PollConfig = PollConfig {
        max_polls: 8,
        interval_us: 0,
    };

    #[test]
    fn test_clear_immediately() {
        assert_eq!(SpinWhile::new(|| false).wait(FAST), Some(0));
    }

    #[test]
    fn test_clears_after_polls() {
        let left = Cell::new(3u32);
        let busy = || {
            let n = left.get();
            left.set(n.saturating_sub(1));
            n > 0
        };
        assert_eq!(SpinWhile::new(busy).wait(FAST), Some(3));
    }

    #[test]
    fn test_times_out() {
        let polls = Cell::new(0u32);
        let busy = || {
            polls.set(polls.get() + 1);
            true
        };
        assert_eq!(SpinWhile::new(busy).wait(FAST), None);
        assert_eq!(polls.get(), FAST.max_polls);
    }

    #[test]
    fn test_zero_budget() {
        let poll = PollConfig {
            max_polls: 0,
            interval_us: 1,
        };
        assert_eq!(SpinWhile::new(|| false).wait(poll), None);
    }
}
