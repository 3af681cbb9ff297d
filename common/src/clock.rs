//! Time source for the simulation loop.
//!
//! The lab never reads a platform clock itself. The simulator passes a
//! wall-clock implementation; tests drive a [`ManualClock`] so whole heating
//! and cooling runs execute deterministically without a display.

use core::cell::Cell;

/// Monotonic millisecond time source.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin.
    fn now_ms(&self) -> u64;
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub const fn new(start_ms: u64) -> Self { Self { now: Cell::new(start_ms) } }

    /// Move the clock forward by `ms` milliseconds.
    pub fn advance(
        &self,
        ms: u64,
    ) {
        self.now.set(self.now.get() + ms);
    }

    /// Jump to an absolute time.
    pub fn set(
        &self,
        ms: u64,
    ) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 { self.now.get() }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 { (**self).now_ms() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advance() {
        let clock = ManualClock::new(1_000);
        assert_eq!(clock.now_ms(), 1_000);
        clock.advance(16);
        clock.advance(16);
        assert_eq!(clock.now_ms(), 1_032);
    }

    #[test]
    fn test_manual_clock_set() {
        let clock = ManualClock::default();
        clock.set(42);
        assert_eq!(clock.now_ms(), 42);
    }

    #[test]
    fn test_clock_by_reference() {
        fn read<C: Clock>(clock: C) -> u64 { clock.now_ms() }

        let clock = ManualClock::new(7);
        assert_eq!(read(&clock), 7);
    }
}
