//! # CampusBot Capabilities
//!
//! File: cli/src/assistant/capabilities.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The only nondeterministic inputs of the assistant are the wall clock (for
//! the date/time answer) and a random draw (for the joke answer). Both are
//! reached through the small traits below so callers can swap in fixed values.
//!
//! - `Clock`: `SystemClock` reads local time; `FixedClock` always returns the same instant.
//! - `RandomSource`: `ThreadRandom` draws uniformly; `FixedRandom` always picks the same index.
//!
use chrono::{Local, NaiveDateTime};
use rand::Rng;

/// Source of the current date and time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Picks an index into a non-empty list.
pub trait RandomSource: Send + Sync {
    /// Returns a value in `0..len`. `len` of zero yields `0`.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform picks from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always picks the same index (wrapped into range).
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub usize);

impl RandomSource for FixedRandom {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.0 % len
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_thread_random_stays_in_range() {
        let source = ThreadRandom;
        for _ in 0..100 {
            assert!(source.pick(3) < 3);
        }
        assert_eq!(source.pick(0), 0);
    }

    #[test]
    fn test_fixed_random_wraps() {
        assert_eq!(FixedRandom(5).pick(2), 1);
        assert_eq!(FixedRandom(0).pick(4), 0);
        assert_eq!(FixedRandom(7).pick(0), 0);
    }

    #[test]
    fn test_fixed_clock_returns_instant() {
        let instant = NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .expect("valid date");
        assert_eq!(FixedClock(instant).now(), instant);
    }
}
