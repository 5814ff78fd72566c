//! Time abstractions
//!
//! The host keeps a millisecond counter and can block the module. Both are
//! coarse: there is no sub-millisecond resolution across the boundary.

/// Host-tracked elapsed time
pub trait Clock {
    /// Milliseconds since an unspecified epoch
    ///
    /// Monotonic, wraps at `u32::MAX` (about 49.7 days).
    fn millis(&self) -> u32;
}

/// Blocking delay
pub trait Delay {
    /// Block for approximately `ms` milliseconds
    ///
    /// A duration of zero is permitted and may return immediately.
    fn delay_ms(&mut self, ms: u32);
}

/// Milliseconds from `earlier` to `now`, correct across one counter wrap
#[inline]
pub const fn elapsed_since(now: u32, earlier: u32) -> u32 {
    now.wrapping_sub(earlier)
}

impl<T: Clock + ?Sized> Clock for &T {
    fn millis(&self) -> u32 {
        T::millis(self)
    }
}

impl<T: Clock + ?Sized> Clock for &mut T {
    fn millis(&self) -> u32 {
        T::millis(self)
    }
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        T::delay_ms(self, ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_without_wrap() {
        assert_eq!(elapsed_since(1_000, 100), 900);
        assert_eq!(elapsed_since(5, 5), 0);
    }

    #[test]
    fn test_elapsed_across_wrap() {
        let earlier = u32::MAX - 49;
        let now = 50;
        assert_eq!(elapsed_since(now, earlier), 100);
    }
}
