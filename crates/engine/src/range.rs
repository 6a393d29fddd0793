use crate::error::{EngineError, Result};
use std::ops::RangeInclusive;

/// Validated inclusive candidate range with `0 <= low < high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeRange {
    low: i64,
    high: i64,
}

impl PrimeRange {
    /// Validate the bounds.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRange`] when either bound is negative or
    /// when `low >= high`.
    pub fn new(low: i64, high: i64) -> Result<Self> {
        if low < 0 || high < 0 || low >= high {
            return Err(EngineError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    #[inline]
    #[must_use]
    pub const fn low(&self) -> i64 {
        self.low
    }

    #[inline]
    #[must_use]
    pub const fn high(&self) -> i64 {
        self.high
    }

    /// Number of candidates in the range. Never zero.
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::len_without_is_empty)]
    pub const fn len(&self) -> u64 {
        // both bounds are non-negative, so the difference fits
        (self.high - self.low) as u64 + 1
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, value: i64) -> bool {
        value >= self.low && value <= self.high
    }

    #[must_use]
    pub fn candidates(&self) -> RangeInclusive<i64> {
        self.low..=self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_bounds() {
        for (low, high) in [(-5, 10), (0, -1), (2, 2), (10, 3), (-3, -1)] {
            let err = PrimeRange::new(low, high).unwrap_err();
            assert!(
                matches!(err, EngineError::InvalidRange { low: l, high: h } if l == low && h == high),
                "({low}, {high}) accepted"
            );
        }
    }

    #[test]
    fn test_accepts_valid_bounds() {
        let range = PrimeRange::new(0, 1).unwrap();
        assert_eq!(range.len(), 2);
        assert_eq!(range.candidates().collect::<Vec<_>>(), vec![0, 1]);

        let range = PrimeRange::new(10, 20).unwrap();
        assert_eq!((range.low(), range.high()), (10, 20));
        assert_eq!(range.len(), 11);
        assert!(range.contains(10));
        assert!(range.contains(20));
        assert!(!range.contains(21));
    }

    #[test]
    fn test_full_width_length() {
        let range = PrimeRange::new(0, i64::MAX).unwrap();
        assert_eq!(range.len(), i64::MAX as u64 + 1);
    }
}
