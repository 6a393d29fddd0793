use crate::range::PrimeRange;
use std::ops::RangeInclusive;

/// Split a range into contiguous, disjoint, non-empty partitions.
///
/// `parts` is clamped to `1..=range.len()`. Partition sizes differ by at most
/// one; the leading partitions take the remainder. The returned plan is in
/// ascending order and covers `[low, high]` exactly once.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn partition(range: &PrimeRange, parts: usize) -> Vec<RangeInclusive<i64>> {
    let len = range.len();
    let parts = u64::try_from(parts).unwrap_or(u64::MAX).clamp(1, len);
    let base = len / parts;
    let extra = len % parts;

    let mut plan = Vec::with_capacity(parts as usize);
    let mut start = range.low();
    for index in 0..parts {
        let size = base + u64::from(index < extra);
        // size <= len <= i64::MAX + 1, so size - 1 fits in i64
        let end = start + (size - 1) as i64;
        debug_assert!(range.contains(start) && range.contains(end));
        plan.push(start..=end);
        // the last end may be i64::MAX
        start = end.saturating_add(1);
    }
    debug_assert_eq!(plan.last().map(|p| *p.end()), Some(range.high()));
    plan
}
