//! Day allocation: positional split of the POI pool into per-day buckets.

/// Smallest bucket the allocator aims for.
const MIN_PER_DAY: usize = 2;

/// Split `pois` into at most `num_days` consecutive buckets.
///
/// Buckets hold `max(2, ceil(len / num_days))` items, preserving input
/// order. A final bucket of fewer than two items is merged into the one
/// before it. `num_days == 0` yields a single bucket with everything.
pub fn allocate<T: Clone>(pois: &[T], num_days: usize) -> Vec<Vec<T>> {
    if num_days == 0 {
        return vec![pois.to_vec()];
    }

    let per_day = pois.len().div_ceil(num_days).max(MIN_PER_DAY);
    let mut buckets: Vec<Vec<T>> = pois
        .chunks(per_day)
        .take(num_days)
        .map(<[T]>::to_vec)
        .collect();

    if buckets.len() > 1 && buckets.last().is_some_and(|last| last.len() < MIN_PER_DAY) {
        if let Some(last) = buckets.pop() {
            if let Some(previous) = buckets.last_mut() {
                previous.extend(last);
            }
        }
    }

    buckets
}
