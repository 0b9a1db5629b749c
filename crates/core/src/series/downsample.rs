//! Lossy-but-faithful daily series downsampling.
//!
//! Naive uniform downsampling would smear or drop sparse billing and
//! adjustment spikes. This algorithm keeps every day with financial
//! activity unconditionally and spends the remaining point budget on an
//! evenly-spaced sample of the inactive (carry-forward) days. The budget is
//! a target, not a hard cap: when active days alone exceed it, all of them
//! are still emitted.

use super::error::SeriesError;
use crate::wip::types::DailyMetric;

/// Reduces a daily series to roughly `target_points` points.
///
/// Guarantees:
/// - every day with a non-zero category total appears unchanged;
/// - a series already within budget is returned exactly as given;
/// - the output is sorted chronologically.
///
/// # Errors
///
/// Returns [`SeriesError::InvalidTargetPoints`] when `target_points` is zero.
pub fn downsample(
    points: Vec<DailyMetric>,
    target_points: usize,
) -> Result<Vec<DailyMetric>, SeriesError> {
    if target_points == 0 {
        return Err(SeriesError::InvalidTargetPoints);
    }
    if points.len() <= target_points {
        return Ok(points);
    }

    let (active, idle): (Vec<DailyMetric>, Vec<DailyMetric>) =
        points.into_iter().partition(DailyMetric::has_activity);

    let remaining_slots = target_points.saturating_sub(active.len());

    let mut kept = active;
    if remaining_slots > 0 && !idle.is_empty() {
        kept.extend(sample_evenly(idle, remaining_slots));
    }

    kept.sort_by_key(|metric| metric.date);
    Ok(kept)
}

/// Takes an evenly-strided sample of `take` points, preserving order.
fn sample_evenly(points: Vec<DailyMetric>, take: usize) -> Vec<DailyMetric> {
    let len = points.len();
    if len <= take {
        return points;
    }

    // Index i*len/take is strictly increasing for len > take, so this picks
    // exactly `take` points spread across the whole input.
    let mut wanted = (0..take).map(|i| i * len / take);
    let mut next = wanted.next();

    let mut sampled = Vec::with_capacity(take);
    for (index, point) in points.into_iter().enumerate() {
        if Some(index) == next {
            sampled.push(point);
            next = wanted.next();
        }
    }
    sampled
}
