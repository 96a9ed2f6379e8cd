//! Dimension evaluation and score aggregation.

pub mod aggregate;
pub mod dimensions;
pub mod handlers;

/// Rounds to one decimal place, the precision used for every published
/// score.
pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
