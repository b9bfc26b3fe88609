// ABOUTME: Per-proposal rating aggregation with systemic consensing bounds
// ABOUTME: Keeps at most one rating per voter and exposes the rounded mean

use crate::{PnyxError, Result};
use std::collections::HashMap;

/// Lowest accepted rating value
pub const RATING_MIN: i32 = -5;
/// Highest accepted rating value
pub const RATING_MAX: i32 = 5;

/// Per-proposal rating state.
///
/// Each voter holds at most one rating; rating again replaces the stored
/// value. Ratings cannot be withdrawn.
#[derive(Debug, Default, Clone)]
pub struct RatingAggregator {
    ratings: HashMap<String, i32>,
}

impl RatingAggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the voter's rating and return the new mean.
    ///
    /// Fails with [`PnyxError::InvalidRating`] when `value` is outside
    /// [`RATING_MIN`]..=[`RATING_MAX`]; the stored state is untouched.
    pub fn rate(&mut self, voter: &str, value: i32) -> Result<i32> {
        if !(RATING_MIN..=RATING_MAX).contains(&value) {
            return Err(PnyxError::InvalidRating { value });
        }
        self.ratings.insert(voter.to_string(), value);
        Ok(self.mean())
    }

    /// Arithmetic mean of stored ratings, rounded to the nearest integer
    /// with ties away from zero. 0 when no ratings exist.
    pub fn mean(&self) -> i32 {
        if self.ratings.is_empty() {
            return 0;
        }
        let sum: i64 = self.ratings.values().map(|&v| i64::from(v)).sum();
        // f64::round ties away from zero, which is the documented rule.
        (sum as f64 / self.ratings.len() as f64).round() as i32
    }

    /// Sum of all stored ratings (the systemic consensing score)
    pub fn total(&self) -> i64 {
        self.ratings.values().map(|&v| i64::from(v)).sum()
    }

    /// Number of voters with a stored rating
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    /// True when no voter has rated yet
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mean_is_zero() {
        let agg = RatingAggregator::new();
        assert_eq!(agg.mean(), 0);
        assert!(agg.is_empty());
    }

    #[test]
    fn test_bounds_accept_extremes() {
        let mut agg = RatingAggregator::new();
        assert_eq!(agg.rate("ada", RATING_MIN).unwrap(), -5);
        assert_eq!(agg.rate("bob", RATING_MAX).unwrap(), 0);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut agg = RatingAggregator::new();
        assert!(matches!(
            agg.rate("ada", 6),
            Err(PnyxError::InvalidRating { value: 6 })
        ));
        assert!(matches!(
            agg.rate("ada", -6),
            Err(PnyxError::InvalidRating { value: -6 })
        ));
        // Failed rate must not leave partial state behind.
        assert!(agg.is_empty());
    }

    #[test]
    fn test_rerate_replaces_previous_value() {
        let mut agg = RatingAggregator::new();
        agg.rate("ada", -3).unwrap();
        let mean = agg.rate("ada", 4).unwrap();
        assert_eq!(agg.len(), 1);
        assert_eq!(mean, 4);
        assert_eq!(agg.total(), 4);
    }

    #[test]
    fn test_mean_of_three_voters() {
        let mut agg = RatingAggregator::new();
        agg.rate("ada", 3).unwrap();
        agg.rate("bob", -2).unwrap();
        let mean = agg.rate("cyd", 5).unwrap();
        // round((3 - 2 + 5) / 3) = round(2.0) = 2
        assert_eq!(mean, 2);
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        let mut agg = RatingAggregator::new();
        agg.rate("ada", 1).unwrap();
        assert_eq!(agg.rate("bob", 2).unwrap(), 2); // 1.5 -> 2

        let mut neg = RatingAggregator::new();
        neg.rate("ada", -1).unwrap();
        assert_eq!(neg.rate("bob", -2).unwrap(), -2); // -1.5 -> -2
    }
}
