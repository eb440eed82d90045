//! Rating - Star Fill and Review Distribution

/// Maximum number of stars drawn for any rating
pub const MAX_STARS: u8 = 5;

/// Scale a score is expressed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingScale {
    /// 0–5, one point per star
    FivePoint,
    /// 0–10, two points per star
    TenPoint,
}

/// Number of filled stars out of [`MAX_STARS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarFill {
    pub filled: u8,
}

impl StarFill {
    /// Derive the fill for a score on the given scale
    ///
    /// Ten-point scores fill `round(score / 2)` stars; five-point scores fill
    /// every star whose 1-based position is at most the score.
    pub fn from_score(score: f32, scale: RatingScale) -> Self {
        let score = if score.is_finite() { score.max(0.0) } else { 0.0 };
        let filled = match scale {
            RatingScale::TenPoint => (score / 2.0).round(),
            RatingScale::FivePoint => score.floor(),
        };
        Self {
            filled: (filled as u8).min(MAX_STARS),
        }
    }

    /// Whether the star at 0-based `index` is filled
    pub fn is_filled(self, index: u8) -> bool {
        index < self.filled
    }
}

/// Review counts per star level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingDistribution {
    /// `counts[0]` is one-star reviews, `counts[4]` five-star
    pub counts: [u32; 5],
}

/// One row of a rating breakdown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionRow {
    pub stars: u8,
    pub count: u32,
    /// Share of all reviews, whole percent
    pub percent: f32,
}

impl RatingDistribution {
    /// Build from counts listed five stars first, as they are displayed
    pub fn from_five_down(counts: [u32; 5]) -> Self {
        let [five, four, three, two, one] = counts;
        Self {
            counts: [one, two, three, four, five],
        }
    }

    /// Summed in `u64` so any set of `u32` counts is representable
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&count| u64::from(count)).sum()
    }

    /// Average star rating to one decimal place, 0 when there are no reviews
    pub fn average(&self) -> f32 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let weighted: u64 = self
            .counts
            .iter()
            .zip(1u64..)
            .map(|(&count, stars)| stars * u64::from(count))
            .sum();
        ((weighted as f64 / total as f64 * 10.0).round() / 10.0) as f32
    }

    /// Rows from five stars down to one
    pub fn rows(&self) -> Vec<DistributionRow> {
        let total = self.total();
        (1..=MAX_STARS)
            .rev()
            .map(|stars| {
                let count = self.counts[usize::from(stars - 1)];
                let percent = if total == 0 {
                    0.0
                } else {
                    (f64::from(count) / total as f64 * 100.0).round() as f32
                };
                DistributionRow {
                    stars,
                    count,
                    percent,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_point_scores_round_half_up() {
        assert_eq!(StarFill::from_score(8.5, RatingScale::TenPoint).filled, 4);
        assert_eq!(StarFill::from_score(9.0, RatingScale::TenPoint).filled, 5);
        assert_eq!(StarFill::from_score(5.0, RatingScale::TenPoint).filled, 3);
        assert_eq!(StarFill::from_score(0.0, RatingScale::TenPoint).filled, 0);
    }

    #[test]
    fn five_point_scores_compare_directly() {
        let fill = StarFill::from_score(4.0, RatingScale::FivePoint);
        assert_eq!(fill.filled, 4);
        assert!(fill.is_filled(3));
        assert!(!fill.is_filled(4));
        assert_eq!(StarFill::from_score(3.7, RatingScale::FivePoint).filled, 3);
    }

    #[test]
    fn fill_is_clamped() {
        assert_eq!(StarFill::from_score(14.0, RatingScale::TenPoint).filled, 5);
        assert_eq!(StarFill::from_score(-2.0, RatingScale::FivePoint).filled, 0);
        assert_eq!(StarFill::from_score(f32::NAN, RatingScale::FivePoint).filled, 0);
    }

    #[test]
    fn distribution_average_and_rows() {
        let dist = RatingDistribution::from_five_down([6, 3, 1, 0, 0]);
        assert_eq!(dist.total(), 10);
        assert_eq!(dist.average(), 4.5);

        let rows = dist.rows();
        assert_eq!(rows[0].stars, 5);
        assert_eq!(rows[0].percent, 60.0);
        assert_eq!(rows[4].stars, 1);
        assert_eq!(rows[4].percent, 0.0);
    }

    #[test]
    fn empty_distribution_is_all_zero() {
        let dist = RatingDistribution::default();
        assert_eq!(dist.average(), 0.0);
        assert!(dist.rows().iter().all(|row| row.percent == 0.0));
    }

    #[test]
    fn huge_counts_do_not_overflow() {
        let dist = RatingDistribution::from_five_down([1_000_000_000, 0, 0, 0, 0]);
        assert_eq!(dist.average(), 5.0);
        assert_eq!(dist.rows()[0].percent, 100.0);

        let dist = RatingDistribution::from_five_down([u32::MAX, 1, 0, 0, 0]);
        assert_eq!(dist.total(), u64::from(u32::MAX) + 1);
        assert_eq!(dist.average(), 5.0);
        assert_eq!(dist.rows()[0].percent, 100.0);
        assert_eq!(dist.rows()[1].percent, 0.0);

        let dist = RatingDistribution::from_five_down([u32::MAX; 5]);
        assert_eq!(dist.average(), 3.0);
        assert!(dist.rows().iter().all(|row| row.percent == 20.0));
    }
}
