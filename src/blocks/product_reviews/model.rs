//! Product Reviews View-Model

use chrono::NaiveDate;

use crate::domain::date::ymd;
use crate::domain::rating::RatingDistribution;

/// Store reply shown under a review
#[derive(Debug, Clone, PartialEq)]
pub struct MerchantReply {
    pub author: String,
    pub body: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub author: String,
    pub avatar: Option<String>,
    /// Whole stars, 1 to 5
    pub rating: u8,
    pub title: String,
    pub body: String,
    pub date: NaiveDate,
    pub verified: bool,
    pub helpful_count: u32,
    pub merchant_reply: Option<MerchantReply>,
}

impl Review {
    pub fn shows_reply(&self) -> bool {
        self.merchant_reply.is_some()
    }
}

/// Review list ordering offered as tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewSort {
    #[default]
    MostRecent,
    HighestRated,
    LowestRated,
    MostHelpful,
}

impl ReviewSort {
    pub fn label(self) -> &'static str {
        match self {
            ReviewSort::MostRecent => "Most recent",
            ReviewSort::HighestRated => "Highest rated",
            ReviewSort::LowestRated => "Lowest rated",
            ReviewSort::MostHelpful => "Most helpful",
        }
    }

    pub fn all() -> &'static [ReviewSort] {
        &[
            ReviewSort::MostRecent,
            ReviewSort::HighestRated,
            ReviewSort::LowestRated,
            ReviewSort::MostHelpful,
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductReviewsProps {
    pub product_name: String,
    /// Counts over all reviews, not only the ones listed
    pub distribution: RatingDistribution,
    pub reviews: Vec<Review>,
}

impl ProductReviewsProps {
    pub fn total_reviews(&self) -> u64 {
        self.distribution.total()
    }

    pub fn average(&self) -> f32 {
        self.distribution.average()
    }

    /// Share of reviews with four or more stars, whole percent
    pub fn recommend_percent(&self) -> u32 {
        let total = self.total_reviews();
        if total == 0 {
            return 0;
        }
        let positive =
            u64::from(self.distribution.counts[3]) + u64::from(self.distribution.counts[4]);
        (positive as f64 / total as f64 * 100.0).round() as u32
    }

    /// Listed reviews in the requested order; ties keep the newest first
    pub fn sorted_reviews(&self, sort: ReviewSort) -> Vec<&Review> {
        let mut reviews: Vec<&Review> = self.reviews.iter().collect();
        reviews.sort_by(|a, b| b.date.cmp(&a.date));
        match sort {
            ReviewSort::MostRecent => {}
            ReviewSort::HighestRated => reviews.sort_by(|a, b| b.rating.cmp(&a.rating)),
            ReviewSort::LowestRated => reviews.sort_by(|a, b| a.rating.cmp(&b.rating)),
            ReviewSort::MostHelpful => {
                reviews.sort_by(|a, b| b.helpful_count.cmp(&a.helpful_count))
            }
        }
        reviews
    }

    pub fn sample() -> Self {
        Self {
            product_name: "Aurora Wireless Headphones".into(),
            distribution: RatingDistribution::from_five_down([812, 264, 71, 28, 19]),
            reviews: vec![
                Review {
                    id: "rev-1".into(),
                    author: "Olivia Martin".into(),
                    avatar: None,
                    rating: 5,
                    title: "Best headphones I've owned".into(),
                    body: "Noise cancelling is excellent on flights and the battery easily \
                           lasts a week of commuting. The case is compact too."
                        .into(),
                    date: ymd(2024, 5, 14),
                    verified: true,
                    helpful_count: 42,
                    merchant_reply: None,
                },
                Review {
                    id: "rev-2".into(),
                    author: "Jackson Lee".into(),
                    avatar: None,
                    rating: 3,
                    title: "Great sound, tight fit".into(),
                    body: "Audio quality is superb but they press on my ears after an hour \
                           or two."
                        .into(),
                    date: ymd(2024, 5, 2),
                    verified: true,
                    helpful_count: 17,
                    merchant_reply: Some(MerchantReply {
                        author: "Aurora Support".into(),
                        body: "Thanks for the feedback! The headband loosens after a few \
                               days of wear, and larger ear cushions are available free \
                               of charge."
                            .into(),
                        date: ymd(2024, 5, 3),
                    }),
                },
                Review {
                    id: "rev-3".into(),
                    author: "Isabella Nguyen".into(),
                    avatar: None,
                    rating: 4,
                    title: "Solid everyday pair".into(),
                    body: "Pairs instantly with my phone and laptop. I wish the app had \
                           more EQ presets."
                        .into(),
                    date: ymd(2024, 4, 21),
                    verified: false,
                    helpful_count: 8,
                    merchant_reply: None,
                },
                Review {
                    id: "rev-4".into(),
                    author: "William Kim".into(),
                    avatar: None,
                    rating: 1,
                    title: "Left ear cut out".into(),
                    body: "The left earcup started dropping audio after two weeks.".into(),
                    date: ymd(2024, 4, 9),
                    verified: true,
                    helpful_count: 23,
                    merchant_reply: Some(MerchantReply {
                        author: "Aurora Support".into(),
                        body: "We're sorry to hear that. We've reached out by email to \
                               arrange a replacement."
                            .into(),
                        date: ymd(2024, 4, 10),
                    }),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_summary_matches_distribution() {
        let props = ProductReviewsProps::sample();
        assert_eq!(props.total_reviews(), 1194);
        assert_eq!(props.average(), 4.5);
        assert_eq!(props.recommend_percent(), 90);
    }

    #[test]
    fn sorting_orders_by_the_chosen_key() {
        let props = ProductReviewsProps::sample();
        let ids = |sort| {
            props
                .sorted_reviews(sort)
                .into_iter()
                .map(|r| r.id.as_str())
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(ReviewSort::MostRecent), ["rev-1", "rev-2", "rev-3", "rev-4"]);
        assert_eq!(ids(ReviewSort::HighestRated), ["rev-1", "rev-3", "rev-2", "rev-4"]);
        assert_eq!(ids(ReviewSort::LowestRated), ["rev-4", "rev-2", "rev-3", "rev-1"]);
        assert_eq!(ids(ReviewSort::MostHelpful), ["rev-1", "rev-4", "rev-2", "rev-3"]);
    }

    #[test]
    fn reply_fragment_follows_the_optional_field() {
        let props = ProductReviewsProps::sample();
        let with_reply: Vec<_> = props
            .reviews
            .iter()
            .filter(|r| r.shows_reply())
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(with_reply, ["rev-2", "rev-4"]);
    }

    #[test]
    fn no_reviews_means_zero_summary() {
        let props = ProductReviewsProps {
            product_name: "Empty".into(),
            distribution: RatingDistribution::default(),
            reviews: Vec::new(),
        };
        assert_eq!(props.average(), 0.0);
        assert_eq!(props.recommend_percent(), 0);
        assert!(props.sorted_reviews(ReviewSort::MostHelpful).is_empty());
    }

    #[test]
    fn recommend_share_handles_maximal_counts() {
        let props = ProductReviewsProps {
            product_name: "Bestseller".into(),
            distribution: RatingDistribution::from_five_down([u32::MAX, u32::MAX, 0, 0, 0]),
            reviews: Vec::new(),
        };
        assert_eq!(props.total_reviews(), 2 * u64::from(u32::MAX));
        assert_eq!(props.recommend_percent(), 100);
    }
}
