// src/reviews.rs - Product reviews and read-side aggregation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{ProductId, UserId};

/// A customer review. The review log is append-only; nothing edits or
/// removes entries, and duplicate authorship for the same product is not
/// rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u64,
    pub product_id: ProductId,
    pub user_id: UserId,
    pub user_name: String,
    pub user_avatar: String,
    /// Star rating, 1-5.
    pub rating: u8,
    pub title: String,
    pub comment: String,
    pub date: NaiveDate,
    /// "Was this helpful" vote counter.
    pub helpful: u32,
    /// Set when the reviewer purchased the product through the store.
    pub verified: bool,
}

/// Sort orders offered by the review list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewSort {
    #[default]
    Newest,
    Oldest,
    Highest,
    Lowest,
    Helpful,
}

pub fn reviews_for_product(reviews: &[Review], product_id: ProductId) -> Vec<Review> {
    reviews
        .iter()
        .filter(|review| review.product_id == product_id)
        .cloned()
        .collect()
}

/// Stable reorder of a review list.
pub fn sort_reviews(reviews: &mut [Review], order: ReviewSort) {
    match order {
        ReviewSort::Newest => reviews.sort_by(|a, b| b.date.cmp(&a.date)),
        ReviewSort::Oldest => reviews.sort_by(|a, b| a.date.cmp(&b.date)),
        ReviewSort::Highest => reviews.sort_by(|a, b| b.rating.cmp(&a.rating)),
        ReviewSort::Lowest => reviews.sort_by(|a, b| a.rating.cmp(&b.rating)),
        ReviewSort::Helpful => reviews.sort_by(|a, b| b.helpful.cmp(&a.helpful)),
    }
}

/// Share of reviews at one star level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarShare {
    pub rating: u8,
    pub count: usize,
    pub percentage: f64,
}

/// Aggregate rating view for one product: review count, average, and the
/// per-star breakdown the rating bars render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingBreakdown {
    pub count: usize,
    pub average: f64,
    /// Five stars first, matching the display order.
    pub stars: [StarShare; 5],
}

impl RatingBreakdown {
    /// Returns `None` when the product has no reviews (the view renders a
    /// "no reviews yet" state instead of a zero average).
    pub fn for_product(reviews: &[Review], product_id: ProductId) -> Option<Self> {
        let product_reviews = reviews_for_product(reviews, product_id);
        if product_reviews.is_empty() {
            return None;
        }

        let count = product_reviews.len();
        let sum: u32 = product_reviews.iter().map(|r| u32::from(r.rating)).sum();
        let average = f64::from(sum) / count as f64;

        let stars = [5u8, 4, 3, 2, 1].map(|rating| {
            let at_level = product_reviews
                .iter()
                .filter(|r| r.rating == rating)
                .count();
            StarShare {
                rating,
                count: at_level,
                percentage: at_level as f64 / count as f64 * 100.0,
            }
        });

        Some(Self {
            count,
            average,
            stars,
        })
    }
}
