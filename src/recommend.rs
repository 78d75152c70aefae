// src/recommend.rs - Product recommendations

//! Blends two strategies over the read-only interaction log: collaborative
//! "similar user" overlap and content-based category matching. The result is
//! a bounded, deduplicated candidate list in discovery order; no scoring or
//! ranking is applied.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, Category, Product};
use crate::types::{ProductId, UserId};

/// Maximum number of suggestions surfaced to the user.
pub const MAX_RECOMMENDATIONS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Purchase,
    View,
    Wishlist,
}

/// One recorded user/product interaction. Read-only fixture data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInteraction {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub action: InteractionKind,
    pub date: NaiveDate,
    pub rating: Option<u8>,
}

/// Compute up to [`MAX_RECOMMENDATIONS`] products for `user_id`.
///
/// 1. `seen` = every product the user interacted with, any action kind.
/// 2. Other users sharing a `seen` product are "similar" (overlap counted,
///    unweighted by action kind or recency).
/// 3. Similar users' unseen products enter the candidate set first, then
///    every catalog product sharing a category with a `seen` product.
/// 4. Candidates resolve against the catalog; ids with no record (stale or
///    foreign interactions) are skipped. Order is candidate insertion order,
///    not a ranking.
///
/// An empty result is valid and renders as "no recommendations".
pub fn recommend_for_user(
    user_id: UserId,
    interactions: &[UserInteraction],
    catalog: &[Product],
) -> Vec<Product> {
    let seen: Vec<ProductId> = {
        let mut seen = Vec::new();
        for interaction in interactions.iter().filter(|i| i.user_id == user_id) {
            if !seen.contains(&interaction.product_id) {
                seen.push(interaction.product_id);
            }
        }
        seen
    };

    // Collaborative step: count shared-product overlap per other user,
    // keeping first-seen order so the output is deterministic.
    let mut similar_users: Vec<(UserId, u32)> = Vec::new();
    for interaction in interactions.iter().filter(|i| i.user_id != user_id) {
        if seen.contains(&interaction.product_id) {
            match similar_users
                .iter_mut()
                .find(|(id, _)| *id == interaction.user_id)
            {
                Some((_, count)) => *count += 1,
                None => similar_users.push((interaction.user_id, 1)),
            }
        }
    }

    let mut candidates: Vec<ProductId> = Vec::new();
    for (similar_id, _) in &similar_users {
        for interaction in interactions
            .iter()
            .filter(|i| i.user_id == *similar_id && !seen.contains(&i.product_id))
        {
            if !candidates.contains(&interaction.product_id) {
                candidates.push(interaction.product_id);
            }
        }
    }

    // Content-based step: anything in a category the user has touched.
    let seen_categories: Vec<Category> = {
        let mut categories = Vec::new();
        for product_id in &seen {
            if let Some(product) = catalog::find_product(catalog, *product_id) {
                if !categories.contains(&product.category) {
                    categories.push(product.category);
                }
            }
        }
        categories
    };

    for product in catalog {
        if seen_categories.contains(&product.category)
            && !seen.contains(&product.id)
            && !candidates.contains(&product.id)
        {
            candidates.push(product.id);
        }
    }

    let recommendations: Vec<Product> = candidates
        .iter()
        .filter_map(|id| catalog::find_product(catalog, *id))
        .take(MAX_RECOMMENDATIONS)
        .cloned()
        .collect();

    tracing::debug!(
        user_id,
        seen = seen.len(),
        similar_users = similar_users.len(),
        candidates = candidates.len(),
        surfaced = recommendations.len(),
        "computed recommendations"
    );

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn interaction(user_id: UserId, product_id: ProductId, action: InteractionKind) -> UserInteraction {
        UserInteraction {
            user_id,
            product_id,
            action,
            date: date(2024, 6, 1),
            rating: None,
        }
    }

    #[test]
    fn test_fixture_user_two_gets_the_ipad() {
        // User 2 has touched products 1, 3, 2, and 4. User 3 overlaps on
        // products 1 and 2, and the only product of theirs user 2 hasn't
        // seen is the iPad (id 5). The content step adds nothing new: every
        // catalog product in user 2's categories is already seen.
        let recommendations =
            recommend_for_user(2, fixtures::interactions(), fixtures::products());
        let ids: Vec<_> = recommendations.iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![5]);
    }

    #[test]
    fn test_fixture_user_three_gets_collaborative_hits() {
        // User 3 has touched products 2, 1, and 5; user 2 overlaps on 1 and
        // 2 and contributes their unseen products 3 and 4 in interaction
        // order.
        let recommendations =
            recommend_for_user(3, fixtures::interactions(), fixtures::products());
        let ids: Vec<_> = recommendations.iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_seen_products_never_resurface() {
        for user_id in [2, 3] {
            let seen: Vec<_> = fixtures::interactions()
                .iter()
                .filter(|i| i.user_id == user_id)
                .map(|i| i.product_id)
                .collect();
            let recommendations =
                recommend_for_user(user_id, fixtures::interactions(), fixtures::products());

            assert!(recommendations.iter().all(|p| !seen.contains(&p.id)));
            assert!(recommendations.len() <= MAX_RECOMMENDATIONS);
        }
    }

    #[test]
    fn test_collaborative_candidates_precede_content() {
        let catalog = fixtures::products();
        let interactions = vec![
            interaction(1, 1, InteractionKind::Purchase),
            // User 7 overlaps on product 1 and also saw product 6 (gaming),
            // which no content rule would surface for user 1.
            interaction(7, 1, InteractionKind::View),
            interaction(7, 6, InteractionKind::View),
        ];

        let recommendations = recommend_for_user(1, &interactions, catalog);
        assert_eq!(recommendations[0].id, 6);
    }

    #[test]
    fn test_unknown_user_gets_nothing() {
        let recommendations =
            recommend_for_user(99, fixtures::interactions(), fixtures::products());
        assert!(recommendations.is_empty());
    }

    #[test]
    fn test_stale_product_ids_are_skipped() {
        let catalog = fixtures::products();
        let interactions = vec![
            interaction(1, 1, InteractionKind::Purchase),
            interaction(2, 1, InteractionKind::View),
            // Product 404 no longer exists in the catalog.
            interaction(2, 404, InteractionKind::Purchase),
        ];

        let recommendations = recommend_for_user(1, &interactions, catalog);
        assert!(recommendations.iter().all(|p| p.id != 404));
        // The smartphone category still contributes nothing new (only
        // product 1 is a smartphone), so recommendations may be empty here.
        assert!(recommendations.len() <= MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_cap_at_six() {
        // A catalog of eight same-category phones; the user has seen one, so
        // the content step alone yields seven candidates.
        let catalog: Vec<Product> = (1..=8)
            .map(|id| {
                let mut product = fixtures::products()[0].clone();
                product.id = id;
                product
            })
            .collect();
        let interactions = vec![interaction(1, 1, InteractionKind::Purchase)];

        let recommendations = recommend_for_user(1, &interactions, &catalog);
        assert_eq!(recommendations.len(), MAX_RECOMMENDATIONS);
        assert!(recommendations.iter().all(|p| p.id != 1));
    }

    #[test]
    fn test_pure_over_inputs() {
        let interactions = fixtures::interactions();
        let first = recommend_for_user(2, interactions, fixtures::products());
        let second = recommend_for_user(2, interactions, fixtures::products());
        assert_eq!(first, second);
    }
}
