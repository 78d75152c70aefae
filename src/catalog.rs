// src/catalog.rs - Product catalog model and browse criteria

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::ProductId;

/// The fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Smartphones,
    Laptops,
    Headphones,
    Smartwatches,
    Tablets,
    Gaming,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Smartphones,
        Category::Laptops,
        Category::Headphones,
        Category::Smartwatches,
        Category::Tablets,
        Category::Gaming,
    ];

    /// URL/filter slug for this category.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Smartphones => "smartphones",
            Self::Laptops => "laptops",
            Self::Headphones => "headphones",
            Self::Smartwatches => "smartwatches",
            Self::Tablets => "tablets",
            Self::Gaming => "gaming",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Smartphones => "Smartphones",
            Self::Laptops => "Laptops",
            Self::Headphones => "Headphones",
            Self::Smartwatches => "Smartwatches",
            Self::Tablets => "Tablets",
            Self::Gaming => "Gaming",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "smartphones" => Ok(Self::Smartphones),
            "laptops" => Ok(Self::Laptops),
            "headphones" => Ok(Self::Headphones),
            "smartwatches" => Ok(Self::Smartwatches),
            "tablets" => Ok(Self::Tablets),
            "gaming" => Ok(Self::Gaming),
            other => Err(Error::validation(
                "category",
                format!("unknown category slug: {}", other),
            )),
        }
    }
}

/// Category selection for the browse view: a single category or the whole
/// catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a filter slug. Unrecognized input falls open to [`Self::All`]
    /// (no filtering) rather than failing.
    pub fn parse(s: &str) -> Self {
        if s == "all" {
            return Self::All;
        }
        match Category::from_str(s) {
            Ok(category) => Self::Only(category),
            Err(_) => {
                tracing::debug!(slug = s, "unknown category filter, showing all");
                Self::All
            }
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == *category,
        }
    }
}

/// Sort order applied to the currently filtered product list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Original catalog order; applying it never reorders.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Rating,
    Newest,
}

impl SortOrder {
    /// Parse a sort key. Unrecognized input falls open to
    /// [`Self::Featured`] (no reordering).
    pub fn parse(s: &str) -> Self {
        match s {
            "featured" => Self::Featured,
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "rating" => Self::Rating,
            "newest" => Self::Newest,
            other => {
                tracing::debug!(key = other, "unknown sort key, keeping current order");
                Self::Featured
            }
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Newest => "newest",
        }
    }
}

/// A purchasable product. Seeded once from the fixture catalog and never
/// mutated by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: f64,
    /// List price before discount. Invariant: `price <= original_price`.
    pub original_price: f64,
    /// Percent off the original price.
    pub discount: u8,
    pub category: Category,
    pub brand: String,
    pub rating: f64,
    pub review_count: u32,
    pub in_stock: u32,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub specifications: BTreeMap<String, String>,
    pub features: Vec<String>,
}

impl Product {
    pub fn is_in_stock(&self) -> bool {
        self.in_stock > 0
    }

    /// Case-insensitive substring match against name, description, and tags.
    /// `needle` must already be lowercased.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// Products whose name, description, or any tag contains `query`
/// case-insensitively. An empty query returns the whole catalog.
pub fn search_products(catalog: &[Product], query: &str) -> Vec<Product> {
    if query.is_empty() {
        return catalog.to_vec();
    }
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|product| product.matches_lowercase(&needle))
        .cloned()
        .collect()
}

/// Products in the selected category, or the whole catalog for
/// [`CategoryFilter::All`].
pub fn filter_by_category(catalog: &[Product], filter: CategoryFilter) -> Vec<Product> {
    catalog
        .iter()
        .filter(|product| filter.matches(product))
        .cloned()
        .collect()
}

/// Reorder `products` in place. All sorts are stable, so equal keys keep
/// their relative order; [`SortOrder::Featured`] leaves the slice untouched.
pub fn sort_products(products: &mut [Product], order: SortOrder) {
    match order {
        SortOrder::Featured => {}
        SortOrder::PriceLow => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::PriceHigh => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOrder::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortOrder::Newest => products.sort_by(|a, b| b.id.cmp(&a.id)),
    }
}

pub fn find_product<'a>(catalog: &'a [Product], id: ProductId) -> Option<&'a Product> {
    catalog.iter().find(|product| product.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_search_is_case_insensitive_substring() {
        // "pro" hits the iPhone 15 Pro Max but not the PlayStation 5 Console.
        let results = search_products(fixtures::products(), "pro");
        assert!(results.iter().any(|p| p.name == "iPhone 15 Pro Max"));
        assert!(!results.iter().any(|p| p.name == "PlayStation 5 Console"));
    }

    #[test]
    fn test_search_matches_tags() {
        let results = search_products(fixtures::products(), "dualsense");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "PlayStation 5 Console");
    }

    #[test]
    fn test_empty_query_returns_catalog() {
        let results = search_products(fixtures::products(), "");
        assert_eq!(results.len(), fixtures::products().len());
    }

    #[test]
    fn test_category_filter() {
        let filter = CategoryFilter::Only(Category::Laptops);
        let results = filter_by_category(fixtures::products(), filter);
        assert!(!results.is_empty());
        assert!(results.iter().all(|p| p.category == Category::Laptops));

        let all = filter_by_category(fixtures::products(), CategoryFilter::All);
        assert_eq!(all.len(), fixtures::products().len());
    }

    #[test]
    fn test_filter_parse_fails_open() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("gaming"),
            CategoryFilter::Only(Category::Gaming)
        );
        assert_eq!(CategoryFilter::parse("appliances"), CategoryFilter::All);
        assert_eq!(SortOrder::parse("price-low"), SortOrder::PriceLow);
        assert_eq!(SortOrder::parse("cheapest"), SortOrder::Featured);
    }

    #[test]
    fn test_sort_orders() {
        let mut products = fixtures::products().to_vec();

        sort_products(&mut products, SortOrder::PriceLow);
        assert!(products.windows(2).all(|w| w[0].price <= w[1].price));

        sort_products(&mut products, SortOrder::PriceHigh);
        assert!(products.windows(2).all(|w| w[0].price >= w[1].price));

        sort_products(&mut products, SortOrder::Rating);
        assert!(products.windows(2).all(|w| w[0].rating >= w[1].rating));

        sort_products(&mut products, SortOrder::Newest);
        assert!(products.windows(2).all(|w| w[0].id >= w[1].id));
    }

    #[test]
    fn test_featured_keeps_current_order() {
        let mut products = fixtures::products().to_vec();
        sort_products(&mut products, SortOrder::PriceHigh);
        let before = products.clone();
        sort_products(&mut products, SortOrder::Featured);
        assert_eq!(products, before);
    }

    #[test]
    fn test_category_slug_roundtrip() {
        for category in Category::ALL {
            assert_eq!(category.slug().parse::<Category>().ok(), Some(category));
        }
        assert!("appliances".parse::<Category>().is_err());
    }
}
