// src/admin.rs - Aggregates backing the admin dashboard

use serde::{Deserialize, Serialize};

use crate::auth::User;
use crate::catalog::Product;
use crate::orders::Order;

/// Headline counters shown on the dashboard overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_products: usize,
    pub total_orders: usize,
    pub total_users: usize,
    /// Sum of all order totals.
    pub total_revenue: f64,
}

impl AdminStats {
    pub fn compute(products: &[Product], orders: &[Order], users: &[User]) -> Self {
        Self {
            total_products: products.len(),
            total_orders: orders.len(),
            total_users: users.len(),
            total_revenue: orders.iter().map(|order| order.total).sum(),
        }
    }
}

/// One month's revenue point in the dashboard chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month: String,
    pub revenue: f64,
}

/// Sales count for a best-selling product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProductSales {
    pub name: String,
    pub sales: u32,
}

/// A category's share of sales, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub percentage: u8,
}

/// Pre-aggregated analytics series consumed by the dashboard. Fixture data;
/// nothing in the core updates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_sales: f64,
    pub total_orders: u32,
    pub total_products: u32,
    pub total_users: u32,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub top_products: Vec<TopProductSales>,
    pub category_distribution: Vec<CategoryShare>,
}

impl Analytics {
    /// Each month's revenue as a share of the best month, 0-100. The chart
    /// renders these as bar widths.
    pub fn monthly_revenue_shares(&self) -> Vec<f64> {
        let max = self
            .monthly_revenue
            .iter()
            .map(|point| point.revenue)
            .fold(0.0_f64, f64::max);
        self.monthly_revenue
            .iter()
            .map(|point| if max > 0.0 { point.revenue / max * 100.0 } else { 0.0 })
            .collect()
    }

    /// Each top product's sales as a share of the best seller, 0-100.
    pub fn top_product_shares(&self) -> Vec<f64> {
        let max = self
            .top_products
            .iter()
            .map(|product| f64::from(product.sales))
            .fold(0.0_f64, f64::max);
        self.top_products
            .iter()
            .map(|product| {
                if max > 0.0 {
                    f64::from(product.sales) / max * 100.0
                } else {
                    0.0
                }
            })
            .collect()
    }
}
