// src/orders.rs - Order records and checkout synthesis

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::types::{ProductId, UserId};
use crate::utils::ids;

/// Lifecycle status of an order. Orders are always created as
/// [`OrderStatus::Processing`]; nothing in this core advances the status
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Position on the tracking page's Processing -> Shipped -> Delivered
    /// progress rail. Cancelled orders are off the rail.
    pub fn progress_step(&self) -> Option<usize> {
        match self {
            Self::Processing => Some(0),
            Self::Shipped => Some(1),
            Self::Delivered => Some(2),
            Self::Cancelled => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// A purchased line, frozen at checkout. Independent of later catalog price
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: f64,
}

/// An order record. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: UserId,
    pub status: OrderStatus,
    pub total: f64,
    pub items: Vec<OrderItem>,
    pub shipping_address: ShippingAddress,
    pub order_date: NaiveDate,
    pub delivery_date: Option<NaiveDate>,
    pub tracking_number: String,
}

impl Order {
    /// Synthesize an order from the current cart contents. The id and
    /// tracking number derive from `placed_at`, so the same (state, action)
    /// pair always produces the same order.
    pub fn from_cart(
        user_id: UserId,
        cart: &Cart,
        shipping_address: ShippingAddress,
        placed_at: DateTime<Utc>,
    ) -> Self {
        let millis = placed_at.timestamp_millis() as u64;
        Self {
            id: ids::order_id(millis),
            user_id,
            status: OrderStatus::Processing,
            total: cart.total(),
            items: cart
                .lines()
                .iter()
                .map(|line| OrderItem {
                    product_id: line.product_id,
                    quantity: line.quantity,
                    price: line.unit_price,
                })
                .collect(),
            shipping_address,
            order_date: placed_at.date_naive(),
            delivery_date: None,
            tracking_number: ids::tracking_number(millis),
        }
    }
}

pub fn orders_for_user<'a>(orders: &'a [Order], user_id: UserId) -> Vec<&'a Order> {
    orders.iter().filter(|order| order.user_id == user_id).collect()
}
