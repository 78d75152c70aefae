// src/cart.rs - Shopping cart with a derived total

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::ProductId;

/// One product's aggregated quantity within the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    /// Always >= 1 while the line exists; a quantity of zero removes the
    /// line instead of being stored.
    pub quantity: u32,
    /// Price snapshot taken when the product was first added. Later catalog
    /// price changes do not affect existing lines.
    pub unit_price: f64,
    pub product: Product,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// Ordered cart lines plus the derived total. The total is recomputed inside
/// every mutation, so it can never drift from the line items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    total: f64,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines (the header badge count).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.lines.iter().any(|line| line.product_id == product_id)
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    /// Add one unit of `product`: increments an existing line, or appends a
    /// new line with quantity 1 and a price snapshot.
    pub fn add(&mut self, product: &Product) {
        match self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                product_id: product.id,
                quantity: 1,
                unit_price: product.price,
                product: product.clone(),
            }),
        }
        self.recompute_total();
    }

    /// Drop the line entirely, regardless of its quantity. Unknown ids are a
    /// no-op.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product_id != product_id);
        self.recompute_total();
    }

    /// Set (not increment) a line's quantity. Zero drops the line, matching
    /// [`Cart::remove`]. Unknown ids are a no-op.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            line.quantity = quantity;
        }
        self.lines.retain(|line| line.quantity > 0);
        self.recompute_total();
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.total = 0.0;
    }

    fn recompute_total(&mut self) {
        self.total = self.lines.iter().map(CartLine::subtotal).sum();
    }
}
