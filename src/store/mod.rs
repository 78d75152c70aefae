// src/store/mod.rs - Session state and the action reducer

//! The storefront's session state as an explicit value type plus a pure
//! transition function. UI events become [`Action`] values; [`reduce`]
//! computes the next state from the previous one without mutating it, so
//! every snapshot a caller holds stays complete and consistent.

mod session;

pub use session::Session;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::User;
use crate::catalog::{self, CategoryFilter, Product, SortOrder};
use crate::cart::Cart;
use crate::fixtures::{self, WishlistEntry};
use crate::orders::{Order, ShippingAddress};
use crate::recommend::UserInteraction;
use crate::reviews::Review;
use crate::types::ProductId;

/// Insertion-ordered set of saved product ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    ids: Vec<ProductId>,
}

impl Wishlist {
    pub fn from_ids(ids: impl IntoIterator<Item = ProductId>) -> Self {
        let mut wishlist = Self::default();
        for id in ids {
            if !wishlist.contains(id) {
                wishlist.ids.push(id);
            }
        }
        wishlist
    }

    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Symmetric difference with `{id}`: saved ids are removed, new ids
    /// appended.
    pub fn toggle(&mut self, id: ProductId) {
        if self.contains(id) {
            self.ids.retain(|saved| *saved != id);
        } else {
            self.ids.push(id);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

/// Everything the storefront session tracks. Fixture fields (`products`,
/// `users`, `interactions`, `wishlist_seed`) are loaded once and never
/// mutated; the rest is session state.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreState {
    // Auth
    pub current_user: Option<User>,

    // Catalog & browse criteria
    pub products: Vec<Product>,
    pub filtered_products: Vec<Product>,
    pub selected_category: CategoryFilter,
    pub search_query: String,
    pub sort_by: SortOrder,

    // Cart & wishlist
    pub cart: Cart,
    pub wishlist: Wishlist,

    // Append-only logs
    pub reviews: Vec<Review>,
    pub orders: Vec<Order>,

    // UI flags
    pub dark_mode: bool,
    pub show_cart: bool,
    pub show_auth: bool,

    // Fixtures
    pub users: Vec<User>,
    pub wishlist_seed: Vec<WishlistEntry>,
    pub interactions: Vec<UserInteraction>,

    // Recommendations
    pub recommendations: Vec<Product>,
}

impl StoreState {
    /// Session state over the demo fixtures.
    pub fn new() -> Self {
        Self::with_fixtures(
            fixtures::products().to_vec(),
            fixtures::users().to_vec(),
            fixtures::seed_orders().to_vec(),
            fixtures::seed_reviews().to_vec(),
            fixtures::wishlist_seed().to_vec(),
            fixtures::interactions().to_vec(),
        )
    }

    /// Session state over an explicit dataset.
    pub fn with_fixtures(
        products: Vec<Product>,
        users: Vec<User>,
        orders: Vec<Order>,
        reviews: Vec<Review>,
        wishlist_seed: Vec<WishlistEntry>,
        interactions: Vec<UserInteraction>,
    ) -> Self {
        Self {
            current_user: None,
            filtered_products: products.clone(),
            products,
            selected_category: CategoryFilter::All,
            search_query: String::new(),
            sort_by: SortOrder::Featured,
            cart: Cart::new(),
            wishlist: Wishlist::default(),
            reviews,
            orders,
            dark_mode: false,
            show_cart: false,
            show_auth: false,
            users,
            wishlist_seed,
            interactions,
            recommendations: Vec::new(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        catalog::find_product(&self.products, id)
    }

    /// Dashboard counters over the current session data.
    pub fn admin_stats(&self) -> crate::admin::AdminStats {
        crate::admin::AdminStats::compute(&self.products, &self.orders, &self.users)
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new()
    }
}

/// The closed set of operations the UI can dispatch.
#[derive(Debug, Clone)]
pub enum Action {
    Login(User),
    Logout,
    ToggleDarkMode,
    SetSearchQuery(String),
    SetCategory(CategoryFilter),
    SetSort(SortOrder),
    AddToCart(Product),
    RemoveFromCart(ProductId),
    UpdateCartQuantity {
        product_id: ProductId,
        quantity: u32,
    },
    ClearCart,
    ToggleWishlist(ProductId),
    ShowCart(bool),
    ShowAuth(bool),
    AddReview(Review),
    PlaceOrder {
        shipping_address: ShippingAddress,
        /// Checkout timestamp; the order id and tracking number derive from
        /// it, keeping the transition a pure function of (state, action).
        placed_at: DateTime<Utc>,
    },
    SetRecommendations(Vec<Product>),
}

/// State reducer function. Computes the next state without touching the
/// previous one; every transition is total (worst case a no-op) except
/// `PlaceOrder`, which requires an authenticated user and otherwise leaves
/// the state unchanged.
///
/// Category and search filters deliberately do NOT compose: each recomputes
/// the filtered list from the full catalog, overriding the other. This
/// mirrors the reference storefront's behavior and is kept for parity.
pub fn reduce(state: &StoreState, action: Action) -> StoreState {
    let mut next = state.clone();

    match action {
        Action::Login(user) => {
            next.wishlist = Wishlist::from_ids(
                next.wishlist_seed
                    .iter()
                    .filter(|entry| entry.user_id == user.id)
                    .map(|entry| entry.product_id),
            );
            tracing::info!(user_id = user.id, "user logged in");
            next.current_user = Some(user);
        }
        Action::Logout => {
            tracing::info!("user logged out");
            next.current_user = None;
            next.cart.clear();
            next.wishlist.clear();
        }
        Action::ToggleDarkMode => {
            next.dark_mode = !next.dark_mode;
        }
        Action::SetSearchQuery(query) => {
            next.filtered_products = catalog::search_products(&next.products, &query);
            next.search_query = query;
        }
        Action::SetCategory(filter) => {
            next.filtered_products = catalog::filter_by_category(&next.products, filter);
            next.selected_category = filter;
        }
        Action::SetSort(order) => {
            catalog::sort_products(&mut next.filtered_products, order);
            next.sort_by = order;
        }
        Action::AddToCart(product) => {
            if next.products.iter().any(|p| p.id == product.id) {
                next.cart.add(&product);
            } else {
                tracing::debug!(product_id = product.id, "add to cart ignored: not in catalog");
            }
        }
        Action::RemoveFromCart(product_id) => {
            next.cart.remove(product_id);
        }
        Action::UpdateCartQuantity {
            product_id,
            quantity,
        } => {
            next.cart.set_quantity(product_id, quantity);
        }
        Action::ClearCart => {
            next.cart.clear();
        }
        Action::ToggleWishlist(product_id) => {
            if next.products.iter().any(|p| p.id == product_id) {
                next.wishlist.toggle(product_id);
            } else {
                tracing::debug!(product_id, "wishlist toggle ignored: not in catalog");
            }
        }
        Action::ShowCart(visible) => {
            next.show_cart = visible;
        }
        Action::ShowAuth(visible) => {
            next.show_auth = visible;
        }
        Action::AddReview(review) => {
            next.reviews.push(review);
        }
        Action::PlaceOrder {
            shipping_address,
            placed_at,
        } => match &next.current_user {
            Some(user) => {
                let order = Order::from_cart(user.id, &next.cart, shipping_address, placed_at);
                tracing::info!(order_id = %order.id, total = order.total, "order placed");
                next.orders.push(order);
                next.cart.clear();
            }
            None => {
                tracing::warn!("place order ignored: no authenticated user");
            }
        },
        Action::SetRecommendations(products) => {
            next.recommendations = products;
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartLine;
    use crate::catalog::Category;
    use crate::utils::Time;

    fn test_product(id: ProductId, price: f64) -> Product {
        let mut product = fixtures::products()[0].clone();
        product.id = id;
        product.slug = format!("test-product-{}", id);
        product.price = price;
        product.original_price = price;
        product
    }

    fn state_with_products(products: Vec<Product>) -> StoreState {
        StoreState::with_fixtures(
            products,
            fixtures::users().to_vec(),
            Vec::new(),
            Vec::new(),
            fixtures::wishlist_seed().to_vec(),
            Vec::new(),
        )
    }

    fn john() -> User {
        fixtures::users()[1].clone()
    }

    fn assert_cart_total_consistent(state: &StoreState) {
        let expected: f64 = state.cart.lines().iter().map(CartLine::subtotal).sum();
        assert!((state.cart.total() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_default_state() {
        let state = StoreState::new();
        assert!(state.current_user.is_none());
        assert!(!state.is_authenticated());
        assert_eq!(state.filtered_products, state.products);
        assert_eq!(state.selected_category, CategoryFilter::All);
        assert_eq!(state.sort_by, SortOrder::Featured);
        assert!(state.cart.is_empty());
        assert!(state.wishlist.is_empty());
        assert!(!state.dark_mode);
        assert!(state.recommendations.is_empty());
    }

    #[test]
    fn test_reducer_does_not_mutate_input() {
        let state = StoreState::new();
        let snapshot = state.clone();

        let _ = reduce(&state, Action::AddToCart(fixtures::products()[0].clone()));
        let _ = reduce(&state, Action::Login(john()));
        let _ = reduce(&state, Action::SetSearchQuery("pro".to_string()));

        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_login_replaces_wishlist_from_seed() {
        let state = StoreState::new();
        // A stray pre-login wishlist entry must be replaced, not merged.
        let state = reduce(&state, Action::ToggleWishlist(6));
        let state = reduce(&state, Action::Login(john()));

        assert!(state.is_authenticated());
        assert_eq!(state.wishlist.ids(), &[2, 4]);
    }

    #[test]
    fn test_login_then_logout_resets_session() {
        let state = StoreState::new();
        let state = reduce(&state, Action::AddToCart(fixtures::products()[0].clone()));
        let state = reduce(&state, Action::Login(john()));
        let state = reduce(&state, Action::Logout);

        assert!(!state.is_authenticated());
        assert!(state.cart.is_empty());
        assert_eq!(state.cart.total(), 0.0);
        assert!(state.wishlist.is_empty());
    }

    #[test]
    fn test_search_query_filters_catalog() {
        let state = StoreState::new();
        let state = reduce(&state, Action::SetSearchQuery("pro".to_string()));

        assert_eq!(state.search_query, "pro");
        assert!(state
            .filtered_products
            .iter()
            .any(|p| p.name == "iPhone 15 Pro Max"));
        assert!(!state
            .filtered_products
            .iter()
            .any(|p| p.name == "PlayStation 5 Console"));

        // Clearing the query restores the whole catalog.
        let state = reduce(&state, Action::SetSearchQuery(String::new()));
        assert_eq!(state.filtered_products, state.products);
    }

    #[test]
    fn test_category_and_search_override_each_other() {
        let state = StoreState::new();
        let state = reduce(
            &state,
            Action::SetCategory(CategoryFilter::Only(Category::Gaming)),
        );
        assert!(state
            .filtered_products
            .iter()
            .all(|p| p.category == Category::Gaming));

        // The later-applied search recomputes from the full catalog; the
        // category filter no longer constrains the list.
        let state = reduce(&state, Action::SetSearchQuery("apple".to_string()));
        assert!(state
            .filtered_products
            .iter()
            .any(|p| p.category != Category::Gaming));
        assert_eq!(
            state.selected_category,
            CategoryFilter::Only(Category::Gaming)
        );
    }

    #[test]
    fn test_sort_price_low_then_high_reverses() {
        let state = StoreState::new();
        let low = reduce(&state, Action::SetSort(SortOrder::PriceLow));
        let high = reduce(&low, Action::SetSort(SortOrder::PriceHigh));

        // No two fixture products share a price, so the orders are exact
        // reverses of each other.
        let ascending: Vec<_> = low.filtered_products.iter().map(|p| p.id).collect();
        let mut descending: Vec<_> = high.filtered_products.iter().map(|p| p.id).collect();
        descending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn test_cart_total_invariant_across_transitions() {
        let a = test_product(1, 10.0);
        let b = test_product(2, 5.0);
        let mut state = state_with_products(vec![a.clone(), b.clone()]);

        let steps = vec![
            Action::AddToCart(a.clone()),
            Action::AddToCart(a.clone()),
            Action::AddToCart(b.clone()),
            Action::UpdateCartQuantity {
                product_id: b.id,
                quantity: 7,
            },
            Action::RemoveFromCart(a.id),
            Action::UpdateCartQuantity {
                product_id: b.id,
                quantity: 0,
            },
        ];
        for action in steps {
            state = reduce(&state, action);
            assert_cart_total_consistent(&state);
        }
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_add_to_cart_merges_lines() {
        let state = StoreState::new();
        let product = fixtures::products()[0].clone();
        let state = reduce(&state, Action::AddToCart(product.clone()));
        let state = reduce(&state, Action::AddToCart(product.clone()));

        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_add_to_cart_unknown_product_is_noop() {
        let state = StoreState::new();
        let stranger = test_product(9999, 1.0);
        let state = reduce(&state, Action::AddToCart(stranger));

        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_update_quantity_zero_equals_remove() {
        let product = fixtures::products()[0].clone();
        let base = reduce(
            &StoreState::new(),
            Action::AddToCart(product.clone()),
        );

        let via_update = reduce(
            &base,
            Action::UpdateCartQuantity {
                product_id: product.id,
                quantity: 0,
            },
        );
        let via_remove = reduce(&base, Action::RemoveFromCart(product.id));
        assert_eq!(via_update.cart, via_remove.cart);

        // Both are no-ops for ids that were never in the cart.
        let untouched_update = reduce(
            &base,
            Action::UpdateCartQuantity {
                product_id: 9999,
                quantity: 0,
            },
        );
        let untouched_remove = reduce(&base, Action::RemoveFromCart(9999));
        assert_eq!(untouched_update.cart, base.cart);
        assert_eq!(untouched_remove.cart, base.cart);
    }

    #[test]
    fn test_toggle_wishlist_is_an_involution() {
        let state = StoreState::new();
        let toggled = reduce(&state, Action::ToggleWishlist(3));
        assert!(toggled.wishlist.contains(3));

        let back = reduce(&toggled, Action::ToggleWishlist(3));
        assert_eq!(back.wishlist, state.wishlist);
    }

    #[test]
    fn test_toggle_wishlist_unknown_id_is_noop() {
        let state = StoreState::new();
        let state = reduce(&state, Action::ToggleWishlist(9999));
        assert!(state.wishlist.is_empty());
    }

    #[test]
    fn test_place_order_snapshot() {
        let a = test_product(1, 10.0);
        let b = test_product(2, 5.0);
        let state = state_with_products(vec![a.clone(), b.clone()]);

        let state = reduce(&state, Action::Login(john()));
        let state = reduce(&state, Action::AddToCart(a.clone()));
        let state = reduce(&state, Action::AddToCart(a.clone()));
        let state = reduce(&state, Action::AddToCart(b.clone()));

        let orders_before = state.orders.len();
        let state = reduce(
            &state,
            Action::PlaceOrder {
                shipping_address: fixtures::demo_shipping_address(),
                placed_at: Time::from_millis(1_718_000_000_000),
            },
        );

        assert_eq!(state.orders.len(), orders_before + 1);
        let order = state.orders.last().expect("order appended");
        assert_eq!(order.user_id, john().id);
        assert!((order.total - 25.0).abs() < 1e-9);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.items[0].price, 10.0);
        assert_eq!(order.items[1].quantity, 1);
        assert_eq!(order.items[1].price, 5.0);
        assert_eq!(order.id, "ORD-1718000000000");

        // Checkout empties the cart.
        assert!(state.cart.is_empty());
        assert_eq!(state.cart.total(), 0.0);
    }

    #[test]
    fn test_place_order_unauthenticated_is_noop() {
        let state = StoreState::new();
        let state = reduce(
            &state,
            Action::AddToCart(fixtures::products()[0].clone()),
        );
        let after = reduce(
            &state,
            Action::PlaceOrder {
                shipping_address: fixtures::demo_shipping_address(),
                placed_at: Time::now(),
            },
        );

        assert_eq!(after.orders.len(), state.orders.len());
        assert_eq!(after.cart, state.cart);
    }

    #[test]
    fn test_add_review_appends() {
        let state = StoreState::new();
        let before = state.reviews.len();
        let mut review = fixtures::seed_reviews()[0].clone();
        review.id = 99;

        let state = reduce(&state, Action::AddReview(review.clone()));
        assert_eq!(state.reviews.len(), before + 1);
        assert_eq!(state.reviews.last(), Some(&review));
    }

    #[test]
    fn test_ui_flags() {
        let state = StoreState::new();
        let state = reduce(&state, Action::ToggleDarkMode);
        assert!(state.dark_mode);

        let state = reduce(&state, Action::ShowCart(true));
        assert!(state.show_cart);

        let state = reduce(&state, Action::ShowAuth(true));
        assert!(state.show_auth);
    }
}
