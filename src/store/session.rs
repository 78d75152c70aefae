// src/store/session.rs - Event-driven binding around the pure reducer

use crate::error::{Error, ErrorKind, Result};
use crate::orders::{Order, ShippingAddress};
use crate::platform::StorageArc;
use crate::prefs;
use crate::recommend;
use crate::utils::Time;

use super::{reduce, Action, StoreState};

/// Owns the live [`StoreState`] and the storage handle. Dispatching routes
/// every mutation through [`reduce`]; the session adds the impure edges the
/// reducer must not contain: reading the clock at checkout, persisting the
/// dark-mode preference, and recomputing recommendations when the
/// authenticated user changes.
pub struct Session {
    state: StoreState,
    storage: StorageArc,
}

impl Session {
    /// Start a session over the demo fixtures, restoring the persisted
    /// display preference.
    pub async fn new(storage: StorageArc) -> Self {
        Self::with_state(StoreState::new(), storage).await
    }

    /// Start a session over an explicit initial state.
    pub async fn with_state(mut state: StoreState, storage: StorageArc) -> Self {
        state.dark_mode = prefs::load_dark_mode(storage.as_ref()).await;
        Self { state, storage }
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Apply one action. Recommendations are recomputed only on
    /// authentication changes, not on every transition.
    pub fn dispatch(&mut self, action: Action) {
        let refresh_recommendations = matches!(action, Action::Login(_));
        self.state = reduce(&self.state, action);
        if refresh_recommendations {
            self.refresh_recommendations();
        }
    }

    fn refresh_recommendations(&mut self) {
        if let Some(user) = &self.state.current_user {
            let suggestions = recommend::recommend_for_user(
                user.id,
                &self.state.interactions,
                &self.state.products,
            );
            self.state = reduce(&self.state, Action::SetRecommendations(suggestions));
        }
    }

    pub fn login(&mut self, user: crate::auth::User) {
        self.dispatch(Action::Login(user));
    }

    pub fn logout(&mut self) {
        self.dispatch(Action::Logout);
    }

    /// Checkout. Fails closed with an authentication error when no user is
    /// signed in; the cart is left untouched in that case.
    pub fn place_order(&mut self, shipping_address: ShippingAddress) -> Result<Order> {
        if !self.state.is_authenticated() {
            return Err(Error::authentication(
                "placing an order requires a signed-in user",
            ));
        }

        self.dispatch(Action::PlaceOrder {
            shipping_address,
            placed_at: Time::now(),
        });

        self.state
            .orders
            .last()
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::Application, "order was not recorded"))
    }

    /// Set the dark-mode flag and persist it under the fixed preference key.
    pub async fn set_dark_mode(&mut self, enabled: bool) -> Result<()> {
        if self.state.dark_mode != enabled {
            self.dispatch(Action::ToggleDarkMode);
        }
        prefs::save_dark_mode(self.storage.as_ref(), enabled).await
    }

    pub async fn toggle_dark_mode(&mut self) -> Result<()> {
        let enabled = !self.state.dark_mode;
        self.set_dark_mode(enabled).await
    }
}
