//! Shopping-cart store.
//!
//! Owns the ordered line-item list (insertion order = first-add order)
//! and writes through to the injected key-value backend after every
//! mutation. Storage failures are absorbed: malformed state resets to an
//! empty cart, write failures are logged, nothing propagates to callers.

use std::rc::Rc;

use contracts::{CartLineItem, Product, MAX_QUANTITY, MIN_QUANTITY};

use crate::notify::{NotificationSink, ToastKind};
use crate::storage::KeyValueStore;

/// Persisted-state key for the cart line items.
pub const CART_KEY: &str = "ecoShopCart";

/// Key holding the snapshot handed off to the external checkout flow.
/// Write-only from this side; the checkout page consumes it.
pub const CHECKOUT_KEY: &str = "checkoutCart";

/// Illustrative kg of carbon credited per unit in the cart. Not a
/// domain-validated figure.
pub const CARBON_SAVED_PER_UNIT: f64 = 1.5;

/// Result of the checkout handoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Snapshot written under [`CHECKOUT_KEY`]; navigation may proceed.
    Saved,
    /// Nothing to hand off; the user was notified instead.
    EmptyCart,
}

/// The cart store. Constructed once per page session with its storage
/// and notification dependencies injected.
pub struct CartStore {
    items: Vec<CartLineItem>,
    storage: Rc<dyn KeyValueStore>,
    notifier: Rc<dyn NotificationSink>,
}

impl CartStore {
    pub fn new(storage: Rc<dyn KeyValueStore>, notifier: Rc<dyn NotificationSink>) -> Self {
        Self {
            items: Vec::new(),
            storage,
            notifier,
        }
    }

    /// Rehydrate from the backend. Missing or malformed data resets the
    /// cart to empty; the failure never surfaces. Safe to call more than
    /// once per session.
    pub fn initialize(&mut self) {
        self.items = match self.storage.get(CART_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("discarding malformed cart state: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("cart storage unavailable: {e}");
                Vec::new()
            }
        };
    }

    /// Add a product: an existing line item gains one unit (saturating at
    /// [`MAX_QUANTITY`], the same clamp `update_quantity` applies), a new
    /// product becomes a quantity-1 line item at the end of the list.
    pub fn add_item(&mut self, product: &Product) {
        match self.items.iter_mut().find(|item| item.id == product.id) {
            Some(item) => {
                item.quantity = (item.quantity + 1).min(MAX_QUANTITY);
            }
            None => {
                self.items.push(CartLineItem::from_product(product));
            }
        }
        self.persist();
        self.notifier.show_toast(
            &format!("{} added to cart!", product.name),
            ToastKind::Success,
        );
    }

    /// Remove a line item. Absent ids are a silent no-op.
    pub fn remove_item(&mut self, id: u32) {
        self.items.retain(|item| item.id != id);
        self.persist();
    }

    /// Set a line item's quantity, clamped to [1, 10]. Absent ids are a
    /// silent no-op.
    pub fn update_quantity(&mut self, id: u32, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = quantity.clamp(MIN_QUANTITY, MAX_QUANTITY);
            self.persist();
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Live view of the line items; callers must not rely on a copy.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total unit count across all line items (header badge).
    pub fn count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Illustrative "kg of carbon saved" figure for the cart page stats.
    pub fn eco_impact(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.quantity as f64 * CARBON_SAVED_PER_UNIT)
            .sum()
    }

    /// Hand the cart over to the external checkout flow: snapshot the
    /// items under [`CHECKOUT_KEY`]. An empty cart only notifies the user.
    pub fn proceed_to_checkout(&self) -> CheckoutOutcome {
        if self.items.is_empty() {
            self.notifier
                .show_toast("Your cart is empty!", ToastKind::Info);
            return CheckoutOutcome::EmptyCart;
        }
        self.write(CHECKOUT_KEY);
        CheckoutOutcome::Saved
    }

    fn persist(&self) {
        self.write(CART_KEY);
    }

    fn write(&self, key: &str) {
        let Ok(raw) = serde_json::to_string(&self.items) else {
            return;
        };
        if let Err(e) = self.storage.set(key, &raw) {
            log::warn!("failed to persist cart under {key}: {e}");
        }
    }
}
