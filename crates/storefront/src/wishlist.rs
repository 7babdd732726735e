//! Wishlist store.
//!
//! Saves full product snapshots, unique by id, under its own persisted
//! key. Toggling is the sole mutation: present products are removed,
//! absent ones appended. Every toggle notifies the registered observers
//! so derived views (count badges, wishlist grids) can refresh.

use std::rc::Rc;

use contracts::Product;

use crate::notify::{NotificationSink, ToastKind};
use crate::storage::KeyValueStore;

/// Persisted-state key for the saved products.
pub const WISHLIST_KEY: &str = "hp_wishlist_items";

/// Broadcast to subscribers after every toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WishlistEvent {
    pub product_id: u32,
}

/// What a [`WishlistStore::toggle_item`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

type Subscriber = Box<dyn Fn(&WishlistEvent)>;

/// The wishlist store. Reads the persisted sequence on demand rather
/// than caching it, so every caller sees its own decoded copy.
pub struct WishlistStore {
    storage: Rc<dyn KeyValueStore>,
    notifier: Rc<dyn NotificationSink>,
    subscribers: Vec<Subscriber>,
}

impl WishlistStore {
    pub fn new(storage: Rc<dyn KeyValueStore>, notifier: Rc<dyn NotificationSink>) -> Self {
        Self {
            storage,
            notifier,
            subscribers: Vec::new(),
        }
    }

    /// Ensure the persisted key exists. Existing data is left untouched.
    pub fn initialize(&self) {
        match self.storage.get(WISHLIST_KEY) {
            Ok(Some(_)) => {}
            Ok(None) => self.write(&[]),
            Err(e) => log::warn!("wishlist storage unavailable: {e}"),
        }
    }

    /// Decoded copy of the saved products, in save order. Missing or
    /// malformed data reads as empty.
    pub fn items(&self) -> Vec<Product> {
        match self.storage.get(WISHLIST_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("discarding malformed wishlist state: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("wishlist storage unavailable: {e}");
                Vec::new()
            }
        }
    }

    /// Single entry point for both add and remove: a present id is
    /// removed, an absent one appended as a full snapshot. Persists, then
    /// notifies subscribers in registration order.
    pub fn toggle_item(&self, product: &Product) -> ToggleOutcome {
        let mut items = self.items();
        let outcome = match items.iter().position(|p| p.id == product.id) {
            Some(index) => {
                items.remove(index);
                self.notifier
                    .show_toast("Removed from wishlist", ToastKind::Info);
                ToggleOutcome::Removed
            }
            None => {
                items.push(product.clone());
                self.notifier
                    .show_toast("Added to wishlist", ToastKind::Success);
                ToggleOutcome::Added
            }
        };
        self.write(&items);

        let event = WishlistEvent {
            product_id: product.id,
        };
        for subscriber in &self.subscribers {
            subscriber(&event);
        }
        outcome
    }

    /// Membership test by product id.
    pub fn is_wishlisted(&self, id: u32) -> bool {
        self.items().iter().any(|p| p.id == id)
    }

    /// Number of saved products (profile badge).
    pub fn count(&self) -> usize {
        self.items().len()
    }

    /// Register a change observer. Observers fire after the mutation is
    /// persisted, in the order they were registered.
    pub fn subscribe(&mut self, subscriber: impl Fn(&WishlistEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn write(&self, items: &[Product]) {
        let Ok(raw) = serde_json::to_string(items) else {
            return;
        };
        if let Err(e) = self.storage.set(WISHLIST_KEY, &raw) {
            log::warn!("failed to persist wishlist: {e}");
        }
    }
}
