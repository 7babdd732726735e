//! Client-side core of the eco storefront.
//!
//! Owns the cart and wishlist state backed by an injected key-value store,
//! the static product catalog, and the filter pipeline deriving the catalog
//! view. Rendering, toast banners and page chrome belong to the embedding
//! UI; this crate only exposes the state and the notification seam.
//!
//! Everything runs single-threaded on the UI event loop: each operation is
//! mutate, then persist (write-through, no batching), then notify, all
//! within one event-handler invocation.

pub mod cart;
pub mod catalog;
pub mod filter;
pub mod gallery;
pub mod notify;
pub mod storage;
pub mod wishlist;

pub use cart::{CartStore, CheckoutOutcome};
pub use filter::{apply_filters, ProductBrowser};
pub use gallery::GalleryState;
pub use notify::{LogSink, NotificationSink, RecordingSink, ToastKind, TOAST_DISMISS_MS};
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use wishlist::{ToggleOutcome, WishlistEvent, WishlistStore};
