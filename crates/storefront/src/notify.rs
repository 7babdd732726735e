//! Notification seam between the stores and the embedding UI.
//!
//! Stores announce user-visible outcomes through [`NotificationSink`];
//! the UI decides how a toast actually looks. A store never reaches into
//! shared globals to render anything itself.

use std::cell::RefCell;
use std::fmt;

/// How long a toast stays on screen before auto-dismissing, in ms.
/// Exported for renderers; the sink itself is fire-and-forget.
pub const TOAST_DISMISS_MS: u32 = 3000;

/// Visual style hint for a toast banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
}

impl ToastKind {
    /// Stable identifier, usable as a CSS class suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Info => "info",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient-banner renderer injected into the stores at construction.
///
/// Fire-and-forget: implementations own the dismiss timer and may
/// substitute any banner UI.
pub trait NotificationSink {
    fn show_toast(&self, message: &str, kind: ToastKind);
}

/// Fallback sink that routes toasts to the log, for embeddings without
/// a toast UI mounted.
#[derive(Debug, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn show_toast(&self, message: &str, kind: ToastKind) {
        log::info!("[toast:{kind}] {message}");
    }
}

/// Sink that records every toast it is handed, for tests and headless
/// embeddings that inspect notifications after the fact.
#[derive(Debug, Default)]
pub struct RecordingSink {
    toasts: RefCell<Vec<(String, ToastKind)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything shown so far, in emission order.
    pub fn toasts(&self) -> Vec<(String, ToastKind)> {
        self.toasts.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.toasts.borrow().iter().map(|(m, _)| m.clone()).collect()
    }
}

impl NotificationSink for RecordingSink {
    fn show_toast(&self, message: &str, kind: ToastKind) {
        self.toasts.borrow_mut().push((message.to_string(), kind));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_emission_order() {
        let sink = RecordingSink::new();
        sink.show_toast("Added to wishlist", ToastKind::Success);
        sink.show_toast("Removed from wishlist", ToastKind::Info);

        assert_eq!(
            sink.toasts(),
            vec![
                ("Added to wishlist".to_string(), ToastKind::Success),
                ("Removed from wishlist".to_string(), ToastKind::Info),
            ]
        );
    }

    #[test]
    fn test_toast_kind_identifiers() {
        assert_eq!(ToastKind::Success.as_str(), "success");
        assert_eq!(ToastKind::Info.to_string(), "info");
    }
}
