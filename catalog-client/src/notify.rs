use std::sync::Arc;

pub const LOAD_FAILED: &str = "Failed to load products. Is your backend running?";
pub const SAVE_FAILED: &str = "Failed to save product.";
pub const DELETE_FAILED: &str = "Failed to delete product.";

/// Where user-visible alerts go
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

/// Prints alerts to stderr so they stand apart from the listing
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        eprintln!("! {}", message);
    }
}
