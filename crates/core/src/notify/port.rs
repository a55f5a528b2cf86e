use crate::notify::entity::NotifierKind;
use crate::notify::error::ValidationError;

/// # Summary
/// Send contract shared by every notification channel.
///
/// # Invariants
/// - Implementations are stateless and `Send + Sync`; any instance may be used from any thread.
/// - `send` is pure: identical arguments always produce identical results.
pub trait Notifier: Send + Sync {
    /// # Summary
    /// Validates the request and renders the delivery confirmation.
    ///
    /// # Logic
    /// 1. Applies the channel's rules in order; the first failing rule wins.
    /// 2. Interpolates recipient and message into the channel template.
    ///
    /// # Arguments
    /// * `recipient` - Channel-specific address (mailbox, phone number, user handle).
    /// * `message` - Body of the notification.
    ///
    /// # Returns
    /// * `Ok(String)` with the confirmation text.
    /// * `Err(ValidationError)` naming the rule that rejected the input.
    fn send(&self, recipient: &str, message: &str) -> Result<String, ValidationError>;

    /// The channel this notifier delivers on.
    fn kind(&self) -> NotifierKind;
}
