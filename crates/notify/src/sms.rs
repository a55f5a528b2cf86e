use courier_core::notify::entity::NotifierKind;
use courier_core::notify::error::ValidationError;
use courier_core::notify::port::Notifier;

const INTERNATIONAL_PREFIX: char = '+';

/// # Summary
/// A notifier that confirms delivery of a text message to a phone number.
///
/// # Invariants
/// - Only the leading `+` is checked. Digit count and country code are not validated.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmsNotifier;

impl Notifier for SmsNotifier {
    /// # Summary
    /// Confirms an SMS delivery.
    ///
    /// # Logic
    /// 1. Rejects a recipient that does not start with `+` (an empty one included).
    /// 2. Rejects an empty message.
    /// 3. Renders `SMS sent to {recipient}: {message}`.
    ///
    /// # Returns
    /// * `Err(ValidationError::MissingInternationalPrefix)` takes precedence over an empty message.
    fn send(&self, recipient: &str, message: &str) -> Result<String, ValidationError> {
        if !recipient.starts_with(INTERNATIONAL_PREFIX) {
            return Err(ValidationError::MissingInternationalPrefix);
        }
        if message.is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        Ok(format!("SMS sent to {}: {}", recipient, message))
    }

    fn kind(&self) -> NotifierKind {
        NotifierKind::Sms
    }
}
