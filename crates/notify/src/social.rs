use courier_core::notify::entity::NotifierKind;
use courier_core::notify::error::ValidationError;
use courier_core::notify::port::Notifier;

use crate::rules::require_recipient_and_message;

/// # Summary
/// A notifier that confirms a direct message on a social network.
///
/// # Invariants
/// - The handle is taken verbatim; a leading `@` is neither required nor added.
#[derive(Debug, Clone, Copy, Default)]
pub struct SocialMediaNotifier;

impl Notifier for SocialMediaNotifier {
    fn send(&self, recipient: &str, message: &str) -> Result<String, ValidationError> {
        require_recipient_and_message(recipient, message)?;
        Ok(format!(
            "Social media message sent to {}: {}",
            recipient, message
        ))
    }

    fn kind(&self) -> NotifierKind {
        NotifierKind::SocialMedia
    }
}
