use courier_core::notify::entity::NotifierKind;
use courier_core::notify::error::ValidationError;
use courier_core::notify::port::Notifier;

use crate::rules::require_recipient_and_message;

/// # Summary
/// A notifier that confirms delivery to a mailbox.
///
/// # Invariants
/// - Stateless; the address format is not inspected beyond emptiness.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailNotifier;

impl Notifier for EmailNotifier {
    /// # Summary
    /// Confirms an email delivery.
    ///
    /// # Logic
    /// 1. Rejects an empty recipient or an empty message.
    /// 2. Renders `Email sent to {recipient}: {message}`.
    fn send(&self, recipient: &str, message: &str) -> Result<String, ValidationError> {
        require_recipient_and_message(recipient, message)?;
        Ok(format!("Email sent to {}: {}", recipient, message))
    }

    fn kind(&self) -> NotifierKind {
        NotifierKind::Email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_confirmation() {
        let result = EmailNotifier.send("a@b.com", "hi");
        assert_eq!(result, Ok("Email sent to a@b.com: hi".to_string()));
    }

    #[test]
    fn test_email_rejects_empty_message() {
        let result = EmailNotifier.send("a@b.com", "");
        assert_eq!(result, Err(ValidationError::EmptyRecipientOrMessage));
    }

    #[test]
    fn test_email_rejects_empty_recipient() {
        let result = EmailNotifier.send("", "hi");
        assert_eq!(result, Err(ValidationError::EmptyRecipientOrMessage));
    }
}
