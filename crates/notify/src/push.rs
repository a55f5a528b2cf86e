use courier_core::notify::entity::NotifierKind;
use courier_core::notify::error::ValidationError;
use courier_core::notify::port::Notifier;

use crate::rules::require_recipient_and_message;

/// A notifier that confirms a push notification to an app user.
#[derive(Debug, Clone, Copy, Default)]
pub struct PushNotifier;

impl Notifier for PushNotifier {
    fn send(&self, recipient: &str, message: &str) -> Result<String, ValidationError> {
        require_recipient_and_message(recipient, message)?;
        Ok(format!("Push notification sent to {}: {}", recipient, message))
    }

    fn kind(&self) -> NotifierKind {
        NotifierKind::Push
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_confirmation() {
        let result = PushNotifier.send("app_user_123", "hi");
        assert_eq!(
            result,
            Ok("Push notification sent to app_user_123: hi".to_string())
        );
    }

    #[test]
    fn test_push_rejects_empty_message() {
        let result = PushNotifier.send("app_user_123", "");
        assert_eq!(result, Err(ValidationError::EmptyRecipientOrMessage));
    }
}
