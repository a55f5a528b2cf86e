use courier_core::notify::error::ValidationError;

/// Literal emptiness check on both fields; whitespace counts as content.
pub(crate) fn require_recipient_and_message(
    recipient: &str,
    message: &str,
) -> Result<(), ValidationError> {
    if recipient.is_empty() || message.is_empty() {
        return Err(ValidationError::EmptyRecipientOrMessage);
    }
    Ok(())
}
