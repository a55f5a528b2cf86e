use thiserror::Error;

/// # Summary
/// Reason a send request was rejected before any delivery took place.
///
/// # Invariants
/// - `Display` renders the human-readable reason and nothing else.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("recipient or message must not be empty")]
    EmptyRecipientOrMessage,

    // SMS only, raised once the prefix check has passed
    #[error("message must not be empty")]
    EmptyMessage,

    #[error("phone number must carry the international prefix '+'")]
    MissingInternationalPrefix,
}

impl ValidationError {
    /// Human-readable reason, same text as `Display`.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}
