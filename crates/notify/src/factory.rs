use courier_core::notify::entity::NotifierKind;
use courier_core::notify::error::ValidationError;
use courier_core::notify::port::Notifier;

use crate::email::EmailNotifier;
use crate::push::PushNotifier;
use crate::sms::SmsNotifier;
use crate::social::SocialMediaNotifier;

/// # Summary
/// Builds the notifier registered for `kind`.
///
/// # Logic
/// One match arm per channel; adding a channel means adding a tag and an arm.
pub fn make_notifier(kind: NotifierKind) -> Box<dyn Notifier> {
    match kind {
        NotifierKind::Email => Box::new(EmailNotifier),
        NotifierKind::Sms => Box::new(SmsNotifier),
        NotifierKind::Push => Box::new(PushNotifier),
        NotifierKind::SocialMedia => Box::new(SocialMediaNotifier),
    }
}

/// # Summary
/// Creator bound to one channel for its whole lifetime.
///
/// # Invariants
/// - `kind` is fixed at construction and never mutated.
/// - No notifier outlives a single `dispatch` call, so the factory can be shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifierFactory {
    kind: NotifierKind,
}

impl NotifierFactory {
    /// # Summary
    /// Creates a factory for the given channel.
    ///
    /// # Arguments
    /// * `kind` - Channel every dispatch goes through.
    ///
    /// # Returns
    /// * `Self`
    pub fn new(kind: NotifierKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> NotifierKind {
        self.kind
    }

    /// # Summary
    /// Sends `message` to `recipient` through a freshly built notifier.
    ///
    /// # Logic
    /// 1. Builds the notifier for the bound kind.
    /// 2. Forwards the request and hands back its outcome untouched.
    ///
    /// # Arguments
    /// * `recipient` - Any string, empty included; the channel decides what is valid.
    /// * `message` - Any string, empty included.
    ///
    /// # Returns
    /// * The notifier's confirmation or its `ValidationError`, unchanged.
    pub fn dispatch(&self, recipient: &str, message: &str) -> Result<String, ValidationError> {
        make_notifier(self.kind).send(recipient, message)
    }
}
