use serde::{Deserialize, Serialize};

use crate::notify::entity::NotifierKind;

/// Global application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub demo: DemoConfig,
}

/// Sample traffic sent by the demonstration run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    pub message: String,
    pub channels: Vec<ChannelSample>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSample {
    pub kind: NotifierKind,
    pub recipient: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            message: "This is an important message.".to_string(),
            channels: NotifierKind::ALL
                .into_iter()
                .map(|kind| ChannelSample {
                    kind,
                    recipient: default_recipient(kind).to_string(),
                })
                .collect(),
        }
    }
}

fn default_recipient(kind: NotifierKind) -> &'static str {
    match kind {
        NotifierKind::Email => "mail@example.com",
        NotifierKind::Sms => "+123456789",
        NotifierKind::Push => "app_user_123",
        NotifierKind::SocialMedia => "@social_user",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.demo.message, "This is an important message.");
        assert_eq!(config.demo.channels.len(), 4);
        assert_eq!(
            config.demo.channels[1],
            ChannelSample {
                kind: NotifierKind::Sms,
                recipient: "+123456789".to_string(),
            }
        );
        assert_eq!(config.demo.channels[3].recipient, "@social_user");
    }

    #[test]
    fn test_deserialize_config() {
        let raw = r#"{
            "demo": {
                "message": "ping",
                "channels": [{ "kind": "social", "recipient": "@ops" }]
            }
        }"#;
        let config: AppConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.demo.message, "ping");
        assert_eq!(config.demo.channels[0].kind, NotifierKind::SocialMedia);
    }
}
