use serde::{Deserialize, Serialize};

/// # Summary
/// Channel selector deciding which notifier a factory builds.
///
/// # Invariants
/// - Carries no data beyond the tag; copying it is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifierKind {
    Email,
    Sms,
    Push,
    #[serde(rename = "social", alias = "social_media", alias = "socialmedia")]
    SocialMedia,
}

impl NotifierKind {
    /// Every channel, in presentation order.
    pub const ALL: [NotifierKind; 4] = [
        NotifierKind::Email,
        NotifierKind::Sms,
        NotifierKind::Push,
        NotifierKind::SocialMedia,
    ];
}

impl std::fmt::Display for NotifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotifierKind::Email => write!(f, "email"),
            NotifierKind::Sms => write!(f, "sms"),
            NotifierKind::Push => write!(f, "push"),
            NotifierKind::SocialMedia => write!(f, "social"),
        }
    }
}

impl std::str::FromStr for NotifierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" => Ok(NotifierKind::Email),
            "sms" => Ok(NotifierKind::Sms),
            "push" => Ok(NotifierKind::Push),
            "social" | "social_media" | "socialmedia" => Ok(NotifierKind::SocialMedia),
            _ => Err(format!("Unknown NotifierKind: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("EMAIL".parse::<NotifierKind>(), Ok(NotifierKind::Email));
        assert_eq!("Sms".parse::<NotifierKind>(), Ok(NotifierKind::Sms));
        assert_eq!("social_media".parse::<NotifierKind>(), Ok(NotifierKind::SocialMedia));
    }

    #[test]
    fn test_parse_unknown_kind() {
        let err = "fax".parse::<NotifierKind>().unwrap_err();
        assert_eq!(err, "Unknown NotifierKind: fax");
    }

    #[test]
    fn test_display_parses_back() {
        for kind in NotifierKind::ALL {
            assert_eq!(kind.to_string().parse::<NotifierKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_serialized_name_matches_display() {
        for kind in NotifierKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }

    #[test]
    fn test_deserialize_accepts_aliases() {
        let kinds: Vec<NotifierKind> =
            serde_json::from_str(r#"["email", "sms", "push", "social", "social_media"]"#).unwrap();
        assert_eq!(
            kinds,
            vec![
                NotifierKind::Email,
                NotifierKind::Sms,
                NotifierKind::Push,
                NotifierKind::SocialMedia,
                NotifierKind::SocialMedia,
            ]
        );
    }
}
