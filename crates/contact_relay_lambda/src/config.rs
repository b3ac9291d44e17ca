use contact_core::email::MailRoute;
use thiserror::Error;

pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be configured")]
    Missing(&'static str),
}

/// Environment configuration, read once per cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub region: String,
    pub route: MailRoute,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Sender and destination are required: without them SES would be asked
    /// to deliver to an undefined recipient.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Ok(Self {
            region: non_blank("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            route: MailRoute {
                from: non_blank("FROM_EMAIL").ok_or(ConfigError::Missing("FROM_EMAIL"))?,
                to: non_blank("TO_EMAIL").ok_or(ConfigError::Missing("TO_EMAIL"))?,
            },
        })
    }
}
