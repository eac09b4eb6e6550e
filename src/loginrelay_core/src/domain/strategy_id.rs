use std::fmt;

use serde::{Deserialize, Serialize};

/// Names the authentication strategy a login attempt is routed to.
///
/// The id is plain configuration, owned by whatever composes the login
/// behavior and fixed at construction time. No validation happens here: any
/// string is accepted, and an id that no registered strategy answers to is a
/// failure the delegation target surfaces, not this type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrategyId(String);

impl StrategyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The built-in OAuth2 password strategy.
impl Default for StrategyId {
    fn default() -> Self {
        Self("authenticators:oauth2-password".to_string())
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StrategyId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StrategyId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names_the_oauth2_password_strategy() {
        assert_eq!(
            StrategyId::default().as_str(),
            "authenticators:oauth2-password"
        );
    }

    #[test]
    fn display_matches_the_raw_id() {
        let id = StrategyId::new("authenticators:ldap");
        assert_eq!(id.to_string(), "authenticators:ldap");
    }

    #[test]
    fn round_trips_through_serde_transparently() {
        let id: StrategyId = serde_json::from_str(r#""authenticators:ldap""#).unwrap();
        assert_eq!(id, StrategyId::new("authenticators:ldap"));
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            r#""authenticators:ldap""#
        );
    }
}
