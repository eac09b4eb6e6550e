use async_trait::async_trait;

use crate::domain::{credentials::Credentials, strategy_id::StrategyId};

/// The session-authentication capability a login behavior delegates into.
///
/// Implementations own the actual credential exchange and everything that
/// follows from it: marking the session authenticated on success, reporting
/// the failure on error. The login behavior that calls this trait is a pure
/// forwarding step - it passes the strategy id and the credential snapshot
/// through and returns the result untouched.
///
/// The associated `Error` keeps failures first-class: whatever an
/// implementation raises (invalid credentials, network failure, unknown
/// strategy) reaches the caller with its type intact, never wrapped or
/// remapped by the forwarding layer.
///
/// # Example
///
/// ```ignore
/// struct SingleStrategySession {
///     oauth: OAuth2PasswordStrategy,
/// }
///
/// #[async_trait]
/// impl SessionAuthenticator for SingleStrategySession {
///     type Error = StrategyError;
///
///     async fn authenticate(
///         &self,
///         _strategy: &StrategyId,
///         credentials: Credentials,
///     ) -> Result<(), Self::Error> {
///         self.oauth.authenticate(&credentials).await
///     }
/// }
/// ```
#[async_trait]
pub trait SessionAuthenticator: Send + Sync {
    /// Errors the authentication exchange can raise.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Run the named strategy against the given credentials.
    ///
    /// Success means the implementation has transitioned its session to
    /// authenticated; there is no payload for the caller.
    async fn authenticate(
        &self,
        strategy: &StrategyId,
        credentials: Credentials,
    ) -> Result<(), Self::Error>;
}
