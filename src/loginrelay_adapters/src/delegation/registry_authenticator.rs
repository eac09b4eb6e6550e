use async_trait::async_trait;
use thiserror::Error;

use loginrelay_core::{
    Credentials, SessionAuthenticator, StrategyError, StrategyId, StrategyRegistry,
    StrategyRegistryError,
};

/// Errors surfaced by [`RegistryAuthenticator`]: either no strategy answers
/// to the requested id, or the resolved strategy failed the exchange.
#[derive(Debug, Error, PartialEq)]
pub enum DelegationError {
    #[error(transparent)]
    Registry(#[from] StrategyRegistryError),
    #[error(transparent)]
    Strategy(#[from] StrategyError),
}

/// Reference delegation target: resolves the named strategy through a
/// [`StrategyRegistry`] and runs it against the forwarded credentials.
///
/// An unknown strategy id fails here - the forwarding behavior upstream
/// accepts any id and leaves that verdict to this layer.
pub struct RegistryAuthenticator<R>
where
    R: StrategyRegistry,
{
    registry: R,
}

impl<R> RegistryAuthenticator<R>
where
    R: StrategyRegistry,
{
    pub fn new(registry: R) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl<R> SessionAuthenticator for RegistryAuthenticator<R>
where
    R: StrategyRegistry,
{
    type Error = DelegationError;

    #[tracing::instrument(name = "RegistryAuthenticator::authenticate", skip(self, credentials))]
    async fn authenticate(
        &self,
        strategy: &StrategyId,
        credentials: Credentials,
    ) -> Result<(), DelegationError> {
        let resolved = self.registry.resolve(strategy).await?;
        resolved.authenticate(&credentials).await?;
        Ok(())
    }
}
