use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{credentials::Credentials, strategy_id::StrategyId};

// Strategy port trait and errors
#[derive(Debug, Error, PartialEq)]
pub enum StrategyError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("credential exchange failed: {0}")]
    Exchange(String),
}

/// A named, pluggable authenticator.
///
/// A strategy performs the actual credential exchange with its backend and
/// reports the verdict. Strategies are looked up by [`StrategyId`] through a
/// [`StrategyRegistry`], so the trait is object-safe and all strategies share
/// the [`StrategyError`] surface.
#[async_trait]
pub trait Strategy: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<(), StrategyError>;
}

// StrategyRegistry port trait and errors
#[derive(Debug, Error, PartialEq)]
pub enum StrategyRegistryError {
    #[error("unknown strategy `{0}`")]
    UnknownStrategy(StrategyId),
}

/// Resolves a [`StrategyId`] to the strategy registered under it.
#[async_trait]
pub trait StrategyRegistry: Send + Sync {
    async fn resolve(&self, id: &StrategyId) -> Result<Arc<dyn Strategy>, StrategyRegistryError>;
}
