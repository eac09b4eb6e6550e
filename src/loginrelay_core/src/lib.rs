pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{credentials::Credentials, strategy_id::StrategyId};

pub use ports::{
    delegation::SessionAuthenticator,
    strategy::{Strategy, StrategyError, StrategyRegistry, StrategyRegistryError},
};
