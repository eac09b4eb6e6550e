//! # Loginrelay - Credential Capture & Delegation Library
//!
//! This is a facade crate that re-exports the public APIs of the loginrelay
//! components. Use this crate to wire a login screen's submit action to a
//! session authenticator in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Credentials`, `StrategyId`
//! - **Port traits**: `SessionAuthenticator`, `Strategy`, `StrategyRegistry`
//! - **Controller behavior**: `LoginForm`, `CredentialLogin`
//! - **Adapters**: `HashMapStrategyRegistry`, `RegistryAuthenticator`
//!
//! ## Usage
//!
//! ```ignore
//! let registry = HashMapStrategyRegistry::new();
//! registry
//!     .register(StrategyId::default(), Arc::new(my_oauth2_strategy))
//!     .await;
//!
//! let form = LoginForm::new();
//! let login = CredentialLogin::new(RegistryAuthenticator::new(registry), form.clone());
//!
//! // UI bindings write into `form`; the submit gesture triggers:
//! login.authenticate().await?;
//! ```

// ============================================================================
// Core Domain Types & Ports
// ============================================================================

pub use loginrelay_core::{
    Credentials, SessionAuthenticator, Strategy, StrategyError, StrategyId, StrategyRegistry,
    StrategyRegistryError,
};

// ============================================================================
// Controller Behavior
// ============================================================================

pub use loginrelay_controller::{CredentialLogin, LoginForm};

// ============================================================================
// Adapters (Reference Implementations)
// ============================================================================

pub use loginrelay_adapters::{DelegationError, HashMapStrategyRegistry, RegistryAuthenticator};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
