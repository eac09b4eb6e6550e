//! In-memory reference implementations of the collaborator ports consumed by
//! the login behavior.
//!
//! These are the smallest useful stand-ins for a real session subsystem:
//! a hash-map strategy registry and a delegation target that resolves the
//! named strategy and runs it. Production embedders typically supply their
//! own [`SessionAuthenticator`](loginrelay_core::SessionAuthenticator)
//! wired into their session store.

pub mod delegation;
pub mod registry;

pub use delegation::registry_authenticator::{DelegationError, RegistryAuthenticator};
pub use registry::hashmap_strategy_registry::HashMapStrategyRegistry;
