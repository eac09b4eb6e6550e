pub mod registry_authenticator;

pub use registry_authenticator::{DelegationError, RegistryAuthenticator};
