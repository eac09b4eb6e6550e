//! Login-screen controller behavior: capture credentials from UI-bound form
//! state and hand them to a session authenticator.
//!
//! A UI controller composes two pieces from this crate:
//!
//! - [`LoginForm`] - the observable `identification`/`password` field state
//!   the screen's inputs write into;
//! - [`CredentialLogin`] - the `authenticate` action, wired to an injected
//!   [`SessionAuthenticator`](loginrelay_core::SessionAuthenticator).
//!
//! The behavior's one guarantee beyond forwarding: the password field is
//! cleared before the authenticator sees the attempt, on every code path.

pub mod credential_login;
pub mod login_form;

pub use credential_login::CredentialLogin;
pub use login_form::LoginForm;
