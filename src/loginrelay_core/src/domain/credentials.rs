use secrecy::Secret;
use serde::Deserialize;

/// The field values of a single login attempt.
///
/// A `Credentials` is built fresh from the form state on every authenticate
/// invocation and lives only for the one delegation call; nothing caches or
/// retains it. The password rides in a [`Secret`] so it never appears in
/// `Debug` output and its backing memory is zeroized on drop.
///
/// `password` is an `Option` because the form's password field can already
/// have been cleared when the snapshot is taken (e.g. a second submit racing
/// a pending attempt). A cleared field forwards as `None`, which is distinct
/// from a user-entered empty string.
#[derive(Clone, Debug, Deserialize)]
pub struct Credentials {
    identification: String,
    password: Option<Secret<String>>,
}

impl Credentials {
    pub fn new(identification: impl Into<String>, password: Option<Secret<String>>) -> Self {
        Self {
            identification: identification.into(),
            password,
        }
    }

    /// The opaque user identifier (username, email, ...). Not sensitive.
    pub fn identification(&self) -> &str {
        &self.identification
    }

    pub fn password(&self) -> Option<&Secret<String>> {
        self.password.as_ref()
    }
}
