use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use loginrelay_core::Credentials;
use secrecy::Secret;

#[derive(Default)]
struct FormFields {
    identification: String,
    password: Option<Secret<String>>,
}

/// UI-bound login form state: the `identification` and `password` fields a
/// login screen's inputs write into.
///
/// The form is a shared handle - clone it to hand the same underlying state
/// to the screen's input bindings and to the login behavior. The behavior
/// only ever touches it through [`take_credentials`](Self::take_credentials).
#[derive(Clone, Default)]
pub struct LoginForm {
    fields: Arc<Mutex<FormFields>>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_identification(&self, identification: impl Into<String>) {
        self.lock().identification = identification.into();
    }

    pub fn set_password(&self, password: impl Into<String>) {
        self.lock().password = Some(Secret::new(password.into()));
    }

    pub fn identification(&self) -> String {
        self.lock().identification.clone()
    }

    /// Current value of the password field, `None` once cleared.
    pub fn password(&self) -> Option<Secret<String>> {
        self.lock().password.clone()
    }

    /// Snapshot both fields and clear the password, in one atomic step.
    ///
    /// The snapshot carries exactly what the form held at the moment of the
    /// call; the form's password field is `None` by the time this returns.
    /// Both happen under a single guard, so a concurrent caller observes
    /// either the untouched or the cleared state, never a torn one. Dropping
    /// the snapshot later zeroizes the secret's backing memory.
    ///
    /// Non-suspending: safe to call from the synchronous part of an async
    /// submit handler.
    pub fn take_credentials(&self) -> Credentials {
        let mut fields = self.lock();
        let password = fields.password.take();
        Credentials::new(fields.identification.clone(), password)
    }

    fn lock(&self) -> MutexGuard<'_, FormFields> {
        // A poisoned guard still holds well-formed fields.
        self.fields.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
