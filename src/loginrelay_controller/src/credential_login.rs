use loginrelay_core::{SessionAuthenticator, StrategyId};

use crate::login_form::LoginForm;

/// Gives a login screen's controller its `authenticate` action.
///
/// On submit, the behavior snapshots the form's `identification` and
/// `password` fields, clears the password so the secret does not stay in
/// memory longer than necessary, and hands the snapshot to the injected
/// [`SessionAuthenticator`] under the configured [`StrategyId`]. It adds
/// nothing else: no validation of the captured values, no interpretation of
/// the authenticator's verdict.
///
/// # Example
///
/// ```ignore
/// let form = LoginForm::new();
/// let login = CredentialLogin::new(session, form.clone());
///
/// // The screen binds its inputs to the form and its submit gesture to the
/// // action:
/// form.set_identification(entered_identification);
/// form.set_password(entered_password);
/// login.authenticate().await?;
/// ```
pub struct CredentialLogin<A>
where
    A: SessionAuthenticator,
{
    strategy: StrategyId,
    session: A,
    form: LoginForm,
}

impl<A> CredentialLogin<A>
where
    A: SessionAuthenticator,
{
    /// Compose the behavior with the default OAuth2 password strategy.
    pub fn new(session: A, form: LoginForm) -> Self {
        Self::with_strategy(session, form, StrategyId::default())
    }

    /// Compose the behavior with an explicit strategy.
    pub fn with_strategy(session: A, form: LoginForm, strategy: StrategyId) -> Self {
        Self {
            strategy,
            session,
            form,
        }
    }

    pub fn strategy(&self) -> &StrategyId {
        &self.strategy
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    /// Snapshot the form, clear its password field, and run the configured
    /// strategy against the snapshot.
    ///
    /// The clear happens before the authenticator observes anything and
    /// sticks regardless of the outcome; the authenticator's verdict is
    /// returned as-is. Overlapping invocations are not deduplicated - each
    /// one independently snapshots and clears, so callers wanting to guard
    /// against double submits must disable the submit control themselves.
    #[tracing::instrument(name = "CredentialLogin::authenticate", skip(self))]
    pub async fn authenticate(&self) -> Result<(), A::Error> {
        let credentials = self.form.take_credentials();
        self.session.authenticate(&self.strategy, credentials).await
    }
}
