//! End-to-end flow: form entry -> credential capture -> registry-backed
//! delegation -> strategy verdict.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use loginrelay::{
    CredentialLogin, Credentials, DelegationError, ExposeSecret, HashMapStrategyRegistry,
    LoginForm, RegistryAuthenticator, Strategy, StrategyError, StrategyId, StrategyRegistryError,
    async_trait,
};

/// Accepts exactly one identification/password pair.
struct FixedPairStrategy {
    identification: &'static str,
    password: &'static str,
    attempts: AtomicUsize,
}

impl FixedPairStrategy {
    fn new(identification: &'static str, password: &'static str) -> Self {
        Self {
            identification,
            password,
            attempts: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Strategy for FixedPairStrategy {
    async fn authenticate(&self, credentials: &Credentials) -> Result<(), StrategyError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        let password_matches = credentials
            .password()
            .is_some_and(|p| p.expose_secret() == self.password);

        if credentials.identification() == self.identification && password_matches {
            Ok(())
        } else {
            Err(StrategyError::InvalidCredentials)
        }
    }
}

async fn registry_with(
    id: StrategyId,
    strategy: Arc<FixedPairStrategy>,
) -> HashMapStrategyRegistry {
    let registry = HashMapStrategyRegistry::new();
    registry.register(id, strategy).await;
    registry
}

#[tokio::test]
async fn successful_login_clears_the_password_field() {
    let strategy = Arc::new(FixedPairStrategy::new("alice", "secret"));
    let registry = registry_with(StrategyId::default(), strategy.clone()).await;

    let form = LoginForm::new();
    form.set_identification("alice");
    form.set_password("secret");
    let login = CredentialLogin::new(RegistryAuthenticator::new(registry), form.clone());

    login.authenticate().await.unwrap();

    assert_eq!(strategy.attempts.load(Ordering::SeqCst), 1);
    assert!(form.password().is_none());
    assert_eq!(form.identification(), "alice");
}

#[tokio::test]
async fn rejected_login_still_clears_the_password_field() {
    let strategy = Arc::new(FixedPairStrategy::new("alice", "secret"));
    let registry = registry_with(StrategyId::default(), strategy).await;

    let form = LoginForm::new();
    form.set_identification("alice");
    form.set_password("wrong");
    let login = CredentialLogin::new(RegistryAuthenticator::new(registry), form.clone());

    let result = login.authenticate().await;

    assert_eq!(
        result,
        Err(DelegationError::Strategy(StrategyError::InvalidCredentials))
    );
    assert!(form.password().is_none());
}

#[tokio::test]
async fn misconfigured_strategy_id_fails_in_the_delegation_target() {
    let strategy = Arc::new(FixedPairStrategy::new("alice", "secret"));
    let registry = registry_with(StrategyId::default(), strategy).await;

    let form = LoginForm::new();
    form.set_identification("alice");
    form.set_password("secret");

    // The behavior accepts any configured id; the registry is where an
    // unknown one fails.
    let misconfigured = StrategyId::new("authenticators:typo");
    let login = CredentialLogin::with_strategy(
        RegistryAuthenticator::new(registry),
        form.clone(),
        misconfigured.clone(),
    );

    let result = login.authenticate().await;

    assert_eq!(
        result,
        Err(DelegationError::Registry(
            StrategyRegistryError::UnknownStrategy(misconfigured)
        ))
    );
    assert!(form.password().is_none());
}
