use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use loginrelay_core::{Strategy, StrategyId, StrategyRegistry, StrategyRegistryError};

#[derive(Default, Clone)]
pub struct HashMapStrategyRegistry {
    strategies: Arc<RwLock<HashMap<StrategyId, Arc<dyn Strategy>>>>,
}

impl HashMapStrategyRegistry {
    pub fn new() -> Self {
        Self {
            strategies: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a strategy under the given id, replacing any previous one.
    pub async fn register(&self, id: StrategyId, strategy: Arc<dyn Strategy>) {
        let mut strategies = self.strategies.write().await;
        strategies.insert(id, strategy);
    }
}

#[async_trait::async_trait]
impl StrategyRegistry for HashMapStrategyRegistry {
    async fn resolve(&self, id: &StrategyId) -> Result<Arc<dyn Strategy>, StrategyRegistryError> {
        let strategies = self.strategies.read().await;
        strategies
            .get(id)
            .cloned()
            .ok_or_else(|| StrategyRegistryError::UnknownStrategy(id.clone()))
    }
}
