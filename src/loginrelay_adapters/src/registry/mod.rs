pub mod hashmap_strategy_registry;

pub use hashmap_strategy_registry::HashMapStrategyRegistry;
