//! XCSwap Adapters
//!
//! Provider-specific adapters for the cross-chain swap aggregator.

pub mod client_cache;
pub mod mocks;
pub mod relay_adapter;

pub use client_cache::ClientCache;
pub use relay_adapter::{RelayAdapter, MAINNET_RELAY_API, RELAY_ADAPTER_ID};
pub use xcswap_types::{AdapterError, AdapterResult, SwapAdapter};

use std::collections::HashMap;
use std::sync::Arc;
use xcswap_types::{ExecutionClient, ProviderRuntimeConfig};

/// Default request/execution timeout for provider calls
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Factory and registry for swap provider adapters
pub struct AdapterFactory {
	adapters: HashMap<String, Box<dyn SwapAdapter>>,
}

impl AdapterFactory {
	pub fn new() -> Self {
		Self {
			adapters: HashMap::new(),
		}
	}

	/// Create an adapter by its registered ID
	pub fn create_adapter(
		adapter_id: &str,
		executor: Arc<dyn ExecutionClient>,
	) -> AdapterResult<Box<dyn SwapAdapter>> {
		match adapter_id {
			RELAY_ADAPTER_ID => Ok(Box::new(RelayAdapter::with_default_config(executor)?)),
			_ => Err(AdapterError::UnsupportedAdapter(adapter_id.to_string())),
		}
	}

	/// Default runtime configuration for a known adapter
	pub fn default_runtime_config(adapter_id: &str) -> AdapterResult<ProviderRuntimeConfig> {
		match adapter_id {
			RELAY_ADAPTER_ID => Ok(ProviderRuntimeConfig::new(
				"relay".to_string(),
				MAINNET_RELAY_API.to_string(),
				DEFAULT_TIMEOUT_MS,
			)),
			_ => Err(AdapterError::UnsupportedAdapter(adapter_id.to_string())),
		}
	}

	pub fn register(&mut self, id: String, adapter: Box<dyn SwapAdapter>) {
		self.adapters.insert(id, adapter);
	}

	pub fn get(&self, id: &str) -> Option<&dyn SwapAdapter> {
		self.adapters.get(id).map(|adapter| adapter.as_ref())
	}

	pub fn get_all(&self) -> &HashMap<String, Box<dyn SwapAdapter>> {
		&self.adapters
	}
}

impl Default for AdapterFactory {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::mocks::MockExecutionClient;

	#[test]
	fn test_factory_creates_relay_adapter() {
		let executor: Arc<dyn ExecutionClient> = Arc::new(MockExecutionClient::silent());
		let adapter = AdapterFactory::create_adapter(RELAY_ADAPTER_ID, executor).unwrap();

		assert_eq!(adapter.id(), RELAY_ADAPTER_ID);
		assert_eq!(adapter.name(), "Relay");
	}

	#[test]
	fn test_factory_rejects_unknown_adapter() {
		let executor: Arc<dyn ExecutionClient> = Arc::new(MockExecutionClient::silent());

		assert!(matches!(
			AdapterFactory::create_adapter("unknown-v1", executor),
			Err(AdapterError::UnsupportedAdapter(_))
		));
	}

	#[test]
	fn test_default_runtime_config() {
		let config = AdapterFactory::default_runtime_config(RELAY_ADAPTER_ID).unwrap();
		assert_eq!(config.endpoint, MAINNET_RELAY_API);
		assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);

		assert!(AdapterFactory::default_runtime_config("unknown-v1").is_err());
	}

	#[test]
	fn test_registry_round_trip() {
		let executor: Arc<dyn ExecutionClient> = Arc::new(MockExecutionClient::silent());
		let adapter = AdapterFactory::create_adapter(RELAY_ADAPTER_ID, executor).unwrap();

		let mut factory = AdapterFactory::new();
		factory.register(RELAY_ADAPTER_ID.to_string(), adapter);

		assert!(factory.get(RELAY_ADAPTER_ID).is_some());
		assert!(factory.get("missing").is_none());
		assert_eq!(factory.get_all().len(), 1);
	}
}
