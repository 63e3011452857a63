//! Core adapter domain model and provider configuration

use std::collections::HashMap;

pub mod errors;
pub mod execution;
pub mod traits;

pub use errors::{AdapterError, AdapterValidationError};
pub use execution::{
	ExecutionClient, ExecutionStep, ExecutionStepItem, ProgressSink, StepTxHash, WalletClient,
};
pub use traits::SwapAdapter;

/// Result types for adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;
pub type AdapterValidationResult<T> = Result<T, AdapterValidationError>;

/// Minimal runtime configuration needed by adapters
///
/// Only the fields adapter implementations actually need per call: the rest of
/// the provider registration (display metadata, enablement, etc.) stays with
/// the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRuntimeConfig {
	/// Unique provider instance identifier
	pub provider_id: String,

	/// HTTP endpoint for the provider API
	pub endpoint: String,

	/// Timeout for requests and swap execution in milliseconds
	pub timeout_ms: u64,

	/// Optional custom HTTP headers for requests
	pub headers: Option<HashMap<String, String>>,
}

impl ProviderRuntimeConfig {
	/// Create a new runtime config
	pub fn new(provider_id: String, endpoint: String, timeout_ms: u64) -> Self {
		Self {
			provider_id,
			endpoint,
			timeout_ms,
			headers: None,
		}
	}

	/// Create runtime config with optional headers
	pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
		self.headers = Some(headers);
		self
	}
}

/// Core adapter identity and display metadata
///
/// Every adapter exposes one of these; the calling UI renders the name and
/// icon and keys analytics by the adapter ID.
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterInfo {
	/// Unique identifier for the adapter
	pub adapter_id: String,

	/// Human-readable name
	pub name: String,

	/// URL of the provider's logo
	pub icon: String,

	/// Version of the adapter implementation
	pub version: String,
}

impl AdapterInfo {
	/// Create a new adapter info record
	pub fn new(adapter_id: String, name: String, icon: String, version: String) -> Self {
		Self {
			adapter_id,
			name,
			icon,
			version,
		}
	}

	/// Validate the adapter metadata
	pub fn validate(&self) -> AdapterValidationResult<()> {
		if self.adapter_id.is_empty() {
			return Err(AdapterValidationError::MissingRequiredField {
				field: "adapter_id".to_string(),
			});
		}

		if !self
			.adapter_id
			.chars()
			.all(|c| c.is_alphanumeric() || c == '-' || c == '_')
		{
			return Err(AdapterValidationError::InvalidAdapterId {
				adapter_id: self.adapter_id.clone(),
			});
		}

		if self.name.is_empty() {
			return Err(AdapterValidationError::MissingRequiredField {
				field: "name".to_string(),
			});
		}

		if self.name.len() > 100 {
			return Err(AdapterValidationError::InvalidAdapterName {
				name: self.name.clone(),
			});
		}

		if self.version.is_empty() {
			return Err(AdapterValidationError::MissingRequiredField {
				field: "version".to_string(),
			});
		}

		if !is_valid_semver(&self.version) {
			return Err(AdapterValidationError::InvalidVersion {
				version: self.version.clone(),
			});
		}

		Ok(())
	}
}

/// Helper function to validate semantic version format
fn is_valid_semver(version: &str) -> bool {
	let parts: Vec<&str> = version.split('.').collect();
	if parts.len() != 3 {
		return false;
	}

	parts.iter().all(|part| part.parse::<u32>().is_ok())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn create_test_info() -> AdapterInfo {
		AdapterInfo::new(
			"test-adapter".to_string(),
			"Test Adapter".to_string(),
			"https://example.com/icon.png".to_string(),
			"1.0.0".to_string(),
		)
	}

	#[test]
	fn test_adapter_info_creation() {
		let info = create_test_info();

		assert_eq!(info.adapter_id, "test-adapter");
		assert_eq!(info.name, "Test Adapter");
		assert_eq!(info.version, "1.0.0");
		assert!(info.validate().is_ok());
	}

	#[test]
	fn test_adapter_info_validation() {
		let mut info = create_test_info();
		info.adapter_id = "bad id!".to_string();
		assert!(matches!(
			info.validate(),
			Err(AdapterValidationError::InvalidAdapterId { .. })
		));

		let mut info = create_test_info();
		info.version = "1.0".to_string();
		assert!(matches!(
			info.validate(),
			Err(AdapterValidationError::InvalidVersion { .. })
		));

		let mut info = create_test_info();
		info.name = String::new();
		assert!(matches!(
			info.validate(),
			Err(AdapterValidationError::MissingRequiredField { .. })
		));
	}

	#[test]
	fn test_runtime_config_builder() {
		let mut headers = HashMap::new();
		headers.insert("X-Api-Key".to_string(), "secret".to_string());

		let config = ProviderRuntimeConfig::new(
			"relay".to_string(),
			"https://api.relay.link".to_string(),
			30_000,
		)
		.with_headers(headers);

		assert_eq!(config.provider_id, "relay");
		assert_eq!(config.timeout_ms, 30_000);
		assert!(config.headers.is_some());
	}
}
