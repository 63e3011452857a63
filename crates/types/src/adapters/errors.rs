//! Error types for adapter operations

use thiserror::Error;

/// Validation errors for adapter metadata
#[derive(Error, Debug)]
pub enum AdapterValidationError {
	#[error("Invalid adapter ID: {adapter_id}")]
	InvalidAdapterId { adapter_id: String },

	#[error("Invalid adapter name: {name}")]
	InvalidAdapterName { name: String },

	#[error("Invalid version format: {version}")]
	InvalidVersion { version: String },

	#[error("Missing required field: {field}")]
	MissingRequiredField { field: String },
}

/// Adapter operation errors
#[derive(Error, Debug)]
pub enum AdapterError {
	#[error("Adapter validation failed: {0}")]
	Validation(#[from] AdapterValidationError),

	#[error("HTTP request failed: {0}")]
	HttpError(#[from] reqwest::Error),

	#[error("HTTP {status_code}: {reason}")]
	HttpStatusError { status_code: u16, reason: String },

	#[error("Invalid response format: {reason}")]
	InvalidResponse { reason: String },

	#[error("Timeout occurred after {timeout_ms}ms")]
	Timeout { timeout_ms: u64 },

	#[error("Swap execution failed: {reason}")]
	ExecutionFailed { reason: String },

	#[error("Chain not supported: {chain_id} by adapter {adapter_id}")]
	ChainNotSupported { chain_id: u64, adapter_id: String },

	#[error("Unsupported operation: {operation} for adapter {adapter_id}")]
	UnsupportedOperation {
		operation: String,
		adapter_id: String,
	},

	#[error("Unsupported adapter: {0}")]
	UnsupportedAdapter(String),

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

impl AdapterError {
	/// Extract HTTP status code from the error if available
	pub fn status_code(&self) -> Option<u16> {
		match self {
			AdapterError::HttpStatusError { status_code, .. } => Some(*status_code),
			AdapterError::HttpError(reqwest_error) => {
				reqwest_error.status().map(|status| status.as_u16())
			},
			_ => None,
		}
	}

	/// Create an HTTP failure error with the given status code and reason
	pub fn http_failure(status_code: u16, reason: impl Into<String>) -> Self {
		Self::HttpStatusError {
			status_code,
			reason: reason.into(),
		}
	}

	/// Create an HTTP failure error from response status with default reason
	pub fn from_http_failure(status_code: u16) -> Self {
		let reason = match status_code {
			400 => "Bad Request".to_string(),
			401 => "Unauthorized".to_string(),
			403 => "Forbidden".to_string(),
			404 => "Not Found".to_string(),
			408 => "Request Timeout".to_string(),
			429 => "Too Many Requests".to_string(),
			500 => "Internal Server Error".to_string(),
			502 => "Bad Gateway".to_string(),
			503 => "Service Unavailable".to_string(),
			504 => "Gateway Timeout".to_string(),
			_ => format!("HTTP Error {}", status_code),
		};

		Self::HttpStatusError {
			status_code,
			reason,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_status_code_extraction() {
		let error = AdapterError::HttpStatusError {
			status_code: 404,
			reason: "Not Found".to_string(),
		};
		assert_eq!(error.status_code(), Some(404));

		let error = AdapterError::http_failure(500, "Internal Server Error");
		assert_eq!(error.status_code(), Some(500));

		let error = AdapterError::InvalidResponse {
			reason: "Bad response".to_string(),
		};
		assert_eq!(error.status_code(), None);
	}

	#[test]
	fn test_http_failure_status_message_mapping() {
		let error = AdapterError::from_http_failure(429);
		assert!(error.to_string().contains("429"));
		assert!(error.to_string().contains("Too Many Requests"));

		let error = AdapterError::from_http_failure(418);
		assert!(error.to_string().contains("HTTP Error 418"));
	}

	#[test]
	fn test_timeout_error_display() {
		let error = AdapterError::Timeout { timeout_ms: 30_000 };
		assert_eq!(error.to_string(), "Timeout occurred after 30000ms");
	}
}
