//! Submitted swap records and status tracking

use serde::{Deserialize, Serialize};

use crate::models::{ChainId, RawAmount, Token};

/// Record of a submitted cross-chain swap
///
/// Created once execution produces a source transaction hash; afterwards used
/// only to poll the provider's status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedTxResponse {
	/// Address that funded the swap
	pub sender: String,
	/// Transaction hash on the source chain
	pub source_tx_hash: String,
	/// ID of the adapter that executed the swap
	pub adapter: String,
	/// Provider-assigned request ID, the key for status polling
	pub id: String,
	/// Source chain ID
	pub source_chain: ChainId,
	/// Destination chain ID
	pub target_chain: ChainId,
	/// Raw input amount
	pub input_amount: RawAmount,
	/// Raw quoted output amount
	pub output_amount: RawAmount,
	/// Token sold
	pub source_token: Token,
	/// Token bought
	pub target_token: Token,
	/// Submission time in unix milliseconds
	pub timestamp_ms: i64,
}

/// Terminal and in-flight states of a submitted swap
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SwapState {
	/// Funds delivered on the destination chain
	Success,
	/// Deposit returned to the sender
	Refunded,
	/// Swap failed without a refund
	Failed,
	/// Still in flight; keep polling
	Processing,
}

impl SwapState {
	/// Whether polling can stop
	pub fn is_terminal(&self) -> bool {
		!matches!(self, SwapState::Processing)
	}
}

/// Status snapshot polled from a provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwapStatus {
	/// Current swap state
	pub status: SwapState,
	/// Destination-chain transaction hash, once known
	pub tx_hash: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_terminal_states() {
		assert!(SwapState::Success.is_terminal());
		assert!(SwapState::Refunded.is_terminal());
		assert!(SwapState::Failed.is_terminal());
		assert!(!SwapState::Processing.is_terminal());
	}

	#[test]
	fn test_swap_status_serde_round_trip() {
		let status = SwapStatus {
			status: SwapState::Success,
			tx_hash: Some("0xabc".to_string()),
		};

		let json = serde_json::to_string(&status).unwrap();
		let back: SwapStatus = serde_json::from_str(&json).unwrap();
		assert_eq!(back, status);
	}
}
