//! Seams for the opaque provider execution SDK and wallet
//!
//! Providers drive swap execution through their own client libraries, which
//! emit progress callbacks as a swap moves through stages. These traits model
//! that collaborator so adapters can be tested without a live provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::Arc;

use super::AdapterResult;
use crate::constants::{STEP_ID_DEPOSIT, STEP_KIND_TRANSACTION};
use crate::models::ChainId;

/// Wallet abstraction passed through to the execution client
///
/// Signing and submission details are owned by the execution client; adapters
/// only need the funding address.
pub trait WalletClient: Send + Sync + Debug {
	/// Address funding the swap
	fn address(&self) -> &str;
}

/// One progress event emitted during swap execution
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStep {
	/// Stage identifier (e.g., "approve", "deposit")
	pub id: String,
	/// Step kind (e.g., "transaction", "signature")
	#[serde(default)]
	pub kind: Option<String>,
	/// Provider-assigned request ID, present once the provider has one
	#[serde(default)]
	pub request_id: Option<String>,
	/// Per-step items carrying transaction hashes
	#[serde(default)]
	pub items: Vec<ExecutionStepItem>,
}

/// Item within a progress step
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStepItem {
	/// Hashes of transactions submitted for this item
	#[serde(default)]
	pub tx_hashes: Vec<StepTxHash>,
}

/// Transaction hash reported within a step item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepTxHash {
	/// Transaction hash
	pub tx_hash: String,
	/// Chain the transaction was submitted on
	#[serde(default)]
	pub chain_id: Option<ChainId>,
}

impl ExecutionStep {
	/// Whether this step is the deposit transaction stage with a request ID
	pub fn is_deposit_transaction(&self) -> bool {
		self.id == STEP_ID_DEPOSIT
			&& self.kind.as_deref() == Some(STEP_KIND_TRANSACTION)
			&& self.request_id.is_some()
	}

	/// First transaction hash reported by this step, if any
	pub fn first_tx_hash(&self) -> Option<&str> {
		self.items
			.first()
			.and_then(|item| item.tx_hashes.first())
			.map(|entry| entry.tx_hash.as_str())
	}
}

/// Callback invoked for every progress event during execution
pub type ProgressSink = Arc<dyn Fn(ExecutionStep) + Send + Sync>;

/// Opaque provider execution client
///
/// Wraps the provider's SDK: takes the raw quote payload, drives wallet
/// interactions, and reports progress through `on_progress` on an unspecified
/// schedule until the swap either completes or fails.
#[async_trait]
pub trait ExecutionClient: Send + Sync + Debug {
	async fn execute(
		&self,
		raw_quote: &serde_json::Value,
		wallet: &dyn WalletClient,
		on_progress: ProgressSink,
	) -> AdapterResult<()>;
}
