//! Mock collaborators for tests and demos
//!
//! The execution client is the opaque provider SDK seam; these mocks replay
//! scripted progress events so swap execution can be tested hermetically.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use xcswap_types::{
	constants::{STEP_ID_DEPOSIT, STEP_KIND_TRANSACTION},
	AdapterError, AdapterResult, ExecutionClient, ExecutionStep, ExecutionStepItem, ProgressSink,
	StepTxHash, WalletClient,
};

/// Wallet stub exposing a fixed address
#[derive(Debug, Clone)]
pub struct MockWallet {
	address: String,
}

impl MockWallet {
	pub fn new(address: &str) -> Self {
		Self {
			address: address.to_string(),
		}
	}
}

impl WalletClient for MockWallet {
	fn address(&self) -> &str {
		&self.address
	}
}

/// Scripted execution client
///
/// Replays a fixed sequence of progress steps, optionally failing instead.
/// A `silent` instance emits nothing and returns cleanly, which exercises the
/// adapter's execution deadline.
#[derive(Debug, Default)]
pub struct MockExecutionClient {
	steps: Vec<ExecutionStep>,
	fail_reason: Option<String>,
	calls: AtomicUsize,
}

impl MockExecutionClient {
	/// Emit the given steps in order, then finish cleanly
	pub fn with_steps(steps: Vec<ExecutionStep>) -> Self {
		Self {
			steps,
			..Self::default()
		}
	}

	/// Emit nothing and finish cleanly
	pub fn silent() -> Self {
		Self::default()
	}

	/// Fail immediately with the given reason
	pub fn failing(reason: &str) -> Self {
		Self {
			fail_reason: Some(reason.to_string()),
			..Self::default()
		}
	}

	/// Number of times `execute` has been called
	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl ExecutionClient for MockExecutionClient {
	async fn execute(
		&self,
		_raw_quote: &serde_json::Value,
		_wallet: &dyn WalletClient,
		on_progress: ProgressSink,
	) -> AdapterResult<()> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		if let Some(reason) = &self.fail_reason {
			return Err(AdapterError::ExecutionFailed {
				reason: reason.clone(),
			});
		}

		for step in &self.steps {
			on_progress(step.clone());
		}

		Ok(())
	}
}

/// Build a deposit transaction step carrying the given hashes
pub fn deposit_step(request_id: &str, tx_hashes: &[&str]) -> ExecutionStep {
	ExecutionStep {
		id: STEP_ID_DEPOSIT.to_string(),
		kind: Some(STEP_KIND_TRANSACTION.to_string()),
		request_id: Some(request_id.to_string()),
		items: vec![ExecutionStepItem {
			tx_hashes: tx_hashes
				.iter()
				.map(|h| StepTxHash {
					tx_hash: h.to_string(),
					chain_id: None,
				})
				.collect(),
		}],
	}
}

/// Build a non-deposit progress step
pub fn progress_step(id: &str, kind: &str) -> ExecutionStep {
	ExecutionStep {
		id: id.to_string(),
		kind: Some(kind.to_string()),
		request_id: None,
		items: Vec::new(),
	}
}
