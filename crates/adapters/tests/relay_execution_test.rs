//! End-to-end tests for the Relay execution bridge
//!
//! The provider execution client is callback-driven; these tests verify the
//! adapter turns that stream into a single-resolution future.

use std::sync::Arc;

use serde_json::json;
use xcswap_adapters::mocks::{deposit_step, progress_step, MockExecutionClient, MockWallet};
use xcswap_adapters::{AdapterError, RelayAdapter, SwapAdapter, MAINNET_RELAY_API};
use xcswap_types::{
	models::chains, ExecutionStep, NormalizedQuote, ProviderRuntimeConfig, QuoteParams, RawAmount,
	Token,
};

fn test_quote() -> NormalizedQuote {
	let params = QuoteParams {
		from_chain: chains::ETHEREUM,
		to_chain: chains::ARBITRUM,
		from_token: Token::usdc_ethereum(),
		to_token: Token::usdc_arbitrum(),
		amount: RawAmount::from("100000000"),
		fee_bps: 25,
		fee_receiver: "0x1111111111111111111111111111111111111111".to_string(),
		sender: "0x2222222222222222222222222222222222222222".to_string(),
		recipient: "0x3333333333333333333333333333333333333333".to_string(),
		from_token_usd: 1.0,
		to_token_usd: 1.0,
	};

	NormalizedQuote {
		output_amount: RawAmount::from("98000000"),
		formatted_output_amount: "98".to_string(),
		input_usd: 100.0,
		output_usd: 98.0,
		price_impact: 2.0,
		rate: 0.98,
		gas_fee_usd: 1.25,
		time_estimate_secs: 30,
		contract_address: "0x0000000000000000000000000000000000000000".to_string(),
		raw_quote: json!({ "details": {} }),
		protocol_fee: 0.0,
		platform_fee_percent: 0.25,
		params,
	}
}

fn test_config(timeout_ms: u64) -> ProviderRuntimeConfig {
	ProviderRuntimeConfig::new(
		"relay".to_string(),
		MAINNET_RELAY_API.to_string(),
		timeout_ms,
	)
}

fn adapter_with(executor: MockExecutionClient) -> RelayAdapter {
	RelayAdapter::with_default_config(Arc::new(executor)).unwrap()
}

#[tokio::test]
async fn resolves_on_first_qualifying_deposit_step() {
	// Earlier stages and a hashless deposit must not resolve; the second
	// deposit hash must be discarded.
	let steps: Vec<ExecutionStep> = vec![
		progress_step("approve", "transaction"),
		progress_step("deposit", "signature"),
		deposit_step("0xrequest", &[]),
		deposit_step("0xrequest", &["0xfirst"]),
		deposit_step("0xrequest", &["0xsecond"]),
	];

	let adapter = adapter_with(MockExecutionClient::with_steps(steps));
	let wallet = MockWallet::new("0x2222222222222222222222222222222222222222");
	let quote = test_quote();

	let tx = adapter
		.execute_swap(&quote, &wallet, &test_config(5_000))
		.await
		.unwrap();

	assert_eq!(tx.source_tx_hash, "0xfirst");
	assert_eq!(tx.id, "0xrequest");
	assert_eq!(tx.adapter, "Relay");

	// The record is built from the quote, not the callback payload
	assert_eq!(tx.sender, quote.params.sender);
	assert_eq!(tx.source_chain, chains::ETHEREUM);
	assert_eq!(tx.target_chain, chains::ARBITRUM);
	assert_eq!(tx.input_amount, quote.params.amount);
	assert_eq!(tx.output_amount, quote.output_amount);
	assert_eq!(tx.source_token, quote.params.from_token);
	assert_eq!(tx.target_token, quote.params.to_token);
	assert!(tx.timestamp_ms > 0);
}

#[tokio::test]
async fn propagates_execution_client_errors() {
	let adapter = adapter_with(MockExecutionClient::failing("user rejected signature"));
	let wallet = MockWallet::new("0x2222222222222222222222222222222222222222");

	let err = adapter
		.execute_swap(&test_quote(), &wallet, &test_config(5_000))
		.await
		.unwrap_err();

	match err {
		AdapterError::ExecutionFailed { reason } => {
			assert!(reason.contains("user rejected signature"));
		},
		other => panic!("expected ExecutionFailed, got {other}"),
	}
}

#[tokio::test]
async fn times_out_when_deposit_step_never_arrives() {
	// A provider that finishes cleanly without ever reporting the deposit
	// stage must not hang the caller.
	let adapter = adapter_with(MockExecutionClient::silent());
	let wallet = MockWallet::new("0x2222222222222222222222222222222222222222");

	let err = adapter
		.execute_swap(&test_quote(), &wallet, &test_config(100))
		.await
		.unwrap_err();

	assert!(matches!(err, AdapterError::Timeout { timeout_ms: 100 }));
}

#[tokio::test]
async fn times_out_when_only_non_qualifying_steps_arrive() {
	let steps = vec![
		progress_step("approve", "transaction"),
		progress_step("swap", "transaction"),
	];
	let adapter = adapter_with(MockExecutionClient::with_steps(steps));
	let wallet = MockWallet::new("0x2222222222222222222222222222222222222222");

	let err = adapter
		.execute_swap(&test_quote(), &wallet, &test_config(100))
		.await
		.unwrap_err();

	assert!(matches!(err, AdapterError::Timeout { timeout_ms: 100 }));
}

#[tokio::test]
async fn execution_client_is_called_once_per_swap() {
	let executor = Arc::new(MockExecutionClient::with_steps(vec![deposit_step(
		"0xrequest",
		&["0xhash"],
	)]));
	let adapter = RelayAdapter::with_default_config(executor.clone()).unwrap();
	let wallet = MockWallet::new("0x2222222222222222222222222222222222222222");

	adapter
		.execute_swap(&test_quote(), &wallet, &test_config(5_000))
		.await
		.unwrap();

	assert_eq!(executor.call_count(), 1);
}
