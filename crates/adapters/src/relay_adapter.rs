//! Relay adapter implementation
//!
//! This adapter uses an optimized client cache for connection pooling and
//! keep-alive. Quoting and status polling go through Relay's HTTP API;
//! execution is delegated to the opaque provider execution client.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{debug, warn};
use xcswap_types::{
	constants::ZERO_ADDRESS,
	models::{has_price_service, mainnet_chains, ChainId, RawAmount, Token},
	quotes::{price_impact, NormalizedQuote, QuoteParams},
	swaps::{NormalizedTxResponse, SwapState, SwapStatus},
	AdapterError, AdapterInfo, AdapterResult, ExecutionClient, ExecutionStep, ProgressSink,
	ProviderRuntimeConfig, SwapAdapter, WalletClient,
};

use crate::client_cache::{ClientCache, ClientConfig};

/// Adapter ID under which Relay is registered
pub const RELAY_ADAPTER_ID: &str = "relay-v1";

/// Relay mainnet API endpoint
pub const MAINNET_RELAY_API: &str = "https://api.relay.link";

const RELAY_ICON: &str =
	"https://storage.googleapis.com/ks-setting-1d682dca/84e906bb-eaeb-45d3-a64c-2aa9c84eb3ea1747759080942.png";

const TRADE_TYPE_EXACT_INPUT: &str = "EXACT_INPUT";

// ================================
// RELAY API MODELS
// ================================

/// Relay quote request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayQuoteRequest {
	/// Address funding the swap
	pub user: String,
	/// Source chain ID
	pub origin_chain_id: ChainId,
	/// Destination chain ID
	pub destination_chain_id: ChainId,
	/// Source token address (zero address for native)
	pub origin_currency: String,
	/// Destination token address (zero address for native)
	pub destination_currency: String,
	/// Raw input amount
	pub amount: String,
	/// Trade type, always exact-input here
	pub trade_type: &'static str,
	/// Recipient, omitted when identical to the sender
	#[serde(skip_serializing_if = "Option::is_none")]
	pub recipient: Option<String>,
	/// Platform fee line items
	pub app_fees: Vec<RelayAppFee>,
}

/// App fee line item forwarded with the quote request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayAppFee {
	/// Address receiving the fee
	pub recipient: String,
	/// Fee in basis points, as a string
	pub fee: String,
}

/// Relay quote response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelayQuoteResponse {
	/// Priced trade details
	pub details: Option<RelayQuoteDetails>,
	/// Fee breakdown
	pub fees: Option<RelayQuoteFees>,
}

/// Priced trade details within a Relay quote
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelayQuoteDetails {
	/// Input side valuation
	pub currency_in: Option<RelayCurrencyAmount>,
	/// Output side valuation
	pub currency_out: Option<RelayCurrencyAmount>,
	/// Estimated completion time in seconds
	pub time_estimate: Option<f64>,
	/// Provider-computed exchange rate
	pub rate: Option<String>,
}

/// Amount plus the provider's own USD valuation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelayCurrencyAmount {
	/// Raw amount in the token's smallest unit
	pub amount: Option<String>,
	/// USD valuation; Relay reports this as a decimal string
	pub amount_usd: Option<serde_json::Value>,
}

/// Fee breakdown within a Relay quote
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelayQuoteFees {
	/// Gas cost estimate
	pub gas: Option<RelayCurrencyAmount>,
}

/// Relay intent status response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelayStatusResponse {
	/// One of "success", "refund", "failure", or an in-flight value
	pub status: Option<String>,
	/// Destination-chain transaction hashes, once known
	pub tx_hashes: Vec<String>,
}

/// Parse the provider's USD valuation, which arrives as a string or number
fn usd_value(currency: &RelayCurrencyAmount) -> f64 {
	match &currency.amount_usd {
		Some(serde_json::Value::String(s)) => s.parse().unwrap_or(0.0),
		Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(0.0),
		_ => 0.0,
	}
}

fn parse_decimal(value: &str) -> f64 {
	value.parse().unwrap_or(0.0)
}

/// Client strategy for the Relay adapter
#[derive(Debug)]
enum ClientStrategy {
	/// Use optimized client cache for connection pooling and reuse
	Cached(ClientCache),
	/// Create clients on-demand with no caching
	OnDemand,
}

/// Relay adapter for cross-chain swaps
pub struct RelayAdapter {
	config: AdapterInfo,
	client_strategy: ClientStrategy,
	executor: Arc<dyn ExecutionClient>,
}

impl std::fmt::Debug for RelayAdapter {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RelayAdapter")
			.field("config", &self.config)
			.field("client_strategy", &self.client_strategy)
			.finish_non_exhaustive()
	}
}

impl RelayAdapter {
	/// Create a new Relay adapter with optimized client caching (recommended)
	pub fn new(config: AdapterInfo, executor: Arc<dyn ExecutionClient>) -> AdapterResult<Self> {
		Self::with_cache(config, executor, ClientCache::for_adapter())
	}

	/// Create Relay adapter with custom client cache
	///
	/// Allows using a custom cache configuration for specific performance
	/// requirements or testing scenarios.
	pub fn with_cache(
		config: AdapterInfo,
		executor: Arc<dyn ExecutionClient>,
		cache: ClientCache,
	) -> AdapterResult<Self> {
		config.validate()?;
		Ok(Self {
			config,
			client_strategy: ClientStrategy::Cached(cache),
			executor,
		})
	}

	/// Create Relay adapter without client caching
	///
	/// Creates clients on-demand for each request. Simpler but less efficient
	/// than the cached approach.
	pub fn without_cache(
		config: AdapterInfo,
		executor: Arc<dyn ExecutionClient>,
	) -> AdapterResult<Self> {
		config.validate()?;
		Ok(Self {
			config,
			client_strategy: ClientStrategy::OnDemand,
			executor,
		})
	}

	/// Create default Relay adapter instance with optimization
	pub fn with_default_config(executor: Arc<dyn ExecutionClient>) -> AdapterResult<Self> {
		let config = AdapterInfo::new(
			RELAY_ADAPTER_ID.to_string(),
			"Relay".to_string(),
			RELAY_ICON.to_string(),
			"1.0.0".to_string(),
		);

		Self::new(config, executor)
	}

	/// Create a new HTTP client for the given provider configuration
	fn create_client(
		provider_config: &ProviderRuntimeConfig,
	) -> AdapterResult<Arc<reqwest::Client>> {
		let mut headers = reqwest::header::HeaderMap::new();
		headers.insert(
			"Content-Type",
			reqwest::header::HeaderValue::from_static("application/json"),
		);
		headers.insert(
			"Accept",
			reqwest::header::HeaderValue::from_static("application/json"),
		);

		// Add custom headers from the provider config
		if let Some(provider_headers) = &provider_config.headers {
			for (key, value) in provider_headers {
				if let (Ok(header_name), Ok(header_value)) = (
					reqwest::header::HeaderName::from_bytes(key.as_bytes()),
					reqwest::header::HeaderValue::from_str(value),
				) {
					headers.insert(header_name, header_value);
				}
			}
		}

		let client = reqwest::Client::builder()
			.default_headers(headers)
			.build()
			.map_err(AdapterError::HttpError)?;

		Ok(Arc::new(client))
	}

	/// Get an HTTP client for the given provider configuration
	fn get_client(
		&self,
		provider_config: &ProviderRuntimeConfig,
	) -> AdapterResult<Arc<reqwest::Client>> {
		match &self.client_strategy {
			ClientStrategy::Cached(cache) => {
				let client_config = ClientConfig::from(provider_config);
				cache.get_client(&client_config)
			},
			ClientStrategy::OnDemand => Self::create_client(provider_config),
		}
	}

	/// Convert a Relay quote response into the normalized quote format
	fn convert_quote(
		&self,
		raw: serde_json::Value,
		resp: RelayQuoteResponse,
		params: &QuoteParams,
	) -> NormalizedQuote {
		let details = resp.details.unwrap_or_default();

		let output_amount = details
			.currency_out
			.as_ref()
			.and_then(|c| c.amount.clone())
			.map(RawAmount::from)
			.unwrap_or_else(|| RawAmount::from("0"));

		let formatted_output_amount = output_amount.format_units(params.to_token.decimals);
		let formatted_input_amount = params.amount.format_units(params.from_token.decimals);

		// Chains without a price feed fall back to the provider's own estimate
		let input_usd = if has_price_service(params.from_chain) {
			params.from_token_usd * parse_decimal(&formatted_input_amount)
		} else {
			details.currency_in.as_ref().map(usd_value).unwrap_or(0.0)
		};
		let output_usd = if has_price_service(params.to_chain) {
			params.to_token_usd * parse_decimal(&formatted_output_amount)
		} else {
			details.currency_out.as_ref().map(usd_value).unwrap_or(0.0)
		};

		let rate =
			parse_decimal(&formatted_output_amount) / parse_decimal(&formatted_input_amount);

		let gas_fee_usd = resp
			.fees
			.and_then(|f| f.gas)
			.map(|g| usd_value(&g))
			.unwrap_or(0.0);

		NormalizedQuote {
			params: params.clone(),
			output_amount,
			formatted_output_amount,
			input_usd,
			output_usd,
			price_impact: price_impact(input_usd, output_usd),
			rate,
			gas_fee_usd,
			time_estimate_secs: details.time_estimate.map(|t| t as u64).unwrap_or(0),
			// Relay takes the deposit directly, so nothing needs approval
			contract_address: ZERO_ADDRESS.to_string(),
			raw_quote: raw,
			protocol_fee: 0.0,
			platform_fee_percent: params.platform_fee_percent(),
		}
	}

	/// Map a Relay status response onto the swap status model
	///
	/// Unrecognized or missing status strings map to `Processing` so callers
	/// keep polling rather than fail on a provider vocabulary change.
	fn map_status_response(resp: RelayStatusResponse) -> SwapStatus {
		let status = match resp.status.as_deref() {
			Some("success") => SwapState::Success,
			Some("refund") => SwapState::Refunded,
			Some("failure") => SwapState::Failed,
			_ => SwapState::Processing,
		};

		SwapStatus {
			status,
			tx_hash: resp.tx_hashes.into_iter().next(),
		}
	}
}

#[async_trait]
impl SwapAdapter for RelayAdapter {
	fn adapter_info(&self) -> &AdapterInfo {
		&self.config
	}

	fn supported_chains(&self) -> Vec<ChainId> {
		mainnet_chains()
	}

	async fn supported_tokens(
		&self,
		source_chain: ChainId,
		dest_chain: ChainId,
		config: &ProviderRuntimeConfig,
	) -> AdapterResult<Vec<Token>> {
		debug!(
			"Relay adapter getting supported tokens for {} -> {} via provider: {}",
			source_chain, dest_chain, config.provider_id
		);

		// TODO: source a token list from Relay's /currencies/v1 endpoint.
		// For now the caller falls back to its own token lists.
		Ok(Vec::new())
	}

	async fn get_quote(
		&self,
		params: &QuoteParams,
		config: &ProviderRuntimeConfig,
	) -> AdapterResult<NormalizedQuote> {
		debug!(
			"Relay adapter getting quote for {}:{} -> {}:{} via provider: {}",
			params.from_chain,
			params.from_token.symbol,
			params.to_chain,
			params.to_token.symbol,
			config.provider_id
		);

		let client = self.get_client(config)?;
		let quote_url = format!("{}/quote", config.endpoint);

		let request = RelayQuoteRequest {
			user: params.sender.clone(),
			origin_chain_id: params.from_chain,
			destination_chain_id: params.to_chain,
			origin_currency: params.from_token.request_address().to_string(),
			destination_currency: params.to_token.request_address().to_string(),
			amount: params.amount.to_string(),
			trade_type: TRADE_TYPE_EXACT_INPUT,
			recipient: (params.recipient != ZERO_ADDRESS).then(|| params.recipient.clone()),
			app_fees: vec![RelayAppFee {
				recipient: params.fee_receiver.clone(),
				fee: params.fee_bps.to_string(),
			}],
		};

		let response = client
			.post(&quote_url)
			.timeout(Duration::from_millis(config.timeout_ms))
			.json(&request)
			.send()
			.await
			.map_err(AdapterError::HttpError)?;

		let status = response.status();
		if !status.is_success() {
			warn!(
				"Relay quote endpoint returned status {} for provider {}",
				status, config.provider_id
			);
			return Err(AdapterError::from_http_failure(status.as_u16()));
		}

		// Keep the raw payload: execution needs it verbatim
		let raw: serde_json::Value =
			response
				.json()
				.await
				.map_err(|e| AdapterError::InvalidResponse {
					reason: format!("Failed to read Relay quote response: {}", e),
				})?;

		let parsed: RelayQuoteResponse =
			serde_json::from_value(raw.clone()).map_err(|e| AdapterError::InvalidResponse {
				reason: format!("Failed to parse Relay quote response: {}", e),
			})?;

		let quote = self.convert_quote(raw, parsed, params);

		debug!(
			"Relay adapter quoted {} {} for {} {} (impact: {}%)",
			quote.formatted_output_amount,
			params.to_token.symbol,
			params.amount.format_units(params.from_token.decimals),
			params.from_token.symbol,
			quote.price_impact
		);

		Ok(quote)
	}

	async fn execute_swap(
		&self,
		quote: &NormalizedQuote,
		wallet: &dyn WalletClient,
		config: &ProviderRuntimeConfig,
	) -> AdapterResult<NormalizedTxResponse> {
		debug!(
			"Relay adapter executing swap {}:{} -> {}:{} for sender {}",
			quote.params.from_chain,
			quote.params.from_token.symbol,
			quote.params.to_chain,
			quote.params.to_token.symbol,
			quote.params.sender
		);

		let (done_tx, mut done_rx) = oneshot::channel::<NormalizedTxResponse>();
		// First qualifying progress event wins; taking the sender out of the
		// slot makes resolution single-shot, later events find it empty.
		let resolver = Arc::new(Mutex::new(Some(done_tx)));

		let sink: ProgressSink = {
			let resolver = Arc::clone(&resolver);
			let adapter = self.name().to_string();
			let params = quote.params.clone();
			let output_amount = quote.output_amount.clone();

			Arc::new(move |step: ExecutionStep| {
				if !step.is_deposit_transaction() {
					return;
				}
				let Some(request_id) = step.request_id.clone() else {
					return;
				};
				let Some(tx_hash) = step.first_tx_hash() else {
					return;
				};
				let Ok(mut slot) = resolver.lock() else {
					return;
				};
				if let Some(done) = slot.take() {
					// The record is built from the quote, not the callback
					// payload: the step only contributes hash and request ID.
					let _ = done.send(NormalizedTxResponse {
						sender: params.sender.clone(),
						source_tx_hash: tx_hash.to_string(),
						adapter: adapter.clone(),
						id: request_id,
						source_chain: params.from_chain,
						target_chain: params.to_chain,
						input_amount: params.amount.clone(),
						output_amount: output_amount.clone(),
						source_token: params.from_token.clone(),
						target_token: params.to_token.clone(),
						timestamp_ms: Utc::now().timestamp_millis(),
					});
				}
			})
		};

		let execute = self.executor.execute(&quote.raw_quote, wallet, sink);
		tokio::pin!(execute);
		// Bound the wait: a provider that never reaches the deposit stage
		// must not leave the caller hanging forever.
		let deadline = tokio::time::sleep(Duration::from_millis(config.timeout_ms));
		tokio::pin!(deadline);

		let mut executor_done = false;
		loop {
			tokio::select! {
				biased;

				res = &mut done_rx => {
					// `resolver` holds the sender for the whole call, so the
					// channel cannot close unresolved; this arm only fires
					// with a value.
					return res.map_err(|_| AdapterError::ExecutionFailed {
						reason: "execution progress channel closed before a deposit transaction was observed"
							.to_string(),
					});
				},
				res = &mut execute, if !executor_done => {
					// Errors from the provider client propagate; a clean
					// finish without a deposit step keeps waiting until the
					// deadline, since some providers settle their own future
					// before the final progress event is delivered.
					res?;
					executor_done = true;
				},
				_ = &mut deadline => {
					warn!(
						"Relay execution timed out after {}ms without a deposit transaction",
						config.timeout_ms
					);
					return Err(AdapterError::Timeout {
						timeout_ms: config.timeout_ms,
					});
				},
			}
		}
	}

	async fn get_transaction_status(
		&self,
		tx: &NormalizedTxResponse,
		config: &ProviderRuntimeConfig,
	) -> AdapterResult<SwapStatus> {
		debug!(
			"Relay adapter polling status for request {} via provider: {}",
			tx.id, config.provider_id
		);

		let client = self.get_client(config)?;
		let status_url = format!("{}/intents/status/v2", config.endpoint);

		let response = client
			.get(&status_url)
			.timeout(Duration::from_millis(config.timeout_ms))
			.query(&[("requestId", tx.id.as_str())])
			.send()
			.await
			.map_err(AdapterError::HttpError)?;

		let status = response.status();
		if !status.is_success() {
			return Err(AdapterError::from_http_failure(status.as_u16()));
		}

		let parsed: RelayStatusResponse =
			response
				.json()
				.await
				.map_err(|e| AdapterError::InvalidResponse {
					reason: format!("Failed to parse Relay status response: {}", e),
				})?;

		Ok(Self::map_status_response(parsed))
	}
}
