//! Core adapter traits for provider implementations

use super::{AdapterInfo, AdapterResult, ProviderRuntimeConfig};
use crate::{
	adapters::execution::WalletClient,
	models::{ChainId, Token},
	quotes::{NormalizedQuote, QuoteParams},
	swaps::{NormalizedTxResponse, SwapStatus},
};
use async_trait::async_trait;
use std::fmt::Debug;

/// Core trait for swap provider adapters
///
/// Every bridge/swap provider is wrapped in one implementation of this trait,
/// so the calling UI can quote, execute and track swaps without knowing which
/// provider is behind a quote.
#[async_trait]
pub trait SwapAdapter: Send + Sync + Debug {
	/// Get adapter identity and display metadata
	fn adapter_info(&self) -> &AdapterInfo;

	/// Get adapter ID (for registration and analytics)
	fn id(&self) -> &str {
		&self.adapter_info().adapter_id
	}

	/// Get human-readable name for this adapter
	fn name(&self) -> &str {
		&self.adapter_info().name
	}

	/// Get the URL of the provider's logo
	fn icon(&self) -> &str {
		&self.adapter_info().icon
	}

	/// Get adapter version
	fn version(&self) -> &str {
		&self.adapter_info().version
	}

	/// Chains this adapter can route through
	fn supported_chains(&self) -> Vec<ChainId>;

	/// Tokens this adapter can swap between the given chain pair
	async fn supported_tokens(
		&self,
		source_chain: ChainId,
		dest_chain: ChainId,
		config: &ProviderRuntimeConfig,
	) -> AdapterResult<Vec<Token>>;

	/// Fetch a priced quote for the given request
	async fn get_quote(
		&self,
		params: &QuoteParams,
		config: &ProviderRuntimeConfig,
	) -> AdapterResult<NormalizedQuote>;

	/// Execute a previously fetched quote through the given wallet
	///
	/// Resolves once the source-chain deposit transaction is known. The
	/// runtime config's timeout bounds the wait for providers that never
	/// report one.
	async fn execute_swap(
		&self,
		quote: &NormalizedQuote,
		wallet: &dyn WalletClient,
		config: &ProviderRuntimeConfig,
	) -> AdapterResult<NormalizedTxResponse>;

	/// Poll the provider for the current status of a submitted swap
	async fn get_transaction_status(
		&self,
		tx: &NormalizedTxResponse,
		config: &ProviderRuntimeConfig,
	) -> AdapterResult<SwapStatus>;
}
