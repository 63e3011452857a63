//! Core quote domain models and pricing arithmetic
//!
//! A `NormalizedQuote` is the uniform representation every provider adapter
//! produces, so the calling code can compare and execute quotes without
//! knowing which provider they came from.

use serde::{Deserialize, Serialize};

use crate::models::{ChainId, RawAmount, Token};

/// Immutable inputs for a single quote request
///
/// Constructed by the caller per request; adapters never mutate it and embed a
/// copy into the resulting quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteParams {
	/// Source chain ID
	pub from_chain: ChainId,
	/// Destination chain ID
	pub to_chain: ChainId,
	/// Token being sold
	pub from_token: Token,
	/// Token being bought
	pub to_token: Token,
	/// Raw input amount in the source token's smallest unit
	pub amount: RawAmount,
	/// Platform fee in basis points, forwarded to the provider as a fee line item
	pub fee_bps: u32,
	/// Address receiving the platform fee
	pub fee_receiver: String,
	/// Address funding the swap
	pub sender: String,
	/// Address receiving the output (zero address means "same as sender")
	pub recipient: String,
	/// USD price of one whole input token, from the external price service
	pub from_token_usd: f64,
	/// USD price of one whole output token, from the external price service
	pub to_token_usd: f64,
}

impl QuoteParams {
	/// Platform fee expressed as a percentage (25 bps -> 0.25)
	pub fn platform_fee_percent(&self) -> f64 {
		(self.fee_bps as f64) * 100.0 / 10_000.0
	}
}

/// Uniform quote representation produced by every adapter
///
/// Provider-specific payloads live in `raw_quote` and are passed back verbatim
/// when the quote is executed.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedQuote {
	/// The request this quote answers
	pub params: QuoteParams,
	/// Raw output amount in the destination token's smallest unit
	pub output_amount: RawAmount,
	/// Output amount formatted with the destination token's decimals
	pub formatted_output_amount: String,
	/// USD valuation of the input
	pub input_usd: f64,
	/// USD valuation of the output
	pub output_usd: f64,
	/// Percentage difference between input and output USD value.
	/// `NaN` when either valuation is unavailable; callers must check
	/// `is_nan()` before display.
	pub price_impact: f64,
	/// Output units per input unit
	pub rate: f64,
	/// Estimated gas cost in USD
	pub gas_fee_usd: f64,
	/// Estimated completion time in seconds
	pub time_estimate_secs: u64,
	/// Contract that must be approved before execution
	/// (zero address when no approval is needed)
	pub contract_address: String,
	/// Raw provider response, required for execution
	pub raw_quote: serde_json::Value,
	/// Protocol fee charged by the provider, in USD
	pub protocol_fee: f64,
	/// Platform fee as a percentage
	pub platform_fee_percent: f64,
}

/// Price impact of a quote as a percentage of the input's USD value
///
/// Returns `NaN` when either valuation is zero or unavailable; the sentinel
/// replaces a division by zero rather than an error, matching how quotes for
/// unpriced tokens are displayed.
pub fn price_impact(input_usd: f64, output_usd: f64) -> f64 {
	if !(input_usd > 0.0) || !(output_usd > 0.0) {
		return f64::NAN;
	}

	(input_usd - output_usd) * 100.0 / input_usd
}
