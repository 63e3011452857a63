//! Blockchain asset/token models

use serde::{Deserialize, Serialize};

use super::ChainId;
use crate::constants::ZERO_ADDRESS;

/// Token descriptor as used in quote requests and swap records
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Token {
	/// Contract address (zero address for native tokens)
	pub address: String,
	/// Token symbol (e.g., "ETH", "USDC", "WBTC")
	pub symbol: String,
	/// Human-readable name (e.g., "Ethereum", "USD Coin")
	pub name: String,
	/// Number of decimal places
	pub decimals: u8,
	/// Chain ID where this token exists
	pub chain_id: ChainId,
	/// Whether this is the chain's native token
	pub is_native: bool,
}

impl Token {
	pub fn new(
		address: String,
		symbol: String,
		name: String,
		decimals: u8,
		chain_id: ChainId,
	) -> Self {
		Self {
			address,
			symbol,
			name,
			decimals,
			chain_id,
			is_native: false,
		}
	}

	/// Create a native token descriptor for the given chain
	pub fn native(symbol: String, name: String, decimals: u8, chain_id: ChainId) -> Self {
		Self {
			address: ZERO_ADDRESS.to_string(),
			symbol,
			name,
			decimals,
			chain_id,
			is_native: true,
		}
	}

	/// Address to send to swap providers: native tokens go as the zero address
	pub fn request_address(&self) -> &str {
		if self.is_native {
			ZERO_ADDRESS
		} else {
			&self.address
		}
	}
}

/// Common token constants
impl Token {
	pub fn eth() -> Self {
		Self::native("ETH".to_string(), "Ethereum".to_string(), 18, 1)
	}

	pub fn usdc_ethereum() -> Self {
		Self::new(
			"0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".to_string(),
			"USDC".to_string(),
			"USD Coin".to_string(),
			6,
			1,
		)
	}

	pub fn usdc_arbitrum() -> Self {
		Self::new(
			"0xaf88d065e77c8cC2239327C5EDb3A432268e5831".to_string(),
			"USDC".to_string(),
			"USD Coin".to_string(),
			6,
			42161,
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_native_token_request_address() {
		let eth = Token::eth();
		assert!(eth.is_native);
		assert_eq!(eth.request_address(), ZERO_ADDRESS);
	}

	#[test]
	fn test_erc20_request_address() {
		let usdc = Token::usdc_ethereum();
		assert!(!usdc.is_native);
		assert_eq!(
			usdc.request_address(),
			"0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"
		);
	}
}
