//! Blockchain network identifiers

/// EVM chain identifier (e.g., 1 for Ethereum mainnet, 137 for Polygon)
pub type ChainId = u64;

/// Well-known mainnet chain IDs
pub mod chains {
	use super::ChainId;

	pub const ETHEREUM: ChainId = 1;
	pub const OPTIMISM: ChainId = 10;
	pub const BSC: ChainId = 56;
	pub const UNICHAIN: ChainId = 130;
	pub const POLYGON: ChainId = 137;
	pub const SONIC: ChainId = 146;
	pub const FANTOM: ChainId = 250;
	pub const ZKSYNC: ChainId = 324;
	pub const HYPEREVM: ChainId = 999;
	pub const RONIN: ChainId = 2020;
	pub const MANTLE: ChainId = 5000;
	pub const BASE: ChainId = 8453;
	pub const ARBITRUM: ChainId = 42161;
	pub const AVALANCHE: ChainId = 43114;
	pub const LINEA: ChainId = 59144;
	pub const BERACHAIN: ChainId = 80094;
	pub const BLAST: ChainId = 81457;
	pub const SCROLL: ChainId = 534352;
}

/// All mainnet networks the aggregator routes through
pub fn mainnet_chains() -> Vec<ChainId> {
	vec![
		chains::ETHEREUM,
		chains::OPTIMISM,
		chains::BSC,
		chains::UNICHAIN,
		chains::POLYGON,
		chains::SONIC,
		chains::FANTOM,
		chains::ZKSYNC,
		chains::HYPEREVM,
		chains::RONIN,
		chains::MANTLE,
		chains::BASE,
		chains::ARBITRUM,
		chains::AVALANCHE,
		chains::LINEA,
		chains::BERACHAIN,
		chains::BLAST,
		chains::SCROLL,
	]
}

/// Chains the internal price service has no feed for
///
/// Quotes on these chains fall back to the provider's own USD estimates
/// instead of the externally supplied per-token prices.
pub const PRICE_SERVICE_UNSUPPORTED_CHAINS: &[ChainId] = &[
	chains::UNICHAIN,
	chains::SONIC,
	chains::HYPEREVM,
	chains::MANTLE,
	chains::BERACHAIN,
	chains::BLAST,
];

/// Whether the internal price service covers the given chain
pub fn has_price_service(chain_id: ChainId) -> bool {
	!PRICE_SERVICE_UNSUPPORTED_CHAINS.contains(&chain_id)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_mainnet_chains_contains_core_networks() {
		let all = mainnet_chains();
		assert!(all.contains(&chains::ETHEREUM));
		assert!(all.contains(&chains::ARBITRUM));
		assert!(all.contains(&chains::BASE));
		assert_eq!(all.len(), 18);
	}

	#[test]
	fn test_price_service_coverage() {
		assert!(has_price_service(chains::ETHEREUM));
		assert!(has_price_service(chains::POLYGON));
		assert!(!has_price_service(chains::BERACHAIN));
		assert!(!has_price_service(chains::HYPEREVM));
	}
}
