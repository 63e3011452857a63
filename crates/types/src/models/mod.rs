//! Shared domain models used across quotes, swaps and adapters

pub mod amount;
pub mod chain;
pub mod token;

pub use amount::RawAmount;
pub use chain::{chains, has_price_service, mainnet_chains, ChainId};
pub use token::Token;
