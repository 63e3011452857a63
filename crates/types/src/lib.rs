//! XCSwap Types
//!
//! Shared models and traits for the cross-chain swap aggregator.
//! This crate contains all domain models organized by business entity.

pub mod adapters;
pub mod constants;
pub mod models;
pub mod quotes;
pub mod swaps;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

// Re-export commonly used types for convenience
pub use adapters::{
	AdapterError, AdapterInfo, AdapterResult, AdapterValidationError, AdapterValidationResult,
	ExecutionClient, ExecutionStep, ExecutionStepItem, ProgressSink, ProviderRuntimeConfig,
	StepTxHash, SwapAdapter, WalletClient,
};

pub use models::{ChainId, RawAmount, Token};

pub use quotes::{price_impact, NormalizedQuote, QuoteParams};

pub use swaps::{NormalizedTxResponse, SwapState, SwapStatus};

pub use constants::ZERO_ADDRESS;
