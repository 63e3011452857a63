//! Shared protocol constants

/// The zero address, used both for native-token placeholders in provider
/// requests and as the "no approval needed" contract address in quotes.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Provider progress step that carries the deposit transaction
pub const STEP_ID_DEPOSIT: &str = "deposit";

/// Progress step kind for on-chain transactions
pub const STEP_KIND_TRANSACTION: &str = "transaction";
