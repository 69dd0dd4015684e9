use anchor_lang::prelude::*;

// PDA SEEDS

/// Seed for the escrow vault PDA (holds the deposited SOL and the EscrowAccount data)
pub const ESCROW_SEED: &[u8] = b"escrow";
/// Seed for the price cache PDA
pub const PRICE_CACHE_SEED: &[u8] = b"sol_price";
/// Seed for the mint authority PDA
pub const MINT_AUTHORITY_SEED: &[u8] = b"mint-authority";

// ORACLE

/// Pyth receiver program, owner of posted `PriceUpdateV2` accounts
pub const PYTH_RECEIVER_PROGRAM_ID: Pubkey =
    pubkey!("rec5EKMGg6MxZYaMdyBfgwp4d5rB9T1VQH5pJv5LtFJ");
/// Pyth push oracle program, owner of the sponsored price feed accounts
pub const PYTH_PUSH_ORACLE_PROGRAM_ID: Pubkey =
    pubkey!("pythWSnswVUd12oZpeFP8e9CVaEqJg25g1Vtc2biRsT");
/// Programs allowed to own the price feed account
pub const TRUSTED_ORACLE_PROGRAMS: [Pubkey; 2] =
    [PYTH_RECEIVER_PROGRAM_ID, PYTH_PUSH_ORACLE_PROGRAM_ID];

/// Pyth price feed ID for SOL/USD (identical on every cluster)
pub const SOL_USD_FEED_ID: &str =
    "ef0d8b6fda2ceba41da15d4095d1da392a0d2f8ed0c6c7bc0f4cfac8c280b56d";

/// Maximum number of slots between the posted price and the current slot (~10 seconds)
#[cfg(feature = "mainnet")]
pub const MAX_PRICE_AGE_SLOTS: u64 = 25;
/// Devnet and localnet feeds update less often
#[cfg(not(feature = "mainnet"))]
pub const MAX_PRICE_AGE_SLOTS: u64 = 150;

/// conf / price must stay at or below this percentage
pub const CONFIDENCE_THRESHOLD_PCT: u128 = 2;

/// Largest |exponent| accepted from the oracle
pub const MAX_EXPONENT_MAGNITUDE: i32 = 18;

// SCALING FACTORS

/// Number of fractional digits carried by a normalized price
pub const PRICE_DECIMALS: u8 = 8;

/// 10^8 - Divisor turning `lamports * normalized_price` into stable token base units.
/// With both SOL and the stable token at 9 decimals this pegs 1 token to 1 USD.
pub const PEG_DENOMINATOR: u64 = 100_000_000;

/// Number of decimals for the stable token
pub const STABLE_TOKEN_DECIMALS: u8 = 9;

// ACCOUNT LAYOUT

/// Current layout version of the program-owned accounts
pub const ACCOUNT_LAYOUT_VERSION: u8 = 1;

/// The maximum length for a token symbol
pub const SYMBOL_MAX_LENGTH: usize = 10;

/// The maximum length for a token name or URI
pub const NAME_AND_URI_MAX_LENGTH: usize = 200;
