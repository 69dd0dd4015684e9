//! Shared test helpers for the stable-escrow handler tests.
#![allow(dead_code)]

pub mod instructions;
pub mod mock_accounts;

pub use instructions::*;
pub use mock_accounts::*;
pub use pda::*;
pub use setup::*;
