#![allow(unexpected_cfgs)]
#![allow(deprecated)]

use anchor_lang::prelude::*;
mod constants;
pub mod errors;
mod events;
mod instructions;
mod oracle;
mod pda;
pub mod security;
mod state;
mod utils;

use instructions::*;

#[cfg(feature = "devnet")]
declare_id!("5NkjFSy6Ezu2CUfXrYHDuPFu3v9mGR56DjhQkjX6bSJG");
#[cfg(feature = "mainnet")]
declare_id!("2E4XicpEnAupAjSXdAh1ukFe5vZKFfiVMB3PsxKJFuPW");
#[cfg(not(any(feature = "mainnet", feature = "devnet")))]
declare_id!("DHkf7V1VjWCdJDMGogvvGC2S2H7mSS4Cv6YBM1mw8mK1");

#[program]
pub mod stable_escrow {
    use super::*;

    /// Deploy the stable token mint
    ///
    /// Creates a Token-2022 mint whose mint authority and permanent delegate
    /// are the mint authority PDA, with on-mint metadata.
    pub fn initialize_stable_mint(
        ctx: Context<InitializeStableMint>,
        authority_bump: u8,
        name: String,
        symbol: String,
        uri: String,
    ) -> Result<()> {
        ctx.accounts
            .initialize_stable_mint(authority_bump, name, symbol, uri)
    }

    /// Escrow SOL and mint the stable token equivalent
    ///
    /// Moves `amount` lamports into the escrow vault and mints
    /// `amount * price / PEG_DENOMINATOR` to the user's token account.
    /// The escrow, price cache and token account are created on first use.
    pub fn process_escrow(
        ctx: Context<ProcessEscrow>,
        escrow_bump: u8,
        price_cache_bump: u8,
        authority_bump: u8,
        amount: u64,
    ) -> Result<()> {
        ctx.accounts
            .process_escrow(escrow_bump, price_cache_bump, authority_bump, amount)
    }

    /// Rebalance the user's stable balance against the escrow at the current price
    pub fn process_mint_burn_token(
        ctx: Context<ProcessMintBurnToken>,
        authority_bump: u8,
    ) -> Result<()> {
        ctx.accounts.process_mint_burn_token(authority_bump)
    }
}
