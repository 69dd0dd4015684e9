use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use super::StableSupply;
use crate::{
    constants::{ESCROW_SEED, MINT_AUTHORITY_SEED, PRICE_CACHE_SEED},
    errors::StableEscrowError,
    events::SupplyRebalanced,
    oracle::read_price_sample,
    pda,
    state::{EscrowAccount, PriceCacheAccount},
    utils::SupplyAdjustment,
};

/// Re-prices an escrowed position and mints or burns the difference
#[derive(Accounts)]
pub struct ProcessMintBurnToken<'info> {
    /// The escrow owner
    pub user: Signer<'info>,

    /// The stable token mint
    #[account(
        mut,
        mint::authority = mint_authority,
        mint::token_program = token_program
    )]
    pub stable_mint: Box<InterfaceAccount<'info, Mint>>,

    /// The mint authority PDA, also the permanent delegate of the stable mint
    /// # PDA Seeds
    /// - MINT_AUTHORITY_SEED
    ///
    /// CHECK: Re-derived from `authority_bump` in the instruction handler
    pub mint_authority: UncheckedAccount<'info>,

    /// The escrow holding the position
    /// # PDA Seeds
    /// - ESCROW_SEED
    #[account(mut)]
    pub escrow_account: Box<Account<'info, EscrowAccount>>,

    /// The user's token account for the stable token
    #[account(mut)]
    pub user_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The last validated oracle sample
    /// # PDA Seeds
    /// - PRICE_CACHE_SEED
    #[account(mut)]
    pub price_cache: Box<Account<'info, PriceCacheAccount>>,

    /// The Pyth SOL/USD `PriceUpdateV2` account
    ///
    /// CHECK: Owner, discriminator, feed id and freshness are validated by the oracle reader
    pub price_feed: UncheckedAccount<'info>,

    /// The token program of the stable mint
    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> ProcessMintBurnToken<'info> {
    fn stable_supply(&self) -> StableSupply<'_, 'info> {
        StableSupply {
            token_program: &self.token_program,
            stable_mint: &self.stable_mint,
            mint_authority: &self.mint_authority,
            user_token_account: &self.user_token_account,
        }
    }

    /// Checks that the escrow, price cache and token account all belong to this position
    fn validate_position(&self) -> Result<()> {
        let program_id = &crate::ID;

        pda::validate(
            &self.escrow_account.key(),
            ESCROW_SEED,
            self.escrow_account.bump,
            program_id,
        )?;
        pda::validate(
            &self.price_cache.key(),
            PRICE_CACHE_SEED,
            self.price_cache.bump,
            program_id,
        )?;

        self.escrow_account.check_version()?;
        self.price_cache.check_version()?;

        require_keys_eq!(
            self.escrow_account.owner_reference,
            self.user.key(),
            StableEscrowError::EscrowOwnerMismatch
        );

        require_keys_eq!(
            self.user_token_account.mint,
            self.stable_mint.key(),
            StableEscrowError::InvalidTokenAccount
        );
        require_keys_eq!(
            self.user_token_account.owner,
            self.user.key(),
            StableEscrowError::InvalidTokenAccount
        );

        Ok(())
    }

    /// Brings the supply minted against the escrow in line with `deposited_amount`
    /// at the current price. Mints the shortfall, burns the excess, or does nothing.
    /// The comparison is against the recorded `minted_amount`, never the wallet balance.
    /// # Arguments
    /// * `authority_bump` - The bump of the mint authority PDA
    /// # Returns
    /// * `Result<()>` - Ok if the position is re-anchored, Err otherwise
    pub fn process_mint_burn_token(&mut self, authority_bump: u8) -> Result<()> {
        let authority = pda::derive_and_sign(
            MINT_AUTHORITY_SEED,
            authority_bump,
            &crate::ID,
            self.mint_authority.key,
        )?;
        self.validate_position()?;

        // A stale or untrusted price aborts the instruction, there is no cached fallback
        let clock = Clock::get()?;
        let price = read_price_sample(&self.price_feed, clock.slot)?;

        let adjustment = self.escrow_account.rebalance(price.normalized_price)?;
        let balance = self.user_token_account.amount;
        self.stable_supply().apply(adjustment, &authority)?;

        self.price_cache.record(&price.sample);

        let (minted, burned) = match adjustment {
            SupplyAdjustment::Mint(amount) => (amount, 0),
            SupplyAdjustment::Burn(_) => (0, adjustment.wallet_burn(balance)),
            SupplyAdjustment::Hold => (0, 0),
        };

        emit!(SupplyRebalanced {
            user: self.user.key(),
            minted,
            burned,
            balance: adjustment.resulting_balance(balance),
            minted_amount: self.escrow_account.minted_amount,
            price: price.normalized_price,
        });

        Ok(())
    }
}
