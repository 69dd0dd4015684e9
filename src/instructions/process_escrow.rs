use anchor_lang::{
    prelude::*,
    system_program::{transfer, Transfer},
};
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use super::StableSupply;
use crate::{
    constants::{ESCROW_SEED, MINT_AUTHORITY_SEED, PRICE_CACHE_SEED},
    errors::StableEscrowError,
    events::EscrowDeposited,
    oracle::read_price_sample,
    pda,
    state::{EscrowAccount, PriceCacheAccount},
    utils::{
        create_pda_account, is_program_account, load_program_account, rent_shortfall,
        store_program_account, SupplyAdjustment,
    },
};

/// Escrows SOL and mints the stable token equivalent at the oracle price
#[derive(Accounts)]
pub struct ProcessEscrow<'info> {
    /// The depositor, pays for every account created by the instruction
    #[account(mut)]
    pub user: Signer<'info>,

    /// The stable token mint
    #[account(
        mut,
        mint::authority = mint_authority,
        mint::token_program = token_program
    )]
    pub stable_mint: Box<InterfaceAccount<'info, Mint>>,

    /// The mint authority PDA
    /// # PDA Seeds
    /// - MINT_AUTHORITY_SEED
    ///
    /// CHECK: Re-derived from `authority_bump` in the instruction handler
    pub mint_authority: UncheckedAccount<'info>,

    /// The escrow vault holding the deposited lamports and the `EscrowAccount` data
    /// # PDA Seeds
    /// - ESCROW_SEED
    ///
    /// CHECK: Re-derived from `escrow_bump` and created by the instruction handler on first use
    #[account(mut)]
    pub escrow_account: UncheckedAccount<'info>,

    /// The user's associated token account for the stable token
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = stable_mint,
        associated_token::authority = user,
        associated_token::token_program = token_program,
    )]
    pub user_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The last validated oracle sample
    /// # PDA Seeds
    /// - PRICE_CACHE_SEED
    ///
    /// CHECK: Re-derived from `price_cache_bump` and created by the instruction handler on first use
    #[account(mut)]
    pub price_cache: UncheckedAccount<'info>,

    /// The Pyth SOL/USD `PriceUpdateV2` account
    ///
    /// CHECK: Owner, discriminator, feed id and freshness are validated by the oracle reader
    pub price_feed: UncheckedAccount<'info>,

    /// The system program
    pub system_program: Program<'info, System>,

    /// The rent sysvar
    pub rent: Sysvar<'info, Rent>,

    /// The token program of the stable mint
    pub token_program: Interface<'info, TokenInterface>,

    /// The associated token program
    pub associated_token_program: Program<'info, AssociatedToken>,
}

impl<'info> ProcessEscrow<'info> {
    fn stable_supply(&self) -> StableSupply<'_, 'info> {
        StableSupply {
            token_program: &self.token_program,
            stable_mint: &self.stable_mint,
            mint_authority: &self.mint_authority,
            user_token_account: &self.user_token_account,
        }
    }

    /// Escrows `amount` lamports and mints the stable token equivalent to the user.
    /// Creates the escrow and price cache accounts on first use.
    /// # Arguments
    /// * `escrow_bump` - The bump of the escrow PDA
    /// * `price_cache_bump` - The bump of the price cache PDA
    /// * `authority_bump` - The bump of the mint authority PDA
    /// * `amount` - The lamports to escrow
    /// # Returns
    /// * `Result<()>` - Ok if the deposit and mint succeed, Err otherwise
    pub fn process_escrow(
        &mut self,
        escrow_bump: u8,
        price_cache_bump: u8,
        authority_bump: u8,
        amount: u64,
    ) -> Result<()> {
        let program_id = &crate::ID;

        // Step 1: Validate every PDA before touching its data
        let escrow_signer = pda::derive_and_sign(
            ESCROW_SEED,
            escrow_bump,
            program_id,
            self.escrow_account.key,
        )?;
        let price_cache_signer = pda::derive_and_sign(
            PRICE_CACHE_SEED,
            price_cache_bump,
            program_id,
            self.price_cache.key,
        )?;
        let authority = pda::derive_and_sign(
            MINT_AUTHORITY_SEED,
            authority_bump,
            program_id,
            self.mint_authority.key,
        )?;

        let escrow_exists = is_program_account(&self.escrow_account)?;
        let price_cache_exists = is_program_account(&self.price_cache)?;

        let mut escrow = if escrow_exists {
            let escrow: EscrowAccount = load_program_account(&self.escrow_account)?;
            escrow.check_version()?;
            require_eq!(escrow.bump, escrow_bump, StableEscrowError::AddressMismatch);
            require_keys_eq!(
                escrow.owner_reference,
                self.user.key(),
                StableEscrowError::EscrowOwnerMismatch
            );
            escrow
        } else {
            EscrowAccount::new(escrow_bump, self.user.key())
        };

        let mut price_cache = if price_cache_exists {
            let price_cache: PriceCacheAccount = load_program_account(&self.price_cache)?;
            price_cache.check_version()?;
            require_eq!(
                price_cache.bump,
                price_cache_bump,
                StableEscrowError::AddressMismatch
            );
            price_cache
        } else {
            PriceCacheAccount::new(price_cache_bump)
        };

        // Step 2: Check the deposit can be funded
        require_gt!(amount, 0, StableEscrowError::InvalidAmount);

        let escrow_space = 8 + EscrowAccount::INIT_SPACE;
        let price_cache_space = 8 + PriceCacheAccount::INIT_SPACE;

        let mut rent_needed: u64 = 0;
        if !escrow_exists {
            rent_needed += rent_shortfall(&self.rent, &self.escrow_account, escrow_space);
        }
        if !price_cache_exists {
            rent_needed += rent_shortfall(&self.rent, &self.price_cache, price_cache_space);
        }

        let available = self.user.lamports();
        require_gte!(available, amount, StableEscrowError::InsufficientFunds);
        let required = amount
            .checked_add(rent_needed)
            .ok_or(StableEscrowError::ArithmeticOverflow)?;
        require_gte!(
            available,
            required,
            StableEscrowError::AccountCreationFailed
        );

        // Step 3: Read the oracle before any side effect
        let clock = Clock::get()?;
        let price = read_price_sample(&self.price_feed, clock.slot)?;

        // Step 4: Re-anchor the minted supply to the whole deposit at this price.
        // On the first deposit this mints exactly amount * price / PEG_DENOMINATOR,
        // which may truncate to zero for dust deposits.
        let deposited_amount = escrow.record_deposit(amount)?;
        let adjustment = escrow.rebalance(price.normalized_price)?;
        price_cache.record(&price.sample);

        // Step 5: Create the program accounts on first use
        if !escrow_exists {
            create_pda_account(
                &self.user,
                &self.escrow_account,
                &self.system_program,
                &self.rent,
                escrow_space,
                &escrow_signer.signer_seeds(),
            )?;
        }
        if !price_cache_exists {
            create_pda_account(
                &self.user,
                &self.price_cache,
                &self.system_program,
                &self.rent,
                price_cache_space,
                &price_cache_signer.signer_seeds(),
            )?;
        }

        // Step 6: Move the collateral into the vault
        transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.user.to_account_info(),
                    to: self.escrow_account.to_account_info(),
                },
            ),
            amount,
        )?;

        // Step 7: Mint (or burn, after a price drop) the difference
        let balance = self.user_token_account.amount;
        self.stable_supply().apply(adjustment, &authority)?;

        // Step 8: Persist the position and the price
        store_program_account(&self.escrow_account, &escrow)?;
        store_program_account(&self.price_cache, &price_cache)?;

        let (minted, burned) = match adjustment {
            SupplyAdjustment::Mint(amount) => (amount, 0),
            SupplyAdjustment::Burn(_) => (0, adjustment.wallet_burn(balance)),
            SupplyAdjustment::Hold => (0, 0),
        };

        msg!(
            "Escrowed {} lamports for {}, minted {} burned {} (escrow total {})",
            amount,
            self.user.key(),
            minted,
            burned,
            deposited_amount
        );

        emit!(EscrowDeposited {
            user: self.user.key(),
            amount,
            minted,
            burned,
            deposited_amount,
            minted_amount: escrow.minted_amount,
            price: price.normalized_price,
            publish_slot: price.sample.publish_slot,
        });

        Ok(())
    }
}
