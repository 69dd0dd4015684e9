use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    burn_checked, mint_to, BurnChecked, Mint, MintTo, TokenAccount, TokenInterface,
};

use crate::{pda::SigningCapability, utils::SupplyAdjustment};

/// Accounts needed to change a holder's stable token supply
pub struct StableSupply<'a, 'info> {
    pub token_program: &'a Interface<'info, TokenInterface>,
    pub stable_mint: &'a InterfaceAccount<'info, Mint>,
    pub mint_authority: &'a UncheckedAccount<'info>,
    pub user_token_account: &'a InterfaceAccount<'info, TokenAccount>,
}

impl<'a, 'info> StableSupply<'a, 'info> {
    /// Mints `amount` to the holder, signed by the mint authority PDA
    pub fn mint(&self, amount: u64, authority: &SigningCapability) -> Result<()> {
        let seeds = authority.signer_seeds();

        mint_to(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                MintTo {
                    mint: self.stable_mint.to_account_info(),
                    to: self.user_token_account.to_account_info(),
                    authority: self.mint_authority.to_account_info(),
                },
                &[&seeds[..]],
            ),
            amount,
        )?;

        msg!("Minted {} to {}", amount, self.user_token_account.key());

        Ok(())
    }

    /// Burns `amount` from the holder. The mint authority PDA signs as the mint's
    /// permanent delegate, so the holder's signature is not needed.
    pub fn burn(&self, amount: u64, authority: &SigningCapability) -> Result<()> {
        let seeds = authority.signer_seeds();

        burn_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                BurnChecked {
                    mint: self.stable_mint.to_account_info(),
                    from: self.user_token_account.to_account_info(),
                    authority: self.mint_authority.to_account_info(),
                },
                &[&seeds[..]],
            ),
            amount,
            self.stable_mint.decimals,
        )?;

        msg!("Burned {} from {}", amount, self.user_token_account.key());

        Ok(())
    }

    /// Applies a planned adjustment to the holder's wallet.
    /// Burns never exceed the wallet balance.
    pub fn apply(&self, adjustment: SupplyAdjustment, authority: &SigningCapability) -> Result<()> {
        match adjustment {
            SupplyAdjustment::Mint(amount) => self.mint(amount, authority),
            SupplyAdjustment::Burn(_) => {
                let amount = adjustment.wallet_burn(self.user_token_account.amount);
                if amount == 0 {
                    msg!("Holder has nothing left to burn");
                    return Ok(());
                }
                self.burn(amount, authority)
            }
            SupplyAdjustment::Hold => {
                msg!("Minted supply already matches escrow, nothing to do");
                Ok(())
            }
        }
    }
}
