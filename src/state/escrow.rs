use anchor_lang::prelude::*;

use crate::{
    constants::ACCOUNT_LAYOUT_VERSION,
    errors::StableEscrowError,
    utils::{plan_supply_adjustment, stable_amount_for, SupplyAdjustment},
};

/// EscrowAccount state account - the SOL vault and the record of the escrowed position.
/// The account itself holds the deposited lamports next to this data.
#[account]
#[derive(InitSpace)]
pub struct EscrowAccount {
    // Layout version, bumped whenever the fields below change
    pub version: u8,

    // The bump used to derive the PDA for this account
    // Must match the bump used to re-derive the address on every access
    pub bump: u8,

    // Total lamports escrowed so far, never decreases
    pub deposited_amount: u64,

    // Stable token base units currently minted against the position
    // Only the program changes it, transfers and holder burns do not
    pub minted_amount: u64,

    // The depositor owning the position
    pub owner_reference: Pubkey,
}

impl EscrowAccount {
    pub fn new(bump: u8, owner_reference: Pubkey) -> Self {
        Self {
            version: ACCOUNT_LAYOUT_VERSION,
            bump,
            deposited_amount: 0,
            minted_amount: 0,
            owner_reference,
        }
    }

    pub fn check_version(&self) -> Result<()> {
        require_eq!(
            self.version,
            ACCOUNT_LAYOUT_VERSION,
            StableEscrowError::UnsupportedLayoutVersion
        );
        Ok(())
    }

    pub fn record_deposit(&mut self, amount: u64) -> Result<u64> {
        self.deposited_amount = self
            .deposited_amount
            .checked_add(amount)
            .ok_or(StableEscrowError::ArithmeticOverflow)?;
        Ok(self.deposited_amount)
    }

    /// Re-anchors the minted supply to `deposited_amount` at `normalized_price`.
    /// The returned adjustment must be applied to the holder in the same instruction.
    /// # Arguments
    /// * `normalized_price` - The validated SOL/USD price with `PRICE_DECIMALS` digits
    /// # Returns
    /// * `Result<SupplyAdjustment>` - The mint or burn that moves the supply to the justified amount
    pub fn rebalance(&mut self, normalized_price: u64) -> Result<SupplyAdjustment> {
        let justified = stable_amount_for(self.deposited_amount, normalized_price)?;
        let adjustment = plan_supply_adjustment(justified, self.minted_amount);
        self.minted_amount = justified;
        Ok(adjustment)
    }
}
