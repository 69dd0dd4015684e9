use std::cmp::Ordering;

/// The supply change that brings a position's minted amount back to what the escrow justifies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyAdjustment {
    Mint(u64),
    Burn(u64),
    Hold,
}

impl SupplyAdjustment {
    /// Base units to burn from a wallet holding `balance`.
    /// A holder who already burned part of the position cannot be burned below zero.
    pub fn wallet_burn(&self, balance: u64) -> u64 {
        match *self {
            SupplyAdjustment::Burn(amount) => amount.min(balance),
            _ => 0,
        }
    }

    /// The wallet balance once the adjustment is applied
    pub fn resulting_balance(&self, balance: u64) -> u64 {
        match *self {
            SupplyAdjustment::Mint(amount) => balance.saturating_add(amount),
            SupplyAdjustment::Burn(_) => balance - self.wallet_burn(balance),
            SupplyAdjustment::Hold => balance,
        }
    }
}

/// Mint the positive delta, burn the negative delta, hold when equal.
/// # Arguments
/// * `justified` - The supply the escrowed collateral supports at the current price
/// * `minted` - The supply already minted against the position
/// # Returns
/// * `SupplyAdjustment` - The action to take
pub fn plan_supply_adjustment(justified: u64, minted: u64) -> SupplyAdjustment {
    match justified.cmp(&minted) {
        Ordering::Greater => SupplyAdjustment::Mint(justified - minted),
        Ordering::Less => SupplyAdjustment::Burn(minted - justified),
        Ordering::Equal => SupplyAdjustment::Hold,
    }
}
