use anchor_lang::prelude::*;

/// Event emitted when SOL is escrowed and the position is re-priced
/// Fields:
/// - user: The depositor
/// - amount: Lamports moved into the escrow vault
/// - minted: Stable token base units minted to the user
/// - burned: Stable token base units burned from the user (after a price drop)
/// - deposited_amount: Total lamports held by the escrow after the deposit
/// - minted_amount: Supply minted against the position after the deposit
/// - price: The normalized SOL/USD price used for the conversion
/// - publish_slot: The slot the oracle price was published in
#[event]
pub struct EscrowDeposited {
    pub user: Pubkey,
    pub amount: u64,
    pub minted: u64,
    pub burned: u64,
    pub deposited_amount: u64,
    pub minted_amount: u64,
    pub price: u64,
    pub publish_slot: u64,
}

/// Event emitted when a user's stable balance is brought back in line with the escrow
/// Fields:
/// - user: The escrow owner
/// - minted: Base units minted (0 if none)
/// - burned: Base units burned (0 if none)
/// - balance: The token balance after the rebalance
/// - minted_amount: Supply minted against the position after the rebalance
/// - price: The normalized SOL/USD price used for the conversion
#[event]
pub struct SupplyRebalanced {
    pub user: Pubkey,
    pub minted: u64,
    pub burned: u64,
    pub balance: u64,
    pub minted_amount: u64,
    pub price: u64,
}

/// Event emitted when the stable mint is deployed
/// Fields:
/// - stable_mint: The address of the new mint
#[event]
pub struct StableMintCreated {
    pub stable_mint: Pubkey,
}
