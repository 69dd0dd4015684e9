use anchor_lang::prelude::*;

use crate::{constants::ACCOUNT_LAYOUT_VERSION, errors::StableEscrowError, oracle::PriceSample};

/// PriceCacheAccount state account - last oracle sample that passed validation
#[account]
#[derive(InitSpace)]
pub struct PriceCacheAccount {
    // Layout version, bumped whenever the fields below change
    pub version: u8,

    // The bump used to derive the PDA for this account
    // Must match the bump used to re-derive the address on every access
    pub bump: u8,

    // Raw oracle price of the last accepted sample
    pub last_price: i64,

    // Oracle exponent of the last accepted sample
    pub last_exponent: i32,

    // Slot at which the last accepted sample was published
    pub last_update_slot: u64,
}

impl PriceCacheAccount {
    pub fn new(bump: u8) -> Self {
        Self {
            version: ACCOUNT_LAYOUT_VERSION,
            bump,
            last_price: 0,
            last_exponent: 0,
            last_update_slot: 0,
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

    pub fn record(&mut self, sample: &PriceSample) {
        self.last_price = sample.price;
        self.last_exponent = sample.exponent;
        self.last_update_slot = sample.publish_slot;
    }
}
