use anchor_lang::prelude::*;

// Import necessary dependencies from Pyth
use pyth_solana_receiver_sdk::price_update::{
    get_feed_id_from_hex, PriceUpdateV2, VerificationLevel,
};

use crate::{
    constants::{
        CONFIDENCE_THRESHOLD_PCT, MAX_PRICE_AGE_SLOTS, SOL_USD_FEED_ID, TRUSTED_ORACLE_PROGRAMS,
    },
    errors::StableEscrowError,
    utils::normalize_price,
};

/// One SOL/USD observation taken from the oracle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceSample {
    pub price: i64,
    pub confidence: u64,
    pub exponent: i32,
    pub publish_slot: u64,
}

impl PriceSample {
    pub fn from_price_update(price_update: &PriceUpdateV2) -> Self {
        Self {
            price: price_update.price_message.price,
            confidence: price_update.price_message.conf,
            exponent: price_update.price_message.exponent,
            publish_slot: price_update.posted_slot,
        }
    }

    /// Slots elapsed since publication. A sample from a future slot has age 0.
    #[inline(always)]
    pub fn age(&self, current_slot: u64) -> u64 {
        current_slot.saturating_sub(self.publish_slot)
    }

    /// Rejects samples older than `max_age_slots`. There is no fallback to a cached price.
    pub fn check_freshness(&self, current_slot: u64, max_age_slots: u64) -> Result<()> {
        let age = self.age(current_slot);
        if age > max_age_slots {
            msg!(
                "Stale price: published at slot {}, current slot {}, max age {}",
                self.publish_slot,
                current_slot,
                max_age_slots
            );
            return err!(StableEscrowError::StalePrice);
        }
        Ok(())
    }

    /// Reject prices with high uncertainty
    /// conf * 100 <= price * CONFIDENCE_THRESHOLD_PCT (conf/price <= CONFIDENCE_THRESHOLD_PCT %)
    pub fn check_confidence(&self) -> Result<()> {
        require_gt!(self.price, 0, StableEscrowError::InvalidPrice);

        let conf_times_100 = (self.confidence as u128)
            .checked_mul(100)
            .ok_or(StableEscrowError::ArithmeticOverflow)?;
        let price_times_threshold = (self.price as u128)
            .checked_mul(CONFIDENCE_THRESHOLD_PCT)
            .ok_or(StableEscrowError::ArithmeticOverflow)?;

        require!(
            conf_times_100 <= price_times_threshold,
            StableEscrowError::ConfidenceThresholdExceeded
        );

        Ok(())
    }

    /// Price with `PRICE_DECIMALS` fractional digits
    pub fn normalized_price(&self) -> Result<u64> {
        normalize_price(self.price, self.exponent)
    }

    /// Runs every check a sample must pass before it may drive a mint or burn.
    /// # Arguments
    /// * `current_slot` - The slot the instruction executes in
    /// * `max_age_slots` - The staleness bound
    /// # Returns
    /// * `Result<u64>` - The normalized price
    pub fn validate(&self, current_slot: u64, max_age_slots: u64) -> Result<u64> {
        self.check_freshness(current_slot, max_age_slots)?;
        self.check_confidence()?;
        self.normalized_price()
    }
}

/// A validated sample together with its normalized price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedPrice {
    pub sample: PriceSample,
    pub normalized_price: u64,
}

/// Reads and validates the SOL/USD price from a Pyth `PriceUpdateV2` account.
/// # Arguments
/// * `price_feed` - The untrusted oracle account supplied by the caller
/// * `current_slot` - The slot the instruction executes in
/// # Returns
/// * `Result<ValidatedPrice>` - The sample and its normalized price
pub fn read_price_sample(price_feed: &AccountInfo, current_slot: u64) -> Result<ValidatedPrice> {
    // Only accounts written by the Pyth programs carry a trustworthy price
    require!(
        TRUSTED_ORACLE_PROGRAMS.contains(price_feed.owner),
        StableEscrowError::UntrustedOracle
    );

    // Deserialize account data into PriceUpdateV2, discriminator included
    let data = price_feed.try_borrow_data()?;
    let price_update = PriceUpdateV2::try_deserialize(&mut &data[..])?;

    require!(
        matches!(price_update.verification_level, VerificationLevel::Full),
        StableEscrowError::UnverifiedPrice
    );

    // Fetch the feed ID for SOL/USD from its hex representation
    let sol_feed_id: [u8; 32] = get_feed_id_from_hex(SOL_USD_FEED_ID)?;
    require!(
        price_update.price_message.feed_id == sol_feed_id,
        StableEscrowError::InvalidPriceFeed
    );

    let sample = PriceSample::from_price_update(&price_update);
    let normalized_price = sample.validate(current_slot, MAX_PRICE_AGE_SLOTS)?;

    msg!(
        "SOL/USD price {} x 10^{} (conf {}) at slot {}",
        sample.price,
        sample.exponent,
        sample.confidence,
        sample.publish_slot
    );

    Ok(ValidatedPrice {
        sample,
        normalized_price,
    })
}
