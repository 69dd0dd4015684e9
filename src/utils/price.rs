use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_EXPONENT_MAGNITUDE, PEG_DENOMINATOR, PRICE_DECIMALS},
    errors::StableEscrowError,
    utils::mul_div_floor,
};

/// Convert an oracle `(price, exponent)` pair into an integer carrying `PRICE_DECIMALS`
/// fractional digits, i.e. `price * 10^(exponent + PRICE_DECIMALS)`.
/// Digits beyond `PRICE_DECIMALS` are truncated.
/// # Arguments
/// * `price` - The raw oracle price (must be positive)
/// * `exponent` - The oracle exponent, within `MAX_EXPONENT_MAGNITUDE`
/// # Returns
/// * `Result<u64>` - The normalized price
pub fn normalize_price(price: i64, exponent: i32) -> Result<u64> {
    require_gt!(price, 0, StableEscrowError::InvalidPrice);
    require!(
        (-MAX_EXPONENT_MAGNITUDE..=MAX_EXPONENT_MAGNITUDE).contains(&exponent),
        StableEscrowError::InvalidPriceExponent
    );

    let shift = exponent + PRICE_DECIMALS as i32;
    let price = price as u128;

    let normalized = if shift >= 0 {
        let scale = 10u128
            .checked_pow(shift as u32)
            .ok_or(StableEscrowError::ArithmeticOverflow)?;
        price
            .checked_mul(scale)
            .ok_or(StableEscrowError::ArithmeticOverflow)?
    } else {
        // |shift| < MAX_EXPONENT_MAGNITUDE, so the power fits in u128
        price / 10u128.pow(shift.unsigned_abs())
    };

    // A price that truncates to zero would mint nothing and burn everything
    require!(normalized > 0, StableEscrowError::ArithmeticUnderflow);

    Ok(u64::try_from(normalized).map_err(|_| StableEscrowError::ArithmeticOverflow)?)
}

/// Amount of stable token (base units) justified by `lamports` at `normalized_price`.
/// Round down: never mints more than the collateral covers.
/// # Arguments
/// * `lamports` - The collateral amount
/// * `normalized_price` - The output of [`normalize_price`]
/// # Returns
/// * `Result<u64>` - `lamports * normalized_price / PEG_DENOMINATOR`
#[inline(always)]
pub fn stable_amount_for(lamports: u64, normalized_price: u64) -> Result<u64> {
    mul_div_floor(lamports, normalized_price, PEG_DENOMINATOR)
}
