use anchor_lang::prelude::Result;

use crate::errors::StableEscrowError;

/// Computes floor((n0 * n1) / d) with a u128 intermediate
/// # Arguments
/// * `n0` - The first multiplicand
/// * `n1` - The second multiplicand
/// * `d` - The divisor
/// # Returns
/// * `Result<u64>` - The truncated quotient, DivideByZero if d is 0, ArithmeticOverflow if it exceeds u64
#[inline(always)]
pub fn mul_div_floor(n0: u64, n1: u64, d: u64) -> Result<u64> {
    if d == 0 {
        return Err(StableEscrowError::DivideByZero.into());
    }

    // u64 * u64 always fits in u128
    let quotient = (n0 as u128) * (n1 as u128) / (d as u128);

    Ok(u64::try_from(quotient).map_err(|_| StableEscrowError::ArithmeticOverflow)?)
}
