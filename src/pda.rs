//! Program-derived address derivation and validation.
//!
//! Every PDA used by the program is derived from a single fixed seed and a
//! caller-supplied bump: `[seed, [bump]]`. Handlers never trust an account
//! that claims to be the escrow vault, the price cache or the mint authority
//! until its address has been re-derived here.

use anchor_lang::prelude::*;

use crate::errors::StableEscrowError;

/// Derive the program address for `[seed, [bump]]`.
/// A bump that puts the point on the ed25519 curve yields `AddressMismatch`.
#[inline(always)]
pub fn derive_address(seed: &[u8], bump: u8, program_id: &Pubkey) -> Result<Pubkey> {
    Pubkey::create_program_address(&[seed, &[bump]], program_id)
        .map_err(|_| error!(StableEscrowError::AddressMismatch))
}

/// Check that `candidate` is the PDA derived from `seed` and `bump`.
/// # Arguments
/// * `candidate` - The address supplied with the instruction
/// * `seed` - The fixed seed label of the account
/// * `bump` - The bump supplied by the caller or stored in the account
/// * `program_id` - The program owning the derivation
/// # Returns
/// * `Result<()>` - Ok if the addresses match, Err(AddressMismatch) otherwise
pub fn validate(candidate: &Pubkey, seed: &[u8], bump: u8, program_id: &Pubkey) -> Result<()> {
    let expected = derive_address(seed, bump, program_id)?;

    require_keys_eq!(*candidate, expected, StableEscrowError::AddressMismatch);

    Ok(())
}

/// The right to sign as a PDA, bound to the exact seeds that produced its address.
/// Built per instruction by [`derive_and_sign`] and dropped with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigningCapability {
    seed: &'static [u8],
    bump: [u8; 1],
}

impl SigningCapability {
    pub fn bump(&self) -> u8 {
        self.bump[0]
    }

    /// Seeds for `invoke_signed` / `CpiContext::new_with_signer`
    pub fn signer_seeds(&self) -> [&[u8]; 2] {
        [self.seed, &self.bump]
    }
}

/// Validate `candidate` against `(seed, bump)` and hand back the signing capability for it.
/// # Arguments
/// * `seed` - The fixed seed label of the signing PDA
/// * `bump` - The bump supplied by the caller
/// * `program_id` - The program owning the derivation
/// * `candidate` - The address supplied with the instruction
/// # Returns
/// * `Result<SigningCapability>` - The capability, or Err(AddressMismatch)
pub fn derive_and_sign(
    seed: &'static [u8],
    bump: u8,
    program_id: &Pubkey,
    candidate: &Pubkey,
) -> Result<SigningCapability> {
    validate(candidate, seed, bump, program_id)?;

    Ok(SigningCapability { seed, bump: [bump] })
}
