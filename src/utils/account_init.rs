use anchor_lang::{
    prelude::*,
    solana_program::{
        program::{invoke, invoke_signed},
        system_instruction,
    },
    system_program, AccountDeserialize, AccountSerialize,
};

use crate::errors::StableEscrowError;

/// Lamports still missing for `account` to hold `space` bytes rent-free.
#[inline(always)]
pub fn rent_shortfall(rent: &Rent, account: &AccountInfo, space: usize) -> u64 {
    rent.minimum_balance(space)
        .saturating_sub(account.lamports())
}

/// Tops `target` up to the rent-exempt minimum for `space` bytes, paid by `payer`.
/// # Returns
/// * `Result<u64>` - The lamports transferred, 0 if the account was already exempt
pub fn fund_rent_shortfall<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    rent: &Rent,
    space: usize,
) -> Result<u64> {
    let shortfall = rent_shortfall(rent, target, space);
    if shortfall > 0 {
        invoke(
            &system_instruction::transfer(payer.key, target.key, shortfall),
            &[payer.clone(), target.clone(), system_program.clone()],
        )?;
    }
    Ok(shortfall)
}

/// Creates a program-owned PDA account of `space` bytes, funded by `payer`.
/// Works even if someone already sent lamports to the address.
/// # Arguments
/// * `payer` - Funds the rent-exempt reserve
/// * `target` - The uninitialized PDA
/// * `system_program` - The system program
/// * `rent` - The rent sysvar
/// * `space` - Account size including the discriminator
/// * `signer_seeds` - The seeds deriving `target`
pub fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    rent: &Rent,
    space: usize,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    invoke_signed(
        &system_instruction::allocate(target.key, space as u64),
        &[target.clone(), system_program.clone()],
        &[signer_seeds],
    )?;

    fund_rent_shortfall(payer, target, system_program, rent, space)?;

    invoke_signed(
        &system_instruction::assign(target.key, &crate::ID),
        &[target.clone(), system_program.clone()],
        &[signer_seeds],
    )?;

    msg!("Created program account {}", target.key);

    Ok(())
}

/// Whether a PDA already holds program data.
/// An address that was never created is still owned by the system program and empty;
/// anything else is refused with `InvalidAccountOwner`.
pub fn is_program_account(account: &AccountInfo) -> Result<bool> {
    if *account.owner == crate::ID {
        return Ok(true);
    }

    require!(
        *account.owner == system_program::ID && account.data_is_empty(),
        StableEscrowError::InvalidAccountOwner
    );

    Ok(false)
}

/// Deserialize a program-owned account behind an unchecked account info.
/// The discriminator is checked by `try_deserialize`.
pub fn load_program_account<T: AccountDeserialize>(account: &AccountInfo) -> Result<T> {
    require_keys_eq!(
        *account.owner,
        crate::ID,
        StableEscrowError::InvalidAccountOwner
    );

    let data = account.try_borrow_data()?;
    T::try_deserialize(&mut &data[..])
}

/// Serialize `value` (discriminator included) into a program-owned account.
pub fn store_program_account<T: AccountSerialize>(account: &AccountInfo, value: &T) -> Result<()> {
    let mut data = account.try_borrow_mut_data()?;
    value.try_serialize(&mut &mut data[..])
}
