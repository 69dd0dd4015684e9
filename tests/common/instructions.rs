//! Stable escrow instruction helpers.

use anchor_lang::InstructionData;
use litesvm::LiteSVM;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::transaction::{Transaction, TransactionError};
use solana_sdk::{system_program, sysvar};

use super::pda::{find_escrow_pda, find_mint_authority_pda, find_price_cache_pda};
use super::setup::STABLE_ESCROW_PROGRAM_ID;

pub const TOKEN_2022_PROGRAM_ID: Pubkey = spl_token_2022::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;

/// Associated Token-2022 account of `wallet` for `mint`
pub fn find_user_token_account(wallet: &Pubkey, mint: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address_with_program_id(
        wallet,
        mint,
        &TOKEN_2022_PROGRAM_ID,
    )
}

/// Sign and send `instructions`, then expire the blockhash so an identical
/// transaction can be sent again.
pub fn send_instructions(
    svm: &mut LiteSVM,
    instructions: &[Instruction],
    payer: &Keypair,
    signers: &[&Keypair],
) -> Result<(), TransactionError> {
    let tx = Transaction::new_signed_with_payer(
        instructions,
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );

    let result = svm.send_transaction(tx).map(|_| ()).map_err(|e| e.err);
    svm.expire_blockhash();
    result
}

// ============================================================================
// InitializeStableMint
// ============================================================================

pub fn initialize_stable_mint_ix(
    payer: &Pubkey,
    stable_mint: &Pubkey,
    authority_bump: u8,
    name: &str,
    symbol: &str,
    uri: &str,
) -> Instruction {
    let (mint_authority, _) = find_mint_authority_pda();

    Instruction {
        program_id: STABLE_ESCROW_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(*stable_mint, true),
            AccountMeta::new_readonly(mint_authority, false),
            AccountMeta::new_readonly(system_program::ID, false),
            AccountMeta::new_readonly(TOKEN_2022_PROGRAM_ID, false),
        ],
        data: stable_escrow::instruction::InitializeStableMint {
            authority_bump,
            name: name.to_string(),
            symbol: symbol.to_string(),
            uri: uri.to_string(),
        }
        .data(),
    }
}

/// Create the stable mint. Returns the mint address on success.
pub fn initialize_stable_mint(
    svm: &mut LiteSVM,
    payer: &Keypair,
    authority_bump: u8,
) -> Result<Pubkey, TransactionError> {
    let stable_mint = Keypair::new();
    let ix = initialize_stable_mint_ix(
        &payer.pubkey(),
        &stable_mint.pubkey(),
        authority_bump,
        "Stable USD",
        "SUSD",
        "https://example.com/susd.json",
    );

    send_instructions(svm, &[ix], payer, &[payer, &stable_mint]).map(|_| stable_mint.pubkey())
}

// ============================================================================
// ProcessEscrow
// ============================================================================

pub fn process_escrow_ix(
    user: &Pubkey,
    stable_mint: &Pubkey,
    price_feed: &Pubkey,
    escrow_bump: u8,
    price_cache_bump: u8,
    authority_bump: u8,
    amount: u64,
) -> Instruction {
    let (escrow, _) = find_escrow_pda();
    let (price_cache, _) = find_price_cache_pda();
    let (mint_authority, _) = find_mint_authority_pda();

    Instruction {
        program_id: STABLE_ESCROW_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*user, true),
            AccountMeta::new(*stable_mint, false),
            AccountMeta::new_readonly(mint_authority, false),
            AccountMeta::new(escrow, false),
            AccountMeta::new(find_user_token_account(user, stable_mint), false),
            AccountMeta::new(price_cache, false),
            AccountMeta::new_readonly(*price_feed, false),
            AccountMeta::new_readonly(system_program::ID, false),
            AccountMeta::new_readonly(sysvar::rent::ID, false),
            AccountMeta::new_readonly(TOKEN_2022_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
        ],
        data: stable_escrow::instruction::ProcessEscrow {
            escrow_bump,
            price_cache_bump,
            authority_bump,
            amount,
        }
        .data(),
    }
}

// ============================================================================
// ProcessMintBurnToken
// ============================================================================

pub fn process_mint_burn_token_ix(
    user: &Pubkey,
    stable_mint: &Pubkey,
    price_feed: &Pubkey,
    authority_bump: u8,
) -> Instruction {
    let (escrow, _) = find_escrow_pda();
    let (price_cache, _) = find_price_cache_pda();
    let (mint_authority, _) = find_mint_authority_pda();

    Instruction {
        program_id: STABLE_ESCROW_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*user, true),
            AccountMeta::new(*stable_mint, false),
            AccountMeta::new_readonly(mint_authority, false),
            AccountMeta::new(escrow, false),
            AccountMeta::new(find_user_token_account(user, stable_mint), false),
            AccountMeta::new(price_cache, false),
            AccountMeta::new_readonly(*price_feed, false),
            AccountMeta::new_readonly(TOKEN_2022_PROGRAM_ID, false),
        ],
        data: stable_escrow::instruction::ProcessMintBurnToken { authority_bump }.data(),
    }
}
