//! Mock account builders and state readers for stable-escrow tests.

use litesvm::LiteSVM;
use solana_sdk::account::Account;
use solana_sdk::pubkey::Pubkey;
use spl_token_2022::extension::StateWithExtensions;
use spl_token_2022::state::{Account as TokenAccount, Mint};

/// Pyth receiver program, owner of posted `PriceUpdateV2` accounts
pub const PYTH_RECEIVER_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("rec5EKMGg6MxZYaMdyBfgwp4d5rB9T1VQH5pJv5LtFJ");

/// Pyth SOL/USD feed id
pub const SOL_USD_FEED_ID: &str =
    "ef0d8b6fda2ceba41da15d4095d1da392a0d2f8ed0c6c7bc0f4cfac8c280b56d";

/// Anchor discriminator of `PriceUpdateV2`
const PRICE_UPDATE_V2_DISCRIMINATOR: [u8; 8] = [0x22, 0xf1, 0x23, 0x63, 0x9d, 0x7e, 0xf4, 0xcd];

/// Borsh tag of `VerificationLevel::Full`
const VERIFICATION_LEVEL_FULL: u8 = 1;

// EscrowAccount field offsets (after the 8-byte discriminator)
pub mod escrow_offsets {
    pub const VERSION: usize = 8;
    pub const BUMP: usize = 9;
    pub const DEPOSITED_AMOUNT: usize = 10;
    pub const MINTED_AMOUNT: usize = 18;
    pub const OWNER_REFERENCE: usize = 26;
}

/// A SOL/USD price of `cents`, with 8 fractional digits
pub fn usd_price(cents: i64) -> i64 {
    cents * 1_000_000
}

/// Serialize a fully verified SOL/USD `PriceUpdateV2`
pub fn price_update_data(price: i64, conf: u64, exponent: i32, posted_slot: u64) -> Vec<u8> {
    let feed_id = hex::decode(SOL_USD_FEED_ID).unwrap();

    let mut data = Vec::with_capacity(134);
    data.extend_from_slice(&PRICE_UPDATE_V2_DISCRIMINATOR);
    data.extend_from_slice(&[7u8; 32]); // write_authority
    data.push(VERIFICATION_LEVEL_FULL);
    data.extend_from_slice(&feed_id);
    data.extend_from_slice(&price.to_le_bytes());
    data.extend_from_slice(&conf.to_le_bytes());
    data.extend_from_slice(&exponent.to_le_bytes());
    data.extend_from_slice(&0i64.to_le_bytes()); // publish_time
    data.extend_from_slice(&0i64.to_le_bytes()); // prev_publish_time
    data.extend_from_slice(&price.to_le_bytes()); // ema_price
    data.extend_from_slice(&conf.to_le_bytes()); // ema_conf
    data.extend_from_slice(&posted_slot.to_le_bytes());
    data.push(0);
    data
}

/// Post a SOL/USD price in cents at `posted_slot`, owned by `owner`
pub fn set_price_update_with_owner(
    svm: &mut LiteSVM,
    price_feed: &Pubkey,
    cents: i64,
    posted_slot: u64,
    owner: Pubkey,
) {
    let price = usd_price(cents);
    let data = price_update_data(price, (price / 1_000) as u64, -8, posted_slot);

    svm.set_account(
        *price_feed,
        Account {
            lamports: 1_000_000_000,
            data,
            owner,
            executable: false,
            rent_epoch: 0,
        },
    )
    .unwrap();
}

/// Post a SOL/USD price in cents at `posted_slot`
pub fn set_price_update(svm: &mut LiteSVM, price_feed: &Pubkey, cents: i64, posted_slot: u64) {
    set_price_update_with_owner(svm, price_feed, cents, posted_slot, PYTH_RECEIVER_PROGRAM_ID);
}

fn read_u64(data: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes(data[offset..offset + 8].try_into().unwrap())
}

/// Raw data of an account, empty if it does not exist
pub fn account_data(svm: &LiteSVM, address: &Pubkey) -> Vec<u8> {
    svm.get_account(address)
        .map(|account| account.data)
        .unwrap_or_default()
}

/// `deposited_amount` of the escrow vault
pub fn escrow_deposited_amount(svm: &LiteSVM, escrow: &Pubkey) -> u64 {
    read_u64(&account_data(svm, escrow), escrow_offsets::DEPOSITED_AMOUNT)
}

/// `minted_amount` of the escrow vault
pub fn escrow_minted_amount(svm: &LiteSVM, escrow: &Pubkey) -> u64 {
    read_u64(&account_data(svm, escrow), escrow_offsets::MINTED_AMOUNT)
}

/// `owner_reference` of the escrow vault
pub fn escrow_owner(svm: &LiteSVM, escrow: &Pubkey) -> Pubkey {
    let data = account_data(svm, escrow);
    let offset = escrow_offsets::OWNER_REFERENCE;
    Pubkey::try_from(&data[offset..offset + 32]).unwrap()
}

/// Token balance of a Token-2022 account
pub fn token_balance(svm: &LiteSVM, token_account: &Pubkey) -> u64 {
    let data = account_data(svm, token_account);
    StateWithExtensions::<TokenAccount>::unpack(&data)
        .unwrap()
        .base
        .amount
}

/// Total supply of a Token-2022 mint
pub fn mint_supply(svm: &LiteSVM, mint: &Pubkey) -> u64 {
    let data = account_data(svm, mint);
    StateWithExtensions::<Mint>::unpack(&data).unwrap().base.supply
}
