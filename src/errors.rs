use anchor_lang::prelude::*;

#[error_code]
pub enum StableEscrowError {
    #[msg("Account address does not match its PDA derivation")]
    AddressMismatch,
    #[msg("Price account is not owned by a trusted oracle program")]
    UntrustedOracle,
    #[msg("Oracle price is stale")]
    StalePrice,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Arithmetic underflow")]
    ArithmeticUnderflow,
    #[msg("User does not have enough SOL")]
    InsufficientFunds,
    #[msg("Not enough SOL to fund the rent-exempt reserve")]
    AccountCreationFailed,
    #[msg("Invalid Amount")]
    InvalidAmount,
    #[msg("Invalid Price")]
    InvalidPrice,
    #[msg("Invalid price exponent")]
    InvalidPriceExponent,
    #[msg("Price update is not for the SOL/USD feed")]
    InvalidPriceFeed,
    #[msg("Price update is not fully verified")]
    UnverifiedPrice,
    #[msg("Confidence threshold exceeded")]
    ConfidenceThresholdExceeded,
    #[msg("Divide by zero")]
    DivideByZero,
    #[msg("Signer does not own the escrow position")]
    EscrowOwnerMismatch,
    #[msg("Invalid Token Account")]
    InvalidTokenAccount,
    #[msg("Account is not owned by this program")]
    InvalidAccountOwner,
    #[msg("Unsupported account layout version")]
    UnsupportedLayoutVersion,
    #[msg("Metadata field too long")]
    MetadataFieldTooLong,
}
