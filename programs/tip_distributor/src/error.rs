use anchor_lang::prelude::*;

#[error_code]
pub enum TipDistributorError {
    // Initialization errors
    #[msg("Distribution config has already been initialized")]
    AlreadyInitialized,
    #[msg("Distribution config has not been initialized")]
    NotInitialized,
    #[msg("Supplied bump does not match the derived config address")]
    DerivationBumpMismatch,

    // Access control errors
    #[msg("Signer is not the distribution authority")]
    Unauthorized,
    #[msg("Invalid distribution authority account")]
    InvalidAuthority,

    // Amount validation errors
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Claim amount exceeds the maximum tip amount")]
    AmountExceedsCap,
    #[msg("Insufficient pool balance for this claim")]
    InsufficientPoolBalance,

    // Claim state errors
    #[msg("Claimant has already claimed")]
    AlreadyClaimed,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
