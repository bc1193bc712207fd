use anchor_lang::prelude::*;

/// Event emitted when the distribution config is initialized
#[event]
pub struct ConfigInitialized {
    /// The config account public key
    pub config: Pubkey,
    /// Party who paid for the config account
    pub initializer: Pubkey,
    /// Authority permitted to co-sign claims
    pub distribution_authority: Pubkey,
    /// Upper bound on any single claim
    pub max_tip_amount: u64,
    /// Bump used to derive the config address
    pub bump: u8,
}

/// Event emitted when the pool is topped up
#[event]
pub struct PoolToppedUp {
    /// The config account public key
    pub config: Pubkey,
    /// Funder who paid into the pool
    pub funder: Pubkey,
    /// Amount of lamports added
    pub amount: u64,
    /// Pool balance after the top up
    pub pool_balance: u64,
}

/// Event emitted when a tip is claimed
#[event]
pub struct TipClaimed {
    /// The config account public key
    pub config: Pubkey,
    /// User that paid for the claim, may or may not be the same as claimant
    pub payer: Pubkey,
    /// Account that received the funds
    pub claimant: Pubkey,
    /// Amount of lamports transferred
    pub amount: u64,
    /// Pool balance remaining after the claim
    pub pool_balance: u64,
}
