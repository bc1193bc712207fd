use anchor_lang::prelude::*;

/**
 * Individual claim status account
 *
 * One ClaimStatus account exists per claimant. Its existence with
 * `is_claimed = true` is the irreversible "already claimed" marker: the
 * runtime serializes per-address writes, so of two racing claims for the
 * same claimant exactly one creates this account and the other fails.
 *
 * Derivation: ["CLAIM_STATUS", config_key, claimant_key]
 *
 * Lifecycle:
 * 1. Created by the claimant's first and only successful claim
 * 2. Never mutated or closed afterwards
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimStatus {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Account that received the funds
    pub claimant: Pubkey,

    /// The payer who created this account
    pub claim_status_payer: Pubkey,

    /// Amount of lamports claimed, kept for audit
    pub claimed_amount: u64,

    /// Set to true by the claim that created this account
    pub is_claimed: bool,
}

impl ClaimStatus {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimStatus>();
}
