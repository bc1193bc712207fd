use anchor_lang::prelude::*;

use crate::error::TipDistributorError;

/**
 * Distribution config account
 *
 * This struct is the singleton state of the protocol. It stores the identity
 * allowed to authorize claims, the per-claim cap, and the bump used to derive
 * its own address.
 *
 * Derivation: ["DISTRIBUTION_CONFIG_ACCOUNT"]
 *
 * Lifecycle:
 * 1. Created once during the initialize instruction
 * 2. `distribution_authority` and `max_tip_amount` never change afterwards
 * 3. Only its lamport balance moves: top_up credits it, claim debits it
 *
 * The pool balance is not a field; it is the lamports held at this account's
 * address above the rent-exempt minimum. The Solana runtime serializes all
 * writes to this account, which is what makes concurrent claims against a
 * near-empty pool resolve to exactly one winner.
 */
#[account]
#[derive(Default, Debug)]
pub struct DistributionConfig {
    /// Bump seed for PDA derivation
    /// - Stored so later instructions can re-derive and validate the address
    pub bump: u8,

    /// Authority permitted to co-sign claim instructions
    /// - Set once at initialization; immutable thereafter
    pub distribution_authority: Pubkey,

    /// Upper bound on any single claim's amount, in lamports
    /// - Set once at initialization; immutable thereafter
    pub max_tip_amount: u64,
}

impl DistributionConfig {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<DistributionConfig>();

    /// An initialized config always carries a real authority key; a default
    /// key only occurs in an account that was never written.
    pub fn is_initialized(&self) -> bool {
        self.distribution_authority != Pubkey::default()
    }

    /// Validates the inputs of an initialize against this config.
    ///
    /// Runs on the freshly created (or pre-existing) config account before
    /// any field is written, so a failed initialize leaves earlier values
    /// untouched. Each violation surfaces its own error:
    /// - config already carries values from a first initialize
    /// - authority must be a real key
    /// - cap must be positive
    /// - the client-supplied bump must reproduce the canonical derivation
    pub fn validate_initialize(
        &self,
        distribution_authority: &Pubkey,
        max_tip_amount: u64,
        bump: u8,
        canonical_bump: u8,
    ) -> Result<()> {
        require!(
            !self.is_initialized(),
            TipDistributorError::AlreadyInitialized
        );
        require!(
            *distribution_authority != Pubkey::default(),
            TipDistributorError::InvalidAuthority
        );
        require!(max_tip_amount > 0, TipDistributorError::InvalidAmount);
        require_eq!(
            bump,
            canonical_bump,
            TipDistributorError::DerivationBumpMismatch
        );
        Ok(())
    }

    /// Validates a claim against this config.
    ///
    /// Checks run in a fixed order and each violation surfaces its own error
    /// so callers can tell permanent failures (wrong signer, over cap,
    /// already claimed) apart from retryable ones (pool too low):
    /// 1. config initialized
    /// 2. co-signer matches the stored authority
    /// 3. amount positive and within the per-claim cap
    /// 4. claimant has not already claimed
    /// 5. pool can cover the amount
    pub fn validate_claim(
        &self,
        co_signer: &Pubkey,
        amount: u64,
        already_claimed: bool,
        pool_balance: u64,
    ) -> Result<()> {
        require!(self.is_initialized(), TipDistributorError::NotInitialized);
        require_keys_eq!(
            *co_signer,
            self.distribution_authority,
            TipDistributorError::Unauthorized
        );
        // A zero claim would consume the claimant's one shot for nothing
        require!(amount > 0, TipDistributorError::InvalidAmount);
        require!(
            amount <= self.max_tip_amount,
            TipDistributorError::AmountExceedsCap
        );
        require!(!already_claimed, TipDistributorError::AlreadyClaimed);
        require!(
            pool_balance >= amount,
            TipDistributorError::InsufficientPoolBalance
        );
        Ok(())
    }
}
