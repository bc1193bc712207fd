use anchor_lang::prelude::*;

declare_id!("4R3gSG8BpU4t19KYj8CfnbtRpnT8gtk4dvTHxVRwc2r7");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Tip Distributor Program
 *
 * A Solana program for distributing lamport tips from a shared pool to
 * individual claimants, each at most once. A single authority funds nothing
 * and approves everything: claims only go through with its co-signature.
 *
 * Key Features:
 * - Singleton config PDA holding the authority and the per-claim cap
 * - Open, additive pool funding (anyone can top up)
 * - Authority-co-signed claims, bounded by the cap and the pool balance
 * - One claim per claimant, enforced by a claim status PDA
 * - Cross-program call event emission for composability
 *
 * Architecture:
 * - Config PDA: stores distribution authority, max tip amount, and bump;
 *   its lamport balance above rent is the pool
 * - Claim Status PDAs: one per claimant; existence marks "already claimed"
 *
 * Workflow:
 * 1. Initializer creates the config with an authority and a cap
 * 2. Funders top up the pool (repeatable, interleaves freely with claims)
 * 3. The authority co-signs claims paying individual claimants
 */
#[program]
pub mod tip_distributor {
    use super::*;

    /**
     * Initializes the distribution config
     *
     * One-time setup. Stores the distribution authority, the maximum
     * single-claim amount, and the bump used to derive the config address.
     * The pool starts empty.
     *
     * @param ctx - Account context containing config and initializer accounts
     * @param distribution_authority - Identity permitted to co-sign claims
     * @param max_tip_amount - Upper bound on any single claim, must be > 0
     * @param bump - Client-derived bump for the config address
     *
     * Access Control: Anyone, exactly once; repeats fail with AlreadyInitialized
     */
    pub fn initialize(
        ctx: Context<Initialize>,
        distribution_authority: Pubkey,
        max_tip_amount: u64,
        bump: u8,
    ) -> Result<()> {
        handle_initialize(ctx, distribution_authority, max_tip_amount, bump)
    }

    /**
     * Tops up the pool
     *
     * Transfers lamports from the funder into the config PDA. Purely
     * additive; may be repeated and interleaved with claims.
     *
     * @param ctx - Account context containing config and funder accounts
     * @param amount - Lamports to add to the pool, must be > 0
     *
     * Access Control: Any funder consenting to their own debit
     */
    pub fn top_up(ctx: Context<TopUp>, amount: u64) -> Result<()> {
        handle_top_up(ctx, amount)
    }

    /**
     * Claims a tip from the pool
     *
     * Pays `amount` lamports from the pool to the claimant and records the
     * claim so the same claimant can never be paid twice. The claimant does
     * not sign; authorization is the distribution authority's co-signature.
     *
     * @param ctx - Account context containing config, claim status, claimant,
     *              authority, and payer accounts
     * @param amount - Lamports to pay; must be within the cap and the pool
     *
     * Access Control: Distribution authority only
     */
    pub fn claim(ctx: Context<Claim>, amount: u64) -> Result<()> {
        handle_claim(ctx, amount)
    }
}
