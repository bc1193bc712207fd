use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{pool_balance, transfer_lamports};
use anchor_lang::prelude::*;

/**
 * Account context for claiming a tip
 *
 * This instruction pays a bounded amount from the pool to a claimant,
 * co-signed by the distribution authority. The claimant is a pure payee and
 * never signs; a separate payer covers the rent of the claim status account.
 *
 * Access Control: Only the distribution authority stored in the config can
 * authorize a claim. Each claimant can be paid at most once; the claim
 * status PDA is the irreversible marker.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The distribution config account holding the pool
    /// - Will be debited by the claimed amount
    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, DistributionConfig>,

    /// Claim status for this claimant
    /// - Derived from: ["CLAIM_STATUS", config_key, claimant_key]
    /// - init_if_needed so a repeat claim reaches the handler and fails
    ///   with the protocol's own AlreadyClaimed error
    #[account(
        init_if_needed,
        payer = payer,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_SEED.as_bytes(), config.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// CHECK: This is safe. Receiver of the funds; only ever credited.
    #[account(mut)]
    pub claimant: AccountInfo<'info>,

    /// Co-signer; must match the authority stored in the config
    pub distribution_authority: Signer<'info>,

    /// Who is paying for the claim status account's rent
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Processes a tip claim
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Lamports to pay the claimant; must not exceed the cap
 *
 * Validation runs through DistributionConfig::validate_claim, which checks
 * authority, cap, prior claim, and pool balance in a fixed order so each
 * failure mode stays distinguishable to the caller.
 */
pub fn handle_claim(ctx: Context<Claim>, amount: u64) -> Result<()> {
    // ===== VALIDATION PHASE =====

    let available = pool_balance(&ctx.accounts.config.to_account_info())?;

    ctx.accounts.config.validate_claim(
        &ctx.accounts.distribution_authority.key(),
        amount,
        ctx.accounts.claim_status.is_claimed,
        available,
    )?;

    // ===== EFFECTS PHASE (State Updates) =====

    // Mark the claim before moving funds (CEI pattern)
    let claim_status = &mut ctx.accounts.claim_status;
    claim_status.bump = ctx.bumps.claim_status;
    claim_status.claimant = ctx.accounts.claimant.key();
    claim_status.claim_status_payer = ctx.accounts.payer.key();
    claim_status.claimed_amount = amount;
    claim_status.is_claimed = true;

    // ===== INTERACTIONS PHASE (Lamport Transfer) =====

    // The config is owned by this program, so the debit is a direct lamport
    // move rather than a system transfer
    transfer_lamports(
        ctx.accounts.config.to_account_info(),
        ctx.accounts.claimant.to_account_info(),
        amount,
    )?;

    let remaining = pool_balance(&ctx.accounts.config.to_account_info())?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(TipClaimed {
        config: ctx.accounts.config.key(),
        payer: ctx.accounts.payer.key(),
        claimant: ctx.accounts.claimant.key(),
        amount,
        pool_balance: remaining,
    });

    Ok(())
}
