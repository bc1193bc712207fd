use crate::constants::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for initializing the distribution config
 *
 * This instruction creates the protocol's singleton config PDA:
 * - Stores the distribution authority that must co-sign every claim
 * - Stores the maximum amount any single claim may request
 * - Stores the bump used to derive the config address
 *
 * The initializer pays the rent for the new account; no value enters the
 * pool here. Funding happens through top_up.
 *
 * Access Control: Anyone may initialize, exactly once. A second attempt
 * against the existing config fails with AlreadyInitialized instead of
 * overwriting the stored authority or cap.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The distribution config account (PDA)
    /// - Singleton, derived from: ["DISTRIBUTION_CONFIG_ACCOUNT"]
    /// - init_if_needed so a repeated call reaches the handler and fails
    ///   with the protocol's own AlreadyInitialized error
    #[account(
        init_if_needed,
        payer = initializer,
        space = DistributionConfig::LEN,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, DistributionConfig>,

    /// Party paying the rent for the config account
    #[account(mut)]
    pub initializer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Initializes the distribution config
 *
 * @param ctx - The account context containing config and initializer accounts
 * @param distribution_authority - Identity permitted to co-sign claims
 * @param max_tip_amount - Upper bound on any single claim, must be > 0
 * @param bump - Bump the client derived for the config address; must match
 *               the canonical bump found on-chain
 */
pub fn handle_initialize(
    ctx: Context<Initialize>,
    distribution_authority: Pubkey,
    max_tip_amount: u64,
    bump: u8,
) -> Result<()> {
    let config = &mut ctx.accounts.config;

    // An initialized config keeps the values from its first initialize;
    // re-running must fail, never silently overwrite. The bump the client
    // derived off-chain has to agree with the canonical one or its later
    // derivations won't match.
    config.validate_initialize(
        &distribution_authority,
        max_tip_amount,
        bump,
        ctx.bumps.config,
    )?;

    config.bump = bump;
    config.distribution_authority = distribution_authority;
    config.max_tip_amount = max_tip_amount;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(ConfigInitialized {
        config: config.key(),
        initializer: ctx.accounts.initializer.key(),
        distribution_authority,
        max_tip_amount,
        bump,
    });

    Ok(())
}
