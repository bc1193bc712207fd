use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::pool_balance;
use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

/**
 * Account context for topping up the pool
 *
 * This instruction moves lamports from a funder into the config PDA,
 * increasing the pool available for claims. Purely additive: nothing here
 * can reduce the balance.
 *
 * Access Control: Any funder willing to debit their own account. The
 * protocol does not police who may top up or how much.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct TopUp<'info> {
    /// The distribution config account holding the pool
    /// - Must already exist; a missing or malformed account fails
    ///   deserialization before this handler runs
    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, DistributionConfig>,

    /// The funder paying into the pool
    #[account(mut)]
    pub funder: Signer<'info>,

    /// System program performing the lamport transfer
    pub system_program: Program<'info, System>,
}

/**
 * Tops up the pool held at the config account
 *
 * @param ctx - The account context containing config and funder accounts
 * @param amount - Lamports to move from the funder into the pool
 */
pub fn handle_top_up(ctx: Context<TopUp>, amount: u64) -> Result<()> {
    require!(amount > 0, TipDistributorError::InvalidAmount);

    // The config PDA is program-owned, but crediting it only needs the
    // funder's signature, so a plain system transfer does the job
    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder.to_account_info(),
                to: ctx.accounts.config.to_account_info(),
            },
        ),
        amount,
    )?;

    let new_balance = pool_balance(&ctx.accounts.config.to_account_info())?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(PoolToppedUp {
        config: ctx.accounts.config.key(),
        funder: ctx.accounts.funder.key(),
        amount,
        pool_balance: new_balance,
    });

    Ok(())
}
