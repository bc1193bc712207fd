use anchor_lang::prelude::*;

use crate::error::TipDistributorError;

/// Lamports held at the account above its rent-exempt minimum.
///
/// The rent deposit is a storage cost, not distributable value, so the pool
/// balance excludes it. A freshly initialized config therefore reports a
/// pool balance of zero.
pub fn pool_balance(account: &AccountInfo) -> Result<u64> {
    let rent = Rent::get()?;
    let min_rent_lamports = rent.minimum_balance(account.data_len());
    Ok(account.lamports().saturating_sub(min_rent_lamports))
}

/// Moves lamports out of a program-owned account.
///
/// The runtime only lets the owning program debit an account directly, so
/// this is how the pool pays a claimant. Checked math: under/overflow
/// surfaces as an error instead of wrapping.
pub fn transfer_lamports<'a>(from: AccountInfo<'a>, to: AccountInfo<'a>, amount: u64) -> Result<()> {
    // debit lamports
    **from.try_borrow_mut_lamports()? = from
        .lamports()
        .checked_sub(amount)
        .ok_or(TipDistributorError::ArithmeticOverflow)?;
    // credit lamports
    **to.try_borrow_mut_lamports()? = to
        .lamports()
        .checked_add(amount)
        .ok_or(TipDistributorError::ArithmeticOverflow)?;

    Ok(())
}
