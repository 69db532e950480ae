use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

/// Checks the sol vault can pay `payout` lamports.
///
/// The vault is a data-less system account, so after a transfer it must
/// either stay above the rent-exempt floor or be drained to zero.
pub fn ensure_payable(vault_lamports: u64, rent_floor: u64, payout: u64) -> Result<()> {
    let remaining = vault_lamports
        .checked_sub(payout)
        .ok_or(ErrorCode::InsufficientVaultBalance)?;
    require!(
        remaining == 0 || remaining >= rent_floor,
        ErrorCode::InsufficientVaultBalance
    );
    Ok(())
}

/// Token vault balance left after releasing `amount`.
pub fn release_tokens(vault_balance: u64, amount: u64) -> Result<u64> {
    vault_balance
        .checked_sub(amount)
        .ok_or_else(|| error!(ErrorCode::InsufficientVaultBalance))
}
