use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::TokenAccount;

use crate::errors::ErrorCode;

/// Delegation a token owner granted through an SPL `approve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allowance {
    pub owner: Pubkey,
    pub spender: Option<Pubkey>,
    pub remaining: u64,
}

impl Allowance {
    pub fn of(account: &TokenAccount) -> Self {
        let spender = match account.delegate {
            COption::Some(delegate) => Some(delegate),
            COption::None => None,
        };
        Self {
            owner: account.owner,
            spender,
            remaining: account.delegated_amount,
        }
    }

    /// Spends `amount` on behalf of `spender` and returns what is left.
    ///
    /// Mirrors the bookkeeping the token program does on a delegated
    /// transfer, so a failing swap is rejected before any CPI is made.
    pub fn consume(&mut self, spender: &Pubkey, amount: u64) -> Result<u64> {
        require!(
            self.spender == Some(*spender),
            ErrorCode::InvalidDelegate
        );
        require!(
            amount <= self.remaining,
            ErrorCode::InsufficientDelegatedAmount
        );

        self.remaining -= amount;
        Ok(self.remaining)
    }
}
