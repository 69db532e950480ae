use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::CONFIG_SEED;
use crate::errors::ErrorCode;
use crate::events::WithdrawEvent;
use crate::state::Config;
use crate::vault;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.config_nonce,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(address = config.mint @ ErrorCode::InvalidMint)]
    pub mint: Box<Account<'info, Mint>>,

    /// CHECK: Data-less PDA owning the token vault
    #[account(
        seeds = [config.key().as_ref()],
        bump = config.vault_nonce,
    )]
    pub sol_vault: AccountInfo<'info>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = sol_vault,
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = mint,
    )]
    pub destination: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// Token vault balance left once `amount` is withdrawn by `signer`.
pub fn plan_withdraw(
    config: &Config,
    signer: &Pubkey,
    vault_balance: u64,
    amount: u64,
) -> Result<u64> {
    config.require_admin(signer)?;
    require_gt!(amount, 0, ErrorCode::InvalidAmount);
    vault::release_tokens(vault_balance, amount)
}

pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let remaining = plan_withdraw(
        &ctx.accounts.config,
        &admin,
        ctx.accounts.token_vault.amount,
        amount,
    )?;

    let config_key = ctx.accounts.config.key();
    let vault_seeds = &[config_key.as_ref(), &[ctx.accounts.config.vault_nonce]];
    let signer_seeds = &[&vault_seeds[..]];

    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.token_vault.to_account_info(),
            to: ctx.accounts.destination.to_account_info(),
            authority: ctx.accounts.sol_vault.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(transfer_ctx, amount)?;

    msg!(
        "Admin {} withdrew {} gyc to {}",
        admin,
        amount,
        ctx.accounts.destination.key()
    );

    emit!(WithdrawEvent {
        admin,
        destination: ctx.accounts.destination.key(),
        amount,
        token_vault_balance: remaining,
    });

    Ok(())
}
