use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::allowance::Allowance;
use crate::constants::CONFIG_SEED;
use crate::errors::ErrorCode;
use crate::events::SwapEvent;
use crate::state::Config;
use crate::vault;

#[derive(Accounts)]
pub struct GycToSol<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.config_nonce,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(address = config.mint @ ErrorCode::InvalidMint)]
    pub mint: Box<Account<'info, Mint>>,

    /// CHECK: Data-less PDA paying out sol and acting as token delegate
    #[account(
        mut,
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

    /// CHECK: Receives the sol payout, owner of recipient_token
    #[account(mut)]
    pub recipient: AccountInfo<'info>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = recipient,
    )]
    pub recipient_token: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapQuote {
    pub token_amount: u64,
    pub sol_amount: u64,
    /// Delegation left on the user's token account after the pull
    pub remaining_allowance: u64,
}

/// Runs every check a swap needs before any funds move.
#[allow(clippy::too_many_arguments)]
pub fn quote_swap(
    config: &Config,
    signer: &Pubkey,
    sol_vault: &Pubkey,
    mut allowance: Allowance,
    user_balance: u64,
    vault_lamports: u64,
    rent_floor: u64,
    amount: u64,
) -> Result<SwapQuote> {
    config.require_authority(signer)?;
    require_gt!(amount, 0, ErrorCode::InvalidAmount);

    let sol_amount = config.quote(amount)?;
    let remaining_allowance = allowance.consume(sol_vault, amount)?;
    require!(
        user_balance >= amount,
        ErrorCode::InsufficientTokenBalance
    );
    vault::ensure_payable(vault_lamports, rent_floor, sol_amount)?;

    Ok(SwapQuote {
        token_amount: amount,
        sol_amount,
        remaining_allowance,
    })
}

pub fn handler(ctx: Context<GycToSol>, amount: u64) -> Result<()> {
    let rent_floor = Rent::get()?.minimum_balance(0);
    let sol_vault_key = ctx.accounts.sol_vault.key();
    let allowance = Allowance::of(&ctx.accounts.recipient_token);

    let quote = quote_swap(
        &ctx.accounts.config,
        &ctx.accounts.authority.key(),
        &sol_vault_key,
        allowance,
        ctx.accounts.recipient_token.amount,
        ctx.accounts.sol_vault.lamports(),
        rent_floor,
        amount,
    )?;

    let config_key = ctx.accounts.config.key();
    let vault_seeds = &[config_key.as_ref(), &[ctx.accounts.config.vault_nonce]];
    let signer_seeds = &[&vault_seeds[..]];

    // Pull the user's tokens through the delegation granted to the vault
    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.recipient_token.to_account_info(),
            to: ctx.accounts.token_vault.to_account_info(),
            authority: ctx.accounts.sol_vault.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(transfer_ctx, quote.token_amount)?;

    if quote.sol_amount > 0 {
        let payout_ctx = CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.sol_vault.to_account_info(),
                to: ctx.accounts.recipient.to_account_info(),
            },
            signer_seeds,
        );
        system_program::transfer(payout_ctx, quote.sol_amount)?;
    }

    ctx.accounts.token_vault.reload()?;
    ctx.accounts.recipient_token.reload()?;

    msg!(
        "Swapped {} gyc for {} lamports to {}",
        quote.token_amount,
        quote.sol_amount,
        ctx.accounts.recipient.key()
    );
    msg!(
        "Remaining delegation from {}: {}",
        allowance.owner,
        ctx.accounts.recipient_token.delegated_amount
    );

    emit!(SwapEvent {
        recipient: ctx.accounts.recipient.key(),
        recipient_token: ctx.accounts.recipient_token.key(),
        mint: ctx.accounts.mint.key(),
        token_amount: quote.token_amount,
        sol_amount: quote.sol_amount,
        sol_vault_balance: ctx.accounts.sol_vault.lamports(),
        token_vault_balance: ctx.accounts.token_vault.amount,
    });

    Ok(())
}
