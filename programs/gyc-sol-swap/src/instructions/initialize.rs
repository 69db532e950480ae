use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::address;
use crate::constants::CONFIG_SEED;
use crate::events::InitEvent;
use crate::state::Config;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    // A second call reaches the handler and fails with AlreadyInitialized.
    #[account(
        init_if_needed,
        payer = signer,
        space = Config::LEN,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Box<Account<'info, Config>>,

    /// CHECK: Data-less PDA holding the sol paid out by swaps
    #[account(
        seeds = [config.key().as_ref()],
        bump
    )]
    pub sol_vault: AccountInfo<'info>,

    #[account(
        init_if_needed,
        payer = signer,
        associated_token::mint = mint,
        associated_token::authority = sol_vault,
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    pub mint: Box<Account<'info, Mint>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialize>,
    config_nonce: u8,
    vault_nonce: u8,
    authority: Pubkey,
) -> Result<()> {
    let config_key = ctx.accounts.config.key();
    let sol_vault = ctx.accounts.sol_vault.key();

    ctx.accounts.config.require_uninitialized()?;
    address::check_nonce(&[CONFIG_SEED], config_nonce, ctx.program_id, &config_key)?;
    address::check_nonce(
        &[config_key.as_ref()],
        vault_nonce,
        ctx.program_id,
        &sol_vault,
    )?;

    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.signer.key();
    let mint = ctx.accounts.mint.key();

    let config = &mut ctx.accounts.config;
    config.initialize(admin, authority, mint, config_nonce, vault_nonce, now)?;

    msg!(
        "Swap config {} initialized by {} with authority {}",
        config_key,
        admin,
        authority
    );
    msg!(
        "Sol vault: {} token vault: {}",
        sol_vault,
        ctx.accounts.token_vault.key()
    );

    emit!(InitEvent {
        config: config_key,
        admin,
        authority,
        sol_vault,
        token_vault: ctx.accounts.token_vault.key(),
        mint,
    });

    Ok(())
}
