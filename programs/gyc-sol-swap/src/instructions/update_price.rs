use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::events::UpdateEvent;
use crate::state::Config;

#[derive(Accounts)]
pub struct UpdatePrice<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.config_nonce,
    )]
    pub config: Box<Account<'info, Config>>,
}

pub fn handler(ctx: Context<UpdatePrice>, gyc_price: u64, sol_price: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let signer = ctx.accounts.authority.key();

    let config = &mut ctx.accounts.config;
    config.update_price(&signer, gyc_price, sol_price, now)?;

    msg!(
        "Price updated by {}: gyc {} sol {} at {}",
        signer,
        gyc_price,
        sol_price,
        now
    );

    emit!(UpdateEvent {
        gyc_price,
        sol_price,
        timestamp: now,
    });

    Ok(())
}
