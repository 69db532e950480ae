use anchor_lang::prelude::*;

pub mod address;
pub mod allowance;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod vault;

use instructions::*;

declare_id!("91cSWaofsRKHtbLM93Qdg2ELMnSaqPzMhk1wu1Jaxpvb");

#[program]
pub mod gyc_sol_swap {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        config_nonce: u8,
        vault_nonce: u8,
        authority: Pubkey,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, config_nonce, vault_nonce, authority)
    }

    pub fn update_price(ctx: Context<UpdatePrice>, gyc_price: u64, sol_price: u64) -> Result<()> {
        instructions::update_price::handler(ctx, gyc_price, sol_price)
    }

    // Executed by the swap authority on the user's behalf, through the
    // delegation the user granted to the sol vault.
    pub fn gyc_to_sol(ctx: Context<GycToSol>, amount: u64) -> Result<()> {
        instructions::gyc_to_sol::handler(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }
}
