use anchor_lang::prelude::*;

#[event]
pub struct InitEvent {
    pub config: Pubkey,
    pub admin: Pubkey,
    pub authority: Pubkey,
    pub sol_vault: Pubkey,
    pub token_vault: Pubkey,
    pub mint: Pubkey,
}

#[event]
pub struct UpdateEvent {
    pub gyc_price: u64,
    pub sol_price: u64,
    pub timestamp: i64,
}

#[event]
pub struct SwapEvent {
    pub recipient: Pubkey,
    pub recipient_token: Pubkey,
    pub mint: Pubkey,
    pub token_amount: u64,
    pub sol_amount: u64,
    pub sol_vault_balance: u64,
    pub token_vault_balance: u64,
}

#[event]
pub struct WithdrawEvent {
    pub admin: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub token_vault_balance: u64,
}
