//! Deterministic addresses of the swap config and its vaults.
//!
//! Nothing here is ever read from instruction input: every address is
//! recomputed from the config seed and the program id. The program itself
//! only calls `check_nonce`; the derivations serve clients building the
//! `initialize` arguments and account lists.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

use crate::constants::CONFIG_SEED;
use crate::errors::ErrorCode;

pub fn config_address(program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&[CONFIG_SEED], program_id)
        .ok_or_else(|| error!(ErrorCode::AddressDerivationFailed))
}

pub fn vault_address(config: &Pubkey, program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&[config.as_ref()], program_id)
        .ok_or_else(|| error!(ErrorCode::AddressDerivationFailed))
}

/// Token vault is the sol vault's associated token account.
pub fn token_vault_address(vault: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(vault, mint)
}

/// Checks that `seeds` plus a caller supplied `nonce` derive `expected`.
pub fn check_nonce(
    seeds: &[&[u8]],
    nonce: u8,
    program_id: &Pubkey,
    expected: &Pubkey,
) -> Result<()> {
    let bump = [nonce];
    let mut signer_seeds = seeds.to_vec();
    signer_seeds.push(&bump);

    let derived = Pubkey::create_program_address(&signer_seeds, program_id)
        .map_err(|_| error!(ErrorCode::AddressDerivationFailed))?;
    require_keys_eq!(derived, *expected, ErrorCode::AddressDerivationFailed);
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultAddresses {
    pub config: Pubkey,
    pub config_nonce: u8,
    pub sol_vault: Pubkey,
    pub vault_nonce: u8,
    pub token_vault: Pubkey,
}

impl VaultAddresses {
    pub fn derive(program_id: &Pubkey, mint: &Pubkey) -> Result<Self> {
        let (config, config_nonce) = config_address(program_id)?;
        let (sol_vault, vault_nonce) = vault_address(&config, program_id)?;
        Ok(Self {
            config,
            config_nonce,
            sol_vault,
            vault_nonce,
            token_vault: token_vault_address(&sol_vault, mint),
        })
    }
}
