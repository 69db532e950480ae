use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

#[account]
#[derive(Default, Debug, PartialEq)]
pub struct Config {
    pub is_initialized: bool,
    /// Permission to withdraw accumulated tokens
    pub admin: Pubkey,
    /// Permission to update prices and execute swaps
    pub authority: Pubkey,
    /// Token exchanged for sol
    pub mint: Pubkey,
    pub gyc_price: u64,
    pub sol_price: u64,
    /// Timestamp of the last price update
    pub timestamp: i64,
    /// PDA nonce of the config
    pub config_nonce: u8,
    /// PDA nonce of the sol vault
    pub vault_nonce: u8,
}

impl Config {
    pub const LEN: usize = 8 + // discriminator
        1 + // is_initialized
        32 + // admin
        32 + // authority
        32 + // mint
        8 + // gyc_price
        8 + // sol_price
        8 + // timestamp
        1 + // config_nonce
        1; // vault_nonce

    pub fn initialize(
        &mut self,
        admin: Pubkey,
        authority: Pubkey,
        mint: Pubkey,
        config_nonce: u8,
        vault_nonce: u8,
        now: i64,
    ) -> Result<()> {
        self.require_uninitialized()?;

        *self = Config {
            is_initialized: true,
            admin,
            authority,
            mint,
            gyc_price: 0,
            sol_price: 0,
            timestamp: now,
            config_nonce,
            vault_nonce,
        };
        Ok(())
    }

    pub fn require_uninitialized(&self) -> Result<()> {
        require!(!self.is_initialized, ErrorCode::AlreadyInitialized);
        Ok(())
    }

    pub fn require_authority(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.authority, ErrorCode::Unauthorized);
        Ok(())
    }

    pub fn require_admin(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.admin, ErrorCode::Unauthorized);
        Ok(())
    }

    /// Both prices and the timestamp are written together or not at all.
    pub fn update_price(
        &mut self,
        signer: &Pubkey,
        gyc_price: u64,
        sol_price: u64,
        now: i64,
    ) -> Result<()> {
        self.require_authority(signer)?;
        require!(gyc_price > 0 && sol_price > 0, ErrorCode::InvalidPrice);

        self.gyc_price = gyc_price;
        self.sol_price = sol_price;
        self.timestamp = now;
        Ok(())
    }

    /// Lamports paid out for `amount` tokens, rounded down.
    pub fn quote(&self, amount: u64) -> Result<u64> {
        require!(
            self.gyc_price > 0 && self.sol_price > 0,
            ErrorCode::InvalidPrice
        );

        let lamports = (amount as u128)
            .checked_mul(self.sol_price as u128)
            .and_then(|v| v.checked_div(self.gyc_price as u128))
            .ok_or(ErrorCode::MathOverflow)?;

        u64::try_from(lamports).map_err(|_| error!(ErrorCode::MathOverflow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initialized() -> (Config, Pubkey) {
        let authority = Pubkey::new_unique();
        let mut config = Config::default();
        config
            .initialize(
                Pubkey::new_unique(),
                authority,
                Pubkey::new_unique(),
                254,
                253,
                1_700_000_000,
            )
            .unwrap();
        (config, authority)
    }

    #[test]
    fn initialize_zeroes_prices_and_records_both_authorities() {
        let admin = Pubkey::new_unique();
        let authority = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let mut config = Config::default();

        config
            .initialize(admin, authority, mint, 255, 251, 42)
            .unwrap();

        assert!(config.is_initialized);
        assert_eq!(config.admin, admin);
        assert_eq!(config.authority, authority);
        assert_eq!(config.mint, mint);
        assert_eq!(config.gyc_price, 0);
        assert_eq!(config.sol_price, 0);
        assert_eq!(config.timestamp, 42);
        assert_eq!(config.config_nonce, 255);
        assert_eq!(config.vault_nonce, 251);
    }

    #[test]
    fn second_initialize_is_rejected_and_leaves_config_untouched() {
        let (mut config, _) = initialized();
        let before = config.clone();

        let err = config
            .initialize(
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                1,
                2,
                99,
            )
            .unwrap_err();

        assert_eq!(err, ErrorCode::AlreadyInitialized.into());
        assert_eq!(config, before);
    }

    #[test]
    fn update_price_by_authority() {
        let (mut config, authority) = initialized();

        config.update_price(&authority, 3, 1000, 1_700_000_100).unwrap();

        assert_eq!(config.gyc_price, 3);
        assert_eq!(config.sol_price, 1000);
        assert_eq!(config.timestamp, 1_700_000_100);
    }

    #[test]
    fn update_price_by_stranger_is_unauthorized() {
        let (mut config, _) = initialized();
        let before = config.clone();

        let err = config
            .update_price(&Pubkey::new_unique(), 3, 1000, 5)
            .unwrap_err();

        assert_eq!(err, ErrorCode::Unauthorized.into());
        assert_eq!(config, before);
    }

    #[test]
    fn admin_cannot_update_price() {
        let (mut config, _) = initialized();
        let admin = config.admin;

        let err = config.update_price(&admin, 3, 1000, 5).unwrap_err();

        assert_eq!(err, ErrorCode::Unauthorized.into());
    }

    #[test]
    fn zero_price_is_rejected_without_partial_write() {
        let (mut config, authority) = initialized();
        config.update_price(&authority, 3, 1000, 10).unwrap();
        let before = config.clone();

        let err = config.update_price(&authority, 0, 1000, 20).unwrap_err();
        assert_eq!(err, ErrorCode::InvalidPrice.into());
        let err = config.update_price(&authority, 3, 0, 20).unwrap_err();
        assert_eq!(err, ErrorCode::InvalidPrice.into());

        assert_eq!(config, before);
    }

    #[test]
    fn quote_before_any_price_update_is_invalid() {
        let (config, _) = initialized();

        let err = config.quote(1_000).unwrap_err();

        assert_eq!(err, ErrorCode::InvalidPrice.into());
    }

    #[test]
    fn quote_rounds_down() {
        let (mut config, authority) = initialized();
        config.update_price(&authority, 3, 1000, 0).unwrap();

        assert_eq!(config.quote(10_000_000_000).unwrap(), 3_333_333_333_333);
        assert_eq!(config.quote(1).unwrap(), 333);
        assert_eq!(config.quote(0).unwrap(), 0);

        config.update_price(&authority, 3, 1, 0).unwrap();
        assert_eq!(config.quote(2).unwrap(), 0);
    }

    #[test]
    fn quote_overflowing_u64_fails() {
        let (mut config, authority) = initialized();
        config.update_price(&authority, 1, u64::MAX, 0).unwrap();

        let err = config.quote(2).unwrap_err();

        assert_eq!(err, ErrorCode::MathOverflow.into());
    }

    #[test]
    fn quote_with_large_intermediate_product_fits() {
        let (mut config, authority) = initialized();
        config.update_price(&authority, u64::MAX, u64::MAX, 0).unwrap();

        assert_eq!(config.quote(u64::MAX).unwrap(), u64::MAX);
    }

    #[test]
    fn len_matches_serialized_size() {
        let (config, _) = initialized();
        let mut data = Vec::new();
        config.try_serialize(&mut data).unwrap();

        assert_eq!(data.len(), Config::LEN);
    }
}
