use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Swap config is already initialized")]
    AlreadyInitialized,
    #[msg("Signer is not permitted to perform this action")]
    Unauthorized,
    #[msg("Prices must be non-zero")]
    InvalidPrice,
    #[msg("Delegated amount is smaller than the swap amount")]
    InsufficientDelegatedAmount,
    #[msg("Insufficient balance in vault")]
    InsufficientVaultBalance,
    #[msg("Nonce does not derive the expected address")]
    AddressDerivationFailed,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Token account is not delegated to the vault")]
    InvalidDelegate,
    #[msg("Insufficient token balance in user account")]
    InsufficientTokenBalance,
    #[msg("Invalid token mint")]
    InvalidMint,
    #[msg("Math overflow occurred")]
    MathOverflow,
}
