use anchor_lang::prelude::*;

#[error_code]
pub enum TokenControlError {
    #[msg("Unauthorized: signer is not the stored admin")]
    Unauthorized,

    #[msg("Contract is frozen, transfers are disabled")]
    ContractFrozen,

    #[msg("Insufficient balance for operation")]
    InsufficientBalance,

    #[msg("Invalid amount: zero or out of range")]
    InvalidAmount,

    #[msg("Account does not match the expected mint, owner or derivation")]
    AccountMismatch,

    #[msg("Whitelist is full")]
    WhitelistFull,

    #[msg("Wallet is already whitelisted")]
    AlreadyWhitelisted,

    #[msg("Wallet is not in the whitelist")]
    NotWhitelisted,

    #[msg("Invalid initial whitelist size")]
    InvalidWhitelistSize,

    #[msg("Invalid new admin address")]
    InvalidAdminAddress,
}
