use anchor_lang::prelude::*;

use crate::errors::TokenControlError;

/// Per-mint control record. Lives at the `["token_state", mint]` PDA.
#[account]
pub struct TokenState {
    pub admin: Pubkey,              // 32 bytes
    pub mint: Pubkey,               // 32 bytes
    pub total_supply: u64,          // 8 bytes
    pub total_transactions: u64,    // 8 bytes
    pub total_tax_collected: u64,   // 8 bytes
    pub total_burned: u64,          // 8 bytes
    pub is_frozen: bool,            // 1 byte
    pub bump: u8,                   // 1 byte
}

impl TokenState {
    pub const SIZE: usize = 8 +     // discriminator
        32 +                        // admin
        32 +                        // mint
        (8 * 4) +                   // counters
        1 +                         // is_frozen
        1;                          // bump

    pub fn initialize(&mut self, admin: Pubkey, mint: Pubkey, total_supply: u64, bump: u8) {
        self.admin = admin;
        self.mint = mint;
        self.total_supply = total_supply;
        self.total_transactions = 0;
        self.total_tax_collected = 0;
        self.total_burned = 0;
        self.is_frozen = false;
        self.bump = bump;
    }

    /// Account for `amount` leaving circulation. Supply and the burn
    /// accumulator move together so `total_supply` always equals the initial
    /// mint amount minus `total_burned`.
    pub fn record_burn(&mut self, amount: u64) -> Result<()> {
        self.total_supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(TokenControlError::InvalidAmount)?;
        self.total_burned = self
            .total_burned
            .checked_add(amount)
            .ok_or(TokenControlError::InvalidAmount)?;
        Ok(())
    }

    /// Bump the transfer counter and credit the pool-routed tax share.
    /// The burned tax share is accounted through [`Self::record_burn`].
    pub fn record_transfer(&mut self, routed_tax: u64) -> Result<()> {
        self.total_transactions = self
            .total_transactions
            .checked_add(1)
            .ok_or(TokenControlError::InvalidAmount)?;
        self.total_tax_collected = self
            .total_tax_collected
            .checked_add(routed_tax)
            .ok_or(TokenControlError::InvalidAmount)?;
        Ok(())
    }
}

/// Tax-exempt wallets for a mint. Lives at the `["whitelist", mint]` PDA.
/// Insertion order is preserved; membership is unique.
#[account]
pub struct Whitelist {
    pub wallets: Vec<Pubkey>,
    pub bump: u8,
}

impl Whitelist {
    pub const MAX_WALLETS: usize = 15;

    pub const SIZE: usize = 8 +                 // discriminator
        4 + (32 * Self::MAX_WALLETS) +          // wallets vec
        1;                                      // bump

    pub fn contains(&self, wallet: &Pubkey) -> bool {
        self.wallets.contains(wallet)
    }

    pub fn insert(&mut self, wallet: Pubkey) -> Result<()> {
        require!(
            self.wallets.len() < Self::MAX_WALLETS,
            TokenControlError::WhitelistFull
        );
        require!(!self.contains(&wallet), TokenControlError::AlreadyWhitelisted);
        self.wallets.push(wallet);
        Ok(())
    }

    /// Removes exactly one entry; the order of the remaining wallets is kept.
    pub fn remove(&mut self, wallet: &Pubkey) -> Result<()> {
        let index = self
            .wallets
            .iter()
            .position(|w| w == wallet)
            .ok_or(TokenControlError::NotWhitelisted)?;
        self.wallets.remove(index);
        Ok(())
    }
}

// Events

#[event]
pub struct TransferEvent {
    pub sender: Pubkey,
    pub receiver: Pubkey,
    pub amount: u64,
    pub tax_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct BurnEvent {
    pub burner: Pubkey,
    pub amount: u64,
    pub new_total_supply: u64,
    pub timestamp: i64,
}

#[event]
pub struct SwapEvent {
    pub pool: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct WhitelistEvent {
    pub wallet: Pubkey,
    pub is_added: bool,
    pub timestamp: i64,
}
