#![allow(unexpected_cfgs)]
#![allow(deprecated)]

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{self, Burn, Mint, MintTo, Token, TokenAccount, Transfer};

pub mod errors;
pub mod state;
pub mod tokenomics;

use errors::TokenControlError;
use state::{BurnEvent, SwapEvent, TokenState, TransferEvent, Whitelist, WhitelistEvent};
use tokenomics::{tax_waived, InitialDistribution, TaxSplit};

declare_id!("2kXsqV9J3G3oTBpCnq4M5aFdHMgjDrgSv1j5a4MAaEgS");

#[program]
pub mod token_control {
    use super::*;

    /// Create the token state and whitelist records for a mint and mint the
    /// full supply out in named shares: liquidity pool, initial whitelist
    /// wallets, and the admin's retained burn-reserve plus marketing share.
    ///
    /// One token account per whitelist wallet is expected in
    /// `remaining_accounts`, in the same order as `whitelist_wallets`.
    pub fn initialize_token<'a, 'b, 'c, 'info>(
        ctx: Context<'a, 'b, 'c, 'info, InitializeToken<'info>>,
        total_supply: u64,
        whitelist_wallets: Vec<Pubkey>,
    ) -> Result<()>
    where
        'c: 'info,
    {
        require!(total_supply > 0, TokenControlError::InvalidAmount);
        require!(
            !whitelist_wallets.is_empty() && whitelist_wallets.len() <= Whitelist::MAX_WALLETS,
            TokenControlError::InvalidWhitelistSize
        );
        require!(
            ctx.remaining_accounts.len() == whitelist_wallets.len(),
            TokenControlError::AccountMismatch
        );

        let mint_key = ctx.accounts.mint.key();

        ctx.accounts.token_state.initialize(
            ctx.accounts.admin.key(),
            mint_key,
            total_supply,
            ctx.bumps.token_state,
        );

        let whitelist = &mut ctx.accounts.whitelist;
        whitelist.bump = ctx.bumps.whitelist;
        for wallet in &whitelist_wallets {
            whitelist.insert(*wallet)?;
        }

        let shares = InitialDistribution::split(total_supply, whitelist_wallets.len() as u64);

        let seeds = &[
            b"mint_authority".as_ref(),
            mint_key.as_ref(),
            &[ctx.bumps.mint_authority],
        ];
        let signer_seeds = &[&seeds[..]];

        mint_share(
            &ctx.accounts.mint,
            ctx.accounts.lp_pool.to_account_info(),
            &ctx.accounts.mint_authority,
            &ctx.accounts.token_program,
            signer_seeds,
            shares.liquidity_pool,
        )?;

        mint_share(
            &ctx.accounts.mint,
            ctx.accounts.admin_token_account.to_account_info(),
            &ctx.accounts.mint_authority,
            &ctx.accounts.token_program,
            signer_seeds,
            shares.admin_retained(),
        )?;

        for (wallet, wallet_account) in whitelist_wallets.iter().zip(ctx.remaining_accounts.iter())
        {
            let token_account = Account::<TokenAccount>::try_from(wallet_account)?;
            require!(
                token_account.mint == mint_key,
                TokenControlError::AccountMismatch
            );
            require_keys_eq!(
                token_account.owner,
                *wallet,
                TokenControlError::AccountMismatch
            );

            mint_share(
                &ctx.accounts.mint,
                wallet_account.clone(),
                &ctx.accounts.mint_authority,
                &ctx.accounts.token_program,
                signer_seeds,
                shares.per_whitelist_wallet,
            )?;
        }

        msg!(
            "Token initialized: mint {}, admin {}, supply {}, {} whitelist wallets",
            mint_key,
            ctx.accounts.admin.key(),
            total_supply,
            whitelist_wallets.len()
        );

        Ok(())
    }

    /// Move `amount` from the sender to the receiver, charging the transfer
    /// tax unless either side's owning wallet is the admin or whitelisted.
    /// The tax routes to the rewards pool and liquidity fund; its burned
    /// share comes out of the sender and out of the tracked supply.
    pub fn transfer_tokens(ctx: Context<TransferTokens>, amount: u64) -> Result<()> {
        require!(
            !ctx.accounts.token_state.is_frozen,
            TokenControlError::ContractFrozen
        );
        require!(amount > 0, TokenControlError::InvalidAmount);
        require!(
            ctx.accounts.sender.amount >= amount,
            TokenControlError::InsufficientBalance
        );

        let waived = tax_waived(
            &ctx.accounts.token_state.admin,
            &ctx.accounts.whitelist.wallets,
            &ctx.accounts.sender.owner,
            &ctx.accounts.receiver.owner,
        );
        let split = if waived {
            TaxSplit::WAIVED
        } else {
            TaxSplit::on_amount(amount)
        };

        transfer_from_sender(
            &ctx.accounts.sender,
            &ctx.accounts.receiver,
            &ctx.accounts.sender_authority,
            &ctx.accounts.token_program,
            split.net_of(amount),
        )?;

        if split.total > 0 {
            transfer_from_sender(
                &ctx.accounts.sender,
                &ctx.accounts.rewards_pool,
                &ctx.accounts.sender_authority,
                &ctx.accounts.token_program,
                split.rewards,
            )?;
            transfer_from_sender(
                &ctx.accounts.sender,
                &ctx.accounts.lp_fund,
                &ctx.accounts.sender_authority,
                &ctx.accounts.token_program,
                split.liquidity,
            )?;
            burn_from(
                &ctx.accounts.mint,
                &ctx.accounts.sender,
                ctx.accounts.sender_authority.to_account_info(),
                &ctx.accounts.token_program,
                split.burn,
            )?;
            ctx.accounts.token_state.record_burn(split.burn)?;
        }

        ctx.accounts.token_state.record_transfer(split.routed())?;

        emit!(TransferEvent {
            sender: ctx.accounts.sender.key(),
            receiver: ctx.accounts.receiver.key(),
            amount: split.net_of(amount),
            tax_amount: split.total,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    /// Add a wallet to the tax-exemption whitelist (admin only).
    pub fn add_to_whitelist(ctx: Context<WhitelistOperation>, wallet: Pubkey) -> Result<()> {
        ctx.accounts.whitelist.insert(wallet)?;

        emit!(WhitelistEvent {
            wallet,
            is_added: true,
            timestamp: Clock::get()?.unix_timestamp,
        });
        msg!("Whitelisted wallet {}", wallet);

        Ok(())
    }

    /// Remove a wallet from the whitelist (admin only). The order of the
    /// remaining entries is preserved.
    pub fn remove_from_whitelist(ctx: Context<WhitelistOperation>, wallet: Pubkey) -> Result<()> {
        ctx.accounts.whitelist.remove(&wallet)?;

        emit!(WhitelistEvent {
            wallet,
            is_added: false,
            timestamp: Clock::get()?.unix_timestamp,
        });
        msg!("Removed wallet {} from whitelist", wallet);

        Ok(())
    }

    /// Burn `amount` from the admin's holding (admin only).
    pub fn manual_burn(ctx: Context<ManualBurn>, amount: u64) -> Result<()> {
        require!(amount > 0, TokenControlError::InvalidAmount);
        require!(
            ctx.accounts.admin_token_account.amount >= amount,
            TokenControlError::InsufficientBalance
        );

        burn_from(
            &ctx.accounts.mint,
            &ctx.accounts.admin_token_account,
            ctx.accounts.admin.to_account_info(),
            &ctx.accounts.token_program,
            amount,
        )?;
        ctx.accounts.token_state.record_burn(amount)?;

        emit!(BurnEvent {
            burner: ctx.accounts.admin.key(),
            amount,
            new_total_supply: ctx.accounts.token_state.total_supply,
            timestamp: Clock::get()?.unix_timestamp,
        });
        msg!(
            "Burned {} from admin holding, supply now {}",
            amount,
            ctx.accounts.token_state.total_supply
        );

        Ok(())
    }

    /// Burn `amount` from the caller's own holding. Any holder may do this;
    /// the token account owner must sign.
    pub fn user_burn(ctx: Context<UserBurn>, amount: u64) -> Result<()> {
        require!(amount > 0, TokenControlError::InvalidAmount);
        require!(
            ctx.accounts.user_token_account.amount >= amount,
            TokenControlError::InsufficientBalance
        );

        burn_from(
            &ctx.accounts.mint,
            &ctx.accounts.user_token_account,
            ctx.accounts.user.to_account_info(),
            &ctx.accounts.token_program,
            amount,
        )?;
        ctx.accounts.token_state.record_burn(amount)?;

        emit!(BurnEvent {
            burner: ctx.accounts.user.key(),
            amount,
            new_total_supply: ctx.accounts.token_state.total_supply,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    /// Stage `amount` of collected rewards for an off-program swap by moving
    /// it from the rewards pool to the designated swap wallet (admin only).
    pub fn prepare_rewards_swap(ctx: Context<SwapRewards>, amount: u64) -> Result<()> {
        require!(amount > 0, TokenControlError::InvalidAmount);
        require!(
            ctx.accounts.rewards_pool.amount >= amount,
            TokenControlError::InsufficientBalance
        );

        transfer_from_sender(
            &ctx.accounts.rewards_pool,
            &ctx.accounts.swap_wallet,
            &ctx.accounts.admin,
            &ctx.accounts.token_program,
            amount,
        )?;

        emit!(SwapEvent {
            pool: ctx.accounts.rewards_pool.key(),
            amount,
            timestamp: Clock::get()?.unix_timestamp,
        });
        msg!("Staged {} for rewards swap", amount);

        Ok(())
    }

    /// Hand the admin role to `new_admin`, effective immediately. Single
    /// step, no pending-acceptance state.
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_admin: Pubkey) -> Result<()> {
        require!(
            new_admin != Pubkey::default(),
            TokenControlError::InvalidAdminAddress
        );

        let old_admin = ctx.accounts.token_state.admin;
        ctx.accounts.token_state.admin = new_admin;

        msg!("Admin changed from {} to {}", old_admin, new_admin);

        Ok(())
    }

    /// Toggle the transfer freeze (admin only). Only transfers are gated;
    /// administrative operations keep working while frozen.
    pub fn freeze_contract(ctx: Context<FreezeContract>, freeze: bool) -> Result<()> {
        ctx.accounts.token_state.is_frozen = freeze;

        msg!(
            "Contract {} by admin {}",
            if freeze { "frozen" } else { "unfrozen" },
            ctx.accounts.admin.key()
        );

        Ok(())
    }
}

// CPI helpers

fn mint_share<'info>(
    mint: &Account<'info, Mint>,
    to: AccountInfo<'info>,
    mint_authority: &AccountInfo<'info>,
    token_program: &Program<'info, Token>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    let cpi_accounts = MintTo {
        mint: mint.to_account_info(),
        to,
        authority: mint_authority.clone(),
    };
    token::mint_to(
        CpiContext::new_with_signer(token_program.to_account_info(), cpi_accounts, signer_seeds),
        amount,
    )
}

fn transfer_from_sender<'info>(
    from: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    authority: &Signer<'info>,
    token_program: &Program<'info, Token>,
    amount: u64,
) -> Result<()> {
    let cpi_accounts = Transfer {
        from: from.to_account_info(),
        to: to.to_account_info(),
        authority: authority.to_account_info(),
    };
    token::transfer(
        CpiContext::new(token_program.to_account_info(), cpi_accounts),
        amount,
    )
}

fn burn_from<'info>(
    mint: &Account<'info, Mint>,
    from: &Account<'info, TokenAccount>,
    authority: AccountInfo<'info>,
    token_program: &Program<'info, Token>,
    amount: u64,
) -> Result<()> {
    let cpi_accounts = Burn {
        mint: mint.to_account_info(),
        from: from.to_account_info(),
        authority,
    };
    token::burn(
        CpiContext::new(token_program.to_account_info(), cpi_accounts),
        amount,
    )
}

// Account structures

#[derive(Accounts)]
pub struct InitializeToken<'info> {
    #[account(
        init,
        payer = admin,
        space = TokenState::SIZE,
        seeds = [b"token_state", mint.key().as_ref()],
        bump,
    )]
    pub token_state: Account<'info, TokenState>,

    #[account(
        init,
        payer = admin,
        space = Whitelist::SIZE,
        seeds = [b"whitelist", mint.key().as_ref()],
        bump,
    )]
    pub whitelist: Account<'info, Whitelist>,

    /// CHECK: PDA mint authority for the controlled mint, verified by seeds
    #[account(
        seeds = [b"mint_authority", mint.key().as_ref()],
        bump,
    )]
    pub mint_authority: AccountInfo<'info>,

    #[account(
        mut,
        constraint = mint.mint_authority == COption::Some(mint_authority.key())
            @ TokenControlError::AccountMismatch
    )]
    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        constraint = admin_token_account.mint == mint.key() @ TokenControlError::AccountMismatch,
        constraint = admin_token_account.owner == admin.key() @ TokenControlError::AccountMismatch,
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = lp_pool.mint == mint.key() @ TokenControlError::AccountMismatch
    )]
    pub lp_pool: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = rewards_pool.mint == mint.key() @ TokenControlError::AccountMismatch
    )]
    pub rewards_pool: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = lp_fund.mint == mint.key() @ TokenControlError::AccountMismatch
    )]
    pub lp_fund: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct TransferTokens<'info> {
    #[account(
        mut,
        seeds = [b"token_state", mint.key().as_ref()],
        bump = token_state.bump,
    )]
    pub token_state: Account<'info, TokenState>,

    #[account(
        seeds = [b"whitelist", mint.key().as_ref()],
        bump = whitelist.bump,
    )]
    pub whitelist: Account<'info, Whitelist>,

    #[account(
        mut,
        constraint = mint.key() == token_state.mint @ TokenControlError::AccountMismatch
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = sender.mint == token_state.mint @ TokenControlError::AccountMismatch
    )]
    pub sender: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = receiver.mint == token_state.mint @ TokenControlError::AccountMismatch
    )]
    pub receiver: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = rewards_pool.mint == token_state.mint @ TokenControlError::AccountMismatch
    )]
    pub rewards_pool: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = lp_fund.mint == token_state.mint @ TokenControlError::AccountMismatch
    )]
    pub lp_fund: Account<'info, TokenAccount>,

    #[account(
        constraint = sender_authority.key() == sender.owner @ TokenControlError::AccountMismatch
    )]
    pub sender_authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct WhitelistOperation<'info> {
    #[account(
        seeds = [b"token_state", token_state.mint.as_ref()],
        bump = token_state.bump,
    )]
    pub token_state: Account<'info, TokenState>,

    #[account(
        mut,
        seeds = [b"whitelist", token_state.mint.as_ref()],
        bump = whitelist.bump,
    )]
    pub whitelist: Account<'info, Whitelist>,

    #[account(
        constraint = admin.key() == token_state.admin @ TokenControlError::Unauthorized
    )]
    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct ManualBurn<'info> {
    #[account(
        mut,
        seeds = [b"token_state", mint.key().as_ref()],
        bump = token_state.bump,
    )]
    pub token_state: Account<'info, TokenState>,

    #[account(
        mut,
        constraint = mint.key() == token_state.mint @ TokenControlError::AccountMismatch
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = admin_token_account.mint == token_state.mint
            @ TokenControlError::AccountMismatch,
        constraint = admin_token_account.owner == admin.key()
            @ TokenControlError::AccountMismatch,
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    #[account(
        constraint = admin.key() == token_state.admin @ TokenControlError::Unauthorized
    )]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct UserBurn<'info> {
    #[account(
        mut,
        seeds = [b"token_state", mint.key().as_ref()],
        bump = token_state.bump,
    )]
    pub token_state: Account<'info, TokenState>,

    #[account(
        mut,
        constraint = mint.key() == token_state.mint @ TokenControlError::AccountMismatch
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = user_token_account.mint == token_state.mint
            @ TokenControlError::AccountMismatch
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    #[account(
        constraint = user.key() == user_token_account.owner @ TokenControlError::AccountMismatch
    )]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct SwapRewards<'info> {
    #[account(
        seeds = [b"token_state", token_state.mint.as_ref()],
        bump = token_state.bump,
    )]
    pub token_state: Account<'info, TokenState>,

    #[account(
        mut,
        constraint = rewards_pool.mint == token_state.mint @ TokenControlError::AccountMismatch,
        constraint = rewards_pool.owner == admin.key() @ TokenControlError::AccountMismatch,
    )]
    pub rewards_pool: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = swap_wallet.mint == token_state.mint @ TokenControlError::AccountMismatch
    )]
    pub swap_wallet: Account<'info, TokenAccount>,

    #[account(
        constraint = admin.key() == token_state.admin @ TokenControlError::Unauthorized
    )]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(
        mut,
        seeds = [b"token_state", token_state.mint.as_ref()],
        bump = token_state.bump,
    )]
    pub token_state: Account<'info, TokenState>,

    #[account(
        constraint = admin.key() == token_state.admin @ TokenControlError::Unauthorized
    )]
    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct FreezeContract<'info> {
    #[account(
        mut,
        seeds = [b"token_state", token_state.mint.as_ref()],
        bump = token_state.bump,
    )]
    pub token_state: Account<'info, TokenState>,

    #[account(
        constraint = admin.key() == token_state.admin @ TokenControlError::Unauthorized
    )]
    pub admin: Signer<'info>,
}
