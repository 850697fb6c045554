//! Percentage splits for the initial supply distribution and the transfer
//! tax, expressed in basis points so rounding stays auditable at amounts
//! that do not divide evenly.

use anchor_lang::prelude::*;

/// Denominator shared by every split below.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Share of the initial supply minted to the liquidity pool.
pub const LIQUIDITY_POOL_BPS: u64 = 4_000;
/// Share of the initial supply divided evenly across the initial whitelist.
pub const WHITELIST_BPS: u64 = 1_500;
/// Share of the initial supply retained by the admin as a burn reserve.
pub const BURN_RESERVE_BPS: u64 = 3_000;
/// Share of the initial supply retained by the admin for marketing.
pub const MARKETING_BPS: u64 = 1_500;

/// Tax charged on non-exempt transfers, taken out of the principal.
pub const TAX_BPS: u64 = 1_000;
/// Share of the tax routed to the rewards pool.
pub const TAX_REWARDS_BPS: u64 = 7_000;
/// Share of the tax routed to the liquidity fund.
pub const TAX_LIQUIDITY_BPS: u64 = 2_000;
/// Share of the tax burned from the sender.
pub const TAX_BURN_BPS: u64 = 1_000;

const _: () = assert!(
    LIQUIDITY_POOL_BPS + WHITELIST_BPS + BURN_RESERVE_BPS + MARKETING_BPS == BPS_DENOMINATOR
);
const _: () = assert!(TAX_REWARDS_BPS + TAX_LIQUIDITY_BPS + TAX_BURN_BPS == BPS_DENOMINATOR);

/// `amount * bps / 10_000`, widened through u128 so the intermediate product
/// cannot overflow for any u64 amount. The result never exceeds `amount`.
pub fn bps_share(amount: u64, bps: u64) -> u64 {
    ((amount as u128 * bps as u128) / BPS_DENOMINATOR as u128) as u64
}

/// Mint amounts for each destination at initialization.
///
/// The per-wallet division remainder and the basis-point rounding dust stay
/// with the admin, so the minted total always equals `total_supply` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialDistribution {
    pub liquidity_pool: u64,
    pub per_whitelist_wallet: u64,
    pub burn_reserve: u64,
    pub marketing: u64,
    pub remainder: u64,
}

impl InitialDistribution {
    /// `wallet_count` must be non-zero; the initialize handler rejects an
    /// empty whitelist before calling this.
    pub fn split(total_supply: u64, wallet_count: u64) -> Self {
        let liquidity_pool = bps_share(total_supply, LIQUIDITY_POOL_BPS);
        let burn_reserve = bps_share(total_supply, BURN_RESERVE_BPS);
        let marketing = bps_share(total_supply, MARKETING_BPS);
        let whitelist_total = bps_share(total_supply, WHITELIST_BPS);
        let per_whitelist_wallet = whitelist_total / wallet_count;

        let distributed = liquidity_pool
            + burn_reserve
            + marketing
            + per_whitelist_wallet * wallet_count;
        let remainder = total_supply - distributed;

        Self {
            liquidity_pool,
            per_whitelist_wallet,
            burn_reserve,
            marketing,
            remainder,
        }
    }

    /// Everything minted straight to the admin token account.
    pub fn admin_retained(&self) -> u64 {
        self.burn_reserve + self.marketing + self.remainder
    }

    pub fn minted_total(&self, wallet_count: u64) -> u64 {
        self.liquidity_pool + self.per_whitelist_wallet * wallet_count + self.admin_retained()
    }
}

/// Tax taken from a single transfer and how it routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxSplit {
    pub total: u64,
    pub rewards: u64,
    pub liquidity: u64,
    pub burn: u64,
}

impl TaxSplit {
    /// No tax: the full principal moves to the receiver.
    pub const WAIVED: TaxSplit = TaxSplit {
        total: 0,
        rewards: 0,
        liquidity: 0,
        burn: 0,
    };

    /// Split the tax on `amount`. Rounding dust from the pool shares lands
    /// in the burned portion so the three parts always sum to `total`.
    pub fn on_amount(amount: u64) -> Self {
        let total = bps_share(amount, TAX_BPS);
        let rewards = bps_share(total, TAX_REWARDS_BPS);
        let liquidity = bps_share(total, TAX_LIQUIDITY_BPS);
        let burn = total - rewards - liquidity;
        Self {
            total,
            rewards,
            liquidity,
            burn,
        }
    }

    /// The share that reaches the pools, which is what
    /// `TokenState::total_tax_collected` accumulates.
    pub fn routed(&self) -> u64 {
        self.rewards + self.liquidity
    }

    /// What the receiver is paid: the principal minus the whole tax.
    pub fn net_of(&self, amount: u64) -> u64 {
        amount - self.total
    }
}

/// Whether a transfer between these owners skips the tax. Transfers touching
/// the admin wallet or a whitelisted wallet on either side move in full.
pub fn tax_waived(
    admin: &Pubkey,
    whitelisted: &[Pubkey],
    sender_owner: &Pubkey,
    receiver_owner: &Pubkey,
) -> bool {
    sender_owner == admin
        || receiver_owner == admin
        || whitelisted.contains(sender_owner)
        || whitelisted.contains(receiver_owner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bps_share_rounds_down() {
        assert_eq!(bps_share(50_000, TAX_BPS), 5_000);
        assert_eq!(bps_share(9_999, TAX_BPS), 999);
        assert_eq!(bps_share(1, TAX_BPS), 0);
        assert_eq!(bps_share(u64::MAX, BPS_DENOMINATOR), u64::MAX);
    }

    #[test]
    fn tax_split_reference_amount() {
        let split = TaxSplit::on_amount(50_000);
        assert_eq!(split.total, 5_000);
        assert_eq!(split.rewards, 3_500);
        assert_eq!(split.liquidity, 1_000);
        assert_eq!(split.burn, 500);
        assert_eq!(split.routed(), 4_500);
        assert_eq!(split.net_of(50_000), 45_000);
    }

    #[test]
    fn tax_split_parts_always_sum() {
        for amount in [0, 1, 9, 77, 777, 12_345, 999_999, u64::MAX / 2] {
            let split = TaxSplit::on_amount(amount);
            assert_eq!(split.rewards + split.liquidity + split.burn, split.total);
            assert!(split.total <= amount);
            assert_eq!(split.net_of(amount) + split.total, amount);
        }
    }

    #[test]
    fn tax_split_rounding_dust_burns() {
        // 777 * 10% = 77; 70% of 77 = 53.9 and 20% = 15.4, both floored.
        let split = TaxSplit::on_amount(777);
        assert_eq!(split.total, 77);
        assert_eq!(split.rewards, 53);
        assert_eq!(split.liquidity, 15);
        assert_eq!(split.burn, 9);
    }

    #[test]
    fn initial_distribution_reference_supply() {
        let shares = InitialDistribution::split(1_000_000, 2);
        assert_eq!(shares.liquidity_pool, 400_000);
        assert_eq!(shares.per_whitelist_wallet, 75_000);
        assert_eq!(shares.burn_reserve, 300_000);
        assert_eq!(shares.marketing, 150_000);
        assert_eq!(shares.remainder, 0);
        assert_eq!(shares.admin_retained(), 450_000);
        assert_eq!(shares.minted_total(2), 1_000_000);
    }

    #[test]
    fn initial_distribution_conserves_awkward_supplies() {
        for (supply, wallets) in [(101, 3), (1_000_003, 7), (999_999_999_999, 13), (1, 1)] {
            let shares = InitialDistribution::split(supply, wallets);
            assert_eq!(shares.minted_total(wallets), supply, "supply {supply}");
        }
    }

    #[test]
    fn waiver_covers_admin_and_whitelist_on_either_side() {
        let admin = Pubkey::new_unique();
        let listed = Pubkey::new_unique();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let whitelist = [listed];

        assert!(tax_waived(&admin, &whitelist, &admin, &a));
        assert!(tax_waived(&admin, &whitelist, &a, &admin));
        assert!(tax_waived(&admin, &whitelist, &listed, &a));
        assert!(tax_waived(&admin, &whitelist, &a, &listed));
        assert!(!tax_waived(&admin, &whitelist, &a, &b));
    }
}
