use soroban_sdk::{contracttype, Address};

// ─── Defaults ──────────────────────────────────────────────────────────────

/// 10^18, one whole ledger token in base units.
pub const LEDGER_UNIT: i128 = 1_000_000_000_000_000_000;

/// Default ledger-funded bond price: 1000 tokens.
pub const DEFAULT_PRICE_LEDGER: i128 = 1_000 * LEDGER_UNIT;
/// Default native-funded bond price: 0.03 native (7 decimals).
pub const DEFAULT_PRICE_NATIVE: i128 = 300_000;
/// One minute between interest claims.
pub const DEFAULT_CLAIM_INTERVAL: u64 = 60;
/// One week from mint to maturity.
pub const DEFAULT_LIFETIME: u64 = 604_800;
/// Interest per interval in parts-per-million of the bond's face value.
pub const DEFAULT_INTEREST_RATE_PPM: u32 = 10;
pub const RATE_DENOMINATOR: i128 = 1_000_000;
/// Fee withheld on native principal redemption: 50 / 1000.
pub const DEFAULT_NATIVE_FEE_RATE: u32 = 50;
pub const DEFAULT_NATIVE_FEE_DENOMINATOR: u32 = 1_000;

/// Minimum ledger sequence TTL before a bump is requested (~1 day at 5 s/ledger).
pub const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
pub const BUMP_TARGET: u32 = 518_400;

// ─── Bond state ────────────────────────────────────────────────────────────

/// Rail a bond was funded on; principal is repaid on the same rail.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Currency {
    Ledger,
    Native,
}

/// Lifecycle position of a bond at a given timestamp.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BondStatus {
    /// `now < expires_at`: interest may be claimed.
    Active,
    /// `now >= expires_at`, principal still owed.
    Expired,
    /// Principal paid out. Terminal.
    Redeemed,
}

/// A single bond position.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bond {
    /// Sequential id, starting at 1.
    pub id: u64,
    /// Amount committed at mint, in `currency` units.
    pub principal: i128,
    pub currency: Currency,
    /// Ledger contract in effect at mint. Ledger principal is repaid from
    /// here even if the registry later points at another ledger.
    pub ledger: Address,
    pub minted_at: u64,
    /// Start of the next unclaimed interval. Never below `minted_at`.
    pub last_claim_at: u64,
    /// `minted_at + lifetime`, fixed at mint.
    pub expires_at: u64,
    /// Claim interval in effect at mint.
    pub claim_interval: u64,
    /// Ledger units paid per whole elapsed interval.
    pub interest_per_interval: i128,
    /// false until principal is paid; never reset.
    pub principal_claimed: bool,
}

// ─── Configuration ─────────────────────────────────────────────────────────

/// Registry-wide parameters. Lifetime, interval and interest rate are
/// snapshotted into each bond at mint, so changes apply to new bonds only.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    /// Taxed ledger contract (settlement asset, interest minter).
    pub ledger: Address,
    /// Native asset contract.
    pub native_asset: Address,
    pub price_ledger: i128,
    pub price_native: i128,
    pub claim_interval: u64,
    pub lifetime: u64,
    pub interest_rate_ppm: u32,
    pub native_fee_rate: u32,
    pub native_fee_denominator: u32,
    /// Whether holders may move positions with `transfer_bond`.
    pub transferable: bool,
}

// ─── Batch results ─────────────────────────────────────────────────────────

/// Summary returned by `claim_all_interest` / `claim_all_principal`.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BatchClaimResult {
    /// Bonds that paid out.
    pub claimed: u32,
    /// Bonds skipped as not eligible (or already done).
    pub skipped: u32,
    /// Total paid in ledger units (interest, or ledger principal).
    pub ledger_paid: i128,
    /// Total paid in native units, net of fees.
    pub native_paid: i128,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

/// * `Owner`, `Config`, `NextBondId`, `FeeVault` live in `instance()`.
/// * Bonds and the ownership index live in `persistent()`.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Config,
    /// Id the next minted bond receives.
    NextBondId,
    /// Native fees withheld and not yet withdrawn.
    FeeVault,
    Bond(u64),
    BondOwner(u64),
    /// Ordered ids held by an address.
    OwnerBonds(Address),
}
