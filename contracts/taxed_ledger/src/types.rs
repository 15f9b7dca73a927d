use soroban_sdk::{contracttype, Address};

// ─── Constants ─────────────────────────────────────────────────────────────

pub const TOKEN_NAME: &str = "Legal Tender";
pub const TOKEN_SYMBOL: &str = "MONEY";
pub const DECIMALS: u32 = 18;

/// 10^18, one whole token in base units.
pub const UNIT: i128 = 1_000_000_000_000_000_000;

/// Supply minted to the owner at initialization (1 000 000 tokens).
pub const INITIAL_SUPPLY: i128 = 1_000_000 * UNIT;

/// Default transfer tax: 2 / 100.
pub const DEFAULT_TAX_RATE: u32 = 2;
pub const DEFAULT_TAX_DENOMINATOR: u32 = 100;

/// Minimum ledger sequence TTL before a bump is requested (~1 day at 5 s/ledger).
pub const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
pub const BUMP_TARGET: u32 = 518_400;

// ─── Tax configuration ─────────────────────────────────────────────────────

/// Transfer tax as a fraction `rate / denominator`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaxConfig {
    /// Numerator of the tax fraction.
    pub rate: u32,
    /// Denominator of the tax fraction. Never zero.
    pub denominator: u32,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

/// * Scalars (`Owner` .. `TotalSupply`) live in `instance()`.
/// * Per-account entries live in `persistent()` and are bumped on access.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Contract owner; gates every setter.
    Owner,
    /// Receives the transfer tax.
    TaxAccount,
    /// Current `TaxConfig`.
    Tax,
    /// The single address allowed to call `mint` (the bond registry).
    Minter,
    /// Airdrop distributor, exempt from tax.
    Airdrop,
    /// Sum of all balances.
    TotalSupply,
    /// Balance per account.
    Balance(Address),
    /// Allowance granted by (owner, spender).
    Allowance(Address, Address),
    /// Explicit tax exemption flag.
    Exempt(Address),
}
