//! Bond Registry Contract
//!
//! Issues fixed-term, interest-bearing bonds funded either in the taxed
//! ledger asset (allowance pull) or in native currency (overpayment
//! refunded). While a bond is active its holder claims interest, minted on
//! the ledger, once per whole elapsed claim interval. After the bond's
//! lifetime the holder redeems principal exactly once; native redemptions
//! withhold a fee into the fee vault, which only the owner can withdraw.
//!
//! ## Key design decisions
//!
//! - **Checks-Effects-Interactions**: `last_claim_at`, `principal_claimed`
//!   and the fee vault are written *before* any outbound transfer.
//! - **Owner index**: each holder's ids are kept in an ordered list so batch
//!   claims touch only that holder's positions.
//! - **Snapshotted terms**: lifetime, interval and interest rate are copied
//!   into the bond at mint; later config changes affect new bonds only.
//! - **Skip, don't abort**: batch claims skip bonds whose error is Timing or
//!   StateConflict and abort on anything else.

#![no_std]

mod access_control;
mod accrual;
mod events;
mod fee_vault;
mod ledger;
mod math;
mod storage;
pub mod types;

use bond_errors::{ContractError, ErrorExt};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};
use types::{
    Bond, BondStatus, BatchClaimResult, Currency, RegistryConfig, DEFAULT_CLAIM_INTERVAL,
    DEFAULT_INTEREST_RATE_PPM, DEFAULT_LIFETIME, DEFAULT_NATIVE_FEE_DENOMINATOR,
    DEFAULT_NATIVE_FEE_RATE, DEFAULT_PRICE_LEDGER, DEFAULT_PRICE_NATIVE,
};




#[cfg(test)]
mod test_batch;

#[cfg(test)]
mod test_admin;

// ─── Helpers ───────────────────────────────────────────────────────────────

/// Creates `count` bonds for `buyer`. `face_value` is the ledger-denominated
/// amount interest is computed on.
fn create_bonds(
    e: &Env,
    cfg: &RegistryConfig,
    buyer: &Address,
    count: u32,
    principal: i128,
    currency: Currency,
    face_value: i128,
) -> Result<Vec<u64>, ContractError> {
    let now = e.ledger().timestamp();
    let expires_at = math::add_u64(now, cfg.lifetime)?;
    let interest_per_interval = accrual::interest_per_interval(face_value, cfg.interest_rate_ppm)?;

    let mut ids = Vec::new(e);
    for _ in 0..count {
        let id = storage::next_bond_id(e);
        let bond = Bond {
            id,
            principal,
            currency,
            ledger: cfg.ledger.clone(),
            minted_at: now,
            last_claim_at: now,
            expires_at,
            claim_interval: cfg.claim_interval,
            interest_per_interval,
            principal_claimed: false,
        };
        storage::save_bond(e, &bond);
        storage::assign(e, id, buyer);
        events::emit_minted(e, id, buyer);
        ids.push_back(id);
    }
    Ok(ids)
}

fn claim_interest_for(
    e: &Env,
    cfg: &RegistryConfig,
    holder: &Address,
    id: u64,
) -> Result<i128, ContractError> {
    let mut bond = storage::load_owned(e, id, holder)?;
    let accrued = accrual::accrue(&bond, e.ledger().timestamp())?;

    // CEI: advance the claim cursor before minting.
    bond.last_claim_at = accrued.next_claim_at;
    storage::save_bond(e, &bond);

    ledger::mint_interest(e, &cfg.ledger, holder, accrued.interest);
    events::emit_interest_claimed(e, id, holder, accrued.interest);
    Ok(accrued.interest)
}

/// Returns the currency paid in and the amount the holder received.
fn claim_principal_for(
    e: &Env,
    cfg: &RegistryConfig,
    holder: &Address,
    id: u64,
) -> Result<(Currency, i128), ContractError> {
    let mut bond = storage::load_owned(e, id, holder)?;
    accrual::check_principal(&bond, e.ledger().timestamp())?;

    // CEI: mark redeemed before paying out.
    bond.principal_claimed = true;
    storage::save_bond(e, &bond);

    let paid = match bond.currency {
        Currency::Ledger => {
            ledger::pay_ledger(e, &bond.ledger, holder, bond.principal);
            bond.principal
        }
        Currency::Native => {
            let (net, fee) = accrual::split_native_fee(
                bond.principal,
                cfg.native_fee_rate,
                cfg.native_fee_denominator,
            )?;
            fee_vault::credit(e, fee)?;
            ledger::pay_native(e, &cfg.native_asset, holder, net);
            net
        }
    };

    events::emit_principal_claimed(e, id, holder, paid);
    Ok((bond.currency, paid))
}

/// Applies an owner-only change to the stored config.
fn update_config<F>(e: &Env, caller: &Address, apply: F) -> Result<RegistryConfig, ContractError>
where
    F: FnOnce(&mut RegistryConfig) -> Result<(), ContractError>,
{
    access_control::require_owner(e, caller)?;
    let mut cfg = storage::load_config(e)?;
    apply(&mut cfg)?;
    storage::save_config(e, &cfg);
    Ok(cfg)
}

fn require_positive(amount: i128) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::AmountMustBePositive);
    }
    Ok(())
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct BondRegistry;

#[contractimpl]
impl BondRegistry {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// One-time initialization with default terms.
    ///
    /// The ledger must separately name this contract as its bond registry
    /// (authorized minter) before interest can be paid.
    pub fn initialize(
        e: Env,
        owner: Address,
        ledger: Address,
        native_asset: Address,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&types::DataKey::Owner) {
            return Err(ContractError::AlreadyInitialized);
        }
        owner.require_auth();

        access_control::set_owner(&e, &owner);
        storage::save_config(
            &e,
            &RegistryConfig {
                ledger,
                native_asset,
                price_ledger: DEFAULT_PRICE_LEDGER,
                price_native: DEFAULT_PRICE_NATIVE,
                claim_interval: DEFAULT_CLAIM_INTERVAL,
                lifetime: DEFAULT_LIFETIME,
                interest_rate_ppm: DEFAULT_INTEREST_RATE_PPM,
                native_fee_rate: DEFAULT_NATIVE_FEE_RATE,
                native_fee_denominator: DEFAULT_NATIVE_FEE_DENOMINATOR,
                transferable: false,
            },
        );
        Ok(())
    }

    // ── Minting ────────────────────────────────────────────────────────────

    /// Mint one ledger-funded bond with a caller-chosen principal.
    pub fn mint_bond(e: Env, buyer: Address, principal: i128) -> Result<u64, ContractError> {
        buyer.require_auth();
        require_positive(principal)?;
        let cfg = storage::load_config(&e)?;

        ledger::pull_ledger(&e, &cfg.ledger, &buyer, principal);
        let ids = create_bonds(&e, &cfg, &buyer, 1, principal, Currency::Ledger, principal)?;
        ids.get(0).ok_or(ContractError::BondNotFound)
    }

    /// Mint `count` ledger-funded bonds at the current ledger price.
    ///
    /// The buyer must have approved this contract for `price * count`.
    pub fn mint_multiple_bonds(e: Env, buyer: Address, count: u32) -> Result<Vec<u64>, ContractError> {
        buyer.require_auth();
        if count == 0 {
            return Err(ContractError::ZeroBondCount);
        }
        let cfg = storage::load_config(&e)?;
        let cost = math::mul_i128(cfg.price_ledger, count as i128)?;

        ledger::pull_ledger(&e, &cfg.ledger, &buyer, cost);
        create_bonds(
            &e,
            &cfg,
            &buyer,
            count,
            cfg.price_ledger,
            Currency::Ledger,
            cfg.price_ledger,
        )
    }

    /// Mint `count` native-funded bonds. `value` is what the buyer sends;
    /// anything above `price * count` is refunded in the same call.
    pub fn mint_multiple_bonds_native(
        e: Env,
        buyer: Address,
        count: u32,
        value: i128,
    ) -> Result<Vec<u64>, ContractError> {
        buyer.require_auth();
        if count == 0 {
            return Err(ContractError::ZeroBondCount);
        }
        let cfg = storage::load_config(&e)?;
        let cost = math::mul_i128(cfg.price_native, count as i128)?;
        if value < cost {
            return Err(ContractError::InsufficientValue);
        }

        ledger::pull_native(&e, &cfg.native_asset, &buyer, value);
        ledger::pay_native(&e, &cfg.native_asset, &buyer, math::sub_i128(value, cost)?);
        // Interest on native bonds is paid in ledger units on the ledger price.
        create_bonds(
            &e,
            &cfg,
            &buyer,
            count,
            cfg.price_native,
            Currency::Native,
            cfg.price_ledger,
        )
    }

    // ── Claims ─────────────────────────────────────────────────────────────

    /// Claim interest for every whole interval elapsed since the last claim.
    /// Returns the interest minted.
    pub fn claim_interest(e: Env, holder: Address, id: u64) -> Result<i128, ContractError> {
        holder.require_auth();
        let cfg = storage::load_config(&e)?;
        claim_interest_for(&e, &cfg, &holder, id)
    }

    /// Redeem principal after expiry. Returns the amount paid to the holder.
    pub fn claim_principal(e: Env, holder: Address, id: u64) -> Result<i128, ContractError> {
        holder.require_auth();
        let cfg = storage::load_config(&e)?;
        let (_, paid) = claim_principal_for(&e, &cfg, &holder, id)?;
        Ok(paid)
    }

    /// Claim interest on every bond `holder` owns, skipping ineligible ones.
    pub fn claim_all_interest(e: Env, holder: Address) -> Result<BatchClaimResult, ContractError> {
        holder.require_auth();
        let cfg = storage::load_config(&e)?;
        let mut result = BatchClaimResult::default();

        for id in storage::bonds_of(&e, &holder).iter() {
            match claim_interest_for(&e, &cfg, &holder, id) {
                Ok(interest) => {
                    result.claimed += 1;
                    result.ledger_paid = math::add_i128(result.ledger_paid, interest)?;
                }
                Err(err) if err.is_skippable() => result.skipped += 1,
                Err(err) => return Err(err),
            }
        }
        Ok(result)
    }

    /// Redeem every expired, unredeemed bond `holder` owns.
    pub fn claim_all_principal(e: Env, holder: Address) -> Result<BatchClaimResult, ContractError> {
        holder.require_auth();
        let cfg = storage::load_config(&e)?;
        let mut result = BatchClaimResult::default();

        for id in storage::bonds_of(&e, &holder).iter() {
            match claim_principal_for(&e, &cfg, &holder, id) {
                Ok((Currency::Ledger, paid)) => {
                    result.claimed += 1;
                    result.ledger_paid = math::add_i128(result.ledger_paid, paid)?;
                }
                Ok((Currency::Native, paid)) => {
                    result.claimed += 1;
                    result.native_paid = math::add_i128(result.native_paid, paid)?;
                }
                Err(err) if err.is_skippable() => result.skipped += 1,
                Err(err) => return Err(err),
            }
        }
        Ok(result)
    }

    // ── Positions ──────────────────────────────────────────────────────────

    /// Move a position to another holder. Disabled unless the owner has
    /// turned transfers on.
    pub fn transfer_bond(e: Env, from: Address, to: Address, id: u64) -> Result<(), ContractError> {
        from.require_auth();
        let cfg = storage::load_config(&e)?;
        if !cfg.transferable {
            return Err(ContractError::TransfersDisabled);
        }
        if storage::bond_owner(&e, id)? != from {
            return Err(ContractError::Unauthorized);
        }
        storage::unassign(&e, id, &from);
        storage::assign(&e, id, &to);
        events::emit_bond_transferred(&e, id, &from, &to);
        Ok(())
    }

    // ── Fee vault ──────────────────────────────────────────────────────────

    /// Send every withheld native fee to the owner and reset the vault.
    pub fn withdraw_native_fees(e: Env, caller: Address) -> Result<i128, ContractError> {
        access_control::require_owner_or(&e, &caller, ContractError::Unauthorized)?;
        let cfg = storage::load_config(&e)?;

        // CEI: zero the vault before paying.
        let amount = fee_vault::drain(&e)?;
        ledger::pay_native(&e, &cfg.native_asset, &caller, amount);

        events::emit_fees_withdrawn(&e, &caller, amount);
        Ok(amount)
    }

    pub fn fee_vault_balance(e: Env) -> i128 {
        fee_vault::balance(&e)
    }

    // ── Owner setters ──────────────────────────────────────────────────────

    pub fn set_bond_price_ledger(e: Env, caller: Address, price: i128) -> Result<(), ContractError> {
        update_config(&e, &caller, |cfg| {
            require_positive(price)?;
            cfg.price_ledger = price;
            Ok(())
        })?;
        events::emit_bond_price_ledger(&e, price);
        Ok(())
    }

    pub fn set_bond_price_native(e: Env, caller: Address, price: i128) -> Result<(), ContractError> {
        update_config(&e, &caller, |cfg| {
            require_positive(price)?;
            cfg.price_native = price;
            Ok(())
        })?;
        events::emit_bond_price_native(&e, price);
        Ok(())
    }

    /// Interest per interval, in parts-per-million of face value. Applies to
    /// bonds minted afterwards.
    pub fn set_interest_rate(e: Env, caller: Address, rate_ppm: u32) -> Result<(), ContractError> {
        update_config(&e, &caller, |cfg| {
            cfg.interest_rate_ppm = rate_ppm;
            Ok(())
        })?;
        events::emit_config_changed(&e, "interest_rate_ppm", rate_ppm);
        Ok(())
    }

    pub fn set_claim_interval(e: Env, caller: Address, seconds: u64) -> Result<(), ContractError> {
        update_config(&e, &caller, |cfg| {
            if seconds == 0 {
                return Err(ContractError::InvalidConfig);
            }
            cfg.claim_interval = seconds;
            Ok(())
        })?;
        events::emit_config_changed(&e, "claim_interval", seconds);
        Ok(())
    }

    pub fn set_bond_lifetime(e: Env, caller: Address, seconds: u64) -> Result<(), ContractError> {
        update_config(&e, &caller, |cfg| {
            if seconds == 0 {
                return Err(ContractError::InvalidConfig);
            }
            cfg.lifetime = seconds;
            Ok(())
        })?;
        events::emit_config_changed(&e, "lifetime", seconds);
        Ok(())
    }

    /// Native redemption fee as `rate / denominator`.
    pub fn set_native_fee(
        e: Env,
        caller: Address,
        rate: u32,
        denominator: u32,
    ) -> Result<(), ContractError> {
        update_config(&e, &caller, |cfg| {
            if denominator == 0 || rate > denominator {
                return Err(ContractError::InvalidConfig);
            }
            cfg.native_fee_rate = rate;
            cfg.native_fee_denominator = denominator;
            Ok(())
        })?;
        events::emit_config_changed(&e, "native_fee", (rate, denominator));
        Ok(())
    }

    pub fn set_ledger(e: Env, caller: Address, ledger: Address) -> Result<(), ContractError> {
        update_config(&e, &caller, |cfg| {
            cfg.ledger = ledger.clone();
            Ok(())
        })?;
        events::emit_config_changed(&e, "ledger", ledger);
        Ok(())
    }

    pub fn set_native_asset(e: Env, caller: Address, asset: Address) -> Result<(), ContractError> {
        update_config(&e, &caller, |cfg| {
            cfg.native_asset = asset.clone();
            Ok(())
        })?;
        events::emit_config_changed(&e, "native_asset", asset);
        Ok(())
    }

    pub fn set_transferable(e: Env, caller: Address, enabled: bool) -> Result<(), ContractError> {
        update_config(&e, &caller, |cfg| {
            cfg.transferable = enabled;
            Ok(())
        })?;
        events::emit_config_changed(&e, "transferable", enabled);
        Ok(())
    }

    pub fn transfer_ownership(e: Env, caller: Address, new_owner: Address) -> Result<(), ContractError> {
        access_control::require_owner(&e, &caller)?;
        access_control::set_owner(&e, &new_owner);
        events::emit_ownership_transferred(&e, &caller, &new_owner);
        Ok(())
    }

    /// Swap the contract code. Storage keys in `types::DataKey` are the
    /// layout every replacement must keep.
    pub fn upgrade(e: Env, caller: Address, new_wasm_hash: BytesN<32>) -> Result<(), ContractError> {
        access_control::require_owner(&e, &caller)?;
        e.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn owner(e: Env) -> Result<Address, ContractError> {
        access_control::owner(&e)
    }

    pub fn get_config(e: Env) -> Result<RegistryConfig, ContractError> {
        storage::load_config(&e)
    }

    pub fn get_bond(e: Env, id: u64) -> Result<Bond, ContractError> {
        storage::load_bond(&e, id)
    }

    pub fn owner_of(e: Env, id: u64) -> Result<Address, ContractError> {
        storage::bond_owner(&e, id)
    }

    /// Ids held by `owner`, in the order received.
    pub fn bonds_of(e: Env, owner: Address) -> Vec<u64> {
        storage::bonds_of(&e, &owner)
    }

    /// Number of positions held by `owner`.
    pub fn balance_of(e: Env, owner: Address) -> u32 {
        storage::bonds_of(&e, &owner).len()
    }

    pub fn total_bonds(e: Env) -> u64 {
        storage::total_bonds(&e)
    }

    pub fn bond_status(e: Env, id: u64) -> Result<BondStatus, ContractError> {
        let bond = storage::load_bond(&e, id)?;
        Ok(accrual::status(&bond, e.ledger().timestamp()))
    }

    /// Interest a claim right now would pay (0 if not claimable).
    pub fn pending_interest(e: Env, id: u64) -> Result<i128, ContractError> {
        let bond = storage::load_bond(&e, id)?;
        Ok(accrual::pending_interest(&bond, e.ledger().timestamp()))
    }
}
