//! Taxed Ledger Contract
//!
//! Fungible settlement asset backing the bond registry. Every ordinary
//! transfer withholds a configurable tax for the tax account; transfers to or
//! from an exempt address move the full amount. Supply grows only through
//! `mint`, which a single authorized minter (the bond registry) may call.
//!
//! ## Key design decisions
//!
//! - **Address capability for minting**: `mint` takes the minter address,
//!   requires its auth and compares it with the stored minter.
//! - **Conservation**: transfers debit exactly what they credit (recipient
//!   plus tax account); only `mint` changes `total_supply`.
//! - **Owner-gated configuration**: every setter emits an event.

#![no_std]

mod access;
mod events;
mod tax;
pub mod types;

use bond_errors::ContractError;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};
use types::{
    DataKey, TaxConfig, BUMP_TARGET, BUMP_THRESHOLD, DECIMALS, DEFAULT_TAX_DENOMINATOR,
    DEFAULT_TAX_RATE, INITIAL_SUPPLY, TOKEN_NAME, TOKEN_SYMBOL,
};



// ─── Storage helpers ───────────────────────────────────────────────────────

fn read_balance(e: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    let storage = e.storage().persistent();
    match storage.get::<_, i128>(&key) {
        Some(balance) => {
            storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
            balance
        }
        None => 0,
    }
}

fn write_balance(e: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

fn credit(e: &Env, id: &Address, amount: i128) -> Result<(), ContractError> {
    let balance = read_balance(e, id)
        .checked_add(amount)
        .ok_or(ContractError::Overflow)?;
    write_balance(e, id, balance);
    Ok(())
}

fn debit(e: &Env, id: &Address, amount: i128) -> Result<(), ContractError> {
    let balance = read_balance(e, id);
    if balance < amount {
        return Err(ContractError::InsufficientBalance);
    }
    write_balance(e, id, balance - amount);
    Ok(())
}

fn read_allowance(e: &Env, owner: &Address, spender: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::Allowance(owner.clone(), spender.clone()))
        .unwrap_or(0)
}

fn write_allowance(e: &Env, owner: &Address, spender: &Address, amount: i128) {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

fn total_supply(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

fn tax_config(e: &Env) -> Result<TaxConfig, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Tax)
        .ok_or(ContractError::NotInitialized)
}

fn tax_account(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::TaxAccount)
        .ok_or(ContractError::NotInitialized)
}

fn write_exempt(e: &Env, id: &Address, exempt: bool) {
    let key = DataKey::Exempt(id.clone());
    if exempt {
        e.storage().persistent().set(&key, &true);
        e.storage()
            .persistent()
            .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    } else {
        e.storage().persistent().remove(&key);
    }
}

/// Exempt set: the authorized minter, the airdrop distributor, and any
/// address flagged through `set_tax_exempt` (every registry ever wired as
/// minter is flagged too).
fn is_exempt(e: &Env, id: &Address) -> bool {
    let instance = e.storage().instance();
    if instance.get::<_, Address>(&DataKey::Minter).as_ref() == Some(id) {
        return true;
    }
    if instance.get::<_, Address>(&DataKey::Airdrop).as_ref() == Some(id) {
        return true;
    }
    e.storage()
        .persistent()
        .get(&DataKey::Exempt(id.clone()))
        .unwrap_or(false)
}

/// Moves `amount` from `from`, splitting it between `to` and the tax account
/// unless either side is exempt. Returns the tax withheld.
fn move_balance(e: &Env, from: &Address, to: &Address, amount: i128) -> Result<i128, ContractError> {
    if amount <= 0 {
        return Err(ContractError::AmountMustBePositive);
    }
    debit(e, from, amount)?;

    let tax = if is_exempt(e, from) || is_exempt(e, to) {
        credit(e, to, amount)?;
        0
    } else {
        let (net, tax) = tax::split(amount, &tax_config(e)?)?;
        credit(e, to, net)?;
        if tax > 0 {
            credit(e, &tax_account(e)?, tax)?;
        }
        tax
    };

    events::emit_transfer(e, from, to, amount, tax);
    Ok(tax)
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct TaxedLedger;

#[contractimpl]
impl TaxedLedger {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// One-time initialization. `owner` becomes the tax account and receives
    /// the initial supply.
    pub fn initialize(e: Env, owner: Address) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Owner) {
            return Err(ContractError::AlreadyInitialized);
        }
        owner.require_auth();

        let instance = e.storage().instance();
        instance.set(&DataKey::Owner, &owner);
        instance.set(&DataKey::TaxAccount, &owner);
        instance.set(
            &DataKey::Tax,
            &TaxConfig {
                rate: DEFAULT_TAX_RATE,
                denominator: DEFAULT_TAX_DENOMINATOR,
            },
        );
        instance.set(&DataKey::TotalSupply, &INITIAL_SUPPLY);
        write_balance(&e, &owner, INITIAL_SUPPLY);

        events::emit_mint(&e, &owner, INITIAL_SUPPLY);
        Ok(())
    }

    // ── Metadata & queries ─────────────────────────────────────────────────

    pub fn name(e: Env) -> String {
        String::from_str(&e, TOKEN_NAME)
    }

    pub fn symbol(e: Env) -> String {
        String::from_str(&e, TOKEN_SYMBOL)
    }

    pub fn decimals(_e: Env) -> u32 {
        DECIMALS
    }

    pub fn total_supply(e: Env) -> i128 {
        total_supply(&e)
    }

    pub fn balance(e: Env, id: Address) -> i128 {
        read_balance(&e, &id)
    }

    pub fn allowance(e: Env, owner: Address, spender: Address) -> i128 {
        read_allowance(&e, &owner, &spender)
    }

    pub fn owner(e: Env) -> Result<Address, ContractError> {
        access::owner(&e)
    }

    pub fn tax_account(e: Env) -> Result<Address, ContractError> {
        tax_account(&e)
    }

    pub fn tax_config(e: Env) -> Result<TaxConfig, ContractError> {
        tax_config(&e)
    }

    /// The authorized minter, if one has been set.
    pub fn bond_registry(e: Env) -> Option<Address> {
        e.storage().instance().get(&DataKey::Minter)
    }

    pub fn airdrop_address(e: Env) -> Option<Address> {
        e.storage().instance().get(&DataKey::Airdrop)
    }

    pub fn is_tax_exempt(e: Env, id: Address) -> bool {
        is_exempt(&e, &id)
    }

    // ── Transfers ──────────────────────────────────────────────────────────

    /// Transfer `amount` from `from` to `to`, withholding tax unless either
    /// side is exempt.
    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) -> Result<(), ContractError> {
        from.require_auth();
        move_balance(&e, &from, &to, amount)?;
        Ok(())
    }

    /// Set the amount `spender` may move out of `owner`'s balance.
    pub fn approve(e: Env, owner: Address, spender: Address, amount: i128) -> Result<(), ContractError> {
        owner.require_auth();
        if amount < 0 {
            return Err(ContractError::AmountMustBePositive);
        }
        write_allowance(&e, &owner, &spender, amount);
        events::emit_approve(&e, &owner, &spender, amount);
        Ok(())
    }

    /// Move `amount` out of `from` on behalf of `spender`, consuming allowance.
    pub fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        spender.require_auth();
        let allowance = read_allowance(&e, &from, &spender);
        if allowance < amount {
            return Err(ContractError::InsufficientAllowance);
        }
        move_balance(&e, &from, &to, amount)?;
        write_allowance(&e, &from, &spender, allowance - amount);
        Ok(())
    }

    // ── Minting ────────────────────────────────────────────────────────────

    /// Increase `to`'s balance and the total supply. Only the authorized
    /// minter may call this.
    pub fn mint(e: Env, minter: Address, to: Address, amount: i128) -> Result<(), ContractError> {
        access::require_minter(&e, &minter)?;
        if amount <= 0 {
            return Err(ContractError::AmountMustBePositive);
        }
        let supply = total_supply(&e)
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;
        credit(&e, &to, amount)?;
        e.storage().instance().set(&DataKey::TotalSupply, &supply);
        events::emit_mint(&e, &to, amount);
        Ok(())
    }

    // ── Owner setters ──────────────────────────────────────────────────────

    pub fn set_tax_account(e: Env, caller: Address, account: Address) -> Result<(), ContractError> {
        access::require_owner(&e, &caller)?;
        e.storage().instance().set(&DataKey::TaxAccount, &account);
        events::emit_address_set(&e, "tax_account_set", &account);
        Ok(())
    }

    /// Set the authorized minter. The registry is also flagged exempt, so a
    /// previous registry still repays outstanding principal untaxed after a
    /// rotation. Revoke with `set_tax_exempt` once it holds nothing.
    pub fn set_bond_registry(e: Env, caller: Address, registry: Address) -> Result<(), ContractError> {
        access::require_owner(&e, &caller)?;
        e.storage().instance().set(&DataKey::Minter, &registry);
        write_exempt(&e, &registry, true);
        events::emit_address_set(&e, "bond_registry_set", &registry);
        Ok(())
    }

    pub fn set_airdrop_address(e: Env, caller: Address, airdrop: Address) -> Result<(), ContractError> {
        access::require_owner(&e, &caller)?;
        e.storage().instance().set(&DataKey::Airdrop, &airdrop);
        events::emit_address_set(&e, "airdrop_set", &airdrop);
        Ok(())
    }

    pub fn set_tax_exempt(
        e: Env,
        caller: Address,
        account: Address,
        exempt: bool,
    ) -> Result<(), ContractError> {
        access::require_owner(&e, &caller)?;
        write_exempt(&e, &account, exempt);
        events::emit_tax_exempt_set(&e, &account, exempt);
        Ok(())
    }

    pub fn set_tax_rate(
        e: Env,
        caller: Address,
        rate: u32,
        denominator: u32,
    ) -> Result<(), ContractError> {
        access::require_owner(&e, &caller)?;
        let cfg = TaxConfig { rate, denominator };
        tax::validate(&cfg)?;
        e.storage().instance().set(&DataKey::Tax, &cfg);
        events::emit_tax_rate_set(&e, rate, denominator);
        Ok(())
    }

    pub fn transfer_ownership(e: Env, caller: Address, new_owner: Address) -> Result<(), ContractError> {
        access::require_owner(&e, &caller)?;
        e.storage().instance().set(&DataKey::Owner, &new_owner);
        events::emit_ownership_transferred(&e, &caller, &new_owner);
        Ok(())
    }

    /// Swap the contract code. Storage keys in `types::DataKey` are the
    /// layout every replacement must keep.
    pub fn upgrade(e: Env, caller: Address, new_wasm_hash: BytesN<32>) -> Result<(), ContractError> {
        access::require_owner(&e, &caller)?;
        e.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }
}
