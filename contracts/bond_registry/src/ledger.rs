//! Settlement rails: the taxed ledger (by interface) and the native asset
//! (standard token interface).

use soroban_sdk::token::TokenClient;
use soroban_sdk::{contractclient, Address, Env};

/// The subset of the taxed ledger the registry calls into.
#[allow(dead_code)]
#[contractclient(name = "LedgerClient")]
pub trait LedgerInterface {
    fn transfer(env: Env, from: Address, to: Address, amount: i128);
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);
    fn mint(env: Env, minter: Address, to: Address, amount: i128);
}

/// Pulls `amount` ledger units from `buyer` into the registry using the
/// allowance the buyer granted. The registry is tax-exempt, so it receives
/// the full amount.
pub fn pull_ledger(e: &Env, ledger: &Address, buyer: &Address, amount: i128) {
    let registry = e.current_contract_address();
    LedgerClient::new(e, ledger).transfer_from(&registry, buyer, &registry, &amount);
}

/// Pays `amount` ledger units out of the registry's holdings.
pub fn pay_ledger(e: &Env, ledger: &Address, to: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let registry = e.current_contract_address();
    LedgerClient::new(e, ledger).transfer(&registry, to, &amount);
}

/// Mints `amount` new ledger units to `to`, authorizing as the registry.
pub fn mint_interest(e: &Env, ledger: &Address, to: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let registry = e.current_contract_address();
    LedgerClient::new(e, ledger).mint(&registry, to, &amount);
}

/// Moves native value from `from` into the registry.
pub fn pull_native(e: &Env, native: &Address, from: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let registry = e.current_contract_address();
    TokenClient::new(e, native).transfer(from, &registry, &amount);
}

/// Sends native value out of the registry.
pub fn pay_native(e: &Env, native: &Address, to: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let registry = e.current_contract_address();
    TokenClient::new(e, native).transfer(&registry, to, &amount);
}
