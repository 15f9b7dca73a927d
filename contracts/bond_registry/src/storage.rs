//! Bond table and ownership index.
//!
//! | Key                     | Tier           |
//! |-------------------------|----------------|
//! | `Config`, `Owner`       | `instance()`   |
//! | `NextBondId`, `FeeVault`| `instance()`   |
//! | `Bond(id)`              | `persistent()` |
//! | `BondOwner(id)`         | `persistent()` |
//! | `OwnerBonds(addr)`      | `persistent()` |

use bond_errors::ContractError;
use soroban_sdk::{Address, Env, Vec};

use crate::types::{Bond, DataKey, RegistryConfig, BUMP_TARGET, BUMP_THRESHOLD};

pub fn load_config(e: &Env) -> Result<RegistryConfig, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

pub fn save_config(e: &Env, cfg: &RegistryConfig) {
    e.storage().instance().set(&DataKey::Config, cfg);
}

/// Reserve the next sequential id (ids start at 1).
pub fn next_bond_id(e: &Env) -> u64 {
    let id: u64 = e
        .storage()
        .instance()
        .get(&DataKey::NextBondId)
        .unwrap_or(1);
    e.storage().instance().set(&DataKey::NextBondId, &(id + 1));
    id
}

/// Number of bonds ever minted.
pub fn total_bonds(e: &Env) -> u64 {
    let next: u64 = e
        .storage()
        .instance()
        .get(&DataKey::NextBondId)
        .unwrap_or(1);
    next - 1
}

pub fn load_bond(e: &Env, id: u64) -> Result<Bond, ContractError> {
    let key = DataKey::Bond(id);
    let storage = e.storage().persistent();
    let bond: Bond = storage.get(&key).ok_or(ContractError::BondNotFound)?;
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    Ok(bond)
}

pub fn save_bond(e: &Env, bond: &Bond) {
    let key = DataKey::Bond(bond.id);
    e.storage().persistent().set(&key, bond);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

pub fn bond_owner(e: &Env, id: u64) -> Result<Address, ContractError> {
    e.storage()
        .persistent()
        .get(&DataKey::BondOwner(id))
        .ok_or(ContractError::BondNotFound)
}

pub fn bonds_of(e: &Env, owner: &Address) -> Vec<u64> {
    let key = DataKey::OwnerBonds(owner.clone());
    let storage = e.storage().persistent();
    match storage.get(&key) {
        Some(ids) => {
            storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
            ids
        }
        None => Vec::new(e),
    }
}

fn save_bonds_of(e: &Env, owner: &Address, ids: &Vec<u64>) {
    let key = DataKey::OwnerBonds(owner.clone());
    e.storage().persistent().set(&key, ids);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

/// Record `owner` as holder of `id` and append it to their index.
pub fn assign(e: &Env, id: u64, owner: &Address) {
    let key = DataKey::BondOwner(id);
    e.storage().persistent().set(&key, owner);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);

    let mut ids = bonds_of(e, owner);
    ids.push_back(id);
    save_bonds_of(e, owner, &ids);
}

/// Drop `id` from `owner`'s index. The caller reassigns it.
pub fn unassign(e: &Env, id: u64, owner: &Address) {
    let mut ids = bonds_of(e, owner);
    if let Some(index) = ids.first_index_of(id) {
        ids.remove(index);
        save_bonds_of(e, owner, &ids);
    }
}

/// Loads `id` and checks that `holder` owns it.
pub fn load_owned(e: &Env, id: u64, holder: &Address) -> Result<Bond, ContractError> {
    if bond_owner(e, id)? != *holder {
        return Err(ContractError::Unauthorized);
    }
    load_bond(e, id)
}
