//! Owner role for the registry's admin surface.
//!
//! Setters reject strangers with `OwnableUnauthorizedAccount`; fee
//! withdrawal rejects them with `Unauthorized`.

use bond_errors::ContractError;
use soroban_sdk::{Address, Env};

use crate::types::DataKey;

pub fn owner(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&DataKey::Owner, owner);
}

/// Requires `caller` to sign and be the owner; otherwise `denied`.
pub fn require_owner_or(
    e: &Env,
    caller: &Address,
    denied: ContractError,
) -> Result<(), ContractError> {
    caller.require_auth();
    if owner(e)? != *caller {
        return Err(denied);
    }
    Ok(())
}

pub fn require_owner(e: &Env, caller: &Address) -> Result<(), ContractError> {
    require_owner_or(e, caller, ContractError::OwnableUnauthorizedAccount)
}
