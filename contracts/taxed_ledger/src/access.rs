//! Owner role for the ledger's admin surface.

use bond_errors::ContractError;
use soroban_sdk::{Address, Env};

use crate::types::DataKey;

pub fn owner(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(ContractError::NotInitialized)
}

/// Requires `caller` to sign and to be the stored owner.
pub fn require_owner(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if owner(e)? != *caller {
        return Err(ContractError::OwnableUnauthorizedAccount);
    }
    Ok(())
}

/// Requires `caller` to sign and to be the configured minter. An unset
/// minter rejects everybody.
pub fn require_minter(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    let minter: Option<Address> = e.storage().instance().get(&DataKey::Minter);
    match minter {
        Some(m) if m == *caller => Ok(()),
        _ => Err(ContractError::UnauthorizedNotBond),
    }
}
