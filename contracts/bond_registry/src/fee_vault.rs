//! Native-currency fee accumulator.
//!
//! Credited only by native principal redemptions, drained only by the owner.

use bond_errors::ContractError;
use soroban_sdk::Env;

use crate::math;
use crate::types::DataKey;

pub fn balance(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::FeeVault)
        .unwrap_or(0)
}

pub fn credit(e: &Env, fee: i128) -> Result<(), ContractError> {
    if fee == 0 {
        return Ok(());
    }
    let total = math::add_i128(balance(e), fee)?;
    e.storage().instance().set(&DataKey::FeeVault, &total);
    Ok(())
}

/// Empties the vault and returns what it held. The caller pays it out after
/// this returns.
pub fn drain(e: &Env) -> Result<i128, ContractError> {
    let held = balance(e);
    if held == 0 {
        return Err(ContractError::NoFeesToWithdraw);
    }
    e.storage().instance().set(&DataKey::FeeVault, &0_i128);
    Ok(held)
}
