//! Overflow-safe arithmetic helpers for financial calculations.
//!
//! Every helper maps overflow (or division by zero) to
//! `ContractError::Overflow` so callers can propagate with `?`.

use bond_errors::ContractError;

#[inline]
pub fn add_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

#[inline]
pub fn sub_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_sub(b).ok_or(ContractError::Overflow)
}

#[inline]
pub fn mul_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

#[inline]
pub fn add_u64(a: u64, b: u64) -> Result<u64, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

#[inline]
pub fn mul_u64(a: u64, b: u64) -> Result<u64, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

/// `amount * rate / denominator`, truncated toward zero.
#[inline]
pub fn fraction(amount: i128, rate: u32, denominator: i128) -> Result<i128, ContractError> {
    let numerator = mul_i128(amount, rate as i128)?;
    numerator
        .checked_div(denominator)
        .ok_or(ContractError::Overflow)
}
