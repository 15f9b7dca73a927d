//! Transfer-tax arithmetic.
//!
//! `tax = amount * rate / denominator`, truncated toward zero. The truncated
//! fraction is credited to nobody: the recipient gets `amount - tax` and the
//! tax account gets `tax`, which together always equal `amount`.

use bond_errors::ContractError;

use crate::types::TaxConfig;

/// Returns `(net, tax)` for a taxed transfer of `amount`.
pub fn split(amount: i128, cfg: &TaxConfig) -> Result<(i128, i128), ContractError> {
    if cfg.denominator == 0 {
        return Err(ContractError::InvalidConfig);
    }
    let tax = amount
        .checked_mul(cfg.rate as i128)
        .ok_or(ContractError::Overflow)?
        / cfg.denominator as i128;
    let net = amount.checked_sub(tax).ok_or(ContractError::Overflow)?;
    Ok((net, tax))
}

/// A tax fraction is valid when the denominator is non-zero and the rate
/// does not exceed 100%.
pub fn validate(cfg: &TaxConfig) -> Result<(), ContractError> {
    if cfg.denominator == 0 || cfg.rate > cfg.denominator {
        return Err(ContractError::InvalidConfig);
    }
    Ok(())
}
