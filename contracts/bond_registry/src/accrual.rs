//! Accrual engine: pure time and interest arithmetic over a `Bond`.
//!
//! Nothing here touches storage; the contract loads a bond, asks this module
//! what is owed, commits the advanced state and only then pays.

use bond_errors::ContractError;

use crate::math;
use crate::types::{Bond, BondStatus, RATE_DENOMINATOR};

/// Result of a successful interest accrual.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Accrual {
    /// Whole intervals elapsed since `last_claim_at`, times
    /// `interest_per_interval`.
    pub interest: i128,
    /// New `last_claim_at`: advanced by whole intervals only, so a partial
    /// interval keeps counting toward the next claim.
    pub next_claim_at: u64,
}

pub fn status(bond: &Bond, now: u64) -> BondStatus {
    if bond.principal_claimed {
        BondStatus::Redeemed
    } else if now >= bond.expires_at {
        BondStatus::Expired
    } else {
        BondStatus::Active
    }
}

/// Interest owed at `now`.
///
/// # Errors
/// * `BondExpired` once `now >= expires_at`, even if intervals were left
///   unclaimed before expiry.
/// * `ClaimIntervalNotReached` if less than one interval has elapsed.
pub fn accrue(bond: &Bond, now: u64) -> Result<Accrual, ContractError> {
    if now >= bond.expires_at {
        return Err(ContractError::BondExpired);
    }
    let elapsed = now.saturating_sub(bond.last_claim_at);
    if bond.claim_interval == 0 || elapsed < bond.claim_interval {
        return Err(ContractError::ClaimIntervalNotReached);
    }

    let intervals = elapsed / bond.claim_interval;
    let interest = math::mul_i128(intervals as i128, bond.interest_per_interval)?;
    let advanced = math::mul_u64(intervals, bond.claim_interval)?;
    Ok(Accrual {
        interest,
        next_claim_at: math::add_u64(bond.last_claim_at, advanced)?,
    })
}

/// Interest a claim at `now` would pay, or 0 when not claimable.
pub fn pending_interest(bond: &Bond, now: u64) -> i128 {
    accrue(bond, now).map(|a| a.interest).unwrap_or(0)
}

/// Principal may be claimed once, and only after expiry.
pub fn check_principal(bond: &Bond, now: u64) -> Result<(), ContractError> {
    if bond.principal_claimed {
        return Err(ContractError::PrincipalAlreadyClaimed);
    }
    if now < bond.expires_at {
        return Err(ContractError::BondNotExpired);
    }
    Ok(())
}

/// Interest per interval for a bond of the given ledger-denominated face value.
pub fn interest_per_interval(face_value: i128, rate_ppm: u32) -> Result<i128, ContractError> {
    math::fraction(face_value, rate_ppm, RATE_DENOMINATOR)
}

/// Splits a native principal into `(net, fee)`.
pub fn split_native_fee(
    principal: i128,
    fee_rate: u32,
    fee_denominator: u32,
) -> Result<(i128, i128), ContractError> {
    let fee = math::fraction(principal, fee_rate, fee_denominator as i128)?;
    Ok((math::sub_i128(principal, fee)?, fee))
}
