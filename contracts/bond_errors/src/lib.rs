#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Machine-checkable kind of a failure, for retry/backoff decisions
///         and for the skip rule applied by batch claims.
/// @dev    Switch on this value first, then on the specific `ContractError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup errors (codes 1-99).
    Initialization,
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Malformed arguments or configuration (codes 200-299).
    Validation,
    /// Operation attempted outside its time window (codes 300-399).
    Timing,
    /// Operation conflicts with already-consumed state (codes 400-499).
    StateConflict,
    /// Not enough balance, allowance, value or fees (codes 500-599).
    Resource,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  ContractError
/// @notice Error enum shared by the bond registry and the taxed ledger.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Validation
///   300 - 399 : Timing
///   400 - 499 : StateConflict
///   500 - 599 : Resource
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller is not the contract owner (admin setters).
    /// Contracts: ledger, registry
    OwnableUnauthorizedAccount = 100,

    /// Caller does not own the bond, or is not the owner for fee withdrawal.
    /// Contracts: registry
    Unauthorized = 101,

    /// Caller of `mint` is not the authorized minter (the bond registry).
    /// Contracts: ledger
    UnauthorizedNotBond = 102,

    /// Bond positions are currently non-transferable.
    /// Contracts: registry
    TransfersDisabled = 103,

    // --- Validation (200-299) ---
    /// A mint request asked for zero bonds.
    /// Contracts: registry
    ZeroBondCount = 200,

    /// Amount, principal or price must be strictly positive.
    /// Contracts: ledger, registry
    AmountMustBePositive = 201,

    /// Rate, denominator, interval or lifetime is out of range.
    /// Contracts: ledger, registry
    InvalidConfig = 202,

    /// No bond exists for the given id.
    /// Contracts: registry
    BondNotFound = 203,

    // --- Timing (300-399) ---
    /// Less than one claim interval has elapsed since the last claim.
    /// Contracts: registry
    ClaimIntervalNotReached = 300,

    /// The bond lifetime has elapsed; no more interest can be claimed.
    /// Contracts: registry
    BondExpired = 301,

    /// The bond lifetime has not elapsed; principal cannot be claimed yet.
    /// Contracts: registry
    BondNotExpired = 302,

    // --- StateConflict (400-499) ---
    /// Principal for this bond has already been paid out.
    /// Contracts: registry
    PrincipalAlreadyClaimed = 400,

    // --- Resource (500-599) ---
    /// Sender balance is below the transfer amount.
    /// Contracts: ledger
    InsufficientBalance = 500,

    /// Spender allowance is below the transfer amount.
    /// Contracts: ledger
    InsufficientAllowance = 501,

    /// Native value supplied does not cover `price * count`.
    /// Contracts: registry
    InsufficientValue = 502,

    /// The fee vault is empty.
    /// Contracts: registry
    NoFeesToWithdraw = 503,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    /// Contracts: ledger, registry
    Overflow = 700,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;

    /// @return true when a batch operation should skip the item instead of
    ///         aborting: the bond is simply not eligible right now, or is done.
    fn is_skippable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Timing | ErrorCategory::StateConflict
        )
    }
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }

            ContractError::OwnableUnauthorizedAccount
            | ContractError::Unauthorized
            | ContractError::UnauthorizedNotBond
            | ContractError::TransfersDisabled => ErrorCategory::Authorization,

            ContractError::ZeroBondCount
            | ContractError::AmountMustBePositive
            | ContractError::InvalidConfig
            | ContractError::BondNotFound => ErrorCategory::Validation,

            ContractError::ClaimIntervalNotReached
            | ContractError::BondExpired
            | ContractError::BondNotExpired => ErrorCategory::Timing,

            ContractError::PrincipalAlreadyClaimed => ErrorCategory::StateConflict,

            ContractError::InsufficientBalance
            | ContractError::InsufficientAllowance
            | ContractError::InsufficientValue
            | ContractError::NoFeesToWithdraw => ErrorCategory::Resource,

            ContractError::Overflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract has already been initialized",
            ContractError::OwnableUnauthorizedAccount => "Caller is not the owner",
            ContractError::Unauthorized => "Unauthorized",
            ContractError::UnauthorizedNotBond => "Only the bond registry can mint",
            ContractError::TransfersDisabled => "Bond positions are not transferable",
            ContractError::ZeroBondCount => "Must mint at least one bond",
            ContractError::AmountMustBePositive => "Amount must be strictly positive (> 0)",
            ContractError::InvalidConfig => "Configuration value is out of range",
            ContractError::BondNotFound => "No bond found for the given id",
            ContractError::ClaimIntervalNotReached => "Claim interval has not been reached",
            ContractError::BondExpired => "Bond has expired",
            ContractError::BondNotExpired => "Bond lifetime has not expired",
            ContractError::PrincipalAlreadyClaimed => "Principal already claimed",
            ContractError::InsufficientBalance => "Insufficient balance",
            ContractError::InsufficientAllowance => "Insufficient allowance",
            ContractError::InsufficientValue => "Insufficient native value sent",
            ContractError::NoFeesToWithdraw => "No fees to withdraw",
            ContractError::Overflow => "Integer overflow in checked arithmetic",
        }
    }
}
