//! Owner configuration, fee vault withdrawal and position transfers.

#![cfg(test)]

use crate::test_helpers::*;
use crate::types::{DEFAULT_LIFETIME, DEFAULT_PRICE_NATIVE};
use bond_errors::{ContractError, ErrorExt};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, BytesN, Env, FromVal, Symbol};

// ═══════════════════════════════════════════════════════════════════
// 1. Initialization & config
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_default_config() {
    let e = Env::default();
    let f = setup(&e);
    let cfg = f.registry.get_config();

    assert_eq!(cfg.ledger, f.ledger.address);
    assert_eq!(cfg.native_asset, f.native.address);
    assert_eq!(cfg.price_ledger, tokens(1_000));
    assert_eq!(cfg.price_native, DEFAULT_PRICE_NATIVE);
    assert_eq!(cfg.claim_interval, 60);
    assert_eq!(cfg.lifetime, DEFAULT_LIFETIME);
    assert_eq!(cfg.interest_rate_ppm, 10);
    assert_eq!((cfg.native_fee_rate, cfg.native_fee_denominator), (50, 1_000));
    assert!(!cfg.transferable);
    assert_eq!(f.registry.owner(), f.owner);
}

#[test]
fn test_initialize_twice_fails() {
    let e = Env::default();
    let f = setup(&e);
    assert_eq!(
        f.registry
            .try_initialize(&f.owner, &f.ledger.address, &f.native.address),
        Err(Ok(ContractError::AlreadyInitialized))
    );
}

#[test]
fn test_set_prices() {
    let e = Env::default();
    let f = setup(&e);
    f.registry.set_bond_price_ledger(&f.owner, &tokens(2_000));
    f.registry.set_bond_price_native(&f.owner, &500_000);

    let cfg = f.registry.get_config();
    assert_eq!(cfg.price_ledger, tokens(2_000));
    assert_eq!(cfg.price_native, 500_000);
}

#[test]
fn test_set_price_rejects_zero() {
    let e = Env::default();
    let f = setup(&e);
    assert_eq!(
        f.registry.try_set_bond_price_ledger(&f.owner, &0),
        Err(Ok(ContractError::AmountMustBePositive))
    );
    assert_eq!(
        f.registry.try_set_bond_price_native(&f.owner, &-5),
        Err(Ok(ContractError::AmountMustBePositive))
    );
}

#[test]
fn test_set_price_emits_event() {
    let e = Env::default();
    let f = setup(&e);
    f.registry.set_bond_price_native(&f.owner, &400_000);

    let event = all_events(&e).last().unwrap();
    assert_eq!(event.0, f.registry.address);
    assert_eq!(
        Symbol::from_val(&e, &event.1.get(0).unwrap()),
        Symbol::new(&e, "bond_price_native")
    );
    assert_eq!(i128::from_val(&e, &event.2), 400_000);
}

#[test]
fn test_setters_reject_non_owner() {
    let e = Env::default();
    let f = setup(&e);
    let denied = Err(Ok(ContractError::OwnableUnauthorizedAccount));

    assert_eq!(f.registry.try_set_bond_price_ledger(&f.alice, &1), denied);
    assert_eq!(f.registry.try_set_bond_price_native(&f.alice, &1), denied);
    assert_eq!(f.registry.try_set_interest_rate(&f.alice, &1), denied);
    assert_eq!(f.registry.try_set_claim_interval(&f.alice, &1), denied);
    assert_eq!(f.registry.try_set_bond_lifetime(&f.alice, &1), denied);
    assert_eq!(f.registry.try_set_native_fee(&f.alice, &1, &10), denied);
    assert_eq!(f.registry.try_set_ledger(&f.alice, &f.alice), denied);
    assert_eq!(f.registry.try_set_native_asset(&f.alice, &f.alice), denied);
    assert_eq!(f.registry.try_set_transferable(&f.alice, &true), denied);
    assert_eq!(f.registry.try_transfer_ownership(&f.alice, &f.alice), denied);
    assert_eq!(
        f.registry
            .try_upgrade(&f.alice, &BytesN::from_array(&e, &[0u8; 32])),
        denied
    );
}

#[test]
fn test_timing_setters_validate() {
    let e = Env::default();
    let f = setup(&e);
    assert_eq!(
        f.registry.try_set_claim_interval(&f.owner, &0),
        Err(Ok(ContractError::InvalidConfig))
    );
    assert_eq!(
        f.registry.try_set_bond_lifetime(&f.owner, &0),
        Err(Ok(ContractError::InvalidConfig))
    );

    f.registry.set_claim_interval(&f.owner, &120);
    f.registry.set_bond_lifetime(&f.owner, &86_400);
    let cfg = f.registry.get_config();
    assert_eq!(cfg.claim_interval, 120);
    assert_eq!(cfg.lifetime, 86_400);
}

#[test]
fn test_set_native_fee() {
    let e = Env::default();
    let f = setup(&e);
    assert_eq!(
        f.registry.try_set_native_fee(&f.owner, &1, &0),
        Err(Ok(ContractError::InvalidConfig))
    );
    assert_eq!(
        f.registry.try_set_native_fee(&f.owner, &11, &10),
        Err(Ok(ContractError::InvalidConfig))
    );

    f.registry.set_native_fee(&f.owner, &1, &10);
    f.registry
        .mint_multiple_bonds_native(&f.alice, &1, &DEFAULT_PRICE_NATIVE);
    advance(&e, DEFAULT_LIFETIME);

    assert_eq!(f.registry.claim_principal(&f.alice, &1), 270_000);
    assert_eq!(f.registry.fee_vault_balance(), 30_000);
}

#[test]
fn test_config_changed_event() {
    let e = Env::default();
    let f = setup(&e);
    f.registry.set_claim_interval(&f.owner, &300);

    let event = all_events(&e).last().unwrap();
    assert_eq!(
        Symbol::from_val(&e, &event.1.get(0).unwrap()),
        Symbol::new(&e, "config_changed")
    );
    assert_eq!(
        Symbol::from_val(&e, &event.1.get(1).unwrap()),
        Symbol::new(&e, "claim_interval")
    );
    assert_eq!(u64::from_val(&e, &event.2), 300);
}

#[test]
fn test_transfer_ownership() {
    let e = Env::default();
    let f = setup(&e);
    let new_owner = Address::generate(&e);

    f.registry.transfer_ownership(&f.owner, &new_owner);

    assert_eq!(f.registry.owner(), new_owner);
    assert_eq!(
        f.registry.try_set_bond_price_ledger(&f.owner, &1),
        Err(Ok(ContractError::OwnableUnauthorizedAccount))
    );
    f.registry.set_bond_price_ledger(&new_owner, &1);
}

// ═══════════════════════════════════════════════════════════════════
// 2. Fee vault
// ═══════════════════════════════════════════════════════════════════

fn accrue_fees(e: &Env, f: &Fixture<'_>) {
    f.registry
        .mint_multiple_bonds_native(&f.alice, &2, &(2 * DEFAULT_PRICE_NATIVE));
    advance(e, DEFAULT_LIFETIME);
    f.registry.claim_all_principal(&f.alice);
}

#[test]
fn test_withdraw_native_fees() {
    let e = Env::default();
    let f = setup(&e);
    accrue_fees(&e, &f);
    assert_eq!(f.registry.fee_vault_balance(), 30_000);

    let withdrawn = f.registry.withdraw_native_fees(&f.owner);

    assert_eq!(withdrawn, 30_000);
    assert_eq!(f.native.balance(&f.owner), 30_000);
    assert_eq!(f.registry.fee_vault_balance(), 0);
    assert_eq!(f.native.balance(&f.registry.address), 0);
}

#[test]
fn test_withdraw_twice_reports_no_fees() {
    let e = Env::default();
    let f = setup(&e);
    accrue_fees(&e, &f);
    f.registry.withdraw_native_fees(&f.owner);

    let err = f.registry.try_withdraw_native_fees(&f.owner);
    assert_eq!(err, Err(Ok(ContractError::NoFeesToWithdraw)));
    assert_eq!(
        ContractError::NoFeesToWithdraw.description(),
        "No fees to withdraw"
    );
}

#[test]
fn test_withdraw_empty_vault() {
    let e = Env::default();
    let f = setup(&e);
    assert_eq!(
        f.registry.try_withdraw_native_fees(&f.owner),
        Err(Ok(ContractError::NoFeesToWithdraw))
    );
}

#[test]
fn test_withdraw_by_non_owner() {
    let e = Env::default();
    let f = setup(&e);
    accrue_fees(&e, &f);

    assert_eq!(
        f.registry.try_withdraw_native_fees(&f.alice),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(f.registry.fee_vault_balance(), 30_000);
}

#[test]
fn test_fees_withdrawn_event() {
    let e = Env::default();
    let f = setup(&e);
    accrue_fees(&e, &f);

    f.registry.withdraw_native_fees(&f.owner);

    let event = all_events(&e)
        .into_iter()
        .rev()
        .find(|ev| ev.0 == f.registry.address)
        .unwrap();
    assert_eq!(
        Symbol::from_val(&e, &event.1.get(0).unwrap()),
        Symbol::new(&e, "fees_withdrawn")
    );
    assert_eq!(
        <(Address, i128)>::from_val(&e, &event.2),
        (f.owner.clone(), 30_000)
    );
}

// ═══════════════════════════════════════════════════════════════════
// 3. Position transfers
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_transfer_bond_disabled_by_default() {
    let e = Env::default();
    let f = setup(&e);
    f.registry.mint_multiple_bonds(&f.alice, &1);

    assert_eq!(
        f.registry.try_transfer_bond(&f.alice, &f.bob, &1),
        Err(Ok(ContractError::TransfersDisabled))
    );
}

#[test]
fn test_transfer_bond_moves_position() {
    let e = Env::default();
    let f = setup(&e);
    f.registry.mint_multiple_bonds(&f.alice, &3);
    f.registry.set_transferable(&f.owner, &true);

    f.registry.transfer_bond(&f.alice, &f.bob, &2);

    assert_eq!(f.registry.owner_of(&2), f.bob);
    assert_eq!(f.registry.bonds_of(&f.alice), vec![&e, 1_u64, 3]);
    assert_eq!(f.registry.bonds_of(&f.bob), vec![&e, 2_u64]);

    // Claim rights follow the position.
    advance(&e, 60);
    assert_eq!(
        f.registry.try_claim_interest(&f.alice, &2),
        Err(Ok(ContractError::Unauthorized))
    );
    f.registry.claim_interest(&f.bob, &2);
}

#[test]
fn test_transfer_bond_by_non_holder() {
    let e = Env::default();
    let f = setup(&e);
    f.registry.mint_multiple_bonds(&f.alice, &1);
    f.registry.set_transferable(&f.owner, &true);

    assert_eq!(
        f.registry.try_transfer_bond(&f.bob, &f.bob, &1),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(
        f.registry.try_transfer_bond(&f.alice, &f.bob, &9),
        Err(Ok(ContractError::BondNotFound))
    );
}
