//! Batch claims over a holder's positions.

#![cfg(test)]

use crate::test_helpers::*;
use crate::types::{BatchClaimResult, DEFAULT_LIFETIME, DEFAULT_PRICE_NATIVE};
use soroban_sdk::Env;
use taxed_ledger::{TaxedLedger, TaxedLedgerClient};

const INTERVAL: u64 = 60;

fn interest_per_bond() -> i128 {
    tokens(1) / 100
}

#[test]
fn test_claim_all_interest_pays_every_bond() {
    let e = Env::default();
    let f = setup(&e);
    f.registry.mint_multiple_bonds(&f.alice, &3);

    advance(&e, 2 * INTERVAL);
    let result = f.registry.claim_all_interest(&f.alice);

    assert_eq!(
        result,
        BatchClaimResult {
            claimed: 3,
            skipped: 0,
            ledger_paid: 6 * interest_per_bond(),
            native_paid: 0,
        }
    );
    assert_eq!(
        f.ledger.balance(&f.alice),
        tokens(1_900) + 6 * interest_per_bond()
    );
}

#[test]
fn test_claim_all_interest_skips_ineligible() {
    let e = Env::default();
    let f = setup(&e);
    f.registry.mint_multiple_bonds(&f.alice, &1);
    advance(&e, INTERVAL);
    f.registry.mint_multiple_bonds(&f.alice, &1);

    let result = f.registry.claim_all_interest(&f.alice);
    assert_eq!(result.claimed, 1);
    assert_eq!(result.skipped, 1);
    assert_eq!(result.ledger_paid, interest_per_bond());

    // Nothing eligible right after: all skipped, no error.
    let again = f.registry.claim_all_interest(&f.alice);
    assert_eq!(again.claimed, 0);
    assert_eq!(again.skipped, 2);
}

#[test]
fn test_claim_all_interest_with_no_bonds() {
    let e = Env::default();
    let f = setup(&e);
    assert_eq!(
        f.registry.claim_all_interest(&f.alice),
        BatchClaimResult::default()
    );
}

#[test]
fn test_claim_all_interest_after_expiry_skips_all() {
    let e = Env::default();
    let f = setup(&e);
    f.registry.mint_multiple_bonds(&f.alice, &2);

    advance(&e, DEFAULT_LIFETIME);
    let result = f.registry.claim_all_interest(&f.alice);

    assert_eq!(result.claimed, 0);
    assert_eq!(result.skipped, 2);
    assert_eq!(f.ledger.balance(&f.alice), tokens(2_900));
}

#[test]
fn test_claim_all_interest_only_touches_holder() {
    let e = Env::default();
    let f = setup(&e);
    f.registry.mint_multiple_bonds(&f.alice, &1);
    f.registry.mint_multiple_bonds(&f.bob, &1);

    advance(&e, INTERVAL);
    f.registry.claim_all_interest(&f.alice);

    assert_eq!(f.registry.get_bond(&1).last_claim_at, START + INTERVAL);
    assert_eq!(f.registry.get_bond(&2).last_claim_at, START);
    assert_eq!(f.registry.pending_interest(&2), interest_per_bond());
}

#[test]
fn test_claim_all_principal_before_expiry_skips_all() {
    let e = Env::default();
    let f = setup(&e);
    f.registry.mint_multiple_bonds(&f.alice, &2);

    let result = f.registry.claim_all_principal(&f.alice);
    assert_eq!(result.claimed, 0);
    assert_eq!(result.skipped, 2);
}

#[test]
fn test_claim_all_principal_mixed_currencies() {
    let e = Env::default();
    let f = setup(&e);
    f.registry.mint_multiple_bonds(&f.alice, &2);
    f.registry
        .mint_multiple_bonds_native(&f.alice, &1, &DEFAULT_PRICE_NATIVE);

    advance(&e, DEFAULT_LIFETIME);
    let result = f.registry.claim_all_principal(&f.alice);

    assert_eq!(
        result,
        BatchClaimResult {
            claimed: 3,
            skipped: 0,
            ledger_paid: tokens(2_000),
            native_paid: 285_000,
        }
    );
    assert_eq!(f.ledger.balance(&f.alice), tokens(4_900));
    assert_eq!(f.registry.fee_vault_balance(), 15_000);

    // Already redeemed: skipped, not an error.
    let again = f.registry.claim_all_principal(&f.alice);
    assert_eq!(again.claimed, 0);
    assert_eq!(again.skipped, 3);
}

#[test]
fn test_claim_all_principal_partial_expiry() {
    let e = Env::default();
    let f = setup(&e);
    f.registry.mint_multiple_bonds(&f.alice, &1);
    advance(&e, DEFAULT_LIFETIME / 2);
    f.registry.mint_multiple_bonds(&f.alice, &1);

    advance(&e, DEFAULT_LIFETIME / 2);
    let result = f.registry.claim_all_principal(&f.alice);

    assert_eq!(result.claimed, 1);
    assert_eq!(result.skipped, 1);
    assert!(f.registry.get_bond(&1).principal_claimed);
    assert!(!f.registry.get_bond(&2).principal_claimed);
}

#[test]
fn test_claim_all_principal_after_ledger_switch() {
    let e = Env::default();
    let f = setup(&e);
    f.registry.mint_multiple_bonds(&f.alice, &1);
    f.registry
        .mint_multiple_bonds_native(&f.alice, &1, &DEFAULT_PRICE_NATIVE);

    let next_id = e.register(TaxedLedger, ());
    let next = TaxedLedgerClient::new(&e, &next_id);
    next.initialize(&f.owner);
    f.registry.set_ledger(&f.owner, &next_id);

    advance(&e, DEFAULT_LIFETIME);
    let result = f.registry.claim_all_principal(&f.alice);

    assert_eq!(result.claimed, 2);
    assert_eq!(result.ledger_paid, tokens(1_000));
    assert_eq!(result.native_paid, 285_000);
    // Repaid on the ledger it was funded on.
    assert_eq!(f.ledger.balance(&f.alice), tokens(4_900));
    assert_eq!(next.balance(&f.alice), 0);
}

#[test]
fn test_bonds_minted_after_ledger_switch_use_new_ledger() {
    let e = Env::default();
    let f = setup(&e);
    f.registry.mint_multiple_bonds(&f.alice, &1);

    let next_id = e.register(TaxedLedger, ());
    TaxedLedgerClient::new(&e, &next_id).initialize(&f.owner);
    f.registry.set_ledger(&f.owner, &next_id);

    assert_eq!(f.registry.get_bond(&1).ledger, f.ledger.address);
    assert_eq!(f.registry.get_config().ledger, next_id);
}
