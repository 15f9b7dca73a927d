use soroban_sdk::{Address, Env, Symbol};

/// Emitted for every balance move between two accounts.
///
/// # Topics
/// * `Symbol` - "transfer"
/// * `Address` - Sender
/// * `Address` - Recipient
///
/// # Data
/// * `i128` - Gross amount debited from the sender
/// * `i128` - Portion routed to the tax account (0 when exempt)
pub fn emit_transfer(e: &Env, from: &Address, to: &Address, amount: i128, tax: i128) {
    let topics = (Symbol::new(e, "transfer"), from.clone(), to.clone());
    e.events().publish(topics, (amount, tax));
}

/// Emitted when an allowance is set.
///
/// # Topics
/// * `Symbol` - "approve"
/// * `Address` - Balance owner
/// * `Address` - Spender
///
/// # Data
/// * `i128` - New allowance
pub fn emit_approve(e: &Env, owner: &Address, spender: &Address, amount: i128) {
    let topics = (Symbol::new(e, "approve"), owner.clone(), spender.clone());
    e.events().publish(topics, amount);
}

/// Emitted when the authorized minter increases supply.
///
/// # Topics
/// * `Symbol` - "mint"
/// * `Address` - Recipient
///
/// # Data
/// * `i128` - Amount minted
pub fn emit_mint(e: &Env, to: &Address, amount: i128) {
    let topics = (Symbol::new(e, "mint"), to.clone());
    e.events().publish(topics, amount);
}

/// Emitted by every owner setter that replaces an address slot
/// (`tax_account_set`, `bond_registry_set`, `airdrop_set`).
pub fn emit_address_set(e: &Env, name: &str, value: &Address) {
    e.events().publish((Symbol::new(e, name),), value.clone());
}

/// Emitted when an explicit exemption is granted or revoked.
///
/// # Topics
/// * `Symbol` - "tax_exempt_set"
/// * `Address` - Account
///
/// # Data
/// * `bool` - Exempt after the change
pub fn emit_tax_exempt_set(e: &Env, account: &Address, exempt: bool) {
    let topics = (Symbol::new(e, "tax_exempt_set"), account.clone());
    e.events().publish(topics, exempt);
}

/// Emitted when the tax fraction changes. Data: `(rate, denominator)`.
pub fn emit_tax_rate_set(e: &Env, rate: u32, denominator: u32) {
    e.events()
        .publish((Symbol::new(e, "tax_rate_set"),), (rate, denominator));
}

/// Emitted when ownership moves. Data: `(previous, new)`.
pub fn emit_ownership_transferred(e: &Env, previous: &Address, new_owner: &Address) {
    e.events().publish(
        (Symbol::new(e, "ownership_transferred"),),
        (previous.clone(), new_owner.clone()),
    );
}
