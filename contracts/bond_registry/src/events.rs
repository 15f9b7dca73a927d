use soroban_sdk::{Address, Env, IntoVal, Symbol, Val};

/// Emitted once per bond created.
///
/// # Topics
/// * `Symbol` - "minted"
/// * `u64` - Bond id
///
/// # Data
/// * `Address` - Holder
pub fn emit_minted(e: &Env, id: u64, owner: &Address) {
    let topics = (Symbol::new(e, "minted"), id);
    e.events().publish(topics, owner.clone());
}

/// Emitted when interest is paid on a bond.
///
/// # Topics
/// * `Symbol` - "interest_claimed"
/// * `u64` - Bond id
///
/// # Data
/// * `Address` - Holder
/// * `i128` - Interest minted, in ledger units
pub fn emit_interest_claimed(e: &Env, id: u64, owner: &Address, interest: i128) {
    let topics = (Symbol::new(e, "interest_claimed"), id);
    e.events().publish(topics, (owner.clone(), interest));
}

/// Emitted when a bond's principal is redeemed.
///
/// # Topics
/// * `Symbol` - "principal_claimed"
/// * `u64` - Bond id
///
/// # Data
/// * `Address` - Holder
/// * `i128` - Amount paid to the holder (net of fee for native bonds)
pub fn emit_principal_claimed(e: &Env, id: u64, owner: &Address, paid: i128) {
    let topics = (Symbol::new(e, "principal_claimed"), id);
    e.events().publish(topics, (owner.clone(), paid));
}

/// Emitted when the ledger-funded bond price changes. Data: new price.
pub fn emit_bond_price_ledger(e: &Env, price: i128) {
    e.events()
        .publish((Symbol::new(e, "bond_price_ledger"),), price);
}

/// Emitted when the native-funded bond price changes. Data: new price.
pub fn emit_bond_price_native(e: &Env, price: i128) {
    e.events()
        .publish((Symbol::new(e, "bond_price_native"),), price);
}

/// Emitted by every other configuration setter.
///
/// # Topics
/// * `Symbol` - "config_changed"
/// * `Symbol` - Field name
///
/// # Data
/// * New value
pub fn emit_config_changed<V: IntoVal<Env, Val>>(e: &Env, field: &str, value: V) {
    let topics = (Symbol::new(e, "config_changed"), Symbol::new(e, field));
    e.events().publish(topics, value);
}

/// Emitted when the owner withdraws native fees. Data: `(owner, amount)`.
pub fn emit_fees_withdrawn(e: &Env, owner: &Address, amount: i128) {
    e.events()
        .publish((Symbol::new(e, "fees_withdrawn"),), (owner.clone(), amount));
}

/// Emitted when a position changes hands. Data: `(from, to)`.
pub fn emit_bond_transferred(e: &Env, id: u64, from: &Address, to: &Address) {
    let topics = (Symbol::new(e, "bond_transferred"), id);
    e.events().publish(topics, (from.clone(), to.clone()));
}

/// Emitted when ownership moves. Data: `(previous, new)`.
pub fn emit_ownership_transferred(e: &Env, previous: &Address, new_owner: &Address) {
    e.events().publish(
        (Symbol::new(e, "ownership_transferred"),),
        (previous.clone(), new_owner.clone()),
    );
}
