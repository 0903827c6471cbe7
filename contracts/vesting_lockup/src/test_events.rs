//! Event emission tests.

#![cfg(test)]

use crate::test_helpers::*;
use soroban_sdk::testutils::{Address as _, Events, Ledger};
use soroban_sdk::{Address, Env, FromVal, Symbol, Val, Vec};

/// Last event published by the contract itself (token transfers and the mock
/// pool publish their own events, which are filtered out here).
fn last_contract_event(e: &Env, contract_id: &Address) -> (Address, Vec<Val>, Val) {
    e.events()
        .all()
        .into_iter()
        .rev()
        .find(|ev| ev.0 == *contract_id)
        .unwrap()
}

#[test]
fn test_lifecycle_event_emissions() {
    let e = Env::default();
    e.ledger().with_mut(|li| li.timestamp = 1_000);
    let ctx = setup(&e);

    // --- 1. Lock creation ---
    let unlock = 1_000 + ONE_WEEK;
    ctx.client
        .create_lock(&ctx.sponsor, &ctx.recipient, &1_000_i128, &unlock);

    let ev = last_contract_event(&e, &ctx.contract_id);
    assert_eq!(
        Symbol::from_val(&e, &ev.1.get(0).unwrap()),
        Symbol::new(&e, "lock_created")
    );
    assert_eq!(Address::from_val(&e, &ev.1.get(1).unwrap()), ctx.sponsor);
    let data = <(Address, i128, i128, u64)>::from_val(&e, &ev.2);
    assert_eq!(data, (ctx.recipient.clone(), 1_000, 1_000, unlock));

    // --- 2. Rewards claim ---
    set_price(&e, &ctx.pool, 12_500_000);
    ctx.client.claim_rewards(&ctx.recipient, &ctx.sponsor);

    let ev = last_contract_event(&e, &ctx.contract_id);
    assert_eq!(
        Symbol::from_val(&e, &ev.1.get(0).unwrap()),
        Symbol::new(&e, "rewards_claimed")
    );
    assert_eq!(Address::from_val(&e, &ev.1.get(1).unwrap()), ctx.recipient);
    assert_eq!(<(i128, i128)>::from_val(&e, &ev.2), (250, 200));

    // --- 3. Lockup reschedule ---
    ctx.client
        .update_lockup(&ctx.sponsor, &ctx.recipient, &(1_000 + ONE_DAY));

    let ev = last_contract_event(&e, &ctx.contract_id);
    assert_eq!(
        Symbol::from_val(&e, &ev.1.get(0).unwrap()),
        Symbol::new(&e, "lockup_updated")
    );
    assert_eq!(<(u64, u64)>::from_val(&e, &ev.2), (unlock, 1_000 + ONE_DAY));

    // --- 4. Cancellation ---
    ctx.client.cancel_lockup(&ctx.sponsor, &ctx.recipient);

    let ev = last_contract_event(&e, &ctx.contract_id);
    assert_eq!(
        Symbol::from_val(&e, &ev.1.get(0).unwrap()),
        Symbol::new(&e, "lock_cancelled")
    );
    assert_eq!(Address::from_val(&e, &ev.1.get(1).unwrap()), ctx.recipient);
    assert_eq!(<(i128, i128)>::from_val(&e, &ev.2), (1_000, 800));
}

#[test]
fn test_principal_claim_event() {
    let e = Env::default();
    e.ledger().with_mut(|li| li.timestamp = 1_000);
    let ctx = setup(&e);
    ctx.client
        .create_lock(&ctx.sponsor, &ctx.recipient, &1_000_i128, &(1_000 + ONE_DAY));

    e.ledger().with_mut(|li| li.timestamp = 1_000 + ONE_DAY);
    ctx.client.claim(&ctx.recipient, &ctx.sponsor);

    let ev = last_contract_event(&e, &ctx.contract_id);
    assert_eq!(
        Symbol::from_val(&e, &ev.1.get(0).unwrap()),
        Symbol::new(&e, "lock_claimed")
    );
    assert_eq!(Address::from_val(&e, &ev.1.get(1).unwrap()), ctx.recipient);
    let data = <(i128, i128, u64)>::from_val(&e, &ev.2);
    assert_eq!(data, (1_000, 1_000, 1_000 + ONE_DAY));
}

#[test]
fn test_withdrawal_address_update_event() {
    let e = Env::default();
    let ctx = setup(&e);
    let new_addr = Address::generate(&e);
    ctx.client.update_withdrawal_address(&ctx.sponsor, &new_addr);

    let ev = last_contract_event(&e, &ctx.contract_id);
    assert_eq!(
        Symbol::from_val(&e, &ev.1.get(0).unwrap()),
        Symbol::new(&e, "withdrawal_updated")
    );
    assert_eq!(Address::from_val(&e, &ev.1.get(1).unwrap()), ctx.sponsor);
    let data = <(Address, Address)>::from_val(&e, &ev.2);
    assert_eq!(data, (ctx.withdrawal.clone(), new_addr));
}

#[test]
fn test_zero_reward_claim_emits_nothing() {
    let e = Env::default();
    let ctx = setup(&e);
    ctx.client
        .create_lock(&ctx.sponsor, &ctx.recipient, &1_000_i128, &ONE_WEEK);

    // No yield accrued: the claim is a no-op and publishes no event.
    ctx.client.claim_rewards(&ctx.recipient, &ctx.sponsor);
    let claimed = Symbol::new(&e, "rewards_claimed");
    let any_claim_event = e
        .events()
        .all()
        .into_iter()
        .filter(|ev| ev.0 == ctx.contract_id)
        .any(|ev| Symbol::from_val(&e, &ev.1.get(0).unwrap()) == claimed);
    assert!(!any_claim_event);
}
