//! Event emission helpers.
//!
//! Events are fire-and-forget; they never affect control flow. Like storage
//! writes, events published by a failed invocation are discarded.

use soroban_sdk::{Address, Env, Symbol};

/// Emit an event when a sponsor's ledger is created.
pub fn emit_ledger_initialized(e: &Env, sponsor: &Address, withdrawal_address: &Address) {
    e.events().publish(
        (Symbol::new(e, "ledger_initialized"), sponsor.clone()),
        withdrawal_address.clone(),
    );
}

/// Emit an event when a sponsor swaps their withdrawal address.
pub fn emit_withdrawal_updated(e: &Env, sponsor: &Address, old: &Address, new: &Address) {
    e.events().publish(
        (Symbol::new(e, "withdrawal_updated"), sponsor.clone()),
        (old.clone(), new.clone()),
    );
}

/// Emit an event when a new lock is created.
pub fn emit_lock_created(
    e: &Env,
    sponsor: &Address,
    recipient: &Address,
    staked_amount: i128,
    principal: i128,
    unlock_time: u64,
) {
    e.events().publish(
        (Symbol::new(e, "lock_created"), sponsor.clone()),
        (recipient.clone(), staked_amount, principal, unlock_time),
    );
}

/// Emit an event when accrued rewards are paid out of a lock.
pub fn emit_rewards_claimed(e: &Env, recipient: &Address, base_amount: i128, staked_amount: i128) {
    e.events().publish(
        (Symbol::new(e, "rewards_claimed"), recipient.clone()),
        (base_amount, staked_amount),
    );
}

/// Emit an event when a lock's principal is claimed and the lock removed.
pub fn emit_lock_claimed(
    e: &Env,
    recipient: &Address,
    base_amount: i128,
    staked_amount: i128,
    claimed_at: u64,
) {
    e.events().publish(
        (Symbol::new(e, "lock_claimed"), recipient.clone()),
        (base_amount, staked_amount, claimed_at),
    );
}

/// Emit an event when a lock's unlock time is rescheduled.
pub fn emit_lockup_updated(e: &Env, recipient: &Address, old_unlock: u64, new_unlock: u64) {
    e.events().publish(
        (Symbol::new(e, "lockup_updated"), recipient.clone()),
        (old_unlock, new_unlock),
    );
}

/// Emit an event when a lock is cancelled and returned to the sponsor's
/// withdrawal address.
pub fn emit_lock_cancelled(e: &Env, recipient: &Address, base_amount: i128, staked_amount: i128) {
    e.events().publish(
        (Symbol::new(e, "lock_cancelled"), recipient.clone()),
        (base_amount, staked_amount),
    );
}
