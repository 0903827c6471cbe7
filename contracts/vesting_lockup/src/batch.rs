//! Batch lock operations.
//!
//! Each batch runs inside a single invocation: inputs are validated up front,
//! and any entry that fails mid-way aborts the call, reverting the entries
//! already applied (all-or-nothing).

use crate::errors::ContractError;
use soroban_sdk::{Address, Env, Vec};

/// Create one lock per (recipient, amount) pair with a shared unlock time.
///
/// Fails with `InvalidInput` when the batch is empty or the two vectors
/// differ in length; per-entry failures (`LockAlreadyExists`, non-positive
/// amount) revert the whole batch.
pub fn create_locks(
    e: &Env,
    sponsor: &Address,
    recipients: &Vec<Address>,
    amounts: &Vec<i128>,
    unlock_time: u64,
) -> Result<u32, ContractError> {
    if recipients.is_empty() || recipients.len() != amounts.len() {
        return Err(ContractError::InvalidInput);
    }
    for (recipient, amount) in recipients.iter().zip(amounts.iter()) {
        crate::do_create_lock(e, sponsor, &recipient, amount, unlock_time)?;
    }
    Ok(recipients.len())
}

/// Reschedule every listed lock to one shared unlock time.
pub fn update_lockups(
    e: &Env,
    sponsor: &Address,
    recipients: &Vec<Address>,
    new_unlock_time: u64,
) -> Result<(), ContractError> {
    if recipients.is_empty() {
        return Err(ContractError::InvalidInput);
    }
    for recipient in recipients.iter() {
        crate::do_update_lockup(e, sponsor, &recipient, new_unlock_time)?;
    }
    Ok(())
}

/// Cancel every listed lock, returning each one's shares to the sponsor's
/// withdrawal address.
pub fn cancel_lockups(
    e: &Env,
    sponsor: &Address,
    recipients: &Vec<Address>,
) -> Result<(), ContractError> {
    if recipients.is_empty() {
        return Err(ContractError::InvalidInput);
    }
    for recipient in recipients.iter() {
        crate::do_cancel_lockup(e, sponsor, &recipient)?;
    }
    Ok(())
}
