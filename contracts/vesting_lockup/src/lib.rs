//! Vesting Lockup Ledger Contract
//!
//! A sponsor deposits the base asset on behalf of a recipient; the deposit is
//! staked through an external pool into a yield-bearing staked asset. The
//! recipient may withdraw accrued yield at any time but may only withdraw the
//! principal after a sponsor-set unlock time. Cancelling a lock returns the
//! full remaining shares to the sponsor's withdrawal address.
//!
//! ## Key design decisions
//!
//! - **One ledger per sponsor, one lock per recipient**: ledgers are keyed by
//!   sponsor address, locks by recipient address inside the ledger.
//! - **Explicit lock count**: `active_count` is kept in lockstep with the lock
//!   map and gates withdrawal-address changes.
//! - **Principal as accrual floor**: rewards are paid as the excess of the
//!   shares' current base value over the creation-time principal; the floor
//!   never moves.
//! - **Fresh price per operation**: every conversion quotes the pool's price
//!   at call time; nothing is cached across invocations.
//! - **Invocation-atomic mutations**: a failed call leaves no partial state;
//!   storage writes, transfers, and events of a failed invocation are all
//!   discarded by the host.

#![no_std]

mod batch;
pub mod conversion;
mod errors;
mod events;
mod staking;
pub mod types;

use conversion::{base_to_staked, staked_to_base};
pub use errors::ContractError;
pub use staking::{StakingPool, StakingPoolClient};
use types::{DataKey, Lock, LockLedger};

use soroban_sdk::{contract, contractimpl, token::TokenClient, Address, Env, Map, Vec};






#[cfg(test)]
mod test_events;

// ─── Storage helpers ───────────────────────────────────────────────────────

fn staking_pool(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::StakingPool)
        .ok_or(ContractError::NotConfigured)
}

fn staked_token(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::StakedToken)
        .ok_or(ContractError::NotConfigured)
}

fn load_ledger(e: &Env, sponsor: &Address) -> Result<LockLedger, ContractError> {
    e.storage()
        .persistent()
        .get(&DataKey::Ledger(sponsor.clone()))
        .ok_or(ContractError::NotInitialized)
}

fn store_ledger(e: &Env, sponsor: &Address, ledger: &LockLedger) {
    e.storage()
        .persistent()
        .set(&DataKey::Ledger(sponsor.clone()), ledger);
}

/// Quote the pool's current share price.
fn current_price(e: &Env) -> Result<i128, ContractError> {
    let pool = staking_pool(e)?;
    Ok(StakingPoolClient::new(e, &pool).price())
}

// ─── Shared operation bodies (also driven by the batch module) ─────────────

fn insert_lock(
    e: &Env,
    ledger: &mut LockLedger,
    recipient: &Address,
    staked_amount: i128,
    unlock_time: u64,
) -> Result<Lock, ContractError> {
    let price = current_price(e)?;
    let principal = staked_to_base(staked_amount, price)?;
    let lock = Lock {
        staked_amount,
        principal,
        unlock_time,
    };
    ledger.locks.set(recipient.clone(), lock.clone());
    ledger.active_count = ledger
        .active_count
        .checked_add(1)
        .ok_or(ContractError::Overflow)?;
    Ok(lock)
}

pub(crate) fn do_create_lock(
    e: &Env,
    sponsor: &Address,
    recipient: &Address,
    amount: i128,
    unlock_time: u64,
) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidInput);
    }
    let mut ledger = load_ledger(e, sponsor)?;
    if ledger.locks.contains_key(recipient.clone()) {
        return Err(ContractError::LockAlreadyExists);
    }

    // Debit the sponsor and stake through the pool; the pool credits this
    // contract with the resulting shares.
    let pool = staking_pool(e)?;
    let staked_amount = StakingPoolClient::new(e, &pool).deposit_and_stake(
        sponsor,
        &e.current_contract_address(),
        &amount,
    );

    let lock = insert_lock(e, &mut ledger, recipient, staked_amount, unlock_time)?;
    store_ledger(e, sponsor, &ledger);

    events::emit_lock_created(
        e,
        sponsor,
        recipient,
        lock.staked_amount,
        lock.principal,
        unlock_time,
    );
    Ok(())
}

pub(crate) fn do_update_lockup(
    e: &Env,
    sponsor: &Address,
    recipient: &Address,
    new_unlock_time: u64,
) -> Result<(), ContractError> {
    let mut ledger = load_ledger(e, sponsor)?;
    let mut lock = ledger
        .locks
        .get(recipient.clone())
        .ok_or(ContractError::LockNotFound)?;
    let old_unlock = lock.unlock_time;
    lock.unlock_time = new_unlock_time;
    ledger.locks.set(recipient.clone(), lock);
    store_ledger(e, sponsor, &ledger);

    events::emit_lockup_updated(e, recipient, old_unlock, new_unlock_time);
    Ok(())
}

pub(crate) fn do_cancel_lockup(
    e: &Env,
    sponsor: &Address,
    recipient: &Address,
) -> Result<(i128, i128), ContractError> {
    let mut ledger = load_ledger(e, sponsor)?;
    let lock = ledger
        .locks
        .get(recipient.clone())
        .ok_or(ContractError::LockNotFound)?;
    ledger.locks.remove(recipient.clone());
    ledger.active_count = ledger.active_count.saturating_sub(1);
    store_ledger(e, sponsor, &ledger);

    let price = current_price(e)?;
    let base_value = staked_to_base(lock.staked_amount, price)?;

    // The full remaining shares go to the sponsor's withdrawal address, not
    // the recipient.
    let token = staked_token(e)?;
    TokenClient::new(e, &token).transfer(
        &e.current_contract_address(),
        &ledger.withdrawal_address,
        &lock.staked_amount,
    );

    events::emit_lock_cancelled(e, recipient, base_value, lock.staked_amount);
    Ok((base_value, lock.staked_amount))
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct VestingLockup;

#[contractimpl]
impl VestingLockup {
    // ── Contract setup ─────────────────────────────────────────────────────

    /// One-time contract configuration: admin, staking pool, and the token
    /// contract of the staked asset.
    pub fn configure(
        e: Env,
        admin: Address,
        staking_pool: Address,
        staked_token: Address,
    ) -> Result<(), ContractError> {
        admin.require_auth();
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyConfigured);
        }
        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage()
            .instance()
            .set(&DataKey::StakingPool, &staking_pool);
        e.storage()
            .instance()
            .set(&DataKey::StakedToken, &staked_token);
        Ok(())
    }

    /// Stored admin address.
    pub fn admin(e: Env) -> Result<Address, ContractError> {
        e.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(ContractError::NotConfigured)
    }

    // ── Ledger lifecycle ───────────────────────────────────────────────────

    /// Create an empty ledger for `sponsor` with the given withdrawal
    /// address. Each sponsor initializes exactly once.
    pub fn initialize(
        e: Env,
        sponsor: Address,
        withdrawal_address: Address,
    ) -> Result<(), ContractError> {
        sponsor.require_auth();
        if e.storage()
            .persistent()
            .has(&DataKey::Ledger(sponsor.clone()))
        {
            return Err(ContractError::AlreadyInitialized);
        }
        let ledger = LockLedger {
            locks: Map::new(&e),
            withdrawal_address: withdrawal_address.clone(),
            active_count: 0,
        };
        store_ledger(&e, &sponsor, &ledger);

        events::emit_ledger_initialized(&e, &sponsor, &withdrawal_address);
        Ok(())
    }

    /// Swap the sponsor's withdrawal address. Only allowed while the ledger
    /// holds no active locks.
    pub fn update_withdrawal_address(
        e: Env,
        sponsor: Address,
        new_address: Address,
    ) -> Result<(), ContractError> {
        sponsor.require_auth();
        let mut ledger = load_ledger(&e, &sponsor)?;
        if ledger.active_count > 0 {
            return Err(ContractError::ActiveLocksExist);
        }
        let old = ledger.withdrawal_address.clone();
        ledger.withdrawal_address = new_address.clone();
        store_ledger(&e, &sponsor, &ledger);

        events::emit_withdrawal_updated(&e, &sponsor, &old, &new_address);
        Ok(())
    }

    // ── Lock creation ──────────────────────────────────────────────────────

    /// Lock `amount` of the base asset for `recipient` until `unlock_time`.
    ///
    /// The amount is debited from the sponsor and staked through the pool;
    /// the resulting shares are held by this contract. The shares' base value
    /// at the current price becomes the lock's principal. An `unlock_time` in
    /// the past yields an immediately claimable lock.
    pub fn create_lock(
        e: Env,
        sponsor: Address,
        recipient: Address,
        amount: i128,
        unlock_time: u64,
    ) -> Result<(), ContractError> {
        sponsor.require_auth();
        do_create_lock(&e, &sponsor, &recipient, amount, unlock_time)
    }

    /// Lock `staked_amount` shares taken directly from the sponsor, skipping
    /// the staking conversion.
    pub fn create_lock_with_staked(
        e: Env,
        sponsor: Address,
        recipient: Address,
        staked_amount: i128,
        unlock_time: u64,
    ) -> Result<(), ContractError> {
        sponsor.require_auth();
        if staked_amount <= 0 {
            return Err(ContractError::InvalidInput);
        }
        let mut ledger = load_ledger(&e, &sponsor)?;
        if ledger.locks.contains_key(recipient.clone()) {
            return Err(ContractError::LockAlreadyExists);
        }

        let token = staked_token(&e)?;
        TokenClient::new(&e, &token).transfer(
            &sponsor,
            &e.current_contract_address(),
            &staked_amount,
        );

        let lock = insert_lock(&e, &mut ledger, &recipient, staked_amount, unlock_time)?;
        store_ledger(&e, &sponsor, &ledger);

        events::emit_lock_created(
            &e,
            &sponsor,
            &recipient,
            lock.staked_amount,
            lock.principal,
            unlock_time,
        );
        Ok(())
    }

    /// Create one lock per (recipient, amount) pair with a shared unlock
    /// time. Runs in a single invocation, so any failing entry reverts the
    /// whole batch. Returns the number of locks created.
    pub fn create_locks(
        e: Env,
        sponsor: Address,
        recipients: Vec<Address>,
        amounts: Vec<i128>,
        unlock_time: u64,
    ) -> Result<u32, ContractError> {
        sponsor.require_auth();
        batch::create_locks(&e, &sponsor, &recipients, &amounts, unlock_time)
    }

    // ── Rewards claim ──────────────────────────────────────────────────────

    /// Pay out the yield accrued above the lock's principal.
    ///
    /// The excess of the shares' current base value over the principal is
    /// converted back into shares and transferred to the recipient; the lock
    /// keeps its principal as the floor for the next claim. Returns the
    /// accrued base value and the share amount paid. Both are zero (and
    /// nothing moves) when no yield has accrued or the price has dropped
    /// below the creation price.
    pub fn claim_rewards(
        e: Env,
        recipient: Address,
        sponsor: Address,
    ) -> Result<(i128, i128), ContractError> {
        recipient.require_auth();
        let mut ledger = load_ledger(&e, &sponsor)?;
        let mut lock = ledger
            .locks
            .get(recipient.clone())
            .ok_or(ContractError::LockNotFound)?;

        let price = current_price(&e)?;
        let current_value = staked_to_base(lock.staked_amount, price)?;
        let accrued = current_value.saturating_sub(lock.principal);
        if accrued <= 0 {
            return Ok((0, 0));
        }
        let redeem = base_to_staked(accrued, price)?;
        if redeem == 0 {
            return Ok((0, 0));
        }

        lock.staked_amount = lock
            .staked_amount
            .checked_sub(redeem)
            .ok_or(ContractError::Overflow)?;
        ledger.locks.set(recipient.clone(), lock);
        store_ledger(&e, &sponsor, &ledger);

        let token = staked_token(&e)?;
        TokenClient::new(&e, &token).transfer(&e.current_contract_address(), &recipient, &redeem);

        events::emit_rewards_claimed(&e, &recipient, accrued, redeem);
        Ok((accrued, redeem))
    }

    // ── Principal claim ────────────────────────────────────────────────────

    /// Claim the lock's full remaining shares after the unlock time.
    ///
    /// Returns the shares' base value at the current price, the share amount
    /// transferred, and the claim timestamp. A second call fails with
    /// `LockNotFound`: removal of the ledger entry is what guarantees the
    /// shares are disbursed exactly once.
    pub fn claim(
        e: Env,
        recipient: Address,
        sponsor: Address,
    ) -> Result<(i128, i128, u64), ContractError> {
        recipient.require_auth();
        let mut ledger = load_ledger(&e, &sponsor)?;
        let lock = ledger
            .locks
            .get(recipient.clone())
            .ok_or(ContractError::LockNotFound)?;

        // Remove first. A failed invocation discards all storage writes, so
        // the removal never commits when the expiry check below fails.
        ledger.locks.remove(recipient.clone());
        ledger.active_count = ledger.active_count.saturating_sub(1);
        store_ledger(&e, &sponsor, &ledger);

        let now = e.ledger().timestamp();
        if now < lock.unlock_time {
            return Err(ContractError::LockupNotExpired);
        }

        let price = current_price(&e)?;
        let base_value = staked_to_base(lock.staked_amount, price)?;

        let token = staked_token(&e)?;
        TokenClient::new(&e, &token).transfer(
            &e.current_contract_address(),
            &recipient,
            &lock.staked_amount,
        );

        events::emit_lock_claimed(&e, &recipient, base_value, lock.staked_amount, now);
        Ok((base_value, lock.staked_amount, now))
    }

    // ── Lockup update ──────────────────────────────────────────────────────

    /// Reschedule a lock's unlock time. The new time may be earlier or later
    /// than the old one, with no bound relative to the current time.
    pub fn update_lockup(
        e: Env,
        sponsor: Address,
        recipient: Address,
        new_unlock_time: u64,
    ) -> Result<(), ContractError> {
        sponsor.require_auth();
        do_update_lockup(&e, &sponsor, &recipient, new_unlock_time)
    }

    /// Reschedule several locks to one shared unlock time. Any failing entry
    /// reverts the whole batch.
    pub fn update_lockups(
        e: Env,
        sponsor: Address,
        recipients: Vec<Address>,
        new_unlock_time: u64,
    ) -> Result<(), ContractError> {
        sponsor.require_auth();
        batch::update_lockups(&e, &sponsor, &recipients, new_unlock_time)
    }

    // ── Cancellation ───────────────────────────────────────────────────────

    /// Cancel a lock and return its full remaining shares to the ledger's
    /// withdrawal address. Returns the shares' base value and the share
    /// amount moved.
    pub fn cancel_lockup(
        e: Env,
        sponsor: Address,
        recipient: Address,
    ) -> Result<(i128, i128), ContractError> {
        sponsor.require_auth();
        do_cancel_lockup(&e, &sponsor, &recipient)
    }

    /// Cancel several locks. Any failing entry reverts the whole batch.
    pub fn cancel_lockups(
        e: Env,
        sponsor: Address,
        recipients: Vec<Address>,
    ) -> Result<(), ContractError> {
        sponsor.require_auth();
        batch::cancel_lockups(&e, &sponsor, &recipients)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Number of active locks in the sponsor's ledger.
    pub fn total_locks(e: Env, sponsor: Address) -> Result<u32, ContractError> {
        Ok(load_ledger(&e, &sponsor)?.active_count)
    }

    /// Full lock state for (sponsor, recipient).
    pub fn get_lock(e: Env, sponsor: Address, recipient: Address) -> Result<Lock, ContractError> {
        load_ledger(&e, &sponsor)?
            .locks
            .get(recipient)
            .ok_or(ContractError::LockNotFound)
    }

    /// Staked shares held for a lock.
    pub fn staked_amount(
        e: Env,
        sponsor: Address,
        recipient: Address,
    ) -> Result<i128, ContractError> {
        Ok(Self::get_lock(e, sponsor, recipient)?.staked_amount)
    }

    /// Base-asset value of a lock's shares at the current price.
    pub fn locked_value(
        e: Env,
        sponsor: Address,
        recipient: Address,
    ) -> Result<i128, ContractError> {
        let lock = Self::get_lock(e.clone(), sponsor, recipient)?;
        let price = current_price(&e)?;
        staked_to_base(lock.staked_amount, price)
    }

    /// A lock's unlock timestamp.
    pub fn unlock_time(e: Env, sponsor: Address, recipient: Address) -> Result<u64, ContractError> {
        Ok(Self::get_lock(e, sponsor, recipient)?.unlock_time)
    }

    /// The sponsor's withdrawal address.
    pub fn withdrawal_address(e: Env, sponsor: Address) -> Result<Address, ContractError> {
        Ok(load_ledger(&e, &sponsor)?.withdrawal_address)
    }
}
