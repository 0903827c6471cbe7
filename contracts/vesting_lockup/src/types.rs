use soroban_sdk::{contracttype, Address, Map};

// ─── Lock state ────────────────────────────────────────────────────────────

/// A single vesting lock held on behalf of one recipient.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lock {
    /// Staked-asset shares currently held for this lock. Reduced only by a
    /// rewards claim; disbursed whole on principal claim or cancellation.
    pub staked_amount: i128,
    /// Base-asset value of the shares at creation time. The rewards-accrual
    /// floor; never changes for the life of the lock.
    pub principal: i128,
    /// Ledger timestamp after which the principal may be claimed.
    pub unlock_time: u64,
}

// ─── Per-sponsor ledger ────────────────────────────────────────────────────

/// All lock state owned by one sponsor.
#[contracttype]
#[derive(Clone, Debug)]
pub struct LockLedger {
    /// Active locks keyed by recipient, at most one per recipient.
    pub locks: Map<Address, Lock>,
    /// Destination credited when a lock is cancelled.
    pub withdrawal_address: Address,
    /// Number of active locks. Always equals `locks.len()`; updated in
    /// lockstep on every insert and remove.
    pub active_count: u32,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
pub enum DataKey {
    /// Contract admin address.
    Admin,
    /// Staking pool that converts the base asset into staked shares.
    StakingPool,
    /// Token contract of the staked (yield-bearing) asset.
    StakedToken,
    /// Per-sponsor lock ledger.
    Ledger(Address),
}
