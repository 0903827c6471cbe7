use soroban_sdk::contracterror;

/// Canonical error enum for the vesting lockup contract.
///
/// Codes are wire-stable. Never renumber a variant after deployment; append
/// new variants at the end only.
#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    /// Contract-level configuration (staking pool, staked token) is missing.
    NotConfigured = 1,
    /// Contract-level configuration can only be set once.
    AlreadyConfigured = 2,
    /// The sponsor has no ledger.
    NotInitialized = 3,
    /// The sponsor already has a ledger.
    AlreadyInitialized = 4,
    /// The recipient already holds an active lock under this sponsor.
    LockAlreadyExists = 5,
    /// No active lock exists for this (sponsor, recipient) pair.
    LockNotFound = 6,
    /// Principal claim attempted before the unlock time.
    LockupNotExpired = 7,
    /// Withdrawal-address change is blocked while locks are active.
    ActiveLocksExist = 8,
    /// Non-positive amount, non-positive price, or malformed batch input.
    InvalidInput = 9,
    /// Checked arithmetic overflowed during a conversion.
    Overflow = 10,
}
