//! Interface to the external staking pool.

use soroban_sdk::{contractclient, Address, Env};

/// The staking pool converts the base asset into yield-bearing shares and
/// quotes the current share price. The price is read fresh for every
/// conversion; it is never cached across calls.
#[contractclient(name = "StakingPoolClient")]
pub trait StakingPool {
    /// Pull `amount` of the base asset from `from`, stake it, and credit the
    /// resulting shares to `recipient`. Returns the share amount. The stake
    /// is irreversible within this call.
    fn deposit_and_stake(env: Env, from: Address, recipient: Address, amount: i128) -> i128;

    /// Current price of one share in base-asset terms, scaled by
    /// [`crate::conversion::PRICE_ONE`].
    fn price(env: Env) -> i128;
}
