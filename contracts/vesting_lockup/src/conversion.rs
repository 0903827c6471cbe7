//! Fixed-point conversion between the base asset and staked shares.
//!
//! The staking pool quotes the price of one share in base-asset terms scaled
//! by [`PRICE_ONE`]. Both directions round toward zero, so converting an
//! accrued base amount into shares never redeems more value than was accrued.

use crate::errors::ContractError;

/// Share-price scale: 7 decimals, matching Stellar asset precision.
pub const PRICE_ONE: i128 = 10_000_000;

/// Value of `shares` in base-asset units at `price`:
/// `floor(shares * price / PRICE_ONE)`.
pub fn staked_to_base(shares: i128, price: i128) -> Result<i128, ContractError> {
    shares
        .checked_mul(price)
        .and_then(|v| v.checked_div(PRICE_ONE))
        .ok_or(ContractError::Overflow)
}

/// Shares worth `base` base-asset units at `price`:
/// `floor(base * PRICE_ONE / price)`.
pub fn base_to_staked(base: i128, price: i128) -> Result<i128, ContractError> {
    if price <= 0 {
        return Err(ContractError::InvalidInput);
    }
    base.checked_mul(PRICE_ONE)
        .and_then(|v| v.checked_div(price))
        .ok_or(ContractError::Overflow)
}
