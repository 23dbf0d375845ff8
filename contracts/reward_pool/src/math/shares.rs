use accrue::{
    constants::BPS_PRECISION,
    error::{AccrueResult, ErrorCode},
    math_error, validate,
};
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::Env;

use crate::storage::BonusConfig;

/// Shares minted for a deposit, floored at the bps scale. Dust deposits that
/// would mint nothing are rejected rather than silently absorbed.
pub fn calculate_minted_shares(env: &Env, bonus: &BonusConfig, amount: i128) -> AccrueResult<i128> {
    validate!(
        env,
        amount > 0,
        ErrorCode::InvalidArgument,
        "deposit amount {} must be positive",
        amount
    )?;

    let minted_shares = amount
        .fixed_mul_floor(i128::from(bonus.shares_per_deposit_unit), BPS_PRECISION)
        .ok_or_else(math_error!(env))?;

    validate!(
        env,
        minted_shares > 0,
        ErrorCode::SharesTooSmall,
        "deposit amount {} mints zero shares",
        amount
    )?;

    Ok(minted_shares)
}
