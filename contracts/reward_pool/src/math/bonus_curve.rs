use accrue::{constants::BPS_PRECISION, error::AccrueResult, math::safe_math::SafeMath, math_error};
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::Env;

use crate::storage::BonusConfig;

/// Adds the credit earned by `share_count` shares held for `age` seconds to
/// `prior`.
///
/// Credit ramps linearly from `start_bonus_bps` of the share count at age zero
/// up to the full share count at `bonus_period_seconds`, and stays there. The
/// ramp only ever scales credit down: a young deposit is penalised, an old one
/// is paid in full.
pub fn calculate_bonused_reward(
    env: &Env,
    bonus: &BonusConfig,
    prior: i128,
    share_count: i128,
    age: u64,
) -> AccrueResult<i128> {
    if age >= bonus.bonus_period_seconds {
        return prior.safe_add(share_count, env);
    }

    let base = share_count
        .fixed_mul_floor(i128::from(bonus.start_bonus_bps), BPS_PRECISION)
        .ok_or_else(math_error!(env))?;

    let ramped = share_count
        .safe_sub(base, env)?
        .fixed_mul_floor(i128::from(age), i128::from(bonus.bonus_period_seconds))
        .ok_or_else(math_error!(env))?;

    prior.safe_add(base, env)?.safe_add(ramped, env)
}
