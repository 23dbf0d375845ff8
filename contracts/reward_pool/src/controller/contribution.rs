use accrue::{
    error::{AccrueResult, ErrorCode},
    validate,
};
use soroban_sdk::Env;

use crate::storage::GlobalAccounting;

/// Books reward funding. Funding is never checked against what stakers are
/// owed; a shortfall only shows up when a withdrawal fails to pay out.
pub fn add_contribution(
    env: &Env,
    accounting: &mut GlobalAccounting,
    amount: i128,
) -> AccrueResult<i128> {
    validate!(
        env,
        amount > 0,
        ErrorCode::InvalidArgument,
        "contribution amount {} must be positive",
        amount
    )?;

    accounting.record_contribution(env, amount)?;

    Ok(accounting.total_contributed)
}
