use accrue::{
    error::{AccrueResult, ErrorCode},
    math::safe_math::SafeMath,
    math_error, validate,
};
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{log, Env};

use crate::{
    ledger::StakeLedger,
    math::{bonus_curve::calculate_bonused_reward, shares::calculate_minted_shares},
    storage::{BonusConfig, ParticipantTotals},
};

/// Outcome of redeeming stake from a participant's ledger.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Redemption {
    pub reward: i128,
    pub shares_burned: i128,
}

/// Mints shares for `amount` and records the deposit as the newest entry of
/// the participant's ledger.
pub fn add_stake(
    env: &Env,
    bonus: &BonusConfig,
    ledger: &mut StakeLedger,
    totals: &mut ParticipantTotals,
    amount: i128,
    now: u64,
) -> AccrueResult<i128> {
    let minted_shares = calculate_minted_shares(env, bonus, amount)?;

    totals.increase(env, amount, minted_shares, now)?;
    ledger.append(minted_shares, amount, now);

    Ok(minted_shares)
}

/// Redeems `amount` of principal, newest deposit first, and returns the
/// bonused reward it earned.
///
/// A record that is only partly consumed keeps its deposit time. Its share
/// count drops by the reward paid out of it and its principal by the amount
/// redeemed from it. Shares and principal therefore drift apart: an early
/// partial withdrawal that pays little leaves most shares behind on a smaller
/// principal, and those shares pay out in full once the record matures.
pub fn remove_stake(
    env: &Env,
    bonus: &BonusConfig,
    ledger: &mut StakeLedger,
    totals: &mut ParticipantTotals,
    amount: i128,
    now: u64,
) -> AccrueResult<Redemption> {
    validate!(
        env,
        amount > 0,
        ErrorCode::InvalidArgument,
        "withdraw amount {} must be positive",
        amount
    )?;
    validate!(
        env,
        amount <= totals.total_deposited,
        ErrorCode::InsufficientStake,
        "withdraw amount {} exceeds deposited {}",
        amount,
        totals.total_deposited
    )?;

    let mut remaining = amount;
    let mut reward = 0i128;
    let mut shares_burned = 0i128;

    while remaining > 0 {
        let record = ledger.peek_last(env)?;
        let age = now.safe_sub(record.deposit_timestamp, env)?;

        if record.deposit_amount <= remaining {
            reward = calculate_bonused_reward(env, bonus, reward, record.share_count, age)?;
            shares_burned = shares_burned.safe_add(record.share_count, env)?;
            remaining = remaining.safe_sub(record.deposit_amount, env)?;
            ledger.pop_last(env)?;
        } else {
            let full_reward = calculate_bonused_reward(env, bonus, 0, record.share_count, age)?;
            let partial_reward = full_reward
                .fixed_mul_floor(remaining, record.deposit_amount)
                .ok_or_else(math_error!(env))?;

            reward = reward.safe_add(partial_reward, env)?;
            shares_burned = shares_burned.safe_add(partial_reward, env)?;
            ledger.mutate_last(
                env,
                record.share_count.safe_sub(partial_reward, env)?,
                record.deposit_amount.safe_sub(remaining, env)?,
            )?;
            remaining = 0;
        }
    }

    totals.decrease(env, amount, shares_burned, now)?;

    log!(
        env,
        "Stake: Remove stake: redeemed {} for reward {} burning {} shares",
        amount,
        reward,
        shares_burned
    );

    Ok(Redemption {
        reward,
        shares_burned,
    })
}

/// Reward the participant would collect by withdrawing everything at `now`.
pub fn project_total_reward(
    env: &Env,
    bonus: &BonusConfig,
    ledger: &StakeLedger,
    now: u64,
) -> AccrueResult<i128> {
    ledger.records().iter().try_fold(0i128, |reward, record| {
        let age = now.safe_sub(record.deposit_timestamp, env)?;
        calculate_bonused_reward(env, bonus, reward, record.share_count, age)
    })
}
