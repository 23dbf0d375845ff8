use soroban_sdk::{Address, Env, Symbol};

use crate::storage::{GlobalAccounting, ParticipantTotals};

pub struct RewardPoolEvents {}

impl RewardPoolEvents {
    /// Emitted once when the pool is configured
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[stake_asset: Address, reward_asset: Address, start_bonus_bps: u32, bonus_period_seconds: u64]`
    pub fn initialize(
        env: &Env,
        admin: Address,
        stake_asset: Address,
        reward_asset: Address,
        start_bonus_bps: u32,
        bonus_period_seconds: u64,
    ) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(
            topics,
            (stake_asset, reward_asset, start_bonus_bps, bonus_period_seconds),
        );
    }

    /// Emitted when a participant deposits stake
    ///
    /// - topics - `["deposit", participant: Address]`
    /// - data - `[amount: i128, minted_shares: i128, total_deposited: i128, total_share_count: i128]`
    pub fn deposit(
        env: &Env,
        participant: Address,
        amount: i128,
        minted_shares: i128,
        totals: &ParticipantTotals,
    ) {
        let topics = (Symbol::new(env, "deposit"), participant);
        env.events().publish(
            topics,
            (
                amount,
                minted_shares,
                totals.total_deposited,
                totals.total_share_count,
            ),
        );
    }

    /// Emitted when a participant withdraws stake
    ///
    /// - topics - `["withdraw", participant: Address]`
    /// - data - `[amount: i128, shares_burned: i128, total_deposited: i128, total_share_count: i128]`
    pub fn withdraw(
        env: &Env,
        participant: Address,
        amount: i128,
        shares_burned: i128,
        totals: &ParticipantTotals,
    ) {
        let topics = (Symbol::new(env, "withdraw"), participant);
        env.events().publish(
            topics,
            (
                amount,
                shares_burned,
                totals.total_deposited,
                totals.total_share_count,
            ),
        );
    }

    /// Emitted when a withdrawal pays out reward
    ///
    /// - topics - `["claim", participant: Address]`
    /// - data - `[reward: i128, total_claimed: i128]`
    pub fn claim(env: &Env, participant: Address, reward: i128, accounting: &GlobalAccounting) {
        let topics = (Symbol::new(env, "claim"), participant);
        env.events()
            .publish(topics, (reward, accounting.total_claimed));
    }

    /// Emitted when reward funding is added
    ///
    /// - topics - `["contribute", funder: Address]`
    /// - data - `[amount: i128, total_contributed: i128]`
    pub fn contribute(env: &Env, funder: Address, amount: i128, accounting: &GlobalAccounting) {
        let topics = (Symbol::new(env, "contribute"), funder);
        env.events()
            .publish(topics, (amount, accounting.total_contributed));
    }
}
