use accrue::error::ErrorCode;
use soroban_sdk::{Address, BytesN, Env};

use crate::{
    msg::{ConfigResponse, CustodyResponse, StakedResponse},
    storage::GlobalAccounting,
};

pub trait RewardPoolTrait {
    // ################################################################
    //                             ADMIN
    // ################################################################

    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        admin: Address,
        stake_asset: Address,
        reward_asset: Address,
        start_bonus_bps: u32,
        bonus_period_seconds: u64,
        shares_per_deposit_unit: u32,
    ) -> Result<(), ErrorCode>;

    fn update(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), ErrorCode>;

    // ################################################################
    //                             USER
    // ################################################################

    fn deposit(env: Env, sender: Address, amount: i128) -> Result<i128, ErrorCode>;

    fn withdraw(env: Env, sender: Address, amount: i128) -> Result<i128, ErrorCode>;

    fn contribute(env: Env, sender: Address, amount: i128) -> Result<(), ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_config(env: Env) -> Result<ConfigResponse, ErrorCode>;

    fn query_admin(env: Env) -> Result<Address, ErrorCode>;

    fn query_staked(env: Env, address: Address) -> StakedResponse;

    fn query_total_reward(env: Env, address: Address) -> Result<i128, ErrorCode>;

    fn query_accounting(env: Env) -> GlobalAccounting;

    fn query_total_staked(env: Env) -> i128;

    fn query_custody(env: Env) -> Result<CustodyResponse, ErrorCode>;
}
