use accrue::{
    constants::MAX_BPS,
    error::ErrorCode,
    validate,
};
use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, BytesN, Env};

use crate::{
    controller,
    custody::Custody,
    events::RewardPoolEvents,
    interface::RewardPoolTrait,
    ledger::StakeLedger,
    msg::{ConfigResponse, CustodyResponse, StakedResponse},
    storage::{
        get_accounting, get_config, get_participant_totals, get_stake_records, save_accounting,
        save_config, save_participant,
        utils::{bump_instance, get_admin, is_initialized, save_admin, set_initialized},
        BonusConfig, Config, GlobalAccounting,
    },
};

contractmeta!(
    key = "Description",
    val = "Time-weighted reward pool paying bonused rewards on LIFO stake redemption"
);

#[contract]
pub struct RewardPool;

#[contractimpl]
impl RewardPoolTrait for RewardPool {
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
    ) -> Result<(), ErrorCode> {
        if is_initialized(&env) {
            log!(
                &env,
                "Reward Pool: Initialize: initializing contract twice is not allowed"
            );
            return Err(ErrorCode::AlreadyInitialized);
        }

        validate!(
            &env,
            start_bonus_bps <= MAX_BPS,
            ErrorCode::InvalidArgument,
            "start bonus {} bps is above 100%",
            start_bonus_bps
        )?;
        validate!(
            &env,
            bonus_period_seconds > 0,
            ErrorCode::InvalidArgument,
            "bonus period must be positive"
        )?;
        validate!(
            &env,
            shares_per_deposit_unit > 0,
            ErrorCode::InvalidArgument,
            "shares per deposit unit must be positive"
        )?;

        set_initialized(&env);
        save_admin(&env, &admin);

        save_config(
            &env,
            &Config {
                stake_asset: stake_asset.clone(),
                reward_asset: reward_asset.clone(),
                bonus: BonusConfig {
                    start_bonus_bps,
                    bonus_period_seconds,
                    shares_per_deposit_unit,
                },
            },
        );
        save_accounting(&env, &GlobalAccounting::default());

        RewardPoolEvents::initialize(
            &env,
            admin,
            stake_asset,
            reward_asset,
            start_bonus_bps,
            bonus_period_seconds,
        );

        Ok(())
    }

    fn update(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), ErrorCode> {
        let admin = get_admin(&env)?;
        admin.require_auth();
        bump_instance(&env);

        env.deployer().update_current_contract_wasm(new_wasm_hash);

        Ok(())
    }

    // ################################################################
    //                             USER
    // ################################################################

    fn deposit(env: Env, sender: Address, amount: i128) -> Result<i128, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let config = get_config(&env)?;
        let now = env.ledger().timestamp();

        let mut ledger = StakeLedger::new(get_stake_records(&env, &sender));
        let mut totals = get_participant_totals(&env, &sender);
        let mut accounting = get_accounting(&env);

        let minted_shares = controller::stake::add_stake(
            &env,
            &config.bonus,
            &mut ledger,
            &mut totals,
            amount,
            now,
        )?;
        accounting.record_deposit(&env, amount, minted_shares)?;

        Custody::new(&env, &config.stake_asset).transfer_in(&sender, amount);

        save_participant(&env, &sender, ledger.records(), &totals);
        save_accounting(&env, &accounting);

        RewardPoolEvents::deposit(&env, sender, amount, minted_shares, &totals);

        Ok(minted_shares)
    }

    fn withdraw(env: Env, sender: Address, amount: i128) -> Result<i128, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let config = get_config(&env)?;
        let now = env.ledger().timestamp();

        let mut ledger = StakeLedger::new(get_stake_records(&env, &sender));
        let mut totals = get_participant_totals(&env, &sender);
        let mut accounting = get_accounting(&env);

        let redemption = controller::stake::remove_stake(
            &env,
            &config.bonus,
            &mut ledger,
            &mut totals,
            amount,
            now,
        )?;
        accounting.record_withdrawal(&env, amount, redemption.shares_burned, redemption.reward)?;

        // Nothing is written until both assets have left custody.
        Custody::new(&env, &config.reward_asset).transfer_out(
            &sender,
            redemption.reward,
            ErrorCode::InsufficientRewardFunding,
        )?;
        Custody::new(&env, &config.stake_asset).transfer_out(
            &sender,
            amount,
            ErrorCode::TransferFailed,
        )?;

        save_participant(&env, &sender, ledger.records(), &totals);
        save_accounting(&env, &accounting);

        RewardPoolEvents::withdraw(
            &env,
            sender.clone(),
            amount,
            redemption.shares_burned,
            &totals,
        );
        RewardPoolEvents::claim(&env, sender, redemption.reward, &accounting);

        Ok(redemption.reward)
    }

    fn contribute(env: Env, sender: Address, amount: i128) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        let config = get_config(&env)?;
        let mut accounting = get_accounting(&env);

        controller::contribution::add_contribution(&env, &mut accounting, amount)?;

        Custody::new(&env, &config.reward_asset).transfer_in(&sender, amount);

        save_accounting(&env, &accounting);

        RewardPoolEvents::contribute(&env, sender, amount, &accounting);

        Ok(())
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_config(env: Env) -> Result<ConfigResponse, ErrorCode> {
        bump_instance(&env);
        Ok(ConfigResponse {
            config: get_config(&env)?,
        })
    }

    fn query_admin(env: Env) -> Result<Address, ErrorCode> {
        bump_instance(&env);
        get_admin(&env)
    }

    fn query_staked(env: Env, address: Address) -> StakedResponse {
        bump_instance(&env);
        StakedResponse {
            stakes: get_stake_records(&env, &address),
            totals: get_participant_totals(&env, &address),
        }
    }

    fn query_total_reward(env: Env, address: Address) -> Result<i128, ErrorCode> {
        bump_instance(&env);

        let config = get_config(&env)?;
        let ledger = StakeLedger::new(get_stake_records(&env, &address));

        controller::stake::project_total_reward(
            &env,
            &config.bonus,
            &ledger,
            env.ledger().timestamp(),
        )
    }

    fn query_accounting(env: Env) -> GlobalAccounting {
        bump_instance(&env);
        get_accounting(&env)
    }

    fn query_total_staked(env: Env) -> i128 {
        bump_instance(&env);
        get_accounting(&env).total_deposited
    }

    fn query_custody(env: Env) -> Result<CustodyResponse, ErrorCode> {
        bump_instance(&env);

        let config = get_config(&env)?;

        Ok(CustodyResponse {
            stake_balance: Custody::new(&env, &config.stake_asset).balance(),
            reward_balance: Custody::new(&env, &config.reward_asset).balance(),
        })
    }
}
