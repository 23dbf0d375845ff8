use accrue::{
    constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD},
    error::{AccrueResult, ErrorCode},
    safe_decrement, safe_increment,
};
use soroban_sdk::{contracttype, Address, Env, Vec};

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Config,
    Accounting,
    Admin,
    Initialized,
    Ledger(Address),
    Totals(Address),
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BonusConfig {
    /// Credit granted at age zero, in bps of the full share count
    pub start_bonus_bps: u32,
    /// Age at which a deposit earns its full share count
    pub bonus_period_seconds: u64,
    /// Shares minted per deposited unit, in bps
    pub shares_per_deposit_unit: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub stake_asset: Address,
    pub reward_asset: Address,
    pub bonus: BonusConfig,
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().persistent().set(&DataKey::Config, config);
    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_config(env: &Env) -> AccrueResult<Config> {
    let config: Config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .ok_or(ErrorCode::NotInitialized)?;

    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    Ok(config)
}

// ################################################################
//                            Accounting
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GlobalAccounting {
    /// Reward asset ever added to custody
    pub total_contributed: i128,
    /// Reward asset ever paid out
    pub total_claimed: i128,
    /// Stake asset currently deposited across all participants
    pub total_deposited: i128,
    /// Shares currently live across all participants
    pub total_shares: i128,
}

impl GlobalAccounting {
    pub fn record_deposit(&mut self, env: &Env, amount: i128, shares: i128) -> AccrueResult {
        safe_increment!(env, self.total_deposited, amount);
        safe_increment!(env, self.total_shares, shares);
        Ok(())
    }

    pub fn record_withdrawal(
        &mut self,
        env: &Env,
        amount: i128,
        shares_burned: i128,
        reward: i128,
    ) -> AccrueResult {
        safe_decrement!(env, self.total_deposited, amount);
        safe_decrement!(env, self.total_shares, shares_burned);
        safe_increment!(env, self.total_claimed, reward);
        Ok(())
    }

    pub fn record_contribution(&mut self, env: &Env, amount: i128) -> AccrueResult {
        safe_increment!(env, self.total_contributed, amount);
        Ok(())
    }
}

pub fn save_accounting(env: &Env, accounting: &GlobalAccounting) {
    env.storage().persistent().set(&DataKey::Accounting, accounting);
    env.storage().persistent().extend_ttl(
        &DataKey::Accounting,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_accounting(env: &Env) -> GlobalAccounting {
    let accounting: GlobalAccounting = env
        .storage()
        .persistent()
        .get(&DataKey::Accounting)
        .unwrap_or_default();
    env.storage()
        .persistent()
        .has(&DataKey::Accounting)
        .then(|| {
            env.storage().persistent().extend_ttl(
                &DataKey::Accounting,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
        });

    accounting
}

// ################################################################
//                              Stake
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeRecord {
    pub share_count: i128,
    pub deposit_amount: i128,
    pub deposit_timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParticipantTotals {
    pub total_deposited: i128,
    pub total_share_count: i128,
    pub last_update_ts: u64,
}

impl ParticipantTotals {
    pub fn increase(&mut self, env: &Env, amount: i128, shares: i128, now: u64) -> AccrueResult {
        safe_increment!(env, self.total_deposited, amount);
        safe_increment!(env, self.total_share_count, shares);
        self.last_update_ts = now;
        Ok(())
    }

    pub fn decrease(&mut self, env: &Env, amount: i128, shares: i128, now: u64) -> AccrueResult {
        safe_decrement!(env, self.total_deposited, amount);
        safe_decrement!(env, self.total_share_count, shares);
        self.last_update_ts = now;
        Ok(())
    }
}

pub fn get_stake_records(env: &Env, participant: &Address) -> Vec<StakeRecord> {
    let key = DataKey::Ledger(participant.clone());
    let records = env
        .storage()
        .persistent()
        .get::<_, Vec<StakeRecord>>(&key)
        .unwrap_or_else(|| Vec::new(env));
    env.storage().persistent().has(&key).then(|| {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    });

    records
}

pub fn get_participant_totals(env: &Env, participant: &Address) -> ParticipantTotals {
    let key = DataKey::Totals(participant.clone());
    let totals = env
        .storage()
        .persistent()
        .get::<_, ParticipantTotals>(&key)
        .unwrap_or_default();
    env.storage().persistent().has(&key).then(|| {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    });

    totals
}

/// Writes a participant's ledger and totals together. An emptied ledger drops
/// both entries so the participant reads back as never having deposited.
pub fn save_participant(
    env: &Env,
    participant: &Address,
    records: &Vec<StakeRecord>,
    totals: &ParticipantTotals,
) {
    let ledger_key = DataKey::Ledger(participant.clone());
    let totals_key = DataKey::Totals(participant.clone());

    if records.is_empty() {
        env.storage().persistent().remove(&ledger_key);
        env.storage().persistent().remove(&totals_key);
        return;
    }

    env.storage().persistent().set(&ledger_key, records);
    env.storage().persistent().extend_ttl(
        &ledger_key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
    env.storage().persistent().set(&totals_key, totals);
    env.storage().persistent().extend_ttl(
        &totals_key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

// ################################################################
//                              Utils
// ################################################################

pub mod utils {
    use accrue::constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};

    use super::*;

    pub fn is_initialized(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Initialized)
            .unwrap_or(false)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    pub fn save_admin(env: &Env, address: &Address) {
        env.storage().instance().set(&DataKey::Admin, address);
    }

    pub fn get_admin(env: &Env) -> AccrueResult<Address> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(ErrorCode::NotInitialized)
    }

    pub fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }
}
