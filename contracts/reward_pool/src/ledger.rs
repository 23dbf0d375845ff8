#[cfg(test)]
use accrue::math::safe_math::SafeMath;
use accrue::error::{AccrueResult, ErrorCode};
use soroban_sdk::{log, Env, Vec};

use crate::storage::StakeRecord;

/// A participant's deposit history, oldest first. Redemption only ever
/// touches the newest live record.
#[derive(Clone, Debug)]
pub struct StakeLedger {
    records: Vec<StakeRecord>,
}

impl StakeLedger {
    pub fn new(records: Vec<StakeRecord>) -> Self {
        StakeLedger { records }
    }

    pub fn records(&self) -> &Vec<StakeRecord> {
        &self.records
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn append(&mut self, share_count: i128, deposit_amount: i128, now: u64) {
        self.records.push_back(StakeRecord {
            share_count,
            deposit_amount,
            deposit_timestamp: now,
        });
    }

    pub fn peek_last(&self, env: &Env) -> AccrueResult<StakeRecord> {
        self.records.last().ok_or_else(|| empty_ledger(env))
    }

    pub fn pop_last(&mut self, env: &Env) -> AccrueResult<StakeRecord> {
        self.records.pop_back().ok_or_else(|| empty_ledger(env))
    }

    pub fn mutate_last(
        &mut self,
        env: &Env,
        new_share_count: i128,
        new_deposit_amount: i128,
    ) -> AccrueResult {
        let mut record = self.peek_last(env)?;
        record.share_count = new_share_count;
        record.deposit_amount = new_deposit_amount;
        self.records.set(self.records.len() - 1, record);
        Ok(())
    }

    #[cfg(test)]
    pub fn total_deposited(&self, env: &Env) -> AccrueResult<i128> {
        self.records
            .iter()
            .try_fold(0i128, |total, record| total.safe_add(record.deposit_amount, env))
    }

    #[cfg(test)]
    pub fn total_share_count(&self, env: &Env) -> AccrueResult<i128> {
        self.records
            .iter()
            .try_fold(0i128, |total, record| total.safe_add(record.share_count, env))
    }
}

fn empty_ledger(env: &Env) -> ErrorCode {
    log!(env, "Stake ledger: no live stake records left to redeem");
    ErrorCode::EmptyLedger
}
