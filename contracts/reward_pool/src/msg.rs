use soroban_sdk::{contracttype, Vec};

use crate::storage::{Config, ParticipantTotals, StakeRecord};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigResponse {
    pub config: Config,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedResponse {
    /// Live deposits, oldest first
    pub stakes: Vec<StakeRecord>,
    pub totals: ParticipantTotals,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CustodyResponse {
    pub stake_balance: i128,
    pub reward_balance: i128,
}
