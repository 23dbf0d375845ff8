extern crate std;

use accrue::{constants::ONE_DAY, error::ErrorCode};
use pretty_assertions::assert_eq;
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation},
    Address, Env, IntoVal, Symbol,
};

use crate::{
    storage::{GlobalAccounting, ParticipantTotals, StakeRecord},
    tests::setup::{assert_totals_match_ledger, set_timestamp, setup_pool, UNIT},
};

#[test]
fn deposit_mints_shares_and_takes_custody() {
    let env = Env::default();
    let fixture = setup_pool(&env);
    let pool = &fixture.pool;

    let user = Address::generate(&env);
    fixture.stake_minter.mint(&user, &(100 * UNIT));
    set_timestamp(&env, 1_000);

    let minted = pool.deposit(&user, &(40 * UNIT));
    assert_eq!(
        env.auths(),
        std::vec![(
            user.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    pool.address.clone(),
                    Symbol::new(&env, "deposit"),
                    (&user, 40 * UNIT).into_val(&env)
                )),
                sub_invocations: std::vec![AuthorizedInvocation {
                    function: AuthorizedFunction::Contract((
                        fixture.stake_token.address.clone(),
                        symbol_short!("transfer"),
                        (&user, &pool.address, 40 * UNIT).into_val(&env)
                    )),
                    sub_invocations: std::vec![],
                }],
            }
        )]
    );

    assert_eq!(minted, 40 * UNIT);
    assert_eq!(fixture.stake_token.balance(&user), 60 * UNIT);
    assert_eq!(fixture.stake_token.balance(&pool.address), 40 * UNIT);

    let staked = pool.query_staked(&user);
    assert_eq!(staked.stakes.len(), 1);
    assert_eq!(
        staked.stakes.get(0).unwrap(),
        StakeRecord {
            share_count: 40 * UNIT,
            deposit_amount: 40 * UNIT,
            deposit_timestamp: 1_000,
        }
    );
    assert_eq!(
        staked.totals,
        ParticipantTotals {
            total_deposited: 40 * UNIT,
            total_share_count: 40 * UNIT,
            last_update_ts: 1_000,
        }
    );
    assert_eq!(
        pool.query_accounting(),
        GlobalAccounting {
            total_contributed: 0,
            total_claimed: 0,
            total_deposited: 40 * UNIT,
            total_shares: 40 * UNIT,
        }
    );
    assert_eq!(pool.query_total_staked(), 40 * UNIT);
}

#[test]
fn repeated_deposits_append_in_order() {
    let env = Env::default();
    let fixture = setup_pool(&env);
    let pool = &fixture.pool;

    let user = Address::generate(&env);
    fixture.stake_minter.mint(&user, &(100 * UNIT));

    for (i, amount) in [10 * UNIT, 20 * UNIT, 30 * UNIT].into_iter().enumerate() {
        set_timestamp(&env, 100 * i as u64);
        pool.deposit(&user, &amount);
    }

    let staked = pool.query_staked(&user);
    assert_eq!(staked.stakes.len(), 3);
    for (i, record) in staked.stakes.iter().enumerate() {
        assert_eq!(record.deposit_timestamp, 100 * i as u64);
        assert_eq!(record.deposit_amount, 10 * UNIT * (i as i128 + 1));
    }
    assert_eq!(staked.totals.total_deposited, 60 * UNIT);
    assert_totals_match_ledger(pool, &user);
}

#[test]
fn deposit_rejects_non_positive_amounts() {
    let env = Env::default();
    let fixture = setup_pool(&env);
    let pool = &fixture.pool;

    let user = Address::generate(&env);
    fixture.stake_minter.mint(&user, &UNIT);

    assert_eq!(pool.try_deposit(&user, &0), Err(Ok(ErrorCode::InvalidArgument)));
    assert_eq!(pool.try_deposit(&user, &-5), Err(Ok(ErrorCode::InvalidArgument)));

    assert_eq!(pool.query_staked(&user).stakes.len(), 0);
    assert_eq!(pool.query_accounting(), GlobalAccounting::default());
    assert_eq!(fixture.stake_token.balance(&user), UNIT);
}

#[test]
fn deposit_without_funds_changes_nothing() {
    let env = Env::default();
    let fixture = setup_pool(&env);
    let pool = &fixture.pool;

    let user = Address::generate(&env);

    assert!(pool.try_deposit(&user, &UNIT).is_err());
    assert_eq!(pool.query_staked(&user).stakes.len(), 0);
    assert_eq!(pool.query_total_staked(), 0);
}

#[test]
fn withdraw_more_than_deposited_fails() {
    let env = Env::default();
    let fixture = setup_pool(&env);
    let pool = &fixture.pool;

    let user = Address::generate(&env);
    let stranger = Address::generate(&env);
    fixture.stake_minter.mint(&user, &(10 * UNIT));
    pool.deposit(&user, &(10 * UNIT));

    assert_eq!(
        pool.try_withdraw(&user, &(10 * UNIT + 1)),
        Err(Ok(ErrorCode::InsufficientStake))
    );
    assert_eq!(
        pool.try_withdraw(&stranger, &1),
        Err(Ok(ErrorCode::InsufficientStake))
    );
    assert_eq!(pool.try_withdraw(&user, &0), Err(Ok(ErrorCode::InvalidArgument)));

    assert_eq!(pool.query_staked(&user).totals.total_deposited, 10 * UNIT);
    assert_eq!(fixture.stake_token.balance(&pool.address), 10 * UNIT);
}

#[test]
fn full_withdrawal_clears_participant() {
    let env = Env::default();
    let fixture = setup_pool(&env);
    let pool = &fixture.pool;

    let user = Address::generate(&env);
    fixture.stake_minter.mint(&user, &(30 * UNIT));
    fixture.reward_minter.mint(&fixture.admin, &(100 * UNIT));
    pool.contribute(&fixture.admin, &(100 * UNIT));

    pool.deposit(&user, &(10 * UNIT));
    set_timestamp(&env, ONE_DAY / 2);
    pool.deposit(&user, &(20 * UNIT));
    set_timestamp(&env, ONE_DAY);

    let reward = pool.withdraw(&user, &(30 * UNIT));

    // 10 at full age plus 20 at half age
    assert_eq!(reward, 20 * UNIT);
    assert_eq!(fixture.stake_token.balance(&user), 30 * UNIT);
    assert_eq!(fixture.reward_token.balance(&user), 20 * UNIT);

    let staked = pool.query_staked(&user);
    assert_eq!(staked.stakes.len(), 0);
    assert_eq!(staked.totals, ParticipantTotals::default());
    assert_eq!(pool.query_total_reward(&user), 0);
    assert_eq!(
        pool.query_accounting(),
        GlobalAccounting {
            total_contributed: 100 * UNIT,
            total_claimed: 20 * UNIT,
            total_deposited: 0,
            total_shares: 0,
        }
    );
}

#[test]
fn withdraw_requires_participant_auth() {
    let env = Env::default();
    let fixture = setup_pool(&env);
    let pool = &fixture.pool;

    let user = Address::generate(&env);
    fixture.stake_minter.mint(&user, &(10 * UNIT));
    fixture.reward_minter.mint(&fixture.admin, &(10 * UNIT));
    pool.contribute(&fixture.admin, &(10 * UNIT));
    pool.deposit(&user, &(10 * UNIT));
    set_timestamp(&env, ONE_DAY);

    assert_eq!(pool.withdraw(&user, &(5 * UNIT)), 5 * UNIT);

    let auths = env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, user);
    assert_eq!(
        auths[0].1.function,
        AuthorizedFunction::Contract((
            pool.address.clone(),
            Symbol::new(&env, "withdraw"),
            (&user, 5 * UNIT).into_val(&env)
        ))
    );
}

#[test]
fn participants_are_isolated() {
    let env = Env::default();
    let fixture = setup_pool(&env);
    let pool = &fixture.pool;

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    fixture.stake_minter.mint(&alice, &(20 * UNIT));
    fixture.stake_minter.mint(&bob, &(30 * UNIT));
    fixture.reward_minter.mint(&fixture.admin, &(100 * UNIT));
    pool.contribute(&fixture.admin, &(100 * UNIT));

    pool.deposit(&alice, &(20 * UNIT));
    pool.deposit(&bob, &(30 * UNIT));
    assert_eq!(pool.query_total_staked(), 50 * UNIT);

    set_timestamp(&env, ONE_DAY);
    let bob_before = pool.query_staked(&bob);
    pool.withdraw(&alice, &(5 * UNIT));

    assert_eq!(pool.query_staked(&bob), bob_before);
    assert_eq!(pool.query_total_staked(), 45 * UNIT);
    assert_totals_match_ledger(pool, &alice);
    assert_totals_match_ledger(pool, &bob);
}

#[test]
fn custody_tracks_both_assets() {
    let env = Env::default();
    let fixture = setup_pool(&env);
    let pool = &fixture.pool;

    let user = Address::generate(&env);
    fixture.stake_minter.mint(&user, &(10 * UNIT));
    fixture.reward_minter.mint(&fixture.admin, &(50 * UNIT));

    pool.deposit(&user, &(10 * UNIT));
    pool.contribute(&fixture.admin, &(50 * UNIT));

    let custody = pool.query_custody();
    assert_eq!(custody.stake_balance, 10 * UNIT);
    assert_eq!(custody.reward_balance, 50 * UNIT);

    set_timestamp(&env, ONE_DAY);
    pool.withdraw(&user, &(4 * UNIT));

    let custody = pool.query_custody();
    assert_eq!(custody.stake_balance, 6 * UNIT);
    assert_eq!(custody.reward_balance, 46 * UNIT);
}
