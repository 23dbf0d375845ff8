use accrue::error::{AccrueResult, ErrorCode};
use soroban_sdk::{log, token, Address, Env};

/// One asset held by this contract on behalf of the pool.
pub struct Custody<'a> {
    env: &'a Env,
    token: token::Client<'a>,
}

impl<'a> Custody<'a> {
    pub fn new(env: &'a Env, asset: &Address) -> Self {
        Custody {
            env,
            token: token::Client::new(env, asset),
        }
    }

    /// Pulls `amount` from `from`. A failed transfer aborts the invocation.
    pub fn transfer_in(&self, from: &Address, amount: i128) {
        self.token
            .transfer(from, &self.env.current_contract_address(), &amount);
    }

    /// Pays `amount` to `to`, mapping a failed token call to `on_failure` so
    /// the caller can surface it as a typed error.
    pub fn transfer_out(&self, to: &Address, amount: i128, on_failure: ErrorCode) -> AccrueResult {
        if amount == 0 {
            return Ok(());
        }

        match self
            .token
            .try_transfer(&self.env.current_contract_address(), to, &amount)
        {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(
                    self.env,
                    "Custody: transfer of {} out of custody failed, balance {}",
                    amount,
                    self.balance()
                );
                Err(on_failure)
            }
        }
    }

    pub fn balance(&self) -> i128 {
        self.token.balance(&self.env.current_contract_address())
    }
}
