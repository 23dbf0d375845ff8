use soroban_sdk::{log, Env};

use crate::error::{AccrueResult, ErrorCode};

pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self, env: &Env) -> AccrueResult<Self>;
    fn safe_sub(self, rhs: Self, env: &Env) -> AccrueResult<Self>;
    fn safe_mul(self, rhs: Self, env: &Env) -> AccrueResult<Self>;
    fn safe_div(self, rhs: Self, env: &Env) -> AccrueResult<Self>;
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath for $t {
            #[track_caller]
            #[inline(always)]
            fn safe_add(self, v: $t, env: &Env) -> AccrueResult<$t> {
                match self.checked_add(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error: {} + {} overflowed", self, v);
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_sub(self, v: $t, env: &Env) -> AccrueResult<$t> {
                match self.checked_sub(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error: {} - {} overflowed", self, v);
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_mul(self, v: $t, env: &Env) -> AccrueResult<$t> {
                match self.checked_mul(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error: {} * {} overflowed", self, v);
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_div(self, v: $t, env: &Env) -> AccrueResult<$t> {
                match self.checked_div(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error: {} / {} is undefined", self, v);
                        Err(ErrorCode::MathError)
                    }
                }
            }
        }
    };
}

checked_impl!(i128);
checked_impl!(u64);
