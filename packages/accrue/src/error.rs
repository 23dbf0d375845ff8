use soroban_sdk::contracterror;

pub type AccrueResult<T = ()> = core::result::Result<T, ErrorCode>;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    #[doc = "Contract was already initialized"]
    AlreadyInitialized = 1,
    #[doc = "Contract has not been initialized yet"]
    NotInitialized = 2,
    #[doc = "Zero or negative amount, or configuration out of range"]
    InvalidArgument = 4,
    #[doc = "Deposit too small to mint a single share"]
    SharesTooSmall = 5,
    #[doc = "Withdrawal exceeds the participant's deposited total"]
    InsufficientStake = 6,
    #[doc = "Reward custody could not pay out the accrued reward"]
    InsufficientRewardFunding = 7,
    #[doc = "Stake ledger has no live records"]
    EmptyLedger = 8,
    #[doc = "Checked arithmetic overflowed"]
    MathError = 9,
    #[doc = "Stake custody could not return the principal"]
    TransferFailed = 10,
}
