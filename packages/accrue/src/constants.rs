// ################################################################
//                          Storage TTL
// ################################################################

pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ################################################################
//                           Precision
// ################################################################

/// Fixed-point scale shared by bonus fractions and the share minting rate.
pub const BPS_PRECISION: i128 = 10_000;
pub const MAX_BPS: u32 = 10_000;

// ################################################################
//                             Time
// ################################################################

pub const ONE_DAY: u64 = 86_400;
pub const ONE_YEAR: u64 = 365 * ONE_DAY;
