pub mod bonus_curve;
pub mod shares;
