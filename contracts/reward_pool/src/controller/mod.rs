pub mod contribution;
pub mod stake;
