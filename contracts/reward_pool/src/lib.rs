#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod contract;
mod controller;
mod custody;
mod events;
mod interface;
mod ledger;
mod math;
mod msg;
mod storage;

pub use contract::*;
