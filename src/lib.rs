#![doc(test(attr(deny(warnings))))]

//! Meal Ledger records cash handed over for mess meals: a budget is spread
//! greedily across lunch and supper slots (Fridays priced separately) and
//! the funded meals, remainder, and rate snapshot are kept for review.

pub mod cli;
pub mod config;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the process-wide tracing subscriber. Safe to call repeatedly;
/// only the first call has any effect.
pub fn init() {
    INIT.call_once(|| {
        utils::init_tracing();
        tracing::info!("meal ledger started");
    });
}
