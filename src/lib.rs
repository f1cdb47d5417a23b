#![doc(test(attr(deny(warnings))))]

//! Spend Core offers category ledger and spend-chart primitives that power
//! higher level budgeting workflows and host programs.

pub mod chart;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Spend Core tracing initialized.");
    });
}
