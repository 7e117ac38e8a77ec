//! API entry point
//!
//! Prints the startup banner; no routes are served yet. The handler layer
//! will call into `stockyard-core` once a wire protocol is defined.

use std::sync::Arc;

use chrono::NaiveTime;
use rust_decimal_macros::dec;
use stockyard_core::{Exchange, Price, Stock};

fn main() {
    env_logger::init();

    println!("Starting Algorithmic Trading Platform...");
    println!("Starting API server...");

    if let Some(stock) = sample_snapshot() {
        log::info!("domain layer ready, sample instrument: {stock}");
    }
    log::info!("no routes configured");
}

/// Build a demonstration stock so the API binary exercises the domain layer
fn sample_snapshot() -> Option<Stock> {
    let open_time = NaiveTime::from_hms_opt(8, 0, 0)?;
    let close_time = NaiveTime::from_hms_opt(16, 30, 0)?;

    let lse = Arc::new(Exchange::new(
        "London Stock Exchange",
        "LSE",
        "United Kingdom",
        "GBP",
        "Europe/London",
        open_time,
        close_time,
    ));

    Some(Stock::new(
        "VOD",
        "Vodafone Group plc",
        lse,
        Price::new(dec!(72.50), "GBP"),
        "GBP",
    ))
}
