//! Command-line entry point
//!
//! Prints the startup banner and a sample snapshot built from the domain
//! kernel. Interactive commands land here once the trading services exist.

use std::sync::Arc;

use chrono::NaiveTime;
use rust_decimal_macros::dec;
use stockyard_core::{Exchange, Price, Stock};

fn main() {
    env_logger::init();

    println!("Starting Algorithmic Trading Platform...");
    println!("Starting CLI interface...");

    if let Some(stock) = sample_snapshot() {
        log::info!("tracking {stock}");
        log::info!(
            "{} market open: {}",
            stock.exchange.code(),
            stock.is_market_open()
        );
        log::info!("change since close: {:.2}%", stock.calculate_price_change());
    }

    println!("Welcome to your Algorithmic Trading Platform");
}

/// Build a demonstration stock so the CLI exercises the domain layer
fn sample_snapshot() -> Option<Stock> {
    let open_time = NaiveTime::from_hms_opt(9, 30, 0)?;
    let close_time = NaiveTime::from_hms_opt(16, 0, 0)?;

    let nyse = Arc::new(Exchange::new(
        "New York Stock Exchange",
        "NYSE",
        "United States",
        "USD",
        "America/New_York",
        open_time,
        close_time,
    ));

    Some(
        Stock::new(
            "AAPL",
            "Apple Inc.",
            nyse,
            Price::new(dec!(150.0), "USD"),
            "USD",
        )
        .with_sector("Technology")
        .with_close_price(Price::new(dec!(148.5), "USD")),
    )
}
