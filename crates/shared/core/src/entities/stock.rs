use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::values::{Exchange, Price, Timestamp};

/// Unique identifier for a stock entity
pub type StockId = Uuid;

/// Stock entity: one tradable instrument listed on an exchange
///
/// Unlike the value objects it aggregates, a `Stock` is mutable: market data
/// updates replace its `Price` fields wholesale and refresh `last_updated`.
/// The identifier is assigned once at construction and never changes.
///
/// The exchange is held behind an `Arc` so many stocks can share one venue
/// description; `Exchange` is immutable, so the sharing is read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stock {
    /// Unique entity identifier, assigned at construction
    pub id: StockId,

    /// Ticker symbol identifying the stock
    pub symbol: String,

    /// Name of the issuing company
    pub company_name: String,

    /// Primary exchange where the stock is listed
    pub exchange: Arc<Exchange>,

    /// Current market price
    pub current_price: Price,

    /// Currency the stock trades in
    pub currency: String,

    /// Business sector of the company
    pub sector: Option<String>,

    /// Specific industry within the sector
    pub industry: Option<String>,

    /// International Securities Identification Number
    pub isin: Option<String>,

    /// Opening price of the trading day
    pub open_price: Option<Price>,

    /// Highest price of the trading day
    pub high_price: Option<Price>,

    /// Lowest price of the trading day
    pub low_price: Option<Price>,

    /// Previous day's closing price
    pub close_price: Option<Price>,

    /// Trading volume of the day
    pub volume: Option<u64>,

    /// Market capitalization
    pub market_cap: Option<f64>,

    /// Price-to-earnings ratio
    pub pe_ratio: Option<f64>,

    /// Annual dividend yield as a percentage
    pub dividend_yield: Option<f64>,

    /// Volatility relative to the market
    pub beta: Option<f64>,

    /// 50-day moving average price
    pub fifty_day_avg: Option<f64>,

    /// 200-day moving average price
    pub two_hundred_day_avg: Option<f64>,

    /// 52-week high price
    pub year_high: Option<f64>,

    /// 52-week low price
    pub year_low: Option<f64>,

    /// When the data was last updated
    pub last_updated: Timestamp,
}

impl Stock {
    /// Create a new stock with an explicit timestamp
    ///
    /// A fresh identifier is generated per call; optional fields start
    /// absent and are filled via the `with_*` builders or the update
    /// methods.
    pub fn new_with_time(
        symbol: impl Into<String>,
        company_name: impl Into<String>,
        exchange: Arc<Exchange>,
        current_price: Price,
        currency: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol: symbol.into(),
            company_name: company_name.into(),
            exchange,
            current_price,
            currency: currency.into(),
            sector: None,
            industry: None,
            isin: None,
            open_price: None,
            high_price: None,
            low_price: None,
            close_price: None,
            volume: None,
            market_cap: None,
            pe_ratio: None,
            dividend_yield: None,
            beta: None,
            fifty_day_avg: None,
            two_hundred_day_avg: None,
            year_high: None,
            year_low: None,
            last_updated: timestamp,
        }
    }

    /// Create a new stock using current system time
    pub fn new(
        symbol: impl Into<String>,
        company_name: impl Into<String>,
        exchange: Arc<Exchange>,
        current_price: Price,
        currency: impl Into<String>,
    ) -> Self {
        Self::new_with_time(
            symbol,
            company_name,
            exchange,
            current_price,
            currency,
            Utc::now(),
        )
    }

    /// Set the business sector
    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    /// Set the industry within the sector
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    /// Set the ISIN
    pub fn with_isin(mut self, isin: impl Into<String>) -> Self {
        self.isin = Some(isin.into());
        self
    }

    /// Set the previous day's closing price
    pub fn with_close_price(mut self, close_price: Price) -> Self {
        self.close_price = Some(close_price);
        self
    }

    /// Set the day's trading volume
    pub fn with_volume(mut self, volume: u64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// Set the fundamental statistics
    pub fn with_fundamentals(
        mut self,
        market_cap: f64,
        pe_ratio: f64,
        dividend_yield: f64,
        beta: f64,
    ) -> Self {
        self.market_cap = Some(market_cap);
        self.pe_ratio = Some(pe_ratio);
        self.dividend_yield = Some(dividend_yield);
        self.beta = Some(beta);
        self
    }

    /// Set the moving averages
    pub fn with_moving_averages(mut self, fifty_day: f64, two_hundred_day: f64) -> Self {
        self.fifty_day_avg = Some(fifty_day);
        self.two_hundred_day_avg = Some(two_hundred_day);
        self
    }

    /// Set the 52-week price range
    pub fn with_year_range(mut self, year_high: f64, year_low: f64) -> Self {
        self.year_high = Some(year_high);
        self.year_low = Some(year_low);
        self
    }

    /// Check if this stock's exchange is currently open
    pub fn is_market_open(&self) -> bool {
        self.exchange.is_open()
    }

    /// Percentage change from the previous close to the current price
    ///
    /// Returns `0.0` when no close price is set or the close is non-positive,
    /// so there is never a division by zero.
    pub fn calculate_price_change(&self) -> f64 {
        match &self.close_price {
            Some(close) if close.amount() > Decimal::ZERO => {
                let change = (self.current_price.amount() - close.amount()) / close.amount()
                    * Decimal::ONE_HUNDRED;
                change.to_f64().unwrap_or(0.0)
            }
            _ => 0.0,
        }
    }

    /// Replace the current price and refresh `last_updated`
    pub fn update_price(&mut self, new_price: Price) {
        self.current_price = new_price;
        self.last_updated = Utc::now();
    }

    /// Replace the day's OHLC prices and volume as one update
    pub fn update_market_data(
        &mut self,
        open_price: Price,
        high_price: Price,
        low_price: Price,
        close_price: Price,
        volume: u64,
    ) {
        self.open_price = Some(open_price);
        self.high_price = Some(high_price);
        self.low_price = Some(low_price);
        self.close_price = Some(close_price);
        self.volume = Some(volume);
        self.last_updated = Utc::now();
    }
}

impl std::fmt::Display for Stock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.symbol,
            self.exchange.code(),
            self.current_price
        )
    }
}
