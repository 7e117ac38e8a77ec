mod exchange;
mod price;

pub use exchange::Exchange;
pub use price::Price;

use chrono::{DateTime, Utc};

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;
