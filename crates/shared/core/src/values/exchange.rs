use chrono::{NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::values::Timestamp;

/// Value object describing a trading venue
///
/// Immutable after construction: fields are private with read accessors
/// only. Open and close times are time-of-day values for a regular trading
/// session; `open_time <= close_time` is assumed, not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    name: String,
    code: String,
    country: String,
    currency: String,
    timezone: String,
    open_time: NaiveTime,
    close_time: NaiveTime,
}

impl Exchange {
    /// Create a new exchange description
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        country: impl Into<String>,
        currency: impl Into<String>,
        timezone: impl Into<String>,
        open_time: NaiveTime,
        close_time: NaiveTime,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            country: country.into(),
            currency: currency.into(),
            timezone: timezone.into(),
            open_time,
            close_time,
        }
    }

    /// Full name of the exchange
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short exchange code (e.g., "NYSE", "NASDAQ")
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Country where the exchange is located
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Primary trading currency
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// IANA timezone identifier (e.g., "America/New_York"); informational
    /// only, not applied by [`Exchange::is_open_at`]
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Scheduled session open, time of day
    pub fn open_time(&self) -> NaiveTime {
        self.open_time
    }

    /// Scheduled session close, time of day
    pub fn close_time(&self) -> NaiveTime {
        self.close_time
    }

    /// Check whether the exchange is open at the given reference time
    ///
    /// Only the time-of-day component is considered, inclusive on both the
    /// open and close boundaries. No weekend, holiday, or timezone handling:
    /// the caller supplies a reference time whose time-of-day is already
    /// meaningful for this venue's session times.
    pub fn is_open_at(&self, reference_time: Timestamp) -> bool {
        let time_of_day = reference_time.time();
        self.open_time <= time_of_day && time_of_day <= self.close_time
    }

    /// Check whether the exchange is open right now
    pub fn is_open(&self) -> bool {
        self.is_open_at(Utc::now())
    }
}

impl std::fmt::Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
