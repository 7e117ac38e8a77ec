mod stock;

pub use stock::{Stock, StockId};
