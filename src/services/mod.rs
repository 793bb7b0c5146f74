//! Service layer
//!
//! Contains the business logic sitting between the HTTP handlers and the
//! database.

pub mod stock;

pub use stock::StockService;
