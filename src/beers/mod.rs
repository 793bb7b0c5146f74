//! Beer domain module
//!
//! Contains the persisted beer entity, the style enumeration, and the
//! SQLite-backed data access.

mod db;
mod models;

pub use db::BeerDb;
pub use models::{Beer, BeerType, NewBeer};
