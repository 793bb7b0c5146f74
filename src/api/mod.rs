//! API module
//!
//! Contains HTTP request handlers for beer stock endpoints

pub mod beers;
