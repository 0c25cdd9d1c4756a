//! Storage module for quotidian
//!
//! Handles the quote table using SQLite.

mod database;
mod models;

pub use database::Database;
pub use models::QuoteRecord;
