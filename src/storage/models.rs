//! Data models for storage

use serde::{Deserialize, Serialize};

/// A stored inspirational quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Identifier assigned by the database at insertion
    pub id: i64,

    /// The quote text, already sanitized
    pub quote: String,

    /// Generation timestamp as an RFC 3339 string
    pub generated_at: String,

    /// Theme the quote was generated about
    pub theme: String,
}
