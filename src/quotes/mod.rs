//! Quote generation domain logic
//!
//! Theme catalog and post-processing for generated quote text.

mod sanitize;
mod themes;

pub use sanitize::{sanitize_quote, FALLBACK_QUOTE};
pub use themes::{pick_theme, THEMES};
