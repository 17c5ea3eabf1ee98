//! Arithmetic and formatting helpers

pub mod format;
pub mod valuation;

pub use format::{format_balance, format_usd, short_address};
pub use valuation::Valuation;
