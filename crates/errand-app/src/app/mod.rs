//! Application use cases

pub mod batch_report;
pub mod quote_service;

pub use batch_report::{format_won, generate_quote_report};
pub use quote_service::{BatchQuote, QuoteOptions, QuoteService};
