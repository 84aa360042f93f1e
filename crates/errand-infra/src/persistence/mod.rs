//! Persistence implementations
//!
//! This module provides file-based implementations of the repository traits.

mod file_quote_history_repo;

pub use file_quote_history_repo::{fingerprint, FileQuoteHistoryRepository};
