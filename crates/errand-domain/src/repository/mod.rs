//! Repository trait definitions for data persistence

use crate::model::QuoteRecord;
use errand_types::Error;

/// Repository for computed quotes
pub trait QuoteHistoryRepository {
    /// Save a quote, replacing any earlier quote with the same fingerprint
    fn save(&self, record: &QuoteRecord) -> Result<(), Error>;

    /// Find a quote by its record id
    fn find_by_id(&self, id: &str) -> Result<Option<QuoteRecord>, Error>;

    /// Find the latest quote for identical inputs
    fn find_by_fingerprint(&self, fingerprint: &str) -> Result<Option<QuoteRecord>, Error>;

    /// All quotes, newest first
    fn find_all(&self) -> Result<Vec<QuoteRecord>, Error>;

    /// Remove every quote, returning how many were removed
    fn clear(&self) -> Result<usize, Error>;
}
