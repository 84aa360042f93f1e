//! File-based quote history repository implementation

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use errand_domain::model::{Quote, QuoteRecord};
use errand_domain::repository::QuoteHistoryRepository;
use errand_types::{Error, Result, StoreError};

/// Compute the fingerprint for a quote's inputs
///
/// Kind and factors only: re-pricing the same request under a new rate
/// card keeps the same fingerprint.
pub fn fingerprint(quote: &Quote) -> Result<String> {
    let mut hasher = Sha256::new();
    hasher.update(quote.kind().as_bytes());
    hasher.update(b":");
    hasher.update(quote.factors_json()?.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

/// File-based implementation of QuoteHistoryRepository
///
/// Stores quotes keyed by fingerprint in a JSON file on disk.
pub struct FileQuoteHistoryRepository {
    store_path: PathBuf,
    entries: RefCell<HashMap<String, QuoteRecord>>,
}

impl FileQuoteHistoryRepository {
    /// Create or load a history repository
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("history.json");

        let entries = if store_path.exists() {
            Self::read_entries(&store_path)?
        } else {
            HashMap::new()
        };
        debug!(path = %store_path.display(), count = entries.len(), "opened quote history");

        Ok(Self {
            store_path,
            entries: RefCell::new(entries),
        })
    }

    fn read_entries(path: &Path) -> Result<HashMap<String, QuoteRecord>> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            warn!(path = %path.display(), error = %e, "quote history unreadable");
            StoreError::Corrupted(format!("{}: {}", path.display(), e)).into()
        })
    }

    /// Path of the backing JSON file
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Save store to disk
    fn persist(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &*self.entries.borrow())?;
        Ok(())
    }

    /// Get all entries sorted by timestamp (newest first)
    pub fn all_entries(&self) -> Vec<QuoteRecord> {
        let mut entries: Vec<_> = self.entries.borrow().values().cloned().collect();
        entries.sort_by(|a, b| b.quoted_at.cmp(&a.quoted_at));
        entries
    }

    /// Number of stored quotes
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Attach or replace the free-text label of a stored quote
    ///
    /// `id` may be any unique prefix of the record id, such as the short
    /// id the history table prints. Returns the full id that was updated.
    pub fn set_label(&self, id: &str, label: Option<String>) -> Result<String> {
        let full_id = {
            let mut entries = self.entries.borrow_mut();
            let mut matches: Vec<_> = if id.is_empty() {
                Vec::new()
            } else {
                entries.values_mut().filter(|r| r.id.starts_with(id)).collect()
            };
            if matches.len() > 1 {
                if let Some(pos) = matches.iter().position(|r| r.id == id) {
                    matches.swap(0, pos);
                    matches.truncate(1);
                } else {
                    return Err(StoreError::Ambiguous(id.to_string(), matches.len()).into());
                }
            }
            let record = matches
                .pop()
                .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
            record.label = label;
            record.id.clone()
        };
        debug!(id = %full_id, "quote label updated");
        self.persist()?;
        Ok(full_id)
    }
}

impl QuoteHistoryRepository for FileQuoteHistoryRepository {
    fn save(&self, record: &QuoteRecord) -> std::result::Result<(), Error> {
        self.entries
            .borrow_mut()
            .insert(record.fingerprint.clone(), record.clone());
        self.persist()
    }

    fn find_by_id(&self, id: &str) -> std::result::Result<Option<QuoteRecord>, Error> {
        Ok(self.entries.borrow().values().find(|r| r.id == id).cloned())
    }

    fn find_by_fingerprint(
        &self,
        fingerprint: &str,
    ) -> std::result::Result<Option<QuoteRecord>, Error> {
        Ok(self.entries.borrow().get(fingerprint).cloned())
    }

    fn find_all(&self) -> std::result::Result<Vec<QuoteRecord>, Error> {
        Ok(self.all_entries())
    }

    fn clear(&self) -> std::result::Result<usize, Error> {
        let removed = {
            let mut entries = self.entries.borrow_mut();
            let removed = entries.len();
            entries.clear();
            removed
        };
        self.persist()?;
        Ok(removed)
    }
}
