//! Repository adapters for persistence layer

use errand_infra::persistence::FileQuoteHistoryRepository;
use errand_types::Result;

use crate::app::QuoteService;
use crate::config::Config;

/// Open file-based quote history repository
pub fn open_history_repo(config: &Config) -> Result<FileQuoteHistoryRepository> {
    let store_dir = config.store_dir()?;
    FileQuoteHistoryRepository::open(store_dir)
}

/// Build the quote service the configuration describes
pub fn open_quote_service(config: &Config) -> Result<QuoteService> {
    let table = config.pricing_table()?;
    if config.history_enabled {
        let repo = open_history_repo(config)?;
        Ok(QuoteService::with_history(table, Box::new(repo)))
    } else {
        Ok(QuoteService::new(table))
    }
}
