//! Quoting use cases
//!
//! Wraps the pure calculators with request options (client estimate, tip,
//! label), record creation, and optional history persistence.

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use errand_domain::model::{
    GeoPoint, MultiStopFactors, PriceFactors, PricingTable, Quote, QuoteRecord, RouteEstimate,
    ShoppingFactors,
};
use errand_domain::repository::QuoteHistoryRepository;
use errand_domain::service::{
    calculate_errand_price, calculate_multi_stop_price, calculate_shopping_price,
    current_time_condition, estimate_route, verify_client_price,
};
use errand_infra::persistence::fingerprint;
use errand_infra::quote_csv::{BatchLoad, BatchRow};
use errand_types::{Result, TimeCondition};

/// Per-request options outside the pricing factors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteOptions {
    /// Price the requester's screen showed
    pub client_price: Option<i64>,
    pub tip: i64,
    pub label: Option<String>,
}

impl QuoteOptions {
    fn wants_verification(&self) -> bool {
        self.client_price.is_some() || self.tip != 0
    }
}

/// One priced batch row
#[derive(Debug, Clone, PartialEq)]
pub struct BatchQuote {
    pub row: BatchRow,
    pub quote: Quote,
}

/// Quote service bound to one rate card
pub struct QuoteService {
    table: PricingTable,
    history: Option<Box<dyn QuoteHistoryRepository>>,
}

impl QuoteService {
    /// Service without history
    pub fn new(table: PricingTable) -> Self {
        Self {
            table,
            history: None,
        }
    }

    /// Service that records every quote
    pub fn with_history(table: PricingTable, history: Box<dyn QuoteHistoryRepository>) -> Self {
        Self {
            table,
            history: Some(history),
        }
    }

    pub fn table(&self) -> &PricingTable {
        &self.table
    }

    pub fn records_history(&self) -> bool {
        self.history.is_some()
    }

    /// Quote a single-leg delivery
    pub fn quote_errand(&self, factors: PriceFactors, options: &QuoteOptions) -> Result<QuoteRecord> {
        let breakdown = calculate_errand_price(&factors, &self.table);
        debug!(?factors, total = breakdown.total_price, "errand priced");
        self.record(Quote::Errand { factors, breakdown }, options)
    }

    /// Quote a delivery with several drop-offs
    pub fn quote_multi_stop(
        &self,
        factors: MultiStopFactors,
        options: &QuoteOptions,
    ) -> Result<QuoteRecord> {
        let breakdown = calculate_multi_stop_price(&factors, &self.table);
        debug!(?factors, total = breakdown.total_price, "multi-stop errand priced");
        self.record(Quote::MultiStop { factors, breakdown }, options)
    }

    /// Quote a purchase-on-behalf errand
    pub fn quote_shopping(
        &self,
        factors: ShoppingFactors,
        options: &QuoteOptions,
    ) -> Result<QuoteRecord> {
        let breakdown = calculate_shopping_price(&factors, &self.table);
        debug!(?factors, total = breakdown.total_price, "shopping errand priced");
        self.record(Quote::Shopping { factors, breakdown }, options)
    }

    /// Price every parsed row; rows are not written to history
    pub fn quote_batch(&self, batch: &BatchLoad) -> Vec<BatchQuote> {
        if !batch.rejected.is_empty() {
            warn!(rejected = batch.rejected.len(), "batch contains unparseable rows");
        }
        batch
            .rows
            .iter()
            .map(|row| {
                let quote = match row.stops {
                    Some(total_stops) => {
                        let factors = MultiStopFactors {
                            factors: row.factors,
                            total_stops,
                        };
                        Quote::MultiStop {
                            factors,
                            breakdown: calculate_multi_stop_price(&factors, &self.table),
                        }
                    }
                    None => Quote::Errand {
                        factors: row.factors,
                        breakdown: calculate_errand_price(&row.factors, &self.table),
                    },
                };
                BatchQuote {
                    row: row.clone(),
                    quote,
                }
            })
            .collect()
    }

    /// Estimate the road leg between two points
    pub fn route(&self, from: &GeoPoint, to: &GeoPoint) -> RouteEstimate {
        estimate_route(from, to, &self.table)
    }

    /// Time band now, in KST
    pub fn time_condition(&self) -> TimeCondition {
        current_time_condition()
    }

    /// Recent quotes, newest first
    pub fn history(&self, limit: usize) -> Result<Vec<QuoteRecord>> {
        match self.history {
            Some(ref repo) => Ok(repo.find_all()?.into_iter().take(limit).collect()),
            None => Ok(Vec::new()),
        }
    }

    fn record(&self, quote: Quote, options: &QuoteOptions) -> Result<QuoteRecord> {
        let verification = options.wants_verification().then(|| {
            verify_client_price(options.client_price, quote.total_price(), options.tip, &self.table)
        });
        if let Some(v) = verification.filter(|v| !v.within_tolerance) {
            warn!(
                client = v.client_price,
                server = v.server_price,
                "client price outside tolerance, using server price"
            );
        }

        let record = QuoteRecord {
            id: Uuid::new_v4().to_string(),
            fingerprint: fingerprint(&quote)?,
            quote,
            verification,
            label: options.label.clone(),
            quoted_at: Utc::now(),
        };

        if let Some(ref repo) = self.history {
            repo.save(&record)?;
        }
        info!(
            id = %record.id,
            kind = record.quote.kind(),
            total = record.quote.total_price(),
            final_price = record.final_price(),
            "quote issued"
        );
        Ok(record)
    }
}
