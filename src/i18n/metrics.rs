//! Translation observability: lookup and store counters.
//!
//! Missing translations are skipped silently at the call site, so these
//! counters are the only runtime signal of how often the catalog
//! actually covered the page. Counters use relaxed atomics; they are
//! only ever incremented from the UI path and read for reporting.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Counters for catalog lookups and preference-store traffic.
pub struct TranslationMetrics {
    /// Lookups that found a localized text and replaced element content
    lookup_hits: AtomicUsize,

    /// Lookups that found nothing and left element content untouched
    lookup_misses: AtomicUsize,

    /// Successful preference writes
    store_writes: AtomicUsize,

    /// Failed preference reads or writes (degraded to warnings)
    store_failures: AtomicUsize,
}

static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// Get the global metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(TranslationMetrics::new)
    }

    /// A fresh, zeroed counter set. The process normally uses
    /// [`TranslationMetrics::global`]; standalone instances exist for
    /// tests that assert exact counts.
    pub fn new() -> TranslationMetrics {
        TranslationMetrics {
            lookup_hits: AtomicUsize::new(0),
            lookup_misses: AtomicUsize::new(0),
            store_writes: AtomicUsize::new(0),
            store_failures: AtomicUsize::new(0),
        }
    }

    pub fn record_lookup_hit(&self) {
        self.lookup_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_lookup_miss(&self) {
        self.lookup_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_store_write(&self) {
        self.store_writes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_store_failure(&self) {
        self.store_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookup_hits(&self) -> usize {
        self.lookup_hits.load(Ordering::Relaxed)
    }

    pub fn lookup_misses(&self) -> usize {
        self.lookup_misses.load(Ordering::Relaxed)
    }

    pub fn store_writes(&self) -> usize {
        self.store_writes.load(Ordering::Relaxed)
    }

    pub fn store_failures(&self) -> usize {
        self.store_failures.load(Ordering::Relaxed)
    }

    /// Generate a point-in-time report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.lookup_hits();
        let misses = self.lookup_misses();
        let total = hits + misses;
        let coverage = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookup_hits: hits,
            lookup_misses: misses,
            lookup_coverage: coverage,
            store_writes: self.store_writes(),
            store_failures: self.store_failures(),
        }
    }
}

impl Default for TranslationMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable snapshot of the counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub lookup_hits: usize,
    pub lookup_misses: usize,
    /// Share of lookups that found a localized text, in percent
    pub lookup_coverage: f64,
    pub store_writes: usize,
    pub store_failures: usize,
}
