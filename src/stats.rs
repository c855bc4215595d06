use lazy_static::lazy_static;
use metrics::{counter, gauge, Counter, Gauge};
use std::sync::atomic::{AtomicI64, Ordering};

lazy_static! {
    pub static ref GLOBAL_STATS: Stats = Stats::new();
}

pub struct Stats {
    pub validator_creations: Counter,
    pub validator_deletions: Counter,

    // Count of live validators. The actual count is calculated with an atomic
    // since some metrics exporters don't supporting incrementing gauges (e.g. statsd)
    total_validators_count: AtomicI64,
    total_validators: Gauge,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            validator_creations: counter!("document_validator.creations"),
            validator_deletions: counter!("document_validator.deletions"),
            total_validators_count: AtomicI64::new(0),
            total_validators: gauge!("document_validator.total_count"),
        }
    }

    pub fn increment_total_validators(&self) {
        self.update_total_validators(1);
    }

    pub fn decrement_total_validators(&self) {
        self.update_total_validators(-1);
    }

    fn update_total_validators(&self, delta: i64) {
        let prev_value = self
            .total_validators_count
            .fetch_add(delta, Ordering::SeqCst);
        self.total_validators.set((prev_value + delta) as f64);
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}
