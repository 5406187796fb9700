//! Metrics collection and registry.

use crate::strengthening::{Coverage, DedupReport, StrengthenReport};
use prometheus::{Encoder, Gauge, IntCounter, IntGauge, Registry, TextEncoder};
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Registration or encoding failed.
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}

/// A running tally of generation activity.
#[derive(Debug, Clone, Default)]
pub struct MetricsSnapshot {
    /// Passwords generated.
    pub passwords_generated: u64,
    /// Passwords that reached every class.
    pub full_coverage: u64,
    /// Passwords left at best-effort coverage.
    pub best_effort: u64,
    /// Characters replaced by the strengthening engine.
    pub substitutions: u64,
    /// Characters redrawn by the duplicate resolver.
    pub duplicate_resamples: u64,
    /// Draws served by the random source.
    pub rng_draws: u64,
    /// Entropy of the most recent password.
    pub last_entropy_bits: Option<f64>,
}

impl MetricsSnapshot {
    /// Records one generated password.
    pub fn record_generation(&mut self, report: &StrengthenReport, entropy_bits: f64) {
        self.passwords_generated += 1;
        self.substitutions += report.substitutions as u64;
        match report.coverage {
            Coverage::Full => self.full_coverage += 1,
            Coverage::BestEffort { .. } => self.best_effort += 1,
        }
        self.last_entropy_bits = Some(entropy_bits);
    }

    /// Records one duplicate removal run.
    pub fn record_dedup(&mut self, report: &DedupReport) {
        self.duplicate_resamples += report.resamples as u64;
    }
}

/// Prometheus metrics registry for password generation.
pub struct MetricsRegistry {
    registry: Registry,

    // Generation
    passwords_generated_total: IntCounter,
    full_coverage_total: IntCounter,
    best_effort_total: IntCounter,

    // Mutation
    substitutions_total: IntCounter,
    duplicate_resamples_total: IntCounter,

    // Random source
    rng_draws: IntGauge,

    last_entropy_bits: Gauge,
}

impl MetricsRegistry {
    /// Creates a new registry with all metrics registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let passwords_generated_total = IntCounter::new(
            "entropass_passwords_generated_total",
            "Total number of passwords generated",
        )?;
        let full_coverage_total = IntCounter::new(
            "entropass_full_coverage_total",
            "Passwords that contain every character class",
        )?;
        let best_effort_total = IntCounter::new(
            "entropass_best_effort_total",
            "Passwords too short to contain every character class",
        )?;

        let substitutions_total = IntCounter::new(
            "entropass_substitutions_total",
            "Characters replaced while strengthening",
        )?;
        let duplicate_resamples_total = IntCounter::new(
            "entropass_duplicate_resamples_total",
            "Characters redrawn to break adjacent duplicates",
        )?;

        let rng_draws = IntGauge::new(
            "entropass_rng_draws",
            "Draws served by the random source",
        )?;
        let last_entropy_bits = Gauge::new(
            "entropass_last_entropy_bits",
            "Entropy estimate of the most recent password in bits",
        )?;

        registry.register(Box::new(passwords_generated_total.clone()))?;
        registry.register(Box::new(full_coverage_total.clone()))?;
        registry.register(Box::new(best_effort_total.clone()))?;
        registry.register(Box::new(substitutions_total.clone()))?;
        registry.register(Box::new(duplicate_resamples_total.clone()))?;
        registry.register(Box::new(rng_draws.clone()))?;
        registry.register(Box::new(last_entropy_bits.clone()))?;

        Ok(Self {
            registry,
            passwords_generated_total,
            full_coverage_total,
            best_effort_total,
            substitutions_total,
            duplicate_resamples_total,
            rng_draws,
            last_entropy_bits,
        })
    }

    /// Updates all metrics from a snapshot.
    pub fn update(&self, snapshot: &MetricsSnapshot) {
        // Counters only move forward, by the difference to the snapshot
        advance(&self.passwords_generated_total, snapshot.passwords_generated);
        advance(&self.full_coverage_total, snapshot.full_coverage);
        advance(&self.best_effort_total, snapshot.best_effort);
        advance(&self.substitutions_total, snapshot.substitutions);
        advance(&self.duplicate_resamples_total, snapshot.duplicate_resamples);

        self.rng_draws.set(snapshot.rng_draws as i64);

        if let Some(bits) = snapshot.last_entropy_bits {
            self.last_entropy_bits.set(bits);
        }
    }

    /// Encodes all metrics in Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

fn advance(counter: &IntCounter, target: u64) {
    let current = counter.get();
    if target > current {
        counter.inc_by(target - current);
    }
}
