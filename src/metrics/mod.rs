//! Prometheus metrics for password generation runs.
//!
//! # Metrics Exposed
//!
//! - `entropass_passwords_generated_total` - Passwords generated
//! - `entropass_full_coverage_total` - Passwords containing every class
//! - `entropass_best_effort_total` - Passwords too short for every class
//! - `entropass_substitutions_total` - Characters replaced while strengthening
//! - `entropass_duplicate_resamples_total` - Characters redrawn by duplicate repair
//! - `entropass_rng_draws` - Draws served by the random source
//! - `entropass_last_entropy_bits` - Entropy of the most recent password
//!
//! # Example
//!
//! ```
//! use entropass::metrics::{MetricsRegistry, MetricsSnapshot};
//!
//! let registry = MetricsRegistry::new().expect("Failed to create registry");
//!
//! let snapshot = MetricsSnapshot {
//!     passwords_generated: 100,
//!     full_coverage: 100,
//!     substitutions: 37,
//!     ..Default::default()
//! };
//!
//! registry.update(&snapshot);
//! assert!(registry.encode().unwrap().contains("entropass_passwords_generated_total 100"));
//! ```

mod collector;

pub use collector::{MetricsError, MetricsRegistry, MetricsSnapshot};
