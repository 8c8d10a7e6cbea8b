//! `powersum-recon`: checker for equal-sums-of-powers solution sets.
//!
//! Pure engine crate: receives pre-loaded record and reference text, returns
//! a validation report and a reconciliation against the reference sums.
//! No CLI, network or terminal dependencies.

pub mod config;
pub mod engine;
pub mod error;
pub mod evidence;
pub mod model;
pub mod parse;
pub mod reconcile;
pub mod validate;

pub use config::CheckConfig;
pub use engine::run;
pub use error::CheckError;
pub use model::{CheckReport, ReconciliationResult, SolutionRecord, SumSet, ValidationReport};
pub use reconcile::reconcile;
pub use validate::{validate, validate_all};
