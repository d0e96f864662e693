//! Biomechanical flaw detection and coaching synthesis.
//!
//! Pipeline: measurements are checked against each catalog rule
//! ([`CoachingEngine::detect`]), the resulting flaw set is matched against
//! known combinations and converted into a capped score deduction, and the
//! highest-priority flaw drives the coaching narrative. A separate call maps
//! any 0-100 score onto a shooter level.
//!
//! Every stage is a pure function of its input and an immutable
//! [`FlawCatalog`] snapshot.

pub mod catalog;
mod combination;
mod detection;
pub mod domain;
mod engine;
pub mod import;
mod levels;
pub mod router;
mod scoring;
mod synthesis;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogDocument, CatalogError, CatalogLoadError, CatalogStore, FlawCatalog};
pub use domain::{
    CauseEffect, CoachingReport, Comparison, DetectionRule, Flaw, FlawCombination, FlawId,
    FlawSet, Measurements, RawThreshold, RuleCondition, ScoreRange, Severity, ShooterLevel,
};
pub use engine::{CoachingEngine, ShotAnalysis};
pub use import::{MeasurementImportError, MeasurementImporter};
pub use router::coaching_router;
pub use scoring::{
    final_score, ImpactBreakdown, ImpactComponent, BASE_SCORE, COMBINATION_BONUS, MAX_DEDUCTION,
    PRIORITY_WEIGHT,
};
pub use synthesis::MAX_REPORT_DRILLS;
