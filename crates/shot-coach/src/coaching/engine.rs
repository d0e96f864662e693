use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::catalog::{CatalogStore, FlawCatalog};
use super::combination::resolve_combination;
use super::detection::detect_flaws;
use super::domain::{CoachingReport, FlawCombination, FlawSet, Measurements, ShooterLevel};
use super::levels::classify_score;
use super::scoring::{score_breakdown, ImpactBreakdown};
use super::synthesis::synthesize_report;

/// Stateless facade over every coaching stage.
///
/// Each call reads one catalog snapshot from the store, so a concurrent
/// [`CoachingEngine::reload`] is observed either entirely or not at all.
#[derive(Debug)]
pub struct CoachingEngine {
    store: CatalogStore,
}

impl CoachingEngine {
    pub fn new(catalog: FlawCatalog) -> Self {
        Self {
            store: CatalogStore::new(catalog),
        }
    }

    pub fn catalog(&self) -> Arc<FlawCatalog> {
        self.store.snapshot()
    }

    /// Swap in a new, already validated catalog.
    pub fn reload(&self, catalog: FlawCatalog) {
        let flaws = catalog.flaws().len();
        let previous = self.store.replace(catalog);
        info!(
            previous_flaws = previous.flaws().len(),
            flaws, "flaw catalog replaced"
        );
    }

    pub fn detect(&self, measurements: &Measurements) -> FlawSet {
        detect_flaws(&self.store.snapshot(), measurements)
    }

    pub fn resolve_combination(&self, flaws: &FlawSet) -> Option<FlawCombination> {
        resolve_combination(&self.store.snapshot(), flaws).cloned()
    }

    /// Total point deduction for `flaws`, capped at [`super::MAX_DEDUCTION`].
    pub fn score_impact(&self, flaws: &FlawSet) -> u32 {
        self.impact_breakdown(flaws).deduction
    }

    pub fn impact_breakdown(&self, flaws: &FlawSet) -> ImpactBreakdown {
        score_breakdown(&self.store.snapshot(), flaws)
    }

    pub fn classify(&self, score: f64) -> ShooterLevel {
        classify_score(&self.store.snapshot(), score).clone()
    }

    pub fn synthesize(&self, flaws: &FlawSet) -> CoachingReport {
        synthesize_report(&self.store.snapshot(), flaws)
    }

    /// Run detection, scoring, classification and synthesis in one pass.
    pub fn analyze(&self, measurements: &Measurements) -> ShotAnalysis {
        let catalog = self.store.snapshot();

        let detected = detect_flaws(&catalog, measurements);
        let combination = resolve_combination(&catalog, &detected).cloned();
        let impact = score_breakdown(&catalog, &detected);
        let final_score = impact.final_score();
        let level = classify_score(&catalog, f64::from(final_score)).clone();
        let report = synthesize_report(&catalog, &detected);

        ShotAnalysis {
            detected,
            combination,
            impact,
            final_score,
            level,
            report,
        }
    }
}

/// Full result of [`CoachingEngine::analyze`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotAnalysis {
    pub detected: FlawSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combination: Option<FlawCombination>,
    pub impact: ImpactBreakdown,
    pub final_score: u32,
    pub level: ShooterLevel,
    pub report: CoachingReport,
}
