use serde::{Deserialize, Serialize};
use tracing::warn;

use super::catalog::FlawCatalog;
use super::combination::resolve_combination;
use super::domain::{FlawId, FlawSet};

/// Points deducted per unit of flaw priority.
pub const PRIORITY_WEIGHT: u32 = 2;
/// Flat deduction added when the flaw set matches a known combination.
pub const COMBINATION_BONUS: u32 = 10;
/// Ceiling on the total deduction; a full deduction from 100 never drops below 30.
pub const MAX_DEDUCTION: u32 = 70;
/// Score an analysis starts from before deductions.
pub const BASE_SCORE: u32 = 100;

/// Deduction attributed to a single flaw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactComponent {
    pub flaw: FlawId,
    pub priority: u8,
    pub points: u32,
}

/// Audit trail for an impact deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactBreakdown {
    pub components: Vec<ImpactComponent>,
    pub combination_bonus: u32,
    pub raw_total: u32,
    pub deduction: u32,
    pub capped: bool,
}

impl ImpactBreakdown {
    pub fn final_score(&self) -> u32 {
        final_score(self.deduction)
    }
}

/// `100 - deduction`, saturating at zero for deductions from other sources.
pub fn final_score(deduction: u32) -> u32 {
    BASE_SCORE.saturating_sub(deduction)
}

pub(crate) fn score_breakdown(catalog: &FlawCatalog, flaws: &FlawSet) -> ImpactBreakdown {
    let mut components = Vec::with_capacity(flaws.len());

    for id in flaws {
        match catalog.flaw(id) {
            Some(flaw) => components.push(ImpactComponent {
                flaw: id.clone(),
                priority: flaw.priority,
                points: u32::from(flaw.priority) * PRIORITY_WEIGHT,
            }),
            None => warn!(flaw = %id, "unknown flaw ignored while scoring"),
        }
    }

    let combination_bonus = if resolve_combination(catalog, flaws).is_some() {
        COMBINATION_BONUS
    } else {
        0
    };

    let raw_total = components
        .iter()
        .map(|component| component.points)
        .sum::<u32>()
        + combination_bonus;
    let deduction = raw_total.min(MAX_DEDUCTION);

    ImpactBreakdown {
        components,
        combination_bonus,
        raw_total,
        deduction,
        capped: raw_total > MAX_DEDUCTION,
    }
}
