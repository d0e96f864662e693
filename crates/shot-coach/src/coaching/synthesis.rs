use tracing::warn;

use super::catalog::FlawCatalog;
use super::combination::resolve_combination;
use super::domain::{CauseEffect, CoachingReport, Flaw, FlawSet};

/// Upper bound on drills handed to a shooter in one report.
pub const MAX_REPORT_DRILLS: usize = 5;

const NO_FLAWS_ISSUE: &str = "No significant flaws detected";
const NO_FLAWS_NARRATIVE: &str =
    "Your measured mechanics are within the expected ranges. Keep reinforcing the same routine so it holds up under fatigue and game speed.";
const NO_FLAWS_FIX: &str = "Maintain current form with consistent, game-speed repetitions";
const MAINTENANCE_DRILLS: [&str; 4] = [
    "Form shooting close to the basket",
    "Free throw routine",
    "Catch-and-shoot spot shooting",
    "Game-speed shooting off movement",
];

pub(crate) fn synthesize_report(catalog: &FlawCatalog, flaws: &FlawSet) -> CoachingReport {
    let mut resolved: Vec<&Flaw> = flaws
        .iter()
        .filter_map(|id| {
            let flaw = catalog.flaw(id);
            if flaw.is_none() {
                warn!(flaw = %id, "unknown flaw ignored while synthesizing report");
            }
            flaw
        })
        .collect();

    // `sort_by` is stable: equal priorities keep detection order.
    resolved.sort_by(|a, b| b.priority.cmp(&a.priority));

    let Some(primary) = resolved.first().copied() else {
        return no_flaws_report();
    };

    let combination = resolve_combination(catalog, flaws);

    let chain = render_cause_chain(&primary.cause_chain);
    let cause_and_effect = match combination {
        Some(combination) if chain.is_empty() => combination.combined_effect.clone(),
        Some(combination) => format!("{}\n\n{}", combination.combined_effect, chain),
        None => chain,
    };

    let mut fix_order = Vec::with_capacity(primary.fixes.len() + 1);
    if let Some(combination) = combination {
        fix_order.push(combination.primary_fix.clone());
    }
    fix_order.extend(primary.fixes.iter().cloned());

    let drills = collect_drills(&resolved);

    CoachingReport {
        primary_issue: primary.name.clone(),
        cause_and_effect,
        fix_order,
        drills,
        secondary_issues: resolved[1..].iter().map(|flaw| flaw.name.clone()).collect(),
        combination: combination.map(|combination| combination.overall_impact.clone()),
        severity: primary.peak_severity(),
    }
}

/// Numbered `effect: explanation` lines in stored order.
fn render_cause_chain(chain: &[CauseEffect]) -> String {
    chain
        .iter()
        .enumerate()
        .map(|(position, link)| format!("{}. {}: {}", position + 1, link.effect, link.explanation))
        .collect::<Vec<_>>()
        .join("\n")
}

fn collect_drills(flaws: &[&Flaw]) -> Vec<String> {
    let mut drills: Vec<String> = Vec::with_capacity(MAX_REPORT_DRILLS);

    for drill in flaws.iter().flat_map(|flaw| flaw.drills.iter()) {
        if drills.len() == MAX_REPORT_DRILLS {
            break;
        }
        if !drills.contains(drill) {
            drills.push(drill.clone());
        }
    }

    drills
}

fn no_flaws_report() -> CoachingReport {
    CoachingReport {
        primary_issue: NO_FLAWS_ISSUE.to_string(),
        cause_and_effect: NO_FLAWS_NARRATIVE.to_string(),
        fix_order: vec![NO_FLAWS_FIX.to_string()],
        drills: MAINTENANCE_DRILLS
            .iter()
            .map(|drill| drill.to_string())
            .collect(),
        secondary_issues: Vec::new(),
        combination: None,
        severity: None,
    }
}
