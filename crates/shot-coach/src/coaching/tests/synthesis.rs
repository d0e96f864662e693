use super::common::*;
use crate::coaching::domain::Severity;
use crate::coaching::MAX_REPORT_DRILLS;

#[test]
fn empty_set_returns_maintenance_report() {
    let engine = test_engine();

    let report = engine.synthesize(&flaw_set(&[]));

    assert_eq!(report.primary_issue, "No significant flaws detected");
    assert!(!report.cause_and_effect.is_empty());
    assert!(!report.fix_order.is_empty());
    assert!(!report.drills.is_empty());
    assert!(report.drills.len() <= MAX_REPORT_DRILLS);
    assert!(report.combination.is_none());
    assert!(report.secondary_issues.is_empty());
}

#[test]
fn unknown_ids_alone_return_maintenance_report() {
    let engine = test_engine();

    let report = engine.synthesize(&flaw_set(&["GHOST"]));

    assert_eq!(report, engine.synthesize(&flaw_set(&[])));
}

#[test]
fn highest_priority_flaw_leads_the_report() {
    let engine = test_engine();

    let report = engine.synthesize(&flaw_set(&["ALPHA", "CHARLIE", "BRAVO"]));

    assert_eq!(report.primary_issue, "BRAVO name");
    assert_eq!(
        report.secondary_issues,
        vec!["ALPHA name".to_string(), "CHARLIE name".to_string()]
    );
}

#[test]
fn priority_ties_keep_input_order() {
    let engine = test_engine();

    let charlie_first = engine.synthesize(&flaw_set(&["CHARLIE", "ALPHA"]));
    let alpha_first = engine.synthesize(&flaw_set(&["ALPHA", "CHARLIE"]));

    assert_eq!(charlie_first.primary_issue, "CHARLIE name");
    assert_eq!(alpha_first.primary_issue, "ALPHA name");
}

#[test]
fn cause_chain_renders_numbered_lines_in_stored_order() {
    let engine = test_engine();

    let report = engine.synthesize(&flaw_set(&["ALPHA"]));

    assert_eq!(
        report.cause_and_effect,
        "1. ALPHA first effect: ALPHA first explanation\n\
         2. ALPHA second effect: ALPHA second explanation"
    );
    assert_eq!(report.fix_order, vec!["ALPHA fix 1", "ALPHA fix 2"]);
    assert_eq!(report.severity, Some(Severity::Major));
}

#[test]
fn combination_narrative_and_fix_come_first() {
    let engine = test_engine();

    let report = engine.synthesize(&flaw_set(&["ALPHA", "BRAVO"]));

    assert!(report
        .cause_and_effect
        .starts_with("Alpha and bravo amplify each other.\n\n1. BRAVO first effect"));
    assert_eq!(
        report.fix_order,
        vec!["Fix bravo before alpha", "BRAVO fix 1", "BRAVO fix 2"]
    );
    assert_eq!(
        report.combination.as_deref(),
        Some("Shot collapses under pressure.")
    );
}

#[test]
fn drills_follow_priority_order_and_are_capped() {
    let engine = test_engine();

    let report = engine.synthesize(&flaw_set(&["BRAVO", "ALPHA", "CHARLIE", "DELTA"]));

    assert_eq!(
        report.drills,
        vec!["Drill 5", "Drill 6", "Drill 7", "Drill 2", "Drill 3"]
    );
    assert_eq!(report.drills.len(), MAX_REPORT_DRILLS);
}

#[test]
fn shared_drills_are_listed_once() {
    let engine = test_engine();

    let overlapping = engine.synthesize(&flaw_set(&["ALPHA", "BRAVO"]));
    assert_eq!(overlapping.drills, vec!["Drill 2", "Drill 3", "Drill 1"]);

    let identical = engine.synthesize(&flaw_set(&["MAX_1", "MAX_2", "MAX_3"]));
    assert_eq!(identical.drills, vec!["Shared drill"]);
}

#[test]
fn synthesis_is_deterministic() {
    let engine = test_engine();
    let flaws = flaw_set(&["DELTA", "CHARLIE", "ALPHA", "BRAVO"]);

    assert_eq!(engine.synthesize(&flaws), engine.synthesize(&flaws));
}
