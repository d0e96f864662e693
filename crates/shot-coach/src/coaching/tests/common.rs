use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::coaching::catalog::FlawCatalog;
use crate::coaching::domain::{
    CauseEffect, Comparison, DetectionRule, Flaw, FlawCombination, FlawId, FlawSet,
    RuleCondition, ScoreRange, Severity, ShooterLevel,
};
use crate::coaching::CoachingEngine;

pub(super) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub(super) fn flaw_set(ids: &[&str]) -> FlawSet {
    ids.iter().map(|&id| FlawId::from(id)).collect()
}

pub(super) fn flaw(id: &str, priority: u8, rule: DetectionRule, drills: &[&str]) -> Flaw {
    Flaw {
        id: FlawId::from(id),
        name: format!("{id} name"),
        category: "test".to_string(),
        description: String::new(),
        detection_rule: rule,
        cause_chain: vec![
            CauseEffect {
                effect: format!("{id} first effect"),
                explanation: format!("{id} first explanation"),
                severity: Severity::Minor,
            },
            CauseEffect {
                effect: format!("{id} second effect"),
                explanation: format!("{id} second explanation"),
                severity: Severity::Major,
            },
        ],
        symptoms: Vec::new(),
        fixes: vec![format!("{id} fix 1"), format!("{id} fix 2")],
        drills: strings(drills),
        priority,
        related_flaws: Vec::new(),
    }
}

pub(super) fn level(rank: u8, name: &str, low: u8, high: u8) -> ShooterLevel {
    ShooterLevel {
        level: rank,
        name: name.to_string(),
        score_range: ScoreRange::new(low, high),
        description: String::new(),
        characteristics: Vec::new(),
    }
}

pub(super) fn test_flaws() -> Vec<Flaw> {
    vec![
        flaw(
            "ALPHA",
            5,
            DetectionRule::numeric("elbow_angle", Comparison::LessThan, 70.0),
            &["Drill 1", "Drill 2"],
        ),
        flaw(
            "BRAVO",
            8,
            DetectionRule::numeric("knee_angle", Comparison::GreaterThan, 150.0),
            &["Drill 2", "Drill 3"],
        ),
        flaw(
            "CHARLIE",
            5,
            DetectionRule::qualitative("guide_hand", RuleCondition::ForwardMotion, "any"),
            &["Drill 4", "Drill 1"],
        ),
        flaw(
            "DELTA",
            10,
            DetectionRule::numeric("left_wrist_angle", Comparison::GreaterThan, 30.0),
            &["Drill 5", "Drill 6", "Drill 7"],
        ),
    ]
}

pub(super) fn saturating_flaws() -> Vec<Flaw> {
    (1..=5)
        .map(|index| {
            flaw(
                &format!("MAX_{index}"),
                10,
                DetectionRule::numeric(format!("metric_{index}"), Comparison::GreaterThan, 0.0),
                &["Shared drill"],
            )
        })
        .collect()
}

pub(super) fn test_combinations() -> Vec<FlawCombination> {
    vec![FlawCombination {
        flaw_ids: vec![FlawId::from("ALPHA"), FlawId::from("BRAVO")],
        combined_effect: "Alpha and bravo amplify each other.".to_string(),
        overall_impact: "Shot collapses under pressure.".to_string(),
        primary_fix: "Fix bravo before alpha".to_string(),
    }]
}

pub(super) fn test_levels() -> Vec<ShooterLevel> {
    vec![
        level(1, "TOP", 80, 100),
        level(2, "MIDDLE", 40, 79),
        level(3, "BOTTOM", 0, 39),
    ]
}

pub(super) fn test_catalog() -> FlawCatalog {
    let mut flaws = test_flaws();
    flaws.extend(saturating_flaws());
    FlawCatalog::new(flaws, test_combinations(), test_levels()).expect("test catalog is valid")
}

pub(super) fn test_engine() -> CoachingEngine {
    CoachingEngine::new(test_catalog())
}

pub(super) fn shared_engine() -> Arc<CoachingEngine> {
    Arc::new(test_engine())
}

pub(super) fn standard_engine() -> CoachingEngine {
    CoachingEngine::new(FlawCatalog::standard().expect("standard catalog is valid"))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
