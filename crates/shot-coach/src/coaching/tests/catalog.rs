use std::io::Cursor;

use super::common::*;
use crate::coaching::catalog::{CatalogError, CatalogLoadError, FlawCatalog};
use crate::coaching::domain::{
    Comparison, DetectionRule, FlawCombination, FlawId, Measurements, RuleCondition, ScoreRange,
};

fn build(
    flaws: Vec<crate::coaching::domain::Flaw>,
    combinations: Vec<FlawCombination>,
    levels: Vec<crate::coaching::domain::ShooterLevel>,
) -> Result<FlawCatalog, CatalogError> {
    FlawCatalog::new(flaws, combinations, levels)
}

fn pair(first: &str, second: &str) -> FlawCombination {
    FlawCombination {
        flaw_ids: vec![FlawId::from(first), FlawId::from(second)],
        combined_effect: "effect".to_string(),
        overall_impact: "impact".to_string(),
        primary_fix: "fix".to_string(),
    }
}

#[test]
fn standard_catalog_is_consistent() {
    let catalog = FlawCatalog::standard().expect("standard catalog validates");

    assert_eq!(catalog.levels().len(), 8);
    assert_eq!(catalog.levels()[0].level, 1);
    assert_eq!(catalog.lowest_level().name, "BEGINNER");
    for id in ["ELBOW_ANGLE_ACUTE", "ELBOW_FLARE", "GUIDE_HAND_PUSH"] {
        assert!(catalog.flaw(&FlawId::from(id)).is_some(), "{id} missing");
    }
    assert!(catalog
        .flaws()
        .iter()
        .all(|flaw| !flaw.fixes.is_empty() && !flaw.cause_chain.is_empty()));
}

#[test]
fn rejects_duplicate_flaw_ids() {
    let mut flaws = test_flaws();
    flaws.push(flaws[0].clone());

    let error = build(flaws, Vec::new(), test_levels()).expect_err("duplicate id");

    assert_eq!(error, CatalogError::DuplicateFlawId(FlawId::from("ALPHA")));
}

#[test]
fn rejects_priority_outside_one_to_ten() {
    for priority in [0, 11] {
        let mut flaws = test_flaws();
        flaws[1].priority = priority;

        let error = build(flaws, Vec::new(), test_levels()).expect_err("bad priority");

        assert_eq!(
            error,
            CatalogError::PriorityOutOfRange {
                flaw: FlawId::from("BRAVO"),
                priority,
            }
        );
    }
}

#[test]
fn rejects_fixes_without_cause_chain() {
    let mut flaws = test_flaws();
    flaws[2].cause_chain.clear();

    let error = build(flaws.clone(), Vec::new(), test_levels()).expect_err("missing chain");
    assert_eq!(error, CatalogError::MissingCauseChain(FlawId::from("CHARLIE")));

    flaws[2].fixes.clear();
    assert!(build(flaws, Vec::new(), test_levels()).is_ok());
}

#[test]
fn rejects_malformed_combinations() {
    let unknown = build(test_flaws(), vec![pair("ALPHA", "ZULU")], test_levels())
        .expect_err("unknown flaw");
    assert_eq!(
        unknown,
        CatalogError::UnknownCombinationFlaw {
            index: 0,
            flaw: FlawId::from("ZULU"),
        }
    );

    let repeated = build(test_flaws(), vec![pair("ALPHA", "ALPHA")], test_levels())
        .expect_err("repeated flaw");
    assert!(matches!(
        repeated,
        CatalogError::CombinationRepeatsFlaw { index: 0, .. }
    ));

    let mut single = pair("ALPHA", "BRAVO");
    single.flaw_ids.pop();
    let too_small =
        build(test_flaws(), vec![single], test_levels()).expect_err("single flaw combination");
    assert_eq!(
        too_small,
        CatalogError::CombinationTooSmall { index: 0, size: 1 }
    );
}

#[test]
fn rejects_two_combinations_over_the_same_set() {
    let error = build(
        test_flaws(),
        vec![
            pair("ALPHA", "BRAVO"),
            pair("CHARLIE", "DELTA"),
            pair("BRAVO", "ALPHA"),
        ],
        test_levels(),
    )
    .expect_err("ambiguous combination");

    assert_eq!(
        error,
        CatalogError::DuplicateCombination {
            first: 0,
            second: 2
        }
    );
}

#[test]
fn rejects_level_tables_that_do_not_partition_the_scale() {
    let empty = build(test_flaws(), Vec::new(), Vec::new()).expect_err("no levels");
    assert_eq!(empty, CatalogError::NoLevels);

    let gap = build(
        test_flaws(),
        Vec::new(),
        vec![level(1, "TOP", 80, 100), level(2, "LOW", 0, 70)],
    )
    .expect_err("gap");
    assert_eq!(gap, CatalogError::LevelGap { low: 71, high: 79 });

    let overlap = build(
        test_flaws(),
        Vec::new(),
        vec![level(1, "TOP", 80, 100), level(2, "LOW", 0, 85)],
    )
    .expect_err("overlap");
    assert_eq!(
        overlap,
        CatalogError::LevelOverlap {
            level: 2,
            range: ScoreRange::new(0, 85),
        }
    );

    let short_top = build(test_flaws(), Vec::new(), vec![level(1, "ONLY", 0, 90)])
        .expect_err("top uncovered");
    assert_eq!(short_top, CatalogError::LevelGap { low: 91, high: 100 });

    let short_bottom = build(test_flaws(), Vec::new(), vec![level(1, "ONLY", 10, 100)])
        .expect_err("bottom uncovered");
    assert_eq!(short_bottom, CatalogError::LevelGap { low: 0, high: 9 });

    let inverted = build(test_flaws(), Vec::new(), vec![level(1, "ONLY", 100, 0)])
        .expect_err("inverted");
    assert!(matches!(inverted, CatalogError::InvalidRange { level: 1, .. }));

    let duplicate = build(
        test_flaws(),
        Vec::new(),
        vec![level(1, "TOP", 50, 100), level(1, "LOW", 0, 49)],
    )
    .expect_err("duplicate rank");
    assert_eq!(duplicate, CatalogError::DuplicateLevel(1));

    let beyond_floor = build(
        test_flaws(),
        Vec::new(),
        vec![level(1, "ALL", 0, 100), level(2, "EXTRA", 0, 0)],
    )
    .expect_err("extra tier below zero");
    assert!(matches!(beyond_floor, CatalogError::LevelOverlap { level: 2, .. }));
}

#[test]
fn levels_are_ordered_best_first() {
    let catalog = build(
        test_flaws(),
        Vec::new(),
        vec![
            level(3, "BOTTOM", 0, 39),
            level(1, "TOP", 80, 100),
            level(2, "MIDDLE", 40, 79),
        ],
    )
    .expect("valid levels");

    let names: Vec<&str> = catalog.levels().iter().map(|level| level.name.as_str()).collect();
    assert_eq!(names, vec!["TOP", "MIDDLE", "BOTTOM"]);
    assert_eq!(catalog.lowest_level().name, "BOTTOM");
}

const DOCUMENT: &str = r#"{
  "flaws": [
    {
      "id": "ELBOW_ANGLE_ACUTE",
      "name": "Elbow Angle Too Acute",
      "detectionRule": { "metric": "elbow_angle", "condition": "less_than", "threshold": 70 },
      "causeChain": [
        { "effect": "Short lever", "explanation": "Less extension", "severity": "moderate" }
      ],
      "fixes": ["Open the elbow"],
      "drills": ["Wall holds"],
      "priority": 8
    },
    {
      "id": "BALL_BELOW_SHOULDER",
      "name": "Set Point Below Shoulder",
      "detectionRule": { "metric": "set_point", "condition": "greater_than", "threshold": "shoulder_level" },
      "priority": 6,
      "relatedFlaws": ["NOT_DEFINED"]
    }
  ],
  "combinations": [],
  "levels": [
    { "level": 1, "name": "ANY", "scoreRange": { "low": 0, "high": 100 } }
  ]
}"#;

#[test]
fn parses_stored_rules_into_tagged_variants() {
    let catalog = FlawCatalog::from_reader(Cursor::new(DOCUMENT)).expect("document loads");

    let numeric = catalog
        .flaw(&FlawId::from("ELBOW_ANGLE_ACUTE"))
        .expect("numeric flaw");
    assert_eq!(
        numeric.detection_rule,
        DetectionRule::numeric("elbow_angle", Comparison::LessThan, 70.0)
    );

    let symbolic = catalog
        .flaw(&FlawId::from("BALL_BELOW_SHOULDER"))
        .expect("symbolic flaw");
    assert_eq!(
        symbolic.detection_rule,
        DetectionRule::qualitative("set_point", RuleCondition::GreaterThan, "shoulder_level")
    );
}

#[test]
fn qualitative_rules_export_their_stored_threshold() {
    let stored = serde_json::json!({
        "metric": "ball_rotation",
        "condition": "pattern",
        "threshold": 5.0
    });

    let rule: DetectionRule = serde_json::from_value(stored.clone()).expect("rule parses");
    assert!(rule.is_qualitative());

    let exported = serde_json::to_value(&rule).expect("rule serializes");
    assert_eq!(exported, stored);
    assert!(exported["threshold"].is_number());
}

#[test]
fn load_errors_distinguish_parse_and_integrity() {
    let parse = FlawCatalog::from_reader(Cursor::new("{ not json")).expect_err("parse error");
    assert!(matches!(parse, CatalogLoadError::Parse(_)));

    let integrity = FlawCatalog::from_reader(Cursor::new(r#"{ "flaws": [], "levels": [] }"#))
        .expect_err("integrity error");
    assert!(matches!(
        integrity,
        CatalogLoadError::Integrity(CatalogError::NoLevels)
    ));

    let io = FlawCatalog::from_path("./missing-catalog.json").expect_err("io error");
    assert!(matches!(io, CatalogLoadError::Io(_)));
}

#[test]
fn reload_swaps_catalog_for_new_calls_only() {
    let engine = test_engine();
    let before = engine.catalog();
    let measurements = Measurements::new().with_metric("elbow_angle", 60.0);
    assert_eq!(engine.detect(&measurements), flaw_set(&["ALPHA"]));

    let mut flaws = test_flaws();
    flaws[0].detection_rule = DetectionRule::numeric("elbow_angle", Comparison::LessThan, 50.0);
    let replacement = build(flaws, Vec::new(), test_levels()).expect("replacement valid");
    engine.reload(replacement);

    assert!(engine.detect(&measurements).is_empty());
    assert_eq!(before.flaws().len(), 9, "old snapshot is untouched");
    assert_eq!(engine.catalog().flaws().len(), 4);
}
