use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::coaching::domain::{Flaw, FlawCombination, FlawId, ScoreRange, ShooterLevel};

pub(crate) const MIN_PRIORITY: u8 = 1;
pub(crate) const MAX_PRIORITY: u8 = 10;
const SCALE_TOP: u8 = 100;

/// Startup-time catalog defects. Any of these must stop initialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("flaw id {0} is defined more than once")]
    DuplicateFlawId(FlawId),
    #[error("flaw {flaw} has priority {priority}, expected 1..=10")]
    PriorityOutOfRange { flaw: FlawId, priority: u8 },
    #[error("flaw {0} lists fixes but has an empty cause chain")]
    MissingCauseChain(FlawId),
    #[error("combination #{index} names {size} flaw(s); at least two are required")]
    CombinationTooSmall { index: usize, size: usize },
    #[error("combination #{index} lists flaw {flaw} more than once")]
    CombinationRepeatsFlaw { index: usize, flaw: FlawId },
    #[error("combination #{index} references unknown flaw {flaw}")]
    UnknownCombinationFlaw { index: usize, flaw: FlawId },
    #[error("combinations #{first} and #{second} cover the same flaw set")]
    DuplicateCombination { first: usize, second: usize },
    #[error("catalog defines no shooter levels")]
    NoLevels,
    #[error("shooter level {0} is defined more than once")]
    DuplicateLevel(u8),
    #[error("shooter level {level} has an invalid range {range}")]
    InvalidRange { level: u8, range: ScoreRange },
    #[error("shooter level {level} range {range} overlaps the level above it")]
    LevelOverlap { level: u8, range: ScoreRange },
    #[error("scores {low}..={high} are not covered by any shooter level")]
    LevelGap { low: u8, high: u8 },
}

pub(crate) fn index_flaws(flaws: &[Flaw]) -> Result<HashMap<FlawId, usize>, CatalogError> {
    let mut index = HashMap::with_capacity(flaws.len());

    for (position, flaw) in flaws.iter().enumerate() {
        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&flaw.priority) {
            return Err(CatalogError::PriorityOutOfRange {
                flaw: flaw.id.clone(),
                priority: flaw.priority,
            });
        }

        if !flaw.fixes.is_empty() && flaw.cause_chain.is_empty() {
            return Err(CatalogError::MissingCauseChain(flaw.id.clone()));
        }

        if index.insert(flaw.id.clone(), position).is_some() {
            return Err(CatalogError::DuplicateFlawId(flaw.id.clone()));
        }
    }

    Ok(index)
}

pub(crate) fn index_combinations(
    combinations: &[FlawCombination],
    flaws: &HashMap<FlawId, usize>,
) -> Result<BTreeMap<BTreeSet<FlawId>, usize>, CatalogError> {
    let mut index = BTreeMap::new();

    for (position, combination) in combinations.iter().enumerate() {
        let mut members = BTreeSet::new();
        for flaw in &combination.flaw_ids {
            if !flaws.contains_key(flaw) {
                return Err(CatalogError::UnknownCombinationFlaw {
                    index: position,
                    flaw: flaw.clone(),
                });
            }
            if !members.insert(flaw.clone()) {
                return Err(CatalogError::CombinationRepeatsFlaw {
                    index: position,
                    flaw: flaw.clone(),
                });
            }
        }

        if members.len() < 2 {
            return Err(CatalogError::CombinationTooSmall {
                index: position,
                size: members.len(),
            });
        }

        if let Some(first) = index.insert(members, position) {
            return Err(CatalogError::DuplicateCombination {
                first,
                second: position,
            });
        }
    }

    Ok(index)
}

/// Sorts `levels` best first and checks they tile 0..=100 exactly.
pub(crate) fn check_levels(levels: &mut [ShooterLevel]) -> Result<(), CatalogError> {
    if levels.is_empty() {
        return Err(CatalogError::NoLevels);
    }

    levels.sort_by_key(|level| level.level);

    // Next score (walking downward) that still needs a tier; None once 0 is covered.
    let mut expected_high = Some(SCALE_TOP);
    let mut previous_rank = None;

    for level in levels.iter() {
        let range = level.score_range;
        if previous_rank == Some(level.level) {
            return Err(CatalogError::DuplicateLevel(level.level));
        }
        previous_rank = Some(level.level);

        if range.low > range.high || range.high > SCALE_TOP {
            return Err(CatalogError::InvalidRange {
                level: level.level,
                range,
            });
        }

        let Some(expected) = expected_high else {
            return Err(CatalogError::LevelOverlap {
                level: level.level,
                range,
            });
        };

        if range.high > expected {
            return Err(CatalogError::LevelOverlap {
                level: level.level,
                range,
            });
        }
        if range.high < expected {
            return Err(CatalogError::LevelGap {
                low: range.high + 1,
                high: expected,
            });
        }

        expected_high = range.low.checked_sub(1);
    }

    match expected_high {
        Some(high) => Err(CatalogError::LevelGap { low: 0, high }),
        None => Ok(()),
    }
}
