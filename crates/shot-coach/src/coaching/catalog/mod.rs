//! Immutable flaw knowledge base consumed by every engine stage.
//!
//! A [`FlawCatalog`] can only be obtained through validation, so the engine
//! never runs against duplicate ids, dangling combination references or a
//! level table that fails to partition the 0-100 scale.

mod integrity;
mod standard;
mod store;

pub use integrity::CatalogError;
pub use store::CatalogStore;

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::{Flaw, FlawCombination, FlawId, ShooterLevel};

/// Serialized catalog shape (`flaws`, `combinations`, `levels`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub flaws: Vec<Flaw>,
    #[serde(default)]
    pub combinations: Vec<FlawCombination>,
    #[serde(default)]
    pub levels: Vec<ShooterLevel>,
}

/// Failure while reading a catalog document from disk or a reader.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Integrity(#[from] CatalogError),
}

#[derive(Debug)]
pub struct FlawCatalog {
    flaws: Vec<Flaw>,
    flaw_index: HashMap<FlawId, usize>,
    combinations: Vec<FlawCombination>,
    combination_index: BTreeMap<BTreeSet<FlawId>, usize>,
    levels: Vec<ShooterLevel>,
}

impl FlawCatalog {
    /// Validate the records and build lookup indexes.
    pub fn new(
        flaws: Vec<Flaw>,
        combinations: Vec<FlawCombination>,
        mut levels: Vec<ShooterLevel>,
    ) -> Result<Self, CatalogError> {
        let flaw_index = integrity::index_flaws(&flaws)?;
        let combination_index = integrity::index_combinations(&combinations, &flaw_index)?;
        integrity::check_levels(&mut levels)?;

        for flaw in &flaws {
            for related in &flaw.related_flaws {
                if !flaw_index.contains_key(related) {
                    warn!(flaw = %flaw.id, %related, "related flaw missing from catalog");
                }
            }
        }

        Ok(Self {
            flaws,
            flaw_index,
            combinations,
            combination_index,
            levels,
        })
    }

    /// Built-in knowledge base shipped with the crate.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::from_document(standard::document())
    }

    pub fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        Self::new(document.flaws, document.combinations, document.levels)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogLoadError> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        let catalog = Self::from_document(document)?;
        info!(
            flaws = catalog.flaws.len(),
            combinations = catalog.combinations.len(),
            levels = catalog.levels.len(),
            "flaw catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogLoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            flaws: self.flaws.clone(),
            combinations: self.combinations.clone(),
            levels: self.levels.clone(),
        }
    }

    /// Flaws in catalog order.
    pub fn flaws(&self) -> &[Flaw] {
        &self.flaws
    }

    pub fn flaw(&self, id: &FlawId) -> Option<&Flaw> {
        self.flaw_index.get(id).map(|&index| &self.flaws[index])
    }

    pub fn combinations(&self) -> &[FlawCombination] {
        &self.combinations
    }

    /// Combination defined over exactly `members`, if any.
    pub fn combination_for(&self, members: &BTreeSet<FlawId>) -> Option<&FlawCombination> {
        self.combination_index
            .get(members)
            .map(|&index| &self.combinations[index])
    }

    /// Levels ordered best first (descending score range).
    pub fn levels(&self) -> &[ShooterLevel] {
        &self.levels
    }

    /// Tier covering the bottom of the scale. Validation guarantees one exists.
    pub fn lowest_level(&self) -> &ShooterLevel {
        &self.levels[self.levels.len() - 1]
    }
}
