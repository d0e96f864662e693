use super::catalog::FlawCatalog;
use super::domain::{FlawCombination, FlawSet};

/// Exact-set lookup: the combination's ids and `flaws` must have the same
/// members and cardinality. Supersets and subsets never match.
pub(crate) fn resolve_combination<'a>(
    catalog: &'a FlawCatalog,
    flaws: &FlawSet,
) -> Option<&'a FlawCombination> {
    if flaws.len() < 2 {
        return None;
    }

    catalog.combination_for(&flaws.members())
}
