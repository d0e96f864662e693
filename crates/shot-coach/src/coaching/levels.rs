use tracing::warn;

use super::catalog::FlawCatalog;
use super::domain::ShooterLevel;

/// Map a 0-100 score to its tier.
///
/// The raw score must lie in `[0, 100]`; anything else (negative, above 100,
/// NaN) falls back to the lowest tier. In-range fractional scores are then
/// rounded to the nearest whole point so that values such as 87.6 land in a
/// tier instead of between two integer ranges.
pub(crate) fn classify_score(catalog: &FlawCatalog, score: f64) -> &ShooterLevel {
    if (0.0..=100.0).contains(&score) {
        let point = score.round() as u8;
        if let Some(level) = catalog
            .levels()
            .iter()
            .find(|level| level.score_range.contains(point))
        {
            return level;
        }
    }

    let fallback = catalog.lowest_level();
    warn!(score, fallback = %fallback.name, "score outside level ranges; using lowest tier");
    fallback
}
