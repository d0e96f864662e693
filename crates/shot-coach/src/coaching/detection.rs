use tracing::{debug, warn};

use super::catalog::FlawCatalog;
use super::domain::{DetectionRule, Flaw, FlawSet, Measurements};

const RIGHT_PREFIX: &str = "right_";
const LEFT_PREFIX: &str = "left_";

/// Evaluate every catalog rule against `measurements`.
///
/// Returned ids follow catalog order. Rules whose metric or signal is absent
/// are skipped rather than treated as failures.
pub(crate) fn detect_flaws(catalog: &FlawCatalog, measurements: &Measurements) -> FlawSet {
    let mut detected = FlawSet::new();

    for flaw in catalog.flaws() {
        if evaluate(flaw, measurements) {
            detected.insert(flaw.id.clone());
        }
    }

    debug!(detected = detected.len(), "detection pass complete");
    detected
}

fn evaluate(flaw: &Flaw, measurements: &Measurements) -> bool {
    match &flaw.detection_rule {
        DetectionRule::Numeric {
            metric,
            comparison,
            threshold,
        } => {
            let Some(value) = metric_value(measurements, metric) else {
                debug!(flaw = %flaw.id, metric, "metric not measured; rule skipped");
                return false;
            };
            comparison.holds(value, *threshold)
        }
        DetectionRule::Qualitative { metric, .. } => match measurements.signals.get(&flaw.id) {
            Some(observed) => *observed,
            None => {
                debug!(flaw = %flaw.id, metric, "no qualitative signal supplied; rule skipped");
                false
            }
        },
    }
}

/// Resolve the reading for `metric`, honoring the one-limb-per-rule policy.
///
/// An unsided metric such as `elbow_angle` reads `right_elbow_angle`, then
/// `left_elbow_angle`, then `elbow_angle`, and stops at the first present.
/// A metric already naming a side is read verbatim. Either way exactly one
/// value feeds the rule, so two limbs never trigger the same flaw twice.
/// Non-finite readings count as absent, so the lookup moves on to the next
/// candidate.
fn metric_value(measurements: &Measurements, metric: &str) -> Option<f64> {
    let lookup = |key: &str| {
        let value = *measurements.metrics.get(key)?;
        if !value.is_finite() {
            warn!(metric = key, value, "non-finite measurement ignored");
            return None;
        }
        Some(value)
    };

    if metric.starts_with(RIGHT_PREFIX) || metric.starts_with(LEFT_PREFIX) {
        return lookup(metric);
    }

    lookup(&format!("{RIGHT_PREFIX}{metric}"))
        .or_else(|| lookup(&format!("{LEFT_PREFIX}{metric}")))
        .or_else(|| lookup(metric))
}
