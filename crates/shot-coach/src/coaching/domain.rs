use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog flaws (e.g. `ELBOW_FLARE`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FlawId(pub String);

impl FlawId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for FlawId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FlawId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Narrative weight of a cause-chain link. Never consulted when scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Minor,
    Moderate,
    Major,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Minor => "Minor",
            Self::Moderate => "Moderate",
            Self::Major => "Major",
        }
    }
}

/// One downstream consequence of a flaw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CauseEffect {
    pub effect: String,
    pub explanation: String,
    pub severity: Severity,
}

/// Strict numeric comparisons the engine evaluates itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    GreaterThan,
    LessThan,
}

impl Comparison {
    pub fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::GreaterThan => value > threshold,
            Self::LessThan => value < threshold,
        }
    }
}

/// Every condition a stored detection rule may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCondition {
    GreaterThan,
    LessThan,
    ForwardMotion,
    Under,
    Pattern,
    Before,
    After,
    Movement,
    NoPattern,
}

impl RuleCondition {
    fn comparison(self) -> Option<Comparison> {
        match self {
            Self::GreaterThan => Some(Comparison::GreaterThan),
            Self::LessThan => Some(Comparison::LessThan),
            _ => None,
        }
    }
}

/// Threshold exactly as written in a catalog document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawThreshold {
    Number(f64),
    Symbol(String),
}

/// Stored shape of a detection rule: `{ metric, condition, threshold }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDetectionRule {
    pub metric: String,
    pub condition: RuleCondition,
    pub threshold: RawThreshold,
}

/// Detection rule split into what the engine can compare and what it cannot.
///
/// Only `greater_than`/`less_than` paired with a numeric threshold become
/// [`DetectionRule::Numeric`]. Everything else is qualitative and must be
/// answered by the measurement collaborator through [`Measurements::signals`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawDetectionRule", into = "RawDetectionRule")]
pub enum DetectionRule {
    Numeric {
        metric: String,
        comparison: Comparison,
        threshold: f64,
    },
    /// `threshold` is kept exactly as stored so exported catalogs match
    /// their source.
    Qualitative {
        metric: String,
        condition: RuleCondition,
        threshold: RawThreshold,
    },
}

impl DetectionRule {
    pub fn numeric(metric: impl Into<String>, comparison: Comparison, threshold: f64) -> Self {
        Self::Numeric {
            metric: metric.into(),
            comparison,
            threshold,
        }
    }

    pub fn qualitative(
        metric: impl Into<String>,
        condition: RuleCondition,
        descriptor: impl Into<String>,
    ) -> Self {
        Self::Qualitative {
            metric: metric.into(),
            condition,
            threshold: RawThreshold::Symbol(descriptor.into()),
        }
    }

    pub fn metric(&self) -> &str {
        match self {
            Self::Numeric { metric, .. } | Self::Qualitative { metric, .. } => metric,
        }
    }

    pub fn is_qualitative(&self) -> bool {
        matches!(self, Self::Qualitative { .. })
    }
}

impl From<RawDetectionRule> for DetectionRule {
    fn from(raw: RawDetectionRule) -> Self {
        match (raw.condition.comparison(), raw.threshold) {
            (Some(comparison), RawThreshold::Number(threshold)) => Self::Numeric {
                metric: raw.metric,
                comparison,
                threshold,
            },
            (_, threshold) => Self::Qualitative {
                metric: raw.metric,
                condition: raw.condition,
                threshold,
            },
        }
    }
}

impl From<DetectionRule> for RawDetectionRule {
    fn from(rule: DetectionRule) -> Self {
        match rule {
            DetectionRule::Numeric {
                metric,
                comparison,
                threshold,
            } => Self {
                metric,
                condition: match comparison {
                    Comparison::GreaterThan => RuleCondition::GreaterThan,
                    Comparison::LessThan => RuleCondition::LessThan,
                },
                threshold: RawThreshold::Number(threshold),
            },
            DetectionRule::Qualitative {
                metric,
                condition,
                threshold,
            } => Self {
                metric,
                condition,
                threshold,
            },
        }
    }
}

/// A named, detectable mechanical defect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flaw {
    pub id: FlawId,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub detection_rule: DetectionRule,
    #[serde(default)]
    pub cause_chain: Vec<CauseEffect>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub fixes: Vec<String>,
    #[serde(default)]
    pub drills: Vec<String>,
    pub priority: u8,
    #[serde(default)]
    pub related_flaws: Vec<FlawId>,
}

impl Flaw {
    /// Most severe link of the cause chain, if any.
    pub fn peak_severity(&self) -> Option<Severity> {
        self.cause_chain.iter().map(|link| link.severity).max()
    }
}

/// Interaction effect that applies only when exactly these flaws co-occur.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlawCombination {
    pub flaw_ids: Vec<FlawId>,
    pub combined_effect: String,
    pub overall_impact: String,
    pub primary_fix: String,
}

/// Inclusive score window on the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub low: u8,
    pub high: u8,
}

impl ScoreRange {
    pub const fn new(low: u8, high: u8) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, score: u8) -> bool {
        self.low <= score && score <= self.high
    }
}

impl fmt::Display for ScoreRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// Ordinal skill tier, `level` 1 being the best.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShooterLevel {
    pub level: u8,
    pub name: String,
    pub score_range: ScoreRange,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub characteristics: Vec<String>,
}

/// Measured input for one analysis.
///
/// `metrics` holds numeric readings keyed by metric name. `signals` holds the
/// upstream collaborator's verdicts for qualitative rules, keyed by the flaw
/// whose rule they resolve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    #[serde(default)]
    pub metrics: BTreeMap<String, f64>,
    #[serde(default)]
    pub signals: BTreeMap<FlawId, bool>,
}

impl Measurements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metric(mut self, metric: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(metric.into(), value);
        self
    }

    pub fn with_signal(mut self, flaw: impl Into<FlawId>, observed: bool) -> Self {
        self.signals.insert(flaw.into(), observed);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty() && self.signals.is_empty()
    }
}

/// Insertion-ordered set of flaw ids.
///
/// Order carries meaning: it is the detection order (catalog order when
/// produced by the detector, caller order otherwise) and breaks priority ties
/// in the synthesized report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<FlawId>", into = "Vec<FlawId>")]
pub struct FlawSet {
    ids: Vec<FlawId>,
}

impl FlawSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` unless already present. Returns whether it was added.
    pub fn insert(&mut self, id: FlawId) -> bool {
        if self.ids.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn contains(&self, id: &FlawId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlawId> {
        self.ids.iter()
    }

    /// Order-free view used for exact-set comparisons.
    pub fn members(&self) -> BTreeSet<FlawId> {
        self.ids.iter().cloned().collect()
    }
}

impl FromIterator<FlawId> for FlawSet {
    fn from_iter<I: IntoIterator<Item = FlawId>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl From<Vec<FlawId>> for FlawSet {
    fn from(ids: Vec<FlawId>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<FlawSet> for Vec<FlawId> {
    fn from(set: FlawSet) -> Self {
        set.ids
    }
}

impl<'a> IntoIterator for &'a FlawSet {
    type Item = &'a FlawId;
    type IntoIter = std::slice::Iter<'a, FlawId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

/// Synthesized, human-readable coaching output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingReport {
    pub primary_issue: String,
    pub cause_and_effect: String,
    pub fix_order: Vec<String>,
    pub drills: Vec<String>,
    #[serde(default)]
    pub secondary_issues: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}
