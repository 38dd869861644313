use serde::{Deserialize, Serialize};

/// Minimum percentage classified as a strength.
pub const STRENGTH_THRESHOLD: u8 = 75;
/// Minimum percentage classified as developing; anything lower is a growth area.
pub const DEVELOPING_THRESHOLD: u8 = 50;
/// Skipped questions do not count toward a domain's attainable maximum.
pub const DEFAULT_UNANSWERED_POLICY: UnansweredPolicy = UnansweredPolicy::Exclude;
/// Upper bound on coaching notes attached to one result.
pub const MAX_FAILURE_FACTORS: usize = 2;

/// How skipped questions affect a domain's denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnansweredPolicy {
    /// Only answered questions contribute to `max`.
    Exclude,
    /// Every presented question contributes to `max`.
    Include,
}

impl UnansweredPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "exclude" => Some(Self::Exclude),
            "include" => Some(Self::Include),
            _ => None,
        }
    }
}

impl Default for UnansweredPolicy {
    fn default() -> Self {
        DEFAULT_UNANSWERED_POLICY
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationThresholds {
    pub strength: u8,
    pub developing: u8,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            strength: STRENGTH_THRESHOLD,
            developing: DEVELOPING_THRESHOLD,
        }
    }
}

/// Tunable scoring rules applied by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub thresholds: ClassificationThresholds,
    pub unanswered: UnansweredPolicy,
}
