use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Coarse accuracy class of a transformation, assigned when the catalog is
/// authored or loaded. Ranking and aggregation only ever look at this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccuracyTier {
    /// Mathematically exact (projection, unit change, identity)
    Exact,

    /// Centimeter-level error, below one meter
    Centimeter,

    /// One meter or worse
    Meter,

    /// No usable accuracy information
    Unknown,
}

/// Distance at which an error stops counting as centimeter-level.
pub const METER_TIER_THRESHOLD_M: f64 = 1.0;

fn cached(cell: &'static OnceLock<Option<Regex>>, pattern: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| Regex::new(pattern).ok()).as_ref()
}

fn distance_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    cached(
        &PATTERN,
        r"(?i)(\d+(?:\.\d+)?)\s*(km|mm|cm|metres?|meters?|m)\b",
    )
}

fn exact_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    cached(&PATTERN, r"(?i)\b(?:no error|exact|lossless)\b")
}

/// Phrases that mention an exact marker without claiming exactness.
fn negated_exact_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    cached(
        &PATTERN,
        r"(?i)\b(?:not|non)[\s-]*exact\b|\bno error (?:estimates?|information|data|given|published)\b",
    )
}

fn worst_distance_meters(text: &str) -> Option<f64> {
    distance_pattern()?
        .captures_iter(text)
        .filter_map(|caps| {
            let value: f64 = caps.get(1)?.as_str().parse().ok()?;
            let scale = match caps.get(2)?.as_str() {
                "km" => 1000.0,
                "mm" => 0.001,
                "cm" => 0.01,
                _ => 1.0,
            };
            Some(value * scale)
        })
        .fold(None, |worst: Option<f64>, meters| {
            Some(worst.map_or(meters, |w| w.max(meters)))
        })
}

fn claims_exact(text: &str) -> bool {
    let negated = negated_exact_pattern().map_or(false, |p| p.is_match(text));
    !negated && exact_pattern().map_or(false, |p| p.is_match(text))
}

impl AccuracyTier {
    /// Ordinal used for ranking; lower is more accurate.
    pub fn priority(self) -> u8 {
        match self {
            AccuracyTier::Exact => 0,
            AccuracyTier::Centimeter => 1,
            AccuracyTier::Meter => 2,
            AccuracyTier::Unknown => 3,
        }
    }

    /// Derive a tier from a free-text description.
    ///
    /// Only used for catalog entries that do not declare `accuracyTier`.
    /// Any stated distance decides the tier, the largest one winning, so
    /// "2cm to 1m" is `Meter` and "not exact, roughly 5m" is `Meter`. Exact
    /// markers only count as whole words and when not negated.
    pub fn infer(description: &str) -> Self {
        let lowered = description.to_lowercase();

        match worst_distance_meters(&lowered) {
            Some(meters) if meters >= METER_TIER_THRESHOLD_M => AccuracyTier::Meter,
            Some(_) => AccuracyTier::Centimeter,
            None if claims_exact(&lowered) => AccuracyTier::Exact,
            None => AccuracyTier::Unknown,
        }
    }
}

impl fmt::Display for AccuracyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AccuracyTier::Exact => "exact",
            AccuracyTier::Centimeter => "centimeter",
            AccuracyTier::Meter => "meter",
            AccuracyTier::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Accuracy of a transformation or a chain of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accuracy {
    /// Human-readable description, display only
    pub description: String,

    /// Structured tier used for ranking and aggregation
    pub tier: AccuracyTier,
}

impl Accuracy {
    pub fn new(description: impl Into<String>, tier: AccuracyTier) -> Self {
        Self {
            description: description.into(),
            tier,
        }
    }

    /// Build from a description, inferring the tier from its text.
    pub fn from_description(description: impl Into<String>) -> Self {
        let description = description.into();
        let tier = AccuracyTier::infer(&description);
        Self { description, tier }
    }

    /// Accuracy of the empty chain.
    pub fn no_transformation() -> Self {
        Self::new("No transformation needed", AccuracyTier::Exact)
    }
}
