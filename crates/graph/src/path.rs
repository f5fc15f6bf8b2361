use crate::aggregate::aggregate_accuracy;
use crate::complexity::{precision_loss_note, Complexity};
use crs_catalog::{Accuracy, AccuracyTier};
use serde::Serialize;

/// One traversal of a graph edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationStep {
    pub from: String,
    pub to: String,
    pub method: String,
    pub accuracy: Accuracy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// The record was used from its target back to its source
    pub is_reverse: bool,
    /// Catalog record behind this step
    pub record_id: String,
}

/// Candidate route between two CRS codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationPath {
    pub steps: Vec<TransformationStep>,
    pub total_accuracy: Accuracy,
    pub complexity: Complexity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_precision_loss: Option<String>,
}

impl TransformationPath {
    /// Wrap a chained sequence of steps, deriving accuracy and complexity.
    pub fn from_steps(steps: Vec<TransformationStep>) -> Self {
        let total_accuracy = aggregate_accuracy(&steps);
        let complexity = Complexity::classify(steps.len());
        let estimated_precision_loss = precision_loss_note(steps.len());
        Self {
            steps,
            total_accuracy,
            complexity,
            estimated_precision_loss,
        }
    }

    /// Zero-step path: source and target are the same CRS.
    pub fn no_transformation() -> Self {
        Self::from_steps(Vec::new())
    }

    /// Empty path standing in for a route that could not be resolved.
    pub fn unresolved() -> Self {
        Self {
            steps: Vec::new(),
            total_accuracy: Accuracy::new("Unknown", AccuracyTier::Unknown),
            complexity: Complexity::Complex,
            estimated_precision_loss: None,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Priority of the least accurate step (lower is better).
    pub fn worst_priority(&self) -> u8 {
        self.steps
            .iter()
            .map(|s| s.accuracy.tier.priority())
            .max()
            .unwrap_or(0)
    }

    /// CRS codes visited in order, e.g. `["EPSG:4301", "EPSG:4612", "EPSG:6668"]`.
    pub fn crs_chain(&self) -> Vec<&str> {
        let mut chain: Vec<&str> = self.steps.first().map(|s| s.from.as_str()).into_iter().collect();
        chain.extend(self.steps.iter().map(|s| s.to.as_str()));
        chain
    }
}
