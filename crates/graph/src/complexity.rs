use serde::Serialize;

/// Coarse difficulty of a transformation chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

impl Complexity {
    pub fn classify(step_count: usize) -> Self {
        match step_count {
            0 | 1 => Complexity::Simple,
            2 => Complexity::Moderate,
            _ => Complexity::Complex,
        }
    }
}

/// Advisory attached to chains of more than one step.
pub fn precision_loss_note(step_count: usize) -> Option<String> {
    (step_count > 1).then(|| {
        format!("Precision may degrade across {step_count} chained transformations")
    })
}
