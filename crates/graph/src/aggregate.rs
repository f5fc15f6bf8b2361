use crate::path::TransformationStep;
use crs_catalog::{Accuracy, AccuracyTier};

/// Reduce per-step accuracy to one judgment for the whole chain.
///
/// Errors compound, so a chain is never reported as better than its worst
/// step.
pub fn aggregate_accuracy(steps: &[TransformationStep]) -> Accuracy {
    match steps {
        [] => Accuracy::no_transformation(),
        [only] => only.accuracy.clone(),
        _ => {
            let has = |tier: AccuracyTier| steps.iter().any(|s| s.accuracy.tier == tier);

            if has(AccuracyTier::Meter) {
                Accuracy::new("1-2m or worse (cumulative)", AccuracyTier::Meter)
            } else if has(AccuracyTier::Centimeter) {
                Accuracy::new("cm to m level (cumulative)", AccuracyTier::Centimeter)
            } else if steps.iter().all(|s| s.accuracy.tier == AccuracyTier::Exact) {
                Accuracy::new("No error (all steps exact)", AccuracyTier::Exact)
            } else {
                Accuracy::new("Unknown (cumulative)", AccuracyTier::Unknown)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn step(tier: AccuracyTier) -> TransformationStep {
        TransformationStep {
            from: "EPSG:1".to_string(),
            to: "EPSG:2".to_string(),
            method: "test".to_string(),
            accuracy: Accuracy::new(format!("{tier} step"), tier),
            operation_code: None,
            note: None,
            is_reverse: false,
            record_id: "r".to_string(),
        }
    }

    #[test]
    fn test_empty_chain_needs_no_transformation() {
        assert_eq!(aggregate_accuracy(&[]), Accuracy::no_transformation());
    }

    #[test]
    fn test_single_step_keeps_its_descriptor() {
        let only = step(AccuracyTier::Centimeter);
        assert_eq!(aggregate_accuracy(&[only.clone()]), only.accuracy);
    }

    #[test]
    fn test_meter_dominates() {
        let steps = [
            step(AccuracyTier::Exact),
            step(AccuracyTier::Meter),
            step(AccuracyTier::Centimeter),
        ];
        assert_eq!(aggregate_accuracy(&steps).tier, AccuracyTier::Meter);
    }

    #[test]
    fn test_centimeter_beats_unknown() {
        let steps = [step(AccuracyTier::Unknown), step(AccuracyTier::Centimeter)];
        assert_eq!(aggregate_accuracy(&steps).tier, AccuracyTier::Centimeter);
    }

    #[test]
    fn test_all_exact() {
        let steps = [step(AccuracyTier::Exact), step(AccuracyTier::Exact)];
        assert_eq!(
            aggregate_accuracy(&steps),
            Accuracy::new("No error (all steps exact)", AccuracyTier::Exact)
        );
    }

    #[test]
    fn test_exact_with_unknown_is_unknown() {
        let steps = [step(AccuracyTier::Exact), step(AccuracyTier::Unknown)];
        assert_eq!(aggregate_accuracy(&steps).tier, AccuracyTier::Unknown);
    }
}
