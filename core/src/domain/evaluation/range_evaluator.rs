use tracing::debug;

use crate::domain::{
    catalog::entities::ReferenceCatalog,
    evaluation::entities::{DropReason, EvaluatedReading, ReadingOutcome},
    reading::entities::Reading,
};

/// Classify each reading against the catalog, in input order.
///
/// Unknown items and values that do not coerce to a finite number become
/// `Dropped` outcomes; they never abort the batch.
pub fn evaluate_readings(catalog: &ReferenceCatalog, readings: &[Reading]) -> Vec<ReadingOutcome> {
    readings
        .iter()
        .map(|reading| evaluate_reading(catalog, reading))
        .collect()
}

pub fn evaluate_reading(catalog: &ReferenceCatalog, reading: &Reading) -> ReadingOutcome {
    let Some(range) = catalog.range(&reading.item) else {
        debug!(item = %reading.item, "dropping reading for unknown item");
        return ReadingOutcome::Dropped {
            item: reading.item.clone(),
            reason: DropReason::UnknownItem,
        };
    };

    let Some(value) = reading.value.coerce() else {
        debug!(item = %reading.item, value = ?reading.value, "dropping non-numeric reading");
        return ReadingOutcome::Dropped {
            item: reading.item.clone(),
            reason: DropReason::NotNumeric(reading.value.clone()),
        };
    };

    ReadingOutcome::Evaluated(EvaluatedReading {
        item: range.item.clone(),
        value,
        reference_range: range.display(),
        status: range.classify(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        catalog::standard::{ALT, AST, HEMOGLOBIN, TOTAL_CHOLESTEROL},
        evaluation::entities::Status,
        reading::entities::RawValue,
    };

    fn catalog() -> ReferenceCatalog {
        ReferenceCatalog::standard().unwrap()
    }

    #[test]
    fn test_boundaries_are_within_for_every_item() {
        let catalog = catalog();
        for range in catalog.ranges() {
            for bound in [range.min, range.max] {
                let outcome = evaluate_reading(&catalog, &Reading::new(range.item.clone(), bound));
                assert_eq!(
                    outcome.into_evaluated().map(|r| r.status),
                    Some(Status::Within),
                    "{} at {}",
                    range.item,
                    bound
                );
            }
        }
    }

    #[test]
    fn test_below_and_above() {
        let catalog = catalog();
        let outcomes = evaluate_readings(
            &catalog,
            &[Reading::new(HEMOGLOBIN, 12.0), Reading::new(ALT, 9999.0)],
        );

        let mut outcomes = outcomes.into_iter().map(ReadingOutcome::into_evaluated);

        let low = outcomes.next().flatten().unwrap();
        assert_eq!(low.status, Status::Below);
        assert_eq!(low.reference_range, "13.1 - 16.3 g/dL");

        let high = outcomes.next().flatten().unwrap();
        assert_eq!(high.status, Status::Above);
        assert_eq!(high.reference_range, "8 - 42 U/L");
    }

    #[test]
    fn test_unknown_item_is_dropped() {
        let outcome = evaluate_reading(&catalog(), &Reading::new("血糖値", 90.0));
        assert_eq!(
            outcome,
            ReadingOutcome::Dropped {
                item: "血糖値".to_string(),
                reason: DropReason::UnknownItem,
            }
        );
    }

    #[test]
    fn test_non_numeric_value_drops_only_that_reading() {
        let outcomes = evaluate_readings(
            &catalog(),
            &[
                Reading::new(AST, "測定不可"),
                Reading::new(TOTAL_CHOLESTEROL, "150"),
            ],
        );

        assert_eq!(
            outcomes[0],
            ReadingOutcome::Dropped {
                item: AST.to_string(),
                reason: DropReason::NotNumeric(RawValue::Text("測定不可".to_string())),
            }
        );
        let cholesterol = outcomes[1].clone().into_evaluated().unwrap();
        assert_eq!(cholesterol.status, Status::Within);
        assert_eq!(cholesterol.value, 150.0);
    }

    #[test]
    fn test_preserves_input_order() {
        let outcomes = evaluate_readings(
            &catalog(),
            &[Reading::new(ALT, 20.0), Reading::new(HEMOGLOBIN, 14.0)],
        );
        let items: Vec<String> = outcomes
            .into_iter()
            .filter_map(ReadingOutcome::into_evaluated)
            .map(|r| r.item)
            .collect();
        assert_eq!(items, vec![ALT, HEMOGLOBIN]);
    }
}
