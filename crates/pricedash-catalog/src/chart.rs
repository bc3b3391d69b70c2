//! Chart data derivation and value-axis scaling.

use crate::catalog::Catalog;
use crate::models::ModelRecord;
use crate::selection::SelectionState;

/// Axis bound used when no rows are visible.
pub const EMPTY_AXIS_BOUND: f64 = 20.0;

/// Below this maximum the axis rounds to whole dollars, above it to
/// multiples of [`AXIS_STEP`].
pub const SMALL_MAX_THRESHOLD: f64 = 10.0;

/// Rounding step for large maxima.
pub const AXIS_STEP: f64 = 20.0;

/// Records whose id is selected, in catalog order.
pub fn derive_chart_data<'a>(catalog: &'a Catalog, selection: &SelectionState) -> Vec<&'a ModelRecord> {
    catalog
        .models()
        .iter()
        .filter(|model| selection.is_enabled(&model.id))
        .collect()
}

/// Upper bound of the value axis for the given rows.
///
/// Empty rows give [`EMPTY_AXIS_BOUND`]. Otherwise the largest input or
/// output price is rounded up: to the next integer when it is below
/// [`SMALL_MAX_THRESHOLD`], to the next multiple of [`AXIS_STEP`] otherwise.
/// Exact multiples are kept as-is.
pub fn axis_bound(rows: &[&ModelRecord]) -> f64 {
    if rows.is_empty() {
        return EMPTY_AXIS_BOUND;
    }

    let absolute_max = rows
        .iter()
        .map(|row| row.max_price())
        .fold(f64::NEG_INFINITY, f64::max);

    if absolute_max < SMALL_MAX_THRESHOLD {
        absolute_max.ceil()
    } else {
        (absolute_max / AXIS_STEP).ceil() * AXIS_STEP
    }
}

/// `count` evenly spaced tick values from 0 to `bound`, both ends included.
pub fn axis_ticks(bound: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![bound],
        _ => {
            let step = bound / (count - 1) as f64;
            (0..count).map(|i| step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Provider;

    fn record(input: f64, output: f64) -> ModelRecord {
        ModelRecord::new("m", "M", Provider::OpenAI, input, output)
    }

    fn bound_for(records: &[ModelRecord]) -> f64 {
        let rows: Vec<&ModelRecord> = records.iter().collect();
        axis_bound(&rows)
    }

    #[test]
    fn test_empty_rows_default_bound() {
        assert_eq!(axis_bound(&[]), 20.0);
    }

    #[test]
    fn test_small_max_rounds_to_integer() {
        assert_eq!(bound_for(&[record(1.0, 7.3)]), 8.0);
        assert_eq!(bound_for(&[record(0.075, 0.3)]), 1.0);
        assert_eq!(bound_for(&[record(0.1, 4.4), record(1.25, 2.19)]), 5.0);
    }

    #[test]
    fn test_small_max_exact_integer_kept() {
        assert_eq!(bound_for(&[record(2.0, 8.0)]), 8.0);
    }

    #[test]
    fn test_large_max_rounds_to_multiple_of_20() {
        assert_eq!(bound_for(&[record(3.0, 23.0)]), 40.0);
        assert_eq!(bound_for(&[record(3.0, 15.0)]), 20.0);
        assert_eq!(bound_for(&[record(150.0, 600.0)]), 600.0);
        assert_eq!(bound_for(&[record(75.0, 150.0)]), 160.0);
    }

    #[test]
    fn test_exact_multiple_of_20_not_overshot() {
        assert_eq!(bound_for(&[record(1.0, 20.0)]), 20.0);
        assert_eq!(bound_for(&[record(15.0, 60.0)]), 60.0);
    }

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(bound_for(&[record(1.0, 10.0)]), 20.0);
        assert_eq!(bound_for(&[record(1.0, 9.99)]), 10.0);
    }

    #[test]
    fn test_input_price_can_set_the_max() {
        assert_eq!(bound_for(&[record(9.5, 2.0)]), 10.0);
    }

    #[test]
    fn test_axis_ticks() {
        assert_eq!(axis_ticks(60.0, 4), vec![0.0, 20.0, 40.0, 60.0]);
        assert_eq!(axis_ticks(8.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
        assert_eq!(axis_ticks(20.0, 1), vec![20.0]);
        assert!(axis_ticks(20.0, 0).is_empty());
    }
}
