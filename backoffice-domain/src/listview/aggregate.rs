//! Pure reductions behind the summary-card figures of every list view.
//!
//! Aggregates are always computed over the full filtered collection, never
//! over the paginated slice; `ListView::filtered` is the intended input.
//! Money values are `Decimal` end to end, so repeated sums carry no binary
//! floating-point drift.

use rust_decimal::Decimal;

/// Sum of a decimal field over all records
pub fn sum_by<T>(items: &[T], field: impl Fn(&T) -> Decimal) -> Decimal {
    items.iter().map(field).sum()
}

/// Number of records matching a predicate
pub fn count_by<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> usize {
    items.iter().filter(|item| predicate(item)).count()
}

/// Mean of a decimal field, 0 when the collection is empty
pub fn average_by<T>(items: &[T], field: impl Fn(&T) -> Decimal) -> Decimal {
    if items.is_empty() {
        return Decimal::ZERO;
    }
    sum_by(items, field) / Decimal::from(items.len())
}

/// Weighted mean of a decimal field, 0 when the total weight is 0
pub fn weighted_average_by<T>(
    items: &[T],
    value: impl Fn(&T) -> Decimal,
    weight: impl Fn(&T) -> Decimal,
) -> Decimal {
    let total_weight = sum_by(items, &weight);
    if total_weight.is_zero() {
        return Decimal::ZERO;
    }
    let weighted_sum: Decimal = items.iter().map(|item| value(item) * weight(item)).sum();
    weighted_sum / total_weight
}

/// `100 * used / planned`, 0 when `planned` is 0
///
/// The zero-planned guard is deliberate: a summary card must show 0%, not a
/// division error, when nothing was budgeted.
pub fn percent_of(used: Decimal, planned: Decimal) -> Decimal {
    if planned.is_zero() {
        return Decimal::ZERO;
    }
    used * Decimal::ONE_HUNDRED / planned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_and_count_over_line_totals() {
        let totals = [Decimal::from(100), Decimal::from(250), Decimal::ZERO];
        assert_eq!(sum_by(&totals, |t| *t), Decimal::from(350));
        assert_eq!(count_by(&totals, |t| !t.is_zero()), 2);
        assert_eq!(totals.len(), 3);
    }

    #[test]
    fn average_of_empty_collection_is_zero() {
        let totals: Vec<Decimal> = Vec::new();
        assert_eq!(average_by(&totals, |t| *t), Decimal::ZERO);
    }

    #[test]
    fn percent_of_zero_planned_is_zero_not_nan() {
        assert_eq!(percent_of(Decimal::from(350), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(
            percent_of(Decimal::from(25), Decimal::from(100)),
            Decimal::from(25)
        );
    }

    #[test]
    fn weighted_average_guards_zero_weight() {
        let scores = [(Decimal::from(4), Decimal::ZERO)];
        assert_eq!(
            weighted_average_by(&scores, |s| s.0, |s| s.1),
            Decimal::ZERO
        );

        let scores = [
            (Decimal::from(4), Decimal::from(3)),
            (Decimal::from(2), Decimal::from(1)),
        ];
        // (4*3 + 2*1) / 4 = 3.5
        assert_eq!(
            weighted_average_by(&scores, |s| s.0, |s| s.1),
            Decimal::new(35, 1)
        );
    }
}
