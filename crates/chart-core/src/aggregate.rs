// File: crates/chart-core/src/aggregate.rs
// Summary: Group purchases by category (pie) and by category + day of month (line).
// Notes:
// - Category order is first occurrence in the input. Colors and draw order depend on it,
//   so buckets are kept in a Vec with a side index rather than a hash map.
// - Blank categories are grouped under `UNKNOWN_CATEGORY` for both charts.

use std::collections::{BTreeMap, HashMap};

use crate::error::{ChartError, Result};
use crate::purchase::PurchaseRecord;

/// Per-category total, used by the pie chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryBucket {
    pub category: String,
    pub total_amount: i64,
}

/// Per-category daily totals, ascending by day, used by the line chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DailyBucket {
    pub category: String,
    pub daily_totals: BTreeMap<u32, i64>,
}

impl DailyBucket {
    /// Largest single-day sum in this category (0 when empty).
    pub fn max_day_total(&self) -> i64 {
        self.daily_totals.values().copied().max().unwrap_or(0)
    }
}

/// Reject records that break the input-shape invariants.
fn validate(records: &[PurchaseRecord]) -> Result<()> {
    for r in records {
        if r.amount() < 0 {
            return Err(ChartError::InvalidInput {
                id: r.id(),
                reason: format!("negative amount {}", r.amount()),
            });
        }
    }
    Ok(())
}

/// Saturating sum of all record amounts.
pub fn total_amount(records: &[PurchaseRecord]) -> i64 {
    records.iter().fold(0i64, |acc, r| acc.saturating_add(r.amount()))
}

/// Group into `(category, items)` in first-seen order.
fn group_in_order<'a>(records: &'a [PurchaseRecord]) -> Vec<(&'a str, Vec<&'a PurchaseRecord>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&PurchaseRecord>)> = Vec::new();
    let mut unknown = 0usize;
    for r in records {
        let key = r.category_key();
        if key != r.category() { unknown += 1; }
        match index.get(key) {
            Some(&i) => groups[i].1.push(r),
            None => {
                index.insert(key, groups.len());
                groups.push((key, vec![r]));
            }
        }
    }
    if unknown > 0 {
        tracing::warn!(count = unknown, "records with blank category grouped as unknown");
    }
    groups
}

/// Sum purchases per category, in first-occurrence order.
/// Returns an empty Vec when the overall total is not positive.
pub fn aggregate_by_category(records: &[PurchaseRecord]) -> Result<Vec<CategoryBucket>> {
    validate(records)?;
    if total_amount(records) <= 0 {
        return Ok(Vec::new());
    }
    let buckets = group_in_order(records)
        .into_iter()
        .map(|(category, items)| CategoryBucket {
            category: category.to_string(),
            total_amount: items.iter().fold(0i64, |acc, r| acc.saturating_add(r.amount())),
        })
        .collect::<Vec<_>>();
    tracing::debug!(records = records.len(), categories = buckets.len(), "aggregated by category");
    Ok(buckets)
}

/// Sum purchases per category and day of month. Categories keep first-occurrence order;
/// days within a category ascend. Returns an empty Vec when the overall total is not positive.
pub fn aggregate_by_category_and_day(records: &[PurchaseRecord]) -> Result<Vec<DailyBucket>> {
    validate(records)?;
    if total_amount(records) <= 0 {
        return Ok(Vec::new());
    }
    let buckets = group_in_order(records)
        .into_iter()
        .map(|(category, items)| {
            let mut daily_totals: BTreeMap<u32, i64> = BTreeMap::new();
            for r in items {
                let slot = daily_totals.entry(r.day_of_month()).or_insert(0);
                *slot = slot.saturating_add(r.amount());
            }
            DailyBucket { category: category.to_string(), daily_totals }
        })
        .collect::<Vec<_>>();
    tracing::debug!(records = records.len(), categories = buckets.len(), "aggregated by category and day");
    Ok(buckets)
}

/// `(min_day, max_day)` across all records, or `None` for an empty list.
pub fn day_domain(records: &[PurchaseRecord]) -> Option<(u32, u32)> {
    let min = records.iter().map(|r| r.day_of_month()).min()?;
    let max = records.iter().map(|r| r.day_of_month()).max()?;
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::purchase::UNKNOWN_CATEGORY;

    fn rec(id: i64, cat: &str, amount: i64, day: u32) -> PurchaseRecord {
        PurchaseRecord::new(id, format!("item{id}"), amount, cat, day)
    }

    #[test]
    fn first_occurrence_order() {
        let records = vec![rec(1, "B", 1, 1), rec(2, "A", 2, 1), rec(3, "B", 3, 2), rec(4, "C", 4, 2)];
        let buckets = aggregate_by_category(&records).unwrap();
        let order: Vec<&str> = buckets.iter().map(|b| b.category.as_str()).collect();
        assert_eq!(order, ["B", "A", "C"]);
        assert_eq!(buckets[0].total_amount, 4);
        assert_eq!(buckets[1].total_amount, 2);
        assert_eq!(buckets[2].total_amount, 4);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let records = vec![rec(1, "x", 5, 3), rec(2, "y", 7, 1), rec(3, "x", 1, 3)];
        assert_eq!(aggregate_by_category(&records), aggregate_by_category(&records));
        assert_eq!(aggregate_by_category_and_day(&records), aggregate_by_category_and_day(&records));
    }

    #[test]
    fn empty_and_zero_totals_yield_no_buckets() {
        assert!(aggregate_by_category(&[]).unwrap().is_empty());
        assert!(aggregate_by_category_and_day(&[]).unwrap().is_empty());
        let zeros = vec![rec(1, "a", 0, 1), rec(2, "b", 0, 2)];
        assert!(aggregate_by_category(&zeros).unwrap().is_empty());
        assert!(aggregate_by_category_and_day(&zeros).unwrap().is_empty());
    }

    #[test]
    fn negative_amount_is_invalid_input() {
        let records = vec![rec(1, "a", 10, 1), rec(7, "b", -3, 1)];
        let err = aggregate_by_category(&records).unwrap_err();
        assert!(matches!(err, ChartError::InvalidInput { id: 7, .. }));
        assert!(aggregate_by_category_and_day(&records).is_err());
    }

    #[test]
    fn blank_category_is_grouped_as_unknown_in_both_charts() {
        let records = vec![rec(1, "", 10, 1), rec(2, "food", 5, 1), rec(3, "   ", 1, 2)];
        let pie = aggregate_by_category(&records).unwrap();
        assert_eq!(pie[0], CategoryBucket { category: UNKNOWN_CATEGORY.into(), total_amount: 11 });
        let line = aggregate_by_category_and_day(&records).unwrap();
        assert_eq!(line[0].category, UNKNOWN_CATEGORY);
        assert_eq!(line[0].daily_totals.get(&2), Some(&1));
    }

    #[test]
    fn daily_totals_are_summed_and_sorted() {
        let records = vec![
            rec(1, "food", 50, 9),
            rec(2, "food", 20, 1),
            rec(3, "fun", 5, 9),
            rec(4, "food", 30, 9),
        ];
        let buckets = aggregate_by_category_and_day(&records).unwrap();
        assert_eq!(buckets.len(), 2);
        let days: Vec<(u32, i64)> = buckets[0].daily_totals.iter().map(|(d, s)| (*d, *s)).collect();
        assert_eq!(days, [(1, 20), (9, 80)]);
        assert_eq!(buckets[0].max_day_total(), 80);
        assert_eq!(buckets[1].daily_totals.get(&9), Some(&5));
    }

    #[test]
    fn sums_saturate() {
        let records = vec![rec(1, "a", i64::MAX, 1), rec(2, "a", 10, 1)];
        let buckets = aggregate_by_category(&records).unwrap();
        assert_eq!(buckets[0].total_amount, i64::MAX);
    }

    #[test]
    fn day_domain_spans_all_records() {
        assert_eq!(day_domain(&[]), None);
        let records = vec![rec(1, "a", 1, 12), rec(2, "b", 1, 3), rec(3, "a", 1, 28)];
        assert_eq!(day_domain(&records), Some((3, 28)));
    }
}
