//! Flux timeline aggregation.
//!
//! Partitions flux samples into (dataset, category) groups and reduces each
//! group to its minimum and maximum sample date, producing the rows behind
//! the horizontal timeline charts. Three categorizations are exposed: by
//! gas species, by crop, and by tillage.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::flux::FluxSample;

/// One timeline bar: the sampling date range of a (dataset, category) group.
///
/// A group with a single sample has `start_date == end_date` (zero-width
/// bar). A `None` category is a group of its own, never dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSpan {
    pub dataset: String,
    pub category: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Date ranges of flux sampling grouped by (dataset, gas species).
pub fn spans_by_gas(samples: &[FluxSample]) -> Vec<TimelineSpan> {
    group_date_ranges(samples, |s| s.gas.clone())
}

/// Date ranges of flux sampling grouped by (dataset, crop).
pub fn spans_by_crop(samples: &[FluxSample]) -> Vec<TimelineSpan> {
    group_date_ranges(samples, |s| s.crop.clone())
}

/// Date ranges of flux sampling grouped by (dataset, tillage).
pub fn spans_by_tillage(samples: &[FluxSample]) -> Vec<TimelineSpan> {
    group_date_ranges(samples, |s| s.tillage.clone())
}

fn group_date_ranges<F>(samples: &[FluxSample], category: F) -> Vec<TimelineSpan>
where
    F: Fn(&FluxSample) -> Option<String>,
{
    let mut ranges: HashMap<(String, Option<String>), (NaiveDate, NaiveDate)> = HashMap::new();
    for sample in samples {
        let key = (sample.dataset.clone(), category(sample));
        ranges
            .entry(key)
            .and_modify(|(start, end)| {
                *start = (*start).min(sample.sample_date);
                *end = (*end).max(sample.sample_date);
            })
            .or_insert((sample.sample_date, sample.sample_date));
    }

    let mut spans: Vec<TimelineSpan> = ranges
        .into_iter()
        .map(|((dataset, category), (start_date, end_date))| TimelineSpan {
            dataset,
            category,
            start_date,
            end_date,
        })
        .collect();
    // Emission order is not semantic; sort for stable presentation.
    spans.sort_by(|a, b| (&a.dataset, &a.category).cmp(&(&b.dataset, &b.category)));
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(dataset: &str, gas: Option<&str>, crop: Option<&str>, date: &str) -> FluxSample {
        FluxSample {
            site: "KBS".to_owned(),
            dataset: dataset.to_owned(),
            sample_date: date.parse().expect("valid date literal"),
            treatment_name: "T1".to_owned(),
            replicate_name: "R1".to_owned(),
            crop: crop.map(str::to_owned),
            fertilized: Some(false),
            tillage: Some("conventional".to_owned()),
            n_inhibitor: None,
            irrigation: None,
            gas: gas.map(str::to_owned),
            flux: Some(1.25),
        }
    }

    #[test]
    fn test_groups_by_dataset_and_gas() {
        let samples = vec![
            sample("dsA", Some("gasX"), None, "2020-01-01"),
            sample("dsA", Some("gasX"), None, "2020-01-10"),
            sample("dsA", Some("gasY"), None, "2020-02-01"),
        ];
        let spans = spans_by_gas(&samples);
        assert_eq!(spans.len(), 2);

        let x = &spans[0];
        assert_eq!(x.dataset, "dsA");
        assert_eq!(x.category.as_deref(), Some("gasX"));
        assert_eq!(x.start_date.to_string(), "2020-01-01");
        assert_eq!(x.end_date.to_string(), "2020-01-10");

        let y = &spans[1];
        assert_eq!(y.category.as_deref(), Some("gasY"));
        assert_eq!(y.start_date, y.end_date);
        assert_eq!(y.start_date.to_string(), "2020-02-01");
    }

    #[test]
    fn test_single_sample_yields_zero_width_span() {
        let samples = vec![sample("dsA", Some("gasX"), None, "2021-06-15")];
        let spans = spans_by_gas(&samples);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start_date, spans[0].end_date);
    }

    #[test]
    fn test_null_category_forms_its_own_group() {
        let samples = vec![
            sample("dsA", None, None, "2020-03-01"),
            sample("dsA", None, None, "2020-03-05"),
            sample("dsA", Some("gasX"), None, "2020-03-02"),
        ];
        let spans = spans_by_gas(&samples);
        assert_eq!(spans.len(), 2);
        // None sorts before Some, so the null group comes first.
        assert_eq!(spans[0].category, None);
        assert_eq!(spans[0].start_date.to_string(), "2020-03-01");
        assert_eq!(spans[0].end_date.to_string(), "2020-03-05");
    }

    #[test]
    fn test_same_category_different_datasets_stay_separate() {
        let samples = vec![
            sample("dsA", Some("gasX"), None, "2020-01-01"),
            sample("dsB", Some("gasX"), None, "2020-05-01"),
        ];
        let spans = spans_by_gas(&samples);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].dataset, "dsA");
        assert_eq!(spans[1].dataset, "dsB");
    }

    #[test]
    fn test_crop_grouping_independent_of_gas() {
        let samples = vec![
            sample("dsA", Some("gasX"), Some("maize"), "2020-01-01"),
            sample("dsA", Some("gasY"), Some("maize"), "2020-04-01"),
        ];
        let by_crop = spans_by_crop(&samples);
        assert_eq!(by_crop.len(), 1);
        assert_eq!(by_crop[0].category.as_deref(), Some("maize"));
        assert_eq!(by_crop[0].start_date.to_string(), "2020-01-01");
        assert_eq!(by_crop[0].end_date.to_string(), "2020-04-01");

        let by_gas = spans_by_gas(&samples);
        assert_eq!(by_gas.len(), 2);
    }

    #[test]
    fn test_empty_input_yields_no_spans() {
        assert!(spans_by_gas(&[]).is_empty());
        assert!(spans_by_crop(&[]).is_empty());
        assert!(spans_by_tillage(&[]).is_empty());
    }
}
