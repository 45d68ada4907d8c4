//! Expiring items and the three-bucket expiry timeline.
//!
//! Items are partitioned by `DaysUntilExpiry` into `[0,7]`, `(7,14]` and
//! `(14,30]`. Anything outside `[0,30]` (already expired, or further out)
//! lands in no bucket.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Items in the first bucket expiring within this many days are critical.
pub const CRITICAL_DAYS: i64 = 3;

pub const NO_EXPIRING: &str = "No products expiring in this period";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One row of `/api/expiring_products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExpiringItem {
    pub product_name: String,
    pub stock_quantity: u32,
    #[serde(alias = "ExpirationDate", deserialize_with = "deserialize_expiry_date")]
    pub expiry_date: NaiveDate,
    pub days_until_expiry: i64,
}

/// Accepts `YYYY-MM-DD`, ignoring any trailing time component.
fn deserialize_expiry_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let date_part = raw.get(..10).unwrap_or(&raw);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpiryBucket {
    Next7Days,
    Days8To14,
    Days15To30,
}

impl ExpiryBucket {
    pub const ALL: [ExpiryBucket; 3] = [
        ExpiryBucket::Next7Days,
        ExpiryBucket::Days8To14,
        ExpiryBucket::Days15To30,
    ];

    pub fn for_days(days: i64) -> Option<Self> {
        match days {
            0..=7 => Some(ExpiryBucket::Next7Days),
            8..=14 => Some(ExpiryBucket::Days8To14),
            15..=30 => Some(ExpiryBucket::Days15To30),
            _ => None,
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            ExpiryBucket::Next7Days => "Next 7 Days",
            ExpiryBucket::Days8To14 => "8-14 Days",
            ExpiryBucket::Days15To30 => "15-30 Days",
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self {
            ExpiryBucket::Next7Days => "Priority Ship",
            ExpiryBucket::Days8To14 => "Plan Shipment",
            ExpiryBucket::Days15To30 => "Monitor",
        }
    }

    pub fn action_class(&self) -> &'static str {
        match self {
            ExpiryBucket::Next7Days => "btn-danger",
            ExpiryBucket::Days8To14 => "btn-warning",
            ExpiryBucket::Days15To30 => "btn-secondary",
        }
    }

    /// DOM id of the bucket's item list.
    pub fn dom_id(&self) -> &'static str {
        match self {
            ExpiryBucket::Next7Days => "timeline7Days",
            ExpiryBucket::Days8To14 => "timeline14Days",
            ExpiryBucket::Days15To30 => "timeline30Days",
        }
    }

    /// CSS class of an entry in this bucket.
    pub fn item_class(&self, critical: bool) -> &'static str {
        match self {
            ExpiryBucket::Next7Days if critical => "critical",
            ExpiryBucket::Next7Days => "normal",
            ExpiryBucket::Days8To14 => "warning",
            ExpiryBucket::Days15To30 => "normal",
        }
    }

    fn index(&self) -> usize {
        match self {
            ExpiryBucket::Next7Days => 0,
            ExpiryBucket::Days8To14 => 1,
            ExpiryBucket::Days15To30 => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub name: String,
    pub units: u32,
    pub date: NaiveDate,
    pub days_until_expiry: i64,
    pub critical: bool,
}

impl TimelineEntry {
    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// A borrowed view of one bucket, in display order.
#[derive(Debug, Clone, Copy)]
pub struct TimelineGroup<'a> {
    pub bucket: ExpiryBucket,
    pub entries: &'a [TimelineEntry],
}

impl TimelineGroup<'_> {
    /// Placeholder shown instead of entries, if the group is empty.
    pub fn placeholder(&self) -> Option<&'static str> {
        self.entries.is_empty().then_some(NO_EXPIRING)
    }
}

/// Expiring items already partitioned into the three buckets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpiryTimeline {
    buckets: [Vec<TimelineEntry>; 3],
}

impl ExpiryTimeline {
    /// Partition items into buckets, keeping response order within each.
    pub fn from_items(items: &[ExpiringItem]) -> Self {
        let mut timeline = Self::default();
        for item in items {
            let Some(bucket) = ExpiryBucket::for_days(item.days_until_expiry) else {
                continue;
            };
            let critical =
                bucket == ExpiryBucket::Next7Days && item.days_until_expiry <= CRITICAL_DAYS;
            timeline.buckets[bucket.index()].push(TimelineEntry {
                name: item.product_name.clone(),
                units: item.stock_quantity,
                date: item.expiry_date,
                days_until_expiry: item.days_until_expiry,
                critical,
            });
        }
        timeline
    }

    pub fn bucket(&self, bucket: ExpiryBucket) -> &[TimelineEntry] {
        &self.buckets[bucket.index()]
    }

    pub fn groups(&self) -> impl Iterator<Item = TimelineGroup<'_>> {
        ExpiryBucket::ALL.into_iter().map(move |bucket| TimelineGroup {
            bucket,
            entries: self.bucket(bucket),
        })
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, days: i64) -> ExpiringItem {
        ExpiringItem {
            product_name: name.to_string(),
            stock_quantity: 10,
            expiry_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            days_until_expiry: days,
        }
    }

    #[test]
    fn buckets_partition_zero_to_thirty() {
        for days in 0..=30 {
            let timeline = ExpiryTimeline::from_items(&[item("x", days)]);
            let hits = ExpiryBucket::ALL
                .iter()
                .filter(|b| !timeline.bucket(**b).is_empty())
                .count();
            assert_eq!(hits, 1, "day {} should land in exactly one bucket", days);
        }
    }

    #[test]
    fn outside_window_is_dropped() {
        let timeline = ExpiryTimeline::from_items(&[item("late", 31), item("gone", -2)]);
        assert!(timeline.is_empty());
    }

    #[test]
    fn bucket_edges() {
        assert_eq!(ExpiryBucket::for_days(7), Some(ExpiryBucket::Next7Days));
        assert_eq!(ExpiryBucket::for_days(8), Some(ExpiryBucket::Days8To14));
        assert_eq!(ExpiryBucket::for_days(14), Some(ExpiryBucket::Days8To14));
        assert_eq!(ExpiryBucket::for_days(15), Some(ExpiryBucket::Days15To30));
        assert_eq!(ExpiryBucket::for_days(30), Some(ExpiryBucket::Days15To30));
    }

    #[test]
    fn critical_only_in_first_bucket_within_three_days() {
        let timeline =
            ExpiryTimeline::from_items(&[item("a", 3), item("b", 4), item("c", 10), item("d", 0)]);
        let first = timeline.bucket(ExpiryBucket::Next7Days);
        assert_eq!(
            first.iter().map(|e| e.critical).collect::<Vec<_>>(),
            vec![true, false, true]
        );
        assert!(timeline
            .bucket(ExpiryBucket::Days8To14)
            .iter()
            .all(|e| !e.critical));
    }

    #[test]
    fn empty_groups_have_placeholders() {
        let timeline = ExpiryTimeline::from_items(&[item("only", 20)]);
        let placeholders: Vec<_> = timeline.groups().map(|g| g.placeholder()).collect();
        assert_eq!(placeholders, vec![Some(NO_EXPIRING), Some(NO_EXPIRING), None]);
    }

    #[test]
    fn actions_are_properties_of_the_bucket() {
        let labels: Vec<_> = ExpiryBucket::ALL.iter().map(|b| b.action_label()).collect();
        assert_eq!(labels, vec!["Priority Ship", "Plan Shipment", "Monitor"]);
        assert_eq!(ExpiryBucket::Days8To14.item_class(true), "warning");
    }

    #[test]
    fn decodes_dates_with_or_without_time() {
        let json = r#"[
            {"ProductName": "Yogurt", "StockQuantity": 8, "ExpiryDate": "2024-06-02", "DaysUntilExpiry": 2},
            {"ProductName": "Bread", "StockQuantity": 3, "ExpirationDate": "2024-06-10 00:00:00", "DaysUntilExpiry": 10}
        ]"#;
        let items: Vec<ExpiringItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items[1].expiry_date, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());

        let timeline = ExpiryTimeline::from_items(&items);
        assert_eq!(timeline.bucket(ExpiryBucket::Next7Days)[0].date_label(), "2024-06-02");
        assert_eq!(timeline.len(), 2);
    }

    #[test]
    fn bad_date_is_malformed() {
        let json = r#"[{"ProductName": "X", "StockQuantity": 1, "ExpiryDate": "soon", "DaysUntilExpiry": 1}]"#;
        assert!(serde_json::from_str::<Vec<ExpiringItem>>(json).is_err());
    }
}
