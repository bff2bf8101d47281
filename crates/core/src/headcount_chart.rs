//! Stacked headcount chart layout.
//!
//! Turns raw monthly records into one bar per month: labels are
//! normalized, duplicates dropped (first record wins), bars sorted by
//! month and every segment given a height and stacking offset. Small
//! nonzero event counts are floored to a minimum height so they remain
//! visible.
//!
//! The layout is pure and cheap enough to recompute on every request.

use serde::Serialize;

use crate::headcount::HeadcountRecord;

/// Height of the tallest bar, in chart units.
pub const CHART_HEIGHT: f64 = 180.0;

/// Minimum rendered height of a nonzero event segment.
pub const MIN_SEGMENT_HEIGHT: f64 = 25.0;

/// Subtracted from a label's offset so it sits alongside its segment.
pub const LABEL_HEIGHT: f64 = 20.0;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Replace a leading full month name with its three-letter abbreviation.
///
/// `"March'25"` becomes `"Mar'25"`. Anything else, including labels that
/// are already abbreviated, is returned unchanged. Matching is
/// case-sensitive.
pub fn normalize_month(label: &str) -> String {
    for (full, short) in MONTH_NAMES.iter().zip(MONTH_ABBREVIATIONS) {
        if let Some(rest) = label.strip_prefix(full) {
            return format!("{short}{rest}");
        }
    }
    label.to_string()
}

/// Parse a normalized `Mon'YY` label into `(year, month)` with month in
/// `1..=12`. Years map to 2000-2099.
pub fn parse_month_key(label: &str) -> Option<(i32, u32)> {
    let (month, year) = label.split_once('\'')?;
    let index = MONTH_ABBREVIATIONS.iter().position(|m| *m == month)?;
    if year.len() != 2 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    Some((2000 + year, index as u32 + 1))
}

/// Keep the first record for each normalized month, with its label
/// replaced by the normalized one. Later duplicates are discarded.
pub fn dedupe_by_month(records: &[HeadcountRecord]) -> Vec<HeadcountRecord> {
    let mut unique: Vec<HeadcountRecord> = Vec::with_capacity(records.len());
    for record in records {
        let month = normalize_month(&record.month);
        if unique.iter().any(|r| r.month == month) {
            continue;
        }
        unique.push(HeadcountRecord {
            month,
            ..record.clone()
        });
    }
    unique
}

/// Sort by `(year, month)`. Labels that don't parse go last, in their
/// original relative order.
pub fn sort_chronologically(records: &mut [HeadcountRecord]) {
    records.sort_by_key(|r| match parse_month_key(&r.month) {
        Some(key) => (false, key),
        None => (true, (0, 0)),
    });
}

/// Largest `existing + max(new, expected)` across records, 0 when empty.
pub fn max_total(records: &[HeadcountRecord]) -> i64 {
    records
        .iter()
        .map(|r| r.existing_headcount as i64 + r.new_joinees.max(r.expected_joiners) as i64)
        .max()
        .unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SegmentKind {
    Existing,
    NewJoiners,
    Exits,
    ExpectedJoiners,
}

/// One stacked segment. `bottom` is the sum of rendered heights below it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarSegment {
    pub kind: SegmentKind,
    pub count: i32,
    pub height: f64,
    pub bottom: f64,
}

/// Count label for a nonzero event segment.
///
/// `offset` follows the proportional heights below the segment, not the
/// floored ones, and may be negative for short bars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentLabel {
    pub kind: SegmentKind,
    pub count: i32,
    pub offset: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthBar {
    /// Normalized month label.
    pub month: String,
    pub existing_headcount: i32,
    /// Always four segments, bottom to top: existing, new joiners, exits,
    /// expected joiners.
    pub segments: Vec<BarSegment>,
    pub labels: Vec<SegmentLabel>,
    /// The source record with its month normalized, for edit actions.
    pub record: HeadcountRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadcountChart {
    pub max_total: i64,
    pub chart_height: f64,
    pub bars: Vec<MonthBar>,
}

struct Scale {
    max_total: i64,
}

impl Scale {
    fn proportional(&self, value: i32) -> f64 {
        if self.max_total <= 0 {
            return 0.0;
        }
        (value as f64 / self.max_total as f64) * CHART_HEIGHT
    }

    fn floored(&self, value: i32) -> f64 {
        if value == 0 || self.max_total <= 0 {
            return 0.0;
        }
        self.proportional(value).max(MIN_SEGMENT_HEIGHT)
    }
}

/// Lay out the chart for `records`, in any order.
pub fn build_chart(records: &[HeadcountRecord]) -> HeadcountChart {
    let mut months = dedupe_by_month(records);
    sort_chronologically(&mut months);

    let scale = Scale {
        max_total: max_total(&months),
    };
    let bars = months.into_iter().map(|r| lay_out_bar(&scale, r)).collect();

    HeadcountChart {
        max_total: scale.max_total,
        chart_height: CHART_HEIGHT,
        bars,
    }
}

fn lay_out_bar(scale: &Scale, record: HeadcountRecord) -> MonthBar {
    let stack = [
        (SegmentKind::Existing, record.existing_headcount),
        (SegmentKind::NewJoiners, record.new_joinees),
        (SegmentKind::Exits, record.exits),
        (SegmentKind::ExpectedJoiners, record.expected_joiners),
    ];

    let mut segments = Vec::with_capacity(stack.len());
    let mut labels = Vec::new();
    let mut rendered_below = 0.0;
    let mut proportional_below = 0.0;

    for (kind, count) in stack {
        let height = match kind {
            SegmentKind::Existing => scale.proportional(count),
            _ => scale.floored(count),
        };
        if kind != SegmentKind::Existing && count != 0 {
            labels.push(SegmentLabel {
                kind,
                count,
                offset: proportional_below - LABEL_HEIGHT,
            });
        }
        segments.push(BarSegment {
            kind,
            count,
            height,
            bottom: rendered_below,
        });
        rendered_below += height;
        proportional_below += scale.proportional(count);
    }

    MonthBar {
        month: record.month.clone(),
        existing_headcount: record.existing_headcount,
        segments,
        labels,
        record,
    }
}
