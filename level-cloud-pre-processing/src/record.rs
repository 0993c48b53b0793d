//! Typed record parsing for delimited level layout exports.
//!
//! Every layer shares one parser. A layer only contributes a [`FieldLayout`]
//! (which fields hold the position, how many fields are required, whether the
//! origin is a sentinel, how many data lines to consume) and a [`LayerRecord`]
//! implementation that picks its metadata out of the split line.
use crate::coordinates::{Point3, Scale};
use crate::settings::PROGRESS_TICK;
use constants::coordinate_system::FIELD_DELIMITER;
use constants::layer::LayerInfo;
use indicatif::ProgressBar;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields of one input line, borrowed from the line.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord<'a> {
    fields: Vec<&'a str>,
}

impl<'a> RawRecord<'a> {
    pub fn split(line: &'a str, delimiter: char) -> Self {
        Self {
            fields: line.split(delimiter).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, index: usize) -> Option<&'a str> {
        self.fields.get(index).copied()
    }

    /// Trimmed owned copy of a metadata field, empty when absent
    pub fn text(&self, index: usize) -> String {
        self.field(index).map(str::trim).unwrap_or_default().to_string()
    }
}

/// What to do with records positioned exactly at the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentinelPolicy {
    Keep,
    /// (0,0,0) means "no position assigned" in entity exports
    DropOrigin,
}

/// Declarative description of one layer's line format.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldLayout {
    pub delimiter: char,
    pub min_fields: usize,
    /// Field indices of x, y, z
    pub position: [usize; 3],
    pub sentinel: SentinelPolicy,
    /// Upper bound on data lines consumed after the header
    pub max_records: Option<usize>,
}

impl FieldLayout {
    pub fn from_layer_info(
        info: &LayerInfo,
        sentinel: SentinelPolicy,
        max_records: Option<usize>,
    ) -> Self {
        Self {
            delimiter: FIELD_DELIMITER,
            min_fields: info.min_fields,
            position: info.position_fields,
            sentinel,
            max_records,
        }
    }
}

/// Why a line contributed no record.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    TooFewFields { found: usize, required: usize },
    InvalidNumber { field: usize, value: String },
    NonFinite { field: usize },
    SentinelPosition,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooFewFields { found, required } => {
                write!(f, "{} fields, {} required", found, required)
            }
            SkipReason::InvalidNumber { field, value } => {
                write!(f, "field {} is not a number: '{}'", field, value)
            }
            SkipReason::NonFinite { field } => write!(f, "field {} is not finite", field),
            SkipReason::SentinelPosition => write!(f, "unset (0,0,0) position"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Line index in the source file (the header is line 0)
    pub line: usize,
    pub reason: SkipReason,
}

/// Typed record built from a validated, scaled position and its source fields.
pub trait LayerRecord: Sized {
    fn from_fields(position: Point3, fields: &RawRecord<'_>) -> Self;

    fn position(&self) -> Point3;
}

impl LayerRecord for Point3 {
    fn from_fields(position: Point3, _fields: &RawRecord<'_>) -> Self {
        position
    }

    fn position(&self) -> Point3 {
        *self
    }
}

/// Accepted records in source order plus every drop with its reason.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseReport<T> {
    pub records: Vec<T>,
    pub skipped: Vec<SkippedRecord>,
    /// Data lines examined, bounded by the layout's cap
    pub lines_consumed: usize,
}

impl<T> Default for ParseReport<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
            lines_consumed: 0,
        }
    }
}

/// Parse one data line into a typed record.
pub fn parse_line<T: LayerRecord>(
    line: &str,
    layout: &FieldLayout,
    scale: Scale,
) -> Result<T, SkipReason> {
    let raw = RawRecord::split(line, layout.delimiter);
    if raw.len() < layout.min_fields {
        return Err(SkipReason::TooFewFields {
            found: raw.len(),
            required: layout.min_fields,
        });
    }

    let mut coords = [0.0f64; 3];
    for (slot, &field) in coords.iter_mut().zip(layout.position.iter()) {
        *slot = parse_coordinate(&raw, field)?;
    }

    let position = Point3::scaled(coords[0], coords[1], coords[2], scale);
    if layout.sentinel == SentinelPolicy::DropOrigin && position.is_origin() {
        return Err(SkipReason::SentinelPosition);
    }

    Ok(T::from_fields(position, &raw))
}

fn parse_coordinate(raw: &RawRecord<'_>, field: usize) -> Result<f64, SkipReason> {
    let text = raw.field(field).unwrap_or_default().trim();
    let value: f64 = text.parse().map_err(|_| SkipReason::InvalidNumber {
        field,
        value: text.to_string(),
    })?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(SkipReason::NonFinite { field })
    }
}

/// Parse all data lines (line 0 is the header) without progress output.
pub fn parse_records<T, S>(lines: &[S], layout: &FieldLayout, scale: Scale) -> ParseReport<T>
where
    T: LayerRecord,
    S: AsRef<str>,
{
    parse_records_with_progress(lines, layout, scale, &ProgressBar::hidden())
}

/// Parse all data lines, advancing `pb` every few thousand lines.
/// Malformed lines are skipped and reported, never fatal.
pub fn parse_records_with_progress<T, S>(
    lines: &[S],
    layout: &FieldLayout,
    scale: Scale,
    pb: &ProgressBar,
) -> ParseReport<T>
where
    T: LayerRecord,
    S: AsRef<str>,
{
    let mut report = ParseReport::default();
    let cap = layout.max_records.unwrap_or(usize::MAX);

    for (line_idx, line) in lines.iter().enumerate().skip(1).take(cap) {
        report.lines_consumed += 1;
        if report.lines_consumed % PROGRESS_TICK == 0 {
            pb.set_position(report.lines_consumed as u64);
        }

        match parse_line::<T>(line.as_ref(), layout, scale) {
            Ok(record) => report.records.push(record),
            Err(reason) => {
                debug!("Skipping line {}: {}", line_idx, reason);
                report.skipped.push(SkippedRecord {
                    line: line_idx,
                    reason,
                });
            }
        }
    }

    pb.set_position(report.lines_consumed as u64);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use constants::layer::{CHESTS, GEOMETRY};
    use test_case::test_case;

    const SCENARIO: &str = "id,x,y,z\n1,100,200,300\n2,abc,0,0\n3,0,0,0\n";

    fn lines(text: &str) -> Vec<&str> {
        text.lines().collect()
    }

    fn geometry_layout(cap: Option<usize>) -> FieldLayout {
        FieldLayout::from_layer_info(&GEOMETRY, SentinelPolicy::Keep, cap)
    }

    /// Minimal entity record for exercising the sentinel path
    #[derive(Debug, PartialEq)]
    struct Tagged {
        position: Point3,
        tag: String,
    }

    impl LayerRecord for Tagged {
        fn from_fields(position: Point3, fields: &RawRecord<'_>) -> Self {
            Self {
                position,
                tag: fields.text(4),
            }
        }

        fn position(&self) -> Point3 {
            self.position
        }
    }

    #[test]
    fn test_geometry_scenario() {
        let report: ParseReport<Point3> =
            parse_records(&lines(SCENARIO), &geometry_layout(None), Scale::default());

        assert_eq!(report.records.len(), 2);
        assert_relative_eq!(report.records[0].x, 1.0);
        assert_relative_eq!(report.records[0].y, 2.0);
        assert_relative_eq!(report.records[0].z, 3.0);
        // Origin is only a sentinel for entity layers
        assert!(report.records[1].is_origin());

        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line, 2);
        assert_eq!(
            report.skipped[0].reason,
            SkipReason::InvalidNumber {
                field: 1,
                value: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_chest_layout_drops_short_rows() {
        let layout = FieldLayout::from_layer_info(&CHESTS, SentinelPolicy::DropOrigin, None);
        let report: ParseReport<Tagged> =
            parse_records(&lines(SCENARIO), &layout, Scale::default());

        assert!(report.records.is_empty());
        assert_eq!(report.skipped.len(), 3);
        assert!(report.skipped.iter().all(|s| s.reason
            == SkipReason::TooFewFields {
                found: 4,
                required: 8
            }));
    }

    #[test]
    fn test_sentinel_origin_dropped_for_entities() {
        let input = "id,x,y,z,tag,a,b,c\n1,0,0,0,unset,a,b,c\n2,0,5,0,kept,a,b,c\n";
        let layout = FieldLayout::from_layer_info(&CHESTS, SentinelPolicy::DropOrigin, None);
        let report: ParseReport<Tagged> = parse_records(&lines(input), &layout, Scale::default());

        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].tag, "kept");
        assert!(report.records.iter().all(|r| !r.position.is_origin()));
        assert_eq!(report.skipped[0].reason, SkipReason::SentinelPosition);
    }

    #[test]
    fn test_short_line_does_not_disturb_following_lines() {
        let input = "id,x,y,z\n1,1,1\n\n2,2,2,2\n";
        let report: ParseReport<Point3> =
            parse_records(&lines(input), &geometry_layout(None), Scale::default());

        assert_eq!(report.records.len(), 1);
        assert_relative_eq!(report.records[0].x, 0.02);
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[1].line, 2);
    }

    #[test_case(Some(0), 0)]
    #[test_case(Some(2), 2)]
    #[test_case(Some(500), 5)]
    #[test_case(None, 5)]
    fn test_cap_bounds_accepted_records(cap: Option<usize>, expected: usize) {
        let input = "id,x,y,z\n1,1,1,1\n2,2,2,2\n3,3,3,3\n4,4,4,4\n5,5,5,5\n";
        let report: ParseReport<Point3> =
            parse_records(&lines(input), &geometry_layout(cap), Scale::default());
        assert_eq!(report.records.len(), expected);
        assert!(report.lines_consumed <= cap.unwrap_or(usize::MAX));
    }

    #[test]
    fn test_cap_counts_consumed_lines_not_accepted_records() {
        let input = "id,x,y,z\nbad\n1,1,1,1\n2,2,2,2\n";
        let report: ParseReport<Point3> =
            parse_records(&lines(input), &geometry_layout(Some(2)), Scale::default());
        assert_eq!(report.lines_consumed, 2);
        assert_eq!(report.records.len(), 1);
    }

    #[test]
    fn test_header_only_and_empty_input() {
        let layout = geometry_layout(Some(500));
        let header_only: ParseReport<Point3> =
            parse_records(&["id,x,y,z"], &layout, Scale::default());
        assert!(header_only.records.is_empty());
        assert_eq!(header_only.lines_consumed, 0);

        let empty: ParseReport<Point3> = parse_records::<_, &str>(&[], &layout, Scale::default());
        assert!(empty.records.is_empty());
    }

    #[test_case("1, 100 ,200,300", true ; "whitespace around numbers")]
    #[test_case("1,1e2,-2.5,.5", true ; "exponent and signs")]
    #[test_case("1,1,2,NaN", false ; "nan rejected")]
    #[test_case("1,1,2,inf", false ; "infinity rejected")]
    #[test_case("1,1;5,2,3", false ; "stray separator inside number")]
    fn test_numeric_field_parsing(line: &str, accepted: bool) {
        let result = parse_line::<Point3>(line, &geometry_layout(None), Scale::default());
        assert_eq!(result.is_ok(), accepted, "{:?}", result);
    }

    #[test]
    fn test_non_finite_reason() {
        let result = parse_line::<Point3>("1,1,inf,3", &geometry_layout(None), Scale::default());
        assert_eq!(result, Err(SkipReason::NonFinite { field: 2 }));
    }

    #[test]
    fn test_scaling_recovers_source_values() {
        let scale = Scale::new(0.25).unwrap();
        let p = parse_line::<Point3>("9,12.5,-7,1000", &geometry_layout(None), scale).unwrap();
        assert_relative_eq!(p.x / scale.factor(), 12.5, epsilon = 1e-9);
        assert_relative_eq!(p.y / scale.factor(), -7.0, epsilon = 1e-9);
        assert_relative_eq!(p.z / scale.factor(), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_crlf_field_is_trimmed() {
        let p = parse_line::<Point3>("1,1,2,3\r", &geometry_layout(None), Scale::default());
        assert!(p.is_ok());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let layout = geometry_layout(Some(500));
        let a: ParseReport<Point3> = parse_records(&lines(SCENARIO), &layout, Scale::default());
        let b: ParseReport<Point3> = parse_records(&lines(SCENARIO), &layout, Scale::default());
        assert_eq!(a, b);
    }
}
