//! Standalone batch report over a flat CSV of courses.
//!
//! Every row is graded and the whole file is reduced to one credit-weighted
//! value, with no semester grouping. Any bad row aborts the batch; nothing is
//! aggregated from a file that fails validation.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::Serialize;

use crate::aggregate::try_weighted_average;
use crate::error::BatchError;
use crate::scale::grade_point;

pub const COURSE_NAME: &str = "Course Name";
pub const SUBJECT_AREA: &str = "Subject Area";
pub const CREDITS: &str = "Credits";
pub const MARKS: &str = "Marks";

/// Subject area used when the column is absent.
pub const DEFAULT_SUBJECT_AREA: &str = "N/A";

/// One validated CSV row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRow {
    pub course_name: String,
    pub subject_area: String,
    pub credits: f64,
    pub marks: f64,
}

impl BatchRow {
    pub fn new(course_name: impl Into<String>, credits: f64, marks: f64) -> Self {
        Self {
            course_name: course_name.into(),
            subject_area: DEFAULT_SUBJECT_AREA.to_string(),
            credits,
            marks,
        }
    }

    pub fn grade_point(&self) -> u8 {
        grade_point(self.marks)
    }
}

/// How a batch ends when every row was valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum BatchOutcome {
    /// Credit-weighted grade point over all rows, rounded to two places.
    Cgpa(f64),
    /// Total credits were zero, so there is nothing to report.
    NoContributingData,
}

impl BatchOutcome {
    pub fn cgpa(&self) -> Option<f64> {
        match self {
            BatchOutcome::Cgpa(value) => Some(*value),
            BatchOutcome::NoContributingData => None,
        }
    }
}

/// The graded rows of a batch and its overall result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub rows: Vec<BatchRow>,
    pub total_credits: f64,
    pub outcome: BatchOutcome,
}

/// Grade and aggregate rows that have already been validated.
pub fn compute_batch(rows: Vec<BatchRow>) -> BatchReport {
    let total_credits = rows.iter().map(|r| r.credits).sum();
    let outcome = try_weighted_average(
        rows.iter()
            .map(|r| (r.credits, f64::from(r.grade_point()))),
    )
    .map_or(BatchOutcome::NoContributingData, BatchOutcome::Cgpa);

    BatchReport {
        rows,
        total_credits,
        outcome,
    }
}

/// Read and grade a CSV file.
pub fn read_batch_file(path: &Path) -> Result<BatchReport, BatchError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => BatchError::NotFound {
            path: path.to_path_buf(),
        },
        _ => BatchError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    tracing::debug!(path = %path.display(), "reading batch file");

    read_batch(file)
}

/// Read and grade CSV text (useful for testing).
pub fn read_batch_str(content: &str) -> Result<BatchReport, BatchError> {
    read_batch(content.as_bytes())
}

/// Read and grade CSV from any reader.
///
/// The first record is the header. `Course Name`, `Credits`, and `Marks`
/// are required; `Subject Area` is optional.
pub fn read_batch<R: Read>(input: R) -> Result<BatchReport, BatchError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Ok(compute_batch(Vec::new()));
    }

    let column = |name: &str| headers.iter().position(|h| h == name);
    let required = |name: &str| {
        column(name).ok_or_else(|| BatchError::MissingField {
            field: name.to_string(),
            line: 1,
        })
    };
    let name_idx = required(COURSE_NAME)?;
    let credits_idx = required(CREDITS)?;
    let marks_idx = required(MARKS)?;
    let subject_idx = column(SUBJECT_AREA);

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map_or(index as u64 + 2, |p| p.line());

        let field = |idx: usize, name: &str| {
            record.get(idx).ok_or_else(|| BatchError::MissingField {
                field: name.to_string(),
                line,
            })
        };

        let course_name = field(name_idx, COURSE_NAME)?.to_string();
        let subject_area = match subject_idx {
            Some(idx) => field(idx, SUBJECT_AREA)?.to_string(),
            None => DEFAULT_SUBJECT_AREA.to_string(),
        };
        let raw_credits = field(credits_idx, CREDITS)?;
        let credits = parse_number(raw_credits, CREDITS, line)?;
        if credits < 0.0 {
            return Err(invalid(CREDITS, raw_credits, line));
        }
        let raw_marks = field(marks_idx, MARKS)?;
        let marks = parse_number(raw_marks, MARKS, line)?;
        if !(0.0..=100.0).contains(&marks) {
            return Err(invalid(MARKS, raw_marks, line));
        }

        let row = BatchRow {
            course_name,
            subject_area,
            credits,
            marks,
        };
        tracing::debug!(
            line,
            course = %row.course_name,
            grade_point = row.grade_point(),
            "graded batch row"
        );
        rows.push(row);
    }

    Ok(compute_batch(rows))
}

fn parse_number(raw: &str, field: &str, line: u64) -> Result<f64, BatchError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(field, raw, line))
}

fn invalid(field: &str, value: &str, line: u64) -> BatchError {
    BatchError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        line,
    }
}
