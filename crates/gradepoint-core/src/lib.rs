//! gradepoint-core: grade-point scale, GPA/CGPA aggregation, and records.
//!
//! Marks map to grade points on a 10-point scale; grade points are averaged
//! by credits into a semester GPA, and semester GPAs are averaged by
//! semester credits into an overall CGPA. A flat batch mode grades a CSV of
//! courses into a single value.

pub mod aggregate;
pub mod batch;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod scale;
pub mod transcript;

pub use aggregate::{try_weighted_average, weighted_average};
pub use batch::{BatchOutcome, BatchReport, BatchRow};
pub use error::{BatchError, RecordError};
pub use model::{Course, Semester, Student};
pub use scale::grade_point;
