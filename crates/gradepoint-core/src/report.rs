//! Transcript report types with JSON persistence.
//!
//! A report is a snapshot of a [`Student`]'s derived figures at the moment it
//! was built. The record model stays the source of truth; reports are only
//! for output.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Semester, Student};

/// A complete transcript report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    pub student: StudentSummary,
    /// One entry per semester, in transcript order.
    pub semesters: Vec<SemesterSummary>,
    pub total_credits: f64,
    pub overall_cgpa: f64,
}

/// Identifying details of the student (without the semesters).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub name: String,
    pub student_id: String,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub year: Option<u32>,
}

/// Derived figures for one semester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterSummary {
    pub name: String,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub courses: Vec<CourseLine>,
    pub total_credits: f64,
    pub gpa: f64,
    /// Whether the semester carries credits and so counts toward the CGPA.
    pub counts_toward_cgpa: bool,
}

/// A graded course as it appears on a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseLine {
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub subject_area: Option<String>,
    pub credits: f64,
    pub marks: f64,
    pub grade_point: u8,
}

impl SemesterSummary {
    fn from_semester(semester: &Semester) -> Self {
        let total_credits = semester.total_credits();
        Self {
            name: semester.name.clone(),
            number: semester.number,
            start_date: semester.start_date,
            end_date: semester.end_date,
            courses: semester
                .courses
                .iter()
                .map(|c| CourseLine {
                    name: c.name.clone(),
                    code: c.code.clone(),
                    subject_area: c.subject_area.clone(),
                    credits: c.credits,
                    marks: c.marks,
                    grade_point: c.grade_point(),
                })
                .collect(),
            total_credits,
            gpa: semester.gpa(),
            counts_toward_cgpa: total_credits > 0.0,
        }
    }
}

impl TranscriptReport {
    /// Snapshot the derived figures of a student.
    pub fn from_student(student: &Student) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            student: StudentSummary {
                name: student.name.clone(),
                student_id: student.student_id.clone(),
                program: student.program.clone(),
                year: student.year,
            },
            semesters: student
                .semesters
                .iter()
                .map(SemesterSummary::from_semester)
                .collect(),
            total_credits: student.total_credits(),
            overall_cgpa: student.overall_cgpa(),
        }
    }

    /// Number of courses across all semesters.
    pub fn course_count(&self) -> usize {
        self.semesters.iter().map(|s| s.courses.len()).sum()
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: TranscriptReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
