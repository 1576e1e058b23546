//! Fixed-width batch listing.
//!
//! The layout of this output is relied on by scripts that scrape it, so it
//! is built with plain `format!` padding rather than a table crate.

use std::path::Path;

use gradepoint_core::batch::{BatchOutcome, BatchReport};
use gradepoint_core::error::BatchError;

/// Width of the `=` rules around the table.
pub const RULE_WIDTH: usize = 90;

const EXPECTED_COLUMNS: &str = "Course Name, Subject Area, Credits, Marks";

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Title block printed before the input is read.
pub fn render_banner(source: &Path) -> String {
    format!(
        "\n*** CGPA Calculator (10-Point Scale) ***\nReading from: {}\n\n",
        source.display()
    )
}

/// The course table and the closing summary.
pub fn render_listing(report: &BatchReport) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(&rule());
    out.push('\n');
    out.push_str(&format!(
        "{:<30} {:<20} {:<10} {:<10} {:<10}\n",
        "Course Name", "Subject Area", "Credits", "Marks", "Grade Point"
    ));
    out.push_str(&rule());
    out.push('\n');

    for row in &report.rows {
        out.push_str(&format!(
            "{:<30} {:<20} {:<10.1} {:<10.1} {:<10.1}\n",
            row.course_name,
            row.subject_area,
            row.credits,
            row.marks,
            f64::from(row.grade_point())
        ));
    }

    out.push_str(&rule());
    out.push('\n');

    match report.outcome {
        BatchOutcome::Cgpa(cgpa) => {
            out.push_str(&format!("\nTotal Credits: {:.1}\n", report.total_credits));
            out.push_str(&format!("CGPA: {cgpa:.2}\n"));
            out.push_str(&rule());
            out.push_str("\n\n");
        }
        BatchOutcome::NoContributingData => {
            out.push_str("\nError: No courses found or total credits is zero.\n");
        }
    }

    out
}

/// Explain a failed batch, with a hint on how to fix the input.
pub fn render_failure(error: &BatchError) -> String {
    match error {
        BatchError::NotFound { path } => format!(
            "\nError: File '{}' not found.\nPlease create a CSV file with columns: {EXPECTED_COLUMNS}\n",
            path.display()
        ),
        BatchError::MissingField { field, line } => format!(
            "\nError: Missing required column '{field}' in CSV file (line {line}).\n\
             CSV file must have columns: Course Name, Subject Area (optional), Credits, Marks\n"
        ),
        BatchError::InvalidValue { field, value, line } => format!(
            "\nError: Invalid data in CSV file - '{value}' in column '{field}' (line {line})\n\
             Credits must be a non-negative number and Marks a number between 0 and 100.\n"
        ),
        other => format!("\nError: {other}\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradepoint_core::batch::{compute_batch, BatchRow};
    use std::path::PathBuf;

    #[test]
    fn listing_is_fixed_width() {
        let mut ethics = BatchRow::new("Ethics", 3.0, 45.0);
        ethics.subject_area = "Humanities".into();
        let report = compute_batch(vec![BatchRow::new("Data Structures", 4.0, 90.0), ethics]);

        let expected = format!(
            "\n{rule}\n\
Course Name                    Subject Area         Credits    Marks      Grade Point\n\
{rule}\n\
Data Structures                N/A                  4.0        90.0       10.0      \n\
Ethics                         Humanities           3.0        45.0       5.0       \n\
{rule}\n\
\nTotal Credits: 7.0\n\
CGPA: 7.86\n\
{rule}\n\n",
            rule = "=".repeat(90)
        );
        assert_eq!(render_listing(&report), expected);
    }

    #[test]
    fn exact_half_cgpa_rounds_to_even() {
        // 65 / 8 = 8.125
        let report = compute_batch(vec![
            BatchRow::new("A", 7.0, 70.0),
            BatchRow::new("B", 1.0, 80.0),
        ]);
        assert_eq!(report.outcome, BatchOutcome::Cgpa(8.12));
        assert!(render_listing(&report).contains("\nCGPA: 8.12\n"));
    }

    #[test]
    fn long_names_are_not_truncated() {
        let name = "An Unusually Long Course Title That Overflows";
        let report = compute_batch(vec![BatchRow::new(name, 2.0, 61.0)]);
        assert!(render_listing(&report).contains(&format!("{name} N/A")));
    }

    #[test]
    fn no_contributing_data_is_explicit() {
        let report = compute_batch(vec![BatchRow::new("Audit", 0.0, 88.0)]);
        let out = render_listing(&report);
        assert!(out.contains("Error: No courses found or total credits is zero."));
        assert!(!out.contains("CGPA:"));
    }

    #[test]
    fn banner_names_source() {
        let banner = render_banner(&PathBuf::from("fall.csv"));
        assert!(banner.starts_with("\n*** CGPA Calculator (10-Point Scale) ***\n"));
        assert!(banner.contains("Reading from: fall.csv\n"));
    }

    #[test]
    fn failures_name_the_problem() {
        let out = render_failure(&BatchError::MissingField {
            field: "Marks".into(),
            line: 1,
        });
        assert!(out.contains("Missing required column 'Marks'"));

        let out = render_failure(&BatchError::InvalidValue {
            field: "Credits".into(),
            value: "four".into(),
            line: 2,
        });
        assert!(out.contains("Invalid data in CSV file - 'four'"));

        let out = render_failure(&BatchError::NotFound {
            path: PathBuf::from("courses.csv"),
        });
        assert!(out.contains("File 'courses.csv' not found."));
        assert!(out.contains(EXPECTED_COLUMNS));
    }
}
