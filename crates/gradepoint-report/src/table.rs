//! Terminal transcript tables.

use comfy_table::{Cell, Table};

use gradepoint_core::report::{SemesterSummary, TranscriptReport};
use gradepoint_core::scale::{FAIL_GRADE_POINT, SCALE};

fn course_table(semester: &SemesterSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Course",
        "Code",
        "Subject Area",
        "Credits",
        "Marks",
        "Grade Point",
    ]);

    for course in &semester.courses {
        table.add_row(vec![
            Cell::new(&course.name),
            Cell::new(course.code.as_deref().unwrap_or("-")),
            Cell::new(course.subject_area.as_deref().unwrap_or("-")),
            Cell::new(format!("{:.1}", course.credits)),
            Cell::new(format!("{:.1}", course.marks)),
            Cell::new(course.grade_point),
        ]);
    }

    table
}

fn semester_table(report: &TranscriptReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Semester", "No.", "Courses", "Credits", "GPA"]);

    for semester in &report.semesters {
        let gpa = if semester.counts_toward_cgpa {
            format!("{:.2}", semester.gpa)
        } else {
            "- (no credits)".to_string()
        };
        table.add_row(vec![
            Cell::new(&semester.name),
            Cell::new(
                semester
                    .number
                    .map_or_else(|| "-".to_string(), |n| n.to_string()),
            ),
            Cell::new(semester.courses.len()),
            Cell::new(format!("{:.1}", semester.total_credits)),
            Cell::new(gpa),
        ]);
    }

    table
}

/// Render a transcript as plain-text tables.
///
/// With `detailed`, each semester's courses are listed before the summary.
pub fn render_transcript(report: &TranscriptReport, detailed: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} ({})",
        report.student.name, report.student.student_id
    ));
    if let Some(program) = &report.student.program {
        out.push_str(&format!(", {program}"));
    }
    if let Some(year) = report.student.year {
        out.push_str(&format!(", year {year}"));
    }
    out.push('\n');

    if detailed {
        for semester in &report.semesters {
            out.push_str(&format!("\n{}\n", semester.name));
            if semester.courses.is_empty() {
                out.push_str("  (no courses)\n");
            } else {
                out.push_str(&format!("{}\n", course_table(semester)));
            }
        }
    }

    if !report.semesters.is_empty() {
        out.push_str(&format!("\n{}\n", semester_table(report)));
    }

    out.push_str(&format!(
        "\nTotal Credits: {:.1}\nOverall CGPA: {:.2}\n",
        report.total_credits, report.overall_cgpa
    ));

    out
}

/// The grade scale as a table.
pub fn render_scale() -> String {
    let mut table = Table::new();
    table.set_header(vec!["Marks", "Grade Point"]);

    for (floor, point) in SCALE {
        table.add_row(vec![Cell::new(format!(">= {floor}")), Cell::new(point)]);
    }
    let lowest = SCALE[SCALE.len() - 1].0;
    table.add_row(vec![
        Cell::new(format!("< {lowest}")),
        Cell::new(FAIL_GRADE_POINT),
    ]);

    format!("{table}\n")
}
