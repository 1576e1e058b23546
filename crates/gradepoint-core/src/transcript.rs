//! TOML transcript loader.
//!
//! A transcript file holds one student and their semesters and courses.
//! Loading goes through the record constructors, so a loaded [`Student`]
//! always satisfies the record invariants.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::model::{Course, Semester, Student, TYPICAL_CREDITS};

/// Intermediate TOML structure for transcript files.
#[derive(Debug, Deserialize)]
struct TomlTranscript {
    student: TomlStudent,
    #[serde(default)]
    semesters: Vec<TomlSemester>,
}

#[derive(Debug, Deserialize)]
struct TomlStudent {
    name: String,
    student_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    program: Option<String>,
    #[serde(default)]
    year: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct TomlSemester {
    name: String,
    #[serde(default)]
    number: Option<u32>,
    #[serde(default)]
    year: Option<i32>,
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default)]
    end_date: Option<String>,
    #[serde(default)]
    courses: Vec<TomlCourse>,
}

#[derive(Debug, Deserialize)]
struct TomlCourse {
    name: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    subject_area: Option<String>,
    credits: f64,
    marks: f64,
}

const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(raw: Option<String>, field: &str, semester: &str) -> Result<Option<NaiveDate>> {
    raw.map(|s| {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).with_context(|| {
            format!("semester '{semester}': {field} '{s}' is not a YYYY-MM-DD date")
        })
    })
    .transpose()
}

/// Parse a transcript file into a [`Student`].
pub fn parse_transcript(path: &Path) -> Result<Student> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read transcript file: {}", path.display()))?;

    parse_transcript_str(&content, path)
}

/// Parse transcript TOML from a string (useful for testing).
pub fn parse_transcript_str(content: &str, source_path: &Path) -> Result<Student> {
    let parsed: TomlTranscript = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let semesters = parsed
        .semesters
        .into_iter()
        .map(|s| {
            let courses = s
                .courses
                .into_iter()
                .map(|c| {
                    let course = Course {
                        name: c.name,
                        code: c.code,
                        subject_area: c.subject_area,
                        credits: c.credits,
                        marks: c.marks,
                    };
                    course.validate().with_context(|| {
                        format!("semester '{}', course '{}'", s.name, course.name)
                    })?;
                    Ok(course)
                })
                .collect::<Result<Vec<_>>>()?;

            let semester = Semester {
                start_date: parse_date(s.start_date, "start_date", &s.name)?,
                end_date: parse_date(s.end_date, "end_date", &s.name)?,
                name: s.name,
                number: s.number,
                year: s.year,
                courses,
            };
            semester
                .validate()
                .with_context(|| format!("semester '{}'", semester.name))?;

            tracing::debug!(
                semester = %semester.name,
                courses = semester.courses.len(),
                "loaded semester"
            );
            Ok(semester)
        })
        .collect::<Result<Vec<_>>>()?;

    let student = Student {
        name: parsed.student.name,
        student_id: parsed.student.student_id,
        email: parsed.student.email,
        program: parsed.student.program,
        year: parsed.student.year,
        semesters,
    };
    student.validate().context("invalid student record")?;

    Ok(student)
}

/// A warning from transcript validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The semester name (if applicable).
    pub semester: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Check a loaded transcript for suspicious but loadable data.
pub fn validate_transcript(student: &Student) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if student.semesters.is_empty() {
        warnings.push(ValidationWarning {
            semester: None,
            message: "transcript has no semesters".into(),
        });
    }

    if let Some(email) = student.email.as_deref() {
        if !looks_like_email(email) {
            warnings.push(ValidationWarning {
                semester: None,
                message: format!("email '{email}' does not look like an address"),
            });
        }
    }

    // A student takes each semester number once
    let mut seen_numbers: HashMap<u32, &str> = HashMap::new();
    for semester in &student.semesters {
        if let Some(number) = semester.number {
            if let Some(first) = seen_numbers.insert(number, &semester.name) {
                warnings.push(ValidationWarning {
                    semester: Some(semester.name.clone()),
                    message: format!("duplicate semester number {number} (also used by '{first}')"),
                });
            }
        }
    }

    for semester in &student.semesters {
        if semester.courses.is_empty() {
            warnings.push(ValidationWarning {
                semester: Some(semester.name.clone()),
                message: "semester has no courses and is left out of the CGPA".into(),
            });
        }
    }

    for semester in &student.semesters {
        if let (Some(start), Some(end)) = (semester.start_date, semester.end_date) {
            if end < start {
                warnings.push(ValidationWarning {
                    semester: Some(semester.name.clone()),
                    message: format!("end date {end} is before start date {start}"),
                });
            }
        }
    }

    for semester in &student.semesters {
        for course in &semester.courses {
            if !TYPICAL_CREDITS.contains(&course.credits) {
                warnings.push(ValidationWarning {
                    semester: Some(semester.name.clone()),
                    message: format!(
                        "course '{}' has {} credits, outside {}-{}",
                        course.name,
                        course.credits,
                        TYPICAL_CREDITS.start(),
                        TYPICAL_CREDITS.end()
                    ),
                });
            }
        }
    }

    for semester in &student.semesters {
        let mut seen_codes = std::collections::HashSet::new();
        for code in semester.courses.iter().filter_map(|c| c.code.as_deref()) {
            if !seen_codes.insert(code) {
                warnings.push(ValidationWarning {
                    semester: Some(semester.name.clone()),
                    message: format!("duplicate course code: {code}"),
                });
            }
        }
    }

    warnings
}

fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, _)| !host.is_empty())
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[student]
name = "Asha Rao"
student_id = "S-1001"
email = "asha@example.edu"
program = "B.Tech CSE"
year = 2

[[semesters]]
name = "Fall 2024"
number = 1
year = 2024
start_date = "2024-08-01"
end_date = "2024-12-15"

[[semesters.courses]]
name = "Data Structures"
code = "CS201"
subject_area = "Computer Science"
credits = 4
marks = 95

[[semesters.courses]]
name = "Technical Writing"
subject_area = "Humanities"
credits = 3
marks = 55.5

[[semesters]]
name = "Spring 2025"
number = 2

[[semesters.courses]]
name = "Linear Algebra"
code = "MA202"
credits = 3
marks = 91
"#;

    #[test]
    fn parse_valid_toml() {
        let student = parse_transcript_str(VALID_TOML, &PathBuf::from("t.toml")).unwrap();
        assert_eq!(student.name, "Asha Rao");
        assert_eq!(student.student_id, "S-1001");
        assert_eq!(student.year, Some(2));
        assert_eq!(student.semesters.len(), 2);

        let fall = &student.semesters[0];
        assert_eq!(fall.number, Some(1));
        assert_eq!(fall.start_date, NaiveDate::from_ymd_opt(2024, 8, 1));
        assert_eq!(fall.courses[0].code.as_deref(), Some("CS201"));
        assert_eq!(fall.courses[1].code, None);
        assert!((fall.gpa() - 8.29).abs() < 1e-9);

        assert!((student.overall_cgpa() - 8.8).abs() < 1e-9);
        assert!(validate_transcript(&student).is_empty());
    }

    #[test]
    fn parse_minimal() {
        let toml = r#"
[student]
name = "Mei"
student_id = "S-7"
"#;
        let student = parse_transcript_str(toml, &PathBuf::from("t.toml")).unwrap();
        assert!(student.semesters.is_empty());
        assert_eq!(student.overall_cgpa(), 0.0);
        let warnings = validate_transcript(&student);
        assert!(warnings.iter().any(|w| w.message.contains("no semesters")));
    }

    #[test]
    fn rejects_marks_out_of_range() {
        let toml = r#"
[student]
name = "Mei"
student_id = "S-7"

[[semesters]]
name = "Term 1"

[[semesters.courses]]
name = "Chemistry"
credits = 3
marks = 101
"#;
        let err = parse_transcript_str(toml, &PathBuf::from("t.toml")).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("Chemistry"), "{msg}");
        assert!(msg.contains("marks must be between 0 and 100"), "{msg}");
    }

    #[test]
    fn rejects_zero_credits() {
        let toml = r#"
[student]
name = "Mei"
student_id = "S-7"

[[semesters]]
name = "Term 1"

[[semesters.courses]]
name = "Seminar"
credits = 0
marks = 80
"#;
        let err = parse_transcript_str(toml, &PathBuf::from("t.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("credits must be greater than 0"));
    }

    #[test]
    fn rejects_bad_date() {
        let toml = r#"
[student]
name = "Mei"
student_id = "S-7"

[[semesters]]
name = "Term 1"
start_date = "01/08/2024"
"#;
        let err = parse_transcript_str(toml, &PathBuf::from("t.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("start_date"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        assert!(parse_transcript_str(bad, &PathBuf::from("bad.toml")).is_err());
    }

    #[test]
    fn validate_flags_suspicious_data() {
        let toml = r#"
[student]
name = "Ravi"
student_id = "S-2"

[[semesters]]
name = "First"
number = 1
start_date = "2024-12-01"
end_date = "2024-08-01"

[[semesters.courses]]
name = "Physics"
code = "PH101"
credits = 4
marks = 70

[[semesters.courses]]
name = "Physics Lab"
code = "PH101"
credits = 1
marks = 90

[[semesters]]
name = "Also First"
number = 1
"#;
        let student = parse_transcript_str(toml, &PathBuf::from("t.toml")).unwrap();
        let warnings = validate_transcript(&student);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate semester number 1")));
        assert!(warnings.iter().any(|w| w.message.contains("no courses")));
        assert!(warnings.iter().any(|w| w.message.contains("before start date")));
        assert!(warnings.iter().any(|w| w.message.contains("duplicate course code")));
    }

    #[test]
    fn validate_flags_odd_credits_and_email() {
        let toml = r#"
[student]
name = "Ravi"
student_id = "S-2"
email = "ravi at example"

[[semesters]]
name = "First"

[[semesters.courses]]
name = "Project"
credits = 12
marks = 80

[[semesters.courses]]
name = "Colloquium"
credits = 0.25
marks = 90

[[semesters.courses]]
name = "Optics"
credits = 0.5
marks = 70
"#;
        let student = parse_transcript_str(toml, &PathBuf::from("t.toml")).unwrap();
        let warnings = validate_transcript(&student);
        assert!(warnings
            .iter()
            .any(|w| w.semester.is_none() && w.message.contains("ravi at example")));
        assert!(warnings.iter().any(|w| w.message.contains("'Project' has 12 credits")));
        assert!(warnings.iter().any(|w| w.message.contains("'Colloquium' has 0.25 credits")));
        assert!(!warnings.iter().any(|w| w.message.contains("Optics")));
        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn email_shapes() {
        assert!(looks_like_email("asha@example.edu"));
        assert!(!looks_like_email("asha@"));
        assert!(!looks_like_email("@example.edu"));
        assert!(!looks_like_email("asha@localhost"));
        assert!(!looks_like_email("asha@@example.edu"));
        assert!(!looks_like_email("asha rao@example.edu"));
    }

    #[test]
    fn rejects_overlong_student_name() {
        let toml = format!("[student]\nname = \"{}\"\nstudent_id = \"S-7\"\n", "n".repeat(101));
        let err = parse_transcript_str(&toml, &PathBuf::from("t.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("student name must be at most 100 characters"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.toml");
        std::fs::write(&path, VALID_TOML).unwrap();

        let student = parse_transcript(&path).unwrap();
        assert_eq!(student.semesters.len(), 2);

        let missing = parse_transcript(&dir.path().join("missing.toml"));
        assert!(missing.is_err());
    }
}
