//! Record model: students, semesters, and courses.
//!
//! Grade points, GPA, and CGPA are methods rather than stored fields, so
//! they are always recomputed from the current marks and credits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::weighted_average;
use crate::error::RecordError;
use crate::scale::grade_point;

/// Longest accepted course name.
pub const MAX_COURSE_NAME_LEN: usize = 200;
/// Longest accepted course code.
pub const MAX_COURSE_CODE_LEN: usize = 50;
pub const MAX_SEMESTER_NAME_LEN: usize = 50;
pub const MAX_STUDENT_NAME_LEN: usize = 100;
pub const MAX_STUDENT_ID_LEN: usize = 50;
pub const MAX_PROGRAM_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 120;

/// Usual credit range for a single course. Values outside it load but are
/// reported by transcript validation.
pub const TYPICAL_CREDITS: std::ops::RangeInclusive<f64> = 0.5..=10.0;

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), RecordError> {
    let len = value.chars().count();
    if len > max {
        return Err(RecordError::TooLong { field, max, len });
    }
    Ok(())
}

/// A single course taken in a semester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course title.
    pub name: String,
    /// Catalogue code (e.g. "CS201").
    #[serde(default)]
    pub code: Option<String>,
    /// Subject area (e.g. "Mathematics").
    #[serde(default)]
    pub subject_area: Option<String>,
    /// Credit value, strictly positive.
    pub credits: f64,
    /// Marks in `[0, 100]`.
    pub marks: f64,
}

impl Course {
    /// Create a course, checking the credits and marks invariants.
    pub fn new(name: impl Into<String>, credits: f64, marks: f64) -> Result<Self, RecordError> {
        let course = Self {
            name: name.into(),
            code: None,
            subject_area: None,
            credits,
            marks,
        };
        course.validate()?;
        Ok(course)
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_subject_area(mut self, subject_area: impl Into<String>) -> Self {
        self.subject_area = Some(subject_area.into());
        self
    }

    /// Check every field against the record invariants.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.name.trim().is_empty() {
            return Err(RecordError::Required {
                field: "course name",
            });
        }
        check_len("course name", &self.name, MAX_COURSE_NAME_LEN)?;
        if let Some(code) = &self.code {
            check_len("course code", code, MAX_COURSE_CODE_LEN)?;
        }
        if !(self.credits.is_finite() && self.credits > 0.0) {
            return Err(RecordError::NonPositiveCredits(self.credits));
        }
        if !(0.0..=100.0).contains(&self.marks) {
            return Err(RecordError::MarksOutOfRange(self.marks));
        }
        Ok(())
    }

    /// Grade point for the current marks.
    pub fn grade_point(&self) -> u8 {
        grade_point(self.marks)
    }
}

/// One academic term and the courses taken in it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Semester {
    /// Display name (e.g. "Fall 2024").
    pub name: String,
    /// Position in the programme, starting at 1.
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Semester {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_number(mut self, number: u32) -> Self {
        self.number = Some(number);
        self
    }

    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(course);
        self
    }

    pub fn add_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Check the semester's own fields and every course in it.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.name.trim().is_empty() {
            return Err(RecordError::Required {
                field: "semester name",
            });
        }
        check_len("semester name", &self.name, MAX_SEMESTER_NAME_LEN)?;
        if let Some(number) = self.number {
            if number < 1 {
                return Err(RecordError::InvalidSemesterNumber(number));
            }
        }
        self.courses.iter().try_for_each(Course::validate)
    }

    /// Sum of course credits.
    pub fn total_credits(&self) -> f64 {
        self.courses.iter().map(|c| c.credits).sum()
    }

    /// Credit-weighted mean grade point, `0.0` with no credits.
    pub fn gpa(&self) -> f64 {
        weighted_average(
            self.courses
                .iter()
                .map(|c| (c.credits, f64::from(c.grade_point()))),
        )
    }
}

/// A student and their semesters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    /// Institutional identifier (e.g. "S-1001").
    pub student_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub program: Option<String>,
    /// Year of study.
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub semesters: Vec<Semester>,
}

impl Student {
    pub fn new(name: impl Into<String>, student_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            student_id: student_id.into(),
            email: None,
            program: None,
            year: None,
            semesters: Vec::new(),
        }
    }

    pub fn with_semester(mut self, semester: Semester) -> Self {
        self.semesters.push(semester);
        self
    }

    pub fn add_semester(&mut self, semester: Semester) {
        self.semesters.push(semester);
    }

    pub fn validate(&self) -> Result<(), RecordError> {
        if self.name.trim().is_empty() {
            return Err(RecordError::Required {
                field: "student name",
            });
        }
        if self.student_id.trim().is_empty() {
            return Err(RecordError::Required {
                field: "student id",
            });
        }
        check_len("student name", &self.name, MAX_STUDENT_NAME_LEN)?;
        check_len("student id", &self.student_id, MAX_STUDENT_ID_LEN)?;
        if let Some(program) = &self.program {
            check_len("program", program, MAX_PROGRAM_LEN)?;
        }
        if let Some(email) = &self.email {
            check_len("email", email, MAX_EMAIL_LEN)?;
        }
        self.semesters.iter().try_for_each(Semester::validate)
    }

    /// Sum of credits across all semesters.
    pub fn total_credits(&self) -> f64 {
        self.semesters.iter().map(Semester::total_credits).sum()
    }

    /// Semester GPAs weighted by semester credits.
    ///
    /// Semesters without credits are left out entirely; `0.0` when none
    /// remain.
    pub fn overall_cgpa(&self) -> f64 {
        weighted_average(
            self.semesters
                .iter()
                .map(|s| (s.total_credits(), s))
                .filter(|(credits, _)| *credits > 0.0)
                .map(|(credits, s)| (credits, s.gpa())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn semester(courses: &[(f64, f64)]) -> Semester {
        courses
            .iter()
            .enumerate()
            .fold(Semester::new("Term"), |s, (i, &(credits, marks))| {
                s.with_course(Course::new(format!("Course {i}"), credits, marks).unwrap())
            })
    }

    #[test]
    fn course_invariants() {
        assert!(Course::new("Algebra", 4.0, 95.0).is_ok());
        assert_eq!(
            Course::new("Algebra", 0.0, 95.0),
            Err(RecordError::NonPositiveCredits(0.0))
        );
        assert_eq!(
            Course::new("Algebra", 3.0, 100.5),
            Err(RecordError::MarksOutOfRange(100.5))
        );
        assert_eq!(
            Course::new("Algebra", 3.0, -1.0),
            Err(RecordError::MarksOutOfRange(-1.0))
        );
        assert!(Course::new("  ", 3.0, 50.0).is_err());
        assert!(Course::new("x".repeat(201), 3.0, 50.0).is_err());
        assert!(Course::new("Algebra", f64::NAN, 50.0).is_err());
    }

    #[test]
    fn course_grade_point_follows_marks() {
        let mut course = Course::new("Physics", 3.0, 85.0).unwrap();
        assert_eq!(course.grade_point(), 9);
        course.marks = 45.0;
        assert_eq!(course.grade_point(), 5);
    }

    #[test]
    fn semester_gpa_weighted_by_credits() {
        let s = semester(&[(4.0, 95.0), (3.0, 55.0)]);
        assert!(approx(s.total_credits(), 7.0));
        assert!(approx(s.gpa(), 8.29));
    }

    #[test]
    fn empty_semester_gpa_is_zero() {
        let s = Semester::new("Empty");
        assert_eq!(s.total_credits(), 0.0);
        assert_eq!(s.gpa(), 0.0);
    }

    #[test]
    fn single_semester_cgpa_equals_gpa() {
        let student = Student::new("Asha", "S-1").with_semester(semester(&[(4.0, 95.0), (3.0, 55.0)]));
        assert!(approx(student.overall_cgpa(), 8.29));
    }

    #[test]
    fn cgpa_weighted_by_semester_credits() {
        // 8.29 over 7 credits, 10.0 over 3 credits: (58.03 + 30) / 10
        let student = Student::new("Asha", "S-1")
            .with_semester(semester(&[(4.0, 95.0), (3.0, 55.0)]))
            .with_semester(semester(&[(3.0, 91.0)]));
        assert!(approx(student.total_credits(), 10.0));
        assert!(approx(student.overall_cgpa(), 8.8));
    }

    #[test]
    fn empty_semesters_do_not_drag_cgpa() {
        let only_empty = Student::new("Ravi", "S-2").with_semester(Semester::new("Empty"));
        assert_eq!(only_empty.overall_cgpa(), 0.0);

        let mixed = Student::new("Ravi", "S-2")
            .with_semester(Semester::new("Empty"))
            .with_semester(semester(&[(4.0, 72.0)]));
        assert!(approx(mixed.overall_cgpa(), 8.0));
    }

    #[test]
    fn no_semesters_cgpa_is_zero() {
        assert_eq!(Student::new("Mei", "S-3").overall_cgpa(), 0.0);
    }

    #[test]
    fn edits_are_reflected_immediately() {
        let mut student = Student::new("Asha", "S-1").with_semester(semester(&[(4.0, 95.0)]));
        assert!(approx(student.overall_cgpa(), 10.0));
        student.semesters[0].courses[0].marks = 65.0;
        assert!(approx(student.overall_cgpa(), 7.0));
        student.semesters[0].add_course(Course::new("Extra", 4.0, 95.0).unwrap());
        assert!(approx(student.overall_cgpa(), 8.5));
    }

    #[test]
    fn semester_number_must_be_positive() {
        let s = Semester::new("Zero").with_number(0);
        assert_eq!(s.validate(), Err(RecordError::InvalidSemesterNumber(0)));
    }

    #[test]
    fn record_length_limits() {
        let long = Semester::new("x".repeat(51));
        assert_eq!(
            long.validate(),
            Err(RecordError::TooLong {
                field: "semester name",
                max: MAX_SEMESTER_NAME_LEN,
                len: 51,
            })
        );
        assert!(Semester::new("x".repeat(50)).validate().is_ok());

        assert!(Student::new("n".repeat(100), "S-1").validate().is_ok());
        assert!(matches!(
            Student::new("n".repeat(101), "S-1").validate(),
            Err(RecordError::TooLong { field: "student name", .. })
        ));
        assert!(matches!(
            Student::new("Asha", "9".repeat(51)).validate(),
            Err(RecordError::TooLong { field: "student id", .. })
        ));

        let mut student = Student::new("Asha", "S-1");
        student.program = Some("p".repeat(101));
        assert!(matches!(
            student.validate(),
            Err(RecordError::TooLong { field: "program", .. })
        ));
        student.program = None;
        student.email = Some(format!("{}@example.edu", "a".repeat(120)));
        assert!(matches!(
            student.validate(),
            Err(RecordError::TooLong { field: "email", .. })
        ));
    }

    #[test]
    fn student_validation_reaches_semesters() {
        let student = Student::new("Asha", "S-1").with_semester(Semester::new("y".repeat(60)));
        assert!(matches!(
            student.validate(),
            Err(RecordError::TooLong { field: "semester name", .. })
        ));
    }

    #[test]
    fn student_serde_roundtrip() {
        let student = Student::new("Asha", "S-1").with_semester(semester(&[(4.0, 95.0)]));
        let json = serde_json::to_string(&student).unwrap();
        let back: Student = serde_json::from_str(&json).unwrap();
        assert_eq!(back, student);
    }
}
