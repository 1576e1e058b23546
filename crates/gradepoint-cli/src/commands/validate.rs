//! The `gradepoint validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(transcript_path: PathBuf) -> Result<()> {
    let student = gradepoint_core::transcript::parse_transcript(&transcript_path)?;

    let course_count: usize = student.semesters.iter().map(|s| s.courses.len()).sum();
    println!(
        "Transcript: {} ({} semesters, {} courses)",
        student.name,
        student.semesters.len(),
        course_count
    );

    let warnings = gradepoint_core::transcript::validate_transcript(&student);
    for w in &warnings {
        let prefix = w
            .semester
            .as_ref()
            .map(|name| format!("  [{name}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Transcript valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
