//! The `gradepoint transcript` command.

use std::path::PathBuf;

use anyhow::Result;

use gradepoint_core::config::{load_config_from, OutputFormat};
use gradepoint_core::report::TranscriptReport;
use gradepoint_core::transcript::{parse_transcript, validate_transcript};
use gradepoint_report::html::write_html_report;
use gradepoint_report::table::render_transcript;

/// File-name-safe form of a student id.
fn file_stem(student_id: &str) -> String {
    student_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

pub fn execute(
    file: PathBuf,
    format: Option<String>,
    output: Option<PathBuf>,
    detailed: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = match format {
        Some(f) => f
            .parse::<OutputFormat>()
            .map_err(|e| anyhow::anyhow!("{e}"))?,
        None => config.default_format,
    };

    let student = parse_transcript(&file)?;
    for w in validate_transcript(&student) {
        tracing::warn!(semester = ?w.semester, "{}", w.message);
    }

    let report = TranscriptReport::from_student(&student);
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
    let stem = format!("transcript-{}-{timestamp}", file_stem(&student.student_id));

    match format {
        OutputFormat::Text => {
            print!("{}", render_transcript(&report, detailed));
        }
        OutputFormat::Json => match output {
            Some(dir) => {
                let path = dir.join(format!("{stem}.json"));
                report.save_json(&path)?;
                eprintln!("Transcript saved to: {}", path.display());
            }
            None => println!("{}", serde_json::to_string_pretty(&report)?),
        },
        OutputFormat::Html => {
            let dir = output.unwrap_or(config.output_dir);
            let path = dir.join(format!("{stem}.html"));
            write_html_report(&report, &path)?;
            eprintln!("HTML transcript: {}", path.display());
        }
    }

    Ok(())
}
