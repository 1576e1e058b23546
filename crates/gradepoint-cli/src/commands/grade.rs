//! The `gradepoint grade` command.

use anyhow::Result;

use gradepoint_core::scale::grade_point;

pub fn execute(marks: &[f64]) -> Result<()> {
    for &m in marks {
        anyhow::ensure!(
            (0.0..=100.0).contains(&m),
            "marks must be between 0 and 100, got {m}"
        );
    }

    for &m in marks {
        println!("{m} -> {}", grade_point(m));
    }

    Ok(())
}
