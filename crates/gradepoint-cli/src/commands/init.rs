//! The `gradepoint init` command.

use std::path::Path;

use anyhow::Result;

const STARTER_FILES: [(&str, &str); 3] = [
    ("gradepoint.toml", SAMPLE_CONFIG),
    ("courses.csv", SAMPLE_COURSES),
    ("transcript.toml", SAMPLE_TRANSCRIPT),
];

pub fn execute() -> Result<()> {
    for (name, content) in STARTER_FILES {
        if Path::new(name).exists() {
            println!("{name} already exists, skipping.");
        } else {
            std::fs::write(name, content)?;
            println!("Created {name}");
        }
    }

    println!("\nNext steps:");
    println!("  1. Replace the sample rows in courses.csv with your own courses");
    println!("  2. Run: gradepoint report courses.csv");
    println!("  3. Run: gradepoint transcript --file transcript.toml --detailed");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradepoint configuration

# CSV read by `gradepoint report` when no file is given
batch_file = "courses.csv"

# Where `gradepoint transcript --format html` writes its pages
output_dir = "./gradepoint-results"

# text, json, or html
default_format = "text"
"#;

const SAMPLE_COURSES: &str = "\
Course Name,Subject Area,Credits,Marks
Data Structures,Computer Science,4,92
Linear Algebra,Mathematics,3,78
Engineering Physics,Physics,4,64
Technical Writing,Humanities,2,55
";

const SAMPLE_TRANSCRIPT: &str = r#"[student]
name = "Asha Rao"
student_id = "S-1001"
email = "asha.rao@example.edu"
program = "B.Tech Computer Science"
year = 2

[[semesters]]
name = "Fall 2024"
number = 1
year = 2024
start_date = "2024-08-01"
end_date = "2024-12-15"

[[semesters.courses]]
name = "Programming Fundamentals"
code = "CS101"
subject_area = "Computer Science"
credits = 4
marks = 88

[[semesters.courses]]
name = "Calculus I"
code = "MA101"
subject_area = "Mathematics"
credits = 3
marks = 74

[[semesters]]
name = "Spring 2025"
number = 2
year = 2025
start_date = "2025-01-06"
end_date = "2025-05-20"

[[semesters.courses]]
name = "Data Structures"
code = "CS201"
subject_area = "Computer Science"
credits = 4
marks = 95

[[semesters.courses]]
name = "Technical Writing"
code = "HU110"
subject_area = "Humanities"
credits = 3
marks = 55
"#;
