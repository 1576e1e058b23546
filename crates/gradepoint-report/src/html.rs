//! HTML transcript generator.
//!
//! Produces a self-contained HTML file with all CSS/JS inlined.

use anyhow::Result;
use std::path::Path;

use gradepoint_core::report::{SemesterSummary, TranscriptReport};
use gradepoint_core::scale::MAX_GRADE_POINT;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// CSS class for a grade point: strong, middling, or zero.
fn grade_class(grade_point: u8) -> &'static str {
    match grade_point {
        8..=u8::MAX => "high",
        4..=7 => "mid",
        _ => "fail",
    }
}

/// Generate an HTML page from a transcript report.
pub fn generate_html(report: &TranscriptReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>Transcript: {}</title>\n",
        html_escape(&report.student.name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!(
        "<h1>{} <span class=\"meta\">({})</span></h1>\n",
        html_escape(&report.student.name),
        html_escape(&report.student.student_id)
    ));
    let mut details = Vec::new();
    if let Some(program) = &report.student.program {
        details.push(html_escape(program));
    }
    if let Some(year) = report.student.year {
        details.push(format!("Year {year}"));
    }
    details.push(format!(
        "Generated {}",
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str(&format!("<p class=\"meta\">{}</p>\n", details.join(" | ")));
    html.push_str("</header>\n");

    // Summary dashboard
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Summary</h2>\n");
    html.push_str(&format!(
        "<p class=\"cgpa\">Overall CGPA <strong>{:.2}</strong> over {:.1} credits, {} semesters, {} courses</p>\n",
        report.overall_cgpa,
        report.total_credits,
        report.semesters.len(),
        report.course_count()
    ));

    html.push_str("<table class=\"summary\" id=\"semesters\">\n");
    html.push_str("<thead><tr><th onclick=\"sortTable(0)\">Semester</th><th onclick=\"sortTable(1)\">No.</th><th onclick=\"sortTable(2)\">Courses</th><th onclick=\"sortTable(3)\">Credits</th><th onclick=\"sortTable(4)\">GPA</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for s in &report.semesters {
        let gpa = if s.counts_toward_cgpa {
            format!("{:.2}", s.gpa)
        } else {
            "-".to_string()
        };
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td><td>{}</td></tr>\n",
            html_escape(&s.name),
            s.number.map_or_else(|| "-".to_string(), |n| n.to_string()),
            s.courses.len(),
            s.total_credits,
            gpa,
        ));
    }
    html.push_str("</tbody></table>\n");

    // SVG bar chart for semester GPA
    if report.semesters.iter().any(|s| s.counts_toward_cgpa) {
        html.push_str(&generate_bar_chart(&report.semesters));
    }

    html.push_str("</section>\n");

    // Per-semester course tables
    html.push_str("<section class=\"semesters\">\n");
    html.push_str("<h2>Courses</h2>\n");
    for s in &report.semesters {
        html.push_str(&format!("<h3>{}</h3>\n", html_escape(&s.name)));
        if s.courses.is_empty() {
            html.push_str("<p class=\"meta\">No courses recorded.</p>\n");
            continue;
        }
        html.push_str("<table class=\"courses\">\n");
        html.push_str("<thead><tr><th>Course</th><th>Code</th><th>Subject Area</th><th>Credits</th><th>Marks</th><th>Grade Point</th></tr></thead>\n");
        html.push_str("<tbody>\n");
        for c in &s.courses {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td><td>{:.1}</td><td class=\"{}\">{}</td></tr>\n",
                html_escape(&c.name),
                html_escape(c.code.as_deref().unwrap_or("-")),
                html_escape(c.subject_area.as_deref().unwrap_or("-")),
                c.credits,
                c.marks,
                grade_class(c.grade_point),
                c.grade_point,
            ));
        }
        html.push_str("</tbody></table>\n");
    }
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    // JavaScript for sorting
    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML transcript to a file.
pub fn write_html_report(report: &TranscriptReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn generate_bar_chart(semesters: &[SemesterSummary]) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 200;

    let bars: Vec<(&str, f64)> = semesters
        .iter()
        .filter(|s| s.counts_toward_cgpa)
        .map(|s| (s.name.as_str(), s.gpa))
        .collect();

    let total_height = bars.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, (name, gpa)) in bars.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let width = (gpa / f64::from(MAX_GRADE_POINT) * max_width as f64) as usize;

        let color = if *gpa >= 8.0 {
            "#22c55e"
        } else if *gpa >= 5.0 {
            "#eab308"
        } else {
            "#ef4444"
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(name)
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{:.2}</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            gpa
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --high: #dcfce7; --mid: #fef9c3; --fail: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --high: #064e3b; --mid: #713f12; --fail: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.cgpa strong { font-size: 1.5rem; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
#semesters th { cursor: pointer; }
.high { background: var(--high); }
.mid { background: var(--mid); }
.fail { background: var(--fail); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

const JS: &str = r#"
function sortTable(col) {
  const table = document.getElementById('semesters');
  const tbody = table.querySelector('tbody');
  const rows = Array.from(tbody.querySelectorAll('tr'));
  const asc = table.dataset.sortCol == col && table.dataset.sortDir == 'asc' ? false : true;
  rows.sort((a, b) => {
    const va = a.cells[col].textContent;
    const vb = b.cells[col].textContent;
    const na = parseFloat(va), nb = parseFloat(vb);
    if (!isNaN(na) && !isNaN(nb)) return asc ? na - nb : nb - na;
    return asc ? va.localeCompare(vb) : vb.localeCompare(va);
  });
  table.dataset.sortCol = col;
  table.dataset.sortDir = asc ? 'asc' : 'desc';
  rows.forEach(r => tbody.appendChild(r));
}
"#;
