//! The `gradepoint scale` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    print!("{}", gradepoint_report::table::render_scale());
    Ok(())
}
