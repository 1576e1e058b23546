//! gradepoint-report: renderers for batch listings and transcripts.

pub mod batch;
pub mod html;
pub mod table;
