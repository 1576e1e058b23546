pub mod grade;
pub mod init;
pub mod report;
pub mod scale;
pub mod transcript;
pub mod validate;
