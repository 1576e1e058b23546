//! The 10-point grade scale.
//!
//! Marks (0–100) map onto a fixed set of grade points. There are no grade
//! points between 1 and 3: anything below 30 marks is worth 0.

/// Lower bound (inclusive) of each graded band, highest first.
///
/// | marks | grade point |
/// |-------|-------------|
/// | >= 90 | 10          |
/// | >= 80 | 9           |
/// | >= 70 | 8           |
/// | >= 60 | 7           |
/// | >= 50 | 6           |
/// | >= 40 | 5           |
/// | >= 30 | 4           |
/// | < 30  | 0           |
pub const SCALE: [(f64, u8); 7] = [
    (90.0, 10),
    (80.0, 9),
    (70.0, 8),
    (60.0, 7),
    (50.0, 6),
    (40.0, 5),
    (30.0, 4),
];

/// Grade point awarded below the lowest band.
pub const FAIL_GRADE_POINT: u8 = 0;

/// Highest grade point on the scale.
pub const MAX_GRADE_POINT: u8 = 10;

/// Convert marks to a grade point.
///
/// Bands are checked from the top down and the first match wins. Negative
/// marks are not meaningful; they fall through to [`FAIL_GRADE_POINT`] like
/// any other mark below 30.
pub fn grade_point(marks: f64) -> u8 {
    SCALE
        .iter()
        .find(|(floor, _)| marks >= *floor)
        .map(|&(_, point)| point)
        .unwrap_or(FAIL_GRADE_POINT)
}
