//! Input validation
//!
//! Range and shape checks applied before a record is built.

use crate::error::{GradebookError, Result};

pub fn validate_id(id: u32) -> Result<()> {
    if id == 0 {
        return Err(GradebookError::InvalidId(id));
    }
    Ok(())
}

/// Names are letters and spaces, with at least one letter
pub fn validate_name(name: &str) -> Result<()> {
    let mut letters = 0usize;
    for c in name.chars() {
        if c.is_alphabetic() {
            letters += 1;
        } else if c != ' ' {
            return Err(GradebookError::InvalidName(name.to_string()));
        }
    }
    if letters == 0 {
        return Err(GradebookError::InvalidName(name.to_string()));
    }
    Ok(())
}

pub fn validate_marks(marks: &[f64]) -> Result<()> {
    if marks.is_empty() {
        return Err(GradebookError::EmptyMarks);
    }
    match marks.iter().find(|m| !in_range(**m, 100.0)) {
        Some(bad) => Err(GradebookError::InvalidMarks(*bad)),
        None => Ok(()),
    }
}

pub fn validate_attendance(attendance: f64) -> Result<()> {
    if !in_range(attendance, 100.0) {
        return Err(GradebookError::InvalidAttendance(attendance));
    }
    Ok(())
}

pub fn validate_cgpa(cgpa: f64) -> Result<()> {
    if !in_range(cgpa, 10.0) {
        return Err(GradebookError::InvalidCgpa(cgpa));
    }
    Ok(())
}

/// Parse a list of marks separated by commas and/or whitespace
///
/// Only the numeric shape is checked here; ranges are checked by `validate_marks`.
pub fn parse_marks(input: &str) -> Result<Vec<f64>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| GradebookError::InvalidInput(format!("not a number: {:?}", token)))
        })
        .collect()
}

/// NaN and infinities never pass
fn in_range(value: f64, max: f64) -> bool {
    value.is_finite() && (0.0..=max).contains(&value)
}
