//! Student Module
//!
//! The student record and everything derived from it.
//!
//! ## Responsibilities
//! - Validate raw input (id, name, marks, attendance)
//! - Compute CGPA as (average mark) / 10, rounded to two decimals
//! - Assign the fee slab from the CGPA threshold table
//! - Decide exam eligibility from attendance
//!
//! ## Fee Slab Table
//! ```text
//! ┌──────────────┬──────────────────┐
//! │ CGPA         │ Slab             │
//! ├──────────────┼──────────────────┤
//! │ >= 8.5       │ First Slab       │
//! │ >= 8.0       │ Second Slab      │
//! │ >= 7.5       │ Third Slab       │
//! │ otherwise    │ No slab assigned │
//! └──────────────┴──────────────────┘
//! ```

mod record;
mod validate;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use record::Student;
pub use validate::{
    parse_marks, validate_attendance, validate_cgpa, validate_id, validate_marks, validate_name,
};

/// Minimum attendance percentage required to sit the exam
pub const ELIGIBILITY_THRESHOLD: f64 = 75.0;

/// Fee tier assigned from a student's CGPA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeSlab {
    First,
    Second,
    Third,
    Unassigned,
}

impl FeeSlab {
    /// Look up the slab for a CGPA
    pub fn from_cgpa(cgpa: f64) -> Self {
        if cgpa >= 8.5 {
            FeeSlab::First
        } else if cgpa >= 8.0 {
            FeeSlab::Second
        } else if cgpa >= 7.5 {
            FeeSlab::Third
        } else {
            FeeSlab::Unassigned
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeeSlab::First => "First Slab",
            FeeSlab::Second => "Second Slab",
            FeeSlab::Third => "Third Slab",
            FeeSlab::Unassigned => "No slab assigned",
        }
    }
}

impl fmt::Display for FeeSlab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
