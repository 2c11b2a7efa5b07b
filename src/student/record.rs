//! Student record
//!
//! Raw fields plus the derived CGPA and fee slab.

use serde::{Deserialize, Serialize};

use crate::error::{GradebookError, Result};

use super::validate::{validate_attendance, validate_cgpa, validate_id, validate_marks, validate_name};
use super::{FeeSlab, ELIGIBILITY_THRESHOLD};

/// A validated student record
///
/// Derived fields are computed once in `new` and never stored on disk:
/// the serialized form carries only the raw fields and decoding goes
/// back through `new`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "StoredStudent", try_from = "StoredStudent")]
pub struct Student {
    id: u32,
    name: String,
    marks: Vec<f64>,
    attendance: f64,
    cgpa: f64,
    fee_slab: FeeSlab,
}

/// On-disk shape of a student
#[derive(Serialize, Deserialize)]
struct StoredStudent {
    id: u32,
    name: String,
    marks: Vec<f64>,
    attendance: f64,
}

impl Student {
    /// Validate the raw fields and build a record
    pub fn new(id: u32, name: impl Into<String>, marks: Vec<f64>, attendance: f64) -> Result<Self> {
        let name = name.into().trim().to_string();

        validate_id(id)?;
        validate_name(&name)?;
        validate_marks(&marks)?;
        validate_attendance(attendance)?;

        let cgpa = compute_cgpa(&marks);
        validate_cgpa(cgpa)?;

        Ok(Self {
            id,
            name,
            marks,
            attendance,
            cgpa,
            fee_slab: FeeSlab::from_cgpa(cgpa),
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marks(&self) -> &[f64] {
        &self.marks
    }

    /// Attendance percentage (0-100)
    pub fn attendance(&self) -> f64 {
        self.attendance
    }

    pub fn cgpa(&self) -> f64 {
        self.cgpa
    }

    pub fn fee_slab(&self) -> FeeSlab {
        self.fee_slab
    }

    /// Whether attendance allows sitting the exam
    pub fn is_eligible(&self) -> bool {
        self.attendance >= ELIGIBILITY_THRESHOLD
    }
}

/// Average mark divided by ten, rounded to two decimals
fn compute_cgpa(marks: &[f64]) -> f64 {
    let average = marks.iter().sum::<f64>() / marks.len() as f64;
    (average / 10.0 * 100.0).round() / 100.0
}

impl From<Student> for StoredStudent {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
            marks: student.marks,
            attendance: student.attendance,
        }
    }
}

impl TryFrom<StoredStudent> for Student {
    type Error = GradebookError;

    fn try_from(stored: StoredStudent) -> Result<Self> {
        Student::new(stored.id, stored.name, stored.marks, stored.attendance)
    }
}
