//! Front-end commands
//!
//! Both front-ends translate user input into a `Command`, hand it to
//! `Registry::execute`, and print the `Outcome` it returns. `Outcome`'s
//! `Display` impl is the report text shown to the user.

use std::fmt;
use std::path::PathBuf;

use crate::student::Student;

const SEPARATOR: &str = "---------------------------";

/// A request against the registry
#[derive(Debug, Clone)]
pub enum Command {
    /// Insert a new record
    Add(Student),

    /// Look up a record by id
    Search { id: u32 },

    /// Delete a record by id
    Delete { id: u32 },

    /// CGPA ranking, best first
    Ranking,

    /// All records in id order
    List,

    /// Write a snapshot (`None` = the configured records file)
    Save { path: Option<PathBuf> },

    /// Replace the current records with a snapshot's
    Load { path: PathBuf },
}

/// A record with its 1-based position in the ranking
#[derive(Debug, Clone, PartialEq)]
pub struct RankedStudent {
    pub rank: usize,
    pub student: Student,
}

/// Result of executing a command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added(Student),
    Found(Student),
    NotFound(u32),
    Deleted(Student),
    Ranking(Vec<RankedStudent>),
    Listing(Vec<Student>),
    Saved { path: PathBuf, count: usize },
    Loaded { path: PathBuf, count: usize },
}

/// Full profile of one student
pub struct Profile<'a>(pub &'a Student);

impl fmt::Display for Profile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let student = self.0;
        let marks: Vec<String> = student.marks().iter().map(|m| m.to_string()).collect();

        writeln!(f, "ID: {}", student.id())?;
        writeln!(f, "Name: {}", student.name())?;
        writeln!(f, "Marks: {}", marks.join(" "))?;
        writeln!(f, "CGPA: {:.2}", student.cgpa())?;
        writeln!(f, "Attendance: {}%", student.attendance())?;
        writeln!(f, "Fee Slab: {}", student.fee_slab())?;
        write!(f, "Eligible: {}", yes_no(student.is_eligible()))
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Added(student) => {
                write!(f, "Student with ID {} added successfully.", student.id())
            }
            Outcome::Found(student) => {
                writeln!(f, "Student Found:")?;
                write!(f, "{}", Profile(student))
            }
            Outcome::NotFound(id) => write!(f, "Student with ID {} not found.", id),
            Outcome::Deleted(student) => {
                write!(f, "Student with ID {} deleted successfully.", student.id())
            }
            Outcome::Ranking(ranked) => {
                if ranked.is_empty() {
                    return write!(f, "No students available for ranking.");
                }
                writeln!(f, "=== Student Ranking (by CGPA Descending) ===")?;
                for entry in ranked {
                    let student = &entry.student;
                    writeln!(f, "Rank {}:", entry.rank)?;
                    writeln!(f, "ID: {}", student.id())?;
                    writeln!(f, "Name: {}", student.name())?;
                    writeln!(f, "CGPA: {:.2}", student.cgpa())?;
                    writeln!(f, "Attendance: {}%", student.attendance())?;
                    writeln!(f, "Fee Slab: {}", student.fee_slab())?;
                    writeln!(f, "{}", SEPARATOR)?;
                }
                Ok(())
            }
            Outcome::Listing(students) => {
                if students.is_empty() {
                    return write!(f, "No student records to display.");
                }
                writeln!(f, "=== All Student Records (Sorted by ID) ===")?;
                for student in students {
                    writeln!(f, "{}", Profile(student))?;
                    writeln!(f, "{}", SEPARATOR)?;
                }
                Ok(())
            }
            Outcome::Saved { path, count } => write!(
                f,
                "Saved {} student record(s) to {}",
                count,
                path.display()
            ),
            Outcome::Loaded { path, count } => write!(
                f,
                "Loaded {} student record(s) from {}",
                count,
                path.display()
            ),
        }
    }
}
