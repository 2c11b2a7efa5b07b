//! Error types for Gradebook
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using GradebookError
pub type Result<T> = std::result::Result<T, GradebookError>;

/// Unified error type for Gradebook operations
#[derive(Debug, Error)]
pub enum GradebookError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("Invalid student ID: {0} (must be a positive integer)")]
    InvalidId(u32),

    #[error("Invalid student name: {0:?} (letters and spaces only)")]
    InvalidName(String),

    #[error("At least one mark is required")]
    EmptyMarks,

    #[error("Invalid mark: {0} (must be between 0 and 100)")]
    InvalidMarks(f64),

    #[error("Invalid attendance: {0} (must be between 0 and 100)")]
    InvalidAttendance(f64),

    #[error("Invalid CGPA value: {0}")]
    InvalidCgpa(f64),

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error("Student with ID {0} already exists")]
    DuplicateId(u32),

    #[error("Student with ID {0} not found")]
    StudentNotFound(u32),

    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Snapshot corruption detected: {0}")]
    Corruption(String),

    // -------------------------------------------------------------------------
    // Account Errors
    // -------------------------------------------------------------------------
    #[error("Username and password cannot be empty")]
    InvalidCredentials,

    #[error("Username {0:?} already exists")]
    UsernameTaken(String),

    #[error("Invalid username, password, or role")]
    AuthenticationFailed,

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<bincode::Error> for GradebookError {
    fn from(err: bincode::Error) -> Self {
        GradebookError::Serialization(err.to_string())
    }
}
