//! # Gradebook
//!
//! An academic records manager with:
//! - Id-indexed record store (binary search tree)
//! - CGPA ranking queue (binary max-heap)
//! - Checksummed whole-state snapshots
//! - Console menu and one-shot CLI front-ends
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────┐   ┌──────────────────────────┐
//! │   Console (login/menu)   │   │   CLI (one-shot command) │
//! └────────────┬─────────────┘   └────────────┬─────────────┘
//!              │          Command             │
//! ┌────────────▼──────────────────────────────▼─────────────┐
//! │                        Registry                          │
//! │                (RwLock over both indexes)                │
//! └────────────┬──────────────────────────────┬─────────────┘
//!              │                              │
//!              ▼                              ▼
//!       ┌─────────────┐               ┌─────────────┐
//!       │ StudentTree │               │RankingQueue │
//!       │   (by id)   │               │ (by CGPA)   │
//!       └──────┬──────┘               └─────────────┘
//!              │
//!              ▼
//!       ┌─────────────┐
//!       │  Snapshot   │
//!       │   (file)    │
//!       └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod student;
pub mod index;
pub mod ranking;
pub mod snapshot;
pub mod command;
pub mod registry;
pub mod accounts;
pub mod console;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{GradebookError, Result};
pub use config::Config;
pub use registry::Registry;
pub use student::{FeeSlab, Student};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Gradebook
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
