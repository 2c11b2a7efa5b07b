//! Snapshot Module
//!
//! Whole-state persistence: one file holds one complete value.
//!
//! ## Responsibilities
//! - Frame a bincode payload with magic, version, kind and CRC32
//! - Replace the target file atomically (write temp, fsync, rename)
//! - Reject truncated, foreign or corrupted files on read
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │ Header (15 bytes, little-endian)                                 │
//! │   Magic: "GRBK" (4) | Version: u16 (2) | Kind: u8 (1)            │
//! │   PayloadLen: u32 (4) | PayloadCRC: u32 (4)                      │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ Payload (PayloadLen bytes, bincode)                              │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

mod reader;
mod writer;

pub use reader::read_snapshot;
pub use writer::write_snapshot;

use crate::error::{GradebookError, Result};

// =============================================================================
// Shared Constants (used by reader and writer)
// =============================================================================

/// Magic bytes identifying a Gradebook snapshot file
pub(crate) const MAGIC: &[u8; 4] = b"GRBK";

/// Current snapshot format version
pub(crate) const VERSION: u16 = 1;

/// Header size in bytes: magic(4) + version(2) + kind(1) + len(4) + crc(4)
pub const HEADER_SIZE: usize = 15;

/// Largest payload accepted on read (64 MB)
pub(crate) const MAX_PAYLOAD_SIZE: u32 = 64 * 1024 * 1024;

/// What a snapshot file contains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SnapshotKind {
    /// Student records in ascending id order
    Records = 1,
    /// Login accounts
    Accounts = 2,
}

impl SnapshotKind {
    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            1 => Ok(SnapshotKind::Records),
            2 => Ok(SnapshotKind::Accounts),
            other => Err(GradebookError::Corruption(format!(
                "unknown snapshot kind: {}",
                other
            ))),
        }
    }
}
