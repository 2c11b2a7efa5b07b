//! Snapshot Reader
//!
//! Validates a snapshot frame and decodes its payload.

use std::fs;
use std::path::Path;

use bytes::Buf;
use serde::de::DeserializeOwned;

use crate::error::{GradebookError, Result};

use super::{SnapshotKind, HEADER_SIZE, MAGIC, MAX_PAYLOAD_SIZE, VERSION};

/// Read and decode a snapshot of the expected kind
pub fn read_snapshot<T: DeserializeOwned>(path: &Path, expected: SnapshotKind) -> Result<T> {
    let data = fs::read(path)?;

    if data.len() < HEADER_SIZE {
        return Err(GradebookError::Corruption(format!(
            "snapshot too short: {} bytes",
            data.len()
        )));
    }

    let mut header = &data[..HEADER_SIZE];

    let mut magic = [0u8; 4];
    header.copy_to_slice(&mut magic);
    if &magic != MAGIC {
        return Err(GradebookError::Corruption(format!(
            "invalid snapshot magic: expected GRBK, got {:?}",
            magic
        )));
    }

    let version = header.get_u16_le();
    if version != VERSION {
        return Err(GradebookError::Corruption(format!(
            "unsupported snapshot version: {}",
            version
        )));
    }

    let kind = SnapshotKind::from_u8(header.get_u8())?;
    if kind != expected {
        return Err(GradebookError::Corruption(format!(
            "expected a {:?} snapshot, found {:?}",
            expected, kind
        )));
    }

    let payload_len = header.get_u32_le();
    let stored_crc = header.get_u32_le();

    if payload_len > MAX_PAYLOAD_SIZE {
        return Err(GradebookError::Corruption(format!(
            "payload length {} exceeds limit",
            payload_len
        )));
    }

    let payload = &data[HEADER_SIZE..];
    if payload.len() != payload_len as usize {
        return Err(GradebookError::Corruption(format!(
            "payload length mismatch: header says {}, file has {}",
            payload_len,
            payload.len()
        )));
    }

    let actual_crc = crc32fast::hash(payload);
    if actual_crc != stored_crc {
        return Err(GradebookError::Corruption(format!(
            "checksum mismatch: expected {:08x}, got {:08x}",
            stored_crc, actual_crc
        )));
    }

    tracing::debug!("Read {:?} snapshot from {}", kind, path.display());

    Ok(bincode::deserialize(payload)?)
}
