//! Snapshot Writer
//!
//! Serializes a value and replaces the snapshot file with it.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use bytes::{BufMut, BytesMut};
use serde::Serialize;

use crate::error::{GradebookError, Result};

use super::{SnapshotKind, HEADER_SIZE, MAGIC, VERSION};

/// Write `value` to `path` as a snapshot of the given kind
///
/// The frame goes to `<path>.tmp` first and is renamed over `path` only
/// after it has been synced, so a crash leaves either the old or the new file.
pub fn write_snapshot<T: Serialize>(path: &Path, kind: SnapshotKind, value: &T) -> Result<u64> {
    let payload = bincode::serialize(value)?;
    let payload_len = u32::try_from(payload.len()).map_err(|_| {
        GradebookError::Serialization(format!("snapshot payload too large: {} bytes", payload.len()))
    })?;

    let mut frame = BytesMut::with_capacity(HEADER_SIZE + payload.len());
    frame.put_slice(MAGIC);
    frame.put_u16_le(VERSION);
    frame.put_u8(kind as u8);
    frame.put_u32_le(payload_len);
    frame.put_u32_le(crc32fast::hash(&payload));
    frame.put_slice(&payload);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path(path);
    if let Err(e) = replace_with(&tmp_path, path, &frame) {
        // Leave no stale temp file behind
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    // Make the rename itself durable where the platform allows it
    if let Some(parent) = path.parent() {
        if let Ok(dir) = File::open(parent) {
            let _ = dir.sync_all();
        }
    }

    tracing::debug!(
        "Wrote {:?} snapshot to {} ({} bytes)",
        kind,
        path.display(),
        frame.len()
    );

    Ok(frame.len() as u64)
}

/// Write `frame` to `tmp_path`, sync it, then rename it over `path`
fn replace_with(tmp_path: &Path, path: &Path, frame: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(tmp_path)?;
    file.write_all(frame)?;
    file.sync_all()?;
    drop(file);

    fs::rename(tmp_path, path)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
