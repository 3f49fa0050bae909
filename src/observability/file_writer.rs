//! Size-rotated trace file.
//!
//! Lines are appended to a single file. Once it grows past the size limit it
//! is renamed to `<file>.<timestamp>` and a fresh file is started; only the
//! newest few backups are kept. Timestamps come from `chrono` in a fixed-width
//! UTC format, so lexical order of backup names is chronological order.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default size at which the trace file rotates (5 MB).
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Default number of rotated backups kept beside the live file.
pub const DEFAULT_MAX_BACKUPS: usize = 2;

/// Backup suffix format, e.g. `20261017T094512.031`.
const BACKUP_STAMP: &str = "%Y%m%dT%H%M%S%.3f";

/// Appends lines to a file, rotating it by size.
///
/// The handle is opened lazily and guarded by a mutex; the exporter may be
/// driven from whichever thread ends a span.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    handle: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer with the default limits.
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, DEFAULT_MAX_BYTES, DEFAULT_MAX_BACKUPS)
    }

    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be rotated, opened or written, or when the
    /// lock was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace writer lock poisoned: {e}")))?;

        if self.is_full() {
            *handle = None;
            self.rotate()?;
        }

        let file = match handle.as_mut() {
            Some(file) => file,
            None => handle.insert(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            ),
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn is_full(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() >= self.max_bytes)
    }

    /// Moves the live file aside and prunes old backups.
    fn rotate(&self) -> io::Result<()> {
        let stamp = Utc::now().format(BACKUP_STAMP);
        let mut backup = self.file_path.clone().into_os_string();
        backup.push(format!(".{stamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, PathBuf::from(backup))?;
        }

        self.prune_backups()
    }

    fn prune_backups(&self) -> io::Result<()> {
        let mut backups = self.backups()?;
        backups.sort();

        let excess = backups.len().saturating_sub(self.max_backups);
        for stale in backups.into_iter().take(excess) {
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }

    /// Existing backups of this file, in no particular order.
    fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let parent = self.file_path.parent().unwrap_or_else(|| Path::new("."));
        let Some(name) = self.file_path.file_name().and_then(|n| n.to_str()) else {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "trace file name is not UTF-8"));
        };
        let prefix = format!("{name}.");

        Ok(fs::read_dir(parent)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("popcorn-otlp.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_when_full_and_keeps_limited_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("popcorn-otlp.json");
        let writer = FileWriter::with_limits(path.clone(), 8, 1);

        for i in 0..4 {
            writer.write_line(&format!("line-{i}")).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(5));
        }

        // Rotation happens once the file already holds the limit, so the
        // backup keeps line-0 and line-1 and the live file restarts at line-2.
        assert_eq!(fs::read_to_string(&path).unwrap(), "line-2\nline-3\n");
        let backups = writer.backups().unwrap();
        assert_eq!(backups.len(), 1);
        assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "line-0\nline-1\n");
    }

    #[test]
    fn repeated_rotation_prunes_to_newest_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("popcorn-otlp.json");
        let writer = FileWriter::with_limits(path.clone(), 8, 1);

        for i in 0..8 {
            writer.write_line(&format!("line-{i}")).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(5));
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "line-6\nline-7\n");
        let backups = writer.backups().unwrap();
        assert_eq!(backups.len(), 1);
        assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "line-4\nline-5\n");
    }
}
