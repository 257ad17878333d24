//! Debug log persistence
//!
//! Each process run writes to one `debug-log-<index>.txt` file inside the
//! debug directory. The index is fixed on the first write of the run: one
//! past the highest index already present, or 0 for an empty directory.
//!
//! On-disk format:
//!
//! ```text
//!  Debug Log [ 2024-03-07T21:15:02+01:00 ]\r\n
//!  [ Standard ] [ 2024 Mar 07 ] [ 09:15:02 PM ] [ Info ] first entry\r\n
//!  [ Debug ] [ 2024 Mar 07 ] [ 09:15:03 PM ] [ Error ] second entry
//! ```
//!
//! Entries are separated by `\r\n` and the file does not end with a line
//! break. Writes are append-only; there is no interprocess locking, so two
//! processes sharing a directory may pick the same index.

use chrono::{DateTime, Local, SecondsFormat};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::DebugLogError;

const FILE_PREFIX: &str = "debug-log-";
const FILE_SUFFIX: &str = ".txt";
const ENTRY_SEPARATOR: &str = "\r\n";

/// `debug-log-<index>.txt`
pub fn file_name(index: u32) -> String {
    format!("{FILE_PREFIX}{index}{FILE_SUFFIX}")
}

/// Inverse of [`file_name`].
///
/// Only canonical names match: plain decimal digits, no sign, no leading
/// zeros (`debug-log-007.txt` is not a log file of this scheme).
pub fn parse_index(name: &str) -> Option<u32> {
    let digits = name.strip_prefix(FILE_PREFIX)?.strip_suffix(FILE_SUFFIX)?;
    let canonical = !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'));
    if !canonical {
        return None;
    }
    digits.parse().ok()
}

/// First line of a fresh log file.
pub fn header_line(now: &DateTime<Local>) -> String {
    format!(
        " Debug Log [ {} ]",
        now.to_rfc3339_opts(SecondsFormat::Secs, false)
    )
}

/// Index for a new log file in `directory`: highest existing index + 1.
///
/// # Errors
///
/// Returns [`DebugLogError::ScanDirectory`] if the directory cannot be
/// listed, or [`DebugLogError::IndexExhausted`] if `debug-log-4294967295.txt`
/// already exists.
pub fn next_index(directory: &Path) -> Result<u32, DebugLogError> {
    let scan_err = |source| DebugLogError::ScanDirectory {
        path: directory.to_path_buf(),
        source,
    };

    let mut highest: Option<u32> = None;
    for entry in fs::read_dir(directory).map_err(scan_err)? {
        let entry = entry.map_err(scan_err)?;
        if let Some(index) = entry.file_name().to_str().and_then(parse_index) {
            highest = Some(highest.map_or(index, |h| h.max(index)));
        }
    }

    match highest {
        None => Ok(0),
        Some(h) => h.checked_add(1).ok_or_else(|| DebugLogError::IndexExhausted {
            path: directory.to_path_buf(),
        }),
    }
}

/// Make sure `directory` exists as a directory, replacing a plain file
/// that occupies the path.
///
/// A symlink that resolves to a directory counts as a directory. Symlinks
/// are never removed.
///
/// # Errors
///
/// Returns [`DebugLogError::ReplaceFile`] if a regular file in the way
/// cannot be removed, and [`DebugLogError::CreateDirectory`] if the
/// directory cannot be created.
pub fn ensure_directory(directory: &Path) -> Result<(), DebugLogError> {
    if fs::metadata(directory).is_ok_and(|meta| meta.is_dir()) {
        return Ok(());
    }

    if fs::symlink_metadata(directory).is_ok_and(|meta| meta.is_file()) {
        fs::remove_file(directory).map_err(|source| DebugLogError::ReplaceFile {
            path: directory.to_path_buf(),
            source,
        })?;
    }

    fs::create_dir_all(directory).map_err(|source| DebugLogError::CreateDirectory {
        path: directory.to_path_buf(),
        source,
    })
}

/// Rotating debug log for one process run.
#[derive(Debug, Clone)]
pub struct DebugLog {
    directory: PathBuf,
    current_index: Option<u32>,
}

impl DebugLog {
    /// Log writing into `directory`. Nothing touches the disk until the
    /// first [`DebugLog::append`].
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            current_index: None,
        }
    }

    /// Directory the log files live in.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Point at a new directory. The next write picks a fresh index there.
    pub fn set_directory(&mut self, directory: impl Into<PathBuf>) {
        self.directory = directory.into();
        self.current_index = None;
    }

    /// Rotation index of this run, once the first entry has been written.
    pub fn current_index(&self) -> Option<u32> {
        self.current_index
    }

    /// File the next write goes to, once the index is fixed.
    pub fn current_path(&self) -> Option<PathBuf> {
        self.current_index
            .map(|index| self.directory.join(file_name(index)))
    }

    /// Append one entry, creating the directory and file as needed.
    ///
    /// Returns the path written to.
    ///
    /// # Errors
    ///
    /// Any failure from [`ensure_directory`] or [`next_index`], or
    /// [`DebugLogError::Write`] if the file cannot be opened or written.
    pub fn append(&mut self, line: &str, now: &DateTime<Local>) -> Result<PathBuf, DebugLogError> {
        ensure_directory(&self.directory)?;

        let index = match self.current_index {
            Some(index) => index,
            None => {
                let index = next_index(&self.directory)?;
                tracing::debug!(directory = %self.directory.display(), index, "debug log index fixed");
                self.current_index = Some(index);
                index
            }
        };

        let path = self.directory.join(file_name(index));
        let write_err = |source| DebugLogError::Write {
            path: path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(write_err)?;

        let is_new = file.metadata().map_err(write_err)?.len() == 0;
        let chunk = if is_new {
            format!("{}{ENTRY_SEPARATOR}{line}", header_line(now))
        } else {
            format!("{ENTRY_SEPARATOR}{line}")
        };

        file.write_all(chunk.as_bytes()).map_err(write_err)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_name_roundtrip() {
        assert_eq!(file_name(0), "debug-log-0.txt");
        assert_eq!(parse_index("debug-log-12.txt"), Some(12));
        assert_eq!(parse_index("debug-log-.txt"), None);
        assert_eq!(parse_index("debug-log-1.log"), None);
        assert_eq!(parse_index("other-1.txt"), None);
    }

    #[test]
    fn test_only_canonical_names_parse() {
        assert_eq!(parse_index("debug-log-0.txt"), Some(0));
        assert_eq!(parse_index("debug-log-007.txt"), None);
        assert_eq!(parse_index("debug-log-00.txt"), None);
        assert_eq!(parse_index("debug-log-+7.txt"), None);
        assert_eq!(parse_index("debug-log- 7.txt"), None);
        assert_eq!(parse_index("debug-log-4294967296.txt"), None);
    }

    #[test]
    fn test_non_canonical_names_do_not_bump_index() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("debug-log-007.txt"), "").unwrap();
        fs::write(temp.path().join("debug-log-2.txt"), "").unwrap();
        assert_eq!(next_index(temp.path()).unwrap(), 3);
    }

    #[test]
    fn test_index_exhausted_is_an_error() {
        let temp = TempDir::new().unwrap();
        let last = temp.path().join(file_name(u32::MAX));
        fs::write(&last, "existing").unwrap();

        let err = next_index(temp.path()).unwrap_err();
        assert!(matches!(err, DebugLogError::IndexExhausted { .. }));

        let mut log = DebugLog::new(temp.path());
        assert!(log.append("entry", &Local::now()).is_err());
        assert_eq!(fs::read_to_string(&last).unwrap(), "existing");
    }

    #[test]
    fn test_fresh_directory_starts_at_zero() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("debug");
        let mut log = DebugLog::new(&dir);

        let path = log.append("first", &Local::now()).unwrap();
        assert_eq!(path, dir.join("debug-log-0.txt"));
        assert_eq!(log.current_index(), Some(0));
    }

    #[test]
    fn test_existing_file_bumps_index() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("debug-log-0.txt"), "old").unwrap();

        let mut log = DebugLog::new(temp.path());
        let path = log.append("entry", &Local::now()).unwrap();
        assert_eq!(path, temp.path().join("debug-log-1.txt"));
    }

    #[test]
    fn test_index_is_one_past_highest() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("debug-log-0.txt"), "").unwrap();
        fs::write(temp.path().join("debug-log-4.txt"), "").unwrap();
        fs::write(temp.path().join("notes.txt"), "").unwrap();

        assert_eq!(next_index(temp.path()).unwrap(), 5);
    }

    #[test]
    fn test_writes_in_one_run_share_a_file() {
        let temp = TempDir::new().unwrap();
        let mut log = DebugLog::new(temp.path());
        let now = Local::now();

        let first = log.append("one", &now).unwrap();
        let second = log.append("two", &now).unwrap();
        assert_eq!(first, second);

        let content = fs::read_to_string(&first).unwrap();
        let lines: Vec<&str> = content.split("\r\n").collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" Debug Log [ "));
        assert_eq!(lines[1], "one");
        assert_eq!(lines[2], "two");
        assert!(!content.ends_with("\r\n"));
    }

    #[test]
    fn test_second_run_rotates() {
        let temp = TempDir::new().unwrap();
        let now = Local::now();

        DebugLog::new(temp.path()).append("run one", &now).unwrap();
        let path = DebugLog::new(temp.path()).append("run two", &now).unwrap();
        assert_eq!(path, temp.path().join("debug-log-1.txt"));
    }

    #[test]
    fn test_file_in_place_of_directory_is_replaced() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("debug");
        fs::write(&dir, "not a directory").unwrap();

        let mut log = DebugLog::new(&dir);
        log.append("entry", &Local::now()).unwrap();
        assert!(dir.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_kept() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("real");
        fs::create_dir(&target).unwrap();
        let link = temp.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let mut log = DebugLog::new(&link);
        log.append("entry", &Local::now()).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        let content = fs::read_to_string(target.join("debug-log-0.txt")).unwrap();
        assert!(content.ends_with("entry"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_file_is_not_removed() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("target.txt");
        fs::write(&target, "keep").unwrap();
        let link = temp.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = DebugLog::new(&link)
            .append("entry", &Local::now())
            .unwrap_err();
        assert!(matches!(err, DebugLogError::CreateDirectory { .. }));
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&target).unwrap(), "keep");
    }

    #[test]
    fn test_set_directory_resets_index() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(second.path().join("debug-log-2.txt"), "").unwrap();

        let mut log = DebugLog::new(first.path());
        log.append("a", &Local::now()).unwrap();
        assert_eq!(log.current_index(), Some(0));

        log.set_directory(second.path());
        assert_eq!(log.current_index(), None);
        let path = log.append("b", &Local::now()).unwrap();
        assert_eq!(path, second.path().join("debug-log-3.txt"));
    }

    #[test]
    fn test_unwritable_directory_reports_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        // A path below a regular file can never become a directory.
        let mut log = DebugLog::new(blocker.join("nested"));
        let err = log.append("entry", &Local::now()).unwrap_err();
        assert!(matches!(err, DebugLogError::CreateDirectory { .. }));
        assert_eq!(err.path(), blocker.join("nested"));
    }
}
