//! Directory entries and their lazily-fetched metadata

use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

use log::warn;

/// Symbolic rendering used when permission bits cannot be read.
pub const MODE_UNAVAILABLE: &str = "??????????";

/// Octal rendering used when permission bits cannot be read.
pub const OCTAL_UNAVAILABLE: &str = "0000";

/// One named item returned by listing a directory.
///
/// A read-only snapshot: permission bits and modification time are not
/// stored here but fetched on demand, so a plain listing never stats its
/// entries.
#[derive(Debug, Clone)]
pub struct EntryInfo {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

impl EntryInfo {
    /// Raw mode bits from the filesystem, or `None` if they cannot be read.
    /// Failures are reported to the log, never raised.
    #[cfg(unix)]
    pub fn mode_bits(&self) -> Option<u32> {
        use std::os::unix::fs::MetadataExt;

        match fs::symlink_metadata(&self.path) {
            Ok(meta) => Some(meta.mode()),
            Err(e) => {
                warn!("cannot read metadata for '{}': {}", self.path.display(), e);
                None
            }
        }
    }

    #[cfg(not(unix))]
    pub fn mode_bits(&self) -> Option<u32> {
        None
    }

    /// Modification time, falling back to the epoch when metadata is
    /// unreadable so that mtime ordering stays total.
    pub fn modified(&self) -> SystemTime {
        match fs::symlink_metadata(&self.path).and_then(|m| m.modified()) {
            Ok(t) => t,
            Err(e) => {
                warn!("cannot read mtime for '{}': {}", self.path.display(), e);
                SystemTime::UNIX_EPOCH
            }
        }
    }

    /// POSIX-style symbolic mode string, e.g. `drwxr-xr-x`.
    pub fn mode_string(&self) -> String {
        match self.mode_bits() {
            Some(mode) => symbolic_mode(mode),
            None => MODE_UNAVAILABLE.to_string(),
        }
    }

    /// Four-digit octal permission string, e.g. `0755`.
    pub fn mode_octal(&self) -> String {
        match self.mode_bits() {
            Some(mode) => octal_mode(mode),
            None => OCTAL_UNAVAILABLE.to_string(),
        }
    }
}

/// Format raw mode bits as a POSIX-style string (e.g. `drwxr-xr-x`).
pub fn symbolic_mode(mode: u32) -> String {
    let ft = match mode & 0o170000 {
        0o040000 => 'd',
        0o120000 => 'l',
        _ => '-',
    };
    let perms = mode & 0o777;
    let mut s = String::with_capacity(10);
    s.push(ft);
    for shift in [6, 3, 0] {
        let bits = (perms >> shift) & 7;
        s.push(if bits & 4 != 0 { 'r' } else { '-' });
        s.push(if bits & 2 != 0 { 'w' } else { '-' });
        s.push(if bits & 1 != 0 { 'x' } else { '-' });
    }
    s
}

/// Format raw mode bits as a four-digit octal string (e.g. `0755`).
pub fn octal_mode(mode: u32) -> String {
    format!("{:04o}", mode & 0o7777)
}
