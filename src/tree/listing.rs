//! Single-directory enumeration: list, filter, order

use std::fs;
use std::path::Path;

use log::warn;

use super::config::RenderConfig;
use super::entry::EntryInfo;

/// List the immediate children of `dir`, filtered and ordered per `config`.
///
/// Hidden entries (names starting with `.`) are always dropped. With
/// `only_directories`, non-directories are dropped as well. With
/// `sort_by_mtime`, siblings are stable-sorted by ascending modification
/// time; otherwise the order the filesystem returned them in is preserved.
///
/// An unreadable directory is reported to the log and treated as empty; the
/// walk continues unaffected elsewhere.
pub fn list_entries(dir: &Path, config: &RenderConfig) -> Vec<EntryInfo> {
    let read = match fs::read_dir(dir) {
        Ok(read) => read,
        Err(e) => {
            warn!("cannot list '{}': {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut entries: Vec<EntryInfo> = read
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("skipping entry in '{}': {}", dir.display(), e);
                None
            }
        })
        .filter(|entry| !entry.file_name().to_string_lossy().starts_with('.'))
        .map(|entry| {
            let path = entry.path();
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            EntryInfo {
                name: entry.file_name().to_string_lossy().to_string(),
                path,
                is_dir,
            }
        })
        .collect();

    if config.only_directories {
        entries.retain(|entry| entry.is_dir);
    }

    if config.sort_by_mtime {
        entries.sort_by_key(|entry| entry.modified());
    }

    entries
}
