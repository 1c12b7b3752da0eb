//! Shared recursive walk driving a pluggable emitter
//!
//! One traversal serves all three output encodings. The walk owns the
//! counters and the per-depth last-sibling state; emitters only turn walk
//! events into tokens.

use std::path::{MAIN_SEPARATOR, Path};

use super::config::RenderConfig;
use super::entry::EntryInfo;
use super::listing::list_entries;

/// Directory and file totals, accumulated across every root of one run and
/// read once by the summary formatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub directories: usize,
    pub files: usize,
}

/// Per-entry context handed to an emitter.
pub struct EntryCtx<'a> {
    /// Frame depth; the root's immediate children are at depth 0.
    pub depth: usize,
    /// Whether this entry is the final element of its sibling listing.
    /// Enumeration order decides, not name or type.
    pub is_last: bool,
    /// One flag per open ancestor directory; element `i` is true iff the
    /// ancestor at depth `i` was the last sibling at its own level.
    pub ancestors: &'a [bool],
    /// Path from the root label to the containing directory.
    pub parent: &'a str,
}

/// Token-emission strategy for one output encoding.
///
/// The walk calls `root` once per root, `file`/`dir_open` per entry in
/// enumeration order, and `dir_close` exactly once per opened directory --
/// from the frame that walked it, including the empty-listing and
/// depth-cutoff early exits. `depth` on `dir_close` is the frame depth;
/// depth 0 closes the root element.
pub trait TreeEmitter {
    fn root(&mut self, out: &mut String, label: &str, path: &Path);
    fn file(&mut self, out: &mut String, entry: &EntryInfo, ctx: &EntryCtx<'_>);
    fn dir_open(&mut self, out: &mut String, entry: &EntryInfo, ctx: &EntryCtx<'_>);
    fn dir_close(&mut self, out: &mut String, depth: usize, last_sibling: bool);
}

/// Walk one root and append its rendered body to `out`.
///
/// The last-sibling state is fresh per root; counters accumulate across
/// roots.
pub fn walk_root<E: TreeEmitter>(
    root: &Path,
    config: &RenderConfig,
    emitter: &mut E,
    counters: &mut Counters,
    out: &mut String,
) {
    let label = root_label(root);
    emitter.root(out, &label, root);
    let mut walk = Walk {
        config,
        emitter,
        counters,
        out,
        ancestors: Vec::new(),
    };
    walk.dir(root, &label, 0, false);
}

/// Root display label: the supplied path with one trailing separator
/// trimmed.
fn root_label(root: &Path) -> String {
    let label = root.to_string_lossy().to_string();
    label
        .strip_suffix(MAIN_SEPARATOR)
        .map(str::to_string)
        .unwrap_or(label)
}

struct Walk<'a, E> {
    config: &'a RenderConfig,
    emitter: &'a mut E,
    counters: &'a mut Counters,
    out: &'a mut String,
    ancestors: Vec<bool>,
}

impl<E: TreeEmitter> Walk<'_, E> {
    /// Render the listing of one directory at frame depth `depth`.
    ///
    /// `last_sibling` is the flag of the directory itself among its own
    /// siblings; it only matters to the close token. Every exit path
    /// truncates the ancestor stack back to `depth - 1`, undoing the push
    /// the parent frame made before recursing.
    fn dir(&mut self, path: &Path, parent: &str, depth: usize, last_sibling: bool) {
        let entries = list_entries(path, self.config);
        let cutoff = self.config.max_depth.is_some_and(|limit| depth == limit);

        if entries.is_empty() || cutoff {
            self.emitter.dir_close(self.out, depth, last_sibling);
            if depth > 0 {
                self.ancestors.truncate(depth - 1);
            }
            return;
        }

        let last = entries.len() - 1;
        for (idx, entry) in entries.iter().enumerate() {
            let is_last = idx == last;
            let ctx = EntryCtx {
                depth,
                is_last,
                ancestors: &self.ancestors,
                parent,
            };

            if entry.is_dir {
                self.counters.directories += 1;
                self.emitter.dir_open(self.out, entry, &ctx);
                self.ancestors.push(is_last);
                let child_parent = format!("{}{}{}", parent, MAIN_SEPARATOR, entry.name);
                self.dir(&entry.path, &child_parent, depth + 1, is_last);
            } else {
                self.counters.files += 1;
                self.emitter.file(self.out, entry, &ctx);
            }
        }

        self.emitter.dir_close(self.out, depth, last_sibling);
        if depth > 0 {
            self.ancestors.truncate(depth - 1);
        }
    }
}
