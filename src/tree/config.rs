//! Configuration types for tree rendering

use std::path::PathBuf;

/// Output encoding for a rendered tree.
///
/// Modeled as a single tagged variant so that exactly one encoding is
/// active at a time; the CLI maps `-X`/`-J` onto it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text with box-drawing connectors
    #[default]
    Plain,
    /// Nested `<directory>`/`<file>` elements inside a `<tree>` envelope
    Xml,
    /// Array-shaped document with a trailing report object
    Json,
}

/// Configuration for one rendering run. Immutable after construction.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Suppress files entirely; only directories are listed and counted.
    pub only_directories: bool,
    /// Label each entry with its path from the root instead of the bare name.
    pub relative_paths: bool,
    /// Annotate entries with a symbolic permission string (and, in XML/JSON,
    /// an octal `mode` as well).
    pub show_permissions: bool,
    /// Order siblings by ascending modification time instead of the order
    /// the filesystem returned them in.
    pub sort_by_mtime: bool,
    /// Omit connector and indentation glyphs (flat listing).
    pub no_indent: bool,
    pub format: OutputFormat,
    /// Maximum descent depth; `None` is unbounded. The CLI guarantees a
    /// present value is >= 1.
    pub max_depth: Option<usize>,
    /// Entry points, walked in order. Never empty.
    pub roots: Vec<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            only_directories: false,
            relative_paths: false,
            show_permissions: false,
            sort_by_mtime: false,
            no_indent: false,
            format: OutputFormat::default(),
            max_depth: None,
            roots: vec![PathBuf::from(".")],
        }
    }
}
