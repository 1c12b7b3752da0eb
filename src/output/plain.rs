//! Plain-text emission with box-drawing connectors

use std::path::{MAIN_SEPARATOR, Path};

use crate::tree::{EntryCtx, EntryInfo, RenderConfig, TreeEmitter};

const BAR: &str = "│   ";
const BLANK: &str = "    ";
const MID_CONNECTOR: &str = "│──";
const LAST_CONNECTOR: &str = "└──";

/// Emitter for the classic connector-and-indent text format.
pub struct PlainEmitter<'a> {
    config: &'a RenderConfig,
}

impl<'a> PlainEmitter<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    /// Indentation ahead of the connector: a continuing bar under every
    /// ancestor that still has siblings below it, blanks elsewhere.
    fn before_pipe(&self, ctx: &EntryCtx<'_>) -> String {
        let mut prefix = String::new();
        if self.config.no_indent || ctx.depth < 1 || ctx.depth > ctx.ancestors.len() {
            return prefix;
        }
        for &last in &ctx.ancestors[..ctx.depth] {
            prefix.push_str(if last { BLANK } else { BAR });
        }
        prefix
    }

    fn connector(&self, is_last: bool) -> &'static str {
        if self.config.no_indent {
            ""
        } else if is_last {
            LAST_CONNECTOR
        } else {
            MID_CONNECTOR
        }
    }

    /// Everything after the connector. Always begins with one space; the
    /// permission bracket, when requested, precedes the name or relative
    /// path (and the relative form keeps its own leading space, giving the
    /// double space the original format has under `-p -f`).
    fn label(&self, entry: &EntryInfo, ctx: &EntryCtx<'_>) -> String {
        let relative = format!(" {}{}{}", ctx.parent, MAIN_SEPARATOR, entry.name);
        match (self.config.relative_paths, self.config.show_permissions) {
            (false, false) => format!(" {}", entry.name),
            (true, false) => relative,
            (false, true) => format!(" [{}] {}", entry.mode_string(), entry.name),
            (true, true) => format!(" [{}] {}", entry.mode_string(), relative),
        }
    }

    fn line(&self, out: &mut String, entry: &EntryInfo, ctx: &EntryCtx<'_>) {
        out.push_str(&self.before_pipe(ctx));
        out.push_str(self.connector(ctx.is_last));
        out.push_str(&self.label(entry, ctx));
        out.push('\n');
    }
}

impl TreeEmitter for PlainEmitter<'_> {
    fn root(&mut self, out: &mut String, label: &str, _path: &Path) {
        out.push_str(label);
        out.push('\n');
    }

    fn file(&mut self, out: &mut String, entry: &EntryInfo, ctx: &EntryCtx<'_>) {
        self.line(out, entry, ctx);
    }

    fn dir_open(&mut self, out: &mut String, entry: &EntryInfo, ctx: &EntryCtx<'_>) {
        self.line(out, entry, ctx);
    }

    fn dir_close(&mut self, _out: &mut String, _depth: usize, _last_sibling: bool) {}
}
