//! XML emission: nested `<directory>`/`<file>` elements

use std::path::{MAIN_SEPARATOR, Path};

use crate::tree::{EntryCtx, EntryInfo, RenderConfig, TreeEmitter};

/// Emitter for the XML encoding.
///
/// The indentation scheme is inherited from the original format: the root
/// element sits at two spaces, entries at frame depth `n` at `n + 4`, and a
/// closing tag at `n + 3` from the frame that walked the directory -- so
/// nesting grows by a single space per level past the first.
pub struct XmlEmitter<'a> {
    config: &'a RenderConfig,
}

impl<'a> XmlEmitter<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    fn name_value(&self, entry: &EntryInfo, ctx: &EntryCtx<'_>) -> String {
        if self.config.relative_paths {
            format!("{}{}{}", ctx.parent, MAIN_SEPARATOR, entry.name)
        } else {
            entry.name.clone()
        }
    }

    /// Attribute list for an element: `name`, plus `mode`/`prot` when
    /// permissions were requested.
    fn attributes(&self, name: &str, entry: &EntryInfo) -> String {
        if self.config.show_permissions {
            format!(
                " name=\"{}\" mode=\"{}\" prot=\"{}\"",
                escape(name),
                entry.mode_octal(),
                entry.mode_string()
            )
        } else {
            format!(" name=\"{}\"", escape(name))
        }
    }
}

impl TreeEmitter for XmlEmitter<'_> {
    fn root(&mut self, out: &mut String, label: &str, path: &Path) {
        let root_entry = EntryInfo {
            name: label.to_string(),
            path: path.to_path_buf(),
            is_dir: true,
        };
        out.push_str(&format!(
            "  <directory{}>\n",
            self.attributes(label, &root_entry)
        ));
    }

    fn file(&mut self, out: &mut String, entry: &EntryInfo, ctx: &EntryCtx<'_>) {
        let name = self.name_value(entry, ctx);
        out.push_str(&" ".repeat(ctx.depth + 4));
        out.push_str(&format!("<file{}/>\n", self.attributes(&name, entry)));
    }

    fn dir_open(&mut self, out: &mut String, entry: &EntryInfo, ctx: &EntryCtx<'_>) {
        let name = self.name_value(entry, ctx);
        out.push_str(&" ".repeat(ctx.depth + 4));
        out.push_str(&format!("<directory{}>\n", self.attributes(&name, entry)));
    }

    fn dir_close(&mut self, out: &mut String, depth: usize, _last_sibling: bool) {
        let indent = if depth == 0 { 2 } else { depth + 3 };
        out.push_str(&" ".repeat(indent));
        out.push_str("</directory>\n");
    }
}

/// Minimal attribute-value escaping. The original emitted names verbatim;
/// escaping here is a deliberate fix so documents stay well-formed.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
