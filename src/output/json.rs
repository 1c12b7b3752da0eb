//! JSON emission: streaming array-shaped document

use std::path::{MAIN_SEPARATOR, Path};

use crate::tree::{EntryCtx, EntryInfo, RenderConfig, TreeEmitter};

/// Emitter for the JSON encoding.
///
/// Tokens are streamed rather than built from a serialized tree so the walk
/// stays O(depth): a directory opens its `contents` array, its own frame
/// closes it, and the trailing comma after `]}` depends on whether the
/// directory was the last among its siblings. The root close always takes
/// the comma -- the report object follows it.
pub struct JsonEmitter<'a> {
    config: &'a RenderConfig,
}

impl<'a> JsonEmitter<'a> {
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

    /// `"mode":"0644","prot":"-rw-r--r--"` when permissions were requested.
    fn permission_fields(&self, entry: &EntryInfo) -> Option<String> {
        self.config.show_permissions.then(|| {
            format!(
                "\"mode\":{},\"prot\":{}",
                json_string(&entry.mode_octal()),
                json_string(&entry.mode_string())
            )
        })
    }
}

impl TreeEmitter for JsonEmitter<'_> {
    fn root(&mut self, out: &mut String, label: &str, _path: &Path) {
        out.push_str(&format!(
            "  {{\"type\":\"directory\",\"name\":{},\"contents\":[\n",
            json_string(label)
        ));
    }

    fn file(&mut self, out: &mut String, entry: &EntryInfo, ctx: &EntryCtx<'_>) {
        let name = json_string(&self.name_value(entry, ctx));
        out.push_str(&" ".repeat(2 * ctx.depth + 4));
        match self.permission_fields(entry) {
            Some(fields) => {
                out.push_str(&format!("{{\"type\":\"file\",\"name\":{name},{fields}}}"));
            }
            None => out.push_str(&format!("{{\"type\":\"file\",\"name\":{name}}}")),
        }
        if !ctx.is_last {
            out.push(',');
        }
        out.push('\n');
    }

    fn dir_open(&mut self, out: &mut String, entry: &EntryInfo, ctx: &EntryCtx<'_>) {
        let name = json_string(&self.name_value(entry, ctx));
        out.push_str(&" ".repeat(2 * ctx.depth + 4));
        match self.permission_fields(entry) {
            Some(fields) => out.push_str(&format!(
                "{{\"type\":\"directory\",\"name\":{name},{fields},\"contents\":[\n"
            )),
            None => out.push_str(&format!(
                "{{\"type\":\"directory\",\"name\":{name},\"contents\":[\n"
            )),
        }
    }

    fn dir_close(&mut self, out: &mut String, depth: usize, last_sibling: bool) {
        out.push_str(&" ".repeat(2 * depth + 2));
        out.push_str("]}");
        if !last_sibling {
            out.push(',');
        }
        out.push('\n');
    }
}

/// Quote and escape one JSON string value.
fn json_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn file_entry(name: &str) -> EntryInfo {
        EntryInfo {
            name: name.to_string(),
            path: PathBuf::from(name),
            is_dir: false,
        }
    }

    #[test]
    fn test_json_string_escapes() {
        assert_eq!(json_string("plain"), "\"plain\"");
        assert_eq!(json_string("a\"b"), "\"a\\\"b\"");
        assert_eq!(json_string("back\\slash"), "\"back\\\\slash\"");
    }

    #[test]
    fn test_file_object_with_comma_between_siblings() {
        let config = RenderConfig::default();
        let mut emitter = JsonEmitter::new(&config);
        let ctx = EntryCtx {
            depth: 0,
            is_last: false,
            ancestors: &[],
            parent: "root",
        };
        let mut out = String::new();
        emitter.file(&mut out, &file_entry("hello.txt"), &ctx);
        assert_eq!(out, "    {\"type\":\"file\",\"name\":\"hello.txt\"},\n");
    }

    #[test]
    fn test_last_sibling_has_no_comma() {
        let config = RenderConfig::default();
        let mut emitter = JsonEmitter::new(&config);
        let ctx = EntryCtx {
            depth: 1,
            is_last: true,
            ancestors: &[true],
            parent: "root/a",
        };
        let mut out = String::new();
        emitter.file(&mut out, &file_entry("leaf.rx"), &ctx);
        assert_eq!(out, "      {\"type\":\"file\",\"name\":\"leaf.rx\"}\n");
    }

    #[test]
    fn test_dir_close_comma_follows_sibling_position() {
        let config = RenderConfig::default();
        let mut emitter = JsonEmitter::new(&config);

        let mut out = String::new();
        emitter.dir_close(&mut out, 1, false);
        assert_eq!(out, "    ]},\n");

        let mut out = String::new();
        emitter.dir_close(&mut out, 1, true);
        assert_eq!(out, "    ]}\n");
    }
}
