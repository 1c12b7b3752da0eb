//! Directory tree walking and rendering
//!
//! One depth-first, pre-order walk serves three output encodings; the
//! encoding-specific pieces live in [`crate::output`] behind the
//! [`TreeEmitter`] trait.

mod config;
mod entry;
mod listing;
mod walk;

pub use config::{OutputFormat, RenderConfig};
pub use entry::{EntryInfo, octal_mode, symbolic_mode};
pub use listing::list_entries;
pub use walk::{Counters, EntryCtx, TreeEmitter, walk_root};

use crate::output::{JsonEmitter, PlainEmitter, XmlEmitter, report};

/// Render every root named by `config` into one output document.
///
/// Each root is walked with fresh last-sibling state; the bodies are
/// concatenated and the counters accumulate across roots, so the final
/// report covers everything rendered. Unreadable directories degrade to
/// empty listings; this never fails.
pub fn render(config: &RenderConfig) -> String {
    let mut body = String::new();
    let mut counters = Counters::default();

    for root in &config.roots {
        match config.format {
            OutputFormat::Plain => {
                let mut emitter = PlainEmitter::new(config);
                walk_root(root, config, &mut emitter, &mut counters, &mut body);
            }
            OutputFormat::Xml => {
                let mut emitter = XmlEmitter::new(config);
                walk_root(root, config, &mut emitter, &mut counters, &mut body);
            }
            OutputFormat::Json => {
                let mut emitter = JsonEmitter::new(config);
                walk_root(root, config, &mut emitter, &mut counters, &mut body);
            }
        }
    }

    report::finalize(body, &counters, config)
}
