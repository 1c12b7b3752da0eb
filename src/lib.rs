//! Arbor - render directory hierarchies as text, XML, or JSON

pub mod output;
pub mod tree;

pub use output::{JsonEmitter, PlainEmitter, XmlEmitter};
pub use tree::{Counters, EntryInfo, OutputFormat, RenderConfig, TreeEmitter, render};
