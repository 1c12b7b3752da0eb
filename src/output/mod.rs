//! Output emitters for the three tree encodings
//!
//! Each emitter implements [`crate::tree::TreeEmitter`] and turns walk
//! events into tokens; `report` wraps the finished body with the format's
//! envelope and counts.
//!
//! # Module Structure
//!
//! - `plain` - box-drawing connector text
//! - `xml` - nested `<directory>`/`<file>` elements
//! - `json` - streaming array-shaped document
//! - `report` - envelopes and the directory/file totals

mod json;
mod plain;
pub mod report;
mod xml;

pub use json::JsonEmitter;
pub use plain::PlainEmitter;
pub use xml::XmlEmitter;
