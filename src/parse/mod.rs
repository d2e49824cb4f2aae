//! Load phase: file/string → navigable XML tree, plus the read-only views
//! later levels build over it (element kinds, identifier index, flow graph).

pub mod graph;
pub mod index;
pub mod lookup;
pub mod types;

pub use graph::FlowGraph;
pub use index::{ElementIndex, FlowEdge};
pub use lookup::{Lookup, local_name, qualified_name};
pub use types::ElementKind;

use std::io::ErrorKind;
use std::path::Path;

use crate::error::LoadError;

/// Read a document from disk. Nothing is parsed yet: the returned text must
/// outlive the tree built from it by [`parse_document`].
pub fn load(path: impl AsRef<Path>) -> Result<String, LoadError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.display().to_string(),
        },
        _ => LoadError::Io {
            path: path.display().to_string(),
            source,
        },
    })
}

/// Parse XML text into a tree.
pub fn parse_document(xml: &str) -> Result<roxmltree::Document<'_>, LoadError> {
    Ok(roxmltree::Document::parse(xml)?)
}
