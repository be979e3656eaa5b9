//! Tileset metadata.

use serde::Serialize;

/// Descriptive metadata written alongside the tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileMetadata {
    pub name: String,
    pub description: String,
    pub attribution: String,
    pub version: String,
}
