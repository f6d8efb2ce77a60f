use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a catalog concept, unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConceptId(pub String);

impl ConceptId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ConceptId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for ConceptId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 1-based ordinal of a sequence slot, fixed at board construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SlotPosition(pub usize);

impl fmt::Display for SlotPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One static entry in the program-structure sequence.
///
/// Serialized field names are camelCase so catalog files match the shape the
/// quiz data has always been authored in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    pub id: ConceptId,
    pub text: String,
    pub correct_feedback: String,
    pub incorrect_hint: String,
}

/// Where a concept currently sits on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Source,
    Slot(SlotPosition),
}
