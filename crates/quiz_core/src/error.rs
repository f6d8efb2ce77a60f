use thiserror::Error;

use crate::domain::{ConceptId, SlotPosition};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog has no concepts")]
    Empty,
    #[error("duplicate concept id `{0}`")]
    DuplicateConceptId(ConceptId),
    #[error("expected ordering references unknown concept id `{0}`")]
    UnknownExpectedConcept(ConceptId),
    #[error("expected ordering lists concept id `{0}` more than once")]
    DuplicateExpectedConcept(ConceptId),
    #[error("expected ordering covers {expected} slots but the catalog has {actual} concepts")]
    ExpectedLengthMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog JSON")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("concept id `{0}` is not on the board")]
    UnknownConcept(ConceptId),
    #[error("slot position {0} is out of range")]
    SlotOutOfRange(SlotPosition),
}
