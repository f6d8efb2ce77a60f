//! Model layer for the sketch-structure sequencing quiz.
//!
//! Holds the static concept catalog, the mutable placement board (slot
//! occupants plus the unplaced source list), and the sequence validator.
//! Nothing here depends on a rendering surface; the GUI projects this state
//! and feeds drop events back in.

pub mod catalog;
pub mod domain;
pub mod error;
pub mod placement;
pub mod validate;

pub use catalog::Catalog;
pub use domain::{Concept, ConceptId, Location, SlotPosition};
pub use error::{CatalogError, CatalogLoadError, PlacementError};
pub use placement::{DropOutcome, PlacementBoard};
pub use validate::{evaluate, ReportTier, SequenceReport, SlotReport, SlotVerdict};
