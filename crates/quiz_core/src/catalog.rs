use std::{collections::HashSet, fs, path::Path};

use rand::{seq::SliceRandom, Rng};
use serde::Deserialize;
use tracing::debug;

use crate::{
    domain::{Concept, ConceptId, SlotPosition},
    error::{CatalogError, CatalogLoadError},
    placement::PlacementBoard,
};

/// Static concept catalog plus the expected slot ordering.
///
/// Construction validates that concept ids are unique and that the expected
/// ordering is a permutation of the catalog, so lookups against a valid
/// `Catalog` cannot dangle.
#[derive(Debug, Clone)]
pub struct Catalog {
    concepts: Vec<Concept>,
    expected_order: Vec<ConceptId>,
}

/// On-disk catalog shape. `expectedOrder` may be omitted, in which case the
/// concepts are expected in authoring order.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    concepts: Vec<Concept>,
    #[serde(default)]
    expected_order: Option<Vec<ConceptId>>,
}

impl Catalog {
    pub fn new(
        concepts: Vec<Concept>,
        expected_order: Vec<ConceptId>,
    ) -> Result<Self, CatalogError> {
        if concepts.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut known = HashSet::new();
        for concept in &concepts {
            if !known.insert(concept.id.clone()) {
                return Err(CatalogError::DuplicateConceptId(concept.id.clone()));
            }
        }
        if expected_order.len() != concepts.len() {
            return Err(CatalogError::ExpectedLengthMismatch {
                expected: expected_order.len(),
                actual: concepts.len(),
            });
        }
        let mut used = HashSet::new();
        for id in &expected_order {
            if !known.contains(id) {
                return Err(CatalogError::UnknownExpectedConcept(id.clone()));
            }
            if !used.insert(id.clone()) {
                return Err(CatalogError::DuplicateExpectedConcept(id.clone()));
            }
        }
        Ok(Self {
            concepts,
            expected_order,
        })
    }

    /// The five Arduino sketch-structure concepts the quiz ships with.
    pub fn builtin() -> Self {
        let concept = |id: &str, text: &str, correct: &str, hint: &str| Concept {
            id: ConceptId::from(id),
            text: text.to_string(),
            correct_feedback: correct.to_string(),
            incorrect_hint: hint.to_string(),
        };
        let concepts = vec![
            concept(
                "c1",
                "Include Libraries",
                "Correct! Libraries are included at the very beginning to make their functions \
                 and objects available to your entire sketch.",
                "Hint: Library includes (#include) should always be the first active code lines, \
                 before global variables, setup(), or loop().",
            ),
            concept(
                "c2",
                "Define Global Variables & Constants",
                "Correct! Global variables and constants are defined after any library includes \
                 but before setup(), making them accessible from anywhere in your sketch.",
                "Hint: Declare global variables and constants at the top, right after including \
                 libraries, so all parts of your code (setup and loop) can use them.",
            ),
            concept(
                "c3",
                "Initialize Hardware & Settings (in setup)",
                "Excellent! The setup() function is where you initialize pin modes, start serial \
                 communication, and prepare hardware. This code runs only once when the Arduino \
                 starts.",
                "Hint: One-time hardware initializations (like setting pin modes or starting \
                 Serial communication) belong inside the setup() function.",
            ),
            concept(
                "c4",
                "Read Inputs & Sensors (in loop)",
                "Spot on! The loop() function is where you continuously read changing inputs \
                 like sensor data or check for button presses.",
                "Hint: Tasks that need to happen repeatedly, like reading sensor values, are \
                 placed inside the main loop().",
            ),
            concept(
                "c5",
                "Control Outputs & Logic (in loop)",
                "Perfect! Based on the inputs read and your program's logic, controlling \
                 outputs (like LEDs or motors) and making decisions happens continuously in \
                 the loop().",
                "Hint: The core logic of your program, including making decisions based on \
                 inputs and controlling outputs, resides in the loop() and runs repeatedly.",
            ),
        ];
        let expected_order = concepts.iter().map(|c| c.id.clone()).collect();
        Self {
            concepts,
            expected_order,
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogLoadError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        let expected_order = file
            .expected_order
            .unwrap_or_else(|| file.concepts.iter().map(|c| c.id.clone()).collect());
        Ok(Self::new(file.concepts, expected_order)?)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogLoadError> {
        let raw = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        debug!(path = %path.display(), concepts = catalog.len(), "loaded concept catalog");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    pub fn get(&self, id: &ConceptId) -> Option<&Concept> {
        self.concepts.iter().find(|concept| &concept.id == id)
    }

    /// Number of sequence slots; equal to the catalog size.
    pub fn slot_count(&self) -> usize {
        self.expected_order.len()
    }

    pub fn expected_order(&self) -> &[ConceptId] {
        &self.expected_order
    }

    pub fn expected_for(&self, slot: SlotPosition) -> Option<&ConceptId> {
        slot.0
            .checked_sub(1)
            .and_then(|index| self.expected_order.get(index))
    }

    /// Uniform permutation of the catalog ids, used for the initial source
    /// population and for every reset.
    pub fn shuffled_ids<R: Rng>(&self, rng: &mut R) -> Vec<ConceptId> {
        let mut ids: Vec<ConceptId> = self.concepts.iter().map(|c| c.id.clone()).collect();
        ids.shuffle(rng);
        ids
    }

    /// Fresh all-unplaced board with a shuffled source order.
    pub fn board<R: Rng>(&self, rng: &mut R) -> PlacementBoard {
        PlacementBoard::new(self.shuffled_ids(rng), self.slot_count())
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
