use tracing::debug;

use crate::{
    catalog::Catalog,
    domain::{ConceptId, SlotPosition},
    placement::PlacementBoard,
};

/// Verdict for one slot at check time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotVerdict {
    Unfilled,
    Correct { feedback: String },
    Misplaced { text: String, hint: String },
    /// The occupant id is absent from the catalog. Counted as incorrect;
    /// never halts validation of the remaining slots.
    Unrecognized { occupant: ConceptId },
}

impl SlotVerdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, SlotVerdict::Correct { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotReport {
    pub position: SlotPosition,
    pub verdict: SlotVerdict,
}

impl SlotReport {
    /// Feedback line rendered for this slot.
    pub fn line(&self) -> String {
        match &self.verdict {
            SlotVerdict::Unfilled => format!("Slot {} is not filled yet.", self.position),
            SlotVerdict::Correct { feedback } => feedback.clone(),
            SlotVerdict::Misplaced { text, hint } => {
                format!("{text} is not correctly placed. {hint}")
            }
            SlotVerdict::Unrecognized { occupant } => format!(
                "Slot {}: an unrecognized item (`{occupant}`) is in this slot.",
                self.position
            ),
        }
    }
}

/// Tiered overall outcome of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTier {
    NothingPlaced,
    Incomplete,
    WrongOrder,
    Perfect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceReport {
    pub slots: Vec<SlotReport>,
    pub placed: usize,
    pub total: usize,
}

impl SequenceReport {
    pub fn tier(&self) -> ReportTier {
        if self.placed == 0 {
            return ReportTier::NothingPlaced;
        }
        if self.placed < self.total {
            return ReportTier::Incomplete;
        }
        if self.slots.iter().all(|slot| slot.verdict.is_correct()) {
            ReportTier::Perfect
        } else {
            ReportTier::WrongOrder
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.tier() == ReportTier::Perfect
    }

    /// Headline shown above (or instead of) the per-slot list.
    pub fn headline(&self) -> &'static str {
        match self.tier() {
            ReportTier::NothingPlaced => {
                "Please drag the concepts into the sequence slots to begin."
            }
            ReportTier::Incomplete => {
                "Some concepts are not yet placed, or some are in the wrong sequence. \
                 Please review the feedback below:"
            }
            ReportTier::WrongOrder => {
                "Some concepts are in the wrong sequence. Please review the feedback below:"
            }
            ReportTier::Perfect => {
                "Congratulations! The entire sequence is perfect and all concepts are used!"
            }
        }
    }

    /// The per-slot list is suppressed when nothing is placed yet and when
    /// everything is right.
    pub fn show_slot_lines(&self) -> bool {
        matches!(self.tier(), ReportTier::Incomplete | ReportTier::WrongOrder)
    }
}

/// Compare each slot's occupant, in position order, against the catalog's
/// expected ordering.
pub fn evaluate(catalog: &Catalog, board: &PlacementBoard) -> SequenceReport {
    let mut slots = Vec::with_capacity(board.slot_count());
    for position in (1..=board.slot_count()).map(SlotPosition) {
        let verdict = match board.occupant(position) {
            None => SlotVerdict::Unfilled,
            Some(occupant) => match catalog.get(occupant) {
                None => SlotVerdict::Unrecognized {
                    occupant: occupant.clone(),
                },
                Some(concept) => {
                    if catalog.expected_for(position) == Some(&concept.id) {
                        SlotVerdict::Correct {
                            feedback: concept.correct_feedback.clone(),
                        }
                    } else {
                        SlotVerdict::Misplaced {
                            text: concept.text.clone(),
                            hint: concept.incorrect_hint.clone(),
                        }
                    }
                }
            },
        };
        slots.push(SlotReport { position, verdict });
    }
    let report = SequenceReport {
        placed: board.placed_count(),
        total: board.slot_count(),
        slots,
    };
    debug!(placed = report.placed, total = report.total, tier = ?report.tier(), "evaluated sequence");
    report
}

#[cfg(test)]
#[path = "tests/validate_tests.rs"]
mod tests;
