use tracing::debug;

use crate::{
    domain::{ConceptId, Location, SlotPosition},
    error::PlacementError,
};

/// What a drop did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The entry was already at the target; nothing moved.
    Unchanged,
    /// The entry moved. `evicted` is the previous slot occupant that was
    /// returned to the source list, if there was one.
    Moved { evicted: Option<ConceptId> },
}

/// The only mutable runtime state of the quiz: one optional occupant per
/// slot plus the ordered list of unplaced concepts.
///
/// Invariant: every concept id on the board is in exactly one location at
/// all times. Both drop operations detach the dragged id from wherever it
/// currently sits before inserting it, and a slot's previous occupant is
/// evicted to the source list before the slot accepts a new entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementBoard {
    slots: Vec<Option<ConceptId>>,
    source: Vec<ConceptId>,
}

impl PlacementBoard {
    /// Fresh board with every concept unplaced, in the given source order.
    pub fn new(source_order: Vec<ConceptId>, slot_count: usize) -> Self {
        Self {
            slots: vec![None; slot_count],
            source: source_order,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn occupant(&self, slot: SlotPosition) -> Option<&ConceptId> {
        slot.0
            .checked_sub(1)
            .and_then(|index| self.slots.get(index))
            .and_then(Option::as_ref)
    }

    pub fn source_items(&self) -> &[ConceptId] {
        &self.source
    }

    pub fn placed_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn location_of(&self, id: &ConceptId) -> Option<Location> {
        if self.source.contains(id) {
            return Some(Location::Source);
        }
        self.slots
            .iter()
            .position(|slot| slot.as_ref() == Some(id))
            .map(|index| Location::Slot(SlotPosition(index + 1)))
    }

    /// Every concept id currently on the board: source list first, then slot
    /// occupants in position order.
    pub fn ids(&self) -> Vec<ConceptId> {
        self.source
            .iter()
            .cloned()
            .chain(self.slots.iter().flatten().cloned())
            .collect()
    }

    /// Drop `dragged` onto a slot. Re-dropping a slot's own occupant is a
    /// no-op; otherwise any existing occupant is evicted to the end of the
    /// source list and `dragged` takes the slot.
    pub fn drop_on_slot(
        &mut self,
        slot: SlotPosition,
        dragged: &ConceptId,
    ) -> Result<DropOutcome, PlacementError> {
        let index = slot
            .0
            .checked_sub(1)
            .filter(|index| *index < self.slots.len())
            .ok_or(PlacementError::SlotOutOfRange(slot))?;
        if self.slots[index].as_ref() == Some(dragged) {
            return Ok(DropOutcome::Unchanged);
        }
        self.detach(dragged)?;
        let evicted = self.slots[index].replace(dragged.clone());
        if let Some(previous) = &evicted {
            self.source.push(previous.clone());
        }
        debug!(slot = slot.0, concept = %dragged, evicted = ?evicted, "placed concept in slot");
        Ok(DropOutcome::Moved { evicted })
    }

    /// Drop `dragged` onto the source list, which has unlimited capacity.
    pub fn drop_on_source(&mut self, dragged: &ConceptId) -> Result<DropOutcome, PlacementError> {
        if self.source.contains(dragged) {
            return Ok(DropOutcome::Unchanged);
        }
        self.detach(dragged)?;
        self.source.push(dragged.clone());
        debug!(concept = %dragged, "returned concept to source list");
        Ok(DropOutcome::Moved { evicted: None })
    }

    /// Clear every slot and repopulate the source list with `order`, the
    /// freshly shuffled full catalog ordering.
    pub fn reset(&mut self, order: Vec<ConceptId>) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.source = order;
        debug!(concepts = self.source.len(), "reset placement board");
    }

    fn detach(&mut self, id: &ConceptId) -> Result<(), PlacementError> {
        if let Some(at) = self.source.iter().position(|entry| entry == id) {
            self.source.remove(at);
            return Ok(());
        }
        for slot in &mut self.slots {
            if slot.as_ref() == Some(id) {
                *slot = None;
                return Ok(());
            }
        }
        Err(PlacementError::UnknownConcept(id.clone()))
    }
}

#[cfg(test)]
#[path = "tests/placement_tests.rs"]
mod tests;
