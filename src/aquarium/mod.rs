//! The aquarium: positional slots and yield aggregation.

use crate::core::constants::AQUARIUM_SLOTS;
use crate::reward::types::Creature;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AquariumError {
    #[error("slot {position} is out of range (0..{capacity})")]
    OutOfRange { position: usize, capacity: usize },
    #[error("slot {0} is already occupied")]
    Occupied(usize),
    #[error("slot {0} is empty")]
    Empty(usize),
}

/// One positional slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AquariumSlot {
    pub position: usize,
    pub occupant: Option<Creature>,
}

/// A fixed grid of slots holding creatures. Placement is explicit and
/// positional; occupied slots are never silently overwritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aquarium {
    slots: Vec<AquariumSlot>,
}

impl Aquarium {
    pub fn new() -> Self {
        Self {
            slots: (0..AQUARIUM_SLOTS)
                .map(|position| AquariumSlot {
                    position,
                    occupant: None,
                })
                .collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.occupant.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied() == self.capacity()
    }

    pub fn slot(&self, position: usize) -> Option<&AquariumSlot> {
        self.slots.get(position)
    }

    /// First free position, if any.
    pub fn free_position(&self) -> Option<usize> {
        self.slots
            .iter()
            .find(|s| s.occupant.is_none())
            .map(|s| s.position)
    }

    /// Places a creature into an empty slot.
    pub fn place(&mut self, creature: Creature, position: usize) -> Result<(), AquariumError> {
        let capacity = self.capacity();
        let slot = self
            .slots
            .get_mut(position)
            .ok_or(AquariumError::OutOfRange { position, capacity })?;
        if slot.occupant.is_some() {
            return Err(AquariumError::Occupied(position));
        }
        slot.occupant = Some(creature);
        Ok(())
    }

    /// Removes and returns the creature at `position`.
    pub fn remove(&mut self, position: usize) -> Result<Creature, AquariumError> {
        let capacity = self.capacity();
        let slot = self
            .slots
            .get_mut(position)
            .ok_or(AquariumError::OutOfRange { position, capacity })?;
        slot.occupant.take().ok_or(AquariumError::Empty(position))
    }

    /// Combined algae-per-hour of every occupant.
    pub fn algae_per_hour(&self) -> f64 {
        self.slots
            .iter()
            .filter_map(|s| s.occupant.as_ref())
            .map(|c| c.algae_per_hour)
            .sum()
    }

    pub fn occupants(&self) -> impl Iterator<Item = &Creature> {
        self.slots.iter().filter_map(|s| s.occupant.as_ref())
    }
}

impl Default for Aquarium {
    fn default() -> Self {
        Self::new()
    }
}
