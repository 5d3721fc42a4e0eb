//! # Hotbar Model
//!
//! Fixed-size row of item slots, mutated only by server-issued actions.
//! The model knows nothing about rendering; `place`/`clear` return events
//! that the presentation layer consumes (status line, slot highlight).
//!
//! Out-of-range slot indices are silently ignored. The server may be
//! configured with a different slot count than this client, and the
//! reference treats that mismatch as tolerable rather than fatal.

use log::debug;

use crate::api::types::{GameAction, Item};
use crate::core::config::ConfigError;

/// Slot cell width in terminal cells, borders included.
pub const SLOT_WIDTH: u16 = 7;
/// Slot cell height in terminal cells.
pub const SLOT_HEIGHT: u16 = 3;
/// Horizontal gap between slot cells.
pub const SLOT_GAP: u16 = 1;

/// One addressable hotbar position, holding at most one item.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    /// Position in the row; unique per slot.
    pub index: usize,
    /// Cell offset within the hotbar strip, computed once at construction.
    pub origin: (u16, u16),
    pub occupant: Option<Item>,
}

/// Observable mutation, consumed by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HotbarEvent {
    Placed { slot: usize },
    Cleared { slot: usize },
}

pub struct Hotbar {
    slots: Vec<Slot>,
}

impl Hotbar {
    /// Creates `slot_count` empty slots at evenly spaced origins.
    pub fn new(slot_count: usize) -> Result<Self, ConfigError> {
        if slot_count == 0 {
            return Err(ConfigError::Invalid(
                "slot_count must be at least 1".to_string(),
            ));
        }
        let slots = (0..slot_count)
            .map(|index| Slot {
                index,
                origin: (index as u16 * (SLOT_WIDTH + SLOT_GAP), 0),
                occupant: None,
            })
            .collect();
        Ok(Self { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.occupant.is_none())
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Puts `item` into the slot, replacing any occupant. Out-of-range
    /// indices are ignored.
    pub fn place(&mut self, index: usize, item: Item) -> Option<HotbarEvent> {
        let Some(slot) = self.slots.get_mut(index) else {
            debug!("place ignored: slot {} out of range", index);
            return None;
        };
        slot.occupant = Some(item);
        Some(HotbarEvent::Placed { slot: index })
    }

    /// Removes the occupant, if any. Out-of-range indices and empty slots
    /// are ignored (there is nothing for the rendering layer to remove).
    pub fn clear(&mut self, index: usize) -> Option<HotbarEvent> {
        let Some(slot) = self.slots.get_mut(index) else {
            debug!("clear ignored: slot {} out of range", index);
            return None;
        };
        slot.occupant.take()?;
        Some(HotbarEvent::Cleared { slot: index })
    }

    /// Empties every slot. Used on session reset; idempotent.
    pub fn reset_all(&mut self) {
        for slot in &mut self.slots {
            slot.occupant = None;
        }
    }

    /// Applies a batch of server actions in order. Later actions override
    /// earlier ones targeting the same slot. Every action is best-effort
    /// and independent: a no-op never blocks the rest of the batch.
    pub fn apply(&mut self, actions: &[GameAction]) -> Vec<HotbarEvent> {
        actions
            .iter()
            .filter_map(|action| match action {
                GameAction::AddItem { item, slot } => usize::try_from(*slot)
                    .ok()
                    .and_then(|index| self.place(index, item.clone())),
                GameAction::RemoveItem { slot } => usize::try_from(*slot)
                    .ok()
                    .and_then(|index| self.clear(index)),
                GameAction::Unknown => {
                    debug!("ignoring unrecognized action");
                    None
                }
            })
            .collect()
    }
}
