//! Generational arena used to hand out stable rigid-body ids.
//!
//! Collision records carry plain copyable ids instead of references, so a
//! caller can keep yesterday's contacts around without pinning the body
//! store. Generations catch stale handles: removing a body bumps the slot's
//! generation and every id minted before the removal stops resolving.

use serde::{Deserialize, Serialize};

/// Index paired with the generation it was minted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct GenerationalId {
    pub index: usize,
    pub generation: u32,
}

impl GenerationalId {
    pub fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }
}

/// Handle to a rigid-body slot inside an [`Arena`].
///
/// [`BodyId::NULL`] is the reserved "no body" token: contacts against static
/// world geometry carry it in place of a real handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct BodyId(pub GenerationalId);

impl BodyId {
    /// Sentinel id that resolves to no body.
    pub const NULL: BodyId = BodyId(GenerationalId {
        index: usize::MAX,
        generation: 0,
    });

    pub fn new(index: usize, generation: u32) -> Self {
        Self(GenerationalId::new(index, generation))
    }

    pub fn from_index(index: u32) -> Self {
        Self::new(index as usize, 0)
    }

    pub fn index(&self) -> usize {
        self.0.index
    }

    pub fn generation(&self) -> u32 {
        self.0.generation
    }

    pub fn is_null(&self) -> bool {
        self.0.index == usize::MAX
    }
}

impl Default for BodyId {
    fn default() -> Self {
        Self::NULL
    }
}

/// Slot-reusing store that mints a fresh [`BodyId`] per inserted value.
pub struct Arena<T> {
    slots: Vec<Option<T>>,
    generations: Vec<u32>,
    free: Vec<usize>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn insert(&mut self, value: T) -> BodyId {
        if let Some(index) = self.free.pop() {
            let generation = self.generations[index];
            self.slots[index] = Some(value);
            return BodyId::new(index, generation);
        }

        let index = self.slots.len();
        self.slots.push(Some(value));
        self.generations.push(0);
        BodyId::new(index, 0)
    }

    pub fn get(&self, id: BodyId) -> Option<&T> {
        if self.is_valid(id) {
            self.slots.get(id.index()).and_then(|slot| slot.as_ref())
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut T> {
        if self.is_valid(id) {
            self.slots.get_mut(id.index()).and_then(|slot| slot.as_mut())
        } else {
            None
        }
    }

    /// Frees the slot and invalidates every id previously minted for it.
    pub fn remove(&mut self, id: BodyId) -> Option<T> {
        if !self.is_valid(id) {
            return None;
        }
        if let Some(slot) = self.slots.get_mut(id.index()) {
            if slot.is_some() {
                self.generations[id.index()] = self.generations[id.index()].wrapping_add(1);
                self.free.push(id.index());
            }
            slot.take()
        } else {
            None
        }
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }

    pub fn ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.as_ref()
                .map(|_| BodyId::new(index, self.generations[index]))
        })
    }

    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_valid(&self, id: BodyId) -> bool {
        self.generations
            .get(id.index())
            .copied()
            .map(|generation| generation == id.generation())
            .unwrap_or(false)
    }
}
