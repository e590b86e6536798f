//! Body storage.
//!
//! The simulation never owns bodies. It talks to anything implementing
//! [`BodyRegistry`]: a live set of ids plus mutable access by id.
//! [`Registry`] is the in-memory store used by scenarios, the CLI and tests.

use crate::simulation::states::{Body, BodyId};

/// Storage the simulation steps over
pub trait BodyRegistry {
    /// Ids of all live bodies. Must not change while a step runs.
    fn ids(&self) -> Vec<BodyId>;

    fn get(&self, id: BodyId) -> Option<&Body>;

    fn get_mut(&mut self, id: BodyId) -> Option<&mut Body>;

    /// Ids destroyed since the last call. Lets the simulation drop
    /// derived per-body data before an id gets reused.
    fn take_destroyed(&mut self) -> Vec<BodyId> {
        Vec::new()
    }
}

/// Slot-vector body store. Freed ids are handed out again, most recent first.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    slots: Vec<Option<Body>>,
    free: Vec<u64>,
    destroyed: Vec<BodyId>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, body: Body) -> BodyId {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot as usize] = Some(body);
                BodyId(slot)
            }
            None => {
                self.slots.push(Some(body));
                BodyId(self.slots.len() as u64 - 1)
            }
        }
    }

    pub fn destroy(&mut self, id: BodyId) -> Option<Body> {
        let body = self.slots.get_mut(id.0 as usize)?.take()?;
        self.free.push(id.0);
        self.destroyed.push(id);
        Some(body)
    }

    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Destroys every body; all ids are reported through `take_destroyed`
    pub fn clear(&mut self) {
        let ids = self.ids();
        for id in ids {
            self.destroy(id);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|b| (BodyId(i as u64), b)))
    }
}

impl BodyRegistry for Registry {
    fn ids(&self) -> Vec<BodyId> {
        self.iter().map(|(id, _)| id).collect()
    }

    fn get(&self, id: BodyId) -> Option<&Body> {
        self.slots.get(id.0 as usize)?.as_ref()
    }

    fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.slots.get_mut(id.0 as usize)?.as_mut()
    }

    fn take_destroyed(&mut self) -> Vec<BodyId> {
        std::mem::take(&mut self.destroyed)
    }
}
