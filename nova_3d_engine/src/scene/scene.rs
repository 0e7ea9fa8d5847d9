/// Scene - mutex-guarded entity store
///
/// Entities live in a SlotMap. All access goes through `Scene::lock()`,
/// which hands out a guard for the duration of a traversal or an edit.

use std::sync::{Mutex, MutexGuard};
use slotmap::SlotMap;
use crate::engine_err;
use crate::error::Result;
use super::entity::{Entity, EntityKey};

pub struct Scene {
    entities: Mutex<SlotMap<EntityKey, Entity>>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Lock the entity store
    pub fn lock(&self) -> Result<SceneGuard<'_>> {
        let entities = self
            .entities
            .lock()
            .map_err(|_| engine_err!("nova3d::Scene", "Scene lock poisoned"))?;
        Ok(SceneGuard { entities })
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Exclusive access to a Scene's entities
pub struct SceneGuard<'a> {
    entities: MutexGuard<'a, SlotMap<EntityKey, Entity>>,
}

impl SceneGuard<'_> {
    pub fn insert(&mut self, entity: Entity) -> EntityKey {
        self.entities.insert(entity)
    }

    /// Remove an entity, returning it if the key was live
    pub fn remove(&mut self, key: EntityKey) -> Option<Entity> {
        self.entities.remove(key)
    }

    pub fn get(&self, key: EntityKey) -> Option<&Entity> {
        self.entities.get(key)
    }

    pub fn get_mut(&mut self, key: EntityKey) -> Option<&mut Entity> {
        self.entities.get_mut(key)
    }

    pub fn contains(&self, key: EntityKey) -> bool {
        self.entities.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate entities in slot order
    pub fn iter(&self) -> impl Iterator<Item = (EntityKey, &Entity)> {
        self.entities.iter()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
