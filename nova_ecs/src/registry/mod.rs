use std::{
    any::TypeId,
    collections::{HashMap, HashSet},
};

use crate::{AnyStorage, Entity};

mod components;
mod entities;
mod ephemeral_component;
mod storage;
mod view;

pub use view::{ComponentTypeList, View, With, Without};

/// The concrete component store consumed by [`crate::World`].
///
/// `Registry` is this repository's implementation of the component-store
/// contract: entity allocation with soft deletion, per-type component
/// storage behind a type-erased [`AnyStorage`] object, and a parallel
/// "ephemeral" storage table for one-frame components. A consumer of the
/// scheduling core is free to swap this out for a different component store
/// as long as it offers the same `create`/`emplace`/`erase`/`remove`/`try_get`/`view`
/// shape; nothing in `nova_ecs`'s scheduler depends on `Registry`'s internals.
pub struct Registry {
    entities: HashSet<Entity>,
    soft_deleted_entities: HashSet<Entity>,
    component_storages: HashMap<TypeId, Box<dyn AnyStorage>>,
    ephemeral_component_storages: HashMap<TypeId, Box<dyn AnyStorage>>,
}

impl Registry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self {
            entities: HashSet::new(),
            soft_deleted_entities: HashSet::new(),
            component_storages: HashMap::new(),
            ephemeral_component_storages: HashMap::new(),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
