use std::any::TypeId;

use crate::{Component, HashMapComponentStorage};

use super::Registry;

impl Registry {
    /// Gets an immutable reference to the storage for a specific component type.
    ///
    /// Returns `None` if no storage exists for this component type yet.
    pub(super) fn get_storage<T: Component>(&self) -> Option<&HashMapComponentStorage<T>> {
        let type_id = TypeId::of::<T>();

        self.component_storages
            .get(&type_id)
            .and_then(|any_storage| {
                any_storage
                    .as_any()
                    .downcast_ref::<HashMapComponentStorage<T>>()
            })
    }

    /// Gets a mutable reference to the storage for a specific component type.
    ///
    /// Creates the storage if it doesn't exist yet.
    pub(super) fn get_storage_mut<T: Component>(&mut self) -> &mut HashMapComponentStorage<T> {
        let type_id = TypeId::of::<T>();

        // Use entry API to create storage if it doesn't exist
        let any_storage = self
            .component_storages
            .entry(type_id)
            .or_insert_with(|| Box::new(HashMapComponentStorage::<T>::new()));

        any_storage
            .as_any_mut()
            .downcast_mut::<HashMapComponentStorage<T>>()
            .expect("Failed to downcast storage for component type")
    }

    /// Returns every live entity carrying the component identified by `type_id`.
    ///
    /// Soft-deleted entities are excluded even if their component data has not
    /// yet been swept by [`Registry::cleanup_deleted_entities`]. Used by
    /// [`crate::View`] to build its with/without filter.
    pub(crate) fn entities_with_component_by_type_id(
        &self,
        type_id: TypeId,
    ) -> std::collections::HashSet<crate::Entity> {
        self.component_storages
            .get(&type_id)
            .map(|storage| {
                storage
                    .entities()
                    .into_iter()
                    .filter(|entity| self.is_entity_active(*entity))
                    .collect()
            })
            .unwrap_or_default()
    }
}
