use std::collections::HashMap;

use crate::{Component, ComponentError, ComponentStorage};

use super::Registry;

impl Registry {
    /// Adds an ephemeral component to an entity.
    ///
    /// Ephemeral components are temporary components that exist only until the next
    /// cleanup cycle. They are automatically removed when `clean_ephemeral_storage()`
    /// is called, typically by the system scheduler at the end of each frame.
    ///
    /// Unlike regular components, ephemeral components can be added to the same entity
    /// multiple times, replacing the previous value. This makes them ideal for
    /// inter-system communication where multiple systems need to react to the same
    /// temporary state change.
    ///
    /// # Parameters
    /// * `entity` - The entity to add the ephemeral component to
    /// * `component` - The ephemeral component instance to add
    ///
    /// # Returns
    /// * `Ok(())` if the component was successfully added
    /// * `Err(ComponentError::ComponentNotFound)` if the entity doesn't exist or has been deleted
    ///
    /// # Example
    /// ```
    /// use nova_ecs::{Registry, Component};
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct DamageReceived { amount: u32, source: String }
    /// impl Component for DamageReceived {}
    ///
    /// let mut registry = Registry::new();
    /// let entity = registry.spawn_entity();
    ///
    /// // Add ephemeral component for other systems to react to
    /// registry.add_ephemeral_component(entity, DamageReceived {
    ///     amount: 25,
    ///     source: "fire_spell".to_string()
    /// }).unwrap();
    ///
    /// // Multiple systems can read this ephemeral component
    /// assert!(registry.has_ephemeral_component::<DamageReceived>(entity));
    /// ```
    pub fn add_ephemeral_component<T: Component>(
        &mut self,
        entity: crate::Entity,
        component: T,
    ) -> Result<(), ComponentError> {
        if !self.is_entity_active(entity) {
            return Err(ComponentError::ComponentNotFound);
        }

        let entities_in_reverse_index = self.get_or_create_ephemeral_reverse_index::<T>();
        entities_in_reverse_index.insert(entity);

        let storage = self.get_ephemeral_storage_mut::<T>();
        // For ephemeral components, we allow replacement (insert_or_update)
        storage.insert_or_update(entity, component);
        Ok(())
    }

    /// Gets a reference to an ephemeral component attached to an entity.
    ///
    /// Returns `None` if the entity doesn't exist, has been deleted, or doesn't
    /// have an ephemeral component of the specified type.
    ///
    /// # Parameters
    /// * `entity` - The entity to get the ephemeral component from
    ///
    /// # Returns
    /// * `Some(&T)` if the ephemeral component exists
    /// * `None` if the ephemeral component doesn't exist or entity is invalid
    ///
    /// # Example
    /// ```
    /// use nova_ecs::{Registry, Component};
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct MovementIntent { direction: f32, speed: f32 }
    /// impl Component for MovementIntent {}
    ///
    /// let mut registry = Registry::new();
    /// let entity = registry.spawn_entity();
    ///
    /// assert_eq!(registry.get_ephemeral_component::<MovementIntent>(entity), None);
    ///
    /// registry.add_ephemeral_component(entity, MovementIntent { direction: 90.0, speed: 5.0 }).unwrap();
    /// let intent = registry.get_ephemeral_component::<MovementIntent>(entity).unwrap();
    /// assert_eq!(intent.direction, 90.0);
    /// ```
    pub fn get_ephemeral_component<T: Component>(&self, entity: crate::Entity) -> Option<&T> {
        if !self.is_entity_active(entity) {
            return None;
        }

        self.get_ephemeral_storage::<T>()?.get(entity)
    }

    /// Checks if an entity has a specific ephemeral component type.
    ///
    /// Returns `false` if the entity doesn't exist, has been deleted, or doesn't
    /// have an ephemeral component of the specified type.
    ///
    /// # Parameters
    /// * `entity` - The entity to check
    ///
    /// # Returns
    /// * `true` if the entity has the ephemeral component
    /// * `false` if the entity doesn't have the ephemeral component or is invalid
    ///
    /// # Example
    /// ```
    /// use nova_ecs::{Registry, Component};
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct JumpIntent { force: f32 }
    /// impl Component for JumpIntent {}
    ///
    /// let mut registry = Registry::new();
    /// let entity = registry.spawn_entity();
    ///
    /// assert!(!registry.has_ephemeral_component::<JumpIntent>(entity));
    ///
    /// registry.add_ephemeral_component(entity, JumpIntent { force: 500.0 }).unwrap();
    /// assert!(registry.has_ephemeral_component::<JumpIntent>(entity));
    /// ```
    pub fn has_ephemeral_component<T: Component>(&self, entity: crate::Entity) -> bool {
        if !self.is_entity_active(entity) {
            return false;
        }

        let type_id = std::any::TypeId::of::<T>();
        self.reverse_ephemeral_component_index
            .get(&type_id)
            .map(|entities| entities.contains(&entity))
            .unwrap_or(false)
    }

    /// Clears all ephemeral component storages.
    ///
    /// This implements the "nuclear cleanup" pattern - an O(1) operation that
    /// replaces the entire ephemeral storage HashMap with a new one, letting
    /// Rust's Drop trait handle all memory cleanup automatically.
    ///
    /// This function is typically called by the system scheduler at the end of
    /// each frame to ensure ephemeral components only live for one frame cycle.
    ///
    /// # Example
    /// ```
    /// use nova_ecs::{Registry, Component};
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct TempEffect { duration: f32 }
    /// impl Component for TempEffect {}
    ///
    /// let mut registry = Registry::new();
    /// let entity = registry.spawn_entity();
    ///
    /// registry.add_ephemeral_component(entity, TempEffect { duration: 1.0 }).unwrap();
    /// assert!(registry.has_ephemeral_component::<TempEffect>(entity));
    ///
    /// // System scheduler calls this at end of frame
    /// registry.clean_ephemeral_storage();
    /// assert!(!registry.has_ephemeral_component::<TempEffect>(entity));
    /// ```
    pub fn clean_ephemeral_storage(&mut self) {
        // Nuclear cleanup - O(1) operation
        self.ephemeral_component_storages = HashMap::new();
        self.reverse_ephemeral_component_index = HashMap::new();
    }
}
