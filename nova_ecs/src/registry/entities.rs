use crate::Entity;

use super::Registry;

impl Registry {
    /// Spawns a new entity in the registry.
    ///
    /// Each entity is guaranteed to have a unique identifier that can be used
    /// to attach components and perform operations.
    ///
    /// # Returns
    /// The newly created `Entity` with a unique identifier.
    ///
    /// # Example
    /// ```
    /// use nova_ecs::Registry;
    ///
    /// let mut registry = Registry::new();
    /// let entity1 = registry.spawn_entity();
    /// let entity2 = registry.spawn_entity();
    ///
    /// assert_ne!(entity1, entity2); // Entities have unique identifiers
    /// assert_eq!(registry.entities().count(), 2);
    /// ```
    pub fn spawn_entity(&mut self) -> Entity {
        let entity = Entity::new();
        self.entities.insert(entity);
        entity
    }

    /// Returns an iterator over all active entities (excludes deleted entities).
    ///
    /// The iterator yields references to `Entity` objects that are currently active
    /// in the registry. Deleted entities are automatically excluded.
    ///
    /// # Returns
    /// An iterator over `&Entity` references.
    ///
    /// # Example
    /// ```
    /// use nova_ecs::Registry;
    ///
    /// let mut registry = Registry::new();
    /// let entity1 = registry.spawn_entity();
    /// let entity2 = registry.spawn_entity();
    ///
    /// assert_eq!(registry.entities().count(), 2);
    ///
    /// registry.delete_entity(entity1);
    /// assert_eq!(registry.entities().count(), 1);
    /// ```
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Deletes an entity from the registry.
    ///
    /// The entity will no longer be accessible for component operations, but actual
    /// cleanup of component data happens during the next cleanup cycle for performance.
    /// Multiple calls to delete the same entity are safe and have no additional effect.
    ///
    /// # Parameters
    /// * `entity` - The entity to delete
    ///
    /// # Example
    /// ```
    /// use nova_ecs::{Registry, Component};
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Position { x: f32, y: f32 }
    /// impl Component for Position {}
    ///
    /// let mut registry = Registry::new();
    /// let entity = registry.spawn_entity();
    ///
    /// registry.add_component(entity, Position { x: 1.0, y: 2.0 }).unwrap();
    /// assert!(registry.has_component::<Position>(entity));
    ///
    /// registry.delete_entity(entity);
    /// assert!(!registry.has_component::<Position>(entity));
    /// ```
    pub fn delete_entity(&mut self, entity: Entity) {
        if self.entities.contains(&entity) {
            self.entities.remove(&entity);
            self.soft_deleted_entities.insert(entity);
        }
    }

    /// Performs cleanup of deleted entities.
    ///
    /// This method removes component data for all deleted entities from storage.
    /// It's typically called automatically by the ECS at appropriate times
    /// (end of frame, maintenance cycles, etc.) but can be called manually if needed.
    /// Multiple calls are safe and efficient.
    ///
    /// # Example
    /// ```
    /// use nova_ecs::{Registry, Component};
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Position { x: f32, y: f32 }
    /// impl Component for Position {}
    ///
    /// let mut registry = Registry::new();
    /// let entity = registry.spawn_entity();
    ///
    /// registry.add_component(entity, Position { x: 1.0, y: 2.0 }).unwrap();
    /// registry.delete_entity(entity);
    ///
    /// // Cleanup removes component data from storage
    /// registry.cleanup_deleted_entities();
    /// ```
    pub fn cleanup_deleted_entities(&mut self) {
        for entity in self.soft_deleted_entities.iter() {
            for storage in self.component_storages.values_mut() {
                storage.remove_entity(*entity);
            }
        }
        self.soft_deleted_entities.clear();
    }

    /// Checks if an entity is active (exists and hasn't been soft-deleted).
    pub(super) fn is_entity_active(&self, entity: Entity) -> bool {
        self.entities.contains(&entity) && !self.soft_deleted_entities.contains(&entity)
    }
}
