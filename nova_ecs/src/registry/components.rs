use crate::{Component, ComponentError, ComponentStorage};

use super::Registry;

impl Registry {
    /// Adds a component to an entity.
    ///
    /// If the entity already has a component of this type, the operation will fail
    /// with `ComponentError::ComponentAlreadyExists`. If the entity doesn't exist
    /// or has been deleted, it will fail with `ComponentError::ComponentNotFound`.
    ///
    /// # Parameters
    /// * `entity` - The entity to add the component to
    /// * `component` - The component instance to add
    ///
    /// # Returns
    /// * `Ok(())` if the component was successfully added
    /// * `Err(ComponentError)` if the operation failed
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
    /// let result = registry.add_component(entity, Position { x: 10.0, y: 20.0 });
    /// assert!(result.is_ok());
    ///
    /// // Adding the same component type again fails
    /// let result = registry.add_component(entity, Position { x: 5.0, y: 5.0 });
    /// assert!(result.is_err());
    /// ```
    pub fn add_component<T: Component>(
        &mut self,
        entity: crate::Entity,
        component: T,
    ) -> Result<(), ComponentError> {
        if !self.is_entity_active(entity) {
            return Err(ComponentError::ComponentNotFound);
        }

        let storage = self.get_storage_mut::<T>();
        storage.insert(entity, component)
    }

    /// Gets a reference to a component attached to an entity.
    ///
    /// Returns `None` if the entity doesn't exist, has been deleted, or doesn't
    /// have a component of the specified type.
    ///
    /// # Parameters
    /// * `entity` - The entity to get the component from
    ///
    /// # Returns
    /// * `Some(&T)` if the component exists
    /// * `None` if the component doesn't exist or entity is invalid
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
    /// assert_eq!(registry.get_component::<Position>(entity), None);
    ///
    /// registry.add_component(entity, Position { x: 10.0, y: 20.0 }).unwrap();
    /// let position = registry.get_component::<Position>(entity).unwrap();
    /// assert_eq!(position.x, 10.0);
    /// ```
    pub fn get_component<T: Component>(&self, entity: crate::Entity) -> Option<&T> {
        if !self.is_entity_active(entity) {
            return None;
        }

        self.get_storage::<T>()?.get(entity)
    }

    /// Updates a component using a functional transformation.
    ///
    /// This method provides immutable component updates by taking the current component,
    /// applying a transformation function, and storing the result. This approach is
    /// safe for multi-process environments and ensures data consistency.
    ///
    /// # Type Parameters
    /// * `T` - The component type, which must implement `Component + Clone`
    /// * `F` - The transformation function type
    ///
    /// # Parameters
    /// * `entity` - The entity whose component to update
    /// * `f` - A function that takes the current component and returns the new component
    ///
    /// # Returns
    /// * `Ok(T)` - The new component value after update
    /// * `Err(ComponentError::ComponentNotFound)` - If entity or component doesn't exist
    ///
    /// # Example
    /// ```
    /// use nova_ecs::{Registry, Component};
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Health { value: u32 }
    /// impl Component for Health {}
    ///
    /// let mut registry = Registry::new();
    /// let entity = registry.spawn_entity();
    ///
    /// registry.add_component(entity, Health { value: 100 }).unwrap();
    ///
    /// // Damage the entity
    /// let new_health = registry.update_component::<Health, _>(entity, |mut health| {
    ///     health.value = health.value.saturating_sub(25);
    ///     health
    /// }).unwrap();
    ///
    /// assert_eq!(new_health.value, 75);
    /// assert_eq!(registry.get_component::<Health>(entity).unwrap().value, 75);
    /// ```
    pub fn update_component<T, F>(
        &mut self,
        entity: crate::Entity,
        f: F,
    ) -> Result<T, ComponentError>
    where
        T: Component + Clone,
        F: FnOnce(T) -> T,
    {
        if !self.is_entity_active(entity) {
            return Err(ComponentError::ComponentNotFound);
        }

        let storage = self.get_storage_mut::<T>();
        match storage.get(entity) {
            Some(old_component) => {
                let new_component = f(old_component.clone());
                storage.insert_or_update(entity, new_component.clone());
                Ok(new_component)
            }
            None => Err(ComponentError::ComponentNotFound),
        }
    }

    /// Replaces a component with a new value, returning the old value if it existed.
    ///
    /// If the entity doesn't have the component type, the new component is added
    /// and `None` is returned. If the entity has been deleted, `None` is returned
    /// and no action is taken.
    ///
    /// # Parameters
    /// * `entity` - The entity whose component to replace
    /// * `component` - The new component value
    ///
    /// # Returns
    /// * `Some(T)` - The previous component value if it existed
    /// * `None` - If no previous component existed or entity is invalid
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
    /// // First replacement on empty entity returns None
    /// let old = registry.replace_component(entity, Position { x: 1.0, y: 1.0 });
    /// assert_eq!(old, None);
    ///
    /// // Second replacement returns the old value
    /// let old = registry.replace_component(entity, Position { x: 2.0, y: 2.0 });
    /// assert_eq!(old, Some(Position { x: 1.0, y: 1.0 }));
    /// ```
    pub fn replace_component<T: Component + Clone>(
        &mut self,
        entity: crate::Entity,
        component: T,
    ) -> Option<T> {
        if !self.is_entity_active(entity) {
            return None;
        }

        let storage = self.get_storage_mut::<T>();
        let old_component = storage.get(entity).cloned();
        storage.insert_or_update(entity, component);
        old_component
    }

    /// Checks if an entity has a specific component type.
    ///
    /// Returns `false` if the entity doesn't exist, has been deleted, or doesn't
    /// have a component of the specified type.
    ///
    /// # Parameters
    /// * `entity` - The entity to check
    ///
    /// # Returns
    /// * `true` if the entity has the component type
    /// * `false` if the entity doesn't have the component or is invalid
    ///
    /// # Example
    /// ```
    /// use nova_ecs::{Registry, Component};
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Position { x: f32, y: f32 }
    /// impl Component for Position {}
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Health { value: u32 }
    /// impl Component for Health {}
    ///
    /// let mut registry = Registry::new();
    /// let entity = registry.spawn_entity();
    ///
    /// assert!(!registry.has_component::<Position>(entity));
    /// assert!(!registry.has_component::<Health>(entity));
    ///
    /// registry.add_component(entity, Position { x: 1.0, y: 2.0 }).unwrap();
    ///
    /// assert!(registry.has_component::<Position>(entity));
    /// assert!(!registry.has_component::<Health>(entity));
    /// ```
    pub fn has_component<T: Component>(&self, entity: crate::Entity) -> bool {
        if !self.is_entity_active(entity) {
            return false;
        }

        self.get_storage::<T>()
            .is_some_and(|storage| storage.contains(entity))
    }

    /// Removes a component from an entity and returns it.
    ///
    /// Returns `None` if the entity doesn't exist, has been deleted, or doesn't
    /// have a component of the specified type.
    ///
    /// # Parameters
    /// * `entity` - The entity to remove the component from
    ///
    /// # Returns
    /// * `Some(T)` - The removed component if it existed
    /// * `None` - If the component didn't exist or entity is invalid
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
    /// let position = Position { x: 10.0, y: 20.0 };
    /// registry.add_component(entity, position.clone()).unwrap();
    ///
    /// assert!(registry.has_component::<Position>(entity));
    ///
    /// let removed = registry.remove_component::<Position>(entity);
    /// assert_eq!(removed, Some(position));
    /// assert!(!registry.has_component::<Position>(entity));
    /// ```
    pub fn remove_component<T: Component>(&mut self, entity: crate::Entity) -> Option<T> {
        if !self.is_entity_active(entity) {
            return None;
        }

        self.get_storage_mut::<T>().remove(entity)
    }
}
