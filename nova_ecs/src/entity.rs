use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for entities in the ECS system.
///
/// Entities represent game objects like players, monsters, items, or rooms.
/// Each entity is guaranteed to be unique and should only be created through
/// the [`Registry::spawn_entity()`](crate::Registry::spawn_entity) method.
///
/// # Examples
///
/// ```
/// use nova_ecs::Registry;
///
/// let mut registry = Registry::new();
/// let player = registry.spawn_entity();
/// let monster = registry.spawn_entity();
///
/// assert_ne!(player, monster);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Entity {
    id: u64,
}

static CURRENT_ID: AtomicU64 = AtomicU64::new(0);

impl Entity {
    /// Creates a new unique entity.
    ///
    /// This method is internal to the crate and should only be called by [`Registry::spawn_entity()`].
    /// Users should create entities through the World interface to ensure proper tracking.
    ///
    /// [`Registry::spawn_entity()`]: crate::Registry::spawn_entity
    #[allow(clippy::new_without_default)]
    pub(crate) fn new() -> Entity {
        Entity {
            id: CURRENT_ID.fetch_add(1, Ordering::Relaxed),
        }
    }
}
