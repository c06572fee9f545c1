use crate::{Registry, Resources};

/// Aggregate of a process-wide [`Resources`] table and a component [`Registry`].
///
/// `World` is the value every system's parameters are bound from. It owns no
/// behavior of its own beyond composing the two stores; systems reach into it
/// only through their declared [`crate::SystemParam`]s.
#[derive(Default)]
pub struct World {
    pub resources: Resources,
    pub registry: Registry,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    pub fn resources_mut(&mut self) -> &mut Resources {
        &mut self.resources
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }
}
