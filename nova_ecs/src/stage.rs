use crate::{graph, EcsResult, GraphNode, Label, Ordering, SystemDescriptor};

/// A named, ordered container of systems.
///
/// A `Stage` is itself a [`GraphNode`]: its `primary_label` (plus any extra
/// labels) and its `ordering` let the [`crate::Scheduler`] place it relative
/// to other stages with exactly the same before/after machinery a system
/// uses to place itself relative to other systems within a stage.
pub struct Stage {
    primary_label: Label,
    labels: Vec<Label>,
    ordering: Ordering,
    systems: Vec<SystemDescriptor>,
}

impl Stage {
    /// Creates an empty stage identified by `primary_label`.
    pub fn new(primary_label: impl Into<Label>) -> Self {
        let primary_label = primary_label.into();
        Self {
            labels: vec![primary_label.clone()],
            primary_label,
            ordering: Ordering::empty(),
            systems: Vec::new(),
        }
    }

    /// Adds an extra label this stage can be referenced by, in addition to
    /// its primary one.
    pub fn label(mut self, label: impl Into<Label>) -> Self {
        self.labels.push(label.into());
        self
    }

    pub fn before(mut self, label: impl Into<Label>) -> Self {
        self.ordering = self.ordering.before(label.into());
        self
    }

    pub fn after(mut self, label: impl Into<Label>) -> Self {
        self.ordering = self.ordering.after(label.into());
        self
    }

    pub fn primary_label(&self) -> &Label {
        &self.primary_label
    }

    pub(crate) fn add_after(&mut self, label: Label) {
        self.ordering.after.push(label);
    }

    pub(crate) fn add_before(&mut self, label: Label) {
        self.ordering.before.push(label);
    }

    /// Appends a system descriptor to this stage's bucket, in registration
    /// order — the order [`crate::Scheduler::initialize_systems`] preserves
    /// for any two systems with no ordering constraint between them.
    pub fn add_system(&mut self, descriptor: SystemDescriptor) {
        self.systems.push(descriptor);
    }

    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    pub(crate) fn systems_mut(&mut self) -> &mut [SystemDescriptor] {
        &mut self.systems
    }

    /// Sorts this stage's systems into a topological order of their own
    /// before/after constraints.
    pub(crate) fn sort_systems(&mut self) -> EcsResult<()> {
        let systems = std::mem::take(&mut self.systems);
        self.systems = graph::sort(systems, |descriptor| descriptor.labels()[0].name().to_string())?;
        Ok(())
    }
}

impl GraphNode for Stage {
    fn labels(&self) -> &[Label] {
        &self.labels
    }

    fn ordering(&self) -> &Ordering {
        &self.ordering
    }
}
