use crate::{Access, GraphNode, Label, Ordering, System};

/// A [`System`] plus the labels and ordering constraints it was registered
/// with, as tracked by a [`crate::Stage`] or the scheduler's startup/teardown
/// buckets.
///
/// The system's own implicit self-label (see [`System::self_label`]) is
/// always present in `labels` alongside any explicit ones a builder call
/// added, which is what lets `before`/`after` reference a system by its own
/// callable name without the author registering anything extra.
pub struct SystemDescriptor {
    pub(crate) system: System,
    pub(crate) labels: Vec<Label>,
    pub(crate) ordering: Ordering,
}

impl SystemDescriptor {
    pub(crate) fn new(system: System) -> Self {
        let labels = vec![system.self_label().clone()];
        Self {
            system,
            labels,
            ordering: Ordering::empty(),
        }
    }

    /// Adds an extra label this descriptor can be referenced by, in
    /// addition to its implicit self-label.
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

    pub fn access(&self) -> &Access {
        self.system.access()
    }
}

impl GraphNode for SystemDescriptor {
    fn labels(&self) -> &[Label] {
        &self.labels
    }

    fn ordering(&self) -> &Ordering {
        &self.ordering
    }
}
