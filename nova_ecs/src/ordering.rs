use crate::Label;

/// Before/after label constraints carried by a system or a stage.
///
/// `before` contains labels `L` such that the owning node must run before
/// every node also labeled `L`; `after` is the symmetric "must run after"
/// constraint.
#[derive(Clone, Debug, Default)]
pub struct Ordering {
    pub before: Vec<Label>,
    pub after: Vec<Label>,
}

impl Ordering {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn before(mut self, label: Label) -> Self {
        self.before.push(label);
        self
    }

    pub fn after(mut self, label: Label) -> Self {
        self.after.push(label);
        self
    }
}
