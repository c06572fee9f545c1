use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Stable numeric identity backing a [`Label`]'s equality and hashing.
///
/// Two labels compare equal iff their ids are equal; the display name is
/// carried purely for diagnostics (cycle traces, panic messages) and does
/// not participate in equality, unlike [`crate::TypeKey`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LabelId(u64);

impl LabelId {
    fn of_name(name: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self(hasher.finish())
    }
}

/// A value-typed handle identifying a system or stage for ordering purposes.
///
/// Labels are cheap to clone and immutable once constructed. They can be
/// built from a string, from a zero-sized tag type (whose type name becomes
/// the label's name), or from a callable (whose functor type name becomes
/// the label's name) via [`Label::of`]/[`Label::of_callable`].
#[derive(Clone, Debug)]
pub struct Label {
    id: LabelId,
    name: String,
}

impl Label {
    /// Builds a label from an explicit name, such as a stage name or a
    /// string literal passed to `.label("...")`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let id = LabelId::of_name(&name);
        Self { id, name }
    }

    /// Builds a label from a zero-sized marker type, e.g. a unit struct used
    /// purely to tag a system (`struct TimeSystem;`).
    pub fn of<T: 'static>() -> Self {
        Self::new(std::any::type_name::<T>())
    }

    /// Builds a label from a callable's own type — the mechanism every
    /// system uses to acquire its implicit self-label.
    pub fn of_callable<F: 'static>(_callable: &F) -> Self {
        Self::of::<F>()
    }

    pub fn id(&self) -> LabelId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Label {}

impl Hash for Label {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::new(value)
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Label::new(value)
    }
}
