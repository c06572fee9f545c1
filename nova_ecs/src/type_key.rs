use std::hash::{Hash, Hasher};

/// Stable, comparable, hashable identity for a Rust type, used wherever the
/// framework needs to key resources, components, or world handles by type.
///
/// Unlike `std::any::TypeId`, `TypeKey` carries a human-readable display name
/// alongside the numeric hash, which is what lets dependency-cycle diagnostics
/// and panic messages name the offending type. Equality compares the full
/// pair (numeric id *and* name); hashing uses only the numeric id, since two
/// `TypeKey`s with the same id are always the same id-name pair in practice
/// (the name is derived deterministically from the type), and hashing only
/// the id keeps lookups cheap.
#[derive(Clone, Copy, Debug, Eq)]
pub struct TypeKey {
    id: u64,
    name: &'static str,
}

impl TypeKey {
    /// Computes the `TypeKey` for `T`.
    pub fn of<T: 'static>() -> Self {
        Self {
            id: hash_type_id(std::any::TypeId::of::<T>()),
            name: std::any::type_name::<T>(),
        }
    }

    /// The type's display name, as produced by `std::any::type_name`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The numeric id backing this key's `Hash` implementation.
    pub fn id(&self) -> u64 {
        self.id
    }
}

fn hash_type_id(type_id: std::any::TypeId) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    type_id.hash(&mut hasher);
    hasher.finish()
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
