use std::collections::HashSet;

use crate::TypeKey;

/// The read-only and read-write type sets a system (or a single parameter)
/// declares over resources, components, and world handles.
///
/// `read_only` and `read_write` are always disjoint; [`Access::merge`] is the
/// only way to combine two `Access` values and enforces that invariant by
/// construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Access {
    read_only: HashSet<TypeKey>,
    read_write: HashSet<TypeKey>,
}

impl Access {
    pub fn empty() -> Self {
        Self::default()
    }

    /// An access declaring a single read-only type.
    pub fn read_only(key: TypeKey) -> Self {
        Self {
            read_only: HashSet::from([key]),
            read_write: HashSet::new(),
        }
    }

    /// An access declaring a single read-write type.
    pub fn read_write(key: TypeKey) -> Self {
        Self {
            read_only: HashSet::new(),
            read_write: HashSet::from([key]),
        }
    }

    pub fn read_only_set(&self) -> &HashSet<TypeKey> {
        &self.read_only
    }

    pub fn read_write_set(&self) -> &HashSet<TypeKey> {
        &self.read_write
    }

    /// Unions the read-only and read-write sets of `self` and `other`, then
    /// removes from the read-only union anything present in the read-write
    /// union, so the disjointness invariant always holds on the result.
    pub fn merge(self, other: Access) -> Access {
        let read_write: HashSet<TypeKey> =
            self.read_write.union(&other.read_write).copied().collect();
        let read_only: HashSet<TypeKey> = self
            .read_only
            .union(&other.read_only)
            .copied()
            .filter(|key| !read_write.contains(key))
            .collect();

        Access {
            read_only,
            read_write,
        }
    }
}
