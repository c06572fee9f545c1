use std::cell::UnsafeCell;
use std::collections::HashMap;

use crate::{ErasedBox, TypeKey};

/// Process-wide keyed singleton table: at most one value of each type `T`.
///
/// This is the storage primitive behind [`crate::World`]'s resources and is
/// deliberately separate from [`crate::Registry`]'s per-entity component
/// storage — resources have no associated entity.
///
/// Entries are held behind an `UnsafeCell` so that the system-parameter
/// binding machinery (see [`crate::SystemParam`]) can fetch several distinct
/// resources out of a single shared `&Resources` within one system
/// invocation, each potentially mutably. This is sound only because each
/// system's statically merged [`crate::Access`] guarantees the set of
/// resource types touched by read-write parameters never overlaps with
/// itself or with any read-only parameter; [`Resources::get_mut_unchecked`]
/// is the unsafe seam that relies on that guarantee and is not meant to be
/// called outside that machinery.
#[derive(Default)]
pub struct Resources {
    map: HashMap<TypeKey, UnsafeCell<ErasedBox>>,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` iff no value of type `T` is already present. Returns a
    /// reference to the stored value (the new one if inserted, the existing
    /// one otherwise) and whether an insertion happened.
    pub fn try_add<T: 'static>(&mut self, value: T) -> (&T, bool) {
        let key = TypeKey::of::<T>();
        let inserted = !self.map.contains_key(&key);
        if inserted {
            self.map.insert(key, UnsafeCell::new(ErasedBox::new(value)));
        }
        (
            self.map
                .get_mut(&key)
                .and_then(|cell| cell.get_mut().downcast_ref())
                .expect("resource just inserted or already present must downcast"),
            inserted,
        )
    }

    /// Inserts `value`, replacing and dropping any prior value of type `T`.
    pub fn set<T: 'static>(&mut self, value: T) -> &T {
        let key = TypeKey::of::<T>();
        self.map.insert(key, UnsafeCell::new(ErasedBox::new(value)));
        self.map
            .get_mut(&key)
            .and_then(|cell| cell.get_mut().downcast_ref())
            .expect("resource just inserted must downcast")
    }

    /// Removes and returns the stored value of type `T`, if any.
    pub fn remove<T: 'static>(&mut self) -> Option<T> {
        let key = TypeKey::of::<T>();
        self.map
            .remove(&key)
            .and_then(|cell| cell.into_inner().downcast::<T>().ok())
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.map.contains_key(&TypeKey::of::<T>())
    }

    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.map
            .get(&TypeKey::of::<T>())
            // SAFETY: a shared `&Resources` borrow never coexists with a
            // `&mut` one into the same entry; `get_mut`/`try_add`/`set` all
            // require `&mut self` on this map first.
            .and_then(|cell| unsafe { &*cell.get() }.downcast_ref())
    }

    pub fn get_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.map
            .get_mut(&TypeKey::of::<T>())
            .and_then(|cell| cell.get_mut().downcast_mut())
    }

    /// Fetches a mutable reference to the stored value of type `T` through a
    /// shared `&Resources` borrow.
    ///
    /// # Safety
    /// The caller must ensure no other live reference (shared or exclusive)
    /// to the same type's stored value is held for the duration of the
    /// returned borrow. Used only by [`crate::SystemParam`] fetch
    /// implementations, which uphold this via each system's merged
    /// [`crate::Access`].
    pub unsafe fn get_mut_unchecked<T: 'static>(&self) -> Option<&mut T> {
        let cell = self.map.get(&TypeKey::of::<T>())?;
        // SAFETY: forwarded to the caller's contract above.
        unsafe { (*cell.get()).downcast_mut() }
    }

    /// Drops every stored resource.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
