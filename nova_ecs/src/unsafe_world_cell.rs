use std::marker::PhantomData;

use crate::{Registry, Resources, World};

/// A `*mut World` stripped of Rust's borrow tracking, minted from a single
/// `&mut World` for the duration of one system invocation.
///
/// A system's bound parameters are fetched one at a time from whatever
/// world the scheduler hands it, and several of them may need to coexist as
/// live references (e.g. two distinct `ResMut<T>`s) even though they all
/// trace back to the same `&mut World`. Rust's aliasing rules can't see that
/// those references target disjoint data, so the cell hands out raw-pointer
/// derived references instead and leaves the disjointness obligation to the
/// caller.
///
/// Every unsafe accessor here carries the same safety contract: the
/// reference it returns must not outlive, or alias, any other reference
/// obtained from this cell during the same system call. [`crate::Access`] is
/// what a well-behaved [`crate::SystemParam`] impl uses to guarantee that —
/// this type has no way to check it itself.
#[derive(Clone, Copy)]
pub struct UnsafeWorldCell<'w> {
    world: *mut World,
    _marker: PhantomData<&'w mut World>,
}

impl<'w> UnsafeWorldCell<'w> {
    pub(crate) fn new(world: &'w mut World) -> Self {
        Self {
            world: world as *mut World,
            _marker: PhantomData,
        }
    }

    /// # Safety
    /// See the type-level contract.
    pub unsafe fn world_ref(&self) -> &'w World {
        // SAFETY: forwarded to the caller.
        unsafe { &*self.world }
    }

    /// # Safety
    /// See the type-level contract.
    pub unsafe fn world_mut(&self) -> &'w mut World {
        // SAFETY: forwarded to the caller.
        unsafe { &mut *self.world }
    }

    /// # Safety
    /// See the type-level contract. Always safe to call more than once since
    /// [`Resources`] itself guards per-type aliasing via
    /// [`Resources::get_mut_unchecked`]; it is the subsequent per-type fetch
    /// that must uphold disjointness.
    pub unsafe fn resources(&self) -> &'w Resources {
        // SAFETY: forwarded to the caller.
        unsafe { &(*self.world).resources }
    }

    /// # Safety
    /// See the type-level contract.
    pub unsafe fn resources_mut(&self) -> &'w mut Resources {
        // SAFETY: forwarded to the caller.
        unsafe { &mut (*self.world).resources }
    }

    /// # Safety
    /// See the type-level contract.
    pub unsafe fn registry(&self) -> &'w Registry {
        // SAFETY: forwarded to the caller.
        unsafe { &(*self.world).registry }
    }

    /// # Safety
    /// See the type-level contract.
    pub unsafe fn registry_mut(&self) -> &'w mut Registry {
        // SAFETY: forwarded to the caller.
        unsafe { &mut (*self.world).registry }
    }
}
