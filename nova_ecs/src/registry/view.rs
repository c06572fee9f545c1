use std::any::TypeId;
use std::collections::HashSet;
use std::marker::PhantomData;

use crate::{Component, Entity, TypeKey};

use super::Registry;

/// Positive component filter for [`View`]: entities must carry every listed component.
pub struct With<T>(PhantomData<T>);

/// Negative component filter for [`View`]: entities must carry none of the listed components.
pub struct Without<T>(PhantomData<T>);

/// A filtered iterator over entities carrying every component in `W` and none in `WO`.
///
/// `View<With<(A, B)>, Without<(C,)>>` is the system-parameter-bound counterpart
/// to the registry's runtime [`crate::Query`]; unlike `Query`, the filter's
/// type-list is fixed at compile time, which is what lets a system's
/// [`crate::Access`] be computed without running it.
pub struct View<'r, W, WO> {
    registry: &'r Registry,
    entities: Vec<Entity>,
    _with: PhantomData<W>,
    _without: PhantomData<WO>,
}

/// Component-type-list introspection used to build a [`View`]'s entity set
/// and, via [`ComponentTypeList::type_keys`], its [`crate::SystemParam`]
/// access declaration.
pub trait ComponentTypeList {
    fn type_ids() -> Vec<TypeId>;
    fn type_keys() -> Vec<TypeKey>;
}

impl ComponentTypeList for () {
    fn type_ids() -> Vec<TypeId> {
        Vec::new()
    }
    fn type_keys() -> Vec<TypeKey> {
        Vec::new()
    }
}

macro_rules! impl_component_type_list {
    ( $( $t:ident ),+ ) => {
        impl<$( $t: Component ),+> ComponentTypeList for ( $( $t, )+ ) {
            fn type_ids() -> Vec<TypeId> {
                vec![ $( TypeId::of::<$t>() ),+ ]
            }
            fn type_keys() -> Vec<TypeKey> {
                vec![ $( TypeKey::of::<$t>() ),+ ]
            }
        }
    };
}

impl_component_type_list!(A);
impl_component_type_list!(A, B);
impl_component_type_list!(A, B, C);
impl_component_type_list!(A, B, C, D);

impl<'r, W: ComponentTypeList, WO: ComponentTypeList> View<'r, With<W>, Without<WO>> {
    pub(crate) fn new(registry: &'r Registry) -> Self {
        let with_ids = W::type_ids();
        let without_ids = WO::type_ids();

        let mut candidates: Option<HashSet<Entity>> = None;
        for type_id in with_ids {
            let set = registry.entities_with_component_by_type_id(type_id);
            candidates = Some(match candidates {
                Some(current) => current.intersection(&set).copied().collect(),
                None => set,
            });
        }
        let mut entities: Vec<Entity> = candidates.unwrap_or_default().into_iter().collect();

        for type_id in without_ids {
            let excluded = registry.entities_with_component_by_type_id(type_id);
            entities.retain(|entity| !excluded.contains(entity));
        }

        Self {
            registry,
            entities,
            _with: PhantomData,
            _without: PhantomData,
        }
    }

    /// Returns the matched entities; component data is fetched on demand via
    /// [`Registry::get_component`] rather than held by the view.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Borrows the registry backing this view, for fetching component data.
    pub fn registry(&self) -> &Registry {
        self.registry
    }
}

impl Registry {
    /// Builds a compile-time-typed [`View`] over this registry.
    pub fn view<W: ComponentTypeList, WO: ComponentTypeList>(
        &self,
    ) -> View<'_, With<W>, Without<WO>> {
        View::new(self)
    }
}
