use std::ops::{Deref, DerefMut};

use crate::registry::{ComponentTypeList, View, With, Without};
use crate::{Access, EcsError, Registry, Resources, TypeKey, UnsafeWorldCell, World};

/// Constructs a default value for [`Local`] state when no richer
/// construction is needed.
///
/// A blanket impl covers every `T: Default`; a type with genuinely
/// world-dependent setup can implement this by hand instead of `Default`.
pub trait FromWorld {
    fn from_world(world: &World) -> Self;
}

impl<T: Default> FromWorld for T {
    fn from_world(_world: &World) -> Self {
        T::default()
    }
}

/// Read-only access to a resource of type `T`.
///
/// Binds to [`SystemParam`]'s `Resource<const T>` kind: declares
/// [`Access::read_only`] on `T` and fails the system with
/// [`EcsError::MissingResource`] when `T` isn't present.
pub struct Res<'w, T> {
    value: &'w T,
}

impl<T> Deref for Res<'_, T> {
    type Target = T;
    fn deref(&self) -> &T {
        self.value
    }
}

/// Read-write access to a resource of type `T`.
///
/// Binds to `Resource<T>`: declares [`Access::read_write`] on `T` and fails
/// the system with [`EcsError::MissingResource`] when `T` isn't present.
pub struct ResMut<'w, T> {
    value: &'w mut T,
}

impl<T> Deref for ResMut<'_, T> {
    type Target = T;
    fn deref(&self) -> &T {
        self.value
    }
}

impl<T> DerefMut for ResMut<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.value
    }
}

/// Per-system persistent state, constructed once via [`FromWorld`] and
/// reused across every subsequent call to the owning system.
pub struct Local<'w, T> {
    value: &'w mut T,
}

impl<T> Deref for Local<'_, T> {
    type Target = T;
    fn deref(&self) -> &T {
        self.value
    }
}

impl<T> DerefMut for Local<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.value
    }
}

/// A binding from a system's declared parameter kind to the value the
/// user's callable actually receives.
///
/// `Self` names the *kind* a system function declares in its signature
/// (e.g. `Res<Score>`, with its lifetime elided); [`SystemParam::Item`] is a
/// generic associated type producing the value actually bound for one
/// invocation's lifetime, which is what lets a single trait describe a
/// parameter kind whose fetched value borrows from whatever [`World`] the
/// scheduler hands it this call.
pub trait SystemParam: Sized {
    /// Per-system persistent state; `()` for parameters that carry none.
    type State: Default + 'static;

    /// The value bound for one system invocation.
    type Item<'w>;

    /// The access this parameter kind declares over resources, components,
    /// and world handles.
    fn access() -> Access;

    /// Builds the parameter's initial state.
    fn init(world: &World) -> Self::State;

    /// Produces the value passed to the user's callable for one system call.
    fn param<'w>(state: &'w mut Self::State, world: UnsafeWorldCell<'w>) -> Result<Self::Item<'w>, EcsError>;
}

impl<'a, T: 'static> SystemParam for Res<'a, T> {
    type State = ();
    type Item<'w> = Res<'w, T>;

    fn access() -> Access {
        Access::read_only(TypeKey::of::<T>())
    }

    fn init(_world: &World) -> Self::State {}

    fn param<'w>(_state: &'w mut Self::State, world: UnsafeWorldCell<'w>) -> Result<Self::Item<'w>, EcsError> {
        // SAFETY: only a read is taken, and the system's merged Access
        // guarantees no other parameter holds a conflicting write to T.
        let resources = unsafe { world.resources() };
        resources
            .get::<T>()
            .map(|value| Res { value })
            .ok_or(EcsError::MissingResource(std::any::type_name::<T>()))
    }
}

impl<'a, T: 'static> SystemParam for ResMut<'a, T> {
    type State = ();
    type Item<'w> = ResMut<'w, T>;

    fn access() -> Access {
        Access::read_write(TypeKey::of::<T>())
    }

    fn init(_world: &World) -> Self::State {}

    fn param<'w>(_state: &'w mut Self::State, world: UnsafeWorldCell<'w>) -> Result<Self::Item<'w>, EcsError> {
        // SAFETY: the system's merged Access reserves exclusive access to T
        // for this parameter; no other parameter in the same system may
        // also touch T.
        let resources = unsafe { world.resources() };
        unsafe { resources.get_mut_unchecked::<T>() }
            .map(|value| ResMut { value })
            .ok_or(EcsError::MissingResource(std::any::type_name::<T>()))
    }
}

impl<'a, T: 'static> SystemParam for Option<Res<'a, T>> {
    type State = ();
    type Item<'w> = Option<Res<'w, T>>;

    fn access() -> Access {
        <Res<'a, T> as SystemParam>::access()
    }

    fn init(_world: &World) -> Self::State {}

    fn param<'w>(_state: &'w mut Self::State, world: UnsafeWorldCell<'w>) -> Result<Self::Item<'w>, EcsError> {
        let resources = unsafe { world.resources() };
        Ok(resources.get::<T>().map(|value| Res { value }))
    }
}

impl<'a, T: 'static> SystemParam for Option<ResMut<'a, T>> {
    type State = ();
    type Item<'w> = Option<ResMut<'w, T>>;

    fn access() -> Access {
        <ResMut<'a, T> as SystemParam>::access()
    }

    fn init(_world: &World) -> Self::State {}

    fn param<'w>(_state: &'w mut Self::State, world: UnsafeWorldCell<'w>) -> Result<Self::Item<'w>, EcsError> {
        let resources = unsafe { world.resources() };
        Ok(unsafe { resources.get_mut_unchecked::<T>() }.map(|value| ResMut { value }))
    }
}

impl<'a, T: FromWorld + 'static> SystemParam for Local<'a, T> {
    type State = T;
    type Item<'w> = Local<'w, T>;

    fn access() -> Access {
        Access::empty()
    }

    fn init(world: &World) -> Self::State {
        T::from_world(world)
    }

    fn param<'w>(state: &'w mut Self::State, _world: UnsafeWorldCell<'w>) -> Result<Self::Item<'w>, EcsError> {
        Ok(Local { value: state })
    }
}

impl<'a, W: ComponentTypeList + 'static, WO: ComponentTypeList + 'static> SystemParam
    for View<'a, With<W>, Without<WO>>
{
    type State = ();
    type Item<'w> = View<'w, With<W>, Without<WO>>;

    fn access() -> Access {
        let mut access = Access::read_only(TypeKey::of::<Registry>());
        for key in W::type_keys().into_iter().chain(WO::type_keys()) {
            access = access.merge(Access::read_only(key));
        }
        access
    }

    fn init(_world: &World) -> Self::State {}

    fn param<'w>(_state: &'w mut Self::State, world: UnsafeWorldCell<'w>) -> Result<Self::Item<'w>, EcsError> {
        // SAFETY: a View only ever reads the registry; the system's merged
        // Access reserves at most read access to it for this parameter.
        let registry = unsafe { world.registry() };
        Ok(registry.view::<W, WO>())
    }
}

impl<'a> SystemParam for &'a World {
    type State = ();
    type Item<'w> = &'w World;

    fn access() -> Access {
        Access::read_only(TypeKey::of::<World>())
    }

    fn init(_world: &World) -> Self::State {}

    fn param<'w>(_state: &'w mut Self::State, world: UnsafeWorldCell<'w>) -> Result<Self::Item<'w>, EcsError> {
        Ok(unsafe { world.world_ref() })
    }
}

impl<'a> SystemParam for &'a mut World {
    type State = ();
    type Item<'w> = &'w mut World;

    fn access() -> Access {
        Access::read_write(TypeKey::of::<World>())
    }

    fn init(_world: &World) -> Self::State {}

    fn param<'w>(_state: &'w mut Self::State, world: UnsafeWorldCell<'w>) -> Result<Self::Item<'w>, EcsError> {
        Ok(unsafe { world.world_mut() })
    }
}

impl<'a> SystemParam for &'a Resources {
    type State = ();
    type Item<'w> = &'w Resources;

    fn access() -> Access {
        Access::read_only(TypeKey::of::<Resources>())
    }

    fn init(_world: &World) -> Self::State {}

    fn param<'w>(_state: &'w mut Self::State, world: UnsafeWorldCell<'w>) -> Result<Self::Item<'w>, EcsError> {
        Ok(unsafe { world.resources() })
    }
}

impl<'a> SystemParam for &'a mut Resources {
    type State = ();
    type Item<'w> = &'w mut Resources;

    fn access() -> Access {
        Access::read_write(TypeKey::of::<Resources>())
    }

    fn init(_world: &World) -> Self::State {}

    fn param<'w>(_state: &'w mut Self::State, world: UnsafeWorldCell<'w>) -> Result<Self::Item<'w>, EcsError> {
        Ok(unsafe { world.resources_mut() })
    }
}

impl<'a> SystemParam for &'a Registry {
    type State = ();
    type Item<'w> = &'w Registry;

    fn access() -> Access {
        Access::read_only(TypeKey::of::<Registry>())
    }

    fn init(_world: &World) -> Self::State {}

    fn param<'w>(_state: &'w mut Self::State, world: UnsafeWorldCell<'w>) -> Result<Self::Item<'w>, EcsError> {
        Ok(unsafe { world.registry() })
    }
}

impl<'a> SystemParam for &'a mut Registry {
    type State = ();
    type Item<'w> = &'w mut Registry;

    fn access() -> Access {
        Access::read_write(TypeKey::of::<Registry>())
    }

    fn init(_world: &World) -> Self::State {}

    fn param<'w>(_state: &'w mut Self::State, world: UnsafeWorldCell<'w>) -> Result<Self::Item<'w>, EcsError> {
        Ok(unsafe { world.registry_mut() })
    }
}

macro_rules! impl_system_param_tuple {
    ( $( $t:ident ),+ ) => {
        impl<$( $t: SystemParam ),+> SystemParam for ( $( $t, )+ ) {
            type State = ( $( $t::State, )+ );
            type Item<'w> = ( $( $t::Item<'w>, )+ );

            fn access() -> Access {
                let mut access = Access::empty();
                $( access = access.merge($t::access()); )+
                access
            }

            fn init(world: &World) -> Self::State {
                ( $( $t::init(world), )+ )
            }

            #[allow(non_snake_case)]
            fn param<'w>(state: &'w mut Self::State, world: UnsafeWorldCell<'w>) -> Result<Self::Item<'w>, EcsError> {
                let ( $( $t, )+ ) = state;
                Ok(( $( $t::param($t, world)?, )+ ))
            }
        }
    };
}

impl_system_param_tuple!(A);
impl_system_param_tuple!(A, B);
impl_system_param_tuple!(A, B, C);
impl_system_param_tuple!(A, B, C, D);
impl_system_param_tuple!(A, B, C, D, E);
impl_system_param_tuple!(A, B, C, D, E, F);
impl_system_param_tuple!(A, B, C, D, E, F, G);
impl_system_param_tuple!(A, B, C, D, E, F, G, H);
