use crate::{Access, EcsError, Label, SystemParam, UnsafeWorldCell, World};

/// A type-erased, runnable system.
///
/// Wraps the user's callable and its parameters' per-system state behind two
/// function pointers, so that systems of unrelated concrete types can share
/// one `Vec<System>` inside a [`crate::Stage`].
///
/// A system starts uninitialized: [`System::initialize`] must run exactly
/// once, before the first [`System::run`], which is the scheduler's job
/// during [`crate::Scheduler::initialize_systems`].
pub struct System {
    self_label: Label,
    access: Access,
    init: Box<dyn FnMut(&World)>,
    run: Box<dyn FnMut(&mut World) -> Result<(), EcsError>>,
    initialized: bool,
}

impl System {
    /// Returns the label every system carries implicitly, derived from its
    /// callable's own type name.
    pub fn self_label(&self) -> &Label {
        &self.self_label
    }

    /// The merged [`Access`] of this system's parameters.
    pub fn access(&self) -> &Access {
        &self.access
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Runs the per-parameter `init` hooks, capturing their persistent state
    /// for every subsequent [`System::run`] call.
    ///
    /// # Panics
    /// Panics if the system was already initialized; re-initialization is a
    /// programming error, not a recoverable one.
    pub fn initialize(&mut self, world: &World) {
        assert!(!self.initialized, "system already initialized");
        (self.init)(world);
        self.initialized = true;
    }

    /// Invokes the wrapped callable with its bound parameters.
    ///
    /// # Panics
    /// Panics if the system has not been initialized yet.
    pub fn run(&mut self, world: &mut World) -> Result<(), EcsError> {
        assert!(self.initialized, "system run before initialization");
        (self.run)(world)
    }
}

/// Converts a bare function or closure into a [`System`], binding its
/// arguments via their [`SystemParam`] impls.
///
/// Implemented for function items and closures of up to eight
/// [`SystemParam`] arguments via a closed family of `macro_rules!`-generated
/// impls, mirroring the tuple-impl-generation technique this crate's
/// resource/component type lists use.
pub trait IntoSystemDescriptor<Params> {
    fn into_system(self) -> System;
}

impl<Func> IntoSystemDescriptor<()> for Func
where
    Func: FnMut() + 'static,
{
    fn into_system(mut self) -> System {
        let self_label = Label::of_callable(&self);
        let run = move |_world: &mut World| -> Result<(), EcsError> {
            self();
            Ok(())
        };

        System {
            self_label,
            access: Access::empty(),
            init: Box::new(|_world| {}),
            run: Box::new(run),
            initialized: false,
        }
    }
}

macro_rules! impl_into_system_descriptor {
    ( $( $p:ident ),+ ) => {
        impl<Func, $( $p: SystemParam + 'static ),+> IntoSystemDescriptor<($( $p, )+)> for Func
        where
            Func: for<'w> FnMut($( $p::Item<'w> ),+) + 'static,
        {
            #[allow(non_snake_case)]
            fn into_system(mut self) -> System {
                let self_label = Label::of_callable(&self);
                let mut access = Access::empty();
                $( access = access.merge($p::access()); )+

                let state: std::rc::Rc<std::cell::RefCell<Option<( $( $p::State, )+ )>>> =
                    std::rc::Rc::new(std::cell::RefCell::new(None));

                let init_state = std::rc::Rc::clone(&state);
                let init = move |world: &World| {
                    *init_state.borrow_mut() = Some(( $( $p::init(world), )+ ));
                };

                let run_state = state;
                let run = move |world: &mut World| -> Result<(), EcsError> {
                    let mut guard = run_state.borrow_mut();
                    let ( $( $p, )+ ) = guard.as_mut().expect("system state initialized before run");
                    let cell = UnsafeWorldCell::new(world);
                    $( let $p = $p::param($p, cell)?; )+
                    self($( $p ),+);
                    Ok(())
                };

                System {
                    self_label,
                    access,
                    init: Box::new(init),
                    run: Box::new(run),
                    initialized: false,
                }
            }
        }
    };
}

impl_into_system_descriptor!(A);
impl_into_system_descriptor!(A, B);
impl_into_system_descriptor!(A, B, C);
impl_into_system_descriptor!(A, B, C, D);
impl_into_system_descriptor!(A, B, C, D, E);
impl_into_system_descriptor!(A, B, C, D, E, F);
impl_into_system_descriptor!(A, B, C, D, E, F, G);
impl_into_system_descriptor!(A, B, C, D, E, F, G, H);
