use log::debug;

use crate::{
    default_stage, EcsError, EcsResult, FromWorld, IntoSystemDescriptor, Label, Plugin, Registry,
    Resources, Scheduler, Stage, SystemDescriptor, World,
};

type Runner = Box<dyn FnMut(&mut App) -> EcsResult<()>>;

/// Façade composing a [`Scheduler`] and a [`World`], mirroring the
/// builder-heavy construction style of this workspace's other top-level
/// types (`SequentialSystemScheduler`, `Registry`): every configuration call
/// returns `&mut Self` so a caller can chain `app.add_plugin(..).add_system(..)`.
pub struct App {
    world: World,
    scheduler: Scheduler,
    runner: Option<Runner>,
}

impl App {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            scheduler: Scheduler::new(),
            runner: None,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn resources(&self) -> &Resources {
        self.world.resources()
    }

    pub fn resources_mut(&mut self) -> &mut Resources {
        self.world.resources_mut()
    }

    pub fn registry(&self) -> &Registry {
        self.world.registry()
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        self.world.registry_mut()
    }

    /// Inserts `value` as a resource, replacing any prior value of type `T`.
    pub fn insert_resource<T: 'static>(&mut self, value: T) -> &mut Self {
        self.world.resources_mut().set(value);
        self
    }

    /// Inserts a resource built via its [`FromWorld`] capability rather than
    /// a value supplied by the caller.
    pub fn init_resource<T: FromWorld + 'static>(&mut self) -> &mut Self {
        let value = T::from_world(&self.world);
        self.world.resources_mut().set(value);
        self
    }

    pub fn add_stage(&mut self, stage: Stage) -> EcsResult<&mut Self> {
        self.scheduler.add_stage(stage)?;
        Ok(self)
    }

    pub fn set_first_stage(&mut self, stage: Stage) -> EcsResult<&mut Self> {
        self.scheduler.set_first_stage(stage)?;
        Ok(self)
    }

    pub fn set_last_stage(&mut self, stage: Stage) -> EcsResult<&mut Self> {
        self.scheduler.set_last_stage(stage)?;
        Ok(self)
    }

    /// Installs `First, PreUpdate, Update, PostUpdate, Last`, with `First`
    /// and `Last` marked as the scheduler's first/last stages.
    pub fn add_default_stages(&mut self) -> &mut Self {
        self.set_first_stage(Stage::new(default_stage::first()))
            .expect("First stage is set exactly once per App");
        self.add_stage(Stage::new(default_stage::pre_update()))
            .expect("PreUpdate stage is registered exactly once per App");
        self.add_stage(Stage::new(default_stage::update()))
            .expect("Update stage is registered exactly once per App");
        self.add_stage(Stage::new(default_stage::post_update()))
            .expect("PostUpdate stage is registered exactly once per App");
        self.set_last_stage(Stage::new(default_stage::last()))
            .expect("Last stage is set exactly once per App");
        self
    }

    pub fn add_system_to_stage<P>(
        &mut self,
        system: impl IntoSystemDescriptor<P> + 'static,
        stage_label: impl Into<Label>,
    ) -> EcsResult<&mut Self> {
        let descriptor = SystemDescriptor::new(system.into_system());
        self.scheduler.add_system_to_stage(descriptor, stage_label)?;
        Ok(self)
    }

    /// Convenience for `add_system_to_stage(system, default_stage::update())`.
    ///
    /// # Panics
    /// Panics if the `Update` stage hasn't been registered yet — call
    /// [`App::add_default_stages`] or `add_plugin(DefaultPlugins)` first.
    pub fn add_system<P>(&mut self, system: impl IntoSystemDescriptor<P> + 'static) -> &mut Self {
        self.add_system_to_stage(system, default_stage::update())
            .expect("Update stage must be registered before add_system")
    }

    pub fn add_startup_system<P>(&mut self, system: impl IntoSystemDescriptor<P> + 'static) -> &mut Self {
        let descriptor = SystemDescriptor::new(system.into_system());
        self.scheduler.add_startup_system(descriptor);
        self
    }

    pub fn add_teardown_system<P>(&mut self, system: impl IntoSystemDescriptor<P> + 'static) -> &mut Self {
        let descriptor = SystemDescriptor::new(system.into_system());
        self.scheduler.add_teardown_system(descriptor);
        self
    }

    pub fn add_plugin<P: Plugin + 'static>(&mut self, plugin: P) -> &mut Self {
        debug!("registering plugin `{}`", std::any::type_name::<P>());
        plugin.build(self);
        self
    }

    pub fn set_runner<F>(&mut self, runner: F) -> &mut Self
    where
        F: FnMut(&mut App) -> EcsResult<()> + 'static,
    {
        self.runner = Some(Box::new(runner));
        self
    }

    pub fn initialize(&mut self) -> EcsResult<()> {
        self.scheduler.initialize_systems(&self.world)
    }

    pub fn startup(&mut self) -> EcsResult<()> {
        self.scheduler.startup(&mut self.world)
    }

    pub fn update(&mut self) -> EcsResult<()> {
        self.scheduler.update(&mut self.world)
    }

    pub fn teardown(&mut self) -> EcsResult<()> {
        self.scheduler.teardown(&mut self.world)
    }

    /// Invokes the installed runner, which is expected to drive
    /// `initialize -> startup -> update* -> teardown` itself.
    pub fn run(&mut self) -> EcsResult<()> {
        let mut runner = self.runner.take().ok_or(EcsError::NoRunner)?;
        let result = runner(self);
        self.runner = Some(runner);
        result
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
