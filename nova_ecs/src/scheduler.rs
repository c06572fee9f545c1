use log::{debug, trace};

use crate::{graph, EcsError, EcsResult, FirstOrLast, GraphNode, Label, Stage, SystemDescriptor, World};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Building,
    Initialized,
    Running,
    Stopped,
}

/// Holds every registered system, partitioned into a startup bucket, a list
/// of ordered stages, and a teardown bucket, and drives them through the
/// `Building -> Initialized -> Running -> Stopped` lifecycle described in
/// the scheduler's state machine.
///
/// Consumed by [`crate::App`], which owns one alongside the [`World`] it
/// runs against; nothing stops a caller from driving a `Scheduler` directly
/// against a `World` of their own, which is what the scenario tests below
/// do.
pub struct Scheduler {
    startup: Vec<SystemDescriptor>,
    teardown: Vec<SystemDescriptor>,
    stages: Vec<Stage>,
    first: Option<Label>,
    last: Option<Label>,
    state: State,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            startup: Vec::new(),
            teardown: Vec::new(),
            stages: Vec::new(),
            first: None,
            last: None,
            state: State::Building,
        }
    }

    /// Appends `stage`, injecting `after(first)`/`before(last)` into its
    /// ordering if those slots are already set.
    pub fn add_stage(&mut self, mut stage: Stage) -> EcsResult<()> {
        if self.stages.iter().any(|existing| existing.primary_label() == stage.primary_label()) {
            return Err(EcsError::DuplicateStage(stage.primary_label().clone()));
        }
        if let Some(first) = self.first.clone() {
            stage.add_after(first);
        }
        if let Some(last) = self.last.clone() {
            stage.add_before(last);
        }
        debug!("registered stage `{}`", stage.primary_label());
        self.stages.push(stage);
        Ok(())
    }

    /// Sets the scheduler's first stage. Every already-registered stage is
    /// given `after(stage.primary_label())`; if `last` is already set, the
    /// new stage is given `before(last)` in turn.
    pub fn set_first_stage(&mut self, mut stage: Stage) -> EcsResult<()> {
        if self.first.is_some() {
            return Err(EcsError::AlreadySet(FirstOrLast::First));
        }
        if self.stages.iter().any(|existing| existing.primary_label() == stage.primary_label()) {
            return Err(EcsError::DuplicateStage(stage.primary_label().clone()));
        }

        let label = stage.primary_label().clone();
        for existing in &mut self.stages {
            existing.add_after(label.clone());
        }
        if let Some(last) = self.last.clone() {
            stage.add_before(last);
        }

        debug!("set first stage `{}`", label);
        self.first = Some(label);
        self.stages.push(stage);
        Ok(())
    }

    /// Symmetric counterpart to [`Scheduler::set_first_stage`].
    pub fn set_last_stage(&mut self, mut stage: Stage) -> EcsResult<()> {
        if self.last.is_some() {
            return Err(EcsError::AlreadySet(FirstOrLast::Last));
        }
        if self.stages.iter().any(|existing| existing.primary_label() == stage.primary_label()) {
            return Err(EcsError::DuplicateStage(stage.primary_label().clone()));
        }

        let label = stage.primary_label().clone();
        for existing in &mut self.stages {
            existing.add_before(label.clone());
        }
        if let Some(first) = self.first.clone() {
            stage.add_after(first);
        }

        debug!("set last stage `{}`", label);
        self.last = Some(label);
        self.stages.push(stage);
        Ok(())
    }

    pub fn add_system_to_stage(
        &mut self,
        descriptor: SystemDescriptor,
        stage_label: impl Into<Label>,
    ) -> EcsResult<()> {
        let stage_label = stage_label.into();
        let stage = self
            .stages
            .iter_mut()
            .find(|stage| *stage.primary_label() == stage_label)
            .ok_or_else(|| EcsError::UnknownStage(stage_label.clone()))?;

        debug!(
            "registered system `{}` in stage `{}`",
            descriptor.labels()[0].name(),
            stage_label
        );
        stage.add_system(descriptor);
        Ok(())
    }

    pub fn add_startup_system(&mut self, descriptor: SystemDescriptor) {
        debug!("registered startup system `{}`", descriptor.labels()[0].name());
        self.startup.push(descriptor);
    }

    pub fn add_teardown_system(&mut self, descriptor: SystemDescriptor) {
        debug!("registered teardown system `{}`", descriptor.labels()[0].name());
        self.teardown.push(descriptor);
    }

    /// Sorts the startup bucket, the teardown bucket, every stage's systems,
    /// and the stage list itself into a valid topological order, then
    /// initializes every system exactly once.
    ///
    /// # Panics
    /// Panics if called more than once.
    pub fn initialize_systems(&mut self, world: &World) -> EcsResult<()> {
        assert_eq!(self.state, State::Building, "scheduler already initialized");

        let startup = std::mem::take(&mut self.startup);
        self.startup = graph::sort(startup, |descriptor| descriptor.labels()[0].name().to_string())?;

        let teardown = std::mem::take(&mut self.teardown);
        self.teardown = graph::sort(teardown, |descriptor| descriptor.labels()[0].name().to_string())?;

        for stage in &mut self.stages {
            stage.sort_systems()?;
        }

        let stages = std::mem::take(&mut self.stages);
        self.stages = graph::sort(stages, |stage| stage.primary_label().name().to_string())?;

        for descriptor in &mut self.startup {
            descriptor.system.initialize(world);
        }
        for descriptor in &mut self.teardown {
            descriptor.system.initialize(world);
        }
        for stage in &mut self.stages {
            for descriptor in stage.systems_mut() {
                descriptor.system.initialize(world);
            }
        }

        self.state = State::Initialized;
        Ok(())
    }

    /// Runs the startup bucket in order, once.
    ///
    /// # Panics
    /// Panics if called before [`Scheduler::initialize_systems`].
    pub fn startup(&mut self, world: &mut World) -> EcsResult<()> {
        assert_ne!(self.state, State::Building, "startup called before initialize_systems");
        trace!("running startup ({} systems)", self.startup.len());
        for descriptor in &mut self.startup {
            descriptor.system.run(world)?;
        }
        self.state = State::Running;
        Ok(())
    }

    /// Runs every stage in order; within a stage, runs every system in
    /// order. Soft-deleted entities and ephemeral components are cleaned up
    /// once the whole pass completes.
    ///
    /// # Panics
    /// Panics if called before [`Scheduler::initialize_systems`].
    pub fn update(&mut self, world: &mut World) -> EcsResult<()> {
        assert_ne!(self.state, State::Building, "update called before initialize_systems");
        trace!("running update ({} stages)", self.stages.len());
        for stage in &mut self.stages {
            for descriptor in stage.systems_mut() {
                descriptor.system.run(world)?;
            }
        }
        world.registry_mut().cleanup_deleted_entities();
        world.registry_mut().clean_ephemeral_storage();
        self.state = State::Running;
        Ok(())
    }

    /// Runs the teardown bucket in order, once.
    ///
    /// # Panics
    /// Panics if called before [`Scheduler::initialize_systems`].
    pub fn teardown(&mut self, world: &mut World) -> EcsResult<()> {
        assert_ne!(self.state, State::Building, "teardown called before initialize_systems");
        trace!("running teardown ({} systems)", self.teardown.len());
        for descriptor in &mut self.teardown {
            descriptor.system.run(world)?;
        }
        self.state = State::Stopped;
        Ok(())
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn system_count(&self) -> usize {
        self.startup.len()
            + self.teardown.len()
            + self.stages.iter().map(Stage::system_count).sum::<usize>()
    }

    pub fn stage_labels(&self) -> Vec<Label> {
        self.stages.iter().map(|stage| stage.primary_label().clone()).collect()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
