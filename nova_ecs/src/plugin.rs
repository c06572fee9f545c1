use log::debug;

use crate::{default_stage, time, App, EcsResult, Time};

/// Anything that configures an [`App`] at registration time.
///
/// A bare `Fn(&mut App)` closure or function item already satisfies this via
/// the blanket impl below, so most call sites never need to name the trait;
/// [`DefaultPlugins`] is the one case in this crate that needs its own type
/// because it has to be referred to by name at the call site
/// (`app.add_plugin(DefaultPlugins)`).
pub trait Plugin {
    fn build(&self, app: &mut App);
}

impl<F: Fn(&mut App)> Plugin for F {
    fn build(&self, app: &mut App) {
        self(app)
    }
}

/// Read each update iteration by the default runner: any system may flip
/// `should_exit` to request the application loop stop at the next update
/// boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppExit {
    pub should_exit: bool,
}

impl AppExit {
    pub fn exit() -> Self {
        Self { should_exit: true }
    }
}

/// Installs the five default stages, a [`Time`] clock advanced on `First`,
/// an [`AppExit`] resource, and the default runner.
///
/// This is the one plugin this crate ships; an application with no
/// rendering or windowing layer of its own typically needs nothing beyond
/// it to have a runnable `App`.
pub struct DefaultPlugins;

impl Plugin for DefaultPlugins {
    fn build(&self, app: &mut App) {
        app.add_default_stages();
        app.init_resource::<Time>();
        app.insert_resource(AppExit::default());
        app.add_system_to_stage(time::time_system, default_stage::first())
            .expect("First stage is always present immediately after add_default_stages");
        app.set_runner(default_runner);
    }
}

fn default_runner(app: &mut App) -> EcsResult<()> {
    app.initialize()?;
    app.startup()?;

    loop {
        let should_exit = app
            .world()
            .resources()
            .get::<AppExit>()
            .is_some_and(|exit| exit.should_exit);
        if should_exit {
            break;
        }
        app.update()?;
    }

    app.teardown()
}
