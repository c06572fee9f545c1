use thiserror::Error;

use crate::Label;

/// Errors surfaced by the scheduling core's public API.
///
/// None of these are recovered silently: every fallible entry point returns
/// one of these variants rather than panicking, except where the API's
/// contract is a programming-error precondition (documented on the method
/// itself, e.g. re-initializing an already-initialized system).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EcsError {
    /// [`crate::App::run`] was called without a runner installed.
    #[error("no runner installed; call set_runner before run")]
    NoRunner,

    /// A stage was registered whose primary label collides with one already
    /// present.
    #[error("a stage labeled `{0}` is already registered")]
    DuplicateStage(Label),

    /// `set_first_stage`/`set_last_stage` was called a second time.
    #[error("the {0} stage has already been set")]
    AlreadySet(FirstOrLast),

    /// `add_system_to_stage` named a stage that doesn't exist.
    #[error("no stage labeled `{0}` is registered")]
    UnknownStage(Label),

    /// The dependency graph referenced a label no node carries.
    #[error("no system or stage is labeled `{0}`")]
    UnknownLabel(Label),

    /// Topological sort found a cycle. `cycle` is the path of node indices,
    /// closed back to the first; `message` is the fully rendered,
    /// human-readable trace (see [`crate::GraphCyclesError::render`]).
    #[error("{message}")]
    DependencyCycle { cycle: Vec<usize>, message: String },

    /// A `Resource<T>` parameter was bound but no resource of that type is
    /// present in the world.
    #[error("missing required resource `{0}`")]
    MissingResource(&'static str),
}

/// Which of the two single-shot stage slots [`EcsError::AlreadySet`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstOrLast {
    First,
    Last,
}

impl std::fmt::Display for FirstOrLast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FirstOrLast::First => write!(f, "first"),
            FirstOrLast::Last => write!(f, "last"),
        }
    }
}

pub type EcsResult<T> = Result<T, EcsError>;
