//! # Nova ECS
//!
//! A small, deterministic Entity-Component-System core: entities and
//! components live in a [`Registry`], process-wide singletons live in
//! [`Resources`], and a dependency-ordered [`Scheduler`] runs systems across
//! labeled stages. Everything runs on a single thread, in a fixed,
//! topologically-sorted order — there is no parallel executor here, only
//! the access-declaration machinery a future one could use.
//!
//! ## Quick start
//!
//! ```rust
//! use nova_ecs::{App, DefaultPlugins, ResMut};
//!
//! struct Score(u32);
//!
//! fn bump_score(mut score: ResMut<Score>) {
//!     score.0 += 1;
//! }
//!
//! let mut app = App::new();
//! app.add_plugin(DefaultPlugins)
//!     .insert_resource(Score(0))
//!     .add_system(bump_score);
//! ```

pub mod access;
pub mod app;
pub mod bitset;
pub mod component;
pub mod default_stage;
pub mod descriptor;
pub mod entity;
pub mod erased;
pub mod error;
pub mod graph;
pub mod label;
pub mod ordering;
pub mod plugin;
pub mod registry;
pub mod resources;
pub mod scheduler;
pub mod stage;
pub mod system;
pub mod system_param;
pub mod time;
pub mod type_key;
pub mod unsafe_world_cell;
pub mod world;

pub use access::Access;
pub use app::App;
pub use bitset::Bitset;
pub use component::{AnyStorage, Component, ComponentError, ComponentStorage, HashMapComponentStorage};
pub use descriptor::SystemDescriptor;
pub use entity::Entity;
pub use erased::ErasedBox;
pub use error::{EcsError, EcsResult, FirstOrLast};
pub use graph::{GraphCyclesError, GraphNode, UnknownLabelError};
pub use label::{Label, LabelId};
pub use ordering::Ordering;
pub use plugin::{AppExit, DefaultPlugins, Plugin};
pub use registry::{ComponentTypeList, Registry, View, With, Without};
pub use resources::Resources;
pub use scheduler::Scheduler;
pub use stage::Stage;
pub use system::{IntoSystemDescriptor, System};
pub use system_param::{FromWorld, Local, Res, ResMut, SystemParam};
pub use time::Time;
pub use type_key::TypeKey;
pub use unsafe_world_cell::UnsafeWorldCell;
pub use world::World;

pub mod default_stages {
    pub use crate::default_stage::*;
}
