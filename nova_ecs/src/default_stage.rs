//! Labels for the five stages [`crate::App::add_default_stages`] installs.
//!
//! Each is a plain string label (see [`crate::Label::new`]) rather than a tag
//! type, so the rendered name in logs and cycle traces is exactly `"First"`,
//! `"PreUpdate"`, and so on, rather than a fully qualified Rust type path.

use crate::Label;

pub fn first() -> Label {
    Label::new("First")
}

pub fn pre_update() -> Label {
    Label::new("PreUpdate")
}

pub fn update() -> Label {
    Label::new("Update")
}

pub fn post_update() -> Label {
    Label::new("PostUpdate")
}

pub fn last() -> Label {
    Label::new("Last")
}
