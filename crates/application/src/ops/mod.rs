//! Recursive tree operations built on the [`FileSystem`](crate::ports::FileSystem) port.
//!
//! Each operation is a self-contained computation: no state is shared
//! between calls and nothing is cached. Fan-out over directory entries uses
//! all-or-nothing join semantics: an aggregate resolves only once every
//! branch has completed, and the first observed failure fails the whole
//! step.

mod create;
mod exists;
mod info;
mod list;
mod remove;
mod size;

pub use create::{create_dir, create_file};
pub use exists::exists;
pub use info::info;
pub use list::{list, list_deep};
pub use remove::remove_dir;
pub use size::dir_size;
