//! Builtin commands and their dispatch.
//!
//! Every command the shell understands, apart from `exit`, is a [`Tool`]
//! registered in a [`ToolRegistry`] and run against an [`ExecContext`].

pub mod builtin;
mod context;
mod registry;
mod traits;

pub use context::ExecContext;
pub use registry::ToolRegistry;
pub use traits::{CommandError, Tool};
