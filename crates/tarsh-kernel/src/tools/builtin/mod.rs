//! Built-in tools for tarsh.

mod cal;
mod cd;
mod ls;
mod mv;

pub use cal::Cal;
pub use cd::Cd;
pub use ls::Ls;
pub use mv::Mv;

use super::ToolRegistry;

/// Register all built-in tools with the registry.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(Ls);
    registry.register(Cd);
    registry.register(Mv);
    registry.register(Cal);
}
