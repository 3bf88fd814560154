//! Core game module containing shared components, resources, messages,
//! constants, and the level layout.

mod components;
mod constants;
mod events;
mod level;
mod resources;

pub use components::*;
pub use constants::*;
pub use events::*;
pub use level::*;
pub use resources::*;
