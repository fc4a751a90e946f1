pub mod camera;
pub mod constants;
pub mod controls;
pub mod hotspot;
pub mod input;
pub mod markup;
pub mod orientation;
pub mod scheduler;
pub mod surface;

pub use camera::*;
pub use constants::*;
pub use controls::*;
pub use hotspot::*;
pub use input::*;
pub use markup::*;
pub use orientation::*;
pub use scheduler::*;
pub use surface::*;
