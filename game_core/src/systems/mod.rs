pub mod bounds;
pub mod camera;
pub mod collision;
pub mod input;
pub mod movement;

pub use bounds::*;
pub use camera::*;
pub use collision::*;
pub use input::*;
pub use movement::*;
