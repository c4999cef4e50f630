pub use glam;
pub use hashbrown;
pub use log;

pub mod coord;
pub mod geometry;
pub mod id;
pub mod math;
