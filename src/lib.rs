pub static VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod board;
pub mod error;
pub mod offsets;
pub mod scan;
pub mod tile;
pub mod zone;
