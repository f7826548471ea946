pub mod engine;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod host;
pub mod math;
pub mod params;
pub mod paths;
pub mod walls;

pub use engine::{TokenEvent, WallEngine};
pub use error::{Result, WallError};
pub use params::WallParams;
