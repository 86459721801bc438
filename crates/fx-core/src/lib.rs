pub mod angle;
pub mod config;
pub mod constants;
pub mod cycle;
pub mod engine;
pub mod geometry;
pub mod host;
pub mod shared;
pub mod virtual_host;

pub use angle::*;
pub use config::*;
pub use constants::*;
pub use cycle::*;
pub use engine::*;
pub use geometry::*;
pub use host::*;
pub use shared::*;
