pub mod cache;
pub mod clock;
pub mod constants;
pub mod error;
pub mod field;
pub mod geometry;
pub mod motion;
pub mod noise;
pub mod params;
pub mod render;
pub mod scene;
pub mod surface;

pub use cache::*;
pub use clock::*;
pub use constants::*;
pub use error::*;
pub use field::*;
pub use geometry::*;
pub use motion::*;
pub use noise::*;
pub use params::*;
pub use render::*;
pub use scene::*;
pub use surface::*;
