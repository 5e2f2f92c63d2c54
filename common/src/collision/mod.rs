//! World collision: content/surface flags, the line trace contract, and a brush world
//! with a spatial index of linked entities.

pub mod flags;
pub mod trace;
pub mod world;

pub use flags::{ContentFlags, SurfaceFlags};
pub use trace::{Trace, TraceResult};
pub use world::{Brush, Collision, CollisionWorld, LinkedEntity, sweep_point_vs_box};
