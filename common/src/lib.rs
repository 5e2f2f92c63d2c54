pub mod camera;
pub mod collision;
pub mod components;
pub mod constants;
pub mod geometry;
pub mod markers;
