pub mod config;
pub mod console;
pub mod constants;
pub mod error;
pub mod io;
pub mod map;
pub mod resources;
pub mod systems;
