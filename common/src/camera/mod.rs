//! Third-person camera math shared by the server systems: settings clamping, the
//! collision-safe placement resolver, and aim correction.

pub mod aim;
pub mod resolver;
pub mod settings;

pub use aim::{compute_aim_target, corrected_aim_direction};
pub use resolver::{desired_camera_position, resolve_camera};
pub use settings::CameraSettings;
