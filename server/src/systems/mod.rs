pub mod camera;
pub mod console;
pub mod frame;
pub mod players;
pub mod proxy;

pub use camera::{CameraTick, activate_if_eligible, correct_aim_direction, is_eligible, teardown, toggle_command};
pub use console::{console_command_system, execute_command};
pub use frame::player_end_frame_system;
pub use players::{connect_player, disconnect_player, reset_level};
pub use proxy::{destroy_proxy, ensure_proxy, hide_controller, linked_proxy, register_entity, show_controller, sync_proxy};
