use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    constants::{MAX_ENTITIES, SERVER_LOOP_FREQUENCY},
    resources::{CameraCvars, EntityBudget},
};

const DEFAULT_LOG_FILTER: &str = "info";

// ============================================================================
// CLI Argument Parsing
// ============================================================================

#[derive(Parser, Debug)]
#[command(author, version, about = "Third-person camera server", long_about = None)]
pub struct Args {
    // Start with the third-person view enabled
    #[arg(long, default_value_t = false)]
    pub thirdperson: bool,

    // Camera distance behind the eye (tp_distance)
    #[arg(long, allow_negative_numbers = true)]
    pub distance: Option<f32>,

    // Camera height above the eye (tp_height)
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<f32>,

    // Camera shift to the right of the view (tp_side)
    #[arg(long, allow_negative_numbers = true)]
    pub side: Option<f32>,

    // Per-tick smoothing factor in [0, 1] (tp_smooth)
    #[arg(long)]
    pub smooth: Option<f32>,

    // Simulation ticks per second
    #[arg(long, default_value_t = SERVER_LOOP_FREQUENCY)]
    pub tick_rate: u64,

    // Maximum live world entities
    #[arg(long, default_value_t = MAX_ENTITIES)]
    pub max_entities: usize,

    // Players connected at startup
    #[arg(long, default_value_t = 1)]
    pub players: usize,
}

impl Args {
    #[must_use]
    pub fn camera_cvars(&self) -> CameraCvars {
        CameraCvars {
            thirdperson: self.thirdperson,
            distance: self.distance,
            height: self.height,
            side: self.side,
            smooth: self.smooth,
        }
    }

    #[must_use]
    pub const fn entity_budget(&self) -> EntityBudget {
        EntityBudget {
            max_entities: self.max_entities,
        }
    }
}

// ============================================================================
// Logging
// ============================================================================

// Install the global subscriber; RUST_LOG overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::try_parse_from(["server"]).expect("defaults parse");
        assert!(!args.thirdperson);
        assert_eq!(args.tick_rate, SERVER_LOOP_FREQUENCY);
        assert_eq!(args.entity_budget(), EntityBudget::default());
        assert_eq!(args.camera_cvars(), CameraCvars::default());
    }

    #[test]
    fn test_camera_args_become_cvars() {
        let args = Args::try_parse_from([
            "server",
            "--thirdperson",
            "--distance",
            "96",
            "--side",
            "-20",
            "--smooth",
            "1",
        ])
        .expect("valid args");
        let cvars = args.camera_cvars();
        assert!(cvars.thirdperson);
        assert_eq!(cvars.distance, Some(96.0));
        assert_eq!(cvars.side, Some(-20.0));
        assert_eq!(cvars.height, None);
        assert_eq!(cvars.settings().smoothing, 1.0);
    }
}
