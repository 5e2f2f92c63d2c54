use anyhow::{Result, ensure};
use bevy::prelude::*;
use clap::Parser;
use tokio::{
    sync::mpsc::unbounded_channel,
    time::{self, Duration, Instant, MissedTickBehavior},
};
use tracing::{info, warn};

use server::{
    config::{Args, init_tracing},
    constants::SPAWN_POINTS,
    io::console_io_task,
    map::generate_arena,
    resources::*,
    systems::{connect_player, console_command_system, player_end_frame_system},
};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    ensure!(args.tick_rate > 0, "tick rate must be positive");

    // Channel for sending from the console IO task to the server
    let (to_server, from_console) = unbounded_channel();
    tokio::spawn(console_io_task(to_server));

    let collision = generate_arena();
    info!("generated arena with {} brushes", collision.brushes().len());

    let mut app = App::new();
    app.insert_resource(collision)
        .insert_resource(args.camera_cvars())
        .insert_resource(args.entity_budget())
        .insert_resource(PlayerMap::default())
        .insert_resource(FromConsoleChannel::new(from_console))
        // Console commands land before the per-player end of frame
        .add_systems(Update, (console_command_system, player_end_frame_system).chain());

    for i in 0..args.players {
        let world = app.world_mut();
        let id = world.resource::<PlayerMap>().next_id();
        connect_player(world, id, SPAWN_POINTS[i % SPAWN_POINTS.len()]);
    }

    info!(
        "starting ECS server loop at {} Hz, third-person {}",
        args.tick_rate,
        if args.thirdperson { "on" } else { "off" }
    );

    // Run the app in a loop manually at the configured rate
    let tick_duration = Duration::from_nanos(1_000_000_000 / args.tick_rate);
    let mut interval = time::interval(tick_duration);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut frame: u64 = 0;
    loop {
        tokio::select! {
            _ = interval.tick() => {}
            _ = &mut shutdown => {
                info!("shutting down after {} ticks", frame);
                break;
            }
        }

        let update_start = Instant::now();
        app.update();
        let update_elapsed = update_start.elapsed();

        if update_elapsed > tick_duration {
            warn!(
                "tick {} took {:.2}ms (exceeded {:.2}ms budget)",
                frame,
                update_elapsed.as_secs_f64() * 1000.0,
                tick_duration.as_secs_f64() * 1000.0
            );
        }

        frame += 1;
    }

    Ok(())
}
