use std::env;
use std::process;

use app::app_loop::ViewerSession;
use app::seed::{generate_runtime_seed, resolve_level_from_args, resolve_seed_from_args};
use dungeon::GenerationConfig;
use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod frame_input;
mod ui_render;
mod window_config;

use frame_input::capture_frame_input;
use window_config::build_window_conf;

#[macroquad::main(build_window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    let choice = resolve_seed_from_args(&args, generate_runtime_seed());
    let level = resolve_level_from_args(&args);
    let (seed, level) = match (choice, level) {
        (Ok(choice), Ok(level)) => (choice, level),
        (Err(err), _) | (_, Err(err)) => {
            error!("{err}");
            process::exit(2);
        }
    };
    info!(?seed, level, "starting viewer");

    let mut session = match ViewerSession::new(GenerationConfig::default(), seed.value(), level) {
        Ok(session) => session,
        Err(err) => {
            error!(error = %err, "could not generate the first level");
            process::exit(1);
        }
    };

    loop {
        let keys = capture_frame_input();
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        session.tick(&keys);

        clear_background(BLACK);
        ui_render::draw_frame(&session);
        next_frame().await
    }
}
