//! Ray Dodge headless runner
//!
//! Drives one session from a scripted input file, one tick per frame, and
//! prints a JSON summary when the session ends.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use ray_dodge::SessionConfig;
use ray_dodge::renderer::{Vertex, build_scene, tessellate_scene};
use ray_dodge::replay::InputScript;
use ray_dodge::sim::{GameEvent, GameOverCause, GamePhase, GameState, tick};

/// Ray Dodge: dodge the rays, hide behind the rocks
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Session config (JSON). Defaults to the built-in 800x800 arena.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Input script (JSON). Without one the player stands still.
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Stop after this many frames even if the session is still running
    #[arg(long, default_value_t = 10_000)]
    max_frames: u64,
}

#[derive(Serialize)]
struct SessionSummary {
    frames: u64,
    phase: GamePhase,
    cause: Option<GameOverCause>,
    quit: bool,
    player: [f32; 2],
    frozen_rays: Vec<u32>,
    drawables: usize,
    vertices: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SessionConfig::default(),
    };
    let script = match &cli.script {
        Some(path) => InputScript::load(path)
            .with_context(|| format!("loading input script {}", path.display()))?,
        None => InputScript::default(),
    };

    let mut state = GameState::new(&config);
    let mut inputs = script.frames();
    let mut quit = false;

    for _ in 0..cli.max_frames {
        let input = inputs.next().unwrap_or_default();
        if input.quit {
            log::info!("Quit requested on frame {}", state.frame);
            quit = true;
            break;
        }

        for event in tick(&mut state, &input) {
            log_event(state.frame, &event);
        }

        if state.is_over() {
            break;
        }
    }

    let scene = build_scene(&state);
    let vertices: Vec<Vertex> = tessellate_scene(&scene, |id| {
        state.rays.iter().any(|r| r.id == id && r.collided)
    });

    let summary = SessionSummary {
        frames: state.frame,
        phase: state.phase,
        cause: state.cause,
        quit,
        player: state.player.pos.to_array(),
        frozen_rays: state
            .rays
            .iter()
            .filter(|r| r.collided)
            .map(|r| r.id)
            .collect(),
        drawables: scene.len(),
        vertices: vertices.len(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

fn log_event(frame: u64, event: &GameEvent) {
    match event {
        GameEvent::GameOver(cause) => log::info!("[{frame}] game over: {cause:?}"),
        GameEvent::MoveRejected { .. } => log::trace!("[{frame}] {event:?}"),
        _ => log::debug!("[{frame}] {event:?}"),
    }
}
