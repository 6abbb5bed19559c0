use std::time::Instant;

use anyhow::{Context, Result};
use glam::Vec2;
use log::{debug, info};
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

use rusted_thrust::engine::game_loop::GameLoop;
use rusted_thrust::engine::input::{
    GoalSeekingInput, InputProvider, KeyboardInput, ScriptedInput,
};
use rusted_thrust::game::collision::Collider;
use rusted_thrust::game::level::Level;
use rusted_thrust::game::player::{PhysicsState, Player, PlayerConfig};
use rusted_thrust::game::render::Renderable;

/// Replace keyboard control with a replay script, e.g. `"U*40 R*30 -*20"`
const SCRIPT_ENV: &str = "THRUST_INPUT_SCRIPT";

/// Where the AI pilot heads when given control
const AI_TARGET: Vec2 = Vec2::new(1000.0, 200.0);

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Rusted Thrust...");

    let config = PlayerConfig::standard();
    config.physics.validate().context("Invalid physics tuning")?;
    config.energy.validate().context("Invalid energy tuning")?;

    let mut level = Level::test_arena();
    let (spawn_x, spawn_y) = level.spawn_point();

    let keyboard = KeyboardInput::new();
    let first_provider: Box<dyn InputProvider> = match std::env::var(SCRIPT_ENV) {
        Ok(script) => {
            let script = ScriptedInput::parse(&script)
                .with_context(|| format!("Invalid {SCRIPT_ENV}"))?;
            info!("Replaying {} scripted input frames", script.len());
            Box::new(script)
        }
        Err(_) => Box::new(keyboard.clone()),
    };

    let mut player = Player::new(
        0,
        "P1",
        config,
        first_provider,
        PhysicsState {
            x: spawn_x,
            y: spawn_y,
            ..PhysicsState::default()
        },
    );
    // Tab swaps the active provider with this one
    let mut parked_provider: Option<Box<dyn InputProvider>> =
        Some(Box::new(GoalSeekingInput::new(AI_TARGET)));

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Rusted Thrust")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut game_loop = GameLoop::new();

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                Event::WindowEvent {
                    event: WindowEvent::Focused(false),
                    ..
                } => {
                    keyboard.release_all();
                }
                Event::WindowEvent {
                    event: WindowEvent::KeyboardInput { event, .. },
                    ..
                } => {
                    if let Some(code) = just_pressed(&event) {
                        match code {
                            KeyCode::Escape => elwt.exit(),
                            KeyCode::KeyP => game_loop.toggle_pause(),
                            KeyCode::Tab => {
                                if let Some(next) = parked_provider.take() {
                                    parked_provider = Some(player.set_input_provider(next));
                                }
                            }
                            _ => {}
                        }
                    }
                    keyboard.process_keyboard_event(&event);
                }
                Event::AboutToWait => {
                    for _ in 0..game_loop.begin_frame(Instant::now()) {
                        for action in player.update(&level) {
                            debug!("{} fired {:?}", player.name, action);
                        }
                        level.collect_pickups(&mut player);

                        if level.is_out_of_bounds(&player.bounds()) {
                            player.respawn(spawn_x, spawn_y);
                            level.reset_pickups();
                        }
                    }

                    let frame = player.render_frame();
                    window.set_title(&format!(
                        "Rusted Thrust | {} | {} #{} at ({:.0}, {:.0}) | energy {:.0}%{}",
                        player.input_provider_name(),
                        frame.animation.name(),
                        frame.frame,
                        frame.x,
                        frame.y,
                        player.energy().fraction() * 100.0,
                        if game_loop.is_paused() { " | paused" } else { "" },
                    ));
                }
                _ => {}
            }
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// Key code of a fresh (non-repeat) key press
fn just_pressed(event: &KeyEvent) -> Option<KeyCode> {
    match (event.physical_key, event.state, event.repeat) {
        (PhysicalKey::Code(code), ElementState::Pressed, false) => Some(code),
        _ => None,
    }
}
