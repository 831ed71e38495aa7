//! Headless симуляция Shambler
//!
//! Player идёт сквозь толпу зомби, одного убиваем по таймеру.
//! Опционально: путь к TOML с presets (`[walker]`, `[runner]`, ...).

use bevy::prelude::*;
use shambler_simulation::config::load_zombie_presets_file;
use shambler_simulation::{
    create_headless_app, log_error, log_info, AnimatorFlags, HeadlessNavigationPlugin, NavAgent, Player,
    SimulationPlugin, Zombie, ZombieConfig, ZombieKilled,
};

const TICKS: u32 = 900; // 15 сек @ 60Hz
const KILL_TICK: u32 = 420;
const PLAYER_SPEED: f32 = 1.5;

fn main() {
    let mut app = create_headless_app();
    app.add_plugins((SimulationPlugin, HeadlessNavigationPlugin));

    let configs = match std::env::args().nth(1) {
        Some(path) => match load_zombie_presets_file(&path) {
            Ok(presets) => presets.into_values().collect(),
            Err(err) => {
                log_error(&format!("Config {}: {}", path, err));
                std::process::exit(1);
            }
        },
        None => vec![ZombieConfig::default()],
    };

    log_info(&format!("Starting Shambler headless simulation ({} presets)", configs.len()));

    let player = app
        .world_mut()
        .spawn((Player, Transform::from_xyz(0.0, 0.0, -20.0)))
        .id();

    let spawn_points = [
        Vec3::new(-4.0, 0.0, 0.0),
        Vec3::new(4.0, 0.0, 3.0),
        Vec3::new(0.0, 0.0, 12.0),
    ];

    let zombies: Vec<Entity> = spawn_points
        .iter()
        .zip(configs.iter().cycle())
        .map(|(position, config)| {
            app.world_mut()
                .spawn((
                    Transform::from_translation(*position),
                    config.clone(),
                    NavAgent::placed(),
                    AnimatorFlags::default(),
                ))
                .id()
        })
        .collect();

    for tick in 0..TICKS {
        // Player шагает по +Z сквозь толпу
        if let Some(mut transform) = app.world_mut().get_mut::<Transform>(player) {
            transform.translation.z += PLAYER_SPEED / 60.0;
        }

        if tick == KILL_TICK {
            app.world_mut().send_event(ZombieKilled { entity: zombies[0] });
        }

        app.update();

        if tick % 60 == 0 {
            for &entity in &zombies {
                if let Some(zombie) = app.world().get::<Zombie>(entity) {
                    log_info(&format!("Tick {}: {:?} {:?}", tick, entity, zombie.brain.state()));
                }
            }
        }
    }

    let alive = zombies
        .iter()
        .filter(|entity| app.world().entities().contains(**entity))
        .count();
    log_info(&format!("Simulation complete! {} of {} zombies remain", alive, zombies.len()));
}
