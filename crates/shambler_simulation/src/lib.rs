//! Shambler Simulation Core
//!
//! ECS-симуляция на Bevy 0.16 (strategic layer) для зомби AI.
//!
//! HYBRID ARCHITECTURE:
//! - ECS = strategic layer (FSM, cooldowns, death lifecycle)
//! - Engine = tactical layer (NavMesh path following, animation, physics)
//!
//! Граница: компоненты `NavAgent` и `AnimatorFlags`: ECS пишет intent,
//! bridge движка их исполняет.

use bevy::prelude::*;
use std::time::Duration;

// Публичные модули
pub mod ai;
pub mod components;
pub mod config;
pub mod error;
pub mod logger;

// Re-export базовых типов для удобства
pub use ai::{
    AnimationFlag, StateTransition, Zombie, ZombieBrain, ZombieConfig, ZombieDisabled, ZombieKilled,
    ZombiePlugin, ZombieState, ZombieStateChanged,
};
pub use components::*;
pub use error::{ActivationError, ConfigError, Dependency};
pub use logger::{init_logger, log, log_error, log_info, log_warning};

/// Частота simulation tick
pub const FIXED_HZ: f64 = 60.0;

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
            .add_plugins(ZombiePlugin);
    }
}

/// Headless замена движковой навигации (прямая линия к destination)
///
/// Только для headless прогона и тестов; в игре NavAgent исполняет bridge.
pub struct HeadlessNavigationPlugin;

impl Plugin for HeadlessNavigationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            components::headless_navigation_step.after(ai::systems::tick_zombies),
        );
    }
}

/// Длительность одного fixed тика
pub fn fixed_timestep() -> Duration {
    Duration::from_secs_f64(1.0 / FIXED_HZ)
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время продвигается вручную ровно на один fixed тик за `app.update()`
/// (первый update: нулевой delta), поэтому прогоны детерминированы.
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
        .insert_resource(bevy::time::TimeUpdateStrategy::ManualDuration(fixed_timestep()));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
