//! AI decision-making module
//!
//! Zombie FSM: Idle ↔ Chasing → Attacking (cooldown) → re-evaluate, any → Dead.
//! Brain (`brain`) не знает про ECS; systems адаптируют компоненты к capabilities.

use bevy::prelude::*;

pub mod brain;
pub mod capabilities;
pub mod components;
pub mod events;
pub mod systems;
pub mod tasks;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export основных типов
pub use brain::{StateTransition, ZombieBrain, DEATH_REMOVAL_DELAY_SECS, ROTATION_SMOOTHING};
pub use capabilities::{AnimationFlag, AnimationSink, NavigationDriver, Removal, TargetProvider};
pub use components::{Zombie, ZombieConfig, ZombieDisabled, ZombieState};
pub use events::{ZombieKilled, ZombieStateChanged};

/// Zombie AI Plugin
///
/// Регистрирует AI системы в FixedUpdate для детерминизма.
/// Порядок выполнения:
/// 1. activate_zombies: one-time валидация новых зомби
/// 2. handle_zombie_kills: ZombieKilled → Die()
/// 3. tick_zombies: cooldown задачи + выбор Idle/Chase/Attack
/// 4. despawn_after_timeout: уборка трупов
pub struct ZombiePlugin;

impl Plugin for ZombiePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ZombieKilled>()
            .add_event::<ZombieStateChanged>();

        app.add_systems(
            FixedUpdate,
            (
                systems::activate_zombies,
                systems::handle_zombie_kills,
                systems::tick_zombies,
                systems::despawn_after_timeout,
            )
                .chain(), // Последовательное выполнение для детерминизма
        );
    }
}
