//! AI Events: внешний death trigger и уведомления о смене состояния

use bevy::prelude::*;

use crate::ai::components::ZombieState;

/// Внешний сигнал смерти (combat / scripted kill)
///
/// Обрабатывается `handle_zombie_kills` → `ZombieBrain::die`.
/// Повторные события для того же entity безопасны.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZombieKilled {
    pub entity: Entity,
}

/// FSM переход (для bridge: звуки, VFX, debug overlay)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZombieStateChanged {
    pub entity: Entity,
    pub from: ZombieState,
    pub to: ZombieState,
}
