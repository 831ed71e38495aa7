//! Lifecycle компоненты: отложенный деспавн

use bevy::prelude::*;

/// Компонент-маркер: деспавн entity после указанного времени
///
/// Ставится при смерти зомби (death animation успевает проиграться).
/// Система `despawn_after_timeout` проверяет время и удаляет entity.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct DespawnAfter {
    /// Время деспавна (Time<Fixed>::elapsed, секунды)
    pub despawn_time: f32,
}
