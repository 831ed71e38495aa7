//! Capabilities, которые brain получает от хоста
//!
//! Brain ничего не ищет сам: навигация, аниматор, цель и удаление
//! передаются при каждом вызове. ECS реализации живут в `components`.

use bevy::prelude::*;

/// Навигационный агент (NavMesh path following делает движок)
pub trait NavigationDriver {
    /// Новая цель пути
    fn set_destination(&mut self, destination: Vec3);

    /// Пауза/продолжение path following (путь сохраняется)
    fn set_stopped(&mut self, stopped: bool);

    /// Обнулить остаточную velocity, чтобы агент не скользил
    fn halt(&mut self);

    /// Сбросить текущий путь
    fn reset_path(&mut self);

    fn is_on_traversable_surface(&self) -> bool;

    /// Passthrough конфигурации при активации
    fn configure(&mut self, speed: f32, stopping_distance: f32);
}

/// Имена флагов, которые читает внешний аниматор
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum AnimationFlag {
    Walking,
    Attacking,
    Dead,
}

impl AnimationFlag {
    pub fn name(&self) -> &'static str {
        match self {
            AnimationFlag::Walking => "isWalking",
            AnimationFlag::Attacking => "isAttacking",
            AnimationFlag::Dead => "isDead",
        }
    }
}

pub trait AnimationSink {
    fn set_flag(&mut self, flag: AnimationFlag, value: bool);
}

/// Read-only позиция отслеживаемой цели
pub trait TargetProvider {
    /// None: цель исчезла (despawn), тик пропускается
    fn target_position(&self) -> Option<Vec3>;
}

impl TargetProvider for Vec3 {
    fn target_position(&self) -> Option<Vec3> {
        Some(*self)
    }
}

impl TargetProvider for Option<Vec3> {
    fn target_position(&self) -> Option<Vec3> {
        *self
    }
}

/// Отложенное удаление агента из симуляции
pub trait Removal {
    fn remove_after(&mut self, delay_secs: f32);
}
