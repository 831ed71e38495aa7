//! Player marker component
//!
//! Отмечает entity, которое зомби преследуют.

use bevy::prelude::Component;

/// Marker component для player entity (target для ZombieBrain)
///
/// # Архитектурная заметка
/// - Активация берёт первый найденный `Player` как цель
/// - AI systems используют `Without<Player>` для своих Transform queries
///
/// # Single-player
/// Ожидается ровно один entity с этим компонентом.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
