//! Navigation компоненты: NavAgent (intent для движкового NavMesh агента)

use bevy::prelude::*;

use crate::ai::capabilities::NavigationDriver;

/// Состояние навигационного агента
///
/// Архитектура:
/// - ECS AI пишет destination / is_stopped / velocity (high-level intent)
/// - Tactical layer (engine bridge) читает и двигает настоящий NavMesh агент
/// - Bridge пишет обратно `on_navmesh` после placement
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct NavAgent {
    /// Текущая цель пути (None = путь сброшен)
    pub destination: Option<Vec3>,
    /// Path following на паузе (путь сохраняется)
    pub is_stopped: bool,
    /// Текущая скорость (м/с), обнуляется при halt
    pub velocity: Vec3,
    /// Агент стоит на проходимой поверхности (NavMesh)
    pub on_navmesh: bool,
    pub speed: f32,
    pub stopping_distance: f32,
}

impl Default for NavAgent {
    fn default() -> Self {
        Self {
            destination: None,
            is_stopped: false,
            velocity: Vec3::ZERO,
            // Пока bridge не подтвердил placement: считаем что не на NavMesh
            on_navmesh: false,
            speed: 2.0,
            stopping_distance: 0.0,
        }
    }
}

impl NavAgent {
    /// Агент уже размещён на NavMesh (headless spawn, тесты)
    pub fn placed() -> Self {
        Self {
            on_navmesh: true,
            ..Default::default()
        }
    }
}

impl NavigationDriver for NavAgent {
    fn set_destination(&mut self, destination: Vec3) {
        self.destination = Some(destination);
    }

    fn set_stopped(&mut self, stopped: bool) {
        self.is_stopped = stopped;
    }

    fn halt(&mut self) {
        self.velocity = Vec3::ZERO;
    }

    fn reset_path(&mut self) {
        self.destination = None;
    }

    fn is_on_traversable_surface(&self) -> bool {
        self.on_navmesh
    }

    fn configure(&mut self, speed: f32, stopping_distance: f32) {
        self.speed = speed;
        self.stopping_distance = stopping_distance;
    }
}

/// Система: headless замена NavMesh агенту
///
/// Идёт по прямой к destination (без pathfinding) и останавливается на
/// stopping_distance. В игре этим занимается движок; здесь: только чтобы
/// headless симуляция и интеграционные тесты двигались.
pub fn headless_navigation_step(
    mut agents: Query<(&mut Transform, &mut NavAgent)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mut transform, mut agent) in agents.iter_mut() {
        if agent.is_stopped || !agent.on_navmesh {
            continue;
        }

        let Some(destination) = agent.destination else {
            if agent.velocity != Vec3::ZERO {
                agent.velocity = Vec3::ZERO;
            }
            continue;
        };

        let mut to_destination = destination - transform.translation;
        to_destination.y = 0.0;
        let distance = to_destination.length();

        if distance <= agent.stopping_distance {
            if agent.velocity != Vec3::ZERO {
                agent.velocity = Vec3::ZERO;
            }
            continue;
        }

        let direction = to_destination / distance;
        let step = (agent.speed * delta).min(distance - agent.stopping_distance);

        agent.velocity = direction * agent.speed;
        transform.translation += direction * step;
    }
}
