//! Zombie AI components (config, state, activated brain, disabled marker).

use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ai::brain::ZombieBrain;
use crate::error::{ActivationError, ConfigError};

/// Zombie FSM состояния
///
/// Ровно одно состояние за раз. Dead: терминальное.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect)]
pub enum ZombieState {
    /// Цель вне detect_range (или ещё не видели)
    #[default]
    Idle,
    /// Цель в detect_range, идём к ней
    Chasing,
    /// Цель в attack_range, стоим и бьём
    Attacking,
    /// Die() вызван, AI отключен навсегда
    Dead,
}

impl ZombieState {
    pub fn is_dead(&self) -> bool {
        matches!(self, ZombieState::Dead)
    }
}

/// Параметры зомби (author-time, не меняются после активации)
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct ZombieConfig {
    /// Радиус обнаружения цели (метры)
    pub detect_range: f32,
    /// Радиус атаки (метры), должен быть <= detect_range
    pub attack_range: f32,
    /// Скорость NavigationAgent (м/с)
    pub move_speed: f32,
    /// Пауза между атаками (секунды)
    pub attack_cooldown: f32,
    /// NavigationAgent stopping distance (метры)
    pub stopping_distance: f32,
}

impl Default for ZombieConfig {
    fn default() -> Self {
        Self {
            detect_range: 15.0,
            attack_range: 2.0,
            move_speed: 3.5,
            attack_cooldown: 1.5,
            stopping_distance: 1.5,
        }
    }
}

impl ZombieConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("detect_range", self.detect_range),
            ("attack_range", self.attack_range),
            ("move_speed", self.move_speed),
            ("attack_cooldown", self.attack_cooldown),
            ("stopping_distance", self.stopping_distance),
        ];

        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if Duration::try_from_secs_f32(self.attack_cooldown).is_err() {
            return Err(ConfigError::CooldownOverflow {
                value: self.attack_cooldown,
            });
        }

        if self.attack_range > self.detect_range {
            return Err(ConfigError::AttackBeyondDetect {
                attack: self.attack_range,
                detect: self.detect_range,
            });
        }

        Ok(())
    }
}

/// Активированный зомби: brain + разрешённые при старте ссылки
///
/// Вставляется `activate_zombies` только если все зависимости найдены.
#[derive(Component, Debug)]
pub struct Zombie {
    pub brain: ZombieBrain,
    /// Кого преследуем (Player entity, не владеем)
    pub target: Entity,
    /// Чей AnimatorFlags пишем (свой или ZombieAnimator override)
    pub animator: Entity,
}

/// Marker: активация провалилась, AI для этого entity отключен навсегда
#[derive(Component, Debug)]
pub struct ZombieDisabled {
    pub reason: ActivationError,
}
