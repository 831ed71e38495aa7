//! Error taxonomy
//!
//! Все ошибки активации фатальны для конкретного агента: логируем и отключаем.
//! Runtime тики новых ошибок не порождают.

use thiserror::Error;

/// Какой collaborator не нашёлся при активации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    NavigationDriver,
    AnimationSink,
}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dependency::NavigationDriver => f.write_str("navigation driver"),
            Dependency::AnimationSink => f.write_str("animation sink"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{field}` must be a positive finite number, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("`attack_cooldown` of {value}s does not fit in a timer")]
    CooldownOverflow { value: f32 },

    /// Attack проверяется после detect, при attack > detect агент никогда не атакует
    #[error("attack_range ({attack}) exceeds detect_range ({detect})")]
    AttackBeyondDetect { attack: f32, detect: f32 },

    #[error("failed to parse zombie config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read zombie config: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ActivationError {
    #[error("missing {0}")]
    MissingDependency(Dependency),

    #[error("navigation driver is not placed on a traversable surface")]
    InvalidPlacement,

    #[error("no target found in the scene")]
    TargetNotFound,

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}
