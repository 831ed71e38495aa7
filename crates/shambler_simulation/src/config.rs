//! Authoring config: ZombieConfig presets из TOML
//!
//! ```toml
//! [walker]
//! detect_range = 15.0
//! attack_range = 2.0
//!
//! [runner]
//! move_speed = 6.0
//! attack_cooldown = 0.8
//! ```
//!
//! Отсутствующие ключи берутся из `ZombieConfig::default()`.

use std::collections::BTreeMap;
use std::path::Path;

use crate::ai::ZombieConfig;
use crate::error::ConfigError;

/// Один ZombieConfig (плоская таблица)
pub fn load_zombie_config(source: &str) -> Result<ZombieConfig, ConfigError> {
    let config: ZombieConfig = toml::from_str(source)?;
    config.validate()?;
    Ok(config)
}

/// Набор именованных presets (таблица таблиц), каждый валидируется
pub fn load_zombie_presets(source: &str) -> Result<BTreeMap<String, ZombieConfig>, ConfigError> {
    let presets: BTreeMap<String, ZombieConfig> = toml::from_str(source)?;

    for config in presets.values() {
        config.validate()?;
    }

    Ok(presets)
}

pub fn load_zombie_presets_file(path: impl AsRef<Path>) -> Result<BTreeMap<String, ZombieConfig>, ConfigError> {
    let source = std::fs::read_to_string(path)?;
    load_zombie_presets(&source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let config = load_zombie_config("attack_cooldown = 0.75").unwrap();

        assert_eq!(config.attack_cooldown, 0.75);
        assert_eq!(config.detect_range, 15.0);
        assert_eq!(config.attack_range, 2.0);
    }

    #[test]
    fn test_empty_source_is_default() {
        assert_eq!(load_zombie_config("").unwrap(), ZombieConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = load_zombie_config("detect_range = 1.0\nattack_range = 4.0");
        assert!(matches!(result, Err(ConfigError::AttackBeyondDetect { .. })));
    }

    #[test]
    fn test_parse_error() {
        let result = load_zombie_config("detect_range = \"far\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_presets() {
        let presets = load_zombie_presets(
            r#"
            [walker]

            [runner]
            move_speed = 6.0
            attack_cooldown = 0.8
            "#,
        )
        .unwrap();

        assert_eq!(presets.len(), 2);
        assert_eq!(presets["walker"], ZombieConfig::default());
        assert_eq!(presets["runner"].move_speed, 6.0);
        assert_eq!(presets["runner"].attack_cooldown, 0.8);
    }

    #[test]
    fn test_one_bad_preset_fails_all() {
        let result = load_zombie_presets(
            r#"
            [walker]

            [broken]
            stopping_distance = -1.0
            "#,
        );

        assert!(matches!(
            result,
            Err(ConfigError::NonPositive { field: "stopping_distance", .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = load_zombie_presets_file("/definitely/not/here/zombies.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
