//! Zombie activation (one-time startup validation).

use bevy::prelude::*;

use crate::ai::brain::ZombieBrain;
use crate::ai::components::{Zombie, ZombieConfig, ZombieDisabled};
use crate::components::{AnimatorFlags, NavAgent, Player, ZombieAnimator};
use crate::error::{ActivationError, Dependency};

/// Система: активация новых зомби
///
/// Срабатывает один раз на `Added<ZombieConfig>`:
/// - NavAgent на самом entity
/// - аниматор: ZombieAnimator override, иначе свой AnimatorFlags
/// - цель: первый entity с `Player`
///
/// Успех → `Zombie`, провал → лог + `ZombieDisabled` (без повторных попыток).
pub fn activate_zombies(
    mut commands: Commands,
    mut spawned: Query<
        (Entity, &ZombieConfig, Option<&mut NavAgent>, Option<&ZombieAnimator>),
        Added<ZombieConfig>,
    >,
    animators: Query<&AnimatorFlags>,
    players: Query<(Entity, &Transform), With<Player>>,
) {
    let target = players.iter().next();
    let target_position = target.map(|(_, transform)| transform.translation);

    for (entity, config, mut navigation, injected_animator) in spawned.iter_mut() {
        let animator = injected_animator
            .map(|animator| animator.0)
            .into_iter()
            .chain(std::iter::once(entity))
            .find(|candidate| animators.contains(*candidate));

        let result = ZombieBrain::activate(
            config.clone(),
            navigation.as_deref_mut(),
            animator.and_then(|candidate| animators.get(candidate).ok()),
            &target_position,
        )
        .and_then(|brain| {
            let (target, _) = target.ok_or(ActivationError::TargetNotFound)?;
            let animator =
                animator.ok_or(ActivationError::MissingDependency(Dependency::AnimationSink))?;
            Ok(Zombie { brain, target, animator })
        });

        match result {
            Ok(zombie) => {
                crate::log_info(&format!(
                    "🧟 Zombie {:?} activated (target {:?}, detect {:.1}m, attack {:.1}m)",
                    entity, zombie.target, config.detect_range, config.attack_range
                ));
                commands.entity(entity).insert(zombie);
            }
            Err(reason) => {
                crate::log_error(&format!(
                    "Zombie {:?}: activation failed ({}), AI disabled",
                    entity, reason
                ));
                commands.entity(entity).insert(ZombieDisabled { reason });
            }
        }
    }
}
