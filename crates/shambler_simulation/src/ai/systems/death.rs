//! Death handling: ZombieKilled → Die(), delayed despawn.

use bevy::prelude::*;

use crate::ai::brain::DEATH_REMOVAL_DELAY_SECS;
use crate::ai::capabilities::{AnimationFlag, AnimationSink, NavigationDriver, Removal};
use crate::ai::components::{Zombie, ZombieDisabled};
use crate::ai::events::{ZombieKilled, ZombieStateChanged};
use crate::components::{AnimatorFlags, DespawnAfter, NavAgent, ZombieAnimator};

/// Removal через DespawnAfter (despawn делает `despawn_after_timeout`)
struct DespawnScheduler<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    entity: Entity,
    now: f32,
}

impl Removal for DespawnScheduler<'_, '_, '_> {
    fn remove_after(&mut self, delay_secs: f32) {
        self.commands.entity(self.entity).insert(DespawnAfter {
            despawn_time: self.now + delay_secs,
        });
    }
}

/// Система: обработка ZombieKilled
///
/// Die() идемпотентен: повторное событие не переставляет DespawnAfter.
/// Зомби с проваленной активацией тоже умирает: без FSM, но с теми же
/// эффектами на NavAgent, аниматор и удаление.
pub fn handle_zombie_kills(
    mut commands: Commands,
    mut kills: EventReader<ZombieKilled>,
    mut zombies: Query<(&mut Zombie, &mut NavAgent), Without<ZombieDisabled>>,
    mut disabled: Query<
        (Option<&mut NavAgent>, Option<&ZombieAnimator>, Has<DespawnAfter>),
        (With<ZombieDisabled>, Without<Zombie>),
    >,
    mut animators: Query<&mut AnimatorFlags>,
    mut state_events: EventWriter<ZombieStateChanged>,
    time: Res<Time<Fixed>>,
) {
    let now = time.elapsed_secs();

    for kill in kills.read() {
        let mut removal = DespawnScheduler {
            commands: &mut commands,
            entity: kill.entity,
            now,
        };

        if let Ok((navigation, injected_animator, already_removing)) = disabled.get_mut(kill.entity) {
            if already_removing {
                continue;
            }

            if let Some(mut navigation) = navigation {
                navigation.set_stopped(true);
            }

            let animator = injected_animator.map_or(kill.entity, |animator| animator.0);
            if let Ok(mut animator) = animators.get_mut(animator) {
                animator.set_flag(AnimationFlag::Walking, false);
                animator.set_flag(AnimationFlag::Attacking, false);
                animator.set_flag(AnimationFlag::Dead, true);
            }

            removal.remove_after(DEATH_REMOVAL_DELAY_SECS);

            crate::log_info(&format!(
                "💀 Disabled zombie {:?} died, despawn at {:.2}s",
                kill.entity,
                now + DEATH_REMOVAL_DELAY_SECS
            ));
            continue;
        }

        let Ok((mut zombie, mut navigation)) = zombies.get_mut(kill.entity) else {
            crate::log_warning(&format!(
                "ZombieKilled for {:?}, but it is not a zombie",
                kill.entity
            ));
            continue;
        };

        // Аниматор пропал: смерть всё равно применяем, флаги пишем в никуда
        let animator_entity = zombie.animator;
        let mut detached = AnimatorFlags::default();
        let mut animator = animators.get_mut(animator_entity).ok();
        if animator.is_none() {
            crate::log_warning(&format!(
                "Zombie {:?}: animator {:?} is gone, death flags dropped",
                kill.entity, animator_entity
            ));
        }
        let animation = animator.as_deref_mut().unwrap_or(&mut detached);

        let Some(transition) = zombie
            .brain
            .die(&mut *navigation, animation, &mut removal)
        else {
            continue;
        };

        crate::log_info(&format!(
            "💀 Zombie {:?} died ({:?} → Dead), despawn at {:.2}s",
            kill.entity,
            transition.from,
            now + DEATH_REMOVAL_DELAY_SECS
        ));
        state_events.write(ZombieStateChanged {
            entity: kill.entity,
            from: transition.from,
            to: transition.to,
        });
    }
}

/// Система: деспавн entities с истёкшим DespawnAfter timeout
///
/// Проверяет все entities с компонентом DespawnAfter.
/// Удаляет entity если текущее время >= despawn_time.
pub fn despawn_after_timeout(
    mut commands: Commands,
    query: Query<(Entity, &DespawnAfter)>,
    time: Res<Time<Fixed>>,
) {
    let current_time = time.elapsed_secs();

    for (entity, despawn_after) in query.iter() {
        if current_time >= despawn_after.despawn_time {
            crate::log_info(&format!("⚰️ Despawning entity {:?} (timeout)", entity));
            commands.entity(entity).despawn();
        }
    }
}
