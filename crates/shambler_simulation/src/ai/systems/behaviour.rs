//! Per-tick zombie evaluation.

use bevy::prelude::*;

use crate::ai::components::Zombie;
use crate::ai::events::ZombieStateChanged;
use crate::components::{AnimatorFlags, NavAgent, Player};

/// Система: zombie FSM tick
///
/// Для каждого активного зомби: cooldown задачи → выбор Idle/Chase/Attack
/// по дистанции до Player. Цель исчезла (despawn) → тик ничего не делает.
pub fn tick_zombies(
    mut zombies: Query<(Entity, &mut Zombie, &mut Transform, &mut NavAgent), Without<Player>>,
    targets: Query<&Transform, (With<Player>, Without<Zombie>)>,
    mut animators: Query<&mut AnimatorFlags>,
    mut state_events: EventWriter<ZombieStateChanged>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta();

    for (entity, mut zombie, mut transform, mut navigation) in zombies.iter_mut() {
        if zombie.brain.is_dead() && zombie.brain.pending_tasks() == 0 {
            continue;
        }

        let Ok(mut animator) = animators.get_mut(zombie.animator) else {
            crate::log_warning(&format!(
                "Zombie {:?}: animator {:?} is gone, tick skipped",
                entity, zombie.animator
            ));
            continue;
        };

        let target_position = targets
            .get(zombie.target)
            .ok()
            .map(|target| target.translation);

        let transition = zombie.brain.tick(
            delta,
            &mut transform,
            &target_position,
            &mut *navigation,
            &mut *animator,
        );

        if let Some(transition) = transition {
            crate::log(&format!(
                "🧟 {:?} {:?} → {:?}",
                entity, transition.from, transition.to
            ));
            state_events.write(ZombieStateChanged {
                entity,
                from: transition.from,
                to: transition.to,
            });
        }
    }
}
