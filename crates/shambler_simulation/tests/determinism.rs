//! Тесты детерминизма
//!
//! Один и тот же сценарий (толпа зомби + идущий Player + kill) должен давать
//! идентичные snapshots при каждом прогоне.

use bevy::prelude::*;
use shambler_simulation::*;

const ZOMBIE_COUNT: usize = 12;
const TICK_COUNT: usize = 600;
const KILL_TICK: usize = 400; // despawn через 5 сек, позже конца прогона

#[test]
fn test_determinism_same_scenario() {
    let first = run_scenario();
    let second = run_scenario();

    assert_eq!(
        first, second,
        "Один и тот же сценарий дал разные результаты!"
    );
}

#[test]
fn test_determinism_multiple_runs() {
    // Запускаем 3 раза, все должны быть идентичны
    let snapshots: Vec<_> = (0..3).map(|_| run_scenario()).collect();

    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(
            snapshots[0], *snapshot,
            "Прогон {} дал результат отличный от прогона 0",
            i
        );
    }
}

#[test]
fn test_scenario_reaches_every_state() {
    let (_, states) = run_scenario();

    // Kill сработал, кто-то догнал Player
    assert!(states.contains("Dead"), "states: {states}");
    assert!(states.contains("Attacking") || states.contains("Chasing"), "states: {states}");
}

/// Прогоняет сценарий, возвращает snapshot (Transform + NavAgent) и список состояний
fn run_scenario() -> (Vec<u8>, String) {
    let mut app = create_headless_app();
    app.add_plugins((SimulationPlugin, HeadlessNavigationPlugin));

    let player = app
        .world_mut()
        .spawn((Player, Transform::from_xyz(0.0, 0.0, -10.0)))
        .id();

    // Кольцо зомби вокруг начала координат
    let zombies: Vec<Entity> = (0..ZOMBIE_COUNT)
        .map(|i| {
            let angle = i as f32 / ZOMBIE_COUNT as f32 * std::f32::consts::TAU;
            let position = Vec3::new(angle.cos() * 8.0, 0.0, angle.sin() * 8.0);
            app.world_mut()
                .spawn((
                    Transform::from_translation(position),
                    ZombieConfig::default(),
                    NavAgent::placed(),
                    AnimatorFlags::default(),
                ))
                .id()
        })
        .collect();

    for tick in 0..TICK_COUNT {
        if let Some(mut transform) = app.world_mut().get_mut::<Transform>(player) {
            transform.translation.z += 0.02;
        }

        if tick == KILL_TICK {
            app.world_mut().send_event(ZombieKilled { entity: zombies[0] });
        }

        app.update();
    }

    let mut snapshot = world_snapshot::<Transform>(app.world_mut());
    snapshot.extend(world_snapshot::<NavAgent>(app.world_mut()));

    let states = zombies
        .iter()
        .filter_map(|entity| app.world().get::<Zombie>(*entity))
        .map(|zombie| format!("{:?}", zombie.brain.state()))
        .collect::<Vec<_>>()
        .join(",");

    (snapshot, states)
}
