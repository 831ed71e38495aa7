//! Zombie brain, host-agnostic FSM
//!
//! Idle ↔ Chasing → Attacking → (cooldown) → re-evaluate; any → Dead.
//!
//! Brain не держит ссылок на движок: NavigationDriver, AnimationSink и Removal
//! передаются в каждый вызов. Единственное отложенное действие (сброс атаки)
//! живёт в собственной очереди `DeferredTasks` и продвигается тем же тиком.

use std::time::Duration;

use bevy::prelude::*;

use crate::ai::capabilities::{AnimationFlag, AnimationSink, NavigationDriver, Removal, TargetProvider};
use crate::ai::components::{ZombieConfig, ZombieState};
use crate::ai::tasks::DeferredTasks;
use crate::error::{ActivationError, Dependency};

/// Скорость доворота к цели (Slerp factor в секунду)
pub const ROTATION_SMOOTHING: f32 = 5.0;

/// Сколько труп лежит перед удалением (death animation)
pub const DEATH_REMOVAL_DELAY_SECS: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttackGate {
    Ready,
    CoolingDown { generation: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ZombieTask {
    ResetAttack { generation: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTransition {
    pub from: ZombieState,
    pub to: ZombieState,
}

#[derive(Debug)]
pub struct ZombieBrain {
    config: ZombieConfig,
    state: ZombieState,
    attack_gate: AttackGate,
    /// Растёт с каждой атакой; reset с чужим generation игнорируется
    attack_generation: u64,
    tasks: DeferredTasks<ZombieTask>,
}

impl ZombieBrain {
    /// One-time startup validation
    ///
    /// Проверяет config, наличие навигации и аниматора, NavMesh placement и цель.
    /// При успехе передаёт speed/stopping_distance в навигацию.
    pub fn activate<N, A, T>(
        config: ZombieConfig,
        navigation: Option<&mut N>,
        animation: Option<&A>,
        target: &T,
    ) -> Result<Self, ActivationError>
    where
        N: NavigationDriver,
        A: AnimationSink,
        T: TargetProvider + ?Sized,
    {
        config.validate()?;

        let navigation =
            navigation.ok_or(ActivationError::MissingDependency(Dependency::NavigationDriver))?;
        if animation.is_none() {
            return Err(ActivationError::MissingDependency(Dependency::AnimationSink));
        }

        if !navigation.is_on_traversable_surface() {
            return Err(ActivationError::InvalidPlacement);
        }

        if target.target_position().is_none() {
            return Err(ActivationError::TargetNotFound);
        }

        navigation.configure(config.move_speed, config.stopping_distance);

        Ok(Self {
            config,
            state: ZombieState::Idle,
            attack_gate: AttackGate::Ready,
            attack_generation: 0,
            tasks: DeferredTasks::new(),
        })
    }

    pub fn config(&self) -> &ZombieConfig {
        &self.config
    }

    pub fn state(&self) -> ZombieState {
        self.state
    }

    pub fn is_dead(&self) -> bool {
        self.state.is_dead()
    }

    /// Можно ли начать новую атаку (cooldown истёк)
    pub fn is_attack_ready(&self) -> bool {
        self.attack_gate == AttackGate::Ready
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Per-tick evaluation
    ///
    /// Сначала срабатывают созревшие задачи (cooldown), потом выбирается
    /// состояние по дистанции. Возвращает переход, если состояние сменилось.
    pub fn tick<N, A, T>(
        &mut self,
        delta: Duration,
        transform: &mut Transform,
        target: &T,
        navigation: &mut N,
        animation: &mut A,
    ) -> Option<StateTransition>
    where
        N: NavigationDriver,
        A: AnimationSink,
        T: TargetProvider + ?Sized,
    {
        for task in self.tasks.advance(delta) {
            self.run_task(task, navigation, animation);
        }

        if self.is_dead() || !navigation.is_on_traversable_surface() {
            return None;
        }

        let target_position = target.target_position()?;

        let from = self.state;
        let distance = transform.translation.distance(target_position);

        if distance > self.config.detect_range {
            self.enter_idle(navigation, animation);
        } else if distance > self.config.attack_range {
            self.chase(delta, transform, target_position, navigation, animation);
        } else {
            self.attack(navigation, animation);
        }

        (from != self.state).then_some(StateTransition {
            from,
            to: self.state,
        })
    }

    /// External death trigger (idempotent)
    pub fn die<N, A, R>(
        &mut self,
        navigation: &mut N,
        animation: &mut A,
        removal: &mut R,
    ) -> Option<StateTransition>
    where
        N: NavigationDriver,
        A: AnimationSink,
        R: Removal + ?Sized,
    {
        if self.is_dead() {
            return None;
        }

        let from = self.state;
        self.state = ZombieState::Dead;

        navigation.set_stopped(true);

        animation.set_flag(AnimationFlag::Walking, false);
        animation.set_flag(AnimationFlag::Attacking, false);
        animation.set_flag(AnimationFlag::Dead, true);

        removal.remove_after(DEATH_REMOVAL_DELAY_SECS);

        Some(StateTransition {
            from,
            to: ZombieState::Dead,
        })
    }

    fn enter_idle<N: NavigationDriver, A: AnimationSink>(&mut self, navigation: &mut N, animation: &mut A) {
        if self.state == ZombieState::Idle {
            return;
        }

        // Cooldown не трогаем: он тикает независимо от состояния
        navigation.reset_path();
        animation.set_flag(AnimationFlag::Walking, false);
        self.state = ZombieState::Idle;
    }

    fn chase<N: NavigationDriver, A: AnimationSink>(
        &mut self,
        delta: Duration,
        transform: &mut Transform,
        target_position: Vec3,
        navigation: &mut N,
        animation: &mut A,
    ) {
        if !self.is_attack_ready() {
            return;
        }

        navigation.set_stopped(false);
        navigation.set_destination(target_position);

        animation.set_flag(AnimationFlag::Walking, true);
        animation.set_flag(AnimationFlag::Attacking, false);

        turn_towards(transform, target_position, delta.as_secs_f32());

        self.state = ZombieState::Chasing;
    }

    fn attack<N: NavigationDriver, A: AnimationSink>(&mut self, navigation: &mut N, animation: &mut A) {
        if !self.is_attack_ready() {
            return;
        }

        self.attack_generation += 1;
        let generation = self.attack_generation;
        self.attack_gate = AttackGate::CoolingDown { generation };

        navigation.set_stopped(true);
        navigation.halt();

        animation.set_flag(AnimationFlag::Walking, false);
        animation.set_flag(AnimationFlag::Attacking, true);

        // validate() гарантирует что cooldown помещается в Duration
        let cooldown =
            Duration::try_from_secs_f32(self.config.attack_cooldown).unwrap_or(Duration::MAX);
        self.tasks
            .schedule(cooldown, ZombieTask::ResetAttack { generation });

        self.state = ZombieState::Attacking;
    }

    fn run_task<N: NavigationDriver, A: AnimationSink>(
        &mut self,
        task: ZombieTask,
        navigation: &mut N,
        animation: &mut A,
    ) {
        match task {
            ZombieTask::ResetAttack { generation } => {
                if self.attack_gate != (AttackGate::CoolingDown { generation }) {
                    // Stale reset от старой атаки
                    return;
                }

                self.attack_gate = AttackGate::Ready;
                animation.set_flag(AnimationFlag::Attacking, false);

                // Путь не пересчитываем: следующий тик сам выдаст destination
                if !self.is_dead() {
                    navigation.set_stopped(false);
                }
            }
        }
    }
}

/// Плавный доворот heading к цели только вокруг Y
fn turn_towards(transform: &mut Transform, target: Vec3, delta_secs: f32) {
    let mut direction = (target - transform.translation).normalize_or_zero();
    direction.y = 0.0;

    // Цель строго сверху/снизу: направления нет, heading не трогаем
    if direction.length_squared() <= f32::EPSILON {
        return;
    }

    let look_rotation = Transform::IDENTITY.looking_to(direction, Vec3::Y).rotation;
    let t = (delta_secs * ROTATION_SMOOTHING).clamp(0.0, 1.0);
    transform.rotation = transform.rotation.slerp(look_rotation, t);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::test_support::{RecordingAnimator, RecordingNavigation};

    fn brain() -> ZombieBrain {
        let mut navigation = RecordingNavigation::default();
        ZombieBrain::activate(
            ZombieConfig::default(),
            Some(&mut navigation),
            Some(&RecordingAnimator::default()),
            &Vec3::ZERO,
        )
        .unwrap()
    }

    #[test]
    fn test_stale_reset_is_ignored() {
        let mut brain = brain();
        let mut navigation = RecordingNavigation::default();
        let mut animator = RecordingAnimator::default();
        let mut transform = Transform::default();

        brain.tick(Duration::ZERO, &mut transform, &Vec3::X, &mut navigation, &mut animator);
        assert_eq!(brain.attack_gate, AttackGate::CoolingDown { generation: 1 });
        navigation.calls.clear();

        // Reset от несуществующей прошлой атаки
        brain.run_task(ZombieTask::ResetAttack { generation: 0 }, &mut navigation, &mut animator);

        assert!(!brain.is_attack_ready());
        assert_eq!(animator.flag(AnimationFlag::Attacking), Some(true));
        assert!(navigation.calls.is_empty());
    }

    #[test]
    fn test_generation_grows_per_attack() {
        let mut brain = brain();
        let mut navigation = RecordingNavigation::default();
        let mut animator = RecordingAnimator::default();
        let mut transform = Transform::default();
        let cooldown = Duration::from_secs_f32(brain.config().attack_cooldown);

        brain.tick(Duration::ZERO, &mut transform, &Vec3::X, &mut navigation, &mut animator);
        brain.tick(cooldown, &mut transform, &Vec3::X, &mut navigation, &mut animator);

        assert_eq!(brain.attack_generation, 2);
        assert_eq!(brain.attack_gate, AttackGate::CoolingDown { generation: 2 });
    }

    #[test]
    fn test_turn_towards_ignores_vertical_target() {
        let mut transform = Transform::default();
        turn_towards(&mut transform, Vec3::new(0.0, 10.0, 0.0), 1.0);
        assert_eq!(transform.rotation, Quat::IDENTITY);
    }
}
