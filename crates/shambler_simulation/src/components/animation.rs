//! Animation компоненты: флаги для внешнего аниматора

use bevy::prelude::*;

use crate::ai::capabilities::{AnimationFlag, AnimationSink};

/// Булевы флаги аниматора (isWalking / isAttacking / isDead)
///
/// Bridge синхронизирует их в AnimationTree; ECS только пишет.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct AnimatorFlags {
    pub is_walking: bool,
    pub is_attacking: bool,
    pub is_dead: bool,
}

impl AnimatorFlags {
    pub fn get(&self, flag: AnimationFlag) -> bool {
        match flag {
            AnimationFlag::Walking => self.is_walking,
            AnimationFlag::Attacking => self.is_attacking,
            AnimationFlag::Dead => self.is_dead,
        }
    }
}

impl AnimationSink for AnimatorFlags {
    fn set_flag(&mut self, flag: AnimationFlag, value: bool) {
        let slot = match flag {
            AnimationFlag::Walking => &mut self.is_walking,
            AnimationFlag::Attacking => &mut self.is_attacking,
            AnimationFlag::Dead => &mut self.is_dead,
        };
        *slot = value;
    }
}

/// Injected аниматор: флаги пишутся в другой entity (например, child с моделью)
///
/// Без этого компонента используется AnimatorFlags самого зомби.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZombieAnimator(pub Entity);
