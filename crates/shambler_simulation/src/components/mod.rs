//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - navigation: NavAgent (intent для NavMesh агента)
//! - animation: AnimatorFlags, ZombieAnimator
//! - player: Player marker (цель)
//! - lifecycle: DespawnAfter

pub mod animation;
pub mod lifecycle;
pub mod navigation;
pub mod player;

// Re-exports для удобного импорта
pub use animation::*;
pub use lifecycle::*;
pub use navigation::*;
pub use player::*;
