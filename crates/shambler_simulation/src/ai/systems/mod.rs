//! AI systems (strategic layer logic)

pub mod activation;
pub mod behaviour;
pub mod death;

// Re-export all systems
pub use activation::*;
pub use behaviour::*;
pub use death::*;
