//! AI components

pub mod zombie;


// Re-export all components
pub use zombie::*;
