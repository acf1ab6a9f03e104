//! Engine module containing rule configuration and the classification engine

pub mod classifier;
pub mod rules;

pub use classifier::*;
pub use rules::*;
