pub mod entities;
pub mod range_evaluator;

pub use entities::*;
