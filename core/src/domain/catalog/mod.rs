pub mod entities;
pub mod standard;

pub use entities::*;
