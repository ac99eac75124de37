pub mod entities;
pub mod ports;
pub mod table_ingester;
pub mod text_normalizer;

pub use entities::*;
pub use ports::*;
