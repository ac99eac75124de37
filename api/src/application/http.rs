pub mod analysis;
pub mod health;
pub mod reference;
pub mod server;
