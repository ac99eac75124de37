pub mod analysis;
pub mod catalog;
pub mod common;
pub mod evaluation;
pub mod ingestion;
pub mod reading;
pub mod recommendation;
