pub mod extraction;
pub mod tabular;
