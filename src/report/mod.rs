//! Report module - summarizing import results

pub mod summary;

pub use summary::*;
