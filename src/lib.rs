//! cardport: JSON Card Import Library
//!
//! A library for importing flashcards from JSON documents into a
//! collection, relocating referenced media along the way.

pub mod cli;
pub mod collection;
pub mod pipeline;
pub mod report;
pub mod utils;
