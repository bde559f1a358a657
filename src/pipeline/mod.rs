//! Pipeline module - turns a JSON document into notes

pub mod config;
pub mod entry;
pub mod error;
pub mod grouping;
pub mod importer;
pub mod media;
pub mod transform;

pub use config::*;
pub use entry::*;
pub use error::*;
pub use grouping::*;
pub use importer::*;
pub use media::*;
pub use transform::*;
