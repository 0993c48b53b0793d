//! Level layout ingestion: reads geometry, chest, spawn and door CSV exports,
//! scales and filters their records, colours geometry by height and produces
//! render batches plus a JSON render manifest.
pub mod batch;
pub mod bounds;
pub mod colour_mapper;
pub mod config;
pub mod connections;
pub mod converter;
pub mod coordinates;
pub mod error;
pub mod gradient;
pub mod layers;
pub mod manifest;
pub mod reader;
pub mod record;
pub mod session;
pub mod settings;

#[cfg(test)]
mod test_support;

pub use config::VisualizationConfig;
pub use converter::{LevelConverter, inspect_file, load_layer};
pub use error::{ConfigError, LoadError};
pub use session::LevelSession;
