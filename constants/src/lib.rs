//! Shared defaults for level layout ingestion and visualisation.
pub mod colour;
pub mod coordinate_system;
pub mod layer;
pub mod render_settings;
