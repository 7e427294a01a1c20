//! Feature modules - logic separated from UI
//!
//! Features should not depend on UI components directly.

pub mod navigator;
pub mod routes;
pub mod settings;

pub use settings::Settings;
