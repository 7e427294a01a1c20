//! UI module for the sidebar application
//!
//! # Architecture
//!
//! - **Theme** (`theme`): token registry, palette and widget styles
//! - **Animation** (`animation`): hover and entrance transitions
//! - **Icons** (`icons`): embedded SVG sources keyed by `IconId`
//! - **Components** (`components`): business-specific UI with Message handling

pub mod animation;
pub mod components;
pub mod icons;
pub mod theme;
