//! UI Components module - business-specific composite components
//!
//! Components combine widgets with application logic. They are the only layer
//! that should import from `crate::app`.

pub mod sidebar;
