//! Animation state for the sidebar
//!
//! Transitions are driven by `iced_anim`; the app ticks them from the window
//! frame subscription while any of them is in flight.

pub mod entrance;
mod hover;

pub use entrance::EntranceStep;
pub use hover::HoverAnimations;
