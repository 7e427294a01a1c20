//! Application messages

use crate::ui::animation::EntranceStep;

/// Sidebar elements with hover feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SidebarId {
    /// Nav item by global route index
    Nav(usize),
    ToggleButton,
    ThemeButton,
}

/// Application messages
#[derive(Clone)]
pub enum Message {
    // ============ Sidebar ============
    /// Collapse or expand the sidebar
    ToggleSidebar,
    /// Switch between light and dark
    ToggleTheme,
    /// Nav item clicked
    GoToRoute(String),
    /// Cursor entered (Some) or left (None) a sidebar element
    HoverSidebar(Option<SidebarId>),
    /// Entrance timer fired for the sidebar with this mount id
    Entrance { mount: u64, step: EntranceStep },

    // ============ Frame ============
    /// Animation tick
    AnimationTick,

    // ============ Window ============
    /// Window close requested
    RequestClose,
}

// Frame ticks arrive at display rate; keep their formatting minimal
impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ToggleSidebar => write!(f, "ToggleSidebar"),
            Self::ToggleTheme => write!(f, "ToggleTheme"),
            Self::GoToRoute(path) => write!(f, "GoToRoute({})", path),
            Self::HoverSidebar(id) => write!(f, "HoverSidebar({:?})", id),
            Self::Entrance { mount, step } => write!(f, "Entrance({}, {:?})", mount, step),
            Self::AnimationTick => write!(f, "AnimationTick"),
            Self::RequestClose => write!(f, "RequestClose"),
        }
    }
}
