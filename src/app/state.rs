// src/app/state.rs
//! Application state definitions

use iced::Task;
use iced::time::Instant;

use crate::app::Message;
use crate::app::sidebar::SidebarState;
use crate::features::Settings;
use crate::features::navigator::{Navigator, TracingNavigator};
use crate::ui::theme::{Palette, ThemeName};

/// Main application state
pub struct App {
    /// Configuration and collaborators
    pub core: CoreState,
    /// UI state
    pub ui: UiState,
}

/// Configuration and the external collaborators of the sidebar
pub struct CoreState {
    pub settings: Settings,
    /// Colour variable definitions
    pub palette: Palette,
    /// Receives route selections
    pub navigator: Box<dyn Navigator>,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        let palette = Palette::with_overrides(&settings.palette);
        Self {
            settings,
            palette,
            navigator: Box::new(TracingNavigator::new()),
        }
    }
}

/// UI View State
#[derive(Default)]
pub struct UiState {
    /// Mounted sidebar; `None` once torn down
    pub sidebar: Option<SidebarState>,
    /// Id handed to the most recent mount
    last_mount_id: u64,
}

impl UiState {
    /// Mount a new sidebar, replacing (and tearing down) any previous one
    pub fn mount_sidebar(&mut self, settings: &Settings) -> Task<Message> {
        self.unmount_sidebar();
        self.last_mount_id += 1;
        let (sidebar, task) = SidebarState::mount(self.last_mount_id, &settings.display);
        self.sidebar = Some(sidebar);
        task
    }

    pub fn unmount_sidebar(&mut self) {
        if let Some(sidebar) = self.sidebar.take() {
            sidebar.unmount();
        }
    }

    /// Sidebar theme, falling back to the configured seed when unmounted
    pub fn theme_name(&self, settings: &Settings) -> ThemeName {
        self.sidebar
            .as_ref()
            .map(|s| s.theme())
            .unwrap_or_else(|| ThemeName::from_color(settings.display.color.as_deref()))
    }

    pub fn has_active_animations(&self) -> bool {
        self.sidebar.as_ref().is_some_and(|s| s.is_animating())
    }

    pub fn tick_animations(&mut self, now: Instant) {
        if let Some(sidebar) = &mut self.sidebar {
            sidebar.tick(now);
        }
    }
}
