//! Main application module

mod message;
pub mod sidebar;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::Settings;
pub use message::{Message, SidebarId};
pub use state::{App, CoreState, UiState};

/// Name shown next to the logo and in the window title
pub const APP_NAME: &str = "Sidenav";

impl App {
    /// Create an application instance from loaded settings
    pub fn with_settings(settings: Settings) -> (Self, Task<Message>) {
        let core = CoreState::new(settings);
        let mut ui = UiState::default();
        let mount_task = ui.mount_sidebar(&core.settings);

        (Self { core, ui }, mount_task)
    }

    /// Application theme follows the sidebar theme
    pub fn theme(&self) -> Theme {
        self.ui.theme_name(&self.core.settings).iced_theme()
    }

    /// Window title with the active route
    pub fn title(&self) -> String {
        let route = self
            .ui
            .sidebar
            .as_ref()
            .and_then(|s| crate::features::routes::find(s.active_path()));
        match route {
            Some(route) => format!("{} - {}", APP_NAME, route.title),
            None => APP_NAME.to_string(),
        }
    }

    /// Subscriptions for animations and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        // Frames are only requested while something is moving
        let animation_sub = if self.ui.has_active_animations() {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);

        iced::Subscription::batch([animation_sub, close_request_sub])
    }
}
