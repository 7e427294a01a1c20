// src/app/update/sidebar.rs
//! Sidebar message handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle sidebar state transitions
    pub fn handle_sidebar(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleSidebar => {
                if let Some(sidebar) = &mut self.ui.sidebar {
                    sidebar.toggle_sidebar();
                }
                Some(Task::none())
            }

            Message::ToggleTheme => {
                if let Some(sidebar) = &mut self.ui.sidebar {
                    sidebar.toggle_theme();
                }
                Some(Task::none())
            }

            Message::HoverSidebar(id) => {
                if let Some(sidebar) = &mut self.ui.sidebar {
                    sidebar.hover(*id);
                }
                Some(Task::none())
            }

            Message::Entrance { mount, step } => {
                match &mut self.ui.sidebar {
                    Some(sidebar) if sidebar.mount_id() == *mount => sidebar.apply_entrance(*step),
                    _ => tracing::debug!("Dropping entrance step {:?} of mount {}", step, mount),
                }
                Some(Task::none())
            }

            Message::AnimationTick => {
                self.ui.tick_animations(Instant::now());
                Some(Task::none())
            }

            _ => None,
        }
    }
}
