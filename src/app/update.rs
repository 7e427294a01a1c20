//! Message update handlers - thin dispatcher delegating to submodules

mod navigation;
mod sidebar;
mod window;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_sidebar(&message) {
            return task;
        }
        if let Some(task) = self.handle_navigation(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }

        Task::none()
    }
}
