// src/app/update/navigation.rs
//! Navigation message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle route selection
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::GoToRoute(path) => {
                let Some(sidebar) = &mut self.ui.sidebar else {
                    return Some(Task::none());
                };
                sidebar.go_to_route(path);
                // The navigator performs the actual page transition
                self.core.navigator.navigate(path);
                Some(Task::none())
            }

            _ => None,
        }
    }
}
