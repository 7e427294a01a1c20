// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::features::routes;
use crate::ui::{components, theme};

impl App {
    /// Build the window view: sidebar on the left, active page on the right
    pub fn view(&self) -> Element<'_, Message> {
        let Some(sidebar) = &self.ui.sidebar else {
            return Space::new().width(Fill).height(Fill).into();
        };

        let tokens = self.core.palette.resolve(sidebar.theme());
        let sidebar_view = components::sidebar::view(sidebar, tokens);

        let path = sidebar.active_path();
        let heading = routes::find(path).map(|r| r.title).unwrap_or("Not found");

        let page = container(
            column![
                text(heading).size(28),
                text(path.to_string()).size(14).style(|theme: &iced::Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.color),
                }),
            ]
            .spacing(8)
            .align_x(Alignment::Center),
        )
        .center_x(Fill)
        .center_y(Fill)
        .style(theme::content_pane);

        row![sidebar_view, page].height(Fill).into()
    }
}
