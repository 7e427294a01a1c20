//! Sidenav - a collapsible, themed navigation sidebar
//! Built with iced

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let settings = features::Settings::load();
    let window = settings.window.clone();

    iced::application(
        move || app::App::with_settings(settings.clone()),
        app::App::update,
        app::App::view,
    )
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window(iced::window::Settings {
            size: iced::Size::new(window.width, window.height),
            min_size: Some(iced::Size::new(480.0, 520.0)),
            exit_on_close_request: false,
            ..Default::default()
        })
        .antialiasing(true)
        .run()
}
