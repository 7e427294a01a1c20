//! Left sidebar navigation component
//! Logo row with collapse toggle, theme button, primary routes and a bottom section

use iced::widget::{Space, button, column, container, mouse_area, row, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::sidebar::{NavItemModel, Section, SidebarState};
use crate::app::{APP_NAME, Message, SidebarId};
use crate::ui::icons::{self, IconId};
use crate::ui::theme::{self, ResolvedTokens};

/// Height reserved for one nav row
const NAV_ITEM_HEIGHT: f32 = 44.0;
/// Toggle and theme button edge
const BUTTON_SIZE: f32 = 32.0;
const ICON_SIZE: f32 = 18.0;

/// Build the sidebar component
pub fn view(state: &SidebarState, tokens: ResolvedTokens) -> Element<'static, Message> {
    let opened = state.is_opened();
    let items = state.nav_items();

    let section = |which: Section| {
        column(
            items
                .iter()
                .filter(|item| item.section == which)
                .map(|item| nav_item(item, tokens, opened)),
        )
        .spacing(4)
    };

    let content = column![
        logo_section(state, tokens),
        theme_button(state, tokens),
        container(section(Section::Primary))
            .padding(Padding::from([8.0, 0.0]))
            .height(Fill),
        container(section(Section::Bottom))
            .padding(Padding::new(8.0).left(0.0).right(0.0).bottom(16.0)),
    ]
    .width(Fill)
    .height(Fill);

    let panel = container(content)
        .width(state.width())
        .height(Fill)
        .clip(true)
        .style(theme::sidebar(tokens));

    mouse_area(panel).on_exit(Message::HoverSidebar(None)).into()
}

/// Logo, application name and the collapse toggle
fn logo_section(state: &SidebarState, tokens: ResolvedTokens) -> Element<'static, Message> {
    let logo = svg(icons::LOGO_HANDLE.clone()).width(32).height(32);

    let toggle_icon = if state.is_opened() {
        IconId::AngleLeft
    } else {
        IconId::AngleRight
    };
    let toggle = toolbar_button(
        toggle_icon,
        tokens.text,
        tokens,
        state.hover_progress(SidebarId::ToggleButton),
        SidebarId::ToggleButton,
        Message::ToggleSidebar,
    );

    // The name stays in the row until its fade-out completes
    let name_opacity = state.name_opacity();
    if state.is_opened() || name_opacity > 0.0 {
        row![
            logo,
            Space::new().width(12),
            text(APP_NAME)
                .size(20)
                .color(tokens.logo.scale_alpha(name_opacity))
                .font(iced::Font {
                    weight: iced::font::Weight::Bold,
                    ..Default::default()
                }),
            Space::new().width(Fill),
            toggle,
        ]
        .align_y(Alignment::Center)
        .padding(Padding::new(16.0).left(20.0).right(20.0).top(24.0))
        .into()
    } else {
        // Collapsed: no room next to the logo, stack the toggle under it
        column![logo, toggle]
            .spacing(12)
            .align_x(Alignment::Center)
            .width(Fill)
            .padding(Padding::new(16.0).top(24.0))
            .into()
    }
}

/// Light/dark switch under the logo row
fn theme_button(state: &SidebarState, tokens: ResolvedTokens) -> Element<'static, Message> {
    // Moon invites dark mode, sun invites light mode
    let (icon, color) = if state.theme().is_dark() {
        (IconId::Sun, iced::Color::WHITE)
    } else {
        (IconId::Moon, iced::Color::BLACK)
    };
    let btn = toolbar_button(
        icon,
        color,
        tokens,
        state.hover_progress(SidebarId::ThemeButton),
        SidebarId::ThemeButton,
        Message::ToggleTheme,
    );

    if state.is_opened() {
        container(btn)
            .padding(Padding::new(0.0).top(8.0).left(20.0))
            .into()
    } else {
        container(btn)
            .padding(Padding::new(0.0).top(8.0))
            .center_x(Fill)
            .into()
    }
}

fn toolbar_button(
    icon: IconId,
    icon_color: iced::Color,
    tokens: ResolvedTokens,
    hover_progress: f32,
    id: SidebarId,
    on_press: Message,
) -> Element<'static, Message> {
    let glyph = svg(icon.handle())
        .width(ICON_SIZE)
        .height(ICON_SIZE)
        .style(move |_theme, _status| svg::Style {
            color: Some(icon_color),
        });

    let btn = button(container(glyph).center_x(Fill).center_y(Fill))
        .width(BUTTON_SIZE)
        .height(BUTTON_SIZE)
        .padding(0)
        .style(theme::toolbar_button(tokens, hover_progress))
        .on_press(on_press);

    mouse_area(btn)
        .on_enter(Message::HoverSidebar(Some(id)))
        .on_exit(Message::HoverSidebar(None))
        .into()
}

/// One clickable route
fn nav_item(item: &NavItemModel, tokens: ResolvedTokens, opened: bool) -> Element<'static, Message> {
    let presence = item.presence;
    let foreground = theme::nav_foreground(&tokens, item.is_active, item.hover_progress)
        .scale_alpha(presence.opacity);

    let icon = svg(item.route.icon.handle())
        .width(20)
        .height(20)
        .style(move |_theme, _status| svg::Style {
            color: Some(foreground),
        });

    // Collapsed rows show the icon only, centred
    let content: Element<'static, Message> = if opened {
        row![icon, text(item.route.title).size(15).color(foreground)]
            .spacing(16)
            .align_y(Alignment::Center)
            .into()
    } else {
        container(icon).center_x(Fill).into()
    };

    let btn = button(content)
        .width(Fill)
        .padding(Padding::from([12.0, 20.0]))
        .style(theme::nav_item(
            tokens,
            item.is_active,
            item.hover_progress,
            presence.opacity,
        ))
        .on_press(Message::GoToRoute(item.route.path.to_string()));

    let hoverable = mouse_area(btn)
        .on_enter(Message::HoverSidebar(Some(SidebarId::Nav(item.index))))
        .on_exit(Message::HoverSidebar(None));

    // Not-yet-revealed rows sit lower and slide up as they fade in
    container(hoverable)
        .height(NAV_ITEM_HEIGHT)
        .padding(Padding::new(0.0).top(presence.offset))
        .clip(true)
        .into()
}
