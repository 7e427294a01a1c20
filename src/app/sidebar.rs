//! Sidebar state
//!
//! Everything the sidebar remembers lives in one [`SidebarState`] owned by
//! the application. Dropping it tears the sidebar down, including any entrance
//! steps that have not fired yet.

use std::time::{Duration, Instant};

use iced::Task;
use iced::task::Handle;
use iced_anim::Animated;
use iced_anim::transition::Easing;

use crate::app::message::{Message, SidebarId};
use crate::features::routes::{self, DEFAULT_PATH, ROUTE_COUNT, RouteEntry};
use crate::features::settings::DisplaySettings;
use crate::ui::animation::entrance::{self, EntranceStep, ItemFades, ItemPresence, ScheduledStep};
use crate::ui::animation::HoverAnimations;
use crate::ui::theme::ThemeName;

/// Width of the expanded sidebar
pub const OPENED_WIDTH: f32 = 240.0;
/// Width of the collapsed sidebar
pub const CLOSED_WIDTH: f32 = 72.0;

const WIDTH_TRANSITION: Duration = Duration::from_millis(300);
/// Fade of the application name next to the logo
const NAME_FADE: Duration = Duration::from_millis(200);

fn width_easing() -> Easing {
    Easing::EASE_IN_OUT.with_duration(WIDTH_TRANSITION)
}

fn name_easing() -> Easing {
    Easing::EASE_IN_OUT.with_duration(NAME_FADE)
}

/// Pending entrance steps
///
/// Every step runs as an abortable task whose handle aborts on drop, so
/// clearing the list cancels whatever has not fired yet.
#[derive(Default)]
pub struct EntranceTimers {
    handles: Vec<Handle>,
}

impl EntranceTimers {
    /// Schedule `steps`, tagging each resulting message with `mount_id`
    pub fn start(mount_id: u64, steps: &[ScheduledStep]) -> (Self, Task<Message>) {
        let (tasks, handles): (Vec<_>, Vec<_>) = steps
            .iter()
            .map(|&ScheduledStep { at, step }| {
                let (task, handle) = Task::perform(
                    async move {
                        tokio::time::sleep(at).await;
                    },
                    move |_| Message::Entrance {
                        mount: mount_id,
                        step,
                    },
                )
                .abortable();
                (task, handle.abort_on_drop())
            })
            .unzip();

        (Self { handles }, Task::batch(tasks))
    }

    /// Number of steps still owned (fired steps are released on finish)
    pub fn pending(&self) -> usize {
        self.handles.len()
    }

    /// Abort every pending step
    pub fn cancel(&mut self) {
        if !self.handles.is_empty() {
            tracing::debug!("Cancelling {} entrance timers", self.handles.len());
        }
        self.handles.clear();
    }
}

/// Which list a nav item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Primary,
    Bottom,
}

/// Derived presentation of one nav item
#[derive(Debug, Clone, Copy)]
pub struct NavItemModel {
    pub index: usize,
    pub section: Section,
    pub route: &'static RouteEntry,
    pub is_active: bool,
    pub presence: ItemPresence,
    pub hover_progress: f32,
}

/// State of one mounted sidebar
pub struct SidebarState {
    mount_id: u64,
    is_opened: bool,
    theme: ThemeName,
    active_path: String,
    mounted_indexes: Vec<usize>,
    is_first_mount: bool,
    reduce_motion: bool,
    width: Animated<f32>,
    name_opacity: Animated<f32>,
    fades: ItemFades,
    hover: HoverAnimations<SidebarId>,
    timers: EntranceTimers,
}

impl SidebarState {
    /// Fresh state: first-mount phase, nothing revealed, no timers
    pub fn new(mount_id: u64, display: &DisplaySettings) -> Self {
        let is_opened = !display.start_collapsed;
        Self {
            mount_id,
            is_opened,
            theme: ThemeName::from_color(display.color.as_deref()),
            active_path: DEFAULT_PATH.to_string(),
            mounted_indexes: Vec::with_capacity(ROUTE_COUNT),
            is_first_mount: true,
            reduce_motion: display.reduce_motion,
            width: Animated::transition(target_width(is_opened), width_easing()),
            name_opacity: Animated::transition(target_name_opacity(is_opened), name_easing()),
            fades: ItemFades::new(ROUTE_COUNT),
            hover: HoverAnimations::default(),
            timers: EntranceTimers::default(),
        }
    }

    /// Mount the sidebar and start its entrance sequence
    pub fn mount(mount_id: u64, display: &DisplaySettings) -> (Self, Task<Message>) {
        let mut state = Self::new(mount_id, display);
        let steps = entrance::schedule(ROUTE_COUNT);

        if state.reduce_motion {
            // Play the whole timeline at once
            for step in entrance::due(&steps, entrance::total_duration(ROUTE_COUNT)) {
                state.apply_entrance(step);
            }
            tracing::info!("Sidebar {} mounted without entrance animation", mount_id);
            return (state, Task::none());
        }

        let (timers, task) = EntranceTimers::start(mount_id, &steps);
        state.timers = timers;
        tracing::info!(
            "Sidebar {} mounted, theme {}, {} entrance steps scheduled",
            mount_id,
            state.theme,
            state.timers.pending()
        );
        (state, task)
    }

    /// Tear the sidebar down, cancelling pending entrance steps
    pub fn unmount(mut self) {
        tracing::info!(
            "Sidebar {} unmounted ({} entrance steps pending)",
            self.mount_id,
            self.timers.pending()
        );
        self.timers.cancel();
    }

    pub fn mount_id(&self) -> u64 {
        self.mount_id
    }

    pub fn is_opened(&self) -> bool {
        self.is_opened
    }

    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    pub fn active_path(&self) -> &str {
        &self.active_path
    }

    #[cfg(test)]
    pub fn mounted_indexes(&self) -> &[usize] {
        &self.mounted_indexes
    }

    #[cfg(test)]
    pub fn is_first_mount(&self) -> bool {
        self.is_first_mount
    }

    #[cfg(test)]
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    pub fn toggle_sidebar(&mut self) {
        self.is_opened = !self.is_opened;
        self.width.update(target_width(self.is_opened).into());
        self.name_opacity.update(target_name_opacity(self.is_opened).into());
        tracing::debug!("Sidebar {}", if self.is_opened { "opened" } else { "closed" });
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::info!("Theme switched to {}", self.theme);
    }

    /// Highlight `path`; performing the navigation is the caller's job
    pub fn go_to_route(&mut self, path: &str) {
        if self.active_path != path {
            self.active_path = path.to_string();
        }
    }

    pub fn is_active(&self, path: &str) -> bool {
        self.active_path == path
    }

    /// Apply one step of the entrance sequence
    ///
    /// Out-of-order, duplicate and out-of-range reveals are dropped so that
    /// `mounted_indexes` stays strictly increasing. Nothing happens once the
    /// first-mount phase is over.
    pub fn apply_entrance(&mut self, step: EntranceStep) {
        if !self.is_first_mount {
            return;
        }

        match step {
            EntranceStep::Reveal(index) => {
                let in_order = self.mounted_indexes.last().is_none_or(|&last| index > last);
                if index < ROUTE_COUNT && in_order {
                    self.mounted_indexes.push(index);
                    self.fades.reveal(index);
                }
            }
            EntranceStep::Finish => {
                self.is_first_mount = false;
                self.timers.cancel();
                tracing::debug!(
                    "Sidebar {} entrance finished ({} items)",
                    self.mount_id,
                    self.mounted_indexes.len()
                );
            }
        }
    }

    /// Opacity and offset of item `index`
    pub fn item_presence(&self, index: usize) -> ItemPresence {
        if !self.is_first_mount || self.reduce_motion {
            ItemPresence::VISIBLE
        } else if self.mounted_indexes.binary_search(&index).is_ok() {
            self.fades.presence(index)
        } else {
            ItemPresence::HIDDEN
        }
    }

    /// Current sidebar width in logical pixels
    pub fn width(&self) -> f32 {
        if self.reduce_motion {
            target_width(self.is_opened)
        } else {
            *self.width.value()
        }
    }

    /// Opacity of the application name next to the logo
    pub fn name_opacity(&self) -> f32 {
        if self.reduce_motion {
            target_name_opacity(self.is_opened)
        } else {
            *self.name_opacity.value()
        }
    }

    /// Derived presentation of every nav item, primary routes first
    pub fn nav_items(&self) -> Vec<NavItemModel> {
        routes::all_routes()
            .map(|(index, route)| NavItemModel {
                index,
                section: if index < routes::ROUTES.len() {
                    Section::Primary
                } else {
                    Section::Bottom
                },
                route,
                is_active: self.is_active(route.path),
                presence: self.item_presence(index),
                hover_progress: self.hover_progress(SidebarId::Nav(index)),
            })
            .collect()
    }

    pub fn hover(&mut self, id: Option<SidebarId>) {
        self.hover.hover(id);
    }

    pub fn hover_progress(&self, id: SidebarId) -> f32 {
        if self.reduce_motion {
            // No frames are requested, so hover snaps
            return if self.hover.hovered() == Some(id) { 1.0 } else { 0.0 };
        }
        self.hover.progress(id)
    }

    pub fn is_animating(&self) -> bool {
        if self.reduce_motion {
            return false;
        }
        self.width.is_animating()
            || self.name_opacity.is_animating()
            || self.hover.is_animating()
            || (self.is_first_mount && self.fades.is_animating())
    }

    pub fn tick(&mut self, now: Instant) {
        self.width.tick(now);
        self.name_opacity.tick(now);
        self.hover.tick(now);
        if self.is_first_mount {
            self.fades.tick(now);
        }
    }
}

fn target_width(is_opened: bool) -> f32 {
    if is_opened { OPENED_WIDTH } else { CLOSED_WIDTH }
}

fn target_name_opacity(is_opened: bool) -> f32 {
    if is_opened { 1.0 } else { 0.0 }
}
