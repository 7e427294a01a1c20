//! Embedded SVG icons
//!
//! Stroke icons on a 24x24 grid. `currentColor` is replaced at render time by
//! the svg style closure, so a single source serves both themes.

use std::sync::LazyLock;

use iced::widget::svg;

/// Opaque icon identifier carried by routes and buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    House,
    ChartLine,
    ChartColumn,
    Wallet,
    ChartPie,
    Envelope,
    Sliders,
    PhoneVolume,
    AngleLeft,
    AngleRight,
    Moon,
    Sun,
}

impl IconId {
    /// Icon name as used by the icon font the routes were designed against
    #[cfg(test)]
    pub fn name(&self) -> &'static str {
        match self {
            IconId::House => "house",
            IconId::ChartLine => "chart-line",
            IconId::ChartColumn => "chart-column",
            IconId::Wallet => "wallet",
            IconId::ChartPie => "chart-pie",
            IconId::Envelope => "envelope",
            IconId::Sliders => "sliders",
            IconId::PhoneVolume => "phone-volume",
            IconId::AngleLeft => "angle-left",
            IconId::AngleRight => "angle-right",
            IconId::Moon => "moon",
            IconId::Sun => "sun",
        }
    }

    /// Raw SVG source
    pub fn svg_source(&self) -> &'static str {
        match self {
            IconId::House => HOUSE,
            IconId::ChartLine => CHART_LINE,
            IconId::ChartColumn => CHART_COLUMN,
            IconId::Wallet => WALLET,
            IconId::ChartPie => CHART_PIE,
            IconId::Envelope => ENVELOPE,
            IconId::Sliders => SLIDERS,
            IconId::PhoneVolume => PHONE_VOLUME,
            IconId::AngleLeft => ANGLE_LEFT,
            IconId::AngleRight => ANGLE_RIGHT,
            IconId::Moon => MOON,
            IconId::Sun => SUN,
        }
    }

    /// Cached svg handle (parsed once per icon)
    pub fn handle(&self) -> svg::Handle {
        HANDLES[*self as usize].clone()
    }
}

const ALL: [IconId; 12] = [
    IconId::House,
    IconId::ChartLine,
    IconId::ChartColumn,
    IconId::Wallet,
    IconId::ChartPie,
    IconId::Envelope,
    IconId::Sliders,
    IconId::PhoneVolume,
    IconId::AngleLeft,
    IconId::AngleRight,
    IconId::Moon,
    IconId::Sun,
];

static HANDLES: LazyLock<Vec<svg::Handle>> = LazyLock::new(|| {
    ALL.iter()
        .map(|icon| svg::Handle::from_memory(icon.svg_source().as_bytes()))
        .collect()
});

pub static LOGO_HANDLE: LazyLock<svg::Handle> =
    LazyLock::new(|| svg::Handle::from_memory(LOGO.as_bytes()));

pub const LOGO: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 32 32"><path fill="#FF6F00" d="M16 2 4 8.8v6.9l6-3.4v13.5l6 3.4V15.7l6 3.4v-6.8l-6-3.5V2z"/><path fill="#FFA000" d="m22 5.4 6 3.4v6.9l-6-3.4z"/></svg>"##;

const HOUSE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M3 10.5 12 3l9 7.5"/><path d="M5 9.5V21h14V9.5"/><path d="M10 21v-6h4v6"/></svg>"#;

const CHART_LINE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M3 3v18h18"/><path d="m7 15 4-4 3 3 6-6"/></svg>"#;

const CHART_COLUMN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M3 3v18h18"/><path d="M8 17v-5"/><path d="M13 17V8"/><path d="M18 17v-8"/></svg>"#;

const WALLET: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M19 7V5a2 2 0 0 0-2-2H5a2 2 0 0 0 0 4h14a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5"/><path d="M17 14h.01"/></svg>"#;

const CHART_PIE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21.2 15.9A10 10 0 1 1 8 2.8"/><path d="M22 12A10 10 0 0 0 12 2v10z"/></svg>"#;

const ENVELOPE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><rect x="2" y="4" width="20" height="16" rx="2"/><path d="m22 7-10 6L2 7"/></svg>"#;

const SLIDERS: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M4 21v-7"/><path d="M4 10V3"/><path d="M12 21v-9"/><path d="M12 8V3"/><path d="M20 21v-5"/><path d="M20 12V3"/><path d="M1 14h6"/><path d="M9 8h6"/><path d="M17 16h6"/></svg>"#;

const PHONE_VOLUME: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M22 16.9v3a2 2 0 0 1-2.2 2 19.8 19.8 0 0 1-8.6-3.1 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.1 4.2 2 2 0 0 1 4.1 2h3a2 2 0 0 1 2 1.7c.1.9.4 1.8.7 2.7a2 2 0 0 1-.5 2.1L8 9.8a16 16 0 0 0 6 6l1.3-1.3a2 2 0 0 1 2.1-.4c.9.3 1.8.6 2.7.7a2 2 0 0 1 1.7 2z"/><path d="M15 2a7 7 0 0 1 7 7"/><path d="M15 6a3 3 0 0 1 3 3"/></svg>"#;

const ANGLE_LEFT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m15 18-6-6 6-6"/></svg>"#;

const ANGLE_RIGHT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m9 18 6-6-6-6"/></svg>"#;

const MOON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21 12.8A9 9 0 1 1 11.2 3a7 7 0 0 0 9.8 9.8z"/></svg>"#;

const SUN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.9 4.9 1.4 1.4"/><path d="m17.7 17.7 1.4 1.4"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.3 17.7-1.4 1.4"/><path d="m19.1 4.9-1.4 1.4"/></svg>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_table_matches_enum_order() {
        for (idx, icon) in ALL.iter().enumerate() {
            assert_eq!(*icon as usize, idx, "{} out of order", icon.name());
        }
    }

    #[test]
    fn logo_keeps_both_fills() {
        assert!(LOGO.contains(r##"fill="#FF6F00""##));
        assert!(LOGO.contains(r##"fill="#FFA000""##));
        assert!(LOGO.ends_with("</svg>"));
    }

    #[test]
    fn sources_are_svg_documents() {
        for icon in ALL {
            let src = icon.svg_source();
            assert!(src.starts_with("<svg"), "{}", icon.name());
            assert!(src.ends_with("</svg>"), "{}", icon.name());
        }
    }
}
