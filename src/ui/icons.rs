// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small single-color SVG line drawings embedded as string
//! constants. Handles are created once and cached with `OnceLock`. Strokes
//! use `currentColor`, so callers tint them with [`tinted`].
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the context they are used in (e.g., `cross` not `healthcare`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length};
use std::sync::OnceLock;

macro_rules! define_icon {
    ($name:ident, $body:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static SOURCE: &str = concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                $body,
                "</svg>"
            );
            let handle = HANDLE.get_or_init(|| Handle::from_memory(SOURCE.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Navigation
// =============================================================================

define_icon!(
    chevron_left,
    r#"<polyline points="15 18 9 12 15 6"/>"#,
    "Chevron pointing left."
);
define_icon!(
    chevron_right,
    r#"<polyline points="9 18 15 12 9 6"/>"#,
    "Chevron pointing right."
);

// =============================================================================
// Industry Marks
// =============================================================================

define_icon!(
    cross,
    r#"<path d="M9 3h6v6h6v6h-6v6H9v-6H3V9h6z"/>"#,
    "Medical cross."
);
define_icon!(
    factory,
    r#"<path d="M2 20V9l6 4V9l6 4V4h4v16z"/><line x1="2" y1="20" x2="22" y2="20"/>"#,
    "Factory with saw-tooth roof."
);
define_icon!(
    columns,
    r#"<path d="M3 10h18L12 4z"/><line x1="5" y1="10" x2="5" y2="18"/><line x1="10" y1="10" x2="10" y2="18"/><line x1="14" y1="10" x2="14" y2="18"/><line x1="19" y1="10" x2="19" y2="18"/><line x1="3" y1="20" x2="21" y2="20"/>"#,
    "Civic building with columns."
);
define_icon!(
    coins,
    r#"<ellipse cx="12" cy="6" rx="7" ry="3"/><path d="M5 6v6c0 1.7 3.1 3 7 3s7-1.3 7-3V6"/><path d="M5 12v6c0 1.7 3.1 3 7 3s7-1.3 7-3v-6"/>"#,
    "Stack of coins."
);
define_icon!(
    mortarboard,
    r#"<path d="M2 9l10-5 10 5-10 5z"/><path d="M6 11v5c3 2 9 2 12 0v-5"/>"#,
    "Graduation cap."
);
define_icon!(
    chip,
    r#"<rect x="6" y="6" width="12" height="12" rx="2"/><path d="M9 2v4M15 2v4M9 18v4M15 18v4M2 9h4M2 15h4M18 9h4M18 15h4"/>"#,
    "Microchip."
);

// =============================================================================
// Approach Steps
// =============================================================================

define_icon!(
    magnifier,
    r#"<circle cx="11" cy="11" r="7"/><line x1="21" y1="21" x2="16" y2="16"/>"#,
    "Magnifying glass."
);
define_icon!(
    bar_chart,
    r#"<line x1="4" y1="20" x2="20" y2="20"/><rect x="5" y="11" width="3" height="9"/><rect x="10.5" y="6" width="3" height="14"/><rect x="16" y="14" width="3" height="6"/>"#,
    "Bar chart."
);
define_icon!(
    compass,
    r#"<circle cx="12" cy="12" r="9"/><path d="M15.5 8.5l-2 5-5 2 2-5z"/>"#,
    "Compass."
);
define_icon!(
    gear,
    r#"<circle cx="12" cy="12" r="3"/><path d="M12 2v3M12 19v3M2 12h3M19 12h3M4.9 4.9l2.1 2.1M17 17l2.1 2.1M4.9 19.1L7 17M17 7l2.1-2.1"/>"#,
    "Gear."
);
define_icon!(
    pulse,
    r#"<polyline points="2 12 7 12 10 5 14 19 17 12 22 12"/>"#,
    "Heartbeat pulse line."
);

/// Sets a square size on an icon.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Paints an icon's strokes with `color`.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme, _status| svg::Style { color: Some(color) })
}
