// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Brand and layout constants shared by every screen.

## Organization

- **Palette**: Base and brand colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use meridian_showcase::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::NAVY_900
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.11, 0.12, 0.14);
    pub const GRAY_500: Color = Color::from_rgb(0.45, 0.48, 0.52);
    pub const GRAY_300: Color = Color::from_rgb(0.78, 0.80, 0.83);
    pub const GRAY_100: Color = Color::from_rgb(0.95, 0.96, 0.97);

    // Brand navy
    pub const NAVY_900: Color = Color::from_rgb(0.05, 0.11, 0.22);
    pub const NAVY_700: Color = Color::from_rgb(0.09, 0.20, 0.38);
    pub const NAVY_500: Color = Color::from_rgb(0.16, 0.33, 0.58);

    // Brand teal accent
    pub const TEAL_600: Color = Color::from_rgb(0.05, 0.52, 0.52);
    pub const TEAL_400: Color = Color::from_rgb(0.18, 0.70, 0.68);
    pub const TEAL_100: Color = Color::from_rgb(0.86, 0.96, 0.95);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const DIMMED: f32 = 0.25;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    pub const NAVBAR_HEIGHT: f32 = 56.0;

    /// Carousel previous/next buttons (square).
    pub const CAROUSEL_ARROW: f32 = 44.0;
    /// Diameter of a dot in the dot navigation.
    pub const CAROUSEL_DOT: f32 = 12.0;
    /// Distance a slide travels during its enter transition.
    pub const SLIDE_TRAVEL: f32 = 96.0;
    /// Width of the metrics column on a story card.
    pub const METRICS_COLUMN: f32 = 220.0;

    /// Height of the logo ticker strip.
    pub const TICKER_HEIGHT: f32 = 96.0;
    /// Horizontal slot reserved per client wordmark.
    pub const TICKER_SLOT: f32 = 240.0;

    /// Max readable width for long-form pages.
    pub const CONTENT_MAX_WIDTH: f32 = 920.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page hero headings
    pub const DISPLAY: f32 = 36.0;

    /// Large title - page headings
    pub const TITLE_LG: f32 = 28.0;

    /// Medium title - card titles, metric figures
    pub const TITLE_MD: f32 = 22.0;

    /// Small title - section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - lead paragraphs
    pub const BODY_LG: f32 = 16.0;

    /// Standard body
    pub const BODY: f32 = 14.0;

    /// Caption - badges, counters
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    const SOFT_BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.18,
    };

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SOFT_BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const LG: Shadow = Shadow {
        color: SOFT_BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::DIMMED > 0.0 && opacity::DIMMED < 1.0);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::CAROUSEL_ARROW > sizing::CAROUSEL_DOT);
};
