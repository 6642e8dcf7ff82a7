// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every widget in the window.
//!
//! Colors, spacing, sizes and type scale live here so the input, preview and
//! results panels stay visually consistent in light and dark mode.
//!
//! ```
//! use ui_lens::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let dimmed = Color {
//!     a: opacity::OVERLAY_MEDIUM,
//!     ..palette::GRAY_400
//! };
//! assert_eq!(spacing::MD, 2.0 * spacing::XS);
//! # let _ = dimmed;
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// Brand blue, lightest to darkest. Buttons, links, drop zone border.
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
    pub const PRIMARY_700: Color = Color::from_rgb(0.15, 0.4, 0.7);

    /// Error panel and error toasts.
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

/// Alpha values applied on top of palette colors.
pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Secondary text such as captions and the service URL.
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    /// Panel backgrounds.
    pub const SURFACE: f32 = 0.95;
}

/// 4px steps on an 8px grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const SPINNER: f32 = 48.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    /// Widest the main column grows before it centers.
    pub const CONTENT_MAX_WIDTH: f32 = 820.0;
    pub const URL_FIELD_WIDTH: f32 = 480.0;
    pub const DROP_ZONE_HEIGHT: f32 = 180.0;
    /// Tall screenshots are scaled down to this height.
    pub const PREVIEW_MAX_HEIGHT: f32 = 360.0;
    pub const SCORE_CARD_WIDTH: f32 = 150.0;
}

pub mod typography {
    /// Score values.
    pub const TITLE_LG: f32 = 30.0;
    /// App name.
    pub const TITLE_MD: f32 = 20.0;
    /// Critique headings, toast glyphs.
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    /// Preview size, analysis metadata.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    /// Drop zone outline.
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast and error panel accents.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::SURFACE < 1.0);

    // The preview replaces the drop zone and must not make the page jump up.
    assert!(sizing::PREVIEW_MAX_HEIGHT > sizing::DROP_ZONE_HEIGHT);
    assert!(sizing::CONTENT_MAX_WIDTH > sizing::URL_FIELD_WIDTH);
    assert!(sizing::CONTENT_MAX_WIDTH > 3.0 * sizing::SCORE_CARD_WIDTH);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);
};
