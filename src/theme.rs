//! Centralized theme constants for the periodic table viewer
//! All colors, sizes, and styling should reference these constants

use crate::category::CategoryColor;
use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800

// =============================================================================
// COLORS - Accent (Teal)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800

// =============================================================================
// COLORS - Tiles
// =============================================================================
pub const TILE_BORDER: Color32 = Color32::BLACK;
pub const TILE_NUMBER: Color32 = Color32::from_rgb(0x37, 0x41, 0x51); // gray-700
pub const TILE_SYMBOL: Color32 = Color32::from_rgb(0x11, 0x18, 0x27); // gray-900
pub const TILE_NAME: Color32 = Color32::from_rgb(0x1f, 0x29, 0x37); // gray-800

// =============================================================================
// COLORS - Categories
// =============================================================================
pub fn category_fill(color: CategoryColor) -> Color32 {
    match color {
        CategoryColor::Empty => Color32::from_rgb(0xf3, 0xf4, 0xf6),
        CategoryColor::DiatomicNonmetal => Color32::from_rgb(0xa9, 0xd5, 0xbf),
        CategoryColor::NobleGas => Color32::from_rgb(0xf4, 0xd3, 0xe7),
        CategoryColor::AlkaliMetal => Color32::from_rgb(0xf8, 0x84, 0x79),
        CategoryColor::AlkalineEarthMetal => Color32::from_rgb(0xfb, 0xc6, 0xa1),
        CategoryColor::Metalloid => Color32::from_rgb(0x61, 0xd7, 0xa1),
        CategoryColor::PolyatomicNonmetal => Color32::from_rgb(0xa2, 0xd4, 0xd5),
        CategoryColor::PostTransitionMetal => Color32::from_rgb(0x8e, 0xb2, 0xe8),
        CategoryColor::TransitionMetal => Color32::from_rgb(0xe9, 0xff, 0x07),
        CategoryColor::Lanthanide => Color32::from_rgb(0xcc, 0x9b, 0xfb),
        CategoryColor::Actinide => Color32::from_rgb(0xad, 0x87, 0xbb),
        CategoryColor::Unclassified => Color32::from_rgb(0xe5, 0xe7, 0xeb),
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 24.0;
pub const FONT_BODY: f32 = 14.0;

// Tile text at REFERENCE_TILE_WIDTH; scaled with the actual tile width
pub const FONT_TILE_NUMBER: f32 = 8.0;
pub const FONT_TILE_SYMBOL: f32 = 24.0;

// =============================================================================
// DIMENSIONS - Tiles
// =============================================================================
pub const REFERENCE_TILE_WIDTH: f32 = 64.0;
/// Width over height (6:5)
pub const TILE_ASPECT: f32 = 6.0 / 5.0;
pub const TILE_PADDING: f32 = 2.0;
pub const TILE_NAME_HEIGHT: f32 = 14.0;
/// Scale applied to a hovered tile
pub const TILE_HOVER_SCALE: f32 = 1.03;
pub const SERIES_GAP: f32 = 32.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: Color32::from_rgb(0x1a, 0x1a, 0x1e), // Slightly elevated for tooltips
        extreme_bg_color: BG_BASE,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: Color32::TRANSPARENT,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_SURFACE,
                weak_bg_fill: Color32::from_rgb(0x30, 0x30, 0x35),
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_MEDIUM, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            ..egui::style::Widgets::dark()
        },
        striped: false,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        popup_shadow: egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(80),
        },
        window_stroke: egui::Stroke::new(1.0, Color32::from_rgb(0x2a, 0x2a, 0x2e)),
        window_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.scroll.bar_inner_margin = 2.0;
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.bar_outer_margin = 2.0;
        style.spacing.scroll.handle_min_length = 20.0;
        style.spacing.scroll.floating_allocated_width = 0.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Header frame
// =============================================================================
pub fn header_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_BASE)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .inner_margin(egui::Margin::symmetric(SPACING_XL as i8, SPACING_LG as i8))
}

// =============================================================================
// HELPER - Table frame
// =============================================================================
pub fn table_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_BASE)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}
