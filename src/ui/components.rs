//! Reusable UI components
//!
//! Element tiles and blank spacers, painted directly so every cell in a row
//! keeps the same size regardless of its text.

use crate::category::classify;
use crate::theme;
use crate::types::ElementRecord;
use eframe::egui;

/// Name font size at the reference tile width. Long names step down at
/// 10, 14 and 18 characters.
pub fn name_font_size(name: &str) -> f32 {
    match name.chars().count() {
        n if n > 18 => 7.0,
        n if n > 14 => 8.0,
        n if n > 10 => 9.0,
        _ => 10.0,
    }
}

/// Tile size for a given width, keeping the 6:5 aspect
pub fn tile_size(width: f32) -> egui::Vec2 {
    egui::vec2(width, width / theme::TILE_ASPECT)
}

/// Reserve an empty cell so the grid keeps its alignment.
pub fn spacer(ui: &mut egui::Ui, width: f32) {
    ui.allocate_exact_size(tile_size(width), egui::Sense::hover());
}

/// Allocate and paint one element tile. The caller repaints hovered tiles
/// via [`paint_tile`] so they sit above their neighbours.
pub fn element_tile(ui: &mut egui::Ui, element: &ElementRecord, width: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(tile_size(width), egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        paint_tile(ui.painter(), rect, element);
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response.on_hover_text(element.name.as_str())
}

/// Paint a tile into `rect`: number top-left, symbol centered, name along
/// the bottom truncated to one line.
pub fn paint_tile(painter: &egui::Painter, rect: egui::Rect, element: &ElementRecord) {
    let scale = rect.width() / theme::REFERENCE_TILE_WIDTH;
    let pad = theme::TILE_PADDING * scale;

    painter.rect_filled(rect, 0.0, theme::category_fill(classify(Some(element))));
    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(theme::STROKE_DEFAULT, theme::TILE_BORDER),
        egui::StrokeKind::Inside,
    );

    painter.text(
        rect.left_top() + egui::vec2(pad + 1.0, pad + 1.0),
        egui::Align2::LEFT_TOP,
        element.number.to_string(),
        egui::FontId::proportional(theme::FONT_TILE_NUMBER * scale),
        theme::TILE_NUMBER,
    );

    let name_height = theme::TILE_NAME_HEIGHT * scale;
    let symbol_center = egui::pos2(rect.center().x, rect.center().y - name_height * 0.2);
    painter.text(
        symbol_center,
        egui::Align2::CENTER_CENTER,
        &element.symbol,
        egui::FontId::proportional(theme::FONT_TILE_SYMBOL * scale),
        theme::TILE_SYMBOL,
    );

    let mut job = egui::text::LayoutJob::simple_singleline(
        element.name.clone(),
        egui::FontId::proportional(name_font_size(&element.name) * scale),
        theme::TILE_NAME,
    );
    job.wrap = egui::text::TextWrapping::truncate_at_width(rect.width() - 2.0 * pad);
    let galley = painter.layout_job(job);
    let name_pos = egui::pos2(
        rect.center().x - galley.size().x / 2.0,
        rect.bottom() - pad - (name_height + galley.size().y) / 2.0,
    );
    painter.galley(name_pos, galley, theme::TILE_NAME);
}
