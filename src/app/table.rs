//! Table view: main grid, then the lanthanide and actinide rows

use super::App;
use crate::constants::{GRID_COLS, SERIES_LEADING_SPACERS};
use crate::layout::TableLayout;
use crate::theme;
use crate::types::{ElementRecord, Series};
use crate::ui::components::{element_tile, paint_tile, spacer};
use eframe::egui;

/// Tile under the pointer this frame, repainted last so it overlaps.
type Hovered<'a> = Option<(egui::Rect, &'a ElementRecord)>;

impl App {
    pub(crate) fn render_table(&mut self, ui: &mut egui::Ui) {
        let elements = self.elements;
        let min_tile_width = self.settings.min_tile_width.max(1.0);
        let layout = self.layout.get(elements);

        let available = ui.available_width() - theme::SPACING_XL * 2.0;
        let tile_width = (available / GRID_COLS as f32).floor().max(min_tile_width);

        egui::ScrollArea::both()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                theme::table_frame().show(ui, |ui| {
                    ui.spacing_mut().item_spacing = egui::Vec2::ZERO;

                    let mut hovered = main_grid(ui, layout, tile_width);
                    ui.add_space(theme::SERIES_GAP);
                    for series in [Series::Lanthanide, Series::Actinide] {
                        hovered = series_row(ui, layout, series, tile_width).or(hovered);
                    }

                    if let Some((rect, element)) = hovered {
                        let lifted = egui::Rect::from_center_size(
                            rect.center(),
                            rect.size() * theme::TILE_HOVER_SCALE,
                        );
                        paint_tile(ui.painter(), lifted, element);
                    }
                });
            });
    }
}

fn main_grid<'a>(ui: &mut egui::Ui, layout: &TableLayout<'a>, tile_width: f32) -> Hovered<'a> {
    let mut hovered = None;
    for row in layout.main.rows() {
        ui.horizontal(|ui| {
            for cell in row {
                match cell {
                    Some(element) => {
                        let response = element_tile(ui, element, tile_width);
                        if response.hovered() {
                            hovered = Some((response.rect, *element));
                        }
                    }
                    None => spacer(ui, tile_width),
                }
            }
        });
    }
    hovered
}

fn series_row<'a>(
    ui: &mut egui::Ui,
    layout: &TableLayout<'a>,
    series: Series,
    tile_width: f32,
) -> Hovered<'a> {
    let mut hovered = None;
    ui.horizontal(|ui| {
        for _ in 0..SERIES_LEADING_SPACERS {
            spacer(ui, tile_width);
        }
        for &element in layout.series(series) {
            let response = element_tile(ui, element, tile_width);
            if response.hovered() {
                hovered = Some((response.rect, element));
            }
        }
        spacer(ui, tile_width);
    });
    hovered
}
