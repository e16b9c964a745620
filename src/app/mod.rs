//! App module - contains the main application state and logic

mod table;

use crate::layout::LayoutCache;
use crate::settings::Settings;
use crate::theme;
use crate::types::ElementRecord;
use eframe::egui;
use std::path::PathBuf;
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) elements: &'static [ElementRecord],
    pub(crate) layout: LayoutCache<'static>,
    pub(crate) settings: Settings,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        elements: &'static [ElementRecord],
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        let layout = LayoutCache::new(elements);
        {
            let resolved = layout.layout();
            info!(
                main = resolved.main.occupied().count(),
                lanthanides = resolved.lanthanides.len(),
                actinides = resolved.actinides.len(),
                dropped = elements.len() - resolved.placed_count(),
                "Layout resolved"
            );
        }

        Self {
            elements,
            layout,
            settings,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&mut self) {
        if let Some(pos) = self.window_pos {
            self.settings.window_x = Some(pos.x);
            self.settings.window_y = Some(pos.y);
        }
        if let Some(size) = self.window_size {
            self.settings.window_w = Some(size.x);
            self.settings.window_h = Some(size.y);
        }
        self.settings.save(&self.data_dir);
    }
}
