use eframe::egui;
use egui_phosphor::regular as icons;

use crate::data::hotkeys::{format_button_tooltip, get_hotkey_for_name, HotkeyName};

use super::MeasureApp;

impl MeasureApp {
    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let can_undo = self.session.log().can_undo();
                let can_redo = self.session.log().can_redo();
                let undo_tip =
                    format_button_tooltip("Undo", get_hotkey_for_name(&self.hotkeys, HotkeyName::Undo));
                let redo_tip =
                    format_button_tooltip("Redo", get_hotkey_for_name(&self.hotkeys, HotkeyName::Redo));

                if ui
                    .add_enabled(can_undo, egui::Button::new(icons::ARROW_COUNTER_CLOCKWISE))
                    .on_hover_text(undo_tip)
                    .clicked()
                {
                    self.apply_key(ctx, HotkeyName::Undo);
                }
                if ui
                    .add_enabled(can_redo, egui::Button::new(icons::ARROW_CLOCKWISE))
                    .on_hover_text(redo_tip)
                    .clicked()
                {
                    self.apply_key(ctx, HotkeyName::Redo);
                }
                ui.separator();

                ui.label(format!("{} {}", icons::RULER, self.legend));
                ui.separator();

                let view = self.session.view();
                ui.label(format!("{} {:.0}%", icons::MAGNIFYING_GLASS, view.scale * 100.0));
                ui.separator();
                ui.label(format!("{} point(s)", self.session.points().len()));

                if let Some(p) = self.hover_pixel {
                    ui.separator();
                    ui.label(format!("x={} y={}", p.x, p.y));
                }
            });
        });
    }
}
