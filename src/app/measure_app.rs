use anyhow::Context;
use eframe::egui;

use crate::config::{MeasureConfig, MeasureLook};
use crate::data::hotkeys::{detect_hotkey_actions, HotkeyName, Hotkeys};
use crate::data::measurement::Point;
use crate::data::session::{KeyOutcome, MeasureSession};
use crate::image_source::LoadedImage;

/// Standalone measurement window implementing [`eframe::App`].
///
/// Owns the single [`MeasureSession`] and hands it every input event. egui
/// repaints the whole frame, so each handled event results in a full redraw.
pub struct MeasureApp {
    pub(super) session: MeasureSession,
    pub(super) image: LoadedImage,
    pub(super) texture: Option<egui::TextureHandle>,
    pub(super) hotkeys: Hotkeys,
    pub(super) look: MeasureLook,
    pub(super) legend: String,
    pub(super) show_status_bar: bool,
    /// Image pixel under the pointer, resolved with the view it was drawn with.
    pub(super) hover_pixel: Option<Point>,
}

impl MeasureApp {
    pub fn new(image: LoadedImage, cfg: &MeasureConfig) -> anyhow::Result<Self> {
        let session = MeasureSession::with_zoom_limits(image.width, image.height, cfg.zoom)
            .context("invalid zoom configuration")?;
        Ok(Self {
            session,
            image,
            texture: None,
            hotkeys: cfg.hotkeys.clone(),
            look: cfg.look.clone(),
            legend: crate::data::hotkeys::format_legend(&cfg.hotkeys),
            show_status_bar: cfg.status_bar,
            hover_pixel: None,
        })
    }

    pub fn session(&self) -> &MeasureSession {
        &self.session
    }

    /// Upload the image on first use; later frames reuse the texture.
    pub(super) fn texture_id(&mut self, ctx: &egui::Context) -> egui::TextureId {
        let image = &self.image;
        self.texture
            .get_or_insert_with(|| {
                ctx.load_texture(
                    image.display_name(),
                    image.to_color_image(),
                    egui::TextureOptions::NEAREST,
                )
            })
            .id()
    }

    /// Apply one key action. Returns `true` if the window should close.
    pub(super) fn apply_key(&mut self, ctx: &egui::Context, key: HotkeyName) -> bool {
        match self.session.on_key(key) {
            KeyOutcome::Redraw => {
                ctx.request_repaint();
                false
            }
            KeyOutcome::Unchanged => false,
            KeyOutcome::Quit => {
                log::info!("quit requested");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                true
            }
        }
    }

    fn handle_hotkeys(&mut self, ctx: &egui::Context) {
        for action in detect_hotkey_actions(&self.hotkeys, ctx) {
            if self.apply_key(ctx, action) {
                break;
            }
        }
    }
}

impl eframe::App for MeasureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_hotkeys(ctx);
        if self.show_status_bar {
            self.render_status_bar(ctx);
        }
        self.render_central_plot_panel(ctx);
    }
}
