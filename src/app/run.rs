//! Top-level entry point for running the measurement window.

use anyhow::anyhow;
use eframe::egui;

use crate::config::MeasureConfig;
use crate::image_source::LoadedImage;

use super::MeasureApp;

/// Open a native window measuring `image` and block until it is closed.
///
/// Uses `cfg.native_options` if given, otherwise a 1200x800 window with the
/// crate icon.
pub fn run_measure(image: LoadedImage, mut cfg: MeasureConfig) -> anyhow::Result<()> {
    let app = MeasureApp::new(image, &cfg)?;

    let title = cfg.title.clone();
    let mut opts = cfg.native_options.take().unwrap_or_default();

    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1200.0, 800.0));
    }

    log::info!("starting session: {}", title);
    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow!("failed to run the measurement window: {e}"))
}

const ICON_SIZE: u32 = 64;

/// Rasterize the bundled `icon.svg` to a square window icon.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let tree = usvg::Tree::from_data(include_bytes!("../../icon.svg"), &usvg::Options::default()).ok()?;
    let svg = tree.size();
    let fit = ICON_SIZE as f32 / svg.width().max(svg.height());

    let mut pixmap = tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE)?;
    resvg::render(&tree, tiny_skia::Transform::from_scale(fit, fit), &mut pixmap.as_mut());
    Some(egui::IconData {
        rgba: pixmap.take(),
        width: ICON_SIZE,
        height: ICON_SIZE,
    })
}
