//! Configuration for the measurement window.

use egui::Color32;

use crate::data::hotkeys::{format_legend, Hotkeys};
use crate::data::view::ZoomLimits;

/// Colors and sizes of the measurement overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasureLook {
    pub marker_color: Color32,
    pub marker_radius: f32,
    pub line_color: Color32,
    pub line_width: f32,
    pub label_color: Color32,
    /// Label font size in points.
    pub label_size: f32,
}

impl Default for MeasureLook {
    fn default() -> Self {
        Self {
            marker_color: Color32::GREEN,
            marker_radius: 4.0,
            line_color: Color32::RED,
            line_width: 1.5,
            label_color: Color32::YELLOW,
            label_size: 12.0,
        }
    }
}

/// Options for [`run_measure`](crate::run_measure).
pub struct MeasureConfig {
    /// Window title. Defaults to the control legend.
    pub title: String,
    pub hotkeys: Hotkeys,
    pub zoom: ZoomLimits,
    pub look: MeasureLook,
    /// Show the bottom status bar (legend, zoom, point count, cursor position).
    pub status_bar: bool,
    /// Optional eframe native options (e.g., window size). If `None`, defaults
    /// with a 1200x800 window and the crate icon are used.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        let hotkeys = Hotkeys::default();
        Self {
            title: format_legend(&hotkeys),
            hotkeys,
            zoom: ZoomLimits::default(),
            look: MeasureLook::default(),
            status_bar: true,
            native_options: None,
        }
    }
}
