//! eframe application for the measurement window.
//!
//! | Sub-module      | Responsibility |
//! | --------------- | -------------- |
//! | [`measure_app`] | [`MeasureApp`] state and the per-frame `update` |
//! | [`plot`]        | Image + overlay rendering and plot input routing |
//! | [`status_bar`]  | Bottom bar with legend, zoom, point count and undo/redo buttons |
//! | [`run`]         | [`run_measure()`] entry point and icon loading |

mod measure_app;
mod plot;
mod run;
mod status_bar;

pub use measure_app::MeasureApp;
pub use run::run_measure;
