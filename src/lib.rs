//! pixelmeasure crate root: re-exports and module wiring.
//!
//! An interactive pixel distance overlay for a single image, built on
//! egui/eframe and egui_plot:
//! - `data`: points, undo/redo history, view transform, hotkeys and the
//!   per-frame scene description
//! - `image_source`: image decoding
//! - `config`: window and overlay configuration
//! - `app`: the eframe application and [`run_measure`]

pub mod app;
pub mod config;
pub mod data;
pub mod image_source;

pub use app::{run_measure, MeasureApp};
pub use config::{MeasureConfig, MeasureLook};
pub use data::hotkeys::{Hotkey, HotkeyName, Hotkeys, Modifier};
pub use data::measurement::Point;
pub use data::session::{KeyOutcome, MeasureSession};
pub use data::view::{ScrollDirection, ViewTransform, ZoomLimits};
pub use image_source::{load_image, LoadedImage};
