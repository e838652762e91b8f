//! The annotator state record and its input handlers.
//!
//! [`MeasureSession`] owns everything that changes while the window is open:
//! the point list with its undo/redo stacks and the view transform. Each
//! handler runs to completion and reports whether a redraw is needed.

use super::history::MeasurementLog;
use super::hotkeys::HotkeyName;
use super::measurement::Point;
use super::view::{ScrollDirection, ViewTransform, ZoomLimits};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Unchanged,
    Redraw,
    Quit,
}

#[derive(Clone, Debug)]
pub struct MeasureSession {
    image_size: [usize; 2],
    log: MeasurementLog,
    view: ViewTransform,
    zoom: ZoomLimits,
}

impl MeasureSession {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            image_size: [width, height],
            log: MeasurementLog::new(),
            view: ViewTransform::default(),
            zoom: ZoomLimits::default(),
        }
    }

    /// Session with custom zoom limits. Fails if the limits are unusable
    /// (see [`ZoomLimits::validate`]).
    pub fn with_zoom_limits(width: usize, height: usize, zoom: ZoomLimits) -> anyhow::Result<Self> {
        zoom.validate()?;
        Ok(Self {
            zoom,
            ..Self::new(width, height)
        })
    }

    /// Pointer press at a display position. `None` means the press was outside
    /// the image display region and is ignored.
    ///
    /// Points are not checked against the image size.
    pub fn on_click(&mut self, display: Option<[f64; 2]>) -> bool {
        let Some(display) = display else {
            return false;
        };
        let point = self.view.image_point(display);
        self.log.add_point(point);
        log::debug!("added point {} (#{})", point, self.log.points().len());
        true
    }

    pub fn on_key(&mut self, key: HotkeyName) -> KeyOutcome {
        match key {
            HotkeyName::Undo => {
                if self.log.undo() {
                    log::debug!("undo, {} point(s) left", self.log.points().len());
                    KeyOutcome::Redraw
                } else {
                    KeyOutcome::Unchanged
                }
            }
            HotkeyName::Redo => {
                if self.log.redo() {
                    log::debug!("redo, {} point(s)", self.log.points().len());
                    KeyOutcome::Redraw
                } else {
                    KeyOutcome::Unchanged
                }
            }
            HotkeyName::Quit => KeyOutcome::Quit,
        }
    }

    /// Wheel zoom toward `cursor`. Events without a direction or without a
    /// cursor position leave the view untouched.
    pub fn on_scroll(
        &mut self,
        direction: Option<ScrollDirection>,
        cursor: Option<[f64; 2]>,
    ) -> bool {
        let Some(direction) = direction else {
            return false;
        };
        let Some(cursor) = cursor else {
            log::warn!("ignoring {:?} scroll without a cursor position", direction);
            return false;
        };
        self.view.zoom_at(direction, cursor, &self.zoom);
        log::debug!(
            "zoom {:?} at ({:.1}, {:.1}) -> scale {:.3}, offset ({:.1}, {:.1})",
            direction,
            cursor[0],
            cursor[1],
            self.view.scale,
            self.view.offset[0],
            self.view.offset[1]
        );
        true
    }

    pub fn points(&self) -> &[Point] {
        self.log.points()
    }

    pub fn log(&self) -> &MeasurementLog {
        &self.log
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn image_size(&self) -> [usize; 2] {
        self.image_size
    }

    pub fn zoom_limits(&self) -> &ZoomLimits {
        &self.zoom
    }
}
