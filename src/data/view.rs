//! View transform between image and display coordinates.
//!
//! `display = image * scale + offset`. Display y grows downward like image rows;
//! plot y (egui_plot) grows upward, so the two differ by a sign on y.

use anyhow::bail;

use super::measurement::Point;

/// Display position to plot coordinates.
pub fn display_to_plot(display: [f64; 2]) -> [f64; 2] {
    [display[0], -display[1]]
}

/// Plot coordinates back to a display position.
pub fn plot_to_display(plot: [f64; 2]) -> [f64; 2] {
    [plot[0], -plot[1]]
}

/// Scroll-wheel zoom parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ZoomLimits {
    /// Factor applied per scroll notch.
    pub step: f64,
    pub min: f64,
    pub max: f64,
}

impl ZoomLimits {
    /// Reject limits that would make clamping panic or let the scale reach
    /// zero: bounds must be finite with `0 < min <= max`, and `step > 1`.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.min.is_finite() && self.max.is_finite()) {
            bail!("zoom limits must be finite (min={}, max={})", self.min, self.max);
        }
        if self.min <= 0.0 {
            bail!("minimum zoom must be positive, got {}", self.min);
        }
        if self.min > self.max {
            bail!("minimum zoom {} exceeds maximum {}", self.min, self.max);
        }
        if !(self.step.is_finite() && self.step > 1.0) {
            bail!("zoom step must be a finite factor above 1, got {}", self.step);
        }
        Ok(())
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            step: 1.2,
            min: 0.1,
            max: 10.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Zoom in.
    Up,
    /// Zoom out.
    Down,
}

impl ScrollDirection {
    /// Direction of a vertical wheel delta. Zero (or non-finite) deltas carry
    /// no direction.
    pub fn from_wheel_delta(dy: f32) -> Option<Self> {
        if dy > 0.0 {
            Some(ScrollDirection::Up)
        } else if dy < 0.0 {
            Some(ScrollDirection::Down)
        } else {
            None
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub offset: [f64; 2],
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: [0.0, 0.0],
        }
    }
}

impl ViewTransform {
    pub fn to_display(&self, p: [f64; 2]) -> [f64; 2] {
        [
            p[0] * self.scale + self.offset[0],
            p[1] * self.scale + self.offset[1],
        ]
    }

    pub fn point_to_display(&self, p: &Point) -> [f64; 2] {
        self.to_display(p.as_f64())
    }

    /// Inverse transform without rounding.
    pub fn to_image(&self, display: [f64; 2]) -> [f64; 2] {
        [
            (display[0] - self.offset[0]) / self.scale,
            (display[1] - self.offset[1]) / self.scale,
        ]
    }

    /// Image pixel under a display position, truncated toward zero.
    pub fn image_point(&self, display: [f64; 2]) -> Point {
        let [x, y] = self.to_image(display);
        Point::new(x as i64, y as i64)
    }

    /// Display-space rectangle `([x_min, x_max], [y_min, y_max])` covered by an
    /// image of the given size.
    pub fn image_extent(&self, width: usize, height: usize) -> ([f64; 2], [f64; 2]) {
        let x0 = self.offset[0];
        let y0 = self.offset[1];
        (
            [x0, x0 + width as f64 * self.scale],
            [y0, y0 + height as f64 * self.scale],
        )
    }

    /// Zoom by one wheel notch keeping the image location under `cursor` fixed.
    pub fn zoom_at(&mut self, direction: ScrollDirection, cursor: [f64; 2], limits: &ZoomLimits) {
        let old_scale = self.scale;
        let wanted = match direction {
            ScrollDirection::Up => old_scale * limits.step,
            ScrollDirection::Down => old_scale / limits.step,
        };
        self.scale = wanted.clamp(limits.min, limits.max);

        let ratio = self.scale / old_scale;
        for axis in 0..2 {
            self.offset[axis] = cursor[axis] - (cursor[axis] - self.offset[axis]) * ratio;
        }
    }
}
