//! Display-space description of one full redraw.
//!
//! Everything is in display coordinates except segment lengths, which are
//! measured on image coordinates so labels do not depend on zoom.

use super::measurement::segments;
use super::session::MeasureSession;

#[derive(Clone, Debug, PartialEq)]
pub struct SegmentShape {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub midpoint: [f64; 2],
    /// Length in image pixels.
    pub length: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Image placement rectangle; also the visible bounds.
    pub x_range: [f64; 2],
    pub y_range: [f64; 2],
    pub markers: Vec<[f64; 2]>,
    pub segments: Vec<SegmentShape>,
}

impl Scene {
    pub fn build(session: &MeasureSession) -> Self {
        let view = session.view();
        let [width, height] = session.image_size();
        let (x_range, y_range) = view.image_extent(width, height);

        let markers = session
            .points()
            .iter()
            .map(|p| view.point_to_display(p))
            .collect();

        let segments = segments(session.points())
            .map(|seg| {
                let from = view.point_to_display(&seg.from);
                let to = view.point_to_display(&seg.to);
                SegmentShape {
                    from,
                    to,
                    midpoint: [(from[0] + to[0]) * 0.5, (from[1] + to[1]) * 0.5],
                    length: seg.length(),
                    label: seg.label(),
                }
            })
            .collect();

        Self {
            x_range,
            y_range,
            markers,
            segments,
        }
    }

    pub fn center(&self) -> [f64; 2] {
        [
            (self.x_range[0] + self.x_range[1]) * 0.5,
            (self.y_range[0] + self.y_range[1]) * 0.5,
        ]
    }

    pub fn size(&self) -> [f64; 2] {
        [
            self.x_range[1] - self.x_range[0],
            self.y_range[1] - self.y_range[0],
        ]
    }
}
