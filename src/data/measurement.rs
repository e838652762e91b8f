use std::fmt;

/// A clicked location in image-pixel coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other` in image pixels.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        dx.hypot(dy)
    }

    pub fn as_f64(&self) -> [f64; 2] {
        [self.x as f64, self.y as f64]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Distance label text, e.g. `5.0px`.
pub fn format_distance(distance: f64) -> String {
    format!("{:.1}px", distance)
}

/// Two consecutive points of the point list.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.from.distance_to(&self.to)
    }

    pub fn label(&self) -> String {
        format_distance(self.length())
    }
}

/// Segments between every pair of consecutive points, in click order.
pub fn segments(points: &[Point]) -> impl Iterator<Item = Segment> + '_ {
    points.windows(2).map(|w| Segment {
        from: w[0],
        to: w[1],
    })
}
