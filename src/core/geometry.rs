use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Point in device space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Slack for the containment tests, so a point computed onto an edge with
/// rounding noise still counts as inside.
const EDGE_TOLERANCE: f64 = 1e-9;

/// Axis-aligned rectangle in device space.
///
/// Device space is y-down: `min.y` is the top edge and `max.y` the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    #[must_use]
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            min: Point::new(left, top),
            max: Point::new(right, bottom),
        }
    }

    #[must_use]
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::from_ltrb(left, top, left + width, top + height)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.max.y - self.min.y
    }

    /// A rectangle with no area (or inverted edges) draws nothing.
    #[must_use]
    pub fn is_empty(self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    /// Boundary-inclusive containment test, widened by `EDGE_TOLERANCE`.
    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        self.contains_x(point.x) && self.contains_y(point.y)
    }

    #[must_use]
    pub fn contains_x(self, x: f64) -> bool {
        self.min.x - EDGE_TOLERANCE <= x && x <= self.max.x + EDGE_TOLERANCE
    }

    #[must_use]
    pub fn contains_y(self, y: f64) -> bool {
        self.min.y - EDGE_TOLERANCE <= y && y <= self.max.y + EDGE_TOLERANCE
    }

    /// Shrinks every edge inward by the given insets.
    #[must_use]
    pub fn inset(self, left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::from_ltrb(
            self.min.x + left,
            self.min.y + top,
            self.max.x - right,
            self.max.y - bottom,
        )
    }
}

/// Vertex list of one visible polyline piece.
pub type Polyline = SmallVec<[Point; 4]>;

/// Clips a polyline against the horizontal band `min_y..=max_y`.
///
/// Segments entirely outside the band are dropped and straddling segments are
/// truncated at the band edge, so the result may contain several disjoint
/// pieces. Inputs with fewer than two points produce nothing.
#[must_use]
pub fn clip_polyline_y(points: &[Point], min_y: f64, max_y: f64) -> Vec<Polyline> {
    let mut pieces = Vec::new();
    let mut current = Polyline::new();

    for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        match clip_segment_y(from, to, min_y, max_y) {
            Some((start, end)) => {
                if current.last() != Some(&start) {
                    flush(&mut pieces, &mut current);
                    current.push(start);
                }
                current.push(end);
                if end != to {
                    flush(&mut pieces, &mut current);
                }
            }
            None => flush(&mut pieces, &mut current),
        }
    }
    flush(&mut pieces, &mut current);
    pieces
}

fn flush(pieces: &mut Vec<Polyline>, current: &mut Polyline) {
    if current.len() >= 2 {
        pieces.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

/// Parametric clip of one segment against `min_y..=max_y`.
fn clip_segment_y(from: Point, to: Point, min_y: f64, max_y: f64) -> Option<(Point, Point)> {
    let dy = to.y - from.y;
    if dy == 0.0 {
        return (min_y <= from.y && from.y <= max_y).then_some((from, to));
    }

    let t_min = (min_y - from.y) / dy;
    let t_max = (max_y - from.y) / dy;
    let (enter, enter_y, exit, exit_y) = if t_min < t_max {
        (t_min, min_y, t_max, max_y)
    } else {
        (t_max, max_y, t_min, min_y)
    };
    if enter.max(0.0) > exit.min(1.0) {
        return None;
    }

    // Truncated endpoints are pinned to the band edge they were cut at.
    let dx = to.x - from.x;
    let start = if enter > 0.0 {
        Point::new(from.x + dx * enter, enter_y)
    } else {
        from
    };
    let end = if exit < 1.0 {
        Point::new(from.x + dx * exit, exit_y)
    } else {
        to
    };
    Some((start, end))
}

/// Clips a polygon against the horizontal band `min_y..=max_y`.
///
/// The polygon is implicitly closed; a trailing vertex equal to the first is
/// ignored. Returns an empty list when fewer than three vertices survive.
#[must_use]
pub fn clip_polygon_y(points: &[Point], min_y: f64, max_y: f64) -> Vec<Point> {
    let ring = match points {
        [first, .., last] if first == last => &points[..points.len() - 1],
        _ => points,
    };
    if ring.len() < 3 {
        return Vec::new();
    }

    let upper = clip_ring_against(ring, min_y, |y| y >= min_y);
    let clipped = clip_ring_against(&upper, max_y, |y| y <= max_y);
    if clipped.len() < 3 {
        return Vec::new();
    }
    clipped
}

/// One Sutherland–Hodgman pass against the horizontal line `y = edge_y`.
fn clip_ring_against(ring: &[Point], edge_y: f64, inside: impl Fn(f64) -> bool) -> Vec<Point> {
    let mut out = Vec::with_capacity(ring.len() + 2);
    let Some(&last) = ring.last() else {
        return out;
    };

    let mut previous = last;
    for &current in ring {
        let current_in = inside(current.y);
        let previous_in = inside(previous.y);
        if current_in {
            if !previous_in {
                out.push(intersect_y(previous, current, edge_y));
            }
            out.push(current);
        } else if previous_in {
            out.push(intersect_y(previous, current, edge_y));
        }
        previous = current;
    }
    out
}

fn intersect_y(from: Point, to: Point, edge_y: f64) -> Point {
    let t = (edge_y - from.y) / (to.y - from.y);
    Point::new(from.x + (to.x - from.x) * t, edge_y)
}
