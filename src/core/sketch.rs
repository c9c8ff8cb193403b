//! 2D sketch scratchpad with nearest-shape hit testing.

use serde::{Deserialize, Serialize};

/// Pick radius for hit testing, in sketch units
const PICK_RADIUS: f64 = 5.0;

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance_to(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A 2D line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

/// A 2D circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// Any sketch shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Line(Line),
    Circle(Circle),
}

impl Shape {
    /// Distance from a point to this shape's outline
    fn hit_distance(&self, point: Point) -> f64 {
        match self {
            Shape::Line(line) => point_to_line_distance(point, line),
            Shape::Circle(circle) => (point.distance_to(circle.center) - circle.radius).abs(),
        }
    }
}

/// Perpendicular distance from a point to the infinite line through a
/// segment. A zero-length segment reports an infinite distance so it can
/// never be picked.
fn point_to_line_distance(point: Point, line: &Line) -> f64 {
    let dy = line.end.y - line.start.y;
    let dx = line.end.x - line.start.x;
    let denominator = (dy * dy + dx * dx).sqrt();
    if denominator == 0.0 {
        return f64::INFINITY;
    }
    let numerator =
        (dy * point.x - dx * point.y + line.end.x * line.start.y - line.end.y * line.start.x).abs();
    numerator / denominator
}

/// Ordered container of sketch shapes with nearest-shape picking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SketchPad {
    shapes: Vec<Shape>,
}

impl SketchPad {
    /// Create an empty sketch pad
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line segment and return it
    pub fn add_line(&mut self, start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> Line {
        let line = Line {
            start: Point::new(start_x, start_y),
            end: Point::new(end_x, end_y),
        };
        self.shapes.push(Shape::Line(line));
        line
    }

    /// Add a circle and return it
    pub fn add_circle(&mut self, center_x: f64, center_y: f64, radius: f64) -> Circle {
        let circle = Circle {
            center: Point::new(center_x, center_y),
            radius,
        };
        self.shapes.push(Shape::Circle(circle));
        circle
    }

    /// Remove the first shape equal to the given one
    pub fn remove(&mut self, shape: &Shape) {
        if let Some(position) = self.shapes.iter().position(|s| s == shape) {
            self.shapes.remove(position);
        }
    }

    /// All shapes, in insertion order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Nearest shape within the pick radius of (x, y), if any
    pub fn pick(&self, x: f64, y: f64) -> Option<&Shape> {
        let point = Point::new(x, y);
        let mut best: Option<&Shape> = None;
        let mut best_distance = f64::INFINITY;
        for shape in &self.shapes {
            let distance = shape.hit_distance(point);
            if distance < best_distance {
                best_distance = distance;
                best = Some(shape);
            }
        }
        if best_distance < PICK_RADIUS {
            best
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pick_nearest_line() {
        let mut pad = SketchPad::new();
        pad.add_line(0.0, 0.0, 10.0, 0.0);
        pad.add_line(0.0, 100.0, 10.0, 100.0);
        match pad.pick(5.0, 2.0) {
            Some(Shape::Line(line)) => assert_eq!(line.start.y, 0.0),
            other => panic!("expected the nearer line, got {other:?}"),
        }
    }

    #[test]
    fn test_pick_circle_by_outline() {
        let mut pad = SketchPad::new();
        pad.add_circle(0.0, 0.0, 10.0);
        // Near the outline, not the center.
        assert!(pad.pick(10.5, 0.0).is_some());
        // The center is radius away from the outline, beyond the pick radius.
        assert!(pad.pick(0.0, 0.0).is_none());
    }

    #[test]
    fn test_pick_outside_radius_returns_none() {
        let mut pad = SketchPad::new();
        pad.add_line(0.0, 0.0, 10.0, 0.0);
        assert!(pad.pick(5.0, 20.0).is_none());
    }

    #[test]
    fn test_zero_length_segment_never_picked() {
        let mut pad = SketchPad::new();
        pad.add_line(3.0, 3.0, 3.0, 3.0);
        assert!(pad.pick(3.0, 3.0).is_none());
    }

    #[test]
    fn test_remove_shape() {
        let mut pad = SketchPad::new();
        let circle = pad.add_circle(0.0, 0.0, 4.0);
        assert_eq!(pad.shapes().len(), 1);
        pad.remove(&Shape::Circle(circle));
        assert!(pad.shapes().is_empty());
    }

    #[test]
    fn test_point_to_line_distance() {
        let line = Line {
            start: Point::new(0.0, 0.0),
            end: Point::new(10.0, 0.0),
        };
        assert_relative_eq!(point_to_line_distance(Point::new(5.0, 3.0), &line), 3.0);
    }
}
