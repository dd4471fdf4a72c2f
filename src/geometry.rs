//! Rectangle math for window placement and hit testing.
//!
//! All coordinates are in scene units (`f64`), since windows can live under
//! arbitrarily scaled ancestors and carry fractional zoom factors.

use serde::{Deserialize, Serialize};

use crate::error::{VerandaError, VerandaResult};

/// A point in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    pub fn delta(&self, other: Point) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// A width/height pair. Negative components are clamped to zero on
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub fn new(w: f64, h: f64) -> Self {
        Self {
            w: w.max(0.0),
            h: h.max(0.0),
        }
    }
}

impl From<(f64, f64)> for Size {
    fn from((w, h): (f64, f64)) -> Self {
        Size::new(w, h)
    }
}

/// An axis-aligned rectangle in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x,
            y,
            w: w.max(0.0),
            h: h.max(0.0),
        }
    }

    pub fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Intersection of two rectangles, or `None` when they are disjoint or
    /// the overlap is degenerate.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right > x && bottom > y {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Clamp width and height independently into `[min, max]`.
    ///
    /// `min` components below zero count as zero; `max` components of zero
    /// mean "unbounded" for that axis.
    pub fn clamp_size(&self, min: Size, max: Size) -> Rect {
        let min_w = min.w.max(0.0);
        let min_h = min.h.max(0.0);
        let max_w = if max.w <= 0.0 { f64::INFINITY } else { max.w };
        let max_h = if max.h <= 0.0 { f64::INFINITY } else { max.h };
        Rect::new(
            self.x,
            self.y,
            self.w.max(min_w).min(max_w),
            self.h.max(min_h).min(max_h),
        )
    }

    /// Shift this rectangle the minimal amount so it stays reachable inside
    /// `outer`. Used after zoom changes so a grown window cannot end up with
    /// its title bar outside the visible container area.
    pub fn clamp_into(&self, outer: &Rect) -> Rect {
        let mut x = self.x;
        let mut y = self.y;
        if x + self.w > outer.right() {
            x = outer.right() - self.w;
        }
        if x < outer.x {
            x = outer.x;
        }
        if y + self.h > outer.bottom() {
            y = outer.bottom() - self.h;
        }
        if y < outer.y {
            y = outer.y;
        }
        Rect::new(x, y, self.w, self.h)
    }

    pub fn with_location(&self, location: Point) -> Rect {
        Rect::new(location.x, location.y, self.w, self.h)
    }
}

/// Correct a scene-coordinate pointer position for accumulated ancestor
/// scaling. A pointer delta measured in scene units must be divided by the
/// ancestor scale before it is applied to a node's local coordinates.
pub fn scene_to_local(point: Point, scale: f64) -> VerandaResult<Point> {
    if scale <= 0.0 || !scale.is_finite() {
        return Err(VerandaError::InvalidOperation(format!(
            "ancestor scale must be positive and finite, got {scale}"
        )));
    }
    Ok(Point::new(point.x / scale, point.y / scale))
}

/// Default initial placement: cascade windows diagonally from the container
/// origin, wrapping back once the offset would push the window past the
/// container's lower-right quarter.
pub fn cascade_position(container: &Rect, window: Size, index: usize, step: f64) -> Point {
    let max_x = (container.w - window.w).max(0.0);
    let max_y = (container.h - window.h).max(0.0);
    let limit = (max_x.min(max_y) / step).floor().max(1.0) as usize;
    let offset = (index % limit) as f64 * step;
    Point::new(container.x + offset.min(max_x), container.y + offset.min(max_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection_of_disjoint_rects_is_none() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 10.0, 10.0);
        assert!(a.intersection(&b).is_none());
        assert!(!a.intersects(&b));
    }

    #[test]
    fn clamp_size_honors_min_and_max() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        let clamped = r.clamp_size(Size::new(50.0, 50.0), Size::new(200.0, 200.0));
        assert_eq!(clamped.w, 100.0);
        let shrunk = Rect::new(0.0, 0.0, 10.0, 10.0).clamp_size(Size::new(50.0, 0.0), Size::default());
        assert_eq!(shrunk.w, 50.0);
        let grown = Rect::new(0.0, 0.0, 500.0, 10.0).clamp_size(Size::default(), Size::new(200.0, 0.0));
        assert_eq!(grown.w, 200.0);
    }

    #[test]
    fn clamp_into_pulls_rect_back_inside() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let r = Rect::new(90.0, -20.0, 30.0, 30.0).clamp_into(&outer);
        assert_eq!(r.x, 70.0);
        assert_eq!(r.y, 0.0);
    }

    #[test]
    fn scene_to_local_rejects_degenerate_scale() {
        assert!(scene_to_local(Point::new(10.0, 10.0), 0.0).is_err());
        let p = scene_to_local(Point::new(10.0, 30.0), 2.0).unwrap();
        assert_eq!(p, Point::new(5.0, 15.0));
    }

    #[test]
    fn cascade_wraps_within_container() {
        let container = Rect::new(0.0, 0.0, 400.0, 400.0);
        for i in 0..32 {
            let p = cascade_position(&container, Size::new(200.0, 150.0), i, 24.0);
            assert!(p.x + 200.0 <= container.right() + f64::EPSILON);
            assert!(p.y + 150.0 <= container.bottom() + f64::EPSILON);
        }
    }
}
