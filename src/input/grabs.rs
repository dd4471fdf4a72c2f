//! Transient pointer grab sessions for moving and resizing windows.
//!
//! A grab is created on pointer press, fed pointer positions while the
//! button is held, and dropped on release. Nothing outlives the session
//! except the window's own geometry.

use crate::geometry::{Point, Rect, Size};
use crate::input::CursorIcon;
use crate::window::{Window, WindowState};

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ResizeEdge: u32 {
        const NONE = 0;
        const TOP = 1;
        const BOTTOM = 2;
        const LEFT = 4;
        const TOP_LEFT = 5;
        const BOTTOM_LEFT = 6;
        const RIGHT = 8;
        const TOP_RIGHT = 9;
        const BOTTOM_RIGHT = 10;
    }
}

impl ResizeEdge {
    /// Hit-test a point against the resize border of `bounds`.
    ///
    /// `thickness` is the configured edge size; the effective zone is capped
    /// at a third of the smaller dimension. Points outside the bounds return
    /// `NONE`.
    pub fn hit_test(bounds: &Rect, thickness: f64, point: Point) -> ResizeEdge {
        if !bounds.contains(point) {
            return ResizeEdge::NONE;
        }
        let t = thickness.min((bounds.w.min(bounds.h) / 3.0).max(0.0));
        let mut edges = ResizeEdge::NONE;
        if point.x < bounds.x + t {
            edges |= ResizeEdge::LEFT;
        } else if point.x >= bounds.right() - t {
            edges |= ResizeEdge::RIGHT;
        }
        if point.y < bounds.y + t {
            edges |= ResizeEdge::TOP;
        } else if point.y >= bounds.bottom() - t {
            edges |= ResizeEdge::BOTTOM;
        }
        edges
    }

    /// Degrade the edge for a minimized window: diagonals fall back to their
    /// lateral direction, and pure vertical resizing is disallowed.
    pub fn degrade_for_minimized(self) -> ResizeEdge {
        if self.intersects(ResizeEdge::LEFT) {
            ResizeEdge::LEFT
        } else if self.intersects(ResizeEdge::RIGHT) {
            ResizeEdge::RIGHT
        } else {
            ResizeEdge::NONE
        }
    }

    /// The cursor shape matching this edge.
    pub fn cursor(self) -> CursorIcon {
        if self == ResizeEdge::TOP {
            CursorIcon::NResize
        } else if self == ResizeEdge::BOTTOM {
            CursorIcon::SResize
        } else if self == ResizeEdge::LEFT {
            CursorIcon::WResize
        } else if self == ResizeEdge::RIGHT {
            CursorIcon::EResize
        } else if self == ResizeEdge::TOP_LEFT {
            CursorIcon::NwResize
        } else if self == ResizeEdge::TOP_RIGHT {
            CursorIcon::NeResize
        } else if self == ResizeEdge::BOTTOM_LEFT {
            CursorIcon::SwResize
        } else if self == ResizeEdge::BOTTOM_RIGHT {
            CursorIcon::SeResize
        } else {
            CursorIcon::Default
        }
    }
}

/// Active title-bar drag session.
#[derive(Debug, Clone, Copy)]
pub struct MoveGrab {
    /// Scale-corrected pointer position at press time.
    pub start: Point,
    /// Window location at press time.
    pub initial_window_location: Point,
}

impl MoveGrab {
    pub fn new(start: Point, window: &Window) -> Self {
        Self {
            start,
            initial_window_location: window.bounds().location(),
        }
    }

    /// Apply a pointer position to the window.
    ///
    /// The move is only applied while the pointer remains inside the parent
    /// bounds, so the window can never be dragged fully out of reach.
    pub fn motion(&self, window: &mut Window, pointer: Point, parent: &Rect) -> bool {
        if !parent.contains(pointer) {
            return false;
        }
        let (dx, dy) = pointer.delta(self.start);
        window.set_location(Point::new(
            self.initial_window_location.x + dx,
            self.initial_window_location.y + dy,
        ));
        true
    }
}

/// Active resize session.
#[derive(Debug, Clone, Copy)]
pub struct ResizeGrab {
    /// Scale-corrected pointer position at press time.
    pub start: Point,
    pub edges: ResizeEdge,
    pub initial_window_location: Point,
    pub initial_window_size: Size,
    pub last_window_size: Size,
}

impl ResizeGrab {
    pub fn new(start: Point, edges: ResizeEdge, window: &Window) -> Self {
        let bounds = window.bounds();
        Self {
            start,
            edges,
            initial_window_location: bounds.location(),
            initial_window_size: bounds.size(),
            last_window_size: bounds.size(),
        }
    }

    /// Apply a pointer position to the window, resizing along the engaged
    /// edges with independent width/height clamping. The location only
    /// shifts together with a dimension that actually changed, so clamping
    /// never drifts the opposite edge.
    pub fn motion(&mut self, window: &mut Window, pointer: Point) {
        let (mut dx, mut dy) = pointer.delta(self.start);

        let mut new_window_width = self.initial_window_size.w;
        let mut new_window_height = self.initial_window_size.h;

        let left_right = ResizeEdge::LEFT | ResizeEdge::RIGHT;
        let top_bottom = ResizeEdge::TOP | ResizeEdge::BOTTOM;

        if self.edges.intersects(left_right) {
            if self.edges.intersects(ResizeEdge::LEFT) {
                dx = -dx;
            }
            new_window_width = self.initial_window_size.w + dx;
        }

        if self.edges.intersects(top_bottom) {
            if self.edges.intersects(ResizeEdge::TOP) {
                dy = -dy;
            }
            new_window_height = self.initial_window_size.h + dy;
        }

        let min = window.min_size_or_zero();
        let max = window.max_size.unwrap_or_default();
        let clamped = Rect::new(0.0, 0.0, new_window_width, new_window_height)
            .clamp_size(min, max)
            .size();
        self.last_window_size = clamped;

        let mut location = self.initial_window_location;
        if self.edges.intersects(ResizeEdge::LEFT) {
            location.x += self.initial_window_size.w - clamped.w;
        }
        if self.edges.intersects(ResizeEdge::TOP) {
            location.y += self.initial_window_size.h - clamped.h;
        }

        window.set_bounds(Rect::new(location.x, location.y, clamped.w, clamped.h));
    }
}

/// Pick the resize edge for a pointer position over a window, honoring the
/// minimized degradation rule.
pub fn edge_for_window(window: &Window, point: Point) -> ResizeEdge {
    let edge = ResizeEdge::hit_test(&window.bounds(), window.effective_edge_size(), point);
    if window.state() == WindowState::Minimized {
        edge.degrade_for_minimized()
    } else {
        edge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_at(x: f64, y: f64, w: f64, h: f64) -> Window {
        Window::new("w").with_bounds(Rect::new(x, y, w, h))
    }

    #[test]
    fn hit_test_finds_all_corners() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(
            ResizeEdge::hit_test(&bounds, 5.0, Point::new(2.0, 2.0)),
            ResizeEdge::TOP_LEFT
        );
        assert_eq!(
            ResizeEdge::hit_test(&bounds, 5.0, Point::new(98.0, 2.0)),
            ResizeEdge::TOP_RIGHT
        );
        assert_eq!(
            ResizeEdge::hit_test(&bounds, 5.0, Point::new(2.0, 98.0)),
            ResizeEdge::BOTTOM_LEFT
        );
        assert_eq!(
            ResizeEdge::hit_test(&bounds, 5.0, Point::new(98.0, 98.0)),
            ResizeEdge::BOTTOM_RIGHT
        );
        assert_eq!(
            ResizeEdge::hit_test(&bounds, 5.0, Point::new(50.0, 50.0)),
            ResizeEdge::NONE
        );
    }

    #[test]
    fn minimized_windows_lose_vertical_edges() {
        assert_eq!(
            ResizeEdge::TOP_LEFT.degrade_for_minimized(),
            ResizeEdge::LEFT
        );
        assert_eq!(
            ResizeEdge::BOTTOM_RIGHT.degrade_for_minimized(),
            ResizeEdge::RIGHT
        );
        assert_eq!(ResizeEdge::TOP.degrade_for_minimized(), ResizeEdge::NONE);
        assert_eq!(ResizeEdge::BOTTOM.degrade_for_minimized(), ResizeEdge::NONE);
    }

    #[test]
    fn resize_clamps_to_min_and_max() {
        let mut window = window_at(0.0, 0.0, 100.0, 100.0);
        window.min_size = Some(Size::new(50.0, 50.0));
        window.max_size = Some(Size::new(200.0, 200.0));

        let mut grab = ResizeGrab::new(Point::new(100.0, 50.0), ResizeEdge::RIGHT, &window);
        grab.motion(&mut window, Point::new(-900.0, 50.0));
        assert_eq!(window.bounds().w, 50.0);

        grab.motion(&mut window, Point::new(1100.0, 50.0));
        assert_eq!(window.bounds().w, 200.0);
    }

    #[test]
    fn left_resize_shifts_x_only_by_applied_width() {
        let mut window = window_at(100.0, 100.0, 100.0, 100.0);
        window.min_size = Some(Size::new(50.0, 50.0));

        let mut grab = ResizeGrab::new(Point::new(100.0, 150.0), ResizeEdge::LEFT, &window);
        // Push far right: width clamps at 50, so x moves exactly 50, no drift.
        grab.motion(&mut window, Point::new(400.0, 150.0));
        assert_eq!(window.bounds().w, 50.0);
        assert_eq!(window.bounds().x, 150.0);
    }

    #[test]
    fn move_grab_ignores_pointers_outside_parent() {
        let parent = Rect::new(0.0, 0.0, 500.0, 500.0);
        let mut window = window_at(10.0, 10.0, 100.0, 100.0);
        let grab = MoveGrab::new(Point::new(50.0, 20.0), &window);

        assert!(grab.motion(&mut window, Point::new(80.0, 10.0), &parent));
        assert_eq!(window.bounds().location(), Point::new(40.0, 0.0));

        // Pointer left the parent: position stays where it was.
        assert!(!grab.motion(&mut window, Point::new(900.0, 10.0), &parent));
        assert_eq!(window.bounds().location(), Point::new(40.0, 0.0));
    }
}
