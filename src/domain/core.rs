//! Core geometric types shared by the layout configuration and the UI.

/// Rectangle in client-area pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Creates a new rectangle
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns the right edge coordinate
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Returns the bottom edge coordinate
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Returns the overlapping area of two rectangles, or None if they are disjoint
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if left < right && top < bottom {
            Some(Rect::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        let field = Rect::new(12, 12, 120, 24);
        assert_eq!(field.right(), 132);
        assert_eq!(field.bottom(), 36);
    }

    #[test]
    fn adjacent_controls_do_not_intersect() {
        let add = Rect::new(0, 0, 40, 28);
        let subtract = Rect::new(40, 0, 40, 28);
        assert!(add.intersection(&subtract).is_none());

        let overlapping = Rect::new(30, 10, 40, 28);
        assert_eq!(add.intersection(&overlapping), Some(Rect::new(30, 10, 10, 18)));
    }
}
