//! Axis-aligned rectangles in canvas pixels and the containment tests every
//! interactive element relies on.

use crate::error::Error;

/// Integer rectangle given by its top-left (x1, y1) and bottom-right (x2, y2)
/// corners. Always has a positive area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

impl Rect {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Result<Self, Error> {
        if x1 >= x2 || y1 >= y2 {
            return Err(Error::DegenerateRect(x1, y1, x2, y2));
        }
        Ok(Self { x1, y1, x2, y2 })
    }
    /// Rectangle from its top-left corner and a size.
    pub fn from_origin_size(x: i32, y: i32, w: i32, h: i32) -> Result<Self, Error> {
        Self::new(x, y, x + w, y + h)
    }
    pub fn x1(&self) -> i32 {
        self.x1
    }
    pub fn y1(&self) -> i32 {
        self.y1
    }
    pub fn x2(&self) -> i32 {
        self.x2
    }
    pub fn y2(&self) -> i32 {
        self.y2
    }
    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }
    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }
    pub fn center(&self) -> (i32, i32) {
        (self.x1 + self.width() / 2, self.y1 + self.height() / 2)
    }
    /// Strict containment: points on the border are outside.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x > self.x1 && y > self.y1 && x < self.x2 && y < self.y2
    }
    /// Same as [`Rect::contains`] with the horizontal extent widened by `pad`
    /// on both sides. The vertical extent is left as is.
    pub fn contains_padded(&self, x: i32, y: i32, pad: i32) -> bool {
        x > self.x1 - pad && y > self.y1 && x < self.x2 + pad && y < self.y2
    }
}

impl From<Rect> for egui::Rect {
    fn from(r: Rect) -> Self {
        egui::Rect::from_min_max(
            egui::pos2(r.x1 as f32, r.y1 as f32),
            egui::pos2(r.x2 as f32, r.y2 as f32),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_degenerate() {
        assert!(Rect::new(10, 10, 10, 20).is_err());
        assert!(Rect::new(10, 20, 30, 20).is_err());
        assert!(Rect::new(30, 10, 10, 20).is_err());
        assert!(Rect::new(0, 0, 1, 1).is_ok());
    }

    #[test]
    fn interior_points_hit() {
        let r = Rect::new(10, 20, 110, 70).unwrap();
        for x in 11..110 {
            for y in 21..70 {
                assert!(r.contains(x, y), "({x},{y}) should be inside");
            }
        }
    }

    #[test]
    fn boundary_points_miss() {
        let r = Rect::new(10, 20, 110, 70).unwrap();
        for x in 10..=110 {
            assert!(!r.contains(x, 20));
            assert!(!r.contains(x, 70));
        }
        for y in 20..=70 {
            assert!(!r.contains(10, y));
            assert!(!r.contains(110, y));
        }
        assert!(!r.contains(0, 0));
    }

    #[test]
    fn padding_only_widens_horizontally() {
        let r = Rect::new(100, 100, 200, 120).unwrap();
        assert!(!r.contains(95, 110));
        assert!(r.contains_padded(95, 110, 10));
        assert!(r.contains_padded(209, 110, 10));
        assert!(!r.contains_padded(90, 110, 10));
        assert!(!r.contains_padded(210, 110, 10));
        // y-bounds are never padded
        assert!(!r.contains_padded(150, 100, 10));
        assert!(!r.contains_padded(150, 120, 10));
    }

    #[test]
    fn size_and_center() {
        let r = Rect::from_origin_size(10, 10, 40, 20).unwrap();
        assert_eq!(r.width(), 40);
        assert_eq!(r.height(), 20);
        assert_eq!(r.center(), (30, 20));
    }
}
