//! Geometric primitives and length units.
//!
//! All coordinates are PDF user-space points (1/72 inch) with the origin at
//! the bottom-left corner of the page and y growing upwards.

/// Points per inch.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Convert centimetres to points.
///
/// # Examples
///
/// ```
/// use recette_pdf::geometry::cm;
///
/// assert!((cm(2.54) - 72.0).abs() < 1e-4);
/// ```
pub fn cm(value: f32) -> f32 {
    value * POINTS_PER_INCH / 2.54
}

/// Convert millimetres to points.
pub fn mm(value: f32) -> f32 {
    cm(value / 10.0)
}

/// A 2D point in page space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in page space, anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// X coordinate of the bottom-left corner
    pub x: f32,
    /// Y coordinate of the bottom-left corner
    pub y: f32,
    /// Width of rectangle
    pub width: f32,
    /// Height of rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use recette_pdf::geometry::Rect;
    ///
    /// let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
    /// assert_eq!(rect.right(), 110.0);
    /// assert_eq!(rect.top(), 70.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge x-coordinate.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.y
    }

    /// Top edge y-coordinate.
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cm_and_mm() {
        assert!((cm(1.0) - 28.346_457).abs() < 1e-4);
        assert!((mm(10.0) - cm(1.0)).abs() < 1e-5);
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(42.0, 56.0, 511.0, 730.0);
        assert_eq!(r.left(), 42.0);
        assert_eq!(r.right(), 553.0);
        assert_eq!(r.bottom(), 56.0);
        assert_eq!(r.top(), 786.0);
        assert_eq!(r.center(), Point::new(297.5, 421.0));
    }
}
