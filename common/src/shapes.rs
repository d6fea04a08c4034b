use rand::Rng;
use std::fmt;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Axis-aligned box anchored at its top-left corner.
///
/// Covers the half-open area `[x, x + width) x [y, y + height)`, so two
/// rectangles that only share an edge do not overlap, and a rectangle with a
/// non-positive width or height is empty.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_point_size(position: Point, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.x.saturating_add(self.width / 2),
            self.y.saturating_add(self.height / 2),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn overlaps(&self, other: &Rectangle) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (l1, t1, r1, b1) = self.extent_i64();
        let (l2, t2, r2, b2) = other.extent_i64();
        l1 < r2 && l2 < r1 && t1 < b2 && t2 < b1
    }

    pub fn contains_point(&self, point: Point) -> bool {
        let (l, t, r, b) = self.extent_i64();
        let (x, y) = (point.x as i64, point.y as i64);
        x >= l && x < r && y >= t && y < b
    }

    /// Nearest point inside the rectangle, or the top-left corner if empty.
    pub fn clamp_point(&self, point: Point) -> Point {
        if self.is_empty() {
            return self.position();
        }
        let last = self.last_inside();
        Point::new(point.x.clamp(self.x, last.x), point.y.clamp(self.y, last.y))
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }

    pub fn union(&self, other: &Rectangle) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let (l1, t1, r1, b1) = self.extent_i64();
        let (l2, t2, r2, b2) = other.extent_i64();
        let (left, top) = (l1.min(l2), t1.min(t2));
        Self::new(
            left as i32,
            top as i32,
            (r1.max(r2) - left).min(i32::MAX as i64) as i32,
            (b1.max(b2) - top).min(i32::MAX as i64) as i32,
        )
    }

    pub fn random_point_inside<R: Rng>(&self, rng: &mut R) -> Point {
        if self.is_empty() {
            return self.position();
        }
        let last = self.last_inside();
        Point::new(rng.gen_range(self.x..=last.x), rng.gen_range(self.y..=last.y))
    }

    /// Bottom-right point still covered by a non-empty rectangle, capped to
    /// the i32 range.
    #[inline(always)]
    fn last_inside(&self) -> Point {
        let (_, _, right, bottom) = self.extent_i64();
        Point::new(
            (right - 1).min(i32::MAX as i64) as i32,
            (bottom - 1).min(i32::MAX as i64) as i32,
        )
    }

    #[inline(always)]
    fn extent_i64(&self) -> (i64, i64, i64, i64) {
        let x = self.x as i64;
        let y = self.y as i64;
        (x, y, x + self.width as i64, y + self.height as i64)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {}x{}",
            self.x, self.y, self.width, self.height
        )
    }
}
