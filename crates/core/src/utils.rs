//! Geometric primitives shared across the crate.
//!
//! Page coordinates are in page units with x growing rightward and y growing
//! downward, so the top edge of an element is its `y0` and reading order in a
//! column runs from small `y0` to large `y0`.

/// Floating-point infinity stand-in for bounding box accumulation.
pub const INF_F64: f64 = f64::MAX;

/// A rectangle defined by (x0, y0, x1, y1) where (x0, y0) is the top-left
/// corner and (x1, y1) the bottom-right corner.
pub type Rect = (f64, f64, f64, f64);

/// Trait for objects that have a bounding box.
pub trait HasBBox {
    fn x0(&self) -> f64;
    fn y0(&self) -> f64;
    fn x1(&self) -> f64;
    fn y1(&self) -> f64;

    fn bbox(&self) -> Rect {
        (self.x0(), self.y0(), self.x1(), self.y1())
    }

    fn width(&self) -> f64 {
        self.x1() - self.x0()
    }

    fn height(&self) -> f64 {
        self.y1() - self.y0()
    }

    /// Center of the bounding box on the x axis.
    fn center_x(&self) -> f64 {
        (self.x0() + self.x1()) / 2.0
    }

    /// Center of the bounding box on the y axis.
    fn center_y(&self) -> f64 {
        (self.y0() + self.y1()) / 2.0
    }

    /// Returns true if there is horizontal overlap with another component.
    fn is_hoverlap(&self, other: &impl HasBBox) -> bool {
        other.x0() <= self.x1() && self.x0() <= other.x1()
    }

    /// Returns true if there is vertical overlap with another component.
    fn is_voverlap(&self, other: &impl HasBBox) -> bool {
        other.y0() <= self.y1() && self.y0() <= other.y1()
    }

    /// Returns true if all four coordinates are finite.
    fn is_finite(&self) -> bool {
        self.x0().is_finite()
            && self.y0().is_finite()
            && self.x1().is_finite()
            && self.y1().is_finite()
    }
}

/// Computes the smallest rectangle covering both arguments.
pub fn rect_union(a: Rect, b: Rect) -> Rect {
    (a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3))
}

/// Returns true if the object's x-extent intersects the open interval `(lo, hi)`.
pub fn xrange_intersects<T: HasBBox>(obj: &T, lo: f64, hi: f64) -> bool {
    obj.x1() > lo && obj.x0() < hi
}

/// Returns true if the object's y-extent intersects the open interval `(lo, hi)`.
pub fn yrange_intersects<T: HasBBox>(obj: &T, lo: f64, hi: f64) -> bool {
    obj.y1() > lo && obj.y0() < hi
}
