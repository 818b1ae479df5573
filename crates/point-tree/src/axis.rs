//! Point representation and coordinate axes.

use nalgebra::Point3;

/// A point in 3D space. Equality is exact coordinate match.
pub type Point = Point3<f32>;

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in split order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the next axis in the cycle x → y → z → x.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    /// Returns the coordinate index of this axis (x = 0, y = 1, z = 2).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Returns the coordinate of `point` along this axis.
    #[inline]
    pub fn coord(self, point: &Point) -> f32 {
        point[self.index()]
    }
}
