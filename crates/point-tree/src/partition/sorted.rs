//! Axis-sorted working arrays and the stable partition step.

use thiserror::Error;

use crate::{Axis, Point};

/// Reasons [`AxisSorted::from_presorted`] rejects its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PresortedError {
    #[error("array sorted by {axis:?} holds {found} points, expected {expected}")]
    LengthMismatch {
        axis: Axis,
        expected: usize,
        found: usize,
    },

    #[error("array for {0:?} is not sorted ascending by that axis")]
    NotSorted(Axis),

    /// The array holds different points than the x-sorted one.
    #[error("array sorted by {0:?} holds different points than the one sorted by X")]
    PointMismatch(Axis),
}

/// Three copies of one point set, sorted ascending by x, y and z.
///
/// This is a construction-time structure. Building a
/// [`PartitionTree`](super::PartitionTree) consumes it and reorders the
/// arrays in place.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSorted {
    by_axis: [Vec<Point>; 3],
}

impl AxisSorted {
    /// Sorts three copies of `points`, one per axis. The sort is stable.
    pub fn from_points(points: &[Point]) -> Self {
        let by_axis = Axis::ALL.map(|axis| {
            let mut sorted = points.to_vec();
            sorted.sort_by(|a, b| axis.coord(a).total_cmp(&axis.coord(b)));
            sorted
        });
        Self { by_axis }
    }

    /// Wraps arrays the caller already sorted.
    ///
    /// Fails unless all three arrays have the same length, each is sorted
    /// ascending by its own axis, and they hold the same points.
    pub fn from_presorted(
        by_x: Vec<Point>,
        by_y: Vec<Point>,
        by_z: Vec<Point>,
    ) -> Result<Self, PresortedError> {
        let by_axis = [by_x, by_y, by_z];
        let len = by_axis[0].len();
        if let Some(axis) = Axis::ALL.into_iter().find(|a| by_axis[a.index()].len() != len) {
            return Err(PresortedError::LengthMismatch {
                axis,
                expected: len,
                found: by_axis[axis.index()].len(),
            });
        }
        for axis in Axis::ALL {
            let sorted = by_axis[axis.index()]
                .windows(2)
                .all(|w| axis.coord(&w[0]) <= axis.coord(&w[1]));
            if !sorted {
                return Err(PresortedError::NotSorted(axis));
            }
        }
        let reference = canonical(&by_axis[0]);
        if let Some(axis) = [Axis::Y, Axis::Z]
            .into_iter()
            .find(|a| canonical(&by_axis[a.index()]) != reference)
        {
            return Err(PresortedError::PointMismatch(axis));
        }
        Ok(Self { by_axis })
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.by_axis[0].len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the array sorted by `axis`.
    #[inline]
    pub fn by_axis(&self, axis: Axis) -> &[Point] {
        &self.by_axis[axis.index()]
    }

    /// Borrows all three arrays mutably, indexed by [`Axis::index`].
    pub(crate) fn slices_mut(&mut self) -> [&mut [Point]; 3] {
        let [x, y, z] = &mut self.by_axis;
        [x.as_mut_slice(), y.as_mut_slice(), z.as_mut_slice()]
    }
}

/// Stable partition of all three ranges around the median of `axis`.
///
/// `slices` are the same index range of the three axis-sorted arrays and
/// `median` is an index into that range. Points whose `axis` coordinate is
/// strictly below the median's go to the front of each range, points
/// strictly above go right after the median slot. Relative order inside both
/// groups is kept, so every range stays sorted by its own axis.
///
/// Points tied with the median on `axis`, including the median itself, end
/// up in neither group. Returns the sizes of the lower and upper groups.
pub(crate) fn partition_around(
    slices: &mut [&mut [Point]; 3],
    axis: Axis,
    median: usize,
) -> (usize, usize) {
    let pivot = axis.coord(&slices[axis.index()][median]);
    let mut less = Vec::with_capacity(median);
    let mut greater = Vec::with_capacity(slices[0].len() - median);
    let mut sizes = (0, 0);

    for (i, slice) in slices.iter_mut().enumerate() {
        less.clear();
        greater.clear();
        for p in slice.iter() {
            let c = axis.coord(p);
            if c < pivot {
                less.push(*p);
            } else if c > pivot {
                greater.push(*p);
            }
        }

        debug_assert!(
            i == 0 || sizes == (less.len(), greater.len()),
            "axis-sorted ranges hold different points"
        );
        sizes = (less.len(), greater.len());

        slice[..less.len()].copy_from_slice(&less);
        slice[median + 1..median + 1 + greater.len()].copy_from_slice(&greater);
    }

    sizes
}

/// Cuts each range into the lower group `[0, less)` and the upper group
/// `[median + 1, median + 1 + greater)`.
pub(crate) fn split_ranges<'a>(
    slices: [&'a mut [Point]; 3],
    median: usize,
    less: usize,
    greater: usize,
) -> ([&'a mut [Point]; 3], [&'a mut [Point]; 3]) {
    let [(lx, rx), (ly, ry), (lz, rz)] = slices.map(|slice| {
        let (head, tail) = slice.split_at_mut(median + 1);
        (&mut head[..less], &mut tail[..greater])
    });
    ([lx, ly, lz], [rx, ry, rz])
}

/// Bit patterns of `points` in a fixed order, for multiset comparison.
fn canonical(points: &[Point]) -> Vec<[u32; 3]> {
    let mut bits: Vec<[u32; 3]> = points
        .iter()
        .map(|p| [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()])
        .collect();
    bits.sort_unstable();
    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Point> {
        vec![
            Point::new(3.0, 1.0, 4.0),
            Point::new(1.0, 5.0, 9.0),
            Point::new(2.0, 6.0, 5.0),
            Point::new(5.0, 3.0, 8.0),
            Point::new(4.0, 7.0, 2.0),
            Point::new(0.0, 8.0, 1.0),
            Point::new(6.0, 2.0, 7.0),
        ]
    }

    fn sorted_multiset(points: &[Point]) -> Vec<[f32; 3]> {
        let mut v: Vec<[f32; 3]> = points.iter().map(|p| [p.x, p.y, p.z]).collect();
        v.sort_by(|a, b| a.partial_cmp(b).unwrap());
        v
    }

    #[test]
    fn from_points_sorts_each_axis() {
        let sorted = AxisSorted::from_points(&sample());
        assert_eq!(sorted.len(), 7);
        for axis in Axis::ALL {
            let arr = sorted.by_axis(axis);
            assert!(arr.windows(2).all(|w| axis.coord(&w[0]) <= axis.coord(&w[1])));
        }
    }

    #[test]
    fn from_points_empty() {
        let sorted = AxisSorted::from_points(&[]);
        assert!(sorted.is_empty());
    }

    #[test]
    fn partition_splits_around_median() {
        let mut sorted = AxisSorted::from_points(&sample());
        let median = 3;
        let pivot = sorted.by_axis(Axis::X)[median];
        assert_eq!(pivot.x, 3.0);

        let mut slices = sorted.slices_mut();
        let (less, greater) = partition_around(&mut slices, Axis::X, median);
        assert_eq!((less, greater), (3, 3));

        for slice in &slices {
            assert!(slice[..less].iter().all(|p| p.x < pivot.x));
            assert!(slice[median + 1..].iter().all(|p| p.x > pivot.x));
        }
    }

    #[test]
    fn partition_keeps_each_range_sorted_by_its_axis() {
        let mut sorted = AxisSorted::from_points(&sample());
        let mut slices = sorted.slices_mut();
        let (less, greater) = partition_around(&mut slices, Axis::X, 3);
        let (left, right) = split_ranges(slices, 3, less, greater);

        for axis in Axis::ALL {
            for range in [&left[axis.index()], &right[axis.index()]] {
                assert!(range.windows(2).all(|w| axis.coord(&w[0]) <= axis.coord(&w[1])));
            }
        }
    }

    #[test]
    fn partition_preserves_multiset_minus_median() {
        let points = sample();
        let mut sorted = AxisSorted::from_points(&points);
        let median_point = sorted.by_axis(Axis::X)[3];

        let mut slices = sorted.slices_mut();
        let (less, greater) = partition_around(&mut slices, Axis::X, 3);
        let (left, right) = split_ranges(slices, 3, less, greater);

        let expected: Vec<Point> = points.iter().copied().filter(|p| *p != median_point).collect();
        for axis in Axis::ALL {
            let mut got: Vec<Point> = left[axis.index()].to_vec();
            got.extend_from_slice(&right[axis.index()][..]);
            assert_eq!(sorted_multiset(&got), sorted_multiset(&expected));
        }
    }

    #[test]
    fn partition_drops_ties_with_median() {
        let points = vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 1.0),
            Point::new(1.0, 2.0, 2.0),
            Point::new(1.0, 3.0, 3.0),
            Point::new(2.0, 4.0, 4.0),
        ];
        let mut sorted = AxisSorted::from_points(&points);
        let mut slices = sorted.slices_mut();
        let (less, greater) = partition_around(&mut slices, Axis::X, 2);

        // Two other points share x = 1.0 with the median and are dropped.
        assert_eq!((less, greater), (1, 1));
        let (left, right) = split_ranges(slices, 2, less, greater);
        for axis in Axis::ALL {
            assert_eq!(left[axis.index()].to_vec(), vec![Point::new(0.0, 0.0, 0.0)]);
            assert_eq!(right[axis.index()].to_vec(), vec![Point::new(2.0, 4.0, 4.0)]);
        }
    }

    #[test]
    fn split_ranges_never_grow() {
        let mut sorted = AxisSorted::from_points(&sample());
        let len = sorted.len();
        let mut slices = sorted.slices_mut();
        let (less, greater) = partition_around(&mut slices, Axis::Y, 3);
        let (left, right) = split_ranges(slices, 3, less, greater);

        assert!(left[0].len() < len);
        assert!(right[0].len() < len);
        assert_eq!(left[0].len() + right[0].len(), len - 1);
    }

    #[test]
    fn from_presorted_accepts_consistent_arrays() {
        let expected = AxisSorted::from_points(&sample());
        let [x, y, z] = Axis::ALL.map(|a| expected.by_axis(a).to_vec());
        assert_eq!(AxisSorted::from_presorted(x, y, z), Ok(expected));
    }

    #[test]
    fn from_presorted_rejects_length_mismatch() {
        let sorted = AxisSorted::from_points(&sample());
        let [x, mut y, z] = Axis::ALL.map(|a| sorted.by_axis(a).to_vec());
        y.pop();
        assert_eq!(
            AxisSorted::from_presorted(x, y, z),
            Err(PresortedError::LengthMismatch { axis: Axis::Y, expected: 7, found: 6 })
        );
    }

    #[test]
    fn from_presorted_rejects_unsorted_array() {
        let sorted = AxisSorted::from_points(&sample());
        let [x, y, mut z] = Axis::ALL.map(|a| sorted.by_axis(a).to_vec());
        z.reverse();
        assert_eq!(
            AxisSorted::from_presorted(x, y, z),
            Err(PresortedError::NotSorted(Axis::Z))
        );
    }

    #[test]
    fn from_presorted_rejects_different_points() {
        let sorted = AxisSorted::from_points(&sample());
        let [x, mut y, z] = Axis::ALL.map(|a| sorted.by_axis(a).to_vec());
        // Keeps y sorted and the length unchanged, but y no longer matches x.
        y[0] = Point::new(-1.0, y[0].y, 0.0);
        assert_eq!(
            AxisSorted::from_presorted(x, y, z),
            Err(PresortedError::PointMismatch(Axis::Y))
        );
    }
}
