//! # Segments
//! The atomic unit of a recorded drawing: one straight stroke from `begin`
//! to `end` with a thickness.
//!
//! A segment is a passive value. The touch side constructs one at finger-down
//! (usually via [`LineSegment::dot`]) and reassigns `end`/`width` as samples
//! arrive; once the gesture ends the value is handed off to rendering and
//! storage as-is. Two segments with equal fields are interchangeable - there
//! is no identity beyond the data.

use crate::geom::{Point, Rect, Vec2};

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidGeometry {
    #[error("coordinate or width is not finite")]
    NonFinite,
    #[error("width is negative")]
    NegativeWidth,
}

/// One straight stroke: two endpoints and a thickness, all in canvas space.
///
/// `width` is non-negative by convention. Zero width (invisible) and zero
/// length (`begin == end`, a dot) are both valid degenerates - consumers may
/// skip drawing them, but the value itself never rejects them. Nothing here
/// validates on the ordinary path; see [`Self::try_new`] for the opt-in
/// checked constructor.
// No clamping of width either - sane rendering ranges are the caller's call.
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct LineSegment {
    pub begin: Point,
    pub end: Point,
    pub width: f32,
}

impl LineSegment {
    #[must_use]
    pub const fn new(begin: Point, end: Point, width: f32) -> Self {
        Self { begin, end, width }
    }
    /// The degenerate zero-length segment, `begin == end == at`. This is the
    /// shape of every stroke at finger-down, before any move samples arrive.
    #[must_use]
    pub const fn dot(at: Point, width: f32) -> Self {
        Self {
            begin: at,
            end: at,
            width,
        }
    }
    /// Checked construction: like [`Self::new`], but rejects non-finite
    /// coordinates/width and negative width.
    pub fn try_new(begin: Point, end: Point, width: f32) -> Result<Self, InvalidGeometry> {
        let segment = Self { begin, end, width };
        segment.validate()?;
        Ok(segment)
    }
    /// Re-check the field conventions, e.g. after a series of in-place
    /// updates from an untrusted producer.
    pub fn validate(&self) -> Result<(), InvalidGeometry> {
        let finite = self.begin.x.is_finite()
            && self.begin.y.is_finite()
            && self.end.x.is_finite()
            && self.end.y.is_finite()
            && self.width.is_finite();
        if !finite {
            return Err(InvalidGeometry::NonFinite);
        }
        // NaN already rejected above, so a plain comparison is enough.
        if self.width < 0.0 {
            return Err(InvalidGeometry::NegativeWidth);
        }
        Ok(())
    }
    /// Displacement from `begin` to `end`. Zero for a dot - normalize through
    /// [`Vec2::normalized`] if a unit direction is needed.
    #[must_use]
    pub fn displacement(&self) -> Vec2 {
        self.end - self.begin
    }
    /// Euclidean length. Zero for a dot.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.displacement().length()
    }
    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.begin.midpoint(self.end)
    }
    /// Axis-aligned box covering both endpoints, whatever their ordering.
    /// Does *not* account for the stroke width - outset by `width / 2` if a
    /// paint-coverage box is needed.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_corners(self.begin, self.end)
    }
    #[must_use]
    pub fn is_dot(&self) -> bool {
        self.begin == self.end
    }
    /// Component-wise comparison within `epsilon`. `PartialEq` on this type
    /// is exact; this is for callers who accumulated float error and know
    /// their own tolerance.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.begin.x - other.begin.x).abs() <= epsilon
            && (self.begin.y - other.begin.y).abs() <= epsilon
            && (self.end.x - other.end.x).abs() <= epsilon
            && (self.end.y - other.end.y).abs() <= epsilon
            && (self.width - other.width).abs() <= epsilon
    }
}

#[cfg(test)]
mod test {
    use super::{InvalidGeometry, LineSegment};
    use crate::geom::{Point, Rect};

    #[test]
    fn round_trip_identity() {
        let p = Point::new(1.5, -2.25);
        let q = Point::new(100.0, 0.125);
        let segment = LineSegment::new(p, q, 3.0);
        assert_eq!(segment.begin, p);
        assert_eq!(segment.end, q);
        assert_eq!(segment.width, 3.0);
    }
    #[test]
    fn field_independence() {
        let mut segment = LineSegment::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0), 5.0);
        segment.end = Point::new(-7.0, 8.0);
        // Only `end` moved.
        assert_eq!(segment.begin, Point::new(1.0, 2.0));
        assert_eq!(segment.end, Point::new(-7.0, 8.0));
        assert_eq!(segment.width, 5.0);
    }
    #[test]
    fn equality_is_all_three_fields() {
        let segment = LineSegment::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0), 5.0);
        let same = LineSegment::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0), 5.0);
        assert_eq!(segment, same);

        let mut begin = segment;
        begin.begin.x = 0.0;
        let mut end = segment;
        end.end.y = 0.0;
        let mut width = segment;
        width.width = 1.0;
        assert_ne!(segment, begin);
        assert_ne!(segment, end);
        assert_ne!(segment, width);
    }
    #[test]
    fn gesture_lifecycle() {
        // Finger down at the origin...
        let mut segment = LineSegment::dot(Point::ORIGIN, 2.0);
        assert!(segment.is_dot());
        assert_eq!(segment.length(), 0.0);
        // ...dragged right 10 units...
        segment.end = Point::new(10.0, 0.0);
        // ...and lifted. Reads back exactly what the gesture produced.
        assert_eq!(segment.begin, Point::ORIGIN);
        assert_eq!(segment.end, Point::new(10.0, 0.0));
        assert_eq!(segment.width, 2.0);
        assert_eq!(segment.length(), 10.0);
        assert_eq!(segment.midpoint(), Point::new(5.0, 0.0));
    }
    #[test]
    fn zero_width_dot_is_valid() {
        // A tap with no pressure. Degenerate, but never rejected.
        let segment = LineSegment::try_new(Point::new(3.0, 4.0), Point::new(3.0, 4.0), 0.0).unwrap();
        assert!(segment.is_dot());
        assert_eq!(segment.length(), 0.0);
        assert_eq!(segment.width, 0.0);
    }
    #[test]
    fn validation_catches_bad_producers() {
        let p = Point::ORIGIN;
        assert_eq!(
            LineSegment::try_new(Point::new(f32::NAN, 0.0), p, 1.0),
            Err(InvalidGeometry::NonFinite)
        );
        assert_eq!(
            LineSegment::try_new(p, p, f32::INFINITY),
            Err(InvalidGeometry::NonFinite)
        );
        assert_eq!(
            LineSegment::try_new(p, p, -1.0),
            Err(InvalidGeometry::NegativeWidth)
        );
        // Mutation after a valid construction can be re-checked.
        let mut segment = LineSegment::dot(p, 1.0);
        assert_eq!(segment.validate(), Ok(()));
        segment.width = -0.5;
        assert_eq!(segment.validate(), Err(InvalidGeometry::NegativeWidth));
    }
    #[test]
    fn bounds_sort_endpoints() {
        // Right-to-left, bottom-to-top stroke still yields a sorted box.
        let segment = LineSegment::new(Point::new(10.0, 6.0), Point::new(2.0, 1.0), 4.0);
        assert_eq!(
            segment.bounds(),
            Rect::from_corners(Point::new(2.0, 1.0), Point::new(10.0, 6.0))
        );
    }
    #[test]
    fn approx_eq_takes_caller_epsilon() {
        let a = LineSegment::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0), 5.0);
        let mut b = a;
        b.end.x += 0.0005;
        // Exact equality broken, tolerant equality intact.
        assert_ne!(a, b);
        assert!(a.approx_eq(&b, 0.001));
        assert!(!a.approx_eq(&b, 0.0001));
    }
}
