//! Track geometry: an immutable closed polygon of 2D points.

use serde::{Deserialize, Serialize};

use super::error::{InvalidTrackError, RevealError, RevealResult};

/// Scale applied to the reference coordinates (and the reference canvas)
pub const TRACK_SCALE: f32 = 1.5;

/// Reference track coordinates before scaling
pub const REFERENCE_COORDS: [(f32, f32); 9] = [
    (242.0, 75.0),
    (364.0, 90.0),
    (458.0, 164.0),
    (450.0, 250.0),
    (335.0, 288.0),
    (241.0, 282.0),
    (104.0, 264.0),
    (93.0, 154.0),
    (141.0, 97.0),
];

/// A point in canvas space (x right, y down)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position
    pub x: f32,
    /// Vertical position
    pub y: f32,
}

impl Point {
    /// Creates a point
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Point multiplied component-wise by `factor`
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Euclidean distance to `other`
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// One edge of the closed polygon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Edge start
    pub start: Point,
    /// Edge end (the next point, wrapping to the first)
    pub end: Point,
}

impl Edge {
    /// Point at parameter `t` along the edge
    #[must_use]
    pub fn at(&self, t: f32) -> Point {
        self.start.lerp(self.end, t)
    }

}

/// An ordered, non-empty set of points forming a closed polygon
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    points: Vec<Point>,
}

impl Track {
    /// Creates a track from already-scaled points
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTrackError::Empty`] for no points and
    /// [`InvalidTrackError::NonFinite`] for NaN or infinite coordinates.
    pub fn new(points: Vec<Point>) -> RevealResult<Self> {
        if points.is_empty() {
            return Err(InvalidTrackError::Empty.into());
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(RevealError::InvalidTrack(InvalidTrackError::NonFinite {
                index,
            }));
        }
        Ok(Self { points })
    }

    /// Creates a track from raw coordinates, multiplying each by `scale`
    ///
    /// # Errors
    ///
    /// Same as [`Track::new`]: empty input or a non-finite scaled coordinate.
    pub fn from_coords(coords: &[(f32, f32)], scale: f32) -> RevealResult<Self> {
        Self::new(
            coords
                .iter()
                .map(|&c| Point::from(c).scaled(scale))
                .collect(),
        )
    }

    /// The built-in demonstration track
    #[must_use]
    pub fn reference() -> Self {
        Self {
            points: REFERENCE_COORDS
                .iter()
                .map(|&c| Point::from(c).scaled(TRACK_SCALE))
                .collect(),
        }
    }

    /// Number of points (N)
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the track has no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points in order
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Point at `index`, if any
    #[must_use]
    pub fn point(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Edges of the closed polygon, including the wrap-around edge
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Edge {
            start: self.points[i],
            end: self.points[(i + 1) % n],
        })
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_track_is_scaled() {
        let track = Track::reference();
        assert_eq!(track.len(), 9);
        assert_eq!(track.point(0), Some(Point::new(363.0, 112.5)));
        assert_eq!(track.point(8), Some(Point::new(211.5, 145.5)));
        assert_eq!(track.point(9), None);
    }

    #[test]
    fn test_from_coords_matches_reference() {
        let track = Track::from_coords(&REFERENCE_COORDS, TRACK_SCALE).unwrap();
        assert_eq!(track, Track::reference());
    }

    #[test]
    fn test_empty_track_rejected() {
        let err = Track::new(Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            RevealError::InvalidTrack(InvalidTrackError::Empty)
        ));
    }

    #[test]
    fn test_non_finite_point_rejected() {
        let err = Track::new(vec![Point::new(1.0, 2.0), Point::new(f32::NAN, 0.0)])
            .unwrap_err();
        assert!(matches!(
            err,
            RevealError::InvalidTrack(InvalidTrackError::NonFinite { index: 1 })
        ));
    }

    #[test]
    fn test_edges_wrap_around() {
        let track = Track::reference();
        let edges: Vec<Edge> = track.edges().collect();
        assert_eq!(edges.len(), 9);
        assert_eq!(edges[8].start, track.points()[8]);
        assert_eq!(edges[8].end, track.points()[0]);
    }

    #[test]
    fn test_single_point_track_has_degenerate_edge() {
        let track = Track::new(vec![Point::new(5.0, 5.0)]).unwrap();
        let edges: Vec<Edge> = track.edges().collect();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].start, edges[0].end);
        assert_eq!(edges[0].at(0.5), Point::new(5.0, 5.0));
        assert!(!track.is_empty());
    }

    #[test]
    fn test_from_coords_rejects_overflow_after_scaling() {
        let err = Track::from_coords(&[(1.0, 1.0), (f32::MAX, 0.0)], 2.0).unwrap_err();
        assert!(matches!(
            err,
            RevealError::InvalidTrack(InvalidTrackError::NonFinite { index: 1 })
        ));
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(20.0, -10.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.25), Point::new(5.0, -2.5));
    }
}
