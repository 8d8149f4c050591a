//! Simple polygons: an incremental builder plus the validated [`Profile`] the
//! SDF extrusion evaluates.

use crate::errors::ValidationError;
use crate::float_types::{Real, tolerance};
use geo::algorithm::line_intersection::{LineIntersection, line_intersection};
use geo::{Area, Coord, Line, LineString, Polygon};
use nalgebra::Point2;

/// Incremental polygon builder.
///
/// ```
/// # use holder::sketch::Polygon2;
/// let mut ramp = Polygon2::new();
/// ramp.add(0.0, 0.0).add(0.0, 2.0).add(-2.0, 0.0).close();
/// let profile = ramp.build().unwrap();
/// assert_eq!(profile.vertices().len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon2 {
    vertices: Vec<Point2<Real>>,
    closed: bool,
}

impl Polygon2 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex.
    pub fn add(&mut self, x: Real, y: Real) -> &mut Self {
        self.vertices.push(Point2::new(x, y));
        self
    }

    /// Mark the ring closed; [`Polygon2::vertices`] then repeats the first vertex at the end.
    pub fn close(&mut self) -> &mut Self {
        self.closed = true;
        self
    }

    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn vertices(&self) -> Vec<Point2<Real>> {
        let mut out = self.vertices.clone();
        if self.closed {
            if let Some(first) = self.vertices.first() {
                if self.vertices.last() != Some(first) {
                    out.push(*first);
                }
            }
        }
        out
    }

    /// Validate the ring and turn it into an evaluable [`Profile`].
    pub fn build(&self) -> Result<Profile, ValidationError> {
        Profile::new(&self.vertices())
    }
}

/// A validated simple polygon, stored without the repeated closing vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    vertices: Vec<Point2<Real>>,
    mins: Point2<Real>,
    maxs: Point2<Real>,
}

impl Profile {
    /// Validate `points` as a simple polygon ring.
    ///
    /// A trailing copy of the first point is accepted and dropped. Fails on
    /// fewer than three vertices, non-finite coordinates, consecutive repeats,
    /// zero area, or any crossing between non-adjacent edges.
    pub fn new(points: &[Point2<Real>]) -> Result<Self, ValidationError> {
        let mut ring: Vec<Point2<Real>> = points.to_vec();
        if ring.len() > 1 && ring.first() == ring.last() {
            ring.pop();
        }
        if ring.len() < 3 {
            return Err(ValidationError::TooFewPoints(ring.len()));
        }
        if let Some(bad) = ring.iter().find(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(ValidationError::InvalidCoordinate(*bad));
        }

        let eps = tolerance();
        for (i, p) in ring.iter().enumerate() {
            let next = &ring[(i + 1) % ring.len()];
            if (next - p).norm() <= eps {
                return Err(ValidationError::RepeatedPoint(*p));
            }
        }

        let coords: Vec<Coord<Real>> = ring.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
        let area = Polygon::new(LineString::from(coords.clone()), vec![]).signed_area();
        if area.abs() <= eps {
            return Err(ValidationError::DegeneratePolygon);
        }
        check_simple(&coords)?;

        let mins = ring.iter().fold(ring[0], |acc, p| acc.inf(p));
        let maxs = ring.iter().fold(ring[0], |acc, p| acc.sup(p));
        Ok(Self {
            vertices: ring,
            mins,
            maxs,
        })
    }

    pub fn vertices(&self) -> &[Point2<Real>] {
        &self.vertices
    }

    /// Lower-left and upper-right corners of the 2D bounding box.
    pub const fn bounds(&self) -> (Point2<Real>, Point2<Real>) {
        (self.mins, self.maxs)
    }

    /// Even-odd containment test.
    pub fn contains(&self, p: &Point2<Real>) -> bool {
        let n = self.vertices.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (a, b) = (&self.vertices[i], &self.vertices[j]);
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Signed distance to the polygon boundary, negative inside.
    pub fn distance(&self, p: &Point2<Real>) -> Real {
        let n = self.vertices.len();
        let mut best = Real::MAX;
        for i in 0..n {
            let a = &self.vertices[i];
            let b = &self.vertices[(i + 1) % n];
            let ab = b - a;
            let t = ((p - a).dot(&ab) / ab.norm_squared()).clamp(0.0, 1.0);
            best = best.min((p - (a + ab * t)).norm());
        }
        if self.contains(p) { -best } else { best }
    }
}

/// Reject rings whose edges cross anywhere but at shared corners.
fn check_simple(coords: &[Coord<Real>]) -> Result<(), ValidationError> {
    let n = coords.len();
    let edges: Vec<Line<Real>> = (0..n)
        .map(|i| Line::new(coords[i], coords[(i + 1) % n]))
        .collect();

    for i in 0..n {
        for j in (i + 1)..n {
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            match line_intersection(edges[i], edges[j]) {
                None => {},
                Some(LineIntersection::SinglePoint { .. }) if adjacent => {},
                Some(LineIntersection::SinglePoint { intersection, .. }) => {
                    return Err(ValidationError::SelfIntersection(Point2::new(
                        intersection.x,
                        intersection.y,
                    )));
                },
                Some(LineIntersection::Collinear { intersection }) => {
                    return Err(ValidationError::SelfIntersection(Point2::new(
                        intersection.start.x,
                        intersection.start.y,
                    )));
                },
            }
        }
    }
    Ok(())
}
