use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::mesh::Polyline;

/// Analytic curve representations the built-in kernel understands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Curve {
    Segment(Segment3d),
    Arc(Arc3d),
}

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Segment3d {
    pub start: Point3<f64>,
    pub end: Point3<f64>,
}

impl Segment3d {
    pub fn new(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self { start, end }
    }

    pub fn evaluate(&self, t: f64) -> Point3<f64> {
        self.start + (self.end - self.start) * t
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// A circular arc in the plane spanned by `u_axis` and `v_axis`.
///
/// The parameter sweeps `start_angle..start_angle + sweep` (radians);
/// a full circle is `sweep = TAU` with coincident endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Arc3d {
    pub center: Point3<f64>,
    pub radius: f64,
    pub u_axis: Vector3<f64>,
    pub v_axis: Vector3<f64>,
    pub start_angle: f64,
    pub sweep: f64,
}

impl Arc3d {
    /// A full circle around `normal`, with the in-plane axes derived
    /// from the normal.
    pub fn full_circle(center: Point3<f64>, radius: f64, normal: Vector3<f64>) -> Self {
        let n = normal.normalize();
        // Any vector not parallel to the normal seeds the in-plane frame.
        let seed = if n.x.abs() < 0.9 {
            Vector3::x()
        } else {
            Vector3::y()
        };
        let u = seed.cross(&n).normalize();
        let v = n.cross(&u);
        Self {
            center,
            radius,
            u_axis: u,
            v_axis: v,
            start_angle: 0.0,
            sweep: std::f64::consts::TAU,
        }
    }

    pub fn evaluate(&self, t: f64) -> Point3<f64> {
        let theta = self.start_angle + self.sweep * t;
        self.center + (self.u_axis * theta.cos() + self.v_axis * theta.sin()) * self.radius
    }
}

impl Curve {
    pub fn evaluate(&self, t: f64) -> Point3<f64> {
        match self {
            Curve::Segment(s) => s.evaluate(t),
            Curve::Arc(a) => a.evaluate(t),
        }
    }

    /// Sample the curve uniformly into `resolution` spans
    /// (`resolution + 1` points, endpoints included).
    pub fn discretize(&self, resolution: usize) -> Polyline {
        let n = resolution.max(1);
        (0..=n).map(|i| self.evaluate(i as f64 / n as f64)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_segment_discretize_endpoints() {
        let seg = Curve::Segment(Segment3d::new(
            Point3::origin(),
            Point3::new(10.0, 0.0, 0.0),
        ));
        let pts = seg.discretize(4);
        assert_eq!(pts.len(), 5);
        assert_relative_eq!(pts[0].x, 0.0);
        assert_relative_eq!(pts[4].x, 10.0);
        assert_relative_eq!(pts[2].x, 5.0);
    }

    #[test]
    fn test_full_circle_closes() {
        let arc = Arc3d::full_circle(Point3::origin(), 2.0, Vector3::z());
        let pts = Curve::Arc(arc).discretize(32);
        assert_eq!(pts.len(), 33);
        assert_relative_eq!((pts[0] - pts[32]).norm(), 0.0, epsilon = 1e-9);
        for p in &pts {
            assert_relative_eq!((p - Point3::origin()).norm(), 2.0, epsilon = 1e-9);
            assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_arc_plane_frame_is_orthonormal() {
        let arc = Arc3d::full_circle(Point3::origin(), 1.0, Vector3::new(1.0, 1.0, 0.5));
        assert_relative_eq!(arc.u_axis.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(arc.v_axis.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(arc.u_axis.dot(&arc.v_axis), 0.0, epsilon = 1e-12);
    }
}
