//! # Point Primitive
//!
//! [`Point3`] is the value type every level of the object hierarchy is
//! expressed in: face-local vertices, face/part/object centroids, and the
//! per-axis rotation (radians) and scale triples.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

use cgmath::Vector3;

/// A 3-component float tuple with value semantics.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const ZERO: Point3 = Point3::new(0.0, 0.0, 0.0);
    pub const ONE: Point3 = Point3::new(1.0, 1.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Expresses this point in the frame whose origin is `origin` (pure translation).
    pub fn relative_to(self, origin: Point3) -> Point3 {
        self + origin
    }

    /// Places a frame-local point into its parent frame.
    ///
    /// The order is fixed: scale, rotate about X, then Y, then Z (right-handed),
    /// then translate by `origin`. A zero angle leaves the point untouched on
    /// that axis.
    pub fn transform(self, origin: Point3, rotation: Point3, scale: Point3) -> Point3 {
        let mut p = Point3::new(self.x * scale.x, self.y * scale.y, self.z * scale.z);

        if rotation.x != 0.0 {
            let (sin, cos) = rotation.x.sin_cos();
            let y = p.y * cos - p.z * sin;
            let z = p.y * sin + p.z * cos;
            p.y = y;
            p.z = z;
        }

        if rotation.y != 0.0 {
            let (sin, cos) = rotation.y.sin_cos();
            let x = p.x * cos + p.z * sin;
            let z = -p.x * sin + p.z * cos;
            p.x = x;
            p.z = z;
        }

        if rotation.z != 0.0 {
            let (sin, cos) = rotation.z.sin_cos();
            let x = p.x * cos - p.y * sin;
            let y = p.x * sin + p.y * cos;
            p.x = x;
            p.y = y;
        }

        p + origin
    }

    pub fn distance_to(self, other: Point3) -> f32 {
        let d = self - other;
        (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
    }

    /// Component-wise comparison within `tolerance`.
    pub fn approx_eq(self, other: Point3, tolerance: f32) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Point3 {
    type Output = Point3;

    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Point3 {
    fn add_assign(&mut self, rhs: Point3) {
        *self = *self + rhs;
    }
}

impl Sub for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Point3 {
    type Output = Point3;

    fn mul(self, scalar: f32) -> Point3 {
        Point3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl From<[f32; 3]> for Point3 {
    fn from(v: [f32; 3]) -> Self {
        Point3::new(v[0], v[1], v[2])
    }
}

impl From<Point3> for [f32; 3] {
    fn from(p: Point3) -> Self {
        p.to_array()
    }
}

impl From<Vector3<f32>> for Point3 {
    fn from(v: Vector3<f32>) -> Self {
        Point3::new(v.x, v.y, v.z)
    }
}

impl From<Point3> for Vector3<f32> {
    fn from(p: Point3) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 0.001;

    fn assert_point(actual: Point3, expected: Point3) {
        assert_abs_diff_eq!(actual.x, expected.x, epsilon = EPS);
        assert_abs_diff_eq!(actual.y, expected.y, epsilon = EPS);
        assert_abs_diff_eq!(actual.z, expected.z, epsilon = EPS);
    }

    #[test]
    fn test_identity_transform_is_translation() {
        let samples = [
            (Point3::new(1.0, 2.0, 3.0), Point3::new(-4.0, 0.5, 9.0)),
            (Point3::new(-0.3, 0.0, 0.7), Point3::ZERO),
            (Point3::ZERO, Point3::new(6.0, -1.0, 2.5)),
        ];
        for (p, o) in samples {
            assert_eq!(p.transform(o, Point3::ZERO, Point3::ONE), p + o);
        }
    }

    #[test]
    fn test_scale_applies_before_translation() {
        let p = Point3::new(1.0, 1.0, 1.0).transform(
            Point3::new(10.0, 0.0, 0.0),
            Point3::ZERO,
            Point3::new(2.0, 3.0, 4.0),
        );
        assert_point(p, Point3::new(12.0, 3.0, 4.0));
    }

    #[test]
    fn test_right_handed_axis_rotations() {
        // +Y about X by 90 degrees lands on +Z
        let p = Point3::new(0.0, 1.0, 0.0).transform(
            Point3::ZERO,
            Point3::new(FRAC_PI_2, 0.0, 0.0),
            Point3::ONE,
        );
        assert_point(p, Point3::new(0.0, 0.0, 1.0));

        // +Z about Y by 90 degrees lands on +X
        let p = Point3::new(0.0, 0.0, 1.0).transform(
            Point3::ZERO,
            Point3::new(0.0, FRAC_PI_2, 0.0),
            Point3::ONE,
        );
        assert_point(p, Point3::new(1.0, 0.0, 0.0));

        // +X about Z by 90 degrees lands on +Y
        let p = Point3::new(1.0, 0.0, 0.0).transform(
            Point3::ZERO,
            Point3::new(0.0, 0.0, FRAC_PI_2),
            Point3::ONE,
        );
        assert_point(p, Point3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_rotation_order_is_x_then_y_then_z() {
        // X first: (0,1,0) -> (0,0,1); then Y: (0,0,1) -> (1,0,0); then Z: (1,0,0) -> (0,1,0)
        let p = Point3::new(0.0, 1.0, 0.0).transform(
            Point3::ZERO,
            Point3::new(FRAC_PI_2, FRAC_PI_2, FRAC_PI_2),
            Point3::ONE,
        );
        assert_point(p, Point3::new(0.0, 1.0, 0.0));

        // Y alone then Z alone give a different answer than the reverse order would
        let p = Point3::new(1.0, 0.0, 0.0).transform(
            Point3::ZERO,
            Point3::new(0.0, FRAC_PI_2, FRAC_PI_2),
            Point3::ONE,
        );
        assert_point(p, Point3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_operators_and_distance() {
        let a = Point3::new(1.0, 2.0, 2.0);
        let b = Point3::new(0.0, 0.0, 0.0);
        assert_eq!(a - b, a);
        assert_eq!(a * 2.0, Point3::new(2.0, 4.0, 4.0));
        assert_abs_diff_eq!(a.distance_to(b), 3.0, epsilon = EPS);
        assert_eq!(a.relative_to(Point3::ONE), Point3::new(2.0, 3.0, 3.0));
        assert!(a.approx_eq(Point3::new(1.0005, 2.0, 1.9995), EPS));
        assert!(!a.approx_eq(Point3::new(1.01, 2.0, 2.0), EPS));
    }

    #[test]
    fn test_display_uses_two_decimals() {
        assert_eq!(Point3::new(0.5, -1.0, 2.126).to_string(), "(0.50, -1.00, 2.13)");
    }
}
