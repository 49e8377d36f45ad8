use core::f32::consts::TAU;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use thiserror::Error;

/// Failure of a vector division.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum VectorError {
    /// Scalar divisor was zero, or a vector divisor had a zero component.
    #[error("cannot divide by zero")]
    DivisionByZero,
}

/// 2D vector in canvas pixels.
///
/// Two flavours of every arithmetic operation exist:
/// - `*_mut` methods apply in place and return `&mut Self` for chaining
/// - associated functions (`Vector::add`, `Vector::lerp`, ...) leave their
///   operands untouched and return a new value
///
/// Scalars broadcast across both axes through `From<f32>`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Both components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    /// Builds a vector from a direction (radians) and a length.
    #[inline]
    pub fn from_angle(theta: f32, magnitude: f32) -> Self {
        Self::new(theta.cos() * magnitude, theta.sin() * magnitude)
    }

    /// Unit vector pointing in a uniformly random direction.
    pub fn random() -> Self {
        Self::from_angle(fastrand::f32() * TAU, 1.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn set(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    // ── polar accessors ───────────────────────────────────────────────────

    /// Direction in radians, measured from +X towards +Y.
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Points the vector at `radians` while keeping its length.
    pub fn set_angle(&mut self, radians: f32) -> &mut Self {
        let radius = self.magnitude();
        self.x = radius * radians.cos();
        self.y = radius * radians.sin();
        self
    }

    #[inline]
    pub fn magnitude(self) -> f32 {
        self.magnitude_sq().sqrt()
    }

    /// Scales the vector to `length` while keeping its direction.
    ///
    /// A zero vector has no direction and stays zero.
    pub fn set_magnitude(&mut self, length: f32) -> &mut Self {
        self.normalize_mut().mul_mut(length)
    }

    #[inline]
    pub fn magnitude_sq(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    // ── in place ──────────────────────────────────────────────────────────

    pub fn normalize_mut(&mut self) -> &mut Self {
        let m = self.magnitude();
        if m != 0.0 {
            self.x /= m;
            self.y /= m;
        } else {
            self.x = 0.0;
            self.y = 0.0;
        }
        self
    }

    pub fn add_mut(&mut self, rhs: impl Into<Vector>) -> &mut Self {
        let rhs = rhs.into();
        self.x += rhs.x;
        self.y += rhs.y;
        self
    }

    pub fn sub_mut(&mut self, rhs: impl Into<Vector>) -> &mut Self {
        let rhs = rhs.into();
        self.x -= rhs.x;
        self.y -= rhs.y;
        self
    }

    pub fn mul_mut(&mut self, rhs: impl Into<Vector>) -> &mut Self {
        let rhs = rhs.into();
        self.x *= rhs.x;
        self.y *= rhs.y;
        self
    }

    /// Divides component-wise. On error the vector is left unchanged.
    pub fn div_mut(&mut self, rhs: impl Into<Vector>) -> Result<&mut Self, VectorError> {
        let rhs = checked_divisor(rhs.into())?;
        self.x /= rhs.x;
        self.y /= rhs.y;
        Ok(self)
    }

    pub fn rotate_mut(&mut self, radians: f32) -> &mut Self {
        let angle = self.angle();
        self.set_angle(angle + radians)
    }

    pub fn lerp_mut(&mut self, target: Vector, alpha: f32) -> &mut Self {
        *self = Self::lerp(*self, target, alpha);
        self
    }

    // ── reads ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn dot(self, v: Vector) -> f32 {
        self.x * v.x + self.y * v.y
    }

    /// Z component of the 3D cross product.
    #[inline]
    pub fn cross(self, v: Vector) -> f32 {
        self.x * v.y - self.y * v.x
    }

    /// Unsigned angle between two vectors in radians, in `[0, π]`.
    ///
    /// Returns 0 when either vector has zero length.
    pub fn angle_between(self, v: Vector) -> f32 {
        let denom = self.magnitude() * v.magnitude();
        if denom == 0.0 {
            return 0.0;
        }
        // Rounding can push the cosine just outside [-1, 1].
        (self.dot(v) / denom).clamp(-1.0, 1.0).acos()
    }

    #[inline]
    pub fn distance(self, v: Vector) -> f32 {
        Self::sub(self, v).magnitude()
    }

    // ── pure ──────────────────────────────────────────────────────────────

    pub fn normalize(v: Vector) -> Vector {
        let mut out = v;
        *out.normalize_mut()
    }

    pub fn add(a: impl Into<Vector>, b: impl Into<Vector>) -> Vector {
        let (a, b) = (a.into(), b.into());
        Vector::new(a.x + b.x, a.y + b.y)
    }

    pub fn sub(a: impl Into<Vector>, b: impl Into<Vector>) -> Vector {
        let (a, b) = (a.into(), b.into());
        Vector::new(a.x - b.x, a.y - b.y)
    }

    pub fn mul(a: impl Into<Vector>, b: impl Into<Vector>) -> Vector {
        let (a, b) = (a.into(), b.into());
        Vector::new(a.x * b.x, a.y * b.y)
    }

    pub fn div(a: impl Into<Vector>, b: impl Into<Vector>) -> Result<Vector, VectorError> {
        let a = a.into();
        let b = checked_divisor(b.into())?;
        Ok(Vector::new(a.x / b.x, a.y / b.y))
    }

    pub fn lerp(current: Vector, target: Vector, alpha: f32) -> Vector {
        let inv = 1.0 - alpha;
        Vector::new(
            current.x * inv + target.x * alpha,
            current.y * inv + target.y * alpha,
        )
    }

    pub fn rotate(v: Vector, radians: f32) -> Vector {
        Self::from_angle(v.angle() + radians, v.magnitude())
    }
}

#[inline]
fn checked_divisor(v: Vector) -> Result<Vector, VectorError> {
    if v.x == 0.0 || v.y == 0.0 {
        Err(VectorError::DivisionByZero)
    } else {
        Ok(v)
    }
}

impl From<f32> for Vector {
    #[inline]
    fn from(v: f32) -> Self {
        Self::splat(v)
    }
}

impl From<(f32, f32)> for Vector {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {} Y: {}", self.x, self.y)
    }
}

impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: f32) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: Vector) -> Vector {
        Vector::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    fn v(x: f32, y: f32) -> Vector {
        Vector::new(x, y)
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    // ── arithmetic ────────────────────────────────────────────────────────

    #[test]
    fn sub_self_is_zero_length() {
        for p in [v(3.0, 4.0), v(-1.5, 0.25), v(0.0, 0.0), v(1e6, -1e6)] {
            assert_eq!(Vector::sub(p, p).magnitude(), 0.0);
        }
    }

    #[test]
    fn scalar_broadcasts_across_both_axes() {
        assert_eq!(Vector::add(v(1.0, 2.0), 3.0_f32), v(4.0, 5.0));
        assert_eq!(Vector::sub(10.0_f32, v(1.0, 2.0)), v(9.0, 8.0));
        assert_eq!(Vector::mul(v(1.0, 2.0), 2.0_f32), v(2.0, 4.0));
    }

    #[test]
    fn in_place_ops_chain_and_mutate() {
        let mut p = v(1.0, 1.0);
        p.add_mut(v(1.0, 2.0)).mul_mut(2.0_f32).sub_mut(1.0_f32);
        assert_eq!(p, v(3.0, 5.0));
    }

    #[test]
    fn pure_ops_leave_operands_untouched() {
        let a = v(2.0, 3.0);
        let b = v(4.0, 5.0);
        let _ = Vector::add(a, b);
        let _ = Vector::lerp(a, b, 0.5);
        let _ = Vector::rotate(a, 1.0);
        assert_eq!(a, v(2.0, 3.0));
        assert_eq!(b, v(4.0, 5.0));
    }

    #[test]
    fn operators_match_pure_functions() {
        let a = v(2.0, -3.0);
        let b = v(0.5, 4.0);
        assert_eq!(a + b, Vector::add(a, b));
        assert_eq!(a - b, Vector::sub(a, b));
        assert_eq!(a * b, Vector::mul(a, b));
        assert_eq!(a * 3.0, Vector::mul(a, 3.0_f32));
        assert_eq!(-a, v(-2.0, 3.0));
    }

    // ── division ──────────────────────────────────────────────────────────

    #[test]
    fn div_by_zero_scalar_fails() {
        assert_eq!(Vector::div(v(1.0, 2.0), 0.0_f32), Err(VectorError::DivisionByZero));
    }

    #[test]
    fn div_by_vector_with_zero_component_fails() {
        let mut p = v(1.0, 2.0);
        assert_eq!(p.div_mut(v(1.0, 0.0)).err(), Some(VectorError::DivisionByZero));
        // Failed division leaves the operand untouched.
        assert_eq!(p, v(1.0, 2.0));
    }

    #[test]
    fn div_component_wise() {
        assert_eq!(Vector::div(v(6.0, 8.0), v(2.0, 4.0)), Ok(v(3.0, 2.0)));
        let mut p = v(6.0, 8.0);
        p.div_mut(2.0_f32).unwrap();
        assert_eq!(p, v(3.0, 4.0));
    }

    // ── normalize / magnitude ─────────────────────────────────────────────

    #[test]
    fn normalize_nonzero_has_unit_length() {
        for p in [v(3.0, 4.0), v(-0.001, 0.0), v(12.0, -5.0)] {
            let mut n = p;
            assert!(close(n.normalize_mut().magnitude(), 1.0));
            assert!(close(Vector::normalize(p).magnitude(), 1.0));
        }
    }

    #[test]
    fn normalize_zero_stays_zero() {
        let mut z = Vector::zero();
        assert_eq!(z.normalize_mut().magnitude(), 0.0);
        assert_eq!(Vector::normalize(Vector::zero()), Vector::zero());
    }

    #[test]
    fn set_magnitude_keeps_direction() {
        let mut p = v(3.0, 4.0);
        p.set_magnitude(10.0);
        assert!(close(p.x, 6.0));
        assert!(close(p.y, 8.0));
    }

    #[test]
    fn set_magnitude_on_zero_vector_is_zero() {
        let mut z = Vector::zero();
        z.set_magnitude(5.0);
        assert_eq!(z, Vector::zero());
    }

    #[test]
    fn set_angle_keeps_magnitude() {
        let mut p = v(0.0, 2.0);
        p.set_angle(0.0);
        assert!(close(p.x, 2.0));
        assert!(close(p.y, 0.0));
    }

    // ── rotation / angles ─────────────────────────────────────────────────

    #[test]
    fn rotate_quarter_turn() {
        let mut p = v(1.0, 0.0);
        p.rotate_mut(FRAC_PI_2);
        assert!(close(p.x, 0.0));
        assert!(close(p.y, 1.0));

        let q = Vector::rotate(v(0.0, 1.0), FRAC_PI_2);
        assert!(close(q.x, -1.0));
        assert!(close(q.y, 0.0));
    }

    #[test]
    fn angle_between_uses_normalized_dot() {
        assert!(close(v(1.0, 0.0).angle_between(v(0.0, 5.0)), FRAC_PI_2));
        assert!(close(v(2.0, 0.0).angle_between(v(-3.0, 0.0)), PI));
        assert!(close(v(2.0, 2.0).angle_between(v(7.0, 7.0)), 0.0));
    }

    #[test]
    fn angle_between_zero_vector_is_zero() {
        assert_eq!(Vector::zero().angle_between(v(1.0, 0.0)), 0.0);
    }

    #[test]
    fn from_angle_and_random_have_requested_length() {
        assert!(close(Vector::from_angle(1.3, 4.0).magnitude(), 4.0));
        assert!(close(Vector::random().magnitude(), 1.0));
    }

    #[test]
    fn dot_cross_distance() {
        let a = v(1.0, 2.0);
        let b = v(3.0, 4.0);
        assert_eq!(a.dot(b), 11.0);
        assert_eq!(a.cross(b), -2.0);
        assert_eq!(v(0.0, 0.0).distance(v(3.0, 4.0)), 5.0);
    }

    // ── lerp / display ────────────────────────────────────────────────────

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = v(0.0, 10.0);
        let b = v(10.0, 20.0);
        assert_eq!(Vector::lerp(a, b, 0.0), a);
        assert_eq!(Vector::lerp(a, b, 1.0), b);
        let mut m = a;
        m.lerp_mut(b, 0.5);
        assert_eq!(m, v(5.0, 15.0));
    }

    #[test]
    fn display_format() {
        assert_eq!(v(1.5, -2.0).to_string(), "X: 1.5 Y: -2");
    }
}
