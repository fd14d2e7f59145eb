use core::hash::{Hash, Hasher};
use core::ops::{Add, Div, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::Float;

use crate::error::{Error, Result};
use crate::vec2::hash_bits;
use crate::{IVec2, IVec3, NativeFloat, Vec2};

/// 3D vector over [`NativeFloat`].
///
/// Same value semantics as [`Vec2`]. Use [`drop_z`](Vec3::drop_z) to go down to 2D,
/// the other direction is a lossless `From` conversion with `z = 0`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec3 {
    pub(crate) x: NativeFloat,
    pub(crate) y: NativeFloat,
    pub(crate) z: NativeFloat,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);
    pub const UP: Vec3 = Vec3::Y;
    pub const RIGHT: Vec3 = Vec3::X;
    pub const FORWARD: Vec3 = Vec3::Z;

    pub const fn new(x: NativeFloat, y: NativeFloat, z: NativeFloat) -> Self {
        Vec3 { x, y, z }
    }

    pub const fn splat(v: NativeFloat) -> Self {
        Vec3 { x: v, y: v, z: v }
    }

    #[inline]
    pub fn x(&self) -> NativeFloat {
        self.x
    }

    #[inline]
    pub fn y(&self) -> NativeFloat {
        self.y
    }

    #[inline]
    pub fn z(&self) -> NativeFloat {
        self.z
    }

    #[inline]
    pub fn set_x(&mut self, x: NativeFloat) {
        self.x = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: NativeFloat) {
        self.y = y;
    }

    #[inline]
    pub fn set_z(&mut self, z: NativeFloat) {
        self.z = z;
    }

    pub fn dot(self, other: Vec3) -> NativeFloat {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn length_squared(self) -> NativeFloat {
        self.dot(self)
    }

    pub fn length(self) -> NativeFloat {
        Float::sqrt(self.length_squared())
    }

    pub fn distance_to(self, other: Vec3) -> NativeFloat {
        (other - self).length()
    }

    /// Prefer this over [`distance_to`](Self::distance_to) when only comparing distances.
    pub fn distance_squared_to(self, other: Vec3) -> NativeFloat {
        (other - self).length_squared()
    }

    /// Unit vector in the direction of `self`, [`Vec3::ZERO`] for zero or non-finite length.
    pub fn normalized(self) -> Vec3 {
        self.try_normalized().unwrap_or(Vec3::ZERO)
    }

    pub fn try_normalized(self) -> Result<Vec3> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Ok(self / len)
        } else {
            Err(Error::DegenerateVector)
        }
    }

    /// Unit vector pointing from `self` towards `other`, [`Vec3::ZERO`] when they coincide.
    pub fn direction_to(self, other: Vec3) -> Vec3 {
        (other - self).normalized()
    }

    pub fn try_direction_to(self, other: Vec3) -> Result<Vec3> {
        (other - self).try_normalized()
    }

    /// Drops the z component.
    pub fn drop_z(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Truncates each component toward zero, saturating at the `i32` bounds (NaN becomes `0`).
    pub fn truncate_to_ivec3(self) -> IVec3 {
        IVec3::new(self.x as i32, self.y as i32, self.z as i32)
    }
}

/// Hashes the component bits with `-0.0` folded into `0.0`, so vectors equal under `==`
/// hash equally. There is no `Eq` (NaN is unequal to itself), so this is meant for
/// hash-based comparisons such as change detection or hashing a vector as part of a
/// larger key, not for direct use as a `HashMap`/`HashSet` key.
impl Hash for Vec3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_bits(self.x).hash(state);
        hash_bits(self.y).hash(state);
        hash_bits(self.z).hash(state);
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Vec3 {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul for Vec3 {
    type Output = Self;

    fn mul(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }
}

impl Div for Vec3 {
    type Output = Self;

    fn div(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x / other.x,
            y: self.y / other.y,
            z: self.z / other.z,
        }
    }
}

impl Mul<NativeFloat> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: NativeFloat) -> Vec3 {
        Vec3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Mul<Vec3> for NativeFloat {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl Div<NativeFloat> for Vec3 {
    type Output = Self;

    fn div(self, rhs: NativeFloat) -> Vec3 {
        Vec3 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl From<[NativeFloat; 3]> for Vec3 {
    fn from(a: [NativeFloat; 3]) -> Self {
        Vec3::new(a[0], a[1], a[2])
    }
}

impl From<Vec3> for [NativeFloat; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<(NativeFloat, NativeFloat, NativeFloat)> for Vec3 {
    fn from((x, y, z): (NativeFloat, NativeFloat, NativeFloat)) -> Self {
        Vec3::new(x, y, z)
    }
}

impl From<Vec3> for (NativeFloat, NativeFloat, NativeFloat) {
    fn from(v: Vec3) -> Self {
        (v.x, v.y, v.z)
    }
}

/// `z = 0`
impl From<Vec2> for Vec3 {
    fn from(v: Vec2) -> Self {
        Vec3::new(v.x, v.y, 0.0)
    }
}

impl From<IVec3> for Vec3 {
    fn from(v: IVec3) -> Self {
        Vec3::new(v.x as NativeFloat, v.y as NativeFloat, v.z as NativeFloat)
    }
}

/// `z = 0`
impl From<IVec2> for Vec3 {
    fn from(v: IVec2) -> Self {
        Vec3::new(v.x as NativeFloat, v.y as NativeFloat, 0.0)
    }
}

impl AbsDiffEq for Vec3 {
    type Epsilon = NativeFloat;

    fn default_epsilon() -> NativeFloat {
        NativeFloat::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: NativeFloat) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vec3 {
    fn default_max_relative() -> NativeFloat {
        NativeFloat::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: NativeFloat, max_relative: NativeFloat) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Vec3 {
    fn default_max_ulps() -> u32 {
        NativeFloat::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: NativeFloat, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;
    use approx::assert_relative_eq;

    #[test]
    fn componentwise_arithmetic() {
        let a = Vec3::new(1.0, -2.0, 0.5);
        let b = Vec3::new(4.0, 8.0, -2.0);

        assert_eq!(a + b, Vec3::new(5.0, 6.0, -1.5));
        assert_eq!(a - b, Vec3::new(-3.0, -10.0, 2.5));
        assert_eq!(-a, Vec3::new(-1.0, 2.0, -0.5));
        assert_eq!(a * b, Vec3::new(4.0, -16.0, -1.0));
        assert_eq!(b / a, Vec3::new(4.0, -4.0, -4.0));
        assert_eq!(0.5 * b, Vec3::new(2.0, 4.0, -1.0));
        assert_eq!(b / 2.0, b * 0.5);
    }

    #[test]
    fn cross_of_axes() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    }

    #[test]
    fn distance_and_direction() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(3.0, 5.0, 9.0);
        assert_eq!(a.distance_squared_to(b), 49.0);
        assert_eq!(a.distance_to(b), 7.0);
        assert_relative_eq!(a.distance_to(b), b.distance_to(a));

        let dir = a.direction_to(b);
        assert_relative_eq!(dir, Vec3::new(2.0, 3.0, 6.0) / 7.0);
        assert_relative_eq!(dir.length(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn zero_length_normalizes_to_zero() {
        assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
        assert_eq!(Vec3::ZERO.try_normalized(), Err(Error::DegenerateVector));
        assert_eq!(Vec3::ONE.direction_to(Vec3::ONE), Vec3::ZERO);
        let inf = Vec3::new(NativeFloat::INFINITY, 0.0, 0.0);
        assert_eq!(inf.normalized(), Vec3::ZERO);
    }

    #[test]
    fn conversions() {
        let v = Vec3::new(-2.9, 2.9, -0.1);
        assert_eq!(v.truncate_to_ivec3(), IVec3::new(-2, 2, 0));
        assert_eq!(v.drop_z(), Vec2::new(-2.9, 2.9));
        assert_eq!(Vec3::from(Vec2::new(1.0, 2.0)), Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(Vec3::from(IVec2::new(-1, 2)), Vec3::new(-1.0, 2.0, 0.0));
        assert_eq!(Vec3::from(IVec3::new(-1, 2, 3)), Vec3::new(-1.0, 2.0, 3.0));
        let a: [NativeFloat; 3] = v.into();
        assert_eq!(Vec3::from(a), v);
    }

    #[test]
    fn saturating_truncation() {
        let v = Vec3::new(1e12, -1e12, NativeFloat::NAN);
        assert_eq!(v.truncate_to_ivec3(), IVec3::new(i32::MAX, i32::MIN, 0));
    }
}
