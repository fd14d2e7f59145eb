use core::hash::{Hash, Hasher};
use core::ops::{Add, Div, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::Float;

use crate::error::{Error, Result};
use crate::{IVec2, IVec3, NativeFloat};

/// 2D vector over [`NativeFloat`].
///
/// A plain value type: every operation returns a new vector, components only
/// change through the explicit setters. Equality is componentwise.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub(crate) x: NativeFloat,
    pub(crate) y: NativeFloat,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);
    pub const ONE: Vec2 = Vec2::new(1.0, 1.0);
    pub const X: Vec2 = Vec2::new(1.0, 0.0);
    pub const Y: Vec2 = Vec2::new(0.0, 1.0);
    pub const UP: Vec2 = Vec2::Y;
    pub const RIGHT: Vec2 = Vec2::X;

    pub const fn new(x: NativeFloat, y: NativeFloat) -> Self {
        Vec2 { x, y }
    }

    /// Creates a vector with all components set to `v`.
    pub const fn splat(v: NativeFloat) -> Self {
        Vec2 { x: v, y: v }
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
    pub fn set_x(&mut self, x: NativeFloat) {
        self.x = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: NativeFloat) {
        self.y = y;
    }

    pub fn dot(self, other: Vec2) -> NativeFloat {
        self.x * other.x + self.y * other.y
    }

    /// Squared L2 norm. Cheaper than [`length`](Self::length) as it skips the square root.
    pub fn length_squared(self) -> NativeFloat {
        self.dot(self)
    }

    /// L2 norm of the vector (its distance from the origin).
    pub fn length(self) -> NativeFloat {
        Float::sqrt(self.length_squared())
    }

    /// Euclidean distance between `self` and `other`.
    pub fn distance_to(self, other: Vec2) -> NativeFloat {
        (other - self).length()
    }

    /// Squared euclidean distance between `self` and `other`.
    /// Prefer this when only comparing distances, it skips the square root.
    pub fn distance_squared_to(self, other: Vec2) -> NativeFloat {
        (other - self).length_squared()
    }

    /// Returns the unit vector pointing in the same direction as `self`,
    /// or [`Vec2::ZERO`] if the length is zero or not finite.
    pub fn normalized(self) -> Vec2 {
        self.try_normalized().unwrap_or(Vec2::ZERO)
    }

    /// Like [`normalized`](Self::normalized) but fails with
    /// [`Error::DegenerateVector`] instead of returning the zero vector.
    pub fn try_normalized(self) -> Result<Vec2> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Ok(self / len)
        } else {
            Err(Error::DegenerateVector)
        }
    }

    /// Unit vector pointing from `self` towards `other`,
    /// or [`Vec2::ZERO`] when both are the same point.
    pub fn direction_to(self, other: Vec2) -> Vec2 {
        (other - self).normalized()
    }

    pub fn try_direction_to(self, other: Vec2) -> Result<Vec2> {
        (other - self).try_normalized()
    }

    /// Converts to an integer vector by truncating each component toward zero
    /// (`-1.7` becomes `-1`, not `-2`). Values outside the `i32` range saturate, NaN becomes `0`.
    pub fn truncate_to_ivec2(self) -> IVec2 {
        IVec2::new(self.x as i32, self.y as i32)
    }

    /// Same as [`truncate_to_ivec2`](Self::truncate_to_ivec2) with `z = 0`.
    pub fn truncate_to_ivec3(self) -> IVec3 {
        IVec3::new(self.x as i32, self.y as i32, 0)
    }
}

/// Bit pattern used for hashing. `-0.0 == 0.0` so both must hash alike.
#[inline]
pub(crate) fn hash_bits(v: NativeFloat) -> u32 {
    if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}

/// Hashes the component bits with `-0.0` folded into `0.0`, so vectors equal under `==`
/// hash equally. There is no `Eq` (NaN is unequal to itself), so this is meant for
/// hash-based comparisons such as change detection or hashing a vector as part of a
/// larger key, not for direct use as a `HashMap`/`HashSet` key.
impl Hash for Vec2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_bits(self.x).hash(state);
        hash_bits(self.y).hash(state);
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Vec2 {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// Componentwise (Hadamard) product
impl Mul for Vec2 {
    type Output = Self;

    fn mul(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }
}

/// Componentwise division
impl Div for Vec2 {
    type Output = Self;

    fn div(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x / other.x,
            y: self.y / other.y,
        }
    }
}

impl Mul<NativeFloat> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: NativeFloat) -> Vec2 {
        Vec2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Mul<Vec2> for NativeFloat {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl Div<NativeFloat> for Vec2 {
    type Output = Self;

    fn div(self, rhs: NativeFloat) -> Vec2 {
        Vec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl From<[NativeFloat; 2]> for Vec2 {
    fn from(a: [NativeFloat; 2]) -> Self {
        Vec2::new(a[0], a[1])
    }
}

impl From<Vec2> for [NativeFloat; 2] {
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

impl From<(NativeFloat, NativeFloat)> for Vec2 {
    fn from((x, y): (NativeFloat, NativeFloat)) -> Self {
        Vec2::new(x, y)
    }
}

impl From<Vec2> for (NativeFloat, NativeFloat) {
    fn from(v: Vec2) -> Self {
        (v.x, v.y)
    }
}

/// Lossless for every component with magnitude up to 2^24.
impl From<IVec2> for Vec2 {
    fn from(v: IVec2) -> Self {
        Vec2::new(v.x as NativeFloat, v.y as NativeFloat)
    }
}

impl AbsDiffEq for Vec2 {
    type Epsilon = NativeFloat;

    fn default_epsilon() -> NativeFloat {
        NativeFloat::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: NativeFloat) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vec2 {
    fn default_max_relative() -> NativeFloat {
        NativeFloat::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: NativeFloat, max_relative: NativeFloat) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl UlpsEq for Vec2 {
    fn default_max_ulps() -> u32 {
        NativeFloat::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: NativeFloat, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps) && self.y.ulps_eq(&other.y, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;
    use approx::assert_relative_eq;

    #[test]
    fn componentwise_arithmetic() {
        let a = Vec2::new(1.0, -2.0);
        let b = Vec2::new(4.0, 8.0);

        assert_eq!(a + b, Vec2::new(5.0, 6.0));
        assert_eq!(a - b, Vec2::new(-3.0, -10.0));
        assert_eq!(-a, Vec2::new(-1.0, 2.0));
        assert_eq!(a * b, Vec2::new(4.0, -16.0));
        assert_eq!(b / a, Vec2::new(4.0, -4.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, -4.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 4.0, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn setters_change_only_one_component() {
        let mut v = Vec2::ONE;
        v.set_x(3.0);
        assert_eq!(v, Vec2::new(3.0, 1.0));
        v.set_y(-1.0);
        assert_eq!((v.x(), v.y()), (3.0, -1.0));
    }

    /// Check whether classic pythagorean equality holds for sides 3, 4 with hypothenuse 5
    #[test]
    fn distance_pythagorean() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(a.distance_squared_to(b), 25.0);
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let points = [
            Vec2::new(0.0, 1.77),
            Vec2::new(1.1, -1.0),
            Vec2::new(4.3, 3.0),
            Vec2::new(-3.2, -4.0),
        ];
        for a in points {
            for b in points {
                assert_relative_eq!(a.distance_to(b), b.distance_to(a));
            }
        }
    }

    #[test]
    fn direction_is_unit_length() {
        let dir = Vec2::new(1.0, 1.0).direction_to(Vec2::new(4.0, 5.0));
        assert_relative_eq!(dir, Vec2::new(0.6, 0.8));
        assert_relative_eq!(dir.length(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn zero_length_normalizes_to_zero() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
        assert_eq!(Vec2::ONE.direction_to(Vec2::ONE), Vec2::ZERO);
        assert_eq!(Vec2::ZERO.try_normalized(), Err(Error::DegenerateVector));
        assert_eq!(
            Vec2::ONE.try_direction_to(Vec2::ONE),
            Err(Error::DegenerateVector)
        );
        assert!(Vec2::new(NativeFloat::NAN, 1.0).try_normalized().is_err());
    }

    #[test]
    fn truncation_is_toward_zero() {
        assert_eq!(Vec2::new(1.7, -1.7).truncate_to_ivec2(), IVec2::new(1, -1));
        assert_eq!(Vec2::new(-0.5, 0.99).truncate_to_ivec2(), IVec2::ZERO);
        assert_eq!(Vec2::new(2.5, -3.5).truncate_to_ivec3(), IVec3::new(2, -3, 0));
    }

    #[test]
    fn signed_zero_hashes_like_zero() {
        use std::collections::hash_map::DefaultHasher;

        let hash = |v: Vec2| {
            let mut h = DefaultHasher::new();
            v.hash(&mut h);
            h.finish()
        };
        assert_eq!(Vec2::new(-0.0, 0.0), Vec2::ZERO);
        assert_eq!(hash(Vec2::new(-0.0, 0.0)), hash(Vec2::ZERO));
        assert_ne!(hash(Vec2::X), hash(Vec2::Y));

        // as part of a composite key
        let keyed = |id: u32, v: Vec2| {
            let mut h = DefaultHasher::new();
            (id, v).hash(&mut h);
            h.finish()
        };
        assert_eq!(keyed(7, Vec2::new(1.0, -0.0)), keyed(7, Vec2::X));
    }

    #[test]
    fn array_and_tuple_conversions() {
        let v: Vec2 = [1.5, 2.5].into();
        assert_eq!(v, Vec2::new(1.5, 2.5));
        let a: [NativeFloat; 2] = v.into();
        assert_eq!(a, [1.5, 2.5]);
        let t: (NativeFloat, NativeFloat) = v.into();
        assert_eq!(Vec2::from(t), v);
    }
}
