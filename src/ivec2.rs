use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::{IVec3, NativeFloat, Vec2, Vec3};

/// 2D integer vector, e.g. for grid or lattice coordinates.
///
/// Arithmetic follows `i32` semantics: overflow panics in debug builds and
/// division by a zero component panics. Geometric queries that need a square
/// root return [`NativeFloat`]; multiplying or dividing by a float promotes to [`Vec2`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct IVec2 {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl IVec2 {
    pub const ZERO: IVec2 = IVec2::new(0, 0);
    pub const ONE: IVec2 = IVec2::new(1, 1);
    pub const X: IVec2 = IVec2::new(1, 0);
    pub const Y: IVec2 = IVec2::new(0, 1);
    pub const UP: IVec2 = IVec2::Y;
    pub const RIGHT: IVec2 = IVec2::X;

    pub const fn new(x: i32, y: i32) -> Self {
        IVec2 { x, y }
    }

    pub const fn splat(v: i32) -> Self {
        IVec2 { x: v, y: v }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    /// Dot product, computed in `i64` so grid-sized coordinates never overflow.
    pub fn dot(self, other: IVec2) -> i64 {
        self.x as i64 * other.x as i64 + self.y as i64 * other.y as i64
    }

    pub fn length_squared(self) -> i64 {
        self.dot(self)
    }

    /// Euclidean length as a float, no truncation back to `i32`.
    pub fn length(self) -> NativeFloat {
        Vec2::from(self).length()
    }

    /// Squared distance in `i64`. Differences are taken after widening, so
    /// only per-axis gaps beyond roughly `2^31` can overflow.
    pub fn distance_squared_to(self, other: IVec2) -> i64 {
        let dx = other.x as i64 - self.x as i64;
        let dy = other.y as i64 - self.y as i64;
        dx * dx + dy * dy
    }

    pub fn distance_to(self, other: IVec2) -> NativeFloat {
        Vec2::from(self).distance_to(Vec2::from(other))
    }

    /// Unit float vector from `self` towards `other`, [`Vec2::ZERO`] when they coincide.
    pub fn direction_to(self, other: IVec2) -> Vec2 {
        Vec2::from(self).direction_to(Vec2::from(other))
    }

    /// Unit float vector in the direction of `self`, [`Vec2::ZERO`] for the zero vector.
    pub fn normalized(self) -> Vec2 {
        Vec2::from(self).normalized()
    }
}

impl Add for IVec2 {
    type Output = Self;

    fn add(self, other: IVec2) -> IVec2 {
        IVec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for IVec2 {
    type Output = Self;

    fn sub(self, other: IVec2) -> IVec2 {
        IVec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for IVec2 {
    type Output = Self;

    fn neg(self) -> IVec2 {
        IVec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul for IVec2 {
    type Output = Self;

    fn mul(self, other: IVec2) -> IVec2 {
        IVec2 {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }
}

/// Componentwise integer division, truncating toward zero.
impl Div for IVec2 {
    type Output = Self;

    fn div(self, other: IVec2) -> IVec2 {
        IVec2 {
            x: self.x / other.x,
            y: self.y / other.y,
        }
    }
}

impl Mul<i32> for IVec2 {
    type Output = Self;

    fn mul(self, rhs: i32) -> IVec2 {
        IVec2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Mul<IVec2> for i32 {
    type Output = IVec2;

    fn mul(self, rhs: IVec2) -> IVec2 {
        rhs * self
    }
}

impl Div<i32> for IVec2 {
    type Output = Self;

    fn div(self, rhs: i32) -> IVec2 {
        IVec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl Mul<NativeFloat> for IVec2 {
    type Output = Vec2;

    fn mul(self, rhs: NativeFloat) -> Vec2 {
        Vec2::from(self) * rhs
    }
}

impl Mul<IVec2> for NativeFloat {
    type Output = Vec2;

    fn mul(self, rhs: IVec2) -> Vec2 {
        Vec2::from(rhs) * self
    }
}

impl Div<NativeFloat> for IVec2 {
    type Output = Vec2;

    fn div(self, rhs: NativeFloat) -> Vec2 {
        Vec2::from(self) / rhs
    }
}

impl From<[i32; 2]> for IVec2 {
    fn from(a: [i32; 2]) -> Self {
        IVec2::new(a[0], a[1])
    }
}

impl From<IVec2> for [i32; 2] {
    fn from(v: IVec2) -> Self {
        [v.x, v.y]
    }
}

impl From<(i32, i32)> for IVec2 {
    fn from((x, y): (i32, i32)) -> Self {
        IVec2::new(x, y)
    }
}

impl From<IVec2> for (i32, i32) {
    fn from(v: IVec2) -> Self {
        (v.x, v.y)
    }
}
