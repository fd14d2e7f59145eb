use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::{IVec2, NativeFloat, Vec3};

/// 3D integer vector. See [`IVec2`] for the arithmetic rules.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct IVec3 {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) z: i32,
}

impl IVec3 {
    pub const ZERO: IVec3 = IVec3::new(0, 0, 0);
    pub const ONE: IVec3 = IVec3::new(1, 1, 1);
    pub const X: IVec3 = IVec3::new(1, 0, 0);
    pub const Y: IVec3 = IVec3::new(0, 1, 0);
    pub const Z: IVec3 = IVec3::new(0, 0, 1);
    pub const UP: IVec3 = IVec3::Y;
    pub const RIGHT: IVec3 = IVec3::X;
    pub const FORWARD: IVec3 = IVec3::Z;

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        IVec3 { x, y, z }
    }

    pub const fn splat(v: i32) -> Self {
        IVec3 { x: v, y: v, z: v }
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
    pub fn z(&self) -> i32 {
        self.z
    }

    #[inline]
    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    #[inline]
    pub fn set_z(&mut self, z: i32) {
        self.z = z;
    }

    /// Dot product in `i64`, see [`IVec2::dot`].
    pub fn dot(self, other: IVec3) -> i64 {
        self.x as i64 * other.x as i64
            + self.y as i64 * other.y as i64
            + self.z as i64 * other.z as i64
    }

    pub fn length_squared(self) -> i64 {
        self.dot(self)
    }

    pub fn length(self) -> NativeFloat {
        Vec3::from(self).length()
    }

    pub fn distance_squared_to(self, other: IVec3) -> i64 {
        let dx = other.x as i64 - self.x as i64;
        let dy = other.y as i64 - self.y as i64;
        let dz = other.z as i64 - self.z as i64;
        dx * dx + dy * dy + dz * dz
    }

    pub fn distance_to(self, other: IVec3) -> NativeFloat {
        Vec3::from(self).distance_to(Vec3::from(other))
    }

    pub fn direction_to(self, other: IVec3) -> Vec3 {
        Vec3::from(self).direction_to(Vec3::from(other))
    }

    pub fn normalized(self) -> Vec3 {
        Vec3::from(self).normalized()
    }

    /// Drops the z component.
    pub fn drop_z(self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }
}

impl Add for IVec3 {
    type Output = Self;

    fn add(self, other: IVec3) -> IVec3 {
        IVec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for IVec3 {
    type Output = Self;

    fn sub(self, other: IVec3) -> IVec3 {
        IVec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Neg for IVec3 {
    type Output = Self;

    fn neg(self) -> IVec3 {
        IVec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul for IVec3 {
    type Output = Self;

    fn mul(self, other: IVec3) -> IVec3 {
        IVec3 {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }
}

impl Div for IVec3 {
    type Output = Self;

    fn div(self, other: IVec3) -> IVec3 {
        IVec3 {
            x: self.x / other.x,
            y: self.y / other.y,
            z: self.z / other.z,
        }
    }
}

impl Mul<i32> for IVec3 {
    type Output = Self;

    fn mul(self, rhs: i32) -> IVec3 {
        IVec3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Mul<IVec3> for i32 {
    type Output = IVec3;

    fn mul(self, rhs: IVec3) -> IVec3 {
        rhs * self
    }
}

impl Div<i32> for IVec3 {
    type Output = Self;

    fn div(self, rhs: i32) -> IVec3 {
        IVec3 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl Mul<NativeFloat> for IVec3 {
    type Output = Vec3;

    fn mul(self, rhs: NativeFloat) -> Vec3 {
        Vec3::from(self) * rhs
    }
}

impl Mul<IVec3> for NativeFloat {
    type Output = Vec3;

    fn mul(self, rhs: IVec3) -> Vec3 {
        Vec3::from(rhs) * self
    }
}

impl Div<NativeFloat> for IVec3 {
    type Output = Vec3;

    fn div(self, rhs: NativeFloat) -> Vec3 {
        Vec3::from(self) / rhs
    }
}

/// `z = 0`
impl From<IVec2> for IVec3 {
    fn from(v: IVec2) -> Self {
        IVec3::new(v.x, v.y, 0)
    }
}

impl From<[i32; 3]> for IVec3 {
    fn from(a: [i32; 3]) -> Self {
        IVec3::new(a[0], a[1], a[2])
    }
}

impl From<IVec3> for [i32; 3] {
    fn from(v: IVec3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<(i32, i32, i32)> for IVec3 {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        IVec3::new(x, y, z)
    }
}

impl From<IVec3> for (i32, i32, i32) {
    fn from(v: IVec3) -> Self {
        (v.x, v.y, v.z)
    }
}
