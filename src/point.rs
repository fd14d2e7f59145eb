use core::ops::{Add, Mul, Sub};

use num_traits::Float;

use crate::{NativeFloat, Vec2, Vec3};

/// Trait for values that can be blended by the interpolation functions.
/// It only asks for what `a + (b - a) * t` needs: addition, subtraction and
/// scaling by the scalar `t` is drawn from. Scalars count as one-dimensional points.
/// Keeping the trait minimal makes implementing it for other vector types mostly wrapping.
pub trait Point:
    Copy
    + Default
    + PartialEq
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<<Self as Point>::Scalar, Output = Self>
{
    /// Scalar type of the interpolation parameter and of the point's components.
    type Scalar: Float;
}

impl Point for f32 {
    type Scalar = f32;
}

impl Point for f64 {
    type Scalar = f64;
}

impl Point for Vec2 {
    type Scalar = NativeFloat;
}

impl Point for Vec3 {
    type Scalar = NativeFloat;
}
