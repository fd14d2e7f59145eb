//! Nalgebra adapter implementations.
//!
//! Enable this adapter with the `nalgebra` feature to convert between
//! [`Vec2`]/[`Vec3`] and `nalgebra::Vector2<f32>`/`Vector3<f32>`, and between
//! [`IVec2`]/[`IVec3`] and their `i32` counterparts. Add `nalgebra` as a direct
//! dependency to construct the vectors in your own code.
//!
//! # Example
//! ```rust,no_run
//! use nalgebra::Vector2;
//! use serp::{lerp, Vec2};
//!
//! let a: Vec2 = Vector2::new(0.0f32, 0.0).into();
//! let b: Vec2 = Vector2::new(10.0f32, 4.0).into();
//!
//! let mid: Vector2<f32> = lerp(a, b, 0.5).into();
//! # let _ = mid;
//! ```

use nalgebra::{Vector2, Vector3};

use crate::{IVec2, IVec3, NativeFloat, Vec2, Vec3};

impl From<Vector2<NativeFloat>> for Vec2 {
    fn from(v: Vector2<NativeFloat>) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec2> for Vector2<NativeFloat> {
    fn from(v: Vec2) -> Self {
        Vector2::new(v.x(), v.y())
    }
}

impl From<Vector3<NativeFloat>> for Vec3 {
    fn from(v: Vector3<NativeFloat>) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Vector3<NativeFloat> {
    fn from(v: Vec3) -> Self {
        Vector3::new(v.x(), v.y(), v.z())
    }
}

impl From<Vector2<i32>> for IVec2 {
    fn from(v: Vector2<i32>) -> Self {
        IVec2::new(v.x, v.y)
    }
}

impl From<IVec2> for Vector2<i32> {
    fn from(v: IVec2) -> Self {
        Vector2::new(v.x(), v.y())
    }
}

impl From<Vector3<i32>> for IVec3 {
    fn from(v: Vector3<i32>) -> Self {
        IVec3::new(v.x, v.y, v.z)
    }
}

impl From<IVec3> for Vector3<i32> {
    fn from(v: IVec3) -> Self {
        Vector3::new(v.x(), v.y(), v.z())
    }
}
