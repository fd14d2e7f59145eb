//! Glam adapter implementations, enabled with the `glam` feature.
//!
//! `glam::Vec2`/`Vec3`/`IVec2`/`IVec3` convert to and from the types of the same
//! name in this crate.

use crate::{IVec2, IVec3, Vec2, Vec3};

impl From<glam::Vec2> for Vec2 {
    fn from(v: glam::Vec2) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec2> for glam::Vec2 {
    fn from(v: Vec2) -> Self {
        glam::Vec2::new(v.x(), v.y())
    }
}

impl From<glam::Vec3> for Vec3 {
    fn from(v: glam::Vec3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for glam::Vec3 {
    fn from(v: Vec3) -> Self {
        glam::Vec3::new(v.x(), v.y(), v.z())
    }
}

impl From<glam::IVec2> for IVec2 {
    fn from(v: glam::IVec2) -> Self {
        IVec2::new(v.x, v.y)
    }
}

impl From<IVec2> for glam::IVec2 {
    fn from(v: IVec2) -> Self {
        glam::IVec2::new(v.x(), v.y())
    }
}

impl From<glam::IVec3> for IVec3 {
    fn from(v: glam::IVec3) -> Self {
        IVec3::new(v.x, v.y, v.z)
    }
}

impl From<IVec3> for glam::IVec3 {
    fn from(v: IVec3) -> Self {
        glam::IVec3::new(v.x(), v.y(), v.z())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let v = Vec2::new(0.5, -4.0);
        assert_eq!(Vec2::from(glam::Vec2::from(v)), v);
        let w = glam::IVec3::new(1, -2, 3);
        assert_eq!(glam::IVec3::from(IVec3::from(w)), w);
        assert_eq!(glam::Vec3::from(Vec3::FORWARD), glam::Vec3::Z);
    }
}
