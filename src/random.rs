//! Uniformly distributed random vectors (feature `rand`).
//!
//! Every constructor takes the generator as `&mut R` so callers decide where the
//! randomness comes from and can seed it for reproducible sequences. With the
//! `std` feature [`RandomVector::random`] draws from `rand::rng()`, which is one
//! generator per thread: concurrent callers never contend for it, but sequences
//! are not reproducible across threads.
use core::f32::consts::TAU;
use core::fmt::Debug;
use core::ops::RangeInclusive;

use log::debug;
use num_traits::{Float, Signed, Zero};
use rand::distr::uniform::{SampleUniform, Uniform};
use rand::Rng;

use crate::error::{Error, Result};
use crate::{IVec2, IVec3, NativeFloat, Vec2, Vec3};

/// Builds a uniform distribution over `[min, max]`, rejecting empty, NaN or infinite ranges.
fn uniform<S>(min: S, max: S) -> Result<Uniform<S>>
where
    S: SampleUniform + Debug,
{
    let bounds = (min, max);
    Uniform::new_inclusive(&bounds.0, &bounds.1).map_err(|e| {
        debug!("rejecting sampling range {:?}: {}", bounds, e);
        Error::InvalidRange
    })
}

/// Vectors whose components can be drawn independently and uniformly.
pub trait RandomVector: Sized {
    type Scalar: SampleUniform + Signed + PartialOrd + Copy + Debug;

    /// Number of components.
    const DIM: usize;

    /// Builds a vector by asking `f` for each axis index in order.
    fn try_from_fn<F>(f: F) -> Result<Self>
    where
        F: FnMut(usize) -> Result<Self::Scalar>;

    /// Each component uniformly in `[min, max]`.
    fn random_in_range<R: Rng + ?Sized>(
        rng: &mut R,
        min: Self::Scalar,
        max: Self::Scalar,
    ) -> Result<Self> {
        let dist = uniform(min, max)?;
        Self::try_from_fn(|_| Ok(rng.sample(&dist)))
    }

    /// Each component uniformly in `[-half_range, half_range]`.
    fn random_symmetric<R: Rng + ?Sized>(rng: &mut R, half_range: Self::Scalar) -> Result<Self> {
        if half_range < Self::Scalar::zero() {
            debug!("rejecting negative half range {:?}", half_range);
            return Err(Error::InvalidRange);
        }
        Self::random_in_range(rng, -half_range, half_range)
    }

    /// Component `i` uniformly in `ranges[i]`. The slice must have exactly [`DIM`](Self::DIM) entries.
    fn random_per_axis<R: Rng + ?Sized>(
        rng: &mut R,
        ranges: &[RangeInclusive<Self::Scalar>],
    ) -> Result<Self> {
        if ranges.len() != Self::DIM {
            debug!("expected {} per-axis ranges, got {}", Self::DIM, ranges.len());
            return Err(Error::RangeCountMismatch {
                expected: Self::DIM,
                provided: ranges.len(),
            });
        }
        Self::try_from_fn(|axis| {
            let range = &ranges[axis];
            let dist = uniform(*range.start(), *range.end())?;
            Ok(rng.sample(dist))
        })
    }

    /// [`random_in_range`](Self::random_in_range) using the calling thread's generator.
    #[cfg(feature = "std")]
    fn random(min: Self::Scalar, max: Self::Scalar) -> Result<Self> {
        Self::random_in_range(&mut rand::rng(), min, max)
    }
}

impl RandomVector for Vec2 {
    type Scalar = NativeFloat;
    const DIM: usize = 2;

    fn try_from_fn<F>(mut f: F) -> Result<Self>
    where
        F: FnMut(usize) -> Result<NativeFloat>,
    {
        Ok(Vec2::new(f(0)?, f(1)?))
    }
}

impl RandomVector for Vec3 {
    type Scalar = NativeFloat;
    const DIM: usize = 3;

    fn try_from_fn<F>(mut f: F) -> Result<Self>
    where
        F: FnMut(usize) -> Result<NativeFloat>,
    {
        Ok(Vec3::new(f(0)?, f(1)?, f(2)?))
    }
}

impl RandomVector for IVec2 {
    type Scalar = i32;
    const DIM: usize = 2;

    fn try_from_fn<F>(mut f: F) -> Result<Self>
    where
        F: FnMut(usize) -> Result<i32>,
    {
        Ok(IVec2::new(f(0)?, f(1)?))
    }
}

impl RandomVector for IVec3 {
    type Scalar = i32;
    const DIM: usize = 3;

    fn try_from_fn<F>(mut f: F) -> Result<Self>
    where
        F: FnMut(usize) -> Result<i32>,
    {
        Ok(IVec3::new(f(0)?, f(1)?, f(2)?))
    }
}

fn check_radius(max_radius: NativeFloat) -> Result<()> {
    if max_radius >= 0.0 && max_radius.is_finite() {
        Ok(())
    } else {
        debug!("rejecting radius {}", max_radius);
        Err(Error::InvalidRange)
    }
}

impl Vec2 {
    /// Point drawn uniformly from the disk of radius `max_radius` around the origin.
    /// The radius is scaled by `sqrt(u)` so the density is uniform over the area.
    pub fn random_in_disk<R: Rng + ?Sized>(rng: &mut R, max_radius: NativeFloat) -> Result<Vec2> {
        check_radius(max_radius)?;
        let radius = max_radius * Float::sqrt(rng.random::<NativeFloat>());
        let angle = rng.random::<NativeFloat>() * TAU;
        Ok(Vec2::new(Float::cos(angle), Float::sin(angle)) * radius)
    }
}

impl Vec3 {
    /// Point drawn uniformly from the solid sphere of radius `max_radius` around the origin.
    /// The direction is uniform on the unit sphere and the radius is scaled by `cbrt(u)`
    /// so the density is uniform over the volume.
    pub fn random_in_sphere<R: Rng + ?Sized>(
        rng: &mut R,
        max_radius: NativeFloat,
    ) -> Result<Vec3> {
        check_radius(max_radius)?;
        let z: NativeFloat = rng.random_range(-1.0..=1.0);
        let azimuth = rng.random::<NativeFloat>() * TAU;
        let ring = Float::sqrt(Float::max(1.0 - z * z, 0.0));
        let direction = Vec3::new(ring * Float::cos(azimuth), ring * Float::sin(azimuth), z);
        let radius = max_radius * Float::cbrt(rng.random::<NativeFloat>());
        Ok(direction * radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const DRAWS: usize = 10_000;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5e_7a)
    }

    #[test]
    fn symmetric_range_bounds_and_mean() {
        let mut rng = rng();
        let mut sum = Vec3::ZERO;
        for _ in 0..DRAWS {
            let v = Vec3::random_symmetric(&mut rng, 5.0).unwrap();
            for c in [v.x(), v.y(), v.z()] {
                assert!((-5.0..=5.0).contains(&c));
            }
            sum = sum + v;
        }
        let mean = sum / DRAWS as NativeFloat;
        // standard error of the mean is ~0.03 here
        assert!(mean.x().abs() < 0.2 && mean.y().abs() < 0.2 && mean.z().abs() < 0.2);
    }

    #[test]
    fn integer_range_is_inclusive() {
        let mut rng = rng();
        let mut seen = [false; 11];
        for _ in 0..DRAWS {
            let v = IVec2::random_in_range(&mut rng, -5, 5).unwrap();
            assert!((-5..=5).contains(&v.x()) && (-5..=5).contains(&v.y()));
            seen[(v.x() + 5) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn per_axis_ranges_are_independent() {
        let mut rng = rng();
        for _ in 0..1000 {
            let v = IVec3::random_per_axis(&mut rng, &[0..=0, 10..=20, -3..=-1]).unwrap();
            assert_eq!(v.x(), 0);
            assert!((10..=20).contains(&v.y()));
            assert!((-3..=-1).contains(&v.z()));

            let w = Vec2::random_per_axis(&mut rng, &[1.0..=2.0, -8.0..=-4.0]).unwrap();
            assert!((1.0..=2.0).contains(&w.x()));
            assert!((-8.0..=-4.0).contains(&w.y()));
        }
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        let mut rng = rng();
        assert_eq!(Vec2::random_in_range(&mut rng, 1.0, -1.0), Err(Error::InvalidRange));
        assert_eq!(
            Vec2::random_in_range(&mut rng, NativeFloat::NAN, 1.0),
            Err(Error::InvalidRange)
        );
        assert_eq!(IVec3::random_symmetric(&mut rng, -1), Err(Error::InvalidRange));
        assert_eq!(
            Vec3::random_per_axis(&mut rng, &[0.0..=1.0, 0.0..=1.0]),
            Err(Error::RangeCountMismatch {
                expected: 3,
                provided: 2
            })
        );
        assert_eq!(
            IVec2::random_per_axis(&mut rng, &[0..=1, 5..=4]),
            Err(Error::InvalidRange)
        );
        assert_eq!(Vec2::random_in_disk(&mut rng, -1.0), Err(Error::InvalidRange));
        assert_eq!(
            Vec3::random_in_sphere(&mut rng, NativeFloat::INFINITY),
            Err(Error::InvalidRange)
        );
    }

    #[test]
    fn disk_is_uniform_over_area() {
        let mut rng = rng();
        let mut inner = 0;
        for _ in 0..DRAWS {
            let p = Vec2::random_in_disk(&mut rng, 2.0).unwrap();
            let r = p.length();
            assert!(r <= 2.0 + 1e-5);
            if r < 1.0 {
                inner += 1;
            }
        }
        // a quarter of the area lies within half the radius
        let fraction = inner as f64 / DRAWS as f64;
        assert!((fraction - 0.25).abs() < 0.03, "fraction = {}", fraction);
    }

    #[test]
    fn sphere_is_uniform_over_volume() {
        let mut rng = rng();
        let mut inner = 0;
        let mut upper = 0;
        for _ in 0..DRAWS {
            let p = Vec3::random_in_sphere(&mut rng, 3.0).unwrap();
            let r = p.length();
            assert!(r <= 3.0 + 1e-4);
            if r < 1.5 {
                inner += 1;
            }
            if p.z() > 0.0 {
                upper += 1;
            }
        }
        // an eighth of the volume lies within half the radius
        let fraction = inner as f64 / DRAWS as f64;
        assert!((fraction - 0.125).abs() < 0.02, "fraction = {}", fraction);
        let fraction = upper as f64 / DRAWS as f64;
        assert!((fraction - 0.5).abs() < 0.03, "fraction = {}", fraction);
    }

    #[test]
    fn seeded_sequences_repeat() {
        let a: std::vec::Vec<Vec2> = {
            let mut rng = rng();
            (0..16).map(|_| Vec2::random_symmetric(&mut rng, 1.0).unwrap()).collect()
        };
        let b: std::vec::Vec<Vec2> = {
            let mut rng = rng();
            (0..16).map(|_| Vec2::random_symmetric(&mut rng, 1.0).unwrap()).collect()
        };
        assert_eq!(a, b);
    }

    #[cfg(feature = "std")]
    #[test]
    fn thread_local_generator() {
        for _ in 0..100 {
            let v = IVec2::random(-2, 2).unwrap();
            assert!((-2..=2).contains(&v.x()) && (-2..=2).contains(&v.y()));
        }
    }
}
