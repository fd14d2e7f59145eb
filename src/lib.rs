//! Small fixed-size vector types and allocation-free curve evaluation.
//!
//! The crate has two layers:
//! - value types [`Vec2`], [`Vec3`] (over [`NativeFloat`]) and [`IVec2`], [`IVec3`] (over `i32`)
//!   with componentwise arithmetic, distances, normalization and explicit lossy conversions
//! - pure interpolation functions over anything implementing [`Point`]:
//!   [`lerp`], [`smerp`], the closed-form Bezier shortcuts [`serp3`]/[`serp4`]
//!   and the general N-point evaluator [`serp`]
//!
//! ```rust
//! use serp::{serp, lerp, Vec2};
//!
//! let mid = lerp(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 0.5);
//! assert_eq!(mid, Vec2::new(5.0, 0.0));
//!
//! let peak = serp(&[0.0f32, 10.0, 0.0], 0.5).unwrap();
//! assert_eq!(peak, 5.0);
//! ```
//!
//! None of the functions keep state between calls, so everything here is safe to
//! call from any number of threads. The only shared resource is the random number
//! generator behind the `rand` feature, see [`random`](crate::random) for its policy.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(test, not(feature = "std")))]
extern crate std;

pub mod adapters;
pub mod bezier;
pub mod error;
pub mod interp;
pub mod ivec2;
pub mod ivec3;
pub mod point;
#[cfg(feature = "rand")]
pub mod random;
pub mod vec2;
pub mod vec3;

pub use bezier::{Bezier, Spline};
pub use error::{Error, Result};
pub use interp::{lerp, serp, serp3, serp4, serp_array, smerp, SCRATCH_INLINE};
pub use ivec2::IVec2;
pub use ivec3::IVec3;
pub use point::Point;
#[cfg(feature = "rand")]
pub use random::RandomVector;
pub use vec2::Vec2;
pub use vec3::Vec3;

/// The element type of the float vectors and the interpolation parameter used with them.
pub type NativeFloat = f32;

/// Default absolute tolerance when comparing interpolated values.
pub const EPSILON: NativeFloat = 1e-6;
