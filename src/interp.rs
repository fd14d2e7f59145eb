//! Curve evaluation over anything implementing [`Point`].
//!
//! Available functions:
//! - [`lerp()`]: straight line between two values
//! - [`smerp()`]: cubic ease between two values with a tunable smoothness factor
//! - [`serp3()`] / [`serp4()`]: closed-form quadratic / cubic Bezier (Bernstein form)
//! - [`serp()`] / [`serp_array()`]: de Casteljau evaluation of any number of control points
//!
//! All of them are pure: nothing is retained between calls and the scratch
//! space used by [`serp()`] is private to each call.
use log::{debug, trace};
use num_traits::One;
use tinyvec::TinyVec;

use crate::error::{Error, Result};
use crate::point::Point;

/// Number of intermediate points [`serp()`] keeps on the stack.
/// Curves with more than `SCRATCH_INLINE + 1` control points use a heap buffer
/// that is freed before the call returns.
pub const SCRATCH_INLINE: usize = 16;

/// Linear interpolation `a + (b - a) * t`.
/// `t` is not clamped, values outside `[0, 1]` extrapolate along the line.
/// Both endpoints are exact: `t = 0` yields `a` and `t = 1` yields `b`,
/// even when `b - a` rounds.
#[inline]
pub fn lerp<P: Point>(a: P, b: P, t: P::Scalar) -> P {
    if t == P::Scalar::one() {
        return b;
    }
    a + (b - a) * t
}

/// Smooth interpolation between `a` and `b` following a cubic Bezier shaped ease with smoothness `k`:
/// `a + (b - a) * t * (1 - 2k(1 - 3t + 2t²))`
///
/// - `k = 0.5`: symmetric S-curve, starts slow, accelerates in the middle, slows at the end
/// - `k = 0`: exactly [`lerp()`]
/// - `k = -1`: slows to a momentary stop at `t = 0.5`, then accelerates towards `b`
///
/// Values of `k` outside `[-1, 0.5]` overshoot the `[a, b]` range before settling.
#[inline]
pub fn smerp<P: Point>(a: P, b: P, k: P::Scalar, t: P::Scalar) -> P {
    let one = P::Scalar::one();
    let two = one + one;
    let three = two + one;
    let s = t * (one - two * k * (one - three * t + two * t * t));
    lerp(a, b, s)
}

/// Quadratic Bezier through `a`, `b`, `c` in expanded Bernstein form
/// `a + (2(b - a) + (a - 2b + c)t)t`. Needs no scratch space.
#[inline]
pub fn serp3<P: Point>(a: P, b: P, c: P, t: P::Scalar) -> P {
    let two = P::Scalar::one() + P::Scalar::one();
    a + ((b - a) * two + (a - b * two + c) * t) * t
}

/// Cubic Bezier through `a`, `b`, `c`, `d` in expanded Bernstein form
/// `a + (3(b - a) + (3(a - 2b + c) + (-a + 3b - 3c + d)t)t)t`. Needs no scratch space.
#[inline]
pub fn serp4<P: Point>(a: P, b: P, c: P, d: P, t: P::Scalar) -> P {
    let one = P::Scalar::one();
    let two = one + one;
    let three = two + one;
    let c1 = (b - a) * three;
    let c2 = (a - b * two + c) * three;
    let c3 = (d - a) + (b - c) * three;
    a + (c1 + (c2 + c3 * t) * t) * t
}

/// Evaluates the Bezier curve defined by `points` at `t` using De Casteljau's algorithm.
///
/// Adjacent pairs are lerped left to right, one full pass per level, until a single
/// point remains. Scratch space is `points.len() - 1` values, on the stack up to
/// [`SCRATCH_INLINE`]. Fails with [`Error::TooFewControlPoints`] for fewer than two points.
pub fn serp<P: Point>(points: &[P], t: P::Scalar) -> Result<P> {
    let n = points.len();
    if n < 2 {
        debug!("serp: rejecting curve with {} control point(s)", n);
        return Err(Error::TooFewControlPoints { provided: n });
    }
    if n == 2 {
        return Ok(lerp(points[0], points[1], t));
    }
    if n - 1 > SCRATCH_INLINE {
        trace!("serp: {} control points exceed inline scratch, using heap buffer", n);
    }

    let mut buffer: TinyVec<[P; SCRATCH_INLINE]> = TinyVec::with_capacity(n - 1);
    buffer.extend(points.windows(2).map(|pair| lerp(pair[0], pair[1], t)));

    // each level collapses the first `level` intermediate points into `level - 1`
    for level in (2..n).rev() {
        for i in 0..level - 1 {
            buffer[i] = lerp(buffer[i], buffer[i + 1], t);
        }
    }
    Ok(buffer[0])
}

/// [`serp()`] for a point count known at compile time.
/// Works on a copy of the array so it never allocates, `N < 2` does not compile.
pub fn serp_array<P: Point, const N: usize>(points: [P; N], t: P::Scalar) -> P {
    const { assert!(N >= 2, "a curve needs at least two control points") };
    let mut p = points;
    for level in (1..N).rev() {
        for i in 0..level {
            p[i] = lerp(p[i], p[i + 1], t);
        }
    }
    p[0]
}
