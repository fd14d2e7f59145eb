use crate::interp::serp_array;
use crate::point::Point;

/// Common abstraction over everything that can be sampled at a curve parameter `t`.
pub trait Spline<P: Point> {
    fn eval(&self, t: P::Scalar) -> P;
}

/// Bezier curve of degree `N - 1` over `N` inline control points of type `P`
/// (scalars, [`Vec2`](crate::Vec2) or [`Vec3`](crate::Vec3)).
/// Evaluation goes through [`serp_array`] and never allocates; `N < 2` fails to compile
/// on the first call to [`eval`](Self::eval).
///
/// ```rust
/// use serp::{Bezier, Vec2};
///
/// let arch = Bezier::new([Vec2::new(0.0, 0.0), Vec2::new(5.0, 10.0), Vec2::new(10.0, 0.0)]);
/// assert_eq!(arch.eval(0.5), Vec2::new(5.0, 5.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bezier<P: Point, const N: usize> {
    control_points: [P; N],
}

impl<P: Point, const N: usize> Spline<P> for Bezier<P, N> {
    fn eval(&self, t: P::Scalar) -> P {
        serp_array(self.control_points, t)
    }
}

/// Yields the control points from start to end.
impl<P: Point, const N: usize> IntoIterator for Bezier<P, N> {
    type Item = P;
    type IntoIter = core::array::IntoIter<P, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.control_points.into_iter()
    }
}

impl<P: Point, const N: usize> From<[P; N]> for Bezier<P, N> {
    fn from(control_points: [P; N]) -> Self {
        Self { control_points }
    }
}

impl<P: Point, const N: usize> Bezier<P, N> {
    pub const fn new(control_points: [P; N]) -> Self {
        Self { control_points }
    }

    pub fn control_points(&self) -> [P; N] {
        self.control_points
    }

    /// Degree of the curve, one less than the number of control points.
    pub const fn degree(&self) -> usize {
        N - 1
    }

    /// Evaluate a point on the curve at `t`, which should be in the interval [0,1].
    /// Values outside of it extrapolate the polynomial.
    pub fn eval(&self, t: P::Scalar) -> P {
        serp_array(self.control_points, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{serp, serp3, serp4, Vec2, Vec3, EPSILON};

    #[test]
    fn eval_endpoints() {
        let points = [
            Vec2::new(0.0, 1.77),
            Vec2::new(1.1, -1.0),
            Vec2::new(4.3, 3.0),
            Vec2::new(3.2, -4.0),
            Vec2::new(7.3, 2.7),
            Vec2::new(8.9, 1.7),
        ];
        let curve = Bezier::new(points);

        let err_start = curve.eval(0.0) - points[0];
        assert!(err_start.length_squared() < EPSILON);

        let err_end = curve.eval(1.0) - points[points.len() - 1];
        assert!(err_end.length_squared() < EPSILON);
    }

    #[test]
    fn matches_general_and_closed_form_evaluation() {
        let quadratic = Bezier::from([0.0f32, 10.0, 0.0]);
        let cubic = Bezier::new([
            Vec3::new(0.0, 1.77, 0.0),
            Vec3::new(1.1, -1.0, 2.0),
            Vec3::new(4.3, 3.0, -2.0),
            Vec3::new(3.2, -4.0, 1.0),
        ]);
        let [a, b, c, d] = cubic.control_points();

        let nsteps: usize = 1000;
        for t in 0..=nsteps {
            let t = t as f32 / nsteps as f32;
            assert_eq!(Ok(quadratic.eval(t)), serp(&quadratic.control_points(), t));
            assert!((quadratic.eval(t) - serp3(0.0, 10.0, 0.0, t)).abs() < 1e-4);

            let err = cubic.eval(t) - serp4(a, b, c, d, t);
            assert!(err.length_squared() < EPSILON);
        }
    }

    #[test]
    fn sampled_through_spline_trait() {
        fn sample<P: Point, S: Spline<P>>(curve: &S, t: P::Scalar) -> P {
            curve.eval(t)
        }
        let line = Bezier::new([Vec2::ZERO, Vec2::new(4.0, 2.0)]);
        assert_eq!(sample(&line, 0.25), Vec2::new(1.0, 0.5));
        assert_eq!(line.degree(), 1);
    }

    #[test]
    fn control_points_iterate_in_order() {
        let curve = Bezier::from([Vec2::ZERO, Vec2::ONE, Vec2::X]);
        let scaled: std::vec::Vec<Vec2> = curve.into_iter().map(|p| p * 2.0).collect();
        assert_eq!(scaled, [Vec2::ZERO, Vec2::splat(2.0), Vec2::new(2.0, 0.0)]);
        assert_eq!(Bezier::new(curve.control_points()), curve);
    }
}
