use std::cmp::Ordering;

use crate::control_point::ControlPoint;

/// One cubic `a·x³ + b·x² + c·x + d` covering `[lower_lim, upper_lim]`, plus the two
/// links that place it in the curve's implicit search tree.
///
/// Coefficients are expressed in absolute `x`, not in an offset from `lower_lim`, so two
/// sections over the same range can be combined coefficient by coefficient.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CubicSection {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    lower_lim: f64,
    upper_lim: f64,
    pub(crate) next_index: usize,
    pub(crate) prev_index: usize,
}

impl CubicSection {
    /// Fits the Hermite cubic matching value and slope of both control points.
    /// Links are left untouched. `lower.x == upper.x` gives non-finite coefficients.
    pub(crate) fn build(&mut self, lower: &ControlPoint, upper: &ControlPoint) {
        let (x0, y0, m0) = (lower.get_x(), lower.get_y(), lower.get_slope());
        let (x1, y1, m1) = (upper.get_x(), upper.get_y(), upper.get_slope());

        let r = 1.0 / (x0 - x1);
        let r_sq = r * r;

        self.a = r_sq * (2.0 * r * (y1 - y0) + m1 + m0);

        self.b = r_sq
            * (3.0 * (x1 + x0) * r * (y0 - y1)
                - (x0 + 2.0 * x1) * m0
                - (2.0 * x0 + x1) * m1);

        self.c = r_sq
            * (6.0 * x1 * x0 * r * (y1 - y0)
                + (2.0 * x0 * x1 + x1 * x1) * m0
                + (2.0 * x0 * x1 + x0 * x0) * m1);

        self.d = r_sq
            * (r * ((3.0 * x0 - x1) * x1 * x1 * y0 + (x0 - 3.0 * x1) * x0 * x0 * y1)
                - (x0 * x1 * x1 * m0 + x0 * x0 * x1 * m1));

        self.lower_lim = x0;
        self.upper_lim = x1;
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.a.mul_add(x, self.b).mul_add(x, self.c).mul_add(x, self.d)
    }

    pub fn evaluate_lower_lim(&self) -> f64 {
        self.evaluate(self.lower_lim)
    }

    pub fn evaluate_upper_lim(&self) -> f64 {
        self.evaluate(self.upper_lim)
    }

    /// Where `x` lies relative to this section's range: `Less` below, `Greater` above,
    /// `Equal` inside (limits inclusive). NaN is reported as `Equal`.
    pub fn check_range(&self, x: f64) -> Ordering {
        if x > self.upper_lim {
            Ordering::Greater
        } else if x < self.lower_lim {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }

    pub(crate) fn scale(&mut self, factor: f64) {
        self.a *= factor;
        self.b *= factor;
        self.c *= factor;
        self.d *= factor;
    }

    pub(crate) fn add_coefficients(&mut self, other: &CubicSection) {
        self.a += other.a;
        self.b += other.b;
        self.c += other.c;
        self.d += other.d;
    }

    /// `[a, b, c, d]`, highest power first.
    pub fn coefficients(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    pub fn lower_lim(&self) -> f64 {
        self.lower_lim
    }

    pub fn upper_lim(&self) -> f64 {
        self.upper_lim
    }

    /// Section searched when the query lies above this range.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Section searched when the query lies below this range.
    pub fn prev_index(&self) -> usize {
        self.prev_index
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use nalgebra::{Matrix4, Vector4};

    use super::*;

    fn section(lower: ControlPoint, upper: ControlPoint) -> CubicSection {
        let mut section = CubicSection::default();
        section.build(&lower, &upper);
        section
    }

    fn derivative(section: &CubicSection, x: f64) -> f64 {
        let [a, b, c, _] = section.coefficients();
        3.0 * a * x * x + 2.0 * b * x + c
    }

    #[test]
    fn smoothstep() {
        let eps = 1e-12;
        let section = section(ControlPoint::new(0.0, 0.0, 0.0), ControlPoint::new(1.0, 1.0, 0.0));

        let [a, b, c, d] = section.coefficients();
        assert_approx_eq!(a, -2.0, eps);
        assert_approx_eq!(b, 3.0, eps);
        assert_approx_eq!(c, 0.0, eps);
        assert_approx_eq!(d, 0.0, eps);

        assert_approx_eq!(section.evaluate(0.5), 0.5, eps);
        assert_approx_eq!(section.evaluate(0.25), 0.15625, eps);
    }

    #[test]
    fn matches_values_and_slopes() {
        let eps = 1e-9;
        let lower = ControlPoint::new(-1.5, 2.0, 3.0);
        let upper = ControlPoint::new(2.5, -4.0, 0.5);
        let section = section(lower, upper);

        assert_approx_eq!(section.evaluate(-1.5), 2.0, eps);
        assert_approx_eq!(section.evaluate(2.5), -4.0, eps);
        assert_approx_eq!(derivative(&section, -1.5), 3.0, eps);
        assert_approx_eq!(derivative(&section, 2.5), 0.5, eps);

        assert_approx_eq!(section.evaluate_lower_lim(), 2.0, eps);
        assert_approx_eq!(section.evaluate_upper_lim(), -4.0, eps);
    }

    #[test]
    fn reproduces_cubic() {
        // knots lay on f(x) = x^3 - 2x
        let eps = 1e-9;
        let f = |x: f64| x.powi(3) - 2.0 * x;
        let df = |x: f64| 3.0 * x * x - 2.0;
        let section = section(
            ControlPoint::new(1.0, f(1.0), df(1.0)),
            ControlPoint::new(3.0, f(3.0), df(3.0)),
        );

        let [a, b, c, d] = section.coefficients();
        assert_approx_eq!(a, 1.0, eps);
        assert_approx_eq!(b, 0.0, eps);
        assert_approx_eq!(c, -2.0, eps);
        assert_approx_eq!(d, 0.0, eps);
    }

    #[test]
    fn agrees_with_linear_solve() {
        let eps = 1e-8;
        let (x0, y0, m0) = (0.7, -1.2, 2.4);
        let (x1, y1, m1) = (3.1, 5.5, -0.8);
        let section = section(ControlPoint::new(x0, y0, m0), ControlPoint::new(x1, y1, m1));

        let matrix = Matrix4::new(
            x0.powi(3), x0.powi(2), x0, 1.0,
            x1.powi(3), x1.powi(2), x1, 1.0,
            3.0 * x0.powi(2), 2.0 * x0, 1.0, 0.0,
            3.0 * x1.powi(2), 2.0 * x1, 1.0, 0.0,
        );
        let rhs = Vector4::new(y0, y1, m0, m1);
        let solution = matrix.lu().solve(&rhs).unwrap();

        let coefficients = section.coefficients();
        for i in 0..4 {
            assert_approx_eq!(coefficients[i], solution[i], eps);
        }
    }

    #[test]
    fn limits_and_range_check() {
        let section = section(ControlPoint::new(1.0, 0.0, 0.0), ControlPoint::new(2.0, 1.0, 0.0));

        assert_eq!(1.0, section.lower_lim());
        assert_eq!(2.0, section.upper_lim());

        assert_eq!(Ordering::Less, section.check_range(0.999));
        assert_eq!(Ordering::Equal, section.check_range(1.0));
        assert_eq!(Ordering::Equal, section.check_range(1.5));
        assert_eq!(Ordering::Equal, section.check_range(2.0));
        assert_eq!(Ordering::Greater, section.check_range(2.001));
        assert_eq!(Ordering::Equal, section.check_range(f64::NAN));
    }

    #[test]
    fn build_keeps_links() {
        let mut section = CubicSection::default();
        section.next_index = 5;
        section.prev_index = 3;

        section.build(&ControlPoint::new(0.0, 1.0, 0.0), &ControlPoint::new(1.0, 2.0, 0.0));

        assert_eq!(5, section.next_index());
        assert_eq!(3, section.prev_index());
    }

    #[test]
    fn scale_and_add() {
        let eps = 1e-9;
        let mut first = section(ControlPoint::new(0.0, 1.0, -1.0), ControlPoint::new(2.0, 3.0, 0.5));
        let second = section(ControlPoint::new(0.0, -2.0, 4.0), ControlPoint::new(2.0, 0.5, 1.0));
        let original = first;

        first.scale(-3.0);
        assert_approx_eq!(first.evaluate(1.3), -3.0 * original.evaluate(1.3), eps);

        first.add_coefficients(&second);
        assert_approx_eq!(
            first.evaluate(0.4),
            -3.0 * original.evaluate(0.4) + second.evaluate(0.4),
            eps
        );
        assert_eq!(0.0, first.lower_lim());
        assert_eq!(2.0, first.upper_lim());
    }
}
