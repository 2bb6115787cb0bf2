use std::cmp::Ordering;

use crate::{
    control_point::ControlPoint, cubic_section::CubicSection, error::CurveError, section_tree,
};

/// Fixed-size cubic Hermite curve.
///
/// The number of control points is set once in [Curve::new] and never changes. After
/// assigning points, [Curve::bake] derives one [CubicSection] per adjacent pair; it must be
/// called again whenever a point changes.
///
/// Control points must be assigned in strictly ascending `x` order. This is not checked:
/// unordered or coincident points give meaningless results.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    control_points: Vec<ControlPoint>,
    sections: Vec<CubicSection>,
    center_index: usize,
}

impl Curve {
    pub fn new(number_of_points: usize) -> Result<Self, CurveError> {
        if number_of_points < 2 {
            return Err(CurveError::TooFewControlPoints(number_of_points));
        }

        let mut sections = vec![CubicSection::default(); number_of_points - 1];
        let center_index = section_tree::link_sections(&mut sections);

        Ok(Curve {
            control_points: vec![ControlPoint::default(); number_of_points],
            sections,
            center_index,
        })
    }

    /// Allocates a curve for `points`, assigns them in order and bakes it.
    /// # Example
    /// ```
    /// use float_curve::{ControlPoint, Curve};
    ///
    /// let curve = Curve::with_points(vec![
    ///     ControlPoint::new(0.0, 1.0, 0.0),
    ///     ControlPoint::new(2.0, 3.0, 0.0),
    /// ]).unwrap();
    ///
    /// assert_eq!(2.0, curve.evaluate(1.0));
    /// ```
    pub fn with_points(points: Vec<ControlPoint>) -> Result<Self, CurveError> {
        let mut curve = Curve::new(points.len())?;
        curve.control_points.copy_from_slice(&points);
        curve.bake();
        Ok(curve)
    }

    /// # Panics
    /// If `index` is not lower than [Curve::number_of_points].
    pub fn set_point(&mut self, index: usize, x: f64, y: f64, slope: f64) {
        self.control_points[index] = ControlPoint::new(x, y, slope);
    }

    /// Same as [Curve::set_point] for a [ControlPoint] or a `Vector3<f64>` laid out as
    /// `(x, y, dy/dx)`.
    pub fn set_control_point(&mut self, index: usize, point: impl Into<ControlPoint>) {
        self.control_points[index] = point.into();
    }

    pub fn bake(&mut self) {
        for (section, pair) in self.sections.iter_mut().zip(self.control_points.windows(2)) {
            section.build(&pair[0], &pair[1]);
        }
    }

    /// Value of the curve at `x`. Outside the baked domain the value at the nearest end
    /// is returned.
    /// # Panics
    /// If the search tree is malformed and the walk does not settle on a section.
    pub fn evaluate(&self, x: f64) -> f64 {
        let last_index = self.sections.len() - 1;
        let mut index = self.center_index;

        for _ in 0..=self.sections.len() {
            let section = &self.sections[index];
            match section.check_range(x) {
                Ordering::Greater => {
                    if index >= last_index {
                        return section.evaluate_upper_lim();
                    }
                    index = section.next_index;
                }
                Ordering::Equal => return section.evaluate(x),
                Ordering::Less => {
                    if index == 0 {
                        return section.evaluate_lower_lim();
                    }
                    index = section.prev_index;
                }
            }
        }

        panic!(
            "section search for x = {} did not terminate within {} hops",
            x,
            self.sections.len() + 1
        )
    }

    pub fn batch_evaluate(&self, x_vector: &[f64]) -> Vec<f64> {
        x_vector.iter().map(|x| self.evaluate(*x)).collect()
    }

    /// Multiplies every section by `factor`. Limits and search links are unchanged.
    pub fn scale(&mut self, factor: f64) {
        for section in self.sections.iter_mut() {
            section.scale(factor);
        }
    }

    /// Adds the sections of `other` to the sections of this curve by position, keeping this
    /// curve's limits. Both curves are expected to share the same `x` partitioning; only the
    /// section count is verified.
    /// # Errors
    /// [CurveError::SectionCountMismatch] when the section counts differ. Neither curve is
    /// modified in that case.
    pub fn add_curve(&mut self, other: &Curve) -> Result<(), CurveError> {
        if self.sections.len() != other.sections.len() {
            return Err(CurveError::SectionCountMismatch {
                expected: self.sections.len(),
                actual: other.sections.len(),
            });
        }

        for (section, other_section) in self.sections.iter_mut().zip(other.sections.iter()) {
            section.add_coefficients(other_section);
        }
        Ok(())
    }

    pub fn number_of_points(&self) -> usize {
        self.control_points.len()
    }

    pub fn number_of_sections(&self) -> usize {
        self.sections.len()
    }

    pub fn center_index(&self) -> usize {
        self.center_index
    }

    pub fn control_points(&self) -> &[ControlPoint] {
        &self.control_points
    }

    pub fn sections(&self) -> &[CubicSection] {
        &self.sections
    }

    /// `(lowest x, highest x)` of the baked sections.
    pub fn domain(&self) -> (f64, f64) {
        let first = &self.sections[0];
        let last = &self.sections[self.sections.len() - 1];
        (first.lower_lim(), last.upper_lim())
    }
}
