//! Fixed-size cubic Hermite curve ("float curve").
//!
//! A [Curve] holds a fixed number of [ControlPoint]s, each with a value and a slope, and
//! evaluates the cubic matching both at every pair of adjacent points. Sections are found by
//! walking a balanced binary search tree stored as two indices per [CubicSection], and queries
//! outside the control points return the nearest boundary value. Curves with the same number
//! of sections can be scaled and added in place.
//!
//! # Example
//! ```
//! use float_curve::Curve;
//! use assert_approx_eq::assert_approx_eq;
//!
//! let mut curve = Curve::new(3).unwrap();
//! curve.set_point(0, 0.0, 0.0, 0.0);
//! curve.set_point(1, 1.0, 1.0, 0.0);
//! curve.set_point(2, 2.0, 0.0, 0.0);
//! curve.bake();
//!
//! assert_approx_eq!(0.5, curve.evaluate(0.5), 1e-12);
//! assert_approx_eq!(0.0, curve.evaluate(-5.0), 1e-12);
//!
//! let mut doubled = curve.clone();
//! doubled.add_curve(&curve).unwrap();
//! assert_approx_eq!(2.0, doubled.evaluate(1.0), 1e-12);
//! ```

mod control_point;
mod cubic_section;
mod curve;
mod error;
mod section_tree;

pub use control_point::ControlPoint;
pub use cubic_section::CubicSection;
pub use curve::Curve;
pub use error::CurveError;
