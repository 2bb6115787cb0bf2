use thiserror::Error;

/// Errors returned by [Curve](crate::Curve) operations a caller can recover from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// Curve was constructed with fewer than two control points.
    #[error("Error in Curve: curve must have at least 2 control points, got {0}")]
    TooFewControlPoints(usize),

    /// Curves combined with [Curve::add_curve](crate::Curve::add_curve) have different section counts.
    #[error("Error in Curve: section counts do not match, expected {expected}, got {actual}")]
    SectionCountMismatch { expected: usize, actual: usize },
}
