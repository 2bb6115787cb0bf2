use nalgebra::Vector3;

/// ControlPoint is a single knot of a [Curve](crate::Curve):
/// - `x` - input coordinate,
/// - `y` - output value at `x`,
/// - `slope` - derivative dy/dx at `x`.
///
/// Control points of one curve must be assigned in strictly ascending `x` order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlPoint {
    x: f64,
    y: f64,
    slope: f64,
}

impl ControlPoint {
    /// # Example
    /// ```
    /// use float_curve::ControlPoint;
    ///
    /// let point = ControlPoint::new(1.0, 2.0, -0.5);
    ///
    /// assert_eq!(1.0, point.get_x());
    /// assert_eq!(2.0, point.get_y());
    /// assert_eq!(-0.5, point.get_slope());
    /// ```
    pub fn new(x: f64, y: f64, slope: f64) -> Self {
        ControlPoint { x, y, slope }
    }

    /// Simplified method to create [ControlPoint] with zero slope.
    pub fn flat(x: f64, y: f64) -> Self {
        ControlPoint { x, y, slope: 0.0 }
    }

    pub fn get_x(&self) -> f64 {
        self.x
    }

    pub fn get_y(&self) -> f64 {
        self.y
    }

    pub fn get_slope(&self) -> f64 {
        self.slope
    }
}

/// Reads a control point packed as `(x, y, dy/dx)`.
/// # Example
/// ```
/// use float_curve::ControlPoint;
/// use nalgebra::Vector3;
///
/// let point = ControlPoint::from(Vector3::new(0.5, 3.0, 1.0));
/// assert_eq!(ControlPoint::new(0.5, 3.0, 1.0), point);
/// ```
impl From<Vector3<f64>> for ControlPoint {
    fn from(vector: Vector3<f64>) -> Self {
        ControlPoint { x: vector.x, y: vector.y, slope: vector.z }
    }
}

impl From<ControlPoint> for Vector3<f64> {
    fn from(point: ControlPoint) -> Self {
        Vector3::new(point.x, point.y, point.slope)
    }
}
