/// Boundary condition imposed on one end of a spline column during setup.
///
/// The tridiagonal system that determines the knot curvatures has one free
/// equation at each end of the table; the boundary condition supplies it.
///
/// # Example
/// ```
/// use multispline::BoundaryCondition;
///
/// // endpoint slope pinned to -1.5
/// let clamped = BoundaryCondition::Clamped(-1.5);
/// // "natural" end, second derivative 0
/// let natural = BoundaryCondition::natural();
/// assert_eq!(natural, BoundaryCondition::SecondDerivative(0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryCondition {
    /// The first derivative of the spline at the endpoint takes the given value.
    Clamped(f64),
    /// The second derivative of the spline at the endpoint takes the given
    /// value. Zero gives the classic natural spline.
    SecondDerivative(f64),
}

impl BoundaryCondition {
    /// Natural boundary condition, second derivative equal to zero.
    pub fn natural() -> Self {
        BoundaryCondition::SecondDerivative(0.0)
    }
}
