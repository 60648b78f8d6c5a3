/// Conversion of points between two coordinate spaces, e.g. from geographic coordinates into a plane.
///
/// `unproject(project(p))` must return `p` up to rounding errors.
pub trait Projection {
    /// Point type of the source space.
    type InPoint;
    /// Point type of the target space.
    type OutPoint;

    /// Converts a point into the target space. Returns `None` if the point cannot be represented there.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    /// Converts a point back from the target space.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}
