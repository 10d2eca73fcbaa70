// Cartesian (math) space: greater y values are higher, not lower as on screen.
pub struct CartesianSpace;
pub type Float = f64;
pub type EuclidPoint = euclid::Point2D<Float, CartesianSpace>;
pub type EuclidVector = euclid::Vector2D<Float, CartesianSpace>;
pub type EuclidBox = euclid::Box2D<Float, CartesianSpace>;
