pub mod interval;
pub mod logging;
pub mod point;
pub mod rectangle;
pub mod result;
pub mod types;
pub mod vector;

pub use interval::{in_range, Bounds};
pub use point::Point;
pub use rectangle::{FourCorners, Rectangle};
pub use result::{PlanarError, PlanarErrorKind, PlanarResult};
pub use vector::Vector;
