use crate::bail_kind;
use crate::interval::{in_range, Bounds};
use crate::point::Point;
use crate::result::PlanarResult;
use crate::types::{EuclidBox, Float};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FourCorners {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_right: Point,
    pub bottom_left: Point,
}

impl FourCorners {
    // Clockwise, starting at the top left corner
    pub fn to_array(self) -> [Point; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }
}

/// Axis aligned rectangle in Cartesian space, so `top_left` has the greater y value.
///
/// Construction guarantees a positive width and height: `top_left` lies strictly to the left of
/// and strictly above `bottom_right`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    top_left: Point,
    bottom_right: Point,
}

impl Rectangle {
    pub fn new(top_left: Point, bottom_right: Point) -> PlanarResult<Rectangle> {
        if !top_left.to_the_left_of(bottom_right, false) {
            debug!("Rejected rectangle {} / {}", top_left, bottom_right);
            bail_kind!(
                InvalidRectangle,
                "top left {} is not strictly left of bottom right {}",
                top_left,
                bottom_right
            );
        }
        if !top_left.above_of(bottom_right, false) {
            debug!("Rejected rectangle {} / {}", top_left, bottom_right);
            bail_kind!(
                InvalidRectangle,
                "top left {} is not strictly above bottom right {}",
                top_left,
                bottom_right
            );
        }
        trace!("Created rectangle {} / {}", top_left, bottom_right);
        Ok(Rectangle {
            top_left,
            bottom_right,
        })
    }

    pub fn top_left_width_height(
        top_left: Point,
        width: Float,
        height: Float,
    ) -> PlanarResult<Rectangle> {
        // NaN fails these checks as well
        if !(width > 0.0) {
            bail_kind!(InvalidRectangle, "width must be positive, was {}", width);
        }
        if !(height > 0.0) {
            bail_kind!(InvalidRectangle, "height must be positive, was {}", height);
        }
        Rectangle::new(top_left, top_left.add_x(width).add_y(-height))
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    pub fn top(&self) -> Float {
        self.top_left.y()
    }

    pub fn bottom(&self) -> Float {
        self.bottom_right.y()
    }

    pub fn left(&self) -> Float {
        self.top_left.x()
    }

    pub fn right(&self) -> Float {
        self.bottom_right.x()
    }

    pub fn width(&self) -> Float {
        self.right() - self.left()
    }

    pub fn height(&self) -> Float {
        self.top() - self.bottom()
    }

    pub fn four_corners(&self) -> FourCorners {
        FourCorners {
            top_left: self.top_left,
            top_right: Point::new(self.right(), self.top()),
            bottom_right: self.bottom_right,
            bottom_left: Point::new(self.left(), self.bottom()),
        }
    }

    fn contains_point(&self, point: Point, include_edges: bool) -> bool {
        let bounds = Bounds::uniform(include_edges);
        in_range(point.x(), self.left(), self.right(), bounds)
            && in_range(point.y(), self.bottom(), self.top(), bounds)
    }

    pub fn point_lies_inside(&self, point: Point) -> bool {
        self.contains_point(point, true)
    }

    pub fn point_lies_safely_inside(&self, point: Point) -> bool {
        self.contains_point(point, false)
    }

    // Points on the edge lie outside, but not safely outside
    pub fn point_lies_outside(&self, point: Point) -> bool {
        !self.point_lies_safely_inside(point)
    }

    pub fn point_lies_safely_outside(&self, point: Point) -> bool {
        !self.point_lies_inside(point)
    }

    pub fn point_lies_on_edge(&self, point: Point) -> bool {
        self.point_lies_inside(point) && !self.point_lies_safely_inside(point)
    }

    pub fn contains_rectangle(&self, other: &Rectangle, may_touch_edge: bool) -> bool {
        other
            .four_corners()
            .to_array()
            .into_iter()
            .all(|corner| self.contains_point(corner, may_touch_edge))
    }

    pub fn to_box2d(&self) -> EuclidBox {
        EuclidBox::new(
            Point::new(self.left(), self.bottom()).into(),
            Point::new(self.right(), self.top()).into(),
        )
    }
}
