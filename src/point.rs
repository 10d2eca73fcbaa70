use crate::bail_kind;
use crate::result::{PlanarError, PlanarResult};
use crate::types::{EuclidPoint, Float};
use std::fmt::{Display, Formatter};
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;
use tracing::debug;

/// Immutable point in Cartesian space, `-0.0` is stored as `0.0` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    x: Float,
    y: Float,
}

fn normalize_zero(value: Float) -> Float {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

impl Point {
    pub const SEPARATOR: char = '~';
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: Float, y: Float) -> Self {
        Self {
            x: normalize_zero(x),
            y: normalize_zero(y),
        }
    }

    pub fn x(&self) -> Float {
        self.x
    }

    pub fn y(&self) -> Float {
        self.y
    }

    // Per axis, not euclidean distance
    pub fn equals_within(self, other: Point, tolerance: Float) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    pub fn distance_from_start_of_axes(self) -> Float {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn rotate_90_right_without_pivot(self) -> Point {
        Point::new(-self.y, self.x)
    }

    pub fn rotate_90_left_without_pivot(self) -> Point {
        Point::new(self.y, -self.x)
    }

    pub fn rotate_90_right(self) -> Point {
        self.rotate_90_right_around(Point::ORIGIN)
    }

    pub fn rotate_90_left(self) -> Point {
        self.rotate_90_left_around(Point::ORIGIN)
    }

    pub fn rotate_90_right_around(self, pivot: Point) -> Point {
        (self - pivot).rotate_90_right_without_pivot() + pivot
    }

    pub fn rotate_90_left_around(self, pivot: Point) -> Point {
        (self - pivot).rotate_90_left_without_pivot() + pivot
    }

    pub fn add_x(self, d: Float) -> Point {
        Point::new(self.x + d, self.y)
    }

    pub fn add_y(self, d: Float) -> Point {
        Point::new(self.x, self.y + d)
    }

    pub fn opposite(self) -> Point {
        Point::new(-self.x, -self.y)
    }

    pub fn to_the_left_of(self, other: Point, same_x_allowed: bool) -> bool {
        if same_x_allowed {
            self.x <= other.x
        } else {
            self.x < other.x
        }
    }

    pub fn to_the_right_of(self, other: Point, same_x_allowed: bool) -> bool {
        if same_x_allowed {
            self.x >= other.x
        } else {
            self.x > other.x
        }
    }

    pub fn above_of(self, other: Point, same_y_allowed: bool) -> bool {
        if same_y_allowed {
            self.y >= other.y
        } else {
            self.y > other.y
        }
    }

    pub fn below_of(self, other: Point, same_y_allowed: bool) -> bool {
        if same_y_allowed {
            self.y <= other.y
        } else {
            self.y < other.y
        }
    }

    /// Reflects the point through the center of a `width` x `height` grid of cells,
    /// e.g. to flip cell coordinates for display.
    pub fn reflection_in_grid(self, width: Float, height: Float) -> Point {
        let middle = Point::new((width - 1.0) / 2.0, (height - 1.0) / 2.0);
        (self - middle).opposite() + middle
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        self + other.opposite()
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.opposite()
    }
}

fn write_coordinate(f: &mut Formatter<'_>, value: Float) -> std::fmt::Result {
    if value == Float::INFINITY {
        write!(f, "Infinity")
    } else if value == Float::NEG_INFINITY {
        write!(f, "-Infinity")
    } else {
        write!(f, "{}", value)
    }
}

fn parse_coordinate(input: &str) -> PlanarResult<Float> {
    let input = input.trim();
    match input {
        "Infinity" | "+Infinity" => Ok(Float::INFINITY),
        "-Infinity" => Ok(Float::NEG_INFINITY),
        _ => Ok(input.parse::<Float>()?),
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_coordinate(f, self.x)?;
        write!(f, "{}", Point::SEPARATOR)?;
        write_coordinate(f, self.y)
    }
}

impl FromStr for Point {
    type Err = PlanarError;

    fn from_str(input: &str) -> PlanarResult<Point> {
        let Some((x, y)) = input.split_once(Point::SEPARATOR) else {
            debug!("Rejected point '{}'", input);
            bail_kind!(
                Parse,
                "Expected '{}' in point '{}'",
                Point::SEPARATOR,
                input
            );
        };
        let x = parse_coordinate(x)
            .map_err(|e| e.change_context(format!("Failed to parse x of point '{}'", input)))?;
        let y = parse_coordinate(y)
            .map_err(|e| e.change_context(format!("Failed to parse y of point '{}'", input)))?;
        Ok(Point::new(x, y))
    }
}

impl From<Point> for EuclidPoint {
    fn from(point: Point) -> Self {
        EuclidPoint::new(point.x, point.y)
    }
}

impl From<EuclidPoint> for Point {
    fn from(point: EuclidPoint) -> Self {
        Point::new(point.x, point.y)
    }
}
