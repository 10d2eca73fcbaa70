use crate::bail_kind;
use crate::point::Point;
use crate::result::{PlanarError, PlanarResult};
use crate::types::{EuclidVector, Float};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tracing::debug;

// Bound vector, anchored at `from`. For a pure displacement see `as_free_vector`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub from: Point,
    pub to: Point,
}

impl Vector {
    pub const ARROW: &'static str = "=>";

    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn equals_within(self, other: Vector, tolerance: Float) -> bool {
        self.from.equals_within(other.from, tolerance) && self.to.equals_within(other.to, tolerance)
    }

    pub fn is_vertical(self) -> bool {
        self.from.x() == self.to.x()
    }

    pub fn is_horizontal(self) -> bool {
        self.from.y() == self.to.y()
    }

    pub fn x_projection_in_place(self) -> Vector {
        Vector::new(self.from, Point::new(self.to.x(), self.from.y()))
    }

    pub fn y_projection_in_place(self) -> Vector {
        Vector::new(self.from, Point::new(self.from.x(), self.to.y()))
    }

    pub fn x_delta(self) -> Float {
        self.to.x() - self.from.x()
    }

    pub fn y_delta(self) -> Float {
        self.to.y() - self.from.y()
    }

    /// Scales the displacement by `n`, the anchor `from` stays where it is.
    pub fn scalar_mul(self, n: Float) -> Vector {
        let delta = Point::new(n * self.x_delta(), n * self.y_delta());
        Vector::new(self.from, self.from + delta)
    }

    pub fn as_free_vector(self) -> Point {
        Point::new(self.x_delta(), self.y_delta())
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}){}({})", self.from, Vector::ARROW, self.to)
    }
}

fn strip_parentheses<'a>(part: &'a str, input: &str) -> PlanarResult<&'a str> {
    let Some(inner) = part.strip_prefix('(').and_then(|p| p.strip_suffix(')')) else {
        debug!("Rejected vector '{}'", input);
        bail_kind!(
            Parse,
            "Expected '{}' to be wrapped in parentheses in vector '{}'",
            part,
            input
        );
    };
    Ok(inner)
}

impl FromStr for Vector {
    type Err = PlanarError;

    fn from_str(input: &str) -> PlanarResult<Vector> {
        let Some((from, to)) = input.split_once(Vector::ARROW) else {
            debug!("Rejected vector '{}'", input);
            bail_kind!(
                Parse,
                "Expected '{}' in vector '{}'",
                Vector::ARROW,
                input
            );
        };
        let from = strip_parentheses(from, input)?.parse::<Point>()?;
        let to = strip_parentheses(to, input)?.parse::<Point>()?;
        Ok(Vector::new(from, to))
    }
}

impl From<Vector> for EuclidVector {
    fn from(vector: Vector) -> Self {
        EuclidVector::new(vector.x_delta(), vector.y_delta())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::PlanarErrorKind;
    use assertables::assert_contains;
    use expect_test::expect;
    use rand::Rng;

    fn vector(x1: Float, y1: Float, x2: Float, y2: Float) -> Vector {
        Vector::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn test_display() {
        expect!["(0~1)=>(2~3)"].assert_eq(&vector(0.0, 1.0, 2.0, 3.0).to_string());
        expect!["(-0.5~Infinity)=>(2~-3)"]
            .assert_eq(&vector(-0.5, Float::INFINITY, 2.0, -3.0).to_string());
    }

    #[test]
    fn test_equals() {
        let v1 = vector(0.0, 1.0, 2.0, 3.0);
        let v2 = vector(0.0, 1.0, 2.0, 3.0);
        assert_eq!(v1, v2);
        assert_eq!(v2, v1);
        assert_ne!(v1, vector(0.0, 1.0, 2.0, 3.5));
    }

    #[test]
    fn test_equals_within() {
        let v1 = vector(0.0, 1.0, 2.0, 3.0);
        assert!(v1.equals_within(vector(0.05, 1.0, 2.0, 2.95), 0.1));
        assert!(!v1.equals_within(vector(0.0, 1.0, 2.2, 3.0), 0.1));
        assert!(!v1.equals_within(vector(0.2, 1.0, 2.0, 3.0), 0.1));
    }

    #[test]
    fn test_from_str() {
        let cases = [
            ("(0~1)=>(2~3)", vector(0.0, 1.0, 2.0, 3.0)),
            ("(0~1)=>(2~-3)", vector(0.0, 1.0, 2.0, -3.0)),
            ("(0~-1)=>(-2~-3)", vector(0.0, -1.0, -2.0, -3.0)),
        ];
        for (input, expected) in cases {
            let parsed: Vector = input.parse().unwrap();
            assert_eq!(expected, parsed, "parsing {}", input);
        }
    }

    #[test]
    fn test_round_trip() {
        let mut rng = rand::thread_rng();
        let vectors = [
            vector(0.0, 0.0, 0.0, 0.0),
            vector(-0.0, 0.1 + 0.2, Float::NEG_INFINITY, 1e-9),
            vector(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
            ),
        ];
        for v in vectors {
            let parsed: Vector = v.to_string().parse().unwrap();
            assert_eq!(v, parsed, "round trip of {}", v);
        }
    }

    #[test]
    fn test_from_str_missing_parentheses() {
        for input in ["0~1=>(2~3)", "(0~1)=>2~3", "(0~1=>(2~3)", "()=>", "(0~1)=>(2~3"] {
            let error = input.parse::<Vector>().unwrap_err();
            assert!(
                matches!(error.kind(), PlanarErrorKind::Parse(_)),
                "{} should fail to parse",
                input
            );
        }
        let error = "0~1=>(2~3)".parse::<Vector>().unwrap_err();
        assert_contains!(
            error.to_string(),
            "Expected '0~1' to be wrapped in parentheses"
        );
    }

    #[test]
    fn test_from_str_missing_arrow() {
        let error = "(0~1)(2~3)".parse::<Vector>().unwrap_err();
        assert_eq!(
            &PlanarErrorKind::Parse("Expected '=>' in vector '(0~1)(2~3)'".to_string()),
            error.kind()
        );
    }

    #[test]
    fn test_orientation() {
        assert!(vector(1.0, 0.0, 1.0, 5.0).is_vertical());
        assert!(!vector(1.0, 0.0, 1.0, 5.0).is_horizontal());
        assert!(vector(-1.0, 2.0, 4.0, 2.0).is_horizontal());
        assert!(!vector(-1.0, 2.0, 4.0, 2.0).is_vertical());
        let zero = vector(3.0, 3.0, 3.0, 3.0);
        assert!(zero.is_vertical() && zero.is_horizontal());
    }

    #[test]
    fn test_projections_keep_anchor() {
        let v = vector(1.0, 2.0, 4.0, 6.0);
        assert_eq!(vector(1.0, 2.0, 4.0, 2.0), v.x_projection_in_place());
        assert_eq!(vector(1.0, 2.0, 1.0, 6.0), v.y_projection_in_place());
        assert!(v.x_projection_in_place().is_horizontal());
        assert!(v.y_projection_in_place().is_vertical());
    }

    #[test]
    fn test_deltas() {
        let v = vector(1.0, 2.0, -4.0, 6.5);
        assert_eq!(-5.0, v.x_delta());
        assert_eq!(4.5, v.y_delta());
        assert_eq!(Point::new(-5.0, 4.5), v.as_free_vector());
    }

    #[test]
    fn test_free_vector_ignores_anchor() {
        let v1 = vector(0.0, 0.0, 1.0, 2.0);
        let v2 = vector(10.0, -3.0, 11.0, -1.0);
        assert_ne!(v1, v2);
        assert_eq!(v1.as_free_vector(), v2.as_free_vector());
        let euclid_vector: EuclidVector = v2.into();
        assert_eq!(EuclidVector::new(1.0, 2.0), euclid_vector);
    }

    #[test]
    fn test_scalar_mul_simple() {
        let v = vector(0.0, 0.0, 1.0, 1.0);
        assert_eq!(vector(0.0, 0.0, 2.0, 2.0), v.scalar_mul(2.0));
        assert_eq!(vector(0.0, 0.0, 0.0, 0.0), v.scalar_mul(0.0));
    }

    #[test]
    fn test_scalar_mul_by_zero_and_one() {
        let mut rng = rand::thread_rng();
        for i in 0..100 {
            let i = i as Float;
            let to = Point::new(rng.gen::<Float>() * i, rng.gen::<Float>() * i);
            let v = Vector::new(Point::ORIGIN, to);
            assert_eq!(v, v.scalar_mul(1.0));

            let from = Point::new(rng.gen::<Float>() * i, rng.gen::<Float>() * i);
            let v = Vector::new(from, to);
            let zero = v.scalar_mul(0.0);
            assert_eq!(Vector::new(v.from, v.from), zero);
            assert_eq!(Point::ORIGIN, zero.as_free_vector());
        }
    }

    #[test]
    fn test_scalar_mul_from_origin() {
        let mut rng = rand::thread_rng();
        for s in [-3.0, -2.0, 2.0, 3.0] {
            for i in 0..100 {
                let i = i as Float;
                let x = rng.gen::<Float>() * i;
                let y = rng.gen::<Float>() * i;
                let v = Vector::new(Point::ORIGIN, Point::new(x, y));
                assert_eq!(
                    Vector::new(Point::ORIGIN, Point::new(s * x, s * y)),
                    v.scalar_mul(s)
                );
            }
        }
    }

    #[test]
    fn test_scalar_mul_keeps_anchor() {
        let mut rng = rand::thread_rng();
        for s in [-3.0, -2.0, 0.5, 2.0, 3.0] {
            for i in 0..100 {
                let i = i as Float;
                let origin = Point::new(rng.gen::<Float>() * i, rng.gen::<Float>() * i);
                let x = rng.gen::<Float>() * i;
                let y = rng.gen::<Float>() * i;
                let v = Vector::new(origin, Point::new(x, y));
                let scaled = v.scalar_mul(s);
                let expected = Vector::new(
                    origin,
                    origin + Point::new(s * (x - origin.x()), s * (y - origin.y())),
                );
                assert_eq!(origin, scaled.from);
                assert!(
                    expected.equals_within(scaled, Float::EPSILON * 1000.0),
                    "{} does not equal {}",
                    scaled,
                    expected
                );
            }
        }
    }
}
