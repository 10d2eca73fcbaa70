use log::{error, info};
use planar::logging::init_logging;
use planar::result::PlanarResult;
use planar::{context, Point, Rectangle};
use tracing::Level;

// Usage: classify [TOP_LEFT BOTTOM_RIGHT] [POINT...], points written as "x~y"
fn main() {
    if let Err(error) = main_internal() {
        error!("Aborted with error: {:?}", error);
        std::process::exit(1);
    }
}

fn main_internal() -> PlanarResult<()> {
    init_logging(Level::DEBUG)?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (rectangle, points) = if args.len() >= 2 {
        let top_left: Point = args[0].parse()?;
        let bottom_right: Point = args[1].parse()?;
        let rectangle = context!("create rectangle from '{}' and '{}'", args[0], args[1] => {
            Rectangle::new(top_left, bottom_right)
        })?;
        (rectangle, &args[2..])
    } else {
        (Rectangle::new(Point::new(0.0, 2.0), Point::new(3.0, 0.0))?, &args[..])
    };
    info!(
        "Classifying against rectangle {} / {}",
        rectangle.top_left(),
        rectangle.bottom_right()
    );

    let points: Vec<Point> = if points.is_empty() {
        vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(-0.1, -0.1)]
    } else {
        points
            .iter()
            .map(|point| point.parse())
            .collect::<PlanarResult<_>>()?
    };
    for point in points {
        info!(
            "{}: inside={} safely_inside={} outside={} safely_outside={} on_edge={}",
            point,
            rectangle.point_lies_inside(point),
            rectangle.point_lies_safely_inside(point),
            rectangle.point_lies_outside(point),
            rectangle.point_lies_safely_outside(point),
            rectangle.point_lies_on_edge(point),
        );
    }
    Ok(())
}
