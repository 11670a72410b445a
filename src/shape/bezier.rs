use kurbo::{CubicBez, ParamCurve};

use crate::point::Point;

/// Default number of line segments a curve is drawn with
pub const CURVE_RESOLUTION: usize = 32;

/// Cubic Bezier point at `t` for the four control points
pub fn evaluate(controls: [Point; 4], t: f64) -> Point {
    let [p0, p1, p2, p3] = controls;
    CubicBez::new(p0, p1, p2, p3).eval(t).into()
}

/// `resolution + 1` evenly spaced samples from `t = 0` to `t = 1`
pub fn sample(controls: [Point; 4], resolution: usize) -> Vec<Point> {
    let resolution = resolution.max(1);
    (0..=resolution)
        .map(|i| evaluate(controls, i as f64 / resolution as f64))
        .collect()
}
