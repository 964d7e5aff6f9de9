//! Geometric helpers in 2D and 3D space

use nalgebra::Vector3;

/// Rotate a point around the line through `a` and `b` by `angle` radians.
///
/// Uses the Rodrigues formula around the unit axis a -> b.
pub fn rotate_point_around_line(
    point: &[f64; 3],
    a: &[f64; 3],
    b: &[f64; 3],
    angle: f64,
) -> [f64; 3] {
    let a = Vector3::from(*a);
    let b = Vector3::from(*b);
    let p = Vector3::from(*point);

    let axis = (b - a).normalize();
    let relative = p - a;

    let (sin, cos) = angle.sin_cos();
    let rotated = relative * cos
        + axis.cross(&relative) * sin
        + axis * (axis.dot(&relative)) * (1.0 - cos);

    (rotated + a).into()
}

/// X-intercept of the line through two points.
///
/// Returns `None` when the line never crosses the x-axis at a finite point
/// (vertical line, or horizontal line off the axis).
pub fn root_line(point_1: (f64, f64), point_2: (f64, f64)) -> Option<f64> {
    let (x1, y1) = point_1;
    let (x2, y2) = point_2;

    if x1 == x2 || y1 == y2 {
        return None;
    }

    let slope = (y2 - y1) / (x2 - x1);
    let intercept = y1 - slope * x1;

    Some(-intercept / slope)
}

/// Euclidean distance between two points
pub fn distance(first: &[f64; 3], second: &[f64; 3]) -> f64 {
    let dx = second[0] - first[0];
    let dy = second[1] - first[1];
    let dz = second[2] - first[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}
