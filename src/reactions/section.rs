//! Fixed-end reactions for distributed loads over a sub-span of the bar.
//!
//! Superposition of effects: the load is first resolved on a clamped bar
//! of the sub-span length, then each partial end reaction is re-applied
//! to the full bar as an equivalent point load or moment at the span
//! boundaries and the four (or two, for uncoupled directions)
//! contributions are summed.

use crate::error::{FrameError, FrameResult};

use super::{all_length, point, EndForces, PlaneReactions};

fn check_span(length: f64, x1: f64, x2: f64) -> FrameResult<()> {
    if !(0.0 <= x1 && x1 < x2 && x2 <= length) {
        return Err(FrameError::InvalidLoadPosition(format!(
            "span [{x1}, {x2}] invalid on bar of length {length}"
        )));
    }
    Ok(())
}

fn span_axis(
    length: f64,
    x1: f64,
    x2: f64,
    local: EndForces,
    point_load: fn(f64, f64, f64) -> FrameResult<EndForces>,
) -> FrameResult<EndForces> {
    Ok(point_load(length, x1, -local.a)? + point_load(length, x2, -local.b)?)
}

fn span_plane(
    length: f64,
    x1: f64,
    x2: f64,
    local: PlaneReactions,
    point_force: fn(f64, f64, f64) -> FrameResult<PlaneReactions>,
    point_moment: fn(f64, f64, f64) -> FrameResult<PlaneReactions>,
) -> FrameResult<PlaneReactions> {
    Ok(point_force(length, x1, -local.ra)?
        + point_force(length, x2, -local.rb)?
        + point_moment(length, x1, -local.ma)?
        + point_moment(length, x2, -local.mb)?)
}

/// Trapezoidal axial load between `x1` and `x2`.
pub fn force_x_trap(
    length: f64,
    x1: f64,
    x2: f64,
    p1: f64,
    p2: f64,
) -> FrameResult<EndForces> {
    check_span(length, x1, x2)?;
    let local = all_length::force_x_trap(x2 - x1, p1, p2)?;
    span_axis(length, x1, x2, local, point::force_x)
}

/// Trapezoidal distributed torque between `x1` and `x2`.
pub fn moment_x_trap(
    length: f64,
    x1: f64,
    x2: f64,
    p1: f64,
    p2: f64,
) -> FrameResult<EndForces> {
    check_span(length, x1, x2)?;
    let local = all_length::moment_x_trap(x2 - x1, p1, p2)?;
    span_axis(length, x1, x2, local, point::moment_x)
}

/// Trapezoidal transverse load in y between `x1` and `x2`.
pub fn force_y_trap(
    length: f64,
    x1: f64,
    x2: f64,
    p1: f64,
    p2: f64,
) -> FrameResult<PlaneReactions> {
    check_span(length, x1, x2)?;
    let local = all_length::force_y_trap(x2 - x1, p1, p2)?;
    span_plane(length, x1, x2, local, point::force_y, point::moment_z)
}

/// Trapezoidal transverse load in z between `x1` and `x2`.
pub fn force_z_trap(
    length: f64,
    x1: f64,
    x2: f64,
    p1: f64,
    p2: f64,
) -> FrameResult<PlaneReactions> {
    check_span(length, x1, x2)?;
    let local = all_length::force_z_trap(x2 - x1, p1, p2)?;
    span_plane(length, x1, x2, local, point::force_z, point::moment_y)
}

/// Trapezoidal distributed moment about y between `x1` and `x2`.
pub fn moment_y_trap(
    length: f64,
    x1: f64,
    x2: f64,
    p1: f64,
    p2: f64,
) -> FrameResult<PlaneReactions> {
    check_span(length, x1, x2)?;
    let local = all_length::moment_y_trap(x2 - x1, p1, p2)?;
    span_plane(length, x1, x2, local, point::force_z, point::moment_y)
}

/// Trapezoidal distributed moment about z between `x1` and `x2`.
pub fn moment_z_trap(
    length: f64,
    x1: f64,
    x2: f64,
    p1: f64,
    p2: f64,
) -> FrameResult<PlaneReactions> {
    check_span(length, x1, x2)?;
    let local = all_length::moment_z_trap(x2 - x1, p1, p2)?;
    span_plane(length, x1, x2, local, point::force_y, point::moment_z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactions::Slope;
    use approx::assert_relative_eq;

    #[test]
    fn test_full_span_matches_all_length() {
        let l = 5.0;
        let span = force_y_trap(l, 0.0, l, -1000.0, -1000.0).unwrap();
        let full = all_length::force_y_rec(l, -1000.0);
        assert_relative_eq!(span.ra, full.ra, max_relative = 1e-12);
        assert_relative_eq!(span.rb, full.rb, max_relative = 1e-12);
        assert_relative_eq!(span.ma, full.ma, max_relative = 1e-12);
        assert_relative_eq!(span.mb, full.mb, max_relative = 1e-12);
    }

    #[test]
    fn test_full_span_triangle_matches_all_length() {
        let l = 6.0;
        let span = force_y_trap(l, 0.0, l, 0.0, -800.0).unwrap();
        let full = all_length::force_y_tri(l, -800.0, Slope::Up);
        assert_relative_eq!(span.ra, full.ra, max_relative = 1e-12);
        assert_relative_eq!(span.rb, full.rb, max_relative = 1e-12);
        assert_relative_eq!(span.ma, full.ma, max_relative = 1e-12);
        assert_relative_eq!(span.mb, full.mb, max_relative = 1e-12);
    }

    #[test]
    fn test_half_span_uniform_statics() {
        // Uniform load on the left half: reactions balance the resultant
        let l = 8.0;
        let w = -1000.0;
        let r = force_y_trap(l, 0.0, 4.0, w, w).unwrap();
        assert_relative_eq!(r.ra + r.rb, -w * 4.0, max_relative = 1e-12);
        // More of the load lands on the nearer end
        assert!(r.ra.abs() > r.rb.abs());
    }

    #[test]
    fn test_half_span_uniform_textbook_moments() {
        // Clamped beam, uniform w over [0, L/2]:
        // Ma = -11 w L^2 / 192, Mb = 5 w L^2 / 192 in this sign convention
        let l = 4.0;
        let w = 1000.0;
        let r = force_y_trap(l, 0.0, l / 2.0, w, w).unwrap();
        assert_relative_eq!(r.ma, -11.0 * w * l * l / 192.0, max_relative = 1e-9);
        assert_relative_eq!(r.mb, 5.0 * w * l * l / 192.0, max_relative = 1e-9);
        assert_relative_eq!(r.ra, -13.0 * w * l / 32.0, max_relative = 1e-9);
        assert_relative_eq!(r.rb, -3.0 * w * l / 32.0, max_relative = 1e-9);
    }

    #[test]
    fn test_interior_point_load_limit() {
        // A narrow rectangle approaches the point load with the same resultant
        let l = 5.0;
        let eps = 1e-4;
        let w = 1000.0 / eps;
        let narrow = force_y_trap(l, 2.0 - eps / 2.0, 2.0 + eps / 2.0, w, w).unwrap();
        let pt = point::force_y(l, 2.0, 1000.0).unwrap();
        assert_relative_eq!(narrow.ra, pt.ra, max_relative = 1e-6);
        assert_relative_eq!(narrow.rb, pt.rb, max_relative = 1e-6);
        assert_relative_eq!(narrow.ma, pt.ma, max_relative = 1e-5);
        assert_relative_eq!(narrow.mb, pt.mb, max_relative = 1e-5);
    }

    #[test]
    fn test_axial_sub_span() {
        // Uniform axial load over [1, 3] on a 5 m bar
        let r = force_x_trap(5.0, 1.0, 3.0, 100.0, 100.0).unwrap();
        // Resultant balances
        assert_relative_eq!(r.a + r.b, -200.0, max_relative = 1e-12);
        // Centroid at x = 2 splits 3:2 between the ends
        assert_relative_eq!(r.a, -120.0, max_relative = 1e-12);
        assert_relative_eq!(r.b, -80.0, max_relative = 1e-12);
    }

    #[test]
    fn test_invalid_span() {
        assert!(force_y_trap(5.0, 3.0, 2.0, 1.0, 1.0).is_err());
        assert!(force_y_trap(5.0, 0.0, 6.0, 1.0, 1.0).is_err());
        assert!(force_y_trap(5.0, -1.0, 2.0, 1.0, 1.0).is_err());
        assert!(force_y_trap(5.0, 2.0, 2.0, 1.0, 1.0).is_err());
    }
}
