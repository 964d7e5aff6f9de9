//! Fixed-end reactions for concentrated loads.

use crate::error::{FrameError, FrameResult};

use super::{EndForces, PlaneReactions};

fn check_position(length: f64, x: f64) -> FrameResult<()> {
    if !(0.0..=length).contains(&x) {
        return Err(FrameError::InvalidLoadPosition(format!(
            "position {x} outside bar of length {length}"
        )));
    }
    Ok(())
}

/// Reactions of a clamped bar under an axial point load `p` at `x`.
pub fn force_x(length: f64, x: f64, p: f64) -> FrameResult<EndForces> {
    check_position(length, x)?;

    let a = x;
    let b = length - x;
    let l = length;

    Ok(EndForces {
        a: -p * b / l,
        b: -p * a / l,
    })
}

/// Reactions of a clamped bar under a transverse point load `p` in y at `x`.
///
/// Returns Rya, Ryb and the coupled moments Mza, Mzb.
pub fn force_y(length: f64, x: f64, p: f64) -> FrameResult<PlaneReactions> {
    check_position(length, x)?;

    let a = x;
    let b = length - x;
    let l = length;

    let ma = -(p * a * b * b) / (l * l);
    let mb = (p * a * a * b) / (l * l);

    Ok(PlaneReactions {
        ra: -((p * b / l) - (ma + mb) / l),
        rb: -((p * a / l) + (ma + mb) / l),
        ma,
        mb,
    })
}

/// Reactions of a clamped bar under a transverse point load `p` in z at `x`.
///
/// Returns Rza, Rzb and the coupled moments Mya, Myb; signs mirror
/// [`force_y`] because of the right-handed axis convention.
pub fn force_z(length: f64, x: f64, p: f64) -> FrameResult<PlaneReactions> {
    check_position(length, x)?;

    let a = x;
    let b = length - x;
    let l = length;

    let ma = (p * a * b * b) / (l * l);
    let mb = -(p * a * a * b) / (l * l);

    Ok(PlaneReactions {
        ra: -((p * b / l) + (ma + mb) / l),
        rb: -((p * a / l) - (ma + mb) / l),
        ma,
        mb,
    })
}

/// Reactions of a clamped bar under a point torque `m` at `x`.
pub fn moment_x(length: f64, x: f64, m: f64) -> FrameResult<EndForces> {
    check_position(length, x)?;

    let a = x;
    let b = length - x;
    let l = length;

    Ok(EndForces {
        a: -m * b / l,
        b: -m * a / l,
    })
}

/// Reactions of a clamped bar under a point moment `m` about y at `x`.
///
/// Returns Mya, Myb and the coupled shears Rza, Rzb.
pub fn moment_y(length: f64, x: f64, m: f64) -> FrameResult<PlaneReactions> {
    check_position(length, x)?;

    let a = x;
    let b = length - x;
    let l = length;

    Ok(PlaneReactions {
        ra: -(6.0 * m * a * b) / (l * l * l),
        rb: (6.0 * m * a * b) / (l * l * l),
        ma: ((m * b) / (l * l)) * (2.0 * a - b),
        mb: ((m * a) / (l * l)) * (2.0 * b - a),
    })
}

/// Reactions of a clamped bar under a point moment `m` about z at `x`.
///
/// Returns Mza, Mzb and the coupled shears Rya, Ryb.
pub fn moment_z(length: f64, x: f64, m: f64) -> FrameResult<PlaneReactions> {
    check_position(length, x)?;

    let a = x;
    let b = length - x;
    let l = length;

    Ok(PlaneReactions {
        ra: (6.0 * m * a * b) / (l * l * l),
        rb: -(6.0 * m * a * b) / (l * l * l),
        ma: ((m * b) / (l * l)) * (2.0 * a - b),
        mb: ((m * a) / (l * l)) * (2.0 * b - a),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_force_x_split() {
        let r = force_x(5.0, 1.0, 1000.0).unwrap();
        assert_relative_eq!(r.a, -800.0);
        assert_relative_eq!(r.b, -200.0);
    }

    #[test]
    fn test_force_y_midspan() {
        let l = 4.0;
        let r = force_y(l, l / 2.0, 1000.0).unwrap();
        assert_relative_eq!(r.ra, -500.0);
        assert_relative_eq!(r.rb, -500.0);
        assert_relative_eq!(r.ma, -1000.0 * l / 8.0);
        assert_relative_eq!(r.mb, 1000.0 * l / 8.0);
    }

    #[test]
    fn test_force_y_quarter_point() {
        // a = 1, b = 3, L = 4
        let r = force_y(4.0, 1.0, 1000.0).unwrap();
        let ma = -1000.0 * 1.0 * 9.0 / 16.0;
        let mb = 1000.0 * 1.0 * 3.0 / 16.0;
        assert_relative_eq!(r.ma, ma);
        assert_relative_eq!(r.mb, mb);
        // Equivalent to -P b^2 (3a + b) / L^3
        assert_relative_eq!(r.ra, -1000.0 * 9.0 * 6.0 / 64.0, max_relative = 1e-12);
        assert_relative_eq!(r.rb, -1000.0 * 1.0 * 10.0 / 64.0, max_relative = 1e-12);
    }

    #[test]
    fn test_force_z_mirrors_force_y() {
        let fy = force_y(6.0, 2.0, 750.0).unwrap();
        let fz = force_z(6.0, 2.0, 750.0).unwrap();
        assert_relative_eq!(fz.ra, fy.ra);
        assert_relative_eq!(fz.rb, fy.rb);
        assert_relative_eq!(fz.ma, -fy.ma);
        assert_relative_eq!(fz.mb, -fy.mb);
    }

    #[test]
    fn test_moment_x_split() {
        let r = moment_x(5.0, 4.0, 100.0).unwrap();
        assert_relative_eq!(r.a, -20.0);
        assert_relative_eq!(r.b, -80.0);
    }

    #[test]
    fn test_moment_z_midspan() {
        let l = 4.0;
        let r = moment_z(l, l / 2.0, 100.0).unwrap();
        // At midspan both end moments take M/4 and the shear couple is 3M/2L
        assert_relative_eq!(r.ma, 25.0);
        assert_relative_eq!(r.mb, 25.0);
        assert_relative_eq!(r.ra, 6.0 * 100.0 * 4.0 / 64.0);
        assert_relative_eq!(r.rb, -6.0 * 100.0 * 4.0 / 64.0);
    }

    #[test]
    fn test_moment_y_shear_sign_opposes_moment_z() {
        let my = moment_y(5.0, 2.0, 300.0).unwrap();
        let mz = moment_z(5.0, 2.0, 300.0).unwrap();
        assert_relative_eq!(my.ma, mz.ma);
        assert_relative_eq!(my.mb, mz.mb);
        assert_relative_eq!(my.ra, -mz.ra);
        assert_relative_eq!(my.rb, -mz.rb);
    }

    #[test]
    fn test_position_out_of_range() {
        assert!(force_y(5.0, -0.1, 1.0).is_err());
        assert!(force_y(5.0, 5.1, 1.0).is_err());
        assert!(force_y(5.0, 0.0, 1.0).is_ok());
        assert!(force_y(5.0, 5.0, 1.0).is_ok());
    }
}
