//! Fixed-end reactions for distributed loads covering the whole bar.
//!
//! Rectangular and triangular profiles are literal closed forms; the
//! trapezoid is built by superposition. When both intensities share a
//! sign it splits into a rectangle of the smaller intensity plus a
//! triangle of the difference. When the signs differ the profile is split
//! at its zero crossing into a descending and an ascending triangle, and
//! each triangle's interior-end reactions are carried back onto the full
//! bar through the point-load formulas.

use crate::error::FrameResult;
use crate::math::space;

use super::{point, EndForces, PlaneReactions, Slope};

// x direction /////////////////////////////////////////////////////////////

/// Uniform axial load `p` over the full length.
pub fn force_x_rec(length: f64, p: f64) -> EndForces {
    EndForces {
        a: -(p * length) / 2.0,
        b: -(p * length) / 2.0,
    }
}

/// Triangular axial load peaking at `p` over the full length.
pub fn force_x_tri(length: f64, p: f64, slope: Slope) -> EndForces {
    match slope {
        Slope::Up => EndForces {
            a: -(p * length) / 6.0,
            b: -(p * length) / 3.0,
        },
        Slope::Down => EndForces {
            a: -(p * length) / 3.0,
            b: -(p * length) / 6.0,
        },
    }
}

/// Trapezoidal axial load from `p1` to `p2` over the full length.
pub fn force_x_trap(length: f64, p1: f64, p2: f64) -> FrameResult<EndForces> {
    trap_axis(length, p1, p2, force_x_rec, force_x_tri, point::force_x)
}

/// Uniform distributed torque `p` over the full length.
pub fn moment_x_rec(length: f64, p: f64) -> EndForces {
    EndForces {
        a: -(p * length) / 2.0,
        b: -(p * length) / 2.0,
    }
}

/// Triangular distributed torque peaking at `p` over the full length.
pub fn moment_x_tri(length: f64, p: f64, slope: Slope) -> EndForces {
    match slope {
        Slope::Up => EndForces {
            a: -(p * length) / 6.0,
            b: -(p * length) / 3.0,
        },
        Slope::Down => EndForces {
            a: -(p * length) / 3.0,
            b: -(p * length) / 6.0,
        },
    }
}

/// Trapezoidal distributed torque from `p1` to `p2` over the full length.
pub fn moment_x_trap(length: f64, p1: f64, p2: f64) -> FrameResult<EndForces> {
    trap_axis(length, p1, p2, moment_x_rec, moment_x_tri, point::moment_x)
}

// y direction /////////////////////////////////////////////////////////////

/// Uniform transverse load `p` in y over the full length.
pub fn force_y_rec(length: f64, p: f64) -> PlaneReactions {
    let l = length;
    PlaneReactions {
        ra: -(p * l) / 2.0,
        rb: -(p * l) / 2.0,
        ma: -(p * l * l) / 12.0,
        mb: (p * l * l) / 12.0,
    }
}

/// Triangular transverse load in y peaking at `p` over the full length.
pub fn force_y_tri(length: f64, p: f64, slope: Slope) -> PlaneReactions {
    let l = length;
    match slope {
        Slope::Up => PlaneReactions {
            ra: -(3.0 * p * l) / 20.0,
            rb: -(7.0 * p * l) / 20.0,
            ma: -(p * l * l) / 30.0,
            mb: (p * l * l) / 20.0,
        },
        Slope::Down => PlaneReactions {
            ra: -(7.0 * p * l) / 20.0,
            rb: -(3.0 * p * l) / 20.0,
            ma: -(p * l * l) / 20.0,
            mb: (p * l * l) / 30.0,
        },
    }
}

/// Trapezoidal transverse load in y from `p1` to `p2` over the full length.
pub fn force_y_trap(length: f64, p1: f64, p2: f64) -> FrameResult<PlaneReactions> {
    trap_plane(
        length,
        p1,
        p2,
        force_y_rec,
        force_y_tri,
        point::force_y,
        point::moment_z,
    )
}

/// Uniform distributed moment about y over the full length.
pub fn moment_y_rec(_length: f64, p: f64) -> PlaneReactions {
    PlaneReactions {
        ra: -p,
        rb: p,
        ma: 0.0,
        mb: 0.0,
    }
}

/// Triangular distributed moment about y peaking at `p` over the full length.
pub fn moment_y_tri(length: f64, p: f64, slope: Slope) -> PlaneReactions {
    let l = length;
    match slope {
        Slope::Up => PlaneReactions {
            ra: -p / 2.0,
            rb: p / 2.0,
            ma: (p * l) / 12.0,
            mb: -(p * l) / 12.0,
        },
        Slope::Down => PlaneReactions {
            ra: -p / 2.0,
            rb: p / 2.0,
            ma: -(p * l) / 12.0,
            mb: (p * l) / 12.0,
        },
    }
}

/// Trapezoidal distributed moment about y from `p1` to `p2` over the full length.
pub fn moment_y_trap(length: f64, p1: f64, p2: f64) -> FrameResult<PlaneReactions> {
    trap_plane(
        length,
        p1,
        p2,
        moment_y_rec,
        moment_y_tri,
        point::force_z,
        point::moment_y,
    )
}

// z direction /////////////////////////////////////////////////////////////

/// Uniform transverse load `p` in z over the full length.
pub fn force_z_rec(length: f64, p: f64) -> PlaneReactions {
    let l = length;
    PlaneReactions {
        ra: -(p * l) / 2.0,
        rb: -(p * l) / 2.0,
        ma: (p * l * l) / 12.0,
        mb: -(p * l * l) / 12.0,
    }
}

/// Triangular transverse load in z peaking at `p` over the full length.
pub fn force_z_tri(length: f64, p: f64, slope: Slope) -> PlaneReactions {
    let l = length;
    match slope {
        Slope::Up => PlaneReactions {
            ra: -(3.0 * p * l) / 20.0,
            rb: -(7.0 * p * l) / 20.0,
            ma: (p * l * l) / 30.0,
            mb: -(p * l * l) / 20.0,
        },
        Slope::Down => PlaneReactions {
            ra: -(7.0 * p * l) / 20.0,
            rb: -(3.0 * p * l) / 20.0,
            ma: (p * l * l) / 20.0,
            mb: -(p * l * l) / 30.0,
        },
    }
}

/// Trapezoidal transverse load in z from `p1` to `p2` over the full length.
pub fn force_z_trap(length: f64, p1: f64, p2: f64) -> FrameResult<PlaneReactions> {
    trap_plane(
        length,
        p1,
        p2,
        force_z_rec,
        force_z_tri,
        point::force_z,
        point::moment_y,
    )
}

/// Uniform distributed moment about z over the full length.
pub fn moment_z_rec(_length: f64, p: f64) -> PlaneReactions {
    PlaneReactions {
        ra: p,
        rb: -p,
        ma: 0.0,
        mb: 0.0,
    }
}

/// Triangular distributed moment about z peaking at `p` over the full length.
pub fn moment_z_tri(length: f64, p: f64, slope: Slope) -> PlaneReactions {
    let l = length;
    match slope {
        Slope::Up => PlaneReactions {
            ra: p / 2.0,
            rb: -p / 2.0,
            ma: (p * l) / 12.0,
            mb: -(p * l) / 12.0,
        },
        Slope::Down => PlaneReactions {
            ra: p / 2.0,
            rb: -p / 2.0,
            ma: -(p * l) / 12.0,
            mb: (p * l) / 12.0,
        },
    }
}

/// Trapezoidal distributed moment about z from `p1` to `p2` over the full length.
pub fn moment_z_trap(length: f64, p1: f64, p2: f64) -> FrameResult<PlaneReactions> {
    trap_plane(
        length,
        p1,
        p2,
        moment_z_rec,
        moment_z_tri,
        point::force_y,
        point::moment_z,
    )
}

// Trapezoid decomposition /////////////////////////////////////////////////

/// Zero crossing of a sign-changing linear profile along the bar.
fn split_at_root(length: f64, p1: f64, p2: f64) -> f64 {
    // Intensities have opposite, non-zero signs here, so the profile
    // always crosses inside the span.
    space::root_line((0.0, p1), (length, p2)).unwrap_or(length / 2.0)
}

fn trap_axis(
    length: f64,
    p1: f64,
    p2: f64,
    rec: fn(f64, f64) -> EndForces,
    tri: fn(f64, f64, Slope) -> EndForces,
    point_load: fn(f64, f64, f64) -> FrameResult<EndForces>,
) -> FrameResult<EndForces> {
    if p1 == 0.0 && p2 == 0.0 {
        return Ok(EndForces::default());
    }

    let mut total = EndForces::default();

    if p1 >= 0.0 && p2 >= 0.0 {
        if p1 != 0.0 && p2 != 0.0 {
            total += rec(length, p1.min(p2));
        }
        if p1 < p2 {
            total += tri(length, p2 - p1, Slope::Up);
        } else if p1 > p2 {
            total += tri(length, p1 - p2, Slope::Down);
        }
    } else if p1 <= 0.0 && p2 <= 0.0 {
        if p1 != 0.0 && p2 != 0.0 {
            total += rec(length, p1.max(p2));
        }
        if p1.abs() < p2.abs() {
            total += tri(length, -(p2.abs() - p1.abs()), Slope::Up);
        } else if p1.abs() > p2.abs() {
            total += tri(length, -(p1.abs() - p2.abs()), Slope::Down);
        }
    } else {
        let root = split_at_root(length, p1, p2);
        let left = tri(root, p1, Slope::Down);
        let right = tri(length - root, p2, Slope::Up);

        total.a += left.a;
        total.b += right.b;

        // Interior-end reactions become an equivalent point load at the root
        total += point_load(length, root, -(left.b + right.a))?;
    }

    Ok(total)
}

fn trap_plane(
    length: f64,
    p1: f64,
    p2: f64,
    rec: fn(f64, f64) -> PlaneReactions,
    tri: fn(f64, f64, Slope) -> PlaneReactions,
    point_force: fn(f64, f64, f64) -> FrameResult<PlaneReactions>,
    point_moment: fn(f64, f64, f64) -> FrameResult<PlaneReactions>,
) -> FrameResult<PlaneReactions> {
    if p1 == 0.0 && p2 == 0.0 {
        return Ok(PlaneReactions::default());
    }

    let mut total = PlaneReactions::default();

    if p1 >= 0.0 && p2 >= 0.0 {
        if p1 != 0.0 && p2 != 0.0 {
            total += rec(length, p1.min(p2));
        }
        if p1 < p2 {
            total += tri(length, p2 - p1, Slope::Up);
        } else if p1 > p2 {
            total += tri(length, p1 - p2, Slope::Down);
        }
    } else if p1 <= 0.0 && p2 <= 0.0 {
        if p1 != 0.0 && p2 != 0.0 {
            total += rec(length, p1.max(p2));
        }
        if p1.abs() < p2.abs() {
            total += tri(length, -(p2.abs() - p1.abs()), Slope::Up);
        } else if p1.abs() > p2.abs() {
            total += tri(length, -(p1.abs() - p2.abs()), Slope::Down);
        }
    } else {
        let root = split_at_root(length, p1, p2);
        let left = tri(root, p1, Slope::Down);
        let right = tri(length - root, p2, Slope::Up);

        total.ra += left.ra;
        total.ma += left.ma;
        total.rb += right.rb;
        total.mb += right.mb;

        // Interior-end force and moment become equivalent point loads at
        // the root of the profile
        total += point_force(length, root, -(left.rb + right.ra))?;
        total += point_moment(length, root, -(left.mb + right.ma))?;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_force_y_rec() {
        let r = force_y_rec(5.0, -1000.0);
        assert_relative_eq!(r.ra, 2500.0);
        assert_relative_eq!(r.rb, 2500.0);
        assert_relative_eq!(r.ma, 1000.0 * 25.0 / 12.0);
        assert_relative_eq!(r.mb, -1000.0 * 25.0 / 12.0);
    }

    #[test]
    fn test_force_y_tri() {
        let up = force_y_tri(5.0, 1000.0, Slope::Up);
        assert_relative_eq!(up.ra, -3.0 * 1000.0 * 5.0 / 20.0);
        assert_relative_eq!(up.rb, -7.0 * 1000.0 * 5.0 / 20.0);
        assert_relative_eq!(up.ma, -1000.0 * 25.0 / 30.0);
        assert_relative_eq!(up.mb, 1000.0 * 25.0 / 20.0);

        // Descending mirrors the shares between the ends
        let down = force_y_tri(5.0, 1000.0, Slope::Down);
        assert_relative_eq!(down.ra, up.rb);
        assert_relative_eq!(down.rb, up.ra);
        assert_relative_eq!(down.ma, -up.mb);
        assert_relative_eq!(down.mb, -up.ma);
    }

    #[test]
    fn test_trap_same_sign_is_rect_plus_triangle() {
        let l = 4.0;
        let trap = force_y_trap(l, 200.0, 600.0).unwrap();
        let expected = force_y_rec(l, 200.0) + force_y_tri(l, 400.0, Slope::Up);
        assert_relative_eq!(trap.ra, expected.ra);
        assert_relative_eq!(trap.rb, expected.rb);
        assert_relative_eq!(trap.ma, expected.ma);
        assert_relative_eq!(trap.mb, expected.mb);
    }

    #[test]
    fn test_trap_uniform_degenerates_to_rec() {
        let trap = force_y_trap(5.0, -1000.0, -1000.0).unwrap();
        let rec = force_y_rec(5.0, -1000.0);
        assert_relative_eq!(trap.ra, rec.ra);
        assert_relative_eq!(trap.ma, rec.ma);
    }

    #[test]
    fn test_trap_negative_pair() {
        let l = 4.0;
        let trap = force_y_trap(l, -600.0, -200.0).unwrap();
        let expected = force_y_rec(l, -200.0) + force_y_tri(l, -400.0, Slope::Down);
        assert_relative_eq!(trap.ra, expected.ra);
        assert_relative_eq!(trap.rb, expected.rb);
        assert_relative_eq!(trap.ma, expected.ma);
        assert_relative_eq!(trap.mb, expected.mb);
    }

    #[test]
    fn test_trap_sign_crossing_antisymmetric() {
        // -500 at the start to +500 at the end of a 6 m bar: the
        // resultant force vanishes, shear reactions are equal and
        // opposite, and the end moments are physically antisymmetric.
        let r = force_y_trap(6.0, -500.0, 500.0).unwrap();
        assert_relative_eq!(r.ra, 600.0, max_relative = 1e-12);
        assert_relative_eq!(r.rb, -600.0, max_relative = 1e-12);
        assert_relative_eq!(r.ma, 300.0, max_relative = 1e-12);
        assert_relative_eq!(r.mb, 300.0, max_relative = 1e-12);
        assert_relative_eq!(r.ra + r.rb, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_trap_axial_resultant() {
        // Reactions oppose the full resultant of the axial trapezoid
        let r = force_x_trap(6.0, 100.0, 300.0).unwrap();
        assert_relative_eq!(r.a + r.b, -(100.0 + 300.0) / 2.0 * 6.0, max_relative = 1e-12);
    }

    #[test]
    fn test_trap_axial_sign_crossing() {
        let r = force_x_trap(4.0, -200.0, 200.0).unwrap();
        // Antisymmetric axial load: net resultant zero
        assert_relative_eq!(r.a + r.b, 0.0, epsilon = 1e-9);
        assert_relative_eq!(r.a, -r.b, epsilon = 1e-9);
    }

    #[test]
    fn test_moment_y_rec_is_a_shear_couple() {
        let r = moment_y_rec(5.0, 40.0);
        assert_relative_eq!(r.ra, -40.0);
        assert_relative_eq!(r.rb, 40.0);
        assert_eq!(r.ma, 0.0);
        assert_eq!(r.mb, 0.0);
    }

    #[test]
    fn test_zero_profile_is_zero() {
        assert_eq!(force_y_trap(5.0, 0.0, 0.0).unwrap(), PlaneReactions::default());
        assert_eq!(force_x_trap(5.0, 0.0, 0.0).unwrap(), EndForces::default());
    }
}
