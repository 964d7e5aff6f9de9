//! Matrix machinery for the direct stiffness method

pub mod space;

use log::warn;
use nalgebra::{DMatrix, DVector, Matrix3, Matrix6, SMatrix, SVector, Vector6};

use crate::error::{FrameError, FrameResult};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;
pub type Mat3 = Matrix3<f64>;
pub type Mat6 = Matrix6<f64>;
pub type Vec6 = Vector6<f64>;

/// 12x12 matrix for bar stiffness and rotation
pub type Mat12 = SMatrix<f64, 12, 12>;
/// 12-element vector for bar forces/displacements
pub type Vec12 = SVector<f64, 12>;

/// Compute the 12x12 local stiffness matrix of a prismatic 3D bar.
///
/// Euler-Bernoulli formulation: axial EA/L, torsion GIx/L, and the
/// 12/6/4/2 EI blocks for bending about the local y (Iy) and z (Iz)
/// axes. The upper triangle is filled and then mirrored.
pub fn bar_local_stiffness(
    e: f64,
    g: f64,
    area: f64,
    ix: f64,
    iy: f64,
    iz: f64,
    length: f64,
) -> Mat12 {
    let l = length;
    let mut kl = Mat12::zeros();

    kl[(0, 0)] = e * area / l;
    kl[(0, 6)] = -kl[(0, 0)];
    kl[(1, 1)] = 12.0 * e * iz / (l * l * l);
    kl[(1, 5)] = 6.0 * e * iz / (l * l);
    kl[(1, 7)] = -kl[(1, 1)];
    kl[(1, 11)] = kl[(1, 5)];
    kl[(2, 2)] = 12.0 * e * iy / (l * l * l);
    kl[(2, 4)] = -6.0 * e * iy / (l * l);
    kl[(2, 8)] = -kl[(2, 2)];
    kl[(2, 10)] = kl[(2, 4)];
    kl[(3, 3)] = g * ix / l;
    kl[(3, 9)] = -kl[(3, 3)];
    kl[(4, 4)] = 4.0 * e * iy / l;
    kl[(4, 8)] = -kl[(2, 4)];
    kl[(4, 10)] = 2.0 * e * iy / l;
    kl[(5, 5)] = 4.0 * e * iz / l;
    kl[(5, 7)] = -kl[(1, 5)];
    kl[(5, 11)] = 2.0 * e * iz / l;
    kl[(6, 6)] = kl[(0, 0)];
    kl[(7, 7)] = kl[(1, 1)];
    kl[(7, 11)] = -kl[(1, 5)];
    kl[(8, 8)] = kl[(2, 2)];
    kl[(8, 10)] = -kl[(2, 4)];
    kl[(9, 9)] = kl[(3, 3)];
    kl[(10, 10)] = kl[(4, 4)];
    kl[(11, 11)] = kl[(5, 5)];

    kl + kl.transpose() - Mat12::from_diagonal(&kl.diagonal())
}

/// Condense released end-DOFs out of a local stiffness matrix.
///
/// Each released DOF is eliminated in fixed index order by Gauss
/// elimination of its row and column; eliminated rows/columns remain
/// zero so the released DOFs carry no stiffness. A non-positive pivot
/// means the bar has no stiffness left at a released DOF and the model
/// cannot be solved.
pub fn condense_stiffness(kl: &Mat12, releases: &[bool; 12]) -> FrameResult<Mat12> {
    let mut kl = *kl;
    let mut eliminated: std::vec::Vec<usize> = std::vec::Vec::new();

    for (l, &released) in releases.iter().enumerate() {
        if !released {
            continue;
        }

        let pivot = kl[(l, l)];
        if pivot <= 0.0 {
            return Err(FrameError::SingularMatrix);
        }

        let mut reduced = Mat12::zeros();
        for j in 0..12 {
            if eliminated.contains(&j) {
                continue;
            }
            let ratio = kl[(j, l)] / pivot;
            for k in 0..12 {
                if eliminated.contains(&k) {
                    continue;
                }
                reduced[(j, k)] = kl[(j, k)] - ratio * kl[(l, k)];
            }
        }

        kl = reduced;
        eliminated.push(l);
    }

    Ok(kl)
}

/// Condense released end-DOFs out of a local fixed-end load vector.
///
/// Partitions the DOFs into kept (k) and released (r) sets and computes
/// `f_k - K_kr * K_rr^-1 * f_r` using the uncondensed stiffness `kl_nr`;
/// released entries are zeroed. When K_rr is ill conditioned (reciprocal
/// condition number below `tol`) a pseudo-inverse is used instead.
pub fn condense_load_vector(
    loads: &Vec12,
    kl_nr: &Mat12,
    releases: &[bool; 12],
    tol: f64,
) -> Vec12 {
    let released: std::vec::Vec<usize> = releases
        .iter()
        .enumerate()
        .filter_map(|(i, &r)| r.then_some(i))
        .collect();

    if released.is_empty() {
        return *loads;
    }
    if released.len() == 12 {
        // Wholly released bar: nothing transmits to the nodes
        return Vec12::zeros();
    }

    let kept: std::vec::Vec<usize> = releases
        .iter()
        .enumerate()
        .filter_map(|(i, &r)| (!r).then_some(i))
        .collect();

    let n_k = kept.len();
    let n_r = released.len();

    let mut k_kr = DMatrix::zeros(n_k, n_r);
    let mut k_rr = DMatrix::zeros(n_r, n_r);
    for (i, &ki) in kept.iter().enumerate() {
        for (j, &rj) in released.iter().enumerate() {
            k_kr[(i, j)] = kl_nr[(ki, rj)];
        }
    }
    for (i, &ri) in released.iter().enumerate() {
        for (j, &rj) in released.iter().enumerate() {
            k_rr[(i, j)] = kl_nr[(ri, rj)];
        }
    }

    let mut f_r = DVector::zeros(n_r);
    for (i, &ri) in released.iter().enumerate() {
        f_r[i] = loads[ri];
    }

    let svd = k_rr.clone().svd(true, true);
    let max_sv: f64 = svd.singular_values.max();
    let min_sv: f64 = svd.singular_values.min();

    let solution = if min_sv > 0.0 && min_sv / max_sv > tol {
        k_rr.lu().solve(&f_r)
    } else {
        None
    };

    let x = match solution {
        Some(x) => x,
        None => {
            warn!("ill-conditioned release partition, using pseudo-inverse");
            match svd.pseudo_inverse(tol * max_sv.max(1.0)) {
                Ok(pinv) => pinv * &f_r,
                Err(_) => DVector::zeros(n_r),
            }
        }
    };

    let redistribution = k_kr * x;

    let mut condensed = Vec12::zeros();
    for (i, &ki) in kept.iter().enumerate() {
        condensed[ki] = loads[ki] - redistribution[i];
    }

    condensed
}

/// Compute the 12x12 local->global rotation matrix of a bar.
///
/// The direction-cosine block is repeated on the four diagonal 3x3
/// blocks. Its first row is the bar axis; the remaining rows come from an
/// auxiliary point that fixes the roll orientation:
///
/// - z-up (default): the auxiliary point sits one unit above the end node,
///   or one unit off in x for vertical bars (-x pointing up, +x pointing
///   down), and the roll angle gets a -90 degree offset;
/// - y-up: one unit off in +y, or +x for bars along the y axis, with no
///   roll offset.
///
/// The auxiliary point is rotated about the bar axis by the roll, the
/// local z axis is the normalized cross of the bar axis with the
/// end-node->auxiliary vector, and the local y axis completes the
/// right-handed frame.
pub fn bar_rotation_matrix(
    start: &[f64; 3],
    end: &[f64; 3],
    rotation_deg: f64,
    y_up: bool,
) -> Mat12 {
    let dx = end[0] - start[0];
    let dy = end[1] - start[1];
    let dz = end[2] - start[2];
    let length = (dx * dx + dy * dy + dz * dz).sqrt();

    let x_axis = [dx / length, dy / length, dz / length];

    let (x1, y1, z1) = (end[0], end[1], end[2]);
    let aux = if y_up {
        if dx != 0.0 || dz != 0.0 {
            [x1, y1 + 1.0, z1]
        } else {
            [x1 + 1.0, y1, z1]
        }
    } else if dx != 0.0 || dy != 0.0 {
        [x1, y1, z1 + 1.0]
    } else if dz > 0.0 {
        [x1 - 1.0, y1, z1]
    } else {
        [x1 + 1.0, y1, z1]
    };

    let roll_offset = if y_up { 0.0 } else { -90.0 };
    let roll = (rotation_deg + roll_offset).to_radians();
    let aux = space::rotate_point_around_line(&aux, start, end, roll);

    let mut adx = aux[0] - x1;
    let mut ady = aux[1] - y1;
    let mut adz = aux[2] - z1;
    let mut norm = (adx * adx + ady * ady + adz * adz).sqrt();

    let alpha = adx / norm;
    let beta = ady / norm;
    let gamma = adz / norm;

    adx = x_axis[1] * gamma - x_axis[2] * beta;
    ady = x_axis[2] * alpha - x_axis[0] * gamma;
    adz = x_axis[0] * beta - x_axis[1] * alpha;
    norm = (adx * adx + ady * ady + adz * adz).sqrt();

    let z_axis = [adx / norm, ady / norm, adz / norm];

    let y_axis = [
        x_axis[2] * z_axis[1] - x_axis[1] * z_axis[2],
        x_axis[0] * z_axis[2] - x_axis[2] * z_axis[0],
        x_axis[1] * z_axis[0] - x_axis[0] * z_axis[1],
    ];

    let block = Mat3::new(
        x_axis[0], x_axis[1], x_axis[2],
        y_axis[0], y_axis[1], y_axis[2],
        z_axis[0], z_axis[1], z_axis[2],
    );

    let mut rotation = Mat12::zeros();
    for part in 0..4 {
        let offset = part * 3;
        for row in 0..3 {
            for col in 0..3 {
                rotation[(offset + row, offset + col)] = block[(row, col)];
            }
        }
    }

    rotation
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const E: f64 = 2e11;
    const G: f64 = 7.692308e10;

    fn sample_stiffness() -> Mat12 {
        bar_local_stiffness(E, G, 1.63e-3, 2.25e-7, 5.2e-7, 8.28e-7, 5.0)
    }

    #[test]
    fn test_local_stiffness_symmetry() {
        let kl = sample_stiffness();
        for i in 0..12 {
            for j in 0..12 {
                assert_relative_eq!(kl[(i, j)], kl[(j, i)], max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_local_stiffness_terms() {
        let kl = sample_stiffness();
        let l = 5.0;
        assert_relative_eq!(kl[(0, 0)], E * 1.63e-3 / l);
        assert_relative_eq!(kl[(1, 1)], 12.0 * E * 8.28e-7 / l.powi(3));
        assert_relative_eq!(kl[(2, 4)], -6.0 * E * 5.2e-7 / l.powi(2));
        assert_relative_eq!(kl[(3, 3)], G * 2.25e-7 / l);
        assert_relative_eq!(kl[(4, 10)], 2.0 * E * 5.2e-7 / l);
        assert_relative_eq!(kl[(5, 11)], 2.0 * E * 8.28e-7 / l);
    }

    #[test]
    fn test_condense_no_releases_is_identity() {
        let kl = sample_stiffness();
        let condensed = condense_stiffness(&kl, &[false; 12]).unwrap();
        assert_eq!(kl, condensed);
    }

    #[test]
    fn test_condense_moment_release() {
        // Releasing Rz at the j end turns the y-bending block into the
        // propped-cantilever stiffness 3EI/L^3 at the i end.
        let kl = sample_stiffness();
        let mut releases = [false; 12];
        releases[11] = true;
        let condensed = condense_stiffness(&kl, &releases).unwrap();

        let l: f64 = 5.0;
        assert_relative_eq!(
            condensed[(1, 1)],
            3.0 * E * 8.28e-7 / l.powi(3),
            max_relative = 1e-12
        );
        // Released row and column are zero
        for k in 0..12 {
            assert_eq!(condensed[(11, k)], 0.0);
            assert_eq!(condensed[(k, 11)], 0.0);
        }
        // Axial block is untouched
        assert_relative_eq!(condensed[(0, 0)], kl[(0, 0)]);
    }

    #[test]
    fn test_condense_rejects_zero_pivot() {
        let mut releases = [false; 12];
        releases[5] = true;
        releases[11] = true;
        // Zero bending stiffness about z makes both pivots vanish.
        let kl = bar_local_stiffness(E, G, 1.63e-3, 2.25e-7, 5.2e-7, 0.0, 5.0);
        assert!(condense_stiffness(&kl, &releases).is_err());
    }

    #[test]
    fn test_condense_load_vector_pin_j() {
        // Uniform transverse load on a bar with an Rzj release: the fixed
        // end picks up 5wL/8, the released end 3wL/8.
        let kl_nr = sample_stiffness();
        let mut releases = [false; 12];
        releases[11] = true;

        let w = -1000.0;
        let l = 5.0;
        let mut fer = Vec12::zeros();
        fer[1] = w * l / 2.0;
        fer[5] = w * l * l / 12.0;
        fer[7] = w * l / 2.0;
        fer[11] = -w * l * l / 12.0;

        let condensed = condense_load_vector(&fer, &kl_nr, &releases, 1e-12);
        assert_relative_eq!(condensed[1], 5.0 * w * l / 8.0, max_relative = 1e-12);
        assert_relative_eq!(condensed[7], 3.0 * w * l / 8.0, max_relative = 1e-12);
        assert_relative_eq!(condensed[5], w * l * l / 8.0, max_relative = 1e-12);
        assert_eq!(condensed[11], 0.0);
    }

    #[test]
    fn test_condense_load_vector_wholly_released() {
        let kl_nr = sample_stiffness();
        let fer = Vec12::repeat(123.0);
        let condensed = condense_load_vector(&fer, &kl_nr, &[true; 12], 1e-12);
        assert_eq!(condensed, Vec12::zeros());
    }

    #[test]
    fn test_rotation_horizontal_bar() {
        let r = bar_rotation_matrix(&[0.0, 0.0, 0.0], &[10.0, 0.0, 0.0], 0.0, false);
        // Local axes coincide with global
        assert_relative_eq!(r[(0, 0)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(r[(1, 1)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(r[(2, 2)], 1.0, epsilon = 1e-12);
        // Same block on every diagonal sub-matrix
        assert_relative_eq!(r[(9, 9)], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_vertical_bar_z_up() {
        // Column pointing up: local y = +Y, local z = -X
        let r = bar_rotation_matrix(&[0.0, 0.0, 0.0], &[0.0, 0.0, 4.0], 0.0, false);
        assert_relative_eq!(r[(0, 2)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(r[(1, 1)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(r[(2, 0)], -1.0, epsilon = 1e-12);

        // Pointing down: local z flips to +X
        let r = bar_rotation_matrix(&[0.0, 0.0, 4.0], &[0.0, 0.0, 0.0], 0.0, false);
        assert_relative_eq!(r[(0, 2)], -1.0, epsilon = 1e-12);
        assert_relative_eq!(r[(2, 0)], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_rolled_bar() {
        // 90 degree roll about the axis swings local y onto +Z
        let r = bar_rotation_matrix(&[0.0, 0.0, 0.0], &[10.0, 0.0, 0.0], 90.0, false);
        assert_relative_eq!(r[(1, 2)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(r[(2, 1)], -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_y_up_horizontal() {
        let r = bar_rotation_matrix(&[0.0, 0.0, 0.0], &[10.0, 0.0, 0.0], 0.0, true);
        assert_relative_eq!(r[(0, 0)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(r[(1, 1)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(r[(2, 2)], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_block_is_orthonormal() {
        let r = bar_rotation_matrix(&[1.0, -2.0, 0.5], &[4.0, 3.0, 2.5], 30.0, false);
        let block = r.fixed_view::<3, 3>(0, 0).into_owned();
        let identity = block * block.transpose();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(identity[(i, j)], expected, epsilon = 1e-12);
            }
        }
    }
}
