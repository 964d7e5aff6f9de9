//! Fixed-end reaction library for clamped prismatic bars.
//!
//! Closed-form reactions (after Soriano & Lima) for point loads and for
//! rectangular, triangular and trapezoidal distributed loads, in every
//! local direction. Values follow the classical structural convention:
//! positive reactions oppose positive load directions. Transverse forces
//! couple with the bending moments of their plane (Fy with Mz, Fz with
//! My); axial force and torsion are uncoupled.

pub mod all_length;
pub mod point;
pub mod section;

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// End reactions of an uncoupled direction (axial force or torque)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EndForces {
    /// Reaction at the start of the bar (end a)
    pub a: f64,
    /// Reaction at the end of the bar (end b)
    pub b: f64,
}

impl Add for EndForces {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            a: self.a + rhs.a,
            b: self.b + rhs.b,
        }
    }
}

impl AddAssign for EndForces {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// End reactions of a bending plane: shear forces plus their coupled moments
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaneReactions {
    /// Force reaction at end a (Rya in the xy plane, Rza in the xz plane)
    pub ra: f64,
    /// Force reaction at end b
    pub rb: f64,
    /// Moment reaction at end a (Mza in the xy plane, Mya in the xz plane)
    pub ma: f64,
    /// Moment reaction at end b
    pub mb: f64,
}

impl Add for PlaneReactions {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            ra: self.ra + rhs.ra,
            rb: self.rb + rhs.rb,
            ma: self.ma + rhs.ma,
            mb: self.mb + rhs.mb,
        }
    }
}

impl AddAssign for PlaneReactions {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Orientation of a triangular load along the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slope {
    /// Zero at the start, peak at the end
    Up,
    /// Peak at the start, zero at the end
    Down,
}
