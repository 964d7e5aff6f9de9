//! Distributed loads applied along bars

use serde::{Deserialize, Serialize};

use super::point_load::CoordSystem;

/// A distributed load over a sub-span of a bar.
///
/// Every component carries a trapezoidal profile `(p1, p2)`: the
/// intensity varies linearly from `p1` at `x1` to `p2` at `x2`.
/// Rectangular and triangular loads are the obvious degenerate cases.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BarDistributedLoad {
    /// Start position, distance from the start node
    pub x1: f64,
    /// End position, 0 <= x1 < x2 <= L
    pub x2: f64,
    /// Coordinate system of the components
    pub system: CoordSystem,
    /// Force per unit length in x (start, end)
    pub fx: (f64, f64),
    /// Force per unit length in y (start, end)
    pub fy: (f64, f64),
    /// Force per unit length in z (start, end)
    pub fz: (f64, f64),
    /// Moment per unit length about x (start, end)
    pub mx: (f64, f64),
    /// Moment per unit length about y (start, end)
    pub my: (f64, f64),
    /// Moment per unit length about z (start, end)
    pub mz: (f64, f64),
}

impl BarDistributedLoad {
    /// Create a zero load over the given span
    pub fn new(x1: f64, x2: f64, system: CoordSystem) -> Self {
        Self {
            x1,
            x2,
            system,
            fx: (0.0, 0.0),
            fy: (0.0, 0.0),
            fz: (0.0, 0.0),
            mx: (0.0, 0.0),
            my: (0.0, 0.0),
            mz: (0.0, 0.0),
        }
    }

    /// Set the x force profile
    pub fn with_fx(mut self, p1: f64, p2: f64) -> Self {
        self.fx = (p1, p2);
        self
    }

    /// Set the y force profile
    pub fn with_fy(mut self, p1: f64, p2: f64) -> Self {
        self.fy = (p1, p2);
        self
    }

    /// Set the z force profile
    pub fn with_fz(mut self, p1: f64, p2: f64) -> Self {
        self.fz = (p1, p2);
        self
    }

    /// Set the torque profile
    pub fn with_mx(mut self, p1: f64, p2: f64) -> Self {
        self.mx = (p1, p2);
        self
    }

    /// Set the moment-about-y profile
    pub fn with_my(mut self, p1: f64, p2: f64) -> Self {
        self.my = (p1, p2);
        self
    }

    /// Set the moment-about-z profile
    pub fn with_mz(mut self, p1: f64, p2: f64) -> Self {
        self.mz = (p1, p2);
        self
    }

    /// Intensities at the start position [Fx, Fy, Fz, Mx, My, Mz]
    pub fn start_components(&self) -> [f64; 6] {
        [
            self.fx.0, self.fy.0, self.fz.0, self.mx.0, self.my.0, self.mz.0,
        ]
    }

    /// Intensities at the end position [Fx, Fy, Fz, Mx, My, Mz]
    pub fn end_components(&self) -> [f64; 6] {
        [
            self.fx.1, self.fy.1, self.fz.1, self.mx.1, self.my.1, self.mz.1,
        ]
    }
}
