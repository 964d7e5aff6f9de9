//! Concentrated loads applied along bars

use serde::{Deserialize, Serialize};

/// Coordinate system of a bar load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordSystem {
    /// Components in the bar's local axes
    Local,
    /// Components in the global axes
    Global,
}

impl Default for CoordSystem {
    fn default() -> Self {
        CoordSystem::Local
    }
}

/// A concentrated load at a position along a bar
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BarPointLoad {
    /// Distance from the start node, 0 <= position <= L
    pub position: f64,
    /// Coordinate system of the components
    pub system: CoordSystem,
    /// Force in x
    pub fx: f64,
    /// Force in y
    pub fy: f64,
    /// Force in z
    pub fz: f64,
    /// Moment about x
    pub mx: f64,
    /// Moment about y
    pub my: f64,
    /// Moment about z
    pub mz: f64,
}

impl BarPointLoad {
    /// Create a zero load at the given position
    pub fn new(position: f64, system: CoordSystem) -> Self {
        Self {
            position,
            system,
            fx: 0.0,
            fy: 0.0,
            fz: 0.0,
            mx: 0.0,
            my: 0.0,
            mz: 0.0,
        }
    }

    /// Set the force components
    pub fn with_force(mut self, fx: f64, fy: f64, fz: f64) -> Self {
        self.fx = fx;
        self.fy = fy;
        self.fz = fz;
        self
    }

    /// Set the moment components
    pub fn with_moment(mut self, mx: f64, my: f64, mz: f64) -> Self {
        self.mx = mx;
        self.my = my;
        self.mz = mz;
        self
    }

    /// Components as an array [Fx, Fy, Fz, Mx, My, Mz]
    pub fn components(&self) -> [f64; 6] {
        [self.fx, self.fy, self.fz, self.mx, self.my, self.mz]
    }
}
