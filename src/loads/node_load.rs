//! Concentrated loads applied directly to nodes

use serde::{Deserialize, Serialize};

/// A force/moment pair applied to a node, in global axes
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NodeLoad {
    /// Force in X
    pub fx: f64,
    /// Force in Y
    pub fy: f64,
    /// Force in Z
    pub fz: f64,
    /// Moment about X
    pub mx: f64,
    /// Moment about Y
    pub my: f64,
    /// Moment about Z
    pub mz: f64,
}

impl NodeLoad {
    /// Create a node load with all six components
    pub fn new(fx: f64, fy: f64, fz: f64, mx: f64, my: f64, mz: f64) -> Self {
        Self {
            fx,
            fy,
            fz,
            mx,
            my,
            mz,
        }
    }

    /// Force-only load
    pub fn force(fx: f64, fy: f64, fz: f64) -> Self {
        Self::new(fx, fy, fz, 0.0, 0.0, 0.0)
    }

    /// Moment-only load
    pub fn moment(mx: f64, my: f64, mz: f64) -> Self {
        Self::new(0.0, 0.0, 0.0, mx, my, mz)
    }

    /// Single force in X
    pub fn fx(value: f64) -> Self {
        Self::force(value, 0.0, 0.0)
    }

    /// Single force in Y
    pub fn fy(value: f64) -> Self {
        Self::force(0.0, value, 0.0)
    }

    /// Single force in Z
    pub fn fz(value: f64) -> Self {
        Self::force(0.0, 0.0, value)
    }

    /// Components as an array [Fx, Fy, Fz, Mx, My, Mz]
    pub fn as_array(&self) -> [f64; 6] {
        [self.fx, self.fy, self.fz, self.mx, self.my, self.mz]
    }

    /// Scale every component by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.fx * factor,
            self.fy * factor,
            self.fz * factor,
            self.mx * factor,
            self.my * factor,
            self.mz * factor,
        )
    }
}
