//! Cross-section properties

use serde::{Deserialize, Serialize};

use crate::error::{FrameError, FrameResult};

/// Cross-section properties of a bar, in its local axes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Cross-sectional area
    pub area: f64,
    /// Torsional constant
    pub ix: f64,
    /// Bending inertia about the local y axis
    pub iy: f64,
    /// Bending inertia about the local z axis
    pub iz: f64,
}

impl Section {
    /// Create a new section from its properties
    pub fn new(area: f64, ix: f64, iy: f64, iz: f64) -> Self {
        Self { area, ix, iy, iz }
    }

    /// Solid rectangle of the given width (local z) and depth (local y)
    pub fn rectangular(width: f64, depth: f64) -> Self {
        let area = width * depth;
        let iy = depth * width.powi(3) / 12.0;
        let iz = width * depth.powi(3) / 12.0;

        // Approximate torsional constant for a solid rectangle
        let (long, short) = if width > depth {
            (width, depth)
        } else {
            (depth, width)
        };
        let ix = long * short.powi(3) / 3.0 * (1.0 - 0.63 * short / long);

        Self { area, ix, iy, iz }
    }

    /// Solid circle of the given diameter
    pub fn circular(diameter: f64) -> Self {
        let r = diameter / 2.0;
        let area = std::f64::consts::PI * r.powi(2);
        let i = std::f64::consts::PI * r.powi(4) / 4.0;
        let ix = std::f64::consts::PI * r.powi(4) / 2.0;

        Self {
            area,
            ix,
            iy: i,
            iz: i,
        }
    }

    /// Polar moment of inertia
    pub fn ip(&self) -> f64 {
        self.iy + self.iz
    }

    pub(crate) fn validate(&self, name: &str) -> FrameResult<()> {
        if self.area <= 0.0 || self.ix <= 0.0 || self.iy <= 0.0 || self.iz <= 0.0 {
            return Err(FrameError::InvalidSection(format!(
                "'{name}' must have positive area, Ix, Iy and Iz"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_section() {
        let section = Section::rectangular(0.3, 0.5);
        assert!((section.area - 0.15).abs() < 1e-10);
        assert!((section.iz - 0.3 * 0.5_f64.powi(3) / 12.0).abs() < 1e-10);
        assert!((section.iy - 0.5 * 0.3_f64.powi(3) / 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_circular_section() {
        let section = Section::circular(0.5);
        assert!((section.iy - section.iz).abs() < 1e-12);
        assert!((section.ix - 2.0 * section.iy).abs() < 1e-12);
    }

    #[test]
    fn test_validation() {
        assert!(Section::rectangular(0.3, 0.5).validate("R30x50").is_ok());
        assert!(Section::new(0.0, 1.0, 1.0, 1.0).validate("bad").is_err());
        assert!(Section::new(1.0, 1.0, -1.0, 1.0).validate("bad").is_err());
    }
}
