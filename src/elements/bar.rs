//! Bar - a prismatic 3D frame element between two nodes

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::math::{Mat12, Vec12};

/// End releases of a bar, one flag per end-DOF.
///
/// A released DOF is disconnected from its node: no force or moment
/// transmits through it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BarReleases {
    /// Releases at the start node [Dx, Dy, Dz, Rx, Ry, Rz]
    pub i_end: [bool; 6],
    /// Releases at the end node [Dx, Dy, Dz, Rx, Ry, Rz]
    pub j_end: [bool; 6],
}

impl BarReleases {
    /// No releases
    pub fn none() -> Self {
        Self::default()
    }

    /// Moment releases (Ry, Rz) at the start node
    pub fn pin_i() -> Self {
        Self {
            i_end: [false, false, false, false, true, true],
            j_end: [false; 6],
        }
    }

    /// Moment releases (Ry, Rz) at the end node
    pub fn pin_j() -> Self {
        Self {
            i_end: [false; 6],
            j_end: [false, false, false, false, true, true],
        }
    }

    /// Moment releases at both ends
    pub fn pin_both() -> Self {
        Self {
            i_end: [false, false, false, false, true, true],
            j_end: [false, false, false, false, true, true],
        }
    }

    /// Rotational releases for truss-like bars: bending released at both
    /// ends, torsion at the j end only. Releasing torsion at both ends
    /// would leave a zero pivot, since the first release already
    /// condenses the whole GIx/L stiffness away.
    pub fn truss() -> Self {
        Self {
            i_end: [false, false, false, false, true, true],
            j_end: [false, false, false, true, true, true],
        }
    }

    /// Combined releases as a 12-element array in end-DOF order
    pub fn as_array(&self) -> [bool; 12] {
        let mut arr = [false; 12];
        arr[0..6].copy_from_slice(&self.i_end);
        arr[6..12].copy_from_slice(&self.j_end);
        arr
    }

    /// Whether any DOF is released
    pub fn any(&self) -> bool {
        self.as_array().iter().any(|&r| r)
    }
}

/// A straight prismatic bar (beam, column or brace)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bar {
    /// Name of the start node (i)
    pub start_node: String,
    /// Name of the end node (j)
    pub end_node: String,
    /// Name of the material
    pub material: String,
    /// Name of the section
    pub section: String,
    /// Roll rotation about the longitudinal axis, degrees
    pub rotation: f64,
    /// End releases
    pub releases: BarReleases,
    /// Use the y-up axis convention instead of the default z-up
    pub y_up: bool,

    /// Coordinate differences end - start, set during analysis
    #[serde(skip)]
    pub(crate) dx: f64,
    #[serde(skip)]
    pub(crate) dy: f64,
    #[serde(skip)]
    pub(crate) dz: f64,
    /// Bar length, set during analysis
    #[serde(skip)]
    pub(crate) length: Option<f64>,

    /// Local stiffness with releases condensed out
    #[serde(skip)]
    pub(crate) kl: Option<Mat12>,
    /// Local stiffness without releases
    #[serde(skip)]
    pub(crate) kl_nr: Option<Mat12>,
    /// Local -> global rotation matrix
    #[serde(skip)]
    pub(crate) r: Option<Mat12>,
    /// Global stiffness R^T kl R
    #[serde(skip)]
    pub(crate) klg: Option<Mat12>,

    /// Equivalent nodal load vector per load case, global coordinates
    #[serde(skip)]
    pub(crate) load_vectors: HashMap<String, Vec12>,
    /// End forces per load case, local coordinates, sign mask applied
    #[serde(skip)]
    pub(crate) extreme_forces: HashMap<String, [f64; 12]>,
}

impl Bar {
    /// Create a new bar between two nodes
    pub fn new(start_node: &str, end_node: &str, material: &str, section: &str) -> Self {
        Self {
            start_node: start_node.to_string(),
            end_node: end_node.to_string(),
            material: material.to_string(),
            section: section.to_string(),
            rotation: 0.0,
            releases: BarReleases::none(),
            y_up: false,
            dx: 0.0,
            dy: 0.0,
            dz: 0.0,
            length: None,
            kl: None,
            kl_nr: None,
            r: None,
            klg: None,
            load_vectors: HashMap::new(),
            extreme_forces: HashMap::new(),
        }
    }

    /// Set the roll rotation about the longitudinal axis, in degrees
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the end releases
    pub fn with_releases(mut self, releases: BarReleases) -> Self {
        self.releases = releases;
        self
    }

    /// Switch to the y-up axis convention
    pub fn with_y_up(mut self) -> Self {
        self.y_up = true;
        self
    }

    /// Bar length, available after analysis preparation
    pub fn length(&self) -> Option<f64> {
        self.length
    }

    /// End forces for a load case in local axes, sign mask applied.
    ///
    /// Order: [Fxi, Fyi, Fzi, Mxi, Myi, Mzi, Fxj, Fyj, Fzj, Mxj, Myj, Mzj]
    pub fn extreme_forces(&self, case_name: &str) -> Option<[f64; 12]> {
        self.extreme_forces.get(case_name).copied()
    }
}
