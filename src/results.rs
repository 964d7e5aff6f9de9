//! Result types

use serde::{Deserialize, Serialize};

/// Displacements at a node, global axes
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodeDisplacement {
    /// Displacement in X
    pub dx: f64,
    /// Displacement in Y
    pub dy: f64,
    /// Displacement in Z
    pub dz: f64,
    /// Rotation about X
    pub rx: f64,
    /// Rotation about Y
    pub ry: f64,
    /// Rotation about Z
    pub rz: f64,
}

impl NodeDisplacement {
    /// Create from an array [Dx, Dy, Dz, Rx, Ry, Rz]
    pub fn from_array(arr: [f64; 6]) -> Self {
        Self {
            dx: arr[0],
            dy: arr[1],
            dz: arr[2],
            rx: arr[3],
            ry: arr[4],
            rz: arr[5],
        }
    }

    /// Translation magnitude
    pub fn translation_magnitude(&self) -> f64 {
        (self.dx.powi(2) + self.dy.powi(2) + self.dz.powi(2)).sqrt()
    }
}

/// Reaction forces at a supported node, global axes
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Reactions {
    /// Reaction force in X
    pub fx: f64,
    /// Reaction force in Y
    pub fy: f64,
    /// Reaction force in Z
    pub fz: f64,
    /// Reaction moment about X
    pub mx: f64,
    /// Reaction moment about Y
    pub my: f64,
    /// Reaction moment about Z
    pub mz: f64,
}

impl Reactions {
    /// Create from an array [Fx, Fy, Fz, Mx, My, Mz]
    pub fn from_array(arr: [f64; 6]) -> Self {
        Self {
            fx: arr[0],
            fy: arr[1],
            fz: arr[2],
            mx: arr[3],
            my: arr[4],
            mz: arr[5],
        }
    }

    /// Total force magnitude
    pub fn force_magnitude(&self) -> f64 {
        (self.fx.powi(2) + self.fy.powi(2) + self.fz.powi(2)).sqrt()
    }
}

/// End forces of a bar in local axes, sign convention mask applied
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BarEndForces {
    pub fx_i: f64,
    pub fy_i: f64,
    pub fz_i: f64,
    pub mx_i: f64,
    pub my_i: f64,
    pub mz_i: f64,
    pub fx_j: f64,
    pub fy_j: f64,
    pub fz_j: f64,
    pub mx_j: f64,
    pub my_j: f64,
    pub mz_j: f64,
}

impl BarEndForces {
    /// Create from an array in end-DOF order
    pub fn from_array(arr: [f64; 12]) -> Self {
        Self {
            fx_i: arr[0],
            fy_i: arr[1],
            fz_i: arr[2],
            mx_i: arr[3],
            my_i: arr[4],
            mz_i: arr[5],
            fx_j: arr[6],
            fy_j: arr[7],
            fz_j: arr[8],
            mx_j: arr[9],
            my_j: arr[10],
            mz_j: arr[11],
        }
    }

    /// Components as an array in end-DOF order
    pub fn as_array(&self) -> [f64; 12] {
        [
            self.fx_i, self.fy_i, self.fz_i, self.mx_i, self.my_i, self.mz_i, self.fx_j,
            self.fy_j, self.fz_j, self.mx_j, self.my_j, self.mz_j,
        ]
    }
}

/// Displacements of one node within a case summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDisplacementRecord {
    /// Node name
    pub node: String,
    #[serde(flatten)]
    pub displacement: NodeDisplacement,
}

/// Reactions of one supported node within a case summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeReactionRecord {
    /// Node name
    pub node: String,
    #[serde(flatten)]
    pub reactions: Reactions,
}

/// End forces of one bar within a case summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarEndForcesRecord {
    /// Bar name
    pub bar: String,
    #[serde(flatten)]
    pub forces: BarEndForces,
}

/// Full results of one load case, in model insertion order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResults {
    /// Name of the load case
    pub load_case: String,
    /// Displacements of every node
    pub displacements: Vec<NodeDisplacementRecord>,
    /// Reactions of every supported node
    pub reactions: Vec<NodeReactionRecord>,
    /// End forces of every bar
    pub extreme_forces: Vec<BarEndForcesRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_arrays() {
        let arr = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0];
        assert_eq!(BarEndForces::from_array(arr).as_array(), arr);
    }

    #[test]
    fn test_case_results_serialization() {
        let results = CaseResults {
            load_case: "Dead".to_string(),
            displacements: vec![NodeDisplacementRecord {
                node: "N1".to_string(),
                displacement: NodeDisplacement::from_array([0.0; 6]),
            }],
            reactions: vec![],
            extreme_forces: vec![],
        };

        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["load_case"], "Dead");
        assert_eq!(json["displacements"][0]["node"], "N1");
        assert_eq!(json["displacements"][0]["dx"], 0.0);
    }
}
