//! Node - a named point in 3D space

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A node of the structural model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,

    /// Global index assigned during analysis; node k owns DOFs 6k..6k+5
    #[serde(skip)]
    pub(crate) id: Option<usize>,

    /// Displacement results by load case [Dx, Dy, Dz, Rx, Ry, Rz]
    #[serde(skip)]
    pub(crate) displacements: HashMap<String, [f64; 6]>,

    /// Reaction results by load case [Fx, Fy, Fz, Mx, My, Mz]
    #[serde(skip)]
    pub(crate) reactions: HashMap<String, [f64; 6]>,
}

impl Node {
    /// Create a new node at the given coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            id: None,
            displacements: HashMap::new(),
            reactions: HashMap::new(),
        }
    }

    /// Get the coordinates as an array
    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Distance to another node
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Displacements for a load case, if analyzed
    pub fn displacement(&self, case_name: &str) -> Option<[f64; 6]> {
        self.displacements.get(case_name).copied()
    }

    /// Reactions for a load case, if analyzed
    pub fn reaction(&self, case_name: &str) -> Option<[f64; 6]> {
        self.reactions.get(case_name).copied()
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let node = Node::new(1.0, 2.0, 3.0);
        assert_eq!(node.coords(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_node_distance() {
        let n1 = Node::new(0.0, 0.0, 0.0);
        let n2 = Node::new(3.0, 4.0, 0.0);
        assert!((n1.distance_to(&n2) - 5.0).abs() < 1e-10);
    }
}
