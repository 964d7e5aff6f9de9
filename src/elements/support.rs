//! Support conditions

use serde::{Deserialize, Serialize};

use crate::error::{FrameError, FrameResult};

/// Restraint of a single DOF at a supported node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Restraint {
    /// Unrestrained
    Free,
    /// Rigidly restrained (imposed via a large diagonal penalty)
    Rigid,
    /// Linear spring of the given stiffness (must be non-zero)
    Spring(f64),
}

impl Restraint {
    /// Whether the DOF is restrained at all
    pub fn is_restrained(&self) -> bool {
        !matches!(self, Restraint::Free)
    }
}

impl Default for Restraint {
    fn default() -> Self {
        Restraint::Free
    }
}

/// Support conditions at a node, one restraint per DOF
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Support {
    pub dx: Restraint,
    pub dy: Restraint,
    pub dz: Restraint,
    pub rx: Restraint,
    pub ry: Restraint,
    pub rz: Restraint,
}

impl Support {
    /// Create a support with no restraints
    pub fn new() -> Self {
        Self::default()
    }

    /// Fully fixed support
    pub fn fixed() -> Self {
        Self {
            dx: Restraint::Rigid,
            dy: Restraint::Rigid,
            dz: Restraint::Rigid,
            rx: Restraint::Rigid,
            ry: Restraint::Rigid,
            rz: Restraint::Rigid,
        }
    }

    /// Pinned support: translations restrained, rotations free
    pub fn pinned() -> Self {
        Self {
            dx: Restraint::Rigid,
            dy: Restraint::Rigid,
            dz: Restraint::Rigid,
            ..Default::default()
        }
    }

    /// Support from six restraints in DOF order (Dx, Dy, Dz, Rx, Ry, Rz)
    pub fn with_restraints(restraints: [Restraint; 6]) -> Self {
        Self {
            dx: restraints[0],
            dy: restraints[1],
            dz: restraints[2],
            rx: restraints[3],
            ry: restraints[4],
            rz: restraints[5],
        }
    }

    /// Restraints in DOF order
    pub fn as_array(&self) -> [Restraint; 6] {
        [self.dx, self.dy, self.dz, self.rx, self.ry, self.rz]
    }

    /// Whether any DOF is restrained
    pub fn is_supported(&self) -> bool {
        self.as_array().iter().any(Restraint::is_restrained)
    }

    /// Number of restrained DOFs
    pub fn num_restrained(&self) -> usize {
        self.as_array()
            .iter()
            .filter(|r| r.is_restrained())
            .count()
    }

    pub(crate) fn validate(&self, node_name: &str) -> FrameResult<()> {
        if self
            .as_array()
            .iter()
            .any(|r| matches!(r, Restraint::Spring(k) if *k == 0.0))
        {
            return Err(FrameError::InvalidSupport(format!(
                "zero spring stiffness at node '{node_name}'; use Free for no restraint"
            )));
        }
        Ok(())
    }
}
