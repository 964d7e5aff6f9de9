//! frame-solver - linear static analysis of 3D framed structures
//!
//! Direct stiffness method for frames of straight prismatic bars with six
//! degrees of freedom per node, supporting:
//! - rigid and linear-spring supports
//! - end releases (DOF disconnections) at either end of a bar
//! - concentrated and trapezoidal distributed loads, in local or global
//!   coordinates, under independent named load cases
//!
//! The analysis produces nodal displacements, support reactions and bar
//! end forces in each bar's local axes.
//!
//! ## Example
//! ```rust
//! use frame_solver::prelude::*;
//!
//! let mut model = FrameModel::new();
//!
//! model.add_material("Steel", Material::steel()).unwrap();
//! model.add_section("R30x50", Section::rectangular(0.3, 0.5)).unwrap();
//!
//! model.add_node("N1", Node::new(0.0, 0.0, 0.0)).unwrap();
//! model.add_node("N2", Node::new(6.0, 0.0, 0.0)).unwrap();
//! model.add_bar("B1", Bar::new("N1", "N2", "Steel", "R30x50")).unwrap();
//!
//! model.add_support("N1", Support::fixed()).unwrap();
//! model.add_node_load("Live", "N2", NodeLoad::fy(-10e3)).unwrap();
//!
//! model.analyze().unwrap();
//!
//! let tip = model.displacements("N2", "Live").unwrap();
//! assert!(tip.dy < 0.0);
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod model;
pub mod reactions;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::AnalysisOptions;
    pub use crate::elements::{Bar, BarReleases, Material, Node, Restraint, Section, Support};
    pub use crate::error::{FrameError, FrameResult};
    pub use crate::loads::{BarDistributedLoad, BarPointLoad, CoordSystem, LoadCase, NodeLoad};
    pub use crate::model::FrameModel;
    pub use crate::results::{BarEndForces, CaseResults, NodeDisplacement, Reactions};
}
