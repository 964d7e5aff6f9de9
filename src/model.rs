//! Frame model - model container, assembler and solver

use std::collections::HashMap;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisOptions;
use crate::elements::{Bar, Material, Node, Section, Support};
use crate::error::{FrameError, FrameResult};
use crate::loads::{BarDistributedLoad, BarPointLoad, CoordSystem, LoadCase, NodeLoad};
use crate::math::{self, Mat, Vec as FVec, Vec12, Vec6};
use crate::reactions::{point, section, EndForces, PlaneReactions};
use crate::results::{
    BarEndForces, BarEndForcesRecord, CaseResults, NodeDisplacement, NodeDisplacementRecord,
    NodeReactionRecord, Reactions,
};

/// Sign convention applied to bar end forces: axial and z-shear flip at
/// the i end, y-shear and all moments flip at the j end, so that results
/// read tension-positive on the left and compression-positive on the
/// right. Part of the public contract of [`FrameModel::end_forces`].
const END_FORCE_SIGNS: [f64; 12] = [
    -1.0, 1.0, 1.0, 1.0, 1.0, -1.0, 1.0, -1.0, -1.0, -1.0, -1.0, 1.0,
];

/// Per-case solution produced by one solver pass
struct CaseSolution {
    case: String,
    displacements: FVec,
    reactions: FVec,
    bar_load_vectors: Vec<(String, Vec12)>,
    bar_forces: Vec<(String, [f64; 12])>,
}

/// The structural model: entities, loads, and analysis results.
///
/// Entities are keyed by unique name; insertion order is preserved and
/// determines the global DOF numbering (node k owns DOFs 6k..6k+5) and
/// the ordering of collected results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameModel {
    /// Nodes in the model
    pub nodes: HashMap<String, Node>,
    /// Materials in the model
    pub materials: HashMap<String, Material>,
    /// Sections in the model
    pub sections: HashMap<String, Section>,
    /// Bars in the model
    pub bars: HashMap<String, Bar>,
    /// Support conditions per node name
    pub supports: HashMap<String, Support>,
    /// Load cases by name
    pub load_cases: HashMap<String, LoadCase>,

    node_order: Vec<String>,
    bar_order: Vec<String>,
    case_order: Vec<String>,

    #[serde(skip)]
    solved: bool,
}

impl Default for FrameModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameModel {
    /// Create a new empty model
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            materials: HashMap::new(),
            sections: HashMap::new(),
            bars: HashMap::new(),
            supports: HashMap::new(),
            load_cases: HashMap::new(),
            node_order: Vec::new(),
            bar_order: Vec::new(),
            case_order: Vec::new(),
            solved: false,
        }
    }

    // ========================
    // Model building
    // ========================

    /// Add a node to the model
    pub fn add_node(&mut self, name: &str, node: Node) -> FrameResult<()> {
        if self.nodes.contains_key(name) {
            return Err(FrameError::DuplicateName(name.to_string()));
        }
        self.nodes.insert(name.to_string(), node);
        self.node_order.push(name.to_string());
        self.solved = false;
        Ok(())
    }

    /// Add a material to the model
    pub fn add_material(&mut self, name: &str, material: Material) -> FrameResult<()> {
        if self.materials.contains_key(name) {
            return Err(FrameError::DuplicateName(name.to_string()));
        }
        material.validate(name)?;
        self.materials.insert(name.to_string(), material);
        Ok(())
    }

    /// Add a section to the model
    pub fn add_section(&mut self, name: &str, section: Section) -> FrameResult<()> {
        if self.sections.contains_key(name) {
            return Err(FrameError::DuplicateName(name.to_string()));
        }
        section.validate(name)?;
        self.sections.insert(name.to_string(), section);
        Ok(())
    }

    /// Add a bar to the model
    pub fn add_bar(&mut self, name: &str, bar: Bar) -> FrameResult<()> {
        if !self.nodes.contains_key(&bar.start_node) {
            return Err(FrameError::NodeNotFound(bar.start_node.clone()));
        }
        if !self.nodes.contains_key(&bar.end_node) {
            return Err(FrameError::NodeNotFound(bar.end_node.clone()));
        }
        if !self.materials.contains_key(&bar.material) {
            return Err(FrameError::MaterialNotFound(bar.material.clone()));
        }
        if !self.sections.contains_key(&bar.section) {
            return Err(FrameError::SectionNotFound(bar.section.clone()));
        }
        if bar.start_node == bar.end_node {
            return Err(FrameError::InvalidGeometry(format!(
                "bar '{name}' starts and ends at node '{}'",
                bar.start_node
            )));
        }
        if self.bars.contains_key(name) {
            return Err(FrameError::DuplicateName(name.to_string()));
        }

        self.bars.insert(name.to_string(), bar);
        self.bar_order.push(name.to_string());
        self.solved = false;
        Ok(())
    }

    /// Add or replace the support at a node
    pub fn add_support(&mut self, node_name: &str, support: Support) -> FrameResult<()> {
        if !self.nodes.contains_key(node_name) {
            return Err(FrameError::NodeNotFound(node_name.to_string()));
        }
        support.validate(node_name)?;
        self.supports.insert(node_name.to_string(), support);
        self.solved = false;
        Ok(())
    }

    /// Add an empty load case
    pub fn add_load_case(&mut self, name: &str) -> FrameResult<()> {
        if self.load_cases.contains_key(name) {
            return Err(FrameError::DuplicateName(name.to_string()));
        }
        self.load_cases
            .insert(name.to_string(), LoadCase::new(name));
        self.case_order.push(name.to_string());
        self.solved = false;
        Ok(())
    }

    /// Add a concentrated load to a node, creating the case on first use
    pub fn add_node_load(
        &mut self,
        case_name: &str,
        node_name: &str,
        load: NodeLoad,
    ) -> FrameResult<()> {
        if !self.nodes.contains_key(node_name) {
            return Err(FrameError::NodeNotFound(node_name.to_string()));
        }
        self.case_mut(case_name).add_node_load(node_name, load);
        self.solved = false;
        Ok(())
    }

    /// Add a point load to a bar, creating the case on first use
    pub fn add_bar_point_load(
        &mut self,
        case_name: &str,
        bar_name: &str,
        load: BarPointLoad,
    ) -> FrameResult<()> {
        if !self.bars.contains_key(bar_name) {
            return Err(FrameError::BarNotFound(bar_name.to_string()));
        }
        self.case_mut(case_name).add_point_load(bar_name, load);
        self.solved = false;
        Ok(())
    }

    /// Add a distributed load to a bar, creating the case on first use
    pub fn add_bar_distributed_load(
        &mut self,
        case_name: &str,
        bar_name: &str,
        load: BarDistributedLoad,
    ) -> FrameResult<()> {
        if !self.bars.contains_key(bar_name) {
            return Err(FrameError::BarNotFound(bar_name.to_string()));
        }
        self.case_mut(case_name).add_distributed_load(bar_name, load);
        self.solved = false;
        Ok(())
    }

    fn case_mut(&mut self, case_name: &str) -> &mut LoadCase {
        if !self.load_cases.contains_key(case_name) {
            self.load_cases
                .insert(case_name.to_string(), LoadCase::new(case_name));
            self.case_order.push(case_name.to_string());
        }
        self.load_cases.get_mut(case_name).unwrap()
    }

    /// Node names in insertion order
    pub fn node_names(&self) -> &[String] {
        &self.node_order
    }

    /// Bar names in insertion order
    pub fn bar_names(&self) -> &[String] {
        &self.bar_order
    }

    /// Load case names in insertion order
    pub fn case_names(&self) -> &[String] {
        &self.case_order
    }

    // ========================
    // Analysis
    // ========================

    /// Run the linear static analysis with default options
    pub fn analyze(&mut self) -> FrameResult<()> {
        self.analyze_with(AnalysisOptions::default())
    }

    /// Run the linear static analysis
    pub fn analyze_with(&mut self, options: AnalysisOptions) -> FrameResult<()> {
        if self.bars.is_empty() {
            return Err(FrameError::InvalidGeometry("model has no bars".to_string()));
        }

        self.prepare()?;

        let n_dofs = self.nodes.len() * 6;
        debug!("assembling global stiffness, {n_dofs} DOFs");

        let kg = self.assemble_global_stiffness();
        let kg_solution = self.apply_supports(&kg, options.penalty);
        let lu = kg_solution.lu();

        let case_names = self.case_order.clone();
        debug!("solving {} load case(s)", case_names.len());

        let solutions: FrameResult<Vec<CaseSolution>> = if options.parallel {
            case_names
                .par_iter()
                .map(|name| self.solve_case(name, &kg, &lu, &options))
                .collect()
        } else {
            case_names
                .iter()
                .map(|name| self.solve_case(name, &kg, &lu, &options))
                .collect()
        };

        for solution in solutions? {
            self.store_case(solution);
        }

        self.solved = true;
        Ok(())
    }

    /// Assign node ids and compute every bar's geometry and matrices
    fn prepare(&mut self) -> FrameResult<()> {
        for (index, name) in self.node_order.iter().enumerate() {
            let node = self.nodes.get_mut(name).unwrap();
            node.id = Some(index);
            node.displacements.clear();
            node.reactions.clear();
        }

        for bar_name in self.bar_order.clone() {
            let bar = &self.bars[&bar_name];
            let start = self.nodes[&bar.start_node].coords();
            let end = self.nodes[&bar.end_node].coords();

            let dx = end[0] - start[0];
            let dy = end[1] - start[1];
            let dz = end[2] - start[2];
            let length = (dx * dx + dy * dy + dz * dz).sqrt();
            if length < 1e-10 {
                return Err(FrameError::InvalidGeometry(format!(
                    "bar '{bar_name}' has zero length"
                )));
            }

            let material = &self.materials[&bar.material];
            let s = &self.sections[&bar.section];

            let kl_nr = math::bar_local_stiffness(
                material.e, material.g, s.area, s.ix, s.iy, s.iz, length,
            );
            let kl = math::condense_stiffness(&kl_nr, &bar.releases.as_array())?;
            let r = math::bar_rotation_matrix(&start, &end, bar.rotation, bar.y_up);
            let klg = r.transpose() * kl * r;

            let bar = self.bars.get_mut(&bar_name).unwrap();
            bar.dx = dx;
            bar.dy = dy;
            bar.dz = dz;
            bar.length = Some(length);
            bar.kl_nr = Some(kl_nr);
            bar.kl = Some(kl);
            bar.r = Some(r);
            bar.klg = Some(klg);
            bar.load_vectors.clear();
            bar.extreme_forces.clear();
        }

        Ok(())
    }

    /// Global DOF indices of a bar in end-DOF order
    fn spread_vector(&self, bar: &Bar) -> [usize; 12] {
        let i = self.nodes[&bar.start_node].id.unwrap() * 6;
        let j = self.nodes[&bar.end_node].id.unwrap() * 6;

        let mut spread = [0usize; 12];
        for k in 0..6 {
            spread[k] = i + k;
            spread[k + 6] = j + k;
        }
        spread
    }

    /// Scatter every bar's global stiffness into Kg
    fn assemble_global_stiffness(&self) -> Mat {
        let n_dofs = self.nodes.len() * 6;
        let mut kg = Mat::zeros(n_dofs, n_dofs);

        for bar_name in &self.bar_order {
            let bar = &self.bars[bar_name];
            let klg = bar.klg.as_ref().unwrap();
            let spread = self.spread_vector(bar);

            for (row_local, &row_global) in spread.iter().enumerate() {
                for (col_local, &col_global) in spread.iter().enumerate() {
                    kg[(row_global, col_global)] += klg[(row_local, col_local)];
                }
            }
        }

        kg
    }

    /// Apply supports to a copy of Kg: springs add their stiffness on the
    /// diagonal, rigid restraints add the penalty. Kg itself stays
    /// untouched for reaction recovery.
    fn apply_supports(&self, kg: &Mat, penalty: f64) -> Mat {
        let mut kg_solution = kg.clone();

        for (node_name, support) in &self.supports {
            let base = self.nodes[node_name].id.unwrap() * 6;
            for (offset, restraint) in support.as_array().iter().enumerate() {
                match restraint {
                    crate::elements::Restraint::Rigid => {
                        kg_solution[(base + offset, base + offset)] += penalty;
                    }
                    crate::elements::Restraint::Spring(k) => {
                        kg_solution[(base + offset, base + offset)] += k;
                    }
                    crate::elements::Restraint::Free => {}
                }
            }
        }

        kg_solution
    }

    /// Assemble, solve and post-process one load case
    fn solve_case(
        &self,
        case_name: &str,
        kg: &Mat,
        lu: &nalgebra::linalg::LU<f64, nalgebra::Dyn, nalgebra::Dyn>,
        options: &AnalysisOptions,
    ) -> FrameResult<CaseSolution> {
        let case = &self.load_cases[case_name];
        let n_dofs = self.nodes.len() * 6;
        let mut f = FVec::zeros(n_dofs);

        // Nodal loads scatter straight into the owning node's DOFs
        for (node_name, loads) in &case.node_loads {
            let base = self.nodes[node_name].id.unwrap() * 6;
            for load in loads {
                for (offset, value) in load.as_array().iter().enumerate() {
                    f[base + offset] += value;
                }
            }
        }

        // Bar loads become equivalent nodal loads, one vector per bar
        let mut bar_load_vectors: Vec<(String, Vec12)> = Vec::new();
        for bar_name in &self.bar_order {
            if !case.loads_bar(bar_name) {
                continue;
            }
            let bar = &self.bars[bar_name];
            let vector = self.bar_load_vector(bar_name, bar, case, options)?;
            let spread = self.spread_vector(bar);
            for (local, &global) in spread.iter().enumerate() {
                f[global] += vector[local];
            }
            bar_load_vectors.push((bar_name.clone(), vector));
        }

        let u = lu.solve(&f).ok_or(FrameError::SingularMatrix)?;

        // Reactions from the unmodified Kg; free DOFs of supported nodes
        // and all DOFs of unsupported nodes report exactly zero
        let mut reactions = kg * &u - &f;
        for (index, node_name) in self.node_order.iter().enumerate() {
            let base = index * 6;
            match self.supports.get(node_name) {
                Some(support) => {
                    for (offset, restraint) in support.as_array().iter().enumerate() {
                        if !restraint.is_restrained() {
                            reactions[base + offset] = 0.0;
                        }
                    }
                }
                None => {
                    for offset in 0..6 {
                        reactions[base + offset] = 0.0;
                    }
                }
            }
        }

        // Bar end forces: klg u - equivalent loads, rotated to local axes
        // and passed through the sign convention mask
        let loads_by_bar: HashMap<&str, &Vec12> = bar_load_vectors
            .iter()
            .map(|(name, v)| (name.as_str(), v))
            .collect();

        let mut bar_forces: Vec<(String, [f64; 12])> = Vec::new();
        for bar_name in &self.bar_order {
            let bar = &self.bars[bar_name];
            let spread = self.spread_vector(bar);

            let mut u_bar = Vec12::zeros();
            for (local, &global) in spread.iter().enumerate() {
                u_bar[local] = u[global];
            }

            let vector = loads_by_bar
                .get(bar_name.as_str())
                .map(|v| **v)
                .unwrap_or_else(Vec12::zeros);

            let global_forces = bar.klg.unwrap() * u_bar - vector;
            let local_forces = bar.r.unwrap() * global_forces;

            let mut forces = [0.0; 12];
            for (index, &sign) in END_FORCE_SIGNS.iter().enumerate() {
                forces[index] = sign * local_forces[index];
            }
            bar_forces.push((bar_name.clone(), forces));
        }

        Ok(CaseSolution {
            case: case_name.to_string(),
            displacements: u,
            reactions,
            bar_load_vectors,
            bar_forces,
        })
    }

    /// Cumulative equivalent nodal load vector of a bar for one case, in
    /// global coordinates. Computed exactly once per (bar, case) over
    /// both the point and the distributed loads targeting the bar.
    fn bar_load_vector(
        &self,
        bar_name: &str,
        bar: &Bar,
        case: &LoadCase,
        options: &AnalysisOptions,
    ) -> FrameResult<Vec12> {
        let length = bar.length.unwrap();
        let r = bar.r.as_ref().unwrap();
        let r6 = r.fixed_view::<6, 6>(0, 0).into_owned();
        let kl_nr = bar.kl_nr.as_ref().unwrap();
        let releases = bar.releases.as_array();

        let mut total = Vec12::zeros();

        for load in case.point_loads_on(bar_name) {
            let mut c = load.components();
            if load.system == CoordSystem::Global {
                let local = r6 * Vec6::from_row_slice(&c);
                c.copy_from_slice(local.as_slice());
            }
            let [fx, fy, fz, mx, my, mz] = c;

            let x = load.position;
            let local = assemble_fixed_end_vector(
                point::force_x(length, x, fx)?,
                point::force_y(length, x, fy)?,
                point::force_z(length, x, fz)?,
                point::moment_x(length, x, mx)?,
                point::moment_y(length, x, my)?,
                point::moment_z(length, x, mz)?,
            );

            let condensed =
                math::condense_load_vector(&local, kl_nr, &releases, options.condensation_tol);
            total += r.transpose() * condensed;
        }

        for load in case.distributed_loads_on(bar_name) {
            let mut c1 = load.start_components();
            let mut c2 = load.end_components();
            if load.system == CoordSystem::Global {
                let local_1 = r6 * Vec6::from_row_slice(&c1);
                let local_2 = r6 * Vec6::from_row_slice(&c2);
                c1.copy_from_slice(local_1.as_slice());
                c2.copy_from_slice(local_2.as_slice());
            }
            let [fx1, fy1, fz1, mx1, my1, mz1] = c1;
            let [fx2, fy2, fz2, mx2, my2, mz2] = c2;

            let (x1, x2) = (load.x1, load.x2);
            let local = assemble_fixed_end_vector(
                section::force_x_trap(length, x1, x2, fx1, fx2)?,
                section::force_y_trap(length, x1, x2, fy1, fy2)?,
                section::force_z_trap(length, x1, x2, fz1, fz2)?,
                section::moment_x_trap(length, x1, x2, mx1, mx2)?,
                section::moment_y_trap(length, x1, x2, my1, my2)?,
                section::moment_z_trap(length, x1, x2, mz1, mz2)?,
            );

            let condensed =
                math::condense_load_vector(&local, kl_nr, &releases, options.condensation_tol);
            total += r.transpose() * condensed;
        }

        Ok(total)
    }

    /// Scatter one case's solution into the nodes and bars
    fn store_case(&mut self, solution: CaseSolution) {
        let case = solution.case;

        for (index, node_name) in self.node_order.iter().enumerate() {
            let base = index * 6;
            let mut displacement = [0.0; 6];
            let mut reaction = [0.0; 6];
            for offset in 0..6 {
                displacement[offset] = solution.displacements[base + offset];
                reaction[offset] = solution.reactions[base + offset];
            }

            let node = self.nodes.get_mut(node_name).unwrap();
            node.displacements.insert(case.clone(), displacement);
            node.reactions.insert(case.clone(), reaction);
        }

        for (bar_name, vector) in solution.bar_load_vectors {
            self.bars
                .get_mut(&bar_name)
                .unwrap()
                .load_vectors
                .insert(case.clone(), vector);
        }
        for (bar_name, forces) in solution.bar_forces {
            self.bars
                .get_mut(&bar_name)
                .unwrap()
                .extreme_forces
                .insert(case.clone(), forces);
        }
    }

    // ========================
    // Result access
    // ========================

    fn check_case(&self, case_name: &str) -> FrameResult<()> {
        if !self.load_cases.contains_key(case_name) {
            return Err(FrameError::LoadCaseNotFound(case_name.to_string()));
        }
        Ok(())
    }

    /// Displacements of a node for a load case, global axes
    pub fn displacements(&self, node_name: &str, case_name: &str) -> FrameResult<NodeDisplacement> {
        let node = self
            .nodes
            .get(node_name)
            .ok_or_else(|| FrameError::NodeNotFound(node_name.to_string()))?;
        self.check_case(case_name)?;

        let displacement = node
            .displacements
            .get(case_name)
            .ok_or(FrameError::NotAnalyzed)?;
        Ok(NodeDisplacement::from_array(*displacement))
    }

    /// Reactions of a node for a load case; components of unrestrained
    /// DOFs are exactly zero
    pub fn reactions(&self, node_name: &str, case_name: &str) -> FrameResult<Reactions> {
        let node = self
            .nodes
            .get(node_name)
            .ok_or_else(|| FrameError::NodeNotFound(node_name.to_string()))?;
        self.check_case(case_name)?;

        let reaction = node
            .reactions
            .get(case_name)
            .ok_or(FrameError::NotAnalyzed)?;
        Ok(Reactions::from_array(*reaction))
    }

    /// End forces of a bar for a load case, local axes, sign mask applied
    pub fn end_forces(&self, bar_name: &str, case_name: &str) -> FrameResult<BarEndForces> {
        let bar = self
            .bars
            .get(bar_name)
            .ok_or_else(|| FrameError::BarNotFound(bar_name.to_string()))?;
        self.check_case(case_name)?;

        let forces = bar
            .extreme_forces
            .get(case_name)
            .ok_or(FrameError::NotAnalyzed)?;
        Ok(BarEndForces::from_array(*forces))
    }

    /// Collect the full results of every load case, in insertion order
    pub fn results(&self) -> FrameResult<Vec<CaseResults>> {
        if !self.solved {
            return Err(FrameError::NotAnalyzed);
        }

        let mut all = Vec::with_capacity(self.case_order.len());
        for case_name in &self.case_order {
            let mut displacements = Vec::with_capacity(self.node_order.len());
            let mut reactions = Vec::new();
            for node_name in &self.node_order {
                displacements.push(NodeDisplacementRecord {
                    node: node_name.clone(),
                    displacement: self.displacements(node_name, case_name)?,
                });
                if self.supports.contains_key(node_name) {
                    reactions.push(NodeReactionRecord {
                        node: node_name.clone(),
                        reactions: self.reactions(node_name, case_name)?,
                    });
                }
            }

            let mut extreme_forces = Vec::with_capacity(self.bar_order.len());
            for bar_name in &self.bar_order {
                extreme_forces.push(BarEndForcesRecord {
                    bar: bar_name.clone(),
                    forces: self.end_forces(bar_name, case_name)?,
                });
            }

            all.push(CaseResults {
                load_case: case_name.clone(),
                displacements,
                reactions,
                extreme_forces,
            });
        }

        Ok(all)
    }

    /// Whether the model has been analyzed
    pub fn is_analyzed(&self) -> bool {
        self.solved
    }
}

/// Subtract the six directional reaction sets into a local 12-vector.
///
/// The reactions act on the supports; the equivalent nodal loads applied
/// to the structure are their negation. Each bending plane aggregates its
/// force-source and moment-source contributions.
fn assemble_fixed_end_vector(
    fxr: EndForces,
    fyr: PlaneReactions,
    fzr: PlaneReactions,
    mxr: EndForces,
    myr: PlaneReactions,
    mzr: PlaneReactions,
) -> Vec12 {
    let mut local = Vec12::zeros();

    local[0] -= fxr.a;
    local[6] -= fxr.b;
    local[1] -= fyr.ra + mzr.ra;
    local[7] -= fyr.rb + mzr.rb;
    local[2] -= fzr.ra + myr.ra;
    local[8] -= fzr.rb + myr.rb;
    local[3] -= mxr.a;
    local[9] -= mxr.b;
    local[4] -= fzr.ma + myr.ma;
    local[10] -= fzr.mb + myr.mb;
    local[5] -= fyr.ma + mzr.ma;
    local[11] -= fyr.mb + mzr.mb;

    local
}
