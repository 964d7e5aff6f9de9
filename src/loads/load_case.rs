//! Load cases

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{BarDistributedLoad, BarPointLoad, NodeLoad};

/// A named load case: a set of loads solved independently of other cases.
///
/// Loads are keyed by the name of the entity they target; a case knows
/// which bars it loads, bars know nothing about loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCase {
    /// Name of the load case
    pub name: String,
    /// Concentrated loads per node name
    pub node_loads: HashMap<String, Vec<NodeLoad>>,
    /// Point loads per bar name
    pub point_loads: HashMap<String, Vec<BarPointLoad>>,
    /// Distributed loads per bar name
    pub distributed_loads: HashMap<String, Vec<BarDistributedLoad>>,
}

impl LoadCase {
    /// Create an empty load case
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            node_loads: HashMap::new(),
            point_loads: HashMap::new(),
            distributed_loads: HashMap::new(),
        }
    }

    /// Add a concentrated load to a node
    pub fn add_node_load(&mut self, node_name: &str, load: NodeLoad) {
        self.node_loads
            .entry(node_name.to_string())
            .or_default()
            .push(load);
    }

    /// Add a point load to a bar
    pub fn add_point_load(&mut self, bar_name: &str, load: BarPointLoad) {
        self.point_loads
            .entry(bar_name.to_string())
            .or_default()
            .push(load);
    }

    /// Add a distributed load to a bar
    pub fn add_distributed_load(&mut self, bar_name: &str, load: BarDistributedLoad) {
        self.distributed_loads
            .entry(bar_name.to_string())
            .or_default()
            .push(load);
    }

    /// Point loads targeting a bar
    pub fn point_loads_on(&self, bar_name: &str) -> &[BarPointLoad] {
        self.point_loads
            .get(bar_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Distributed loads targeting a bar
    pub fn distributed_loads_on(&self, bar_name: &str) -> &[BarDistributedLoad] {
        self.distributed_loads
            .get(bar_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether the case applies any load to the given bar
    pub fn loads_bar(&self, bar_name: &str) -> bool {
        self.point_loads.contains_key(bar_name) || self.distributed_loads.contains_key(bar_name)
    }

    /// Whether the case carries no loads at all
    pub fn is_empty(&self) -> bool {
        self.node_loads.is_empty()
            && self.point_loads.is_empty()
            && self.distributed_loads.is_empty()
    }
}
