//! Analysis options

use serde::{Deserialize, Serialize};

/// Options for a linear static analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Solve load cases in parallel (results are identical to the serial path)
    pub parallel: bool,
    /// Diagonal penalty added for rigid restraints
    pub penalty: f64,
    /// Reciprocal-condition threshold below which release condensation of
    /// load vectors falls back to a pseudo-inverse
    pub condensation_tol: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            parallel: false,
            penalty: 1e25,
            condensation_tol: 1e-12,
        }
    }
}

impl AnalysisOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable parallel solving of load cases
    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }

    /// Set the restraint penalty value
    pub fn with_penalty(mut self, penalty: f64) -> Self {
        self.penalty = penalty;
        self
    }

    /// Set the condensation tolerance
    pub fn with_condensation_tol(mut self, tol: f64) -> Self {
        self.condensation_tol = tol;
        self
    }
}
