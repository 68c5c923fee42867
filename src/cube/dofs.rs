use super::External;
use serde::{Deserialize, Serialize};

/// Holds the indices of the prescribed (active) external quantities
///
/// Each prescribed entry of [External] gives one equilibrium equation. The indices
/// are collected in row-major order (first `i`, then `j`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DofSets {
    /// Indices of the prescribed normal forces
    pub force_normal: Vec<usize>,

    /// Indices (i, j) of the prescribed shear forces
    pub force_shear: Vec<(usize, usize)>,

    /// Indices of the prescribed normal tractions
    pub traction_normal: Vec<usize>,

    /// Indices (i, j) of the prescribed shear tractions
    pub traction_shear: Vec<(usize, usize)>,

    /// Indices of the prescribed gridvector lengths
    pub gridvec_length: Vec<usize>,

    /// Indices (i, j) of the prescribed gridvector components
    pub gridvec_components: Vec<(usize, usize)>,

    /// Indices of the active symmetry conditions
    pub symmetry: Vec<usize>,
}

fn active_vector(values: &[Option<f64>; 3]) -> Vec<usize> {
    (0..3).filter(|i| values[*i].is_some()).collect()
}

fn active_matrix(values: &[[Option<f64>; 3]; 3]) -> Vec<(usize, usize)> {
    let mut indices = Vec::new();
    for i in 0..3 {
        for j in 0..3 {
            if values[i][j].is_some() {
                indices.push((i, j));
            }
        }
    }
    indices
}

impl DofSets {
    /// Allocates a new instance by scanning the external quantities
    pub fn new(external: &External) -> Self {
        DofSets {
            force_normal: active_vector(&external.force.normal),
            force_shear: active_matrix(&external.force.shear),
            traction_normal: active_vector(&external.traction.normal),
            traction_shear: active_matrix(&external.traction.shear),
            gridvec_length: active_vector(&external.gridvec.length),
            gridvec_components: active_matrix(&external.gridvec.components),
            symmetry: (0..3).filter(|k| external.gridvec.symmetry[*k]).collect(),
        }
    }

    /// Returns the total number of equations
    pub fn n_equation(&self) -> usize {
        self.force_normal.len()
            + self.force_shear.len()
            + self.traction_normal.len()
            + self.traction_shear.len()
            + self.gridvec_length.len()
            + self.gridvec_components.len()
            + self.symmetry.len()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
