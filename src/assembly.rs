//! Assembly of the global stiffness matrix and load vector.
//!
//! Storage is a dense, preallocated matrix. For the element counts this crate
//! targets the `2(N+1)` square matrix is tiny and the assembly loop stays
//! O(N) over it; a banded or sparse layout would change nothing observable
//! and remains an option for much finer meshes.

use nalgebra::{DMatrix, DVector};

use crate::config::BeamConfig;
use crate::element::{element_stiffness, DOF_PER_NODE};
use crate::errors::AnalysisError;

/// Global DOF indices coupled by element `element`.
///
/// Local DOFs `{0, 1, 2, 3}` map to `{2i, 2i+1, 2(i+1), 2(i+1)+1}`: the
/// displacement and rotation of the element's left node followed by those of
/// its right node. Adjacent elements share the middle pair, which is how the
/// assembled matrix ties the mesh together.
#[must_use]
pub fn element_dof_map(element: usize) -> [usize; 4] {
    let left = element * DOF_PER_NODE;
    let right = (element + 1) * DOF_PER_NODE;
    [left, left + 1, right, right + 1]
}

/// Assemble the global stiffness matrix for the configured mesh.
///
/// Each element's 4×4 contribution is added, never assigned, at the 16
/// positions given by the cross-product of its DOF map. DOFs at a node shared
/// by two elements therefore accumulate entries from both neighbours, which
/// enforces continuity of displacement and rotation across element
/// boundaries. The result is symmetric because every local matrix is
/// symmetric and placement is symmetric in row and column.
///
/// # Errors
///
/// Returns the [`BeamConfig::validate`] error when the configuration is
/// rejected; nothing is allocated in that case.
pub fn assemble_stiffness_matrix(config: &BeamConfig) -> Result<DMatrix<f64>, AnalysisError> {
    config.validate()?;

    let dof_count = config.dof_count();
    let mut matrix = DMatrix::zeros(dof_count, dof_count);

    for element in 0..config.elements {
        let local = element_stiffness(
            config.elastic_modulus,
            config.second_moment_of_area(),
            config.element_length(),
        );
        let dof_map = element_dof_map(element);
        for (row_local, global_row) in dof_map.iter().enumerate() {
            for (col_local, global_col) in dof_map.iter().enumerate() {
                matrix[(*global_row, *global_col)] += local[(row_local, col_local)];
            }
        }
    }

    Ok(matrix)
}

/// Assemble the global load vector: a single concentrated load at the free
/// end.
///
/// The load acts downward, so it enters the vector with a negative sign at
/// the translation DOF of the last node, index `2N`. Every other entry is
/// zero; in particular no moment is applied anywhere.
#[must_use]
pub fn assemble_load_vector(config: &BeamConfig) -> DVector<f64> {
    let mut load = DVector::zeros(config.dof_count());
    load[config.elements * DOF_PER_NODE] = -config.load;
    load
}
