//! Partitioning of degrees of freedom into fixed and free sets.

use nalgebra::{DMatrix, DVector};

/// Fixed DOFs for a cantilever clamped at its left end: the first node's
/// transverse displacement and rotation.
pub const CLAMPED_LEFT_END: [usize; 2] = [0, 1];

/// The global system restricted to the free degrees of freedom.
#[derive(Clone, Debug, PartialEq)]
pub struct ReducedSystem {
    /// Stiffness submatrix over free rows and columns, order preserved.
    pub stiffness: DMatrix<f64>,
    /// Load subvector over the free entries, order preserved.
    pub load: DVector<f64>,
    /// Ascending global indices of the free DOFs.
    pub free_dofs: Vec<usize>,
}

/// Ascending complement of `fixed` within `0..dof_count`.
///
/// Together the two sets are disjoint and cover every DOF index.
#[must_use]
pub fn free_dofs(dof_count: usize, fixed: &[usize]) -> Vec<usize> {
    (0..dof_count).filter(|dof| !fixed.contains(dof)).collect()
}

/// Restrict the global stiffness matrix and load vector to the free DOFs.
///
/// `reduced.stiffness[(i, j)]` equals `stiffness[(free[i], free[j])]` and
/// `reduced.load[i]` equals `load[free[i]]` for the ascending free set.
/// Fixed DOFs are taken to have zero prescribed displacement; prescribing a
/// nonzero support displacement is not supported.
#[must_use]
pub fn reduce_system(
    stiffness: &DMatrix<f64>,
    load: &DVector<f64>,
    fixed: &[usize],
) -> ReducedSystem {
    let free = free_dofs(stiffness.nrows(), fixed);
    let mut reduced_stiffness = DMatrix::zeros(free.len(), free.len());
    let mut reduced_load = DVector::zeros(free.len());
    for (row_idx, &row) in free.iter().enumerate() {
        reduced_load[row_idx] = load[row];
        for (col_idx, &col) in free.iter().enumerate() {
            reduced_stiffness[(row_idx, col_idx)] = stiffness[(row, col)];
        }
    }
    ReducedSystem {
        stiffness: reduced_stiffness,
        load: reduced_load,
        free_dofs: free,
    }
}
