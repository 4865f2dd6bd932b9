//! Solution of the reduced linear system.

use nalgebra::{DMatrix, DVector};

use crate::errors::AnalysisError;

/// Solve `K_ff · u_f = F_f` for the free-DOF displacements.
///
/// Uses LU factorization with partial pivoting, so the answer is exact up to
/// floating-point solve tolerance.
///
/// # Errors
///
/// Returns [`AnalysisError::SingularStiffness`] when the factorization hits a
/// zero pivot — for instance when no DOFs were fixed and a rigid-body mode is
/// left in the free set. The caller never sees a finite but meaningless
/// vector.
pub fn solve_reduced(
    stiffness: &DMatrix<f64>,
    load: &DVector<f64>,
) -> Result<DVector<f64>, AnalysisError> {
    stiffness
        .clone_owned()
        .lu()
        .solve(load)
        .ok_or(AnalysisError::SingularStiffness)
}

/// Reconstitute the full displacement vector from the free-DOF solution.
///
/// Fixed DOFs keep their prescribed value of exactly zero; solved entries are
/// scattered back to their global indices.
#[must_use]
pub fn expand_displacements(
    dof_count: usize,
    free_dofs: &[usize],
    solved: &DVector<f64>,
) -> DVector<f64> {
    let mut displacements = DVector::zeros(dof_count);
    for (idx, &dof) in free_dofs.iter().enumerate() {
        displacements[dof] = solved[idx];
    }
    displacements
}
