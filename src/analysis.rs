//! End-to-end cantilever analysis pipeline.

use nalgebra::DVector;

use crate::assembly::{assemble_load_vector, assemble_stiffness_matrix};
use crate::boundary::{reduce_system, CLAMPED_LEFT_END};
use crate::config::BeamConfig;
use crate::errors::AnalysisError;
use crate::reference::max_tip_deflection;
use crate::results::{extract_profile, DeflectionProfile};
use crate::solver::{expand_displacements, solve_reduced};

/// Structured output handed to the presentation layer.
///
/// Carries everything a report or plot needs; consumers recompute no
/// physics.
#[derive(Clone, Debug, PartialEq)]
pub struct BeamSolution {
    /// Undeformed profile before the load is applied (all zeros).
    pub initial: DeflectionProfile,
    /// Solved profile under the end load.
    pub deflected: DeflectionProfile,
    /// Closed-form maximum tip deflection magnitude, `q·L³/(3·E·I)`.
    pub theoretical_max: f64,
    /// Extreme finite-element deflection: the minimum signed value of the
    /// solved profile.
    pub fem_max: f64,
}

/// Run the fixed pipeline: assemble → reduce → solve → extract → compare.
///
/// Every entity is rebuilt from `config` on each call; nothing persists
/// between runs. The left end is clamped ([`CLAMPED_LEFT_END`]) and the
/// load acts at the free end, matching the cantilever model this crate
/// implements.
///
/// # Errors
///
/// Propagates [`BeamConfig::validate`] rejections and
/// [`AnalysisError::SingularStiffness`] from the solve. Any failure aborts
/// the run with no partial results.
///
/// # Examples
/// ```
/// use beamflex::{analyze, BeamConfig};
///
/// let solution = analyze(&BeamConfig::default()).expect("reference scenario solves");
/// assert!(solution.fem_max < 0.0);
/// ```
pub fn analyze(config: &BeamConfig) -> Result<BeamSolution, AnalysisError> {
    config.validate()?;

    let stiffness = assemble_stiffness_matrix(config)?;
    let load = assemble_load_vector(config);
    let reduced = reduce_system(&stiffness, &load, &CLAMPED_LEFT_END);
    let solved = solve_reduced(&reduced.stiffness, &reduced.load)?;
    let displacements = expand_displacements(config.dof_count(), &reduced.free_dofs, &solved);

    let initial = extract_profile(
        &DVector::zeros(config.dof_count()),
        config.elements,
        config.length,
    );
    let deflected = extract_profile(&displacements, config.elements, config.length);
    let fem_max = deflected.max_deflection();
    let theoretical_max = max_tip_deflection(
        config.load,
        config.length,
        config.elastic_modulus,
        config.second_moment_of_area(),
    );

    Ok(BeamSolution {
        initial,
        deflected,
        theoretical_max,
        fem_max,
    })
}
