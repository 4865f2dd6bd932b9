//! Immutable configuration for the cantilever bending analysis.

use serde::{Deserialize, Serialize};

use crate::element::DOF_PER_NODE;
use crate::errors::{AnalysisError, CrossSectionError, MeshError};

/// Physical and discretization parameters for one analysis run.
///
/// The defaults describe the reference scenario: a 10 m steel strip with a
/// 100 mm × 20 mm rectangular section, loaded by 1 kN at the free end and
/// meshed with 20 elements. Every run is computed fresh from one of these
/// values; nothing is mutated between runs.
///
/// Unknown fields in a JSON configuration are rejected; missing fields fall
/// back to the defaults.
///
/// # Examples
/// ```
/// use beamflex::BeamConfig;
///
/// let config: BeamConfig = serde_json::from_str(r#"{ "elements": 40 }"#).unwrap();
/// assert_eq!(config.elements, 40);
/// assert_eq!(config.length, 10.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BeamConfig {
    /// Elastic modulus of the material in pascals.
    pub elastic_modulus: f64,
    /// Cross-section width in metres.
    pub width: f64,
    /// Cross-section height in metres.
    pub height: f64,
    /// Beam length in metres.
    pub length: f64,
    /// Magnitude of the downward load at the free end in newtons.
    pub load: f64,
    /// Number of equal-length elements along the beam.
    pub elements: usize,
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            elastic_modulus: 210.0e9,
            width: 0.1,
            height: 0.02,
            length: 10.0,
            load: 1_000.0,
            elements: 20,
        }
    }
}

impl BeamConfig {
    /// Second moment of area of the rectangular section, `width·height³/12`.
    ///
    /// Derived on demand rather than stored, so it can never drift from the
    /// section dimensions.
    #[must_use]
    pub fn second_moment_of_area(&self) -> f64 {
        self.width * self.height.powi(3) / 12.0
    }

    /// Length of a single element in metres.
    #[must_use]
    pub fn element_length(&self) -> f64 {
        self.length / self.elements as f64
    }

    /// Number of nodes in the mesh.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.elements + 1
    }

    /// Total number of degrees of freedom carried by the mesh.
    #[must_use]
    pub fn dof_count(&self) -> usize {
        self.node_count() * DOF_PER_NODE
    }

    /// Check every parameter before any matrix is built.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidCrossSection`] for a non-positive
    /// width or height, [`AnalysisError::NonPositiveElasticModulus`] for a
    /// non-positive modulus and [`AnalysisError::InvalidMesh`] when the mesh
    /// has no elements or a non-positive length.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.width <= 0.0 {
            return Err(CrossSectionError::NonPositiveWidth { width: self.width }.into());
        }
        if self.height <= 0.0 {
            return Err(CrossSectionError::NonPositiveHeight {
                height: self.height,
            }
            .into());
        }
        if self.elastic_modulus <= 0.0 {
            return Err(AnalysisError::NonPositiveElasticModulus {
                elastic_modulus: self.elastic_modulus,
            });
        }
        if self.elements == 0 {
            return Err(MeshError::NoElements.into());
        }
        if self.length <= 0.0 {
            return Err(MeshError::NonPositiveLength {
                length: self.length,
            }
            .into());
        }
        Ok(())
    }
}
