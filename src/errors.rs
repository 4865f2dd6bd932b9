//! Error types produced while configuring or analysing beams.

use thiserror::Error;

/// Error returned when a beam analysis fails.
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// Returned when the cross-section dimensions are not physically meaningful.
    #[error("invalid cross-section: {0}")]
    InvalidCrossSection(#[from] CrossSectionError),
    /// Returned when the mesh description cannot produce a solvable model.
    #[error("invalid mesh: {0}")]
    InvalidMesh(#[from] MeshError),
    /// Returned when the elastic modulus is zero or negative.
    #[error("elastic modulus must be positive (received {elastic_modulus})")]
    NonPositiveElasticModulus {
        /// Rejected elastic modulus in pascals.
        elastic_modulus: f64,
    },
    /// Returned when the reduced stiffness matrix cannot be factorized.
    #[error("stiffness matrix is singular; check supports and connectivity")]
    SingularStiffness,
}

/// Error returned when the cross-section dimensions are rejected.
///
/// The variants describe the reason the supplied value is rejected so callers
/// can present actionable feedback to users. A non-positive dimension would
/// make the second moment of area meaningless, so these are caught before any
/// stiffness is computed.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum CrossSectionError {
    /// Returned when the section width is zero or negative.
    #[error("width must be positive (received {width})")]
    NonPositiveWidth {
        /// Rejected section width in metres.
        width: f64,
    },
    /// Returned when the section height is zero or negative.
    #[error("height must be positive (received {height})")]
    NonPositiveHeight {
        /// Rejected section height in metres.
        height: f64,
    },
}

/// Error returned when the mesh description is rejected.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum MeshError {
    /// Returned when the beam is meshed with zero elements.
    #[error("at least one element is required")]
    NoElements,
    /// Returned when the beam length is zero or negative, which would give
    /// every element a non-positive length.
    #[error("beam length must be positive (received {length})")]
    NonPositiveLength {
        /// Rejected beam length in metres.
        length: f64,
    },
}
