#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod analysis;
pub mod assembly;
pub mod boundary;
pub mod config;
pub mod element;
pub mod errors;
pub mod reference;
pub mod results;
pub mod solver;

pub use analysis::{analyze, BeamSolution};
pub use config::BeamConfig;
pub use element::{element_stiffness, DOF_PER_ELEMENT, DOF_PER_NODE};
pub use errors::{AnalysisError, CrossSectionError, MeshError};
pub use results::{DeflectionProfile, NodeDeflection};
