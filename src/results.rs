//! Extraction of nodal deflection results.

use nalgebra::DVector;

use crate::element::DOF_PER_NODE;

/// Transverse deflection sampled at one node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeDeflection {
    /// Distance of the node from the clamped end in metres.
    pub position: f64,
    /// Transverse displacement at the node in metres.
    pub deflection: f64,
}

/// Ordered deflection samples along the beam, one per node.
#[derive(Clone, Debug, PartialEq)]
pub struct DeflectionProfile {
    /// Samples from the clamped end to the free end.
    pub nodes: Vec<NodeDeflection>,
}

impl DeflectionProfile {
    /// Largest downward excursion: the minimum signed deflection.
    ///
    /// Deflection is negative under the downward load, so the extreme value
    /// of the profile is its minimum, not its maximum magnitude of either
    /// sign.
    #[must_use]
    pub fn max_deflection(&self) -> f64 {
        self.nodes
            .iter()
            .map(|node| node.deflection)
            .fold(f64::INFINITY, f64::min)
    }

    /// Deflection at the free end of the beam.
    #[must_use]
    pub fn tip_deflection(&self) -> f64 {
        self.nodes.last().map_or(0.0, |node| node.deflection)
    }

    /// Node positions, convenient for evaluating reference curves.
    #[must_use]
    pub fn positions(&self) -> Vec<f64> {
        self.nodes.iter().map(|node| node.position).collect()
    }
}

/// Map the full displacement vector to `(position, deflection)` samples.
///
/// Node `i` sits at `i·L/N` and its transverse displacement is entry `2i` of
/// the vector — every other entry. Rotation DOFs are not extracted here.
/// Pure, stateless mapping.
#[must_use]
pub fn extract_profile(
    displacements: &DVector<f64>,
    elements: usize,
    length: f64,
) -> DeflectionProfile {
    let spacing = length / elements as f64;
    let nodes = (0..=elements)
        .map(|node| NodeDeflection {
            position: node as f64 * spacing,
            deflection: displacements[node * DOF_PER_NODE],
        })
        .collect();
    DeflectionProfile { nodes }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::DVector;

    use super::*;

    #[test]
    fn extraction_takes_every_other_entry() {
        let displacements = DVector::from_column_slice(&[0.0, 9.0, -1.0, 8.0, -2.0, 7.0]);
        let profile = extract_profile(&displacements, 2, 4.0);

        assert_eq!(profile.nodes.len(), 3);
        assert_relative_eq!(profile.nodes[0].position, 0.0);
        assert_relative_eq!(profile.nodes[1].position, 2.0);
        assert_relative_eq!(profile.nodes[2].position, 4.0);
        assert_relative_eq!(profile.nodes[0].deflection, 0.0);
        assert_relative_eq!(profile.nodes[1].deflection, -1.0);
        assert_relative_eq!(profile.nodes[2].deflection, -2.0);
    }

    #[test]
    fn max_deflection_is_the_minimum_signed_value() {
        let profile = DeflectionProfile {
            nodes: vec![
                NodeDeflection {
                    position: 0.0,
                    deflection: 0.0,
                },
                NodeDeflection {
                    position: 1.0,
                    deflection: -0.5,
                },
                NodeDeflection {
                    position: 2.0,
                    deflection: -2.0,
                },
                NodeDeflection {
                    position: 3.0,
                    deflection: -1.0,
                },
            ],
        };
        assert_relative_eq!(profile.max_deflection(), -2.0);
        assert_relative_eq!(profile.tip_deflection(), -1.0);
    }

    #[test]
    fn positions_follow_the_node_order() {
        let displacements = DVector::zeros(8);
        let profile = extract_profile(&displacements, 3, 9.0);
        assert_eq!(profile.positions(), vec![0.0, 3.0, 6.0, 9.0]);
    }
}
