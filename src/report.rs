use beamflex::BeamSolution;
use std::fmt::Write;

/// Render a textual summary of the cantilever bending analysis.
///
/// The report only formats numbers the solver already produced; no physics
/// is recomputed here. Scientific notation mirrors what engineers expect
/// from hand calculations, and the two closing lines reproduce the legacy
/// console output so results stay comparable across versions.
#[must_use]
pub fn render_summary(solution: &BeamSolution) -> String {
    let mut output = String::new();

    let span = solution
        .deflected
        .nodes
        .last()
        .map_or(0.0, |node| node.position);
    writeln!(
        &mut output,
        "Cantilever bending analysis ({} nodes along a {span:.1} m span)",
        solution.deflected.nodes.len()
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Tip deflection: {:+.4e} m",
        solution.deflected.tip_deflection()
    )
    .expect("writing to string cannot fail");

    // The two summary lines the downstream tooling greps for.
    writeln!(
        &mut output,
        "Theoretical Max Displacement: {:.4e} m",
        solution.theoretical_max
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Maximum FEM Displacement: {:.4e} m",
        solution.fem_max
    )
    .expect("writing to string cannot fail");

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use beamflex::{DeflectionProfile, NodeDeflection};

    fn sample_solution() -> BeamSolution {
        let initial = DeflectionProfile {
            nodes: vec![
                NodeDeflection {
                    position: 0.0,
                    deflection: 0.0,
                },
                NodeDeflection {
                    position: 10.0,
                    deflection: 0.0,
                },
            ],
        };
        let deflected = DeflectionProfile {
            nodes: vec![
                NodeDeflection {
                    position: 0.0,
                    deflection: 0.0,
                },
                NodeDeflection {
                    position: 10.0,
                    deflection: -23.809_523_809_523_81,
                },
            ],
        };
        BeamSolution {
            initial,
            deflected,
            theoretical_max: 23.809_523_809_523_81,
            fem_max: -23.809_523_809_523_81,
        }
    }

    #[test]
    fn formats_the_two_summary_lines() {
        let report = render_summary(&sample_solution());
        assert!(report.contains("Theoretical Max Displacement: 2.3810e1 m"));
        assert!(report.contains("Maximum FEM Displacement: -2.3810e1 m"));
    }

    #[test]
    fn mentions_the_span_and_node_count() {
        let report = render_summary(&sample_solution());
        assert!(report.contains("2 nodes along a 10.0 m span"));
    }
}
