//! Euler-Bernoulli beam element stiffness.

use nalgebra::SMatrix;

/// Degrees of freedom carried by each node: transverse displacement and
/// rotation, in that order.
pub const DOF_PER_NODE: usize = 2;

/// Degrees of freedom coupled by one two-node element.
pub const DOF_PER_ELEMENT: usize = 2 * DOF_PER_NODE;

/// Local stiffness matrix for one beam element of length `length`.
///
/// Relates the displacement-rotation pairs at the element's two nodes to the
/// nodal shear forces and moments under small-deflection bending theory:
///
/// ```text
/// k = (E·I/h³) · | 12    6h   -12    6h  |
///                | 6h   4h²   -6h   2h²  |
///                | -12  -6h    12   -6h  |
///                | 6h   2h²   -6h   4h²  |
/// ```
///
/// Pure function of its three scalar inputs. Callers pass a uniform length
/// for an equal-spacing mesh, but nothing here assumes uniformity, so a
/// graded mesh can reuse it with per-element lengths. Lengths are validated
/// upstream ([`crate::BeamConfig::validate`]); the formula is total over
/// positive lengths.
#[must_use]
pub fn element_stiffness(
    elastic_modulus: f64,
    second_moment: f64,
    length: f64,
) -> SMatrix<f64, 4, 4> {
    let h = length;
    let ei_over_h3 = elastic_modulus * second_moment / h.powi(3);

    ei_over_h3
        * SMatrix::<f64, 4, 4>::from_row_slice(&[
            12.0,
            6.0 * h,
            -12.0,
            6.0 * h,
            6.0 * h,
            4.0 * h * h,
            -6.0 * h,
            2.0 * h * h,
            -12.0,
            -6.0 * h,
            12.0,
            -6.0 * h,
            6.0 * h,
            2.0 * h * h,
            -6.0 * h,
            4.0 * h * h,
        ])
}
