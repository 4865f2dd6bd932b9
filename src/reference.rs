//! Closed-form reference values for the end-loaded cantilever.
//!
//! Everything here is computed from the physical parameters alone,
//! independently of the finite-element pipeline, so it can serve as a
//! validation yardstick for the solved profile.

/// Maximum tip deflection magnitude, `q·L³/(3·E·I)`.
///
/// Classical result for a cantilever of length `length` with a concentrated
/// load `load` at the free end. Returned as a positive magnitude; the solver
/// reports the matching value with a negative sign under the downward-load
/// convention.
#[must_use]
pub fn max_tip_deflection(
    load: f64,
    length: f64,
    elastic_modulus: f64,
    second_moment: f64,
) -> f64 {
    load * length.powi(3) / (3.0 * elastic_modulus * second_moment)
}

/// First-order comparison curve, `y(x) = q·(L−x)/(E·I)`.
///
/// A coarse linear profile carried over from the legacy analysis for
/// comparison with historical output. It is *not* the cubic Euler-Bernoulli
/// deflection curve and is kept with its original formula on purpose; use
/// [`exact_profile`] when the true curve is wanted.
#[must_use]
pub fn first_order_profile(
    positions: &[f64],
    load: f64,
    length: f64,
    elastic_modulus: f64,
    second_moment: f64,
) -> Vec<f64> {
    positions
        .iter()
        .map(|&x| load * (length - x) / (elastic_modulus * second_moment))
        .collect()
}

/// Exact Euler-Bernoulli deflection curve, `w(x) = −q·x²·(3L−x)/(6·E·I)`.
///
/// Signed with the solver's convention: negative under the downward load,
/// reaching `−q·L³/(3·E·I)` at the tip.
#[must_use]
pub fn exact_profile(
    positions: &[f64],
    load: f64,
    length: f64,
    elastic_modulus: f64,
    second_moment: f64,
) -> Vec<f64> {
    positions
        .iter()
        .map(|&x| -load * x * x * (3.0 * length - x) / (6.0 * elastic_modulus * second_moment))
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const ELASTIC_MODULUS: f64 = 210.0e9;
    const SECOND_MOMENT: f64 = 0.1 * 0.02 * 0.02 * 0.02 / 12.0;
    const LENGTH: f64 = 10.0;
    const LOAD: f64 = 1_000.0;

    #[test]
    fn tip_deflection_matches_the_reference_scenario() {
        let deflection = max_tip_deflection(LOAD, LENGTH, ELASTIC_MODULUS, SECOND_MOMENT);
        assert_relative_eq!(deflection, 23.809_523_809_523_81, max_relative = 1.0e-12);
    }

    #[test]
    fn first_order_curve_keeps_its_legacy_endpoints() {
        let values = first_order_profile(
            &[0.0, LENGTH],
            LOAD,
            LENGTH,
            ELASTIC_MODULUS,
            SECOND_MOMENT,
        );
        assert_relative_eq!(
            values[0],
            LOAD * LENGTH / (ELASTIC_MODULUS * SECOND_MOMENT),
            max_relative = 1.0e-12
        );
        assert_relative_eq!(values[1], 0.0);
    }

    #[test]
    fn exact_curve_is_zero_at_the_clamp_and_extreme_at_the_tip() {
        let values = exact_profile(
            &[0.0, LENGTH],
            LOAD,
            LENGTH,
            ELASTIC_MODULUS,
            SECOND_MOMENT,
        );
        assert_relative_eq!(values[0], 0.0);
        assert_relative_eq!(
            values[1],
            -max_tip_deflection(LOAD, LENGTH, ELASTIC_MODULUS, SECOND_MOMENT),
            max_relative = 1.0e-12
        );
    }
}
