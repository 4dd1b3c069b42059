//! Tridiagonal (Thomas) step solver.
//!
//! One call to [`SweepWorkspace::step`] advances the field by one time step:
//! a forward elimination sweep builds the sweep coefficients `alpha`/`beta`,
//! then backward substitution recovers the new field from the right end.

use crate::grid::SchemeCoefficients;
use rh_core::Real;

/// Scratch storage for the sweep coefficients.
///
/// `alpha`/`beta` carry no meaning between steps; the workspace only exists so
/// one allocation can be reused for every step of a march.
#[derive(Clone, Debug)]
pub struct SweepWorkspace {
    alpha: Vec<Real>,
    beta: Vec<Real>,
}

impl SweepWorkspace {
    pub fn new(nodes: usize) -> Self {
        Self {
            alpha: vec![0.0; nodes],
            beta: vec![0.0; nodes],
        }
    }

    pub fn nodes(&self) -> usize {
        self.alpha.len()
    }

    /// Solve one implicit step.
    ///
    /// `prev` is the field at the current time level and is only read;
    /// `next` receives the field at the new level. Both must have the
    /// workspace's length, which must be at least 2.
    pub fn step(
        &mut self,
        coeffs: &SchemeCoefficients,
        t_left: Real,
        t_right: Real,
        prev: &[Real],
        next: &mut [Real],
    ) {
        let n = self.nodes();
        debug_assert!(n >= 2);
        debug_assert_eq!(prev.len(), n);
        debug_assert_eq!(next.len(), n);

        let SchemeCoefficients {
            a,
            b,
            c,
            capacity_rate,
        } = *coeffs;
        let alpha = &mut self.alpha;
        let beta = &mut self.beta;

        // forward
        alpha[1] = 0.0;
        beta[1] = t_left;
        for i in 1..n - 1 {
            let f = -capacity_rate * prev[i];
            let den = b - c * alpha[i];
            alpha[i + 1] = a / den;
            beta[i + 1] = (c * beta[i] - f) / den;
        }

        // backward
        next[n - 1] = t_right;
        for i in (0..n - 1).rev() {
            next[i] = alpha[i + 1] * next[i + 1] + beta[i + 1];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rh_core::Material;

    #[test]
    fn three_node_step_matches_hand_solution() {
        let coeffs = SchemeCoefficients::new(&Material::steel(), 0.5, 0.1);
        let prev = [0.0, 50.0, 100.0];
        let mut next = [0.0; 3];

        SweepWorkspace::new(3).step(&coeffs, 0.0, 100.0, &prev, &mut next);

        let expected = (coeffs.a * 0.0 + coeffs.c * 100.0 + coeffs.capacity_rate * 50.0) / coeffs.b;
        assert!((next[1] - expected).abs() < 1e-12);
        assert!((next[1] - 50.0).abs() < 1e-12);
        assert_eq!(next[0], 0.0);
        assert_eq!(next[2], 100.0);
    }

    #[test]
    fn asymmetric_three_node_step_moves_the_interior() {
        let coeffs = SchemeCoefficients::new(&Material::steel(), 0.5, 0.1);
        let prev = [0.0, 20.0, 100.0];
        let mut next = [0.0; 3];

        SweepWorkspace::new(3).step(&coeffs, 0.0, 100.0, &prev, &mut next);

        let expected = (coeffs.a * 0.0 + coeffs.c * 100.0 + coeffs.capacity_rate * 20.0) / coeffs.b;
        assert!((next[1] - expected).abs() < 1e-12);
        assert!(next[1] - 20.0 > 1e-4, "interior did not move: {}", next[1]);
        assert_eq!(next[0], 0.0);
        assert_eq!(next[2], 100.0);
    }

    #[test]
    fn two_node_step_only_sets_boundaries() {
        let coeffs = SchemeCoefficients::new(&Material::steel(), 0.1, 1.0);
        let mut next = [f64::NAN; 2];
        SweepWorkspace::new(2).step(&coeffs, -5.0, 7.0, &[-5.0, 7.0], &mut next);
        assert_eq!(next, [-5.0, 7.0]);
    }

    #[test]
    fn stale_workspace_does_not_leak_between_steps() {
        let coeffs = SchemeCoefficients::new(&Material::steel(), 0.01, 0.5);
        let prev = [10.0, 40.0, 40.0, 40.0, 20.0];

        let mut fresh = [0.0; 5];
        SweepWorkspace::new(5).step(&coeffs, 10.0, 20.0, &prev, &mut fresh);

        let mut reused = SweepWorkspace::new(5);
        let mut scratch = [0.0; 5];
        reused.step(&coeffs, -300.0, 900.0, &[1e3; 5], &mut scratch);
        let mut again = [0.0; 5];
        reused.step(&coeffs, 10.0, 20.0, &prev, &mut again);

        assert_eq!(fresh, again);
    }
}
