//! Grid and system initialization.

use crate::problem::RodProblem;
use rh_core::{Material, Real};

/// Uniform grid of `nodes` points spaced by `h`, starting at x = 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    pub nodes: usize,
    pub h: Real,
}

impl Grid {
    pub fn new(problem: &RodProblem) -> Self {
        Self {
            nodes: problem.node_count(),
            h: problem.h,
        }
    }

    /// Position of node `i`, computed as `i * h` so it never drifts.
    #[inline]
    pub fn position(&self, i: usize) -> Real {
        i as Real * self.h
    }
}

/// Time-invariant coefficients of the implicit scheme
/// `A*T'[i-1] - B*T'[i] + C*T'[i+1] = -(rho*c/tau)*T[i]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SchemeCoefficients {
    /// lambda/h^2, sub-diagonal
    pub a: Real,
    /// 2*lambda/h^2 + rho*c/tau, diagonal
    pub b: Real,
    /// lambda/h^2, super-diagonal
    pub c: Real,
    /// rho*c/tau, weight of the previous field in the right-hand side
    pub capacity_rate: Real,
}

impl SchemeCoefficients {
    pub fn new(material: &Material, h: Real, tau: Real) -> Self {
        let conduction = material.lambda() / (h * h);
        let capacity_rate = material.rho_c() / tau;
        Self {
            a: conduction,
            b: 2.0 * conduction + capacity_rate,
            c: conduction,
            capacity_rate,
        }
    }
}

/// Field of `nodes` values at `t_start` with both ends pinned to the
/// boundary temperatures. Requires `nodes >= 2`.
pub fn initial_field(nodes: usize, t_left: Real, t_right: Real, t_start: Real) -> Vec<Real> {
    debug_assert!(nodes >= 2, "grid needs at least two nodes");
    let mut field = vec![t_start; nodes];
    field[0] = t_left;
    field[nodes - 1] = t_right;
    field
}
