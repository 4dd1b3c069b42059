//! Rod problem definition: boundary/initial temperatures and discretization.

use crate::error::{SolverError, SolverResult};
use rh_core::{Real, ensure_finite, ensure_positive};

/// Inputs of one rod calculation.
///
/// Temperatures share one unit (the caller's); lengths are metres and times
/// seconds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RodProblem {
    /// Fixed temperature at x = 0
    pub t_left: Real,
    /// Fixed temperature at x = L
    pub t_right: Real,
    /// Initial temperature of the interior nodes
    pub t_start: Real,
    /// Rod length L
    pub length: Real,
    /// Spatial step h
    pub h: Real,
    /// Time step tau
    pub tau: Real,
    /// Simulated time
    pub total_time: Real,
}

impl Default for RodProblem {
    fn default() -> Self {
        Self {
            t_left: -100.0,
            t_right: 100.0,
            t_start: 20.0,
            length: 0.1,
            h: 0.01,
            tau: 0.01,
            total_time: 2.0,
        }
    }
}

/// Largest node count whose interleaved `2N` output still fits in one allocation.
pub const MAX_NODES: usize = isize::MAX as usize / std::mem::size_of::<f64>() / 2;

impl RodProblem {
    /// `N = floor(L/h) + 1`, or 0 when `L/h` gives no representable grid.
    pub fn node_count(&self) -> usize {
        self.checked_node_count().unwrap_or(0)
    }

    fn checked_node_count(&self) -> Option<usize> {
        let ratio = self.length / self.h;
        if !ratio.is_finite() || ratio < 0.0 || ratio >= MAX_NODES as Real {
            return None;
        }
        (ratio as usize)
            .checked_add(1)
            .filter(|&n| n.checked_mul(2).is_some() && n <= MAX_NODES)
    }

    /// `floor(total_time/tau)`; a trailing partial step is dropped.
    pub fn step_count(&self) -> usize {
        (self.total_time / self.tau) as usize
    }

    /// Length of the interleaved `(x, T)` output buffer, `2N`.
    pub fn output_len(&self) -> usize {
        2 * self.node_count()
    }

    /// Reject inputs the scheme cannot handle.
    pub fn validate(&self) -> SolverResult<()> {
        ensure_finite(self.t_left, "t_left")?;
        ensure_finite(self.t_right, "t_right")?;
        ensure_finite(self.t_start, "t_start")?;
        ensure_positive(self.length, "length")?;
        ensure_positive(self.h, "h")?;
        ensure_positive(self.tau, "tau")?;
        ensure_finite(self.total_time, "total_time")?;

        if self.total_time < 0.0 {
            return Err(SolverError::ProblemSetup {
                what: format!("total_time must be non-negative, got {}", self.total_time),
            });
        }
        let Some(nodes) = self.checked_node_count() else {
            return Err(SolverError::ProblemSetup {
                what: format!(
                    "grid too large: length / h = {} exceeds {} nodes",
                    self.length / self.h,
                    MAX_NODES
                ),
            });
        };
        if nodes < 2 {
            return Err(SolverError::ProblemSetup {
                what: format!(
                    "grid needs at least two nodes: h = {} exceeds length = {}",
                    self.h, self.length
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rh_core::RhError;

    #[test]
    fn derived_counts_truncate() {
        let problem = RodProblem {
            length: 1.0,
            h: 0.3,
            tau: 0.4,
            total_time: 1.0,
            ..RodProblem::default()
        };
        assert_eq!(problem.node_count(), 4);
        assert_eq!(problem.step_count(), 2);
        assert_eq!(problem.output_len(), 8);
    }

    #[test]
    fn defaults_are_valid() {
        let problem = RodProblem::default();
        problem.validate().unwrap();
        assert_eq!(problem.node_count(), 11);
        assert_eq!(problem.step_count(), 200);
    }

    #[test]
    fn rejects_non_positive_steps() {
        for (h, tau) in [(0.0, 0.1), (-0.1, 0.1), (0.1, 0.0), (0.1, -1.0)] {
            let problem = RodProblem {
                h,
                tau,
                ..RodProblem::default()
            };
            assert!(matches!(
                problem.validate(),
                Err(SolverError::Core(RhError::InvalidArg { .. }))
            ));
        }
    }

    #[test]
    fn rejects_negative_time_and_single_node_grid() {
        let negative_time = RodProblem {
            total_time: -1.0,
            ..RodProblem::default()
        };
        assert!(matches!(
            negative_time.validate(),
            Err(SolverError::ProblemSetup { .. })
        ));

        let single_node = RodProblem {
            length: 0.1,
            h: 0.2,
            ..RodProblem::default()
        };
        assert_eq!(single_node.node_count(), 1);
        assert!(matches!(
            single_node.validate(),
            Err(SolverError::ProblemSetup { .. })
        ));
    }

    #[test]
    fn rejects_grid_too_large_to_allocate() {
        for h in [1e-300, 1e-18, f64::MIN_POSITIVE] {
            let problem = RodProblem {
                length: 1.0,
                h,
                ..RodProblem::default()
            };
            assert!(
                matches!(problem.validate(), Err(SolverError::ProblemSetup { .. })),
                "h = {h} accepted"
            );
            assert_eq!(problem.node_count(), 0);
            assert_eq!(problem.output_len(), 0);
        }

        let largest_ok = RodProblem {
            length: 1.0,
            h: 1e-6,
            ..RodProblem::default()
        };
        largest_ok.validate().unwrap();
        assert_eq!(largest_ok.output_len(), 2 * largest_ok.node_count());
    }

    #[test]
    fn rejects_non_finite_temperatures() {
        let problem = RodProblem {
            t_start: f64::NAN,
            ..RodProblem::default()
        };
        assert!(matches!(
            problem.validate(),
            Err(SolverError::Core(RhError::NonFinite { what: "t_start", .. }))
        ));
    }
}
