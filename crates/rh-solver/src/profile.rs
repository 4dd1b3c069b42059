//! Final temperature profile.

use crate::error::{SolverError, SolverResult};
use crate::grid::Grid;
use rh_core::Real;

/// Temperature at one grid node.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfilePoint {
    pub x: Real,
    pub temperature: Real,
}

/// Temperature along the rod after `steps` time steps, in node order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    pub points: Vec<ProfilePoint>,
    pub steps: usize,
}

impl Profile {
    pub fn from_field(grid: &Grid, field: &[Real], steps: usize) -> Self {
        let points = field
            .iter()
            .enumerate()
            .map(|(i, &temperature)| ProfilePoint {
                x: grid.position(i),
                temperature,
            })
            .collect();
        Self { points, steps }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = Real> + '_ {
        self.points.iter().map(|p| p.x)
    }

    pub fn temperatures(&self) -> impl Iterator<Item = Real> + '_ {
        self.points.iter().map(|p| p.temperature)
    }

    /// Node `N / 2`.
    pub fn center(&self) -> Option<ProfilePoint> {
        self.points.get(self.points.len() / 2).copied()
    }

    /// Write `(x_0, T_0, x_1, T_1, ...)` into the first `2N` slots of `out`.
    ///
    /// Slots past `2N` are left untouched. Nothing is written if `out` is
    /// too short.
    pub fn write_interleaved(&self, out: &mut [f64]) -> SolverResult<()> {
        let required = 2 * self.points.len();
        if out.len() < required {
            return Err(SolverError::OutputBuffer {
                required,
                len: out.len(),
            });
        }
        for (pair, point) in out.chunks_exact_mut(2).zip(&self.points) {
            pair[0] = point.x;
            pair[1] = point.temperature;
        }
        Ok(())
    }

    /// Largest absolute difference from the straight line joining the two
    /// boundary temperatures, which is the steady state of the scheme.
    pub fn steady_state_deviation(&self) -> Real {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return 0.0;
        };
        let span = last.x - first.x;
        if span <= 0.0 {
            return 0.0;
        }
        let slope = (last.temperature - first.temperature) / span;
        self.points
            .iter()
            .map(|p| (p.temperature - (first.temperature + slope * (p.x - first.x))).abs())
            .fold(0.0, Real::max)
    }
}
