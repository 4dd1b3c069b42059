//! Time marcher: repeated implicit steps from the initial field.

use crate::error::{SolverError, SolverResult};
use crate::grid::{Grid, SchemeCoefficients, initial_field};
use crate::problem::RodProblem;
use crate::profile::Profile;
use crate::sweep::SweepWorkspace;
use rh_core::{Material, Real};

/// Reported after every completed time step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarchProgress {
    pub step: usize,
    pub steps: usize,
    pub sim_time_s: Real,
}

/// March `problem` through all of its time steps.
pub fn march(problem: &RodProblem, material: &Material) -> SolverResult<Profile> {
    march_with_progress(problem, material, None)
}

/// Like [`march`], calling `progress_cb` after every step.
pub fn march_with_progress(
    problem: &RodProblem,
    material: &Material,
    mut progress_cb: Option<&mut dyn FnMut(MarchProgress)>,
) -> SolverResult<Profile> {
    problem.validate()?;

    let grid = Grid::new(problem);
    let steps = problem.step_count();
    let coeffs = SchemeCoefficients::new(material, problem.h, problem.tau);
    tracing::debug!(
        nodes = grid.nodes,
        steps,
        material = material.name,
        "starting time march"
    );

    let mut field = initial_field(grid.nodes, problem.t_left, problem.t_right, problem.t_start);
    let mut next = vec![0.0; grid.nodes];
    let mut workspace = SweepWorkspace::new(grid.nodes);

    for step in 1..=steps {
        workspace.step(&coeffs, problem.t_left, problem.t_right, &field, &mut next);
        std::mem::swap(&mut field, &mut next);
        tracing::trace!(step, "time step complete");

        if let Some(cb) = progress_cb.as_deref_mut() {
            cb(MarchProgress {
                step,
                steps,
                sim_time_s: step as Real * problem.tau,
            });
        }
    }

    if let Some(i) = field.iter().position(|t| !t.is_finite()) {
        return Err(SolverError::Numeric {
            what: format!("non-finite temperature {} at node {}", field[i], i),
        });
    }

    tracing::debug!(nodes = grid.nodes, steps, "time march finished");
    Ok(Profile::from_field(&grid, &field, steps))
}
