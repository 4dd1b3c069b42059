//! Implicit finite-difference solver for transient conduction in a 1D rod.
//!
//! The rod spans `[0, L]` between two fixed-temperature ends. Each time step
//! solves the backward Euler system with a tridiagonal (Thomas) elimination:
//! - `grid`: node count, scheme coefficients and initial field
//! - `sweep`: one forward/backward sweep
//! - `march`: repeated sweeps over all time steps
//! - `profile`: structured final `(x, T)` result

pub mod error;
pub mod grid;
pub mod march;
pub mod problem;
pub mod profile;
pub mod sweep;

pub use error::{SolverError, SolverResult};
pub use grid::{Grid, SchemeCoefficients, initial_field};
pub use march::{MarchProgress, march, march_with_progress};
pub use problem::{MAX_NODES, RodProblem};
pub use profile::{Profile, ProfilePoint};
pub use sweep::SweepWorkspace;

use rh_core::Material;

/// Run the full time march for `problem` and return the final profile.
pub fn solve(problem: &RodProblem) -> SolverResult<Profile> {
    march(problem, &Material::steel())
}

/// Run the full time march and write `(x_i, T_i)` pairs interleaved into
/// `result`, which must hold at least `problem.output_len()` values.
///
/// Nothing is written if the parameters or the buffer are rejected.
pub fn calculate(problem: &RodProblem, result: &mut [f64]) -> SolverResult<()> {
    problem.validate()?;
    let required = problem.output_len();
    if result.len() < required {
        return Err(SolverError::OutputBuffer {
            required,
            len: result.len(),
        });
    }
    solve(problem)?.write_interleaved(result)
}
