//! C ABI for the rod solver.
//!
//! Exports `calculate` with the flat argument list desktop front ends load
//! through `ctypes`/`dlopen`, plus `calculate_checked`, which also receives the
//! buffer length. Both return a status code; nothing is written on error.

use std::os::raw::c_int;

use rh_solver::{RodProblem, SolverError};

pub const RH_OK: c_int = 0;
pub const RH_INVALID_PARAMETER: c_int = -1;
pub const RH_NULL_POINTER: c_int = -2;
pub const RH_BUFFER_TOO_SMALL: c_int = -3;
pub const RH_NUMERIC: c_int = -4;

fn status_of(err: &SolverError) -> c_int {
    match err {
        SolverError::ProblemSetup { .. } | SolverError::Core(_) => RH_INVALID_PARAMETER,
        SolverError::OutputBuffer { .. } => RH_BUFFER_TOO_SMALL,
        SolverError::Numeric { .. } => RH_NUMERIC,
    }
}

/// Validate, march, and write into `result[..result_len]`.
///
/// # Safety
/// `result` must be null or valid for writes of `result_len` `f64`s.
unsafe fn run(problem: &RodProblem, result: *mut f64, result_len: usize) -> c_int {
    if result.is_null() {
        return RH_NULL_POINTER;
    }
    if let Err(err) = problem.validate() {
        tracing::debug!(%err, "rejected rod problem");
        return status_of(&err);
    }
    if result_len < problem.output_len() {
        return RH_BUFFER_TOO_SMALL;
    }

    // SAFETY: non-null and valid for `result_len` writes per the caller contract.
    let out = unsafe { std::slice::from_raw_parts_mut(result, result_len) };
    match rh_solver::calculate(problem, out) {
        Ok(()) => RH_OK,
        Err(err) => {
            tracing::debug!(%err, "rod calculation failed");
            status_of(&err)
        }
    }
}

/// Compute the final profile and write `2N` interleaved `(x, T)` values.
///
/// `N = floor(L/h) + 1`; the caller sizes `result` from that formula.
///
/// # Safety
/// `result` must be null or valid for writes of `2N` `f64`s.
#[allow(clippy::too_many_arguments)]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn calculate(
    t_left: f64,
    t_right: f64,
    t_start: f64,
    length: f64,
    h: f64,
    tau: f64,
    total_time: f64,
    result: *mut f64,
) -> c_int {
    let problem = RodProblem {
        t_left,
        t_right,
        t_start,
        length,
        h,
        tau,
        total_time,
    };
    unsafe { run(&problem, result, problem.output_len()) }
}

/// Same as [`calculate`], with the capacity of `result` checked.
///
/// # Safety
/// `result` must be null or valid for writes of `result_len` `f64`s.
#[allow(clippy::too_many_arguments)]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn calculate_checked(
    t_left: f64,
    t_right: f64,
    t_start: f64,
    length: f64,
    h: f64,
    tau: f64,
    total_time: f64,
    result: *mut f64,
    result_len: usize,
) -> c_int {
    let problem = RodProblem {
        t_left,
        t_right,
        t_start,
        length,
        h,
        tau,
        total_time,
    };
    unsafe { run(&problem, result, result_len) }
}

/// Number of `f64` slots `calculate` writes, or 0 for rejected parameters.
#[unsafe(no_mangle)]
pub extern "C" fn output_len(length: f64, h: f64) -> usize {
    let problem = RodProblem {
        length,
        h,
        ..RodProblem::default()
    };
    if problem.validate().is_ok() {
        problem.output_len()
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_writes_interleaved_pairs() {
        let mut buf = vec![0.0; 6];
        let status = unsafe { calculate(0.0, 100.0, 50.0, 1.0, 0.5, 0.1, 0.1, buf.as_mut_ptr()) };
        assert_eq!(status, RH_OK);
        assert_eq!(buf[0], 0.0);
        assert_eq!(buf[1], 0.0);
        assert_eq!(buf[2], 0.5);
        assert!((buf[3] - 50.0).abs() < 1e-10);
        assert_eq!(buf[4], 1.0);
        assert_eq!(buf[5], 100.0);
    }

    #[test]
    fn null_result_is_reported() {
        let status =
            unsafe { calculate(0.0, 1.0, 0.5, 1.0, 0.5, 0.1, 1.0, std::ptr::null_mut()) };
        assert_eq!(status, RH_NULL_POINTER);
    }

    #[test]
    fn invalid_parameters_leave_buffer_untouched() {
        let mut buf = vec![9.0; 32];
        let status =
            unsafe { calculate(0.0, 1.0, 0.5, 1.0, 0.0, 0.1, 1.0, buf.as_mut_ptr()) };
        assert_eq!(status, RH_INVALID_PARAMETER);
        let status = unsafe {
            calculate_checked(0.0, 1.0, 0.5, 1.0, 0.25, -0.1, 1.0, buf.as_mut_ptr(), 32)
        };
        assert_eq!(status, RH_INVALID_PARAMETER);
        assert!(buf.iter().all(|&v| v == 9.0));
    }

    #[test]
    fn checked_variant_rejects_short_buffer() {
        let needed = output_len(1.0, 0.25);
        assert_eq!(needed, 10);

        let mut buf = vec![9.0; needed - 1];
        let status = unsafe {
            calculate_checked(0.0, 1.0, 0.5, 1.0, 0.25, 0.1, 1.0, buf.as_mut_ptr(), buf.len())
        };
        assert_eq!(status, RH_BUFFER_TOO_SMALL);
        assert!(buf.iter().all(|&v| v == 9.0));

        let mut buf = vec![0.0; needed];
        let status = unsafe {
            calculate_checked(0.0, 1.0, 0.5, 1.0, 0.25, 0.1, 1.0, buf.as_mut_ptr(), buf.len())
        };
        assert_eq!(status, RH_OK);
        assert_eq!(buf[9], 1.0);
    }

    #[test]
    fn oversized_grid_is_rejected_before_the_buffer_is_touched() {
        let mut buf = vec![9.0; 8];
        let status =
            unsafe { calculate(0.0, 1.0, 0.5, 1.0, 1e-300, 0.1, 1.0, buf.as_mut_ptr()) };
        assert_eq!(status, RH_INVALID_PARAMETER);
        let status = unsafe {
            calculate_checked(0.0, 1.0, 0.5, 1.0, 1e-300, 0.1, 1.0, buf.as_mut_ptr(), buf.len())
        };
        assert_eq!(status, RH_INVALID_PARAMETER);
        assert!(buf.iter().all(|&v| v == 9.0));
        assert_eq!(output_len(1.0, 1e-300), 0);
    }

    #[test]
    fn output_len_is_zero_for_degenerate_grid() {
        assert_eq!(output_len(0.1, 0.5), 0);
        assert_eq!(output_len(0.1, 0.01), 22);
    }
}
