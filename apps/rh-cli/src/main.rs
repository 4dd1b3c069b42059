mod output;

use clap::{Args, Parser, Subcommand};
use output::{OutputFormat, progress_line, render};
use rayon::prelude::*;
use rh_core::Material;
use rh_project::{CaseFile, ProjectError, RodCase, ValidationError};
use rh_solver::{Profile, RodProblem, SolverError, march_with_progress, solve};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Solver(#[from] SolverError),

    #[error("{0}")]
    Project(#[from] ProjectError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "rh-cli")]
#[command(about = "rodheat CLI - transient heat conduction in a steel rod", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one rod case and print the final temperature profile
    Run {
        #[command(flatten)]
        problem: ProblemArgs,
        /// Profile output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Write the profile to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Show a progress bar while marching
        #[arg(long)]
        progress: bool,
    },
    /// Run every case of a case file and compare the results
    Compare {
        /// Path to the case file (YAML or JSON)
        path: PathBuf,
    },
    /// Validate a case file
    Validate {
        /// Path to the case file (YAML or JSON)
        path: PathBuf,
    },
    /// Write a case file containing the default case
    Init {
        /// Path of the new case file
        path: PathBuf,
        /// Case file name
        #[arg(long, default_value = "rod")]
        name: String,
    },
}

/// Case selection; any flag given overrides the case's value.
#[derive(Args)]
struct ProblemArgs {
    /// Case file to take the case from
    #[arg(long)]
    config: Option<PathBuf>,
    /// Case ID in the case file (defaults to the first case)
    #[arg(long, requires = "config")]
    case: Option<String>,
    /// Rod length L in metres
    #[arg(long)]
    length: Option<f64>,
    /// Spatial step h in metres
    #[arg(long)]
    h: Option<f64>,
    /// Time step tau in seconds
    #[arg(long)]
    tau: Option<f64>,
    /// Simulated time in seconds
    #[arg(long)]
    time: Option<f64>,
    /// Left boundary temperature
    #[arg(long, allow_hyphen_values = true)]
    t_left: Option<f64>,
    /// Right boundary temperature
    #[arg(long, allow_hyphen_values = true)]
    t_right: Option<f64>,
    /// Initial interior temperature
    #[arg(long, allow_hyphen_values = true)]
    t_start: Option<f64>,
}

impl ProblemArgs {
    fn resolve(&self) -> CliResult<RodProblem> {
        let mut problem = match &self.config {
            Some(path) => {
                let file = rh_project::load(path)?;
                select_case(&file, self.case.as_deref())?.to_problem()
            }
            None => RodProblem::default(),
        };

        if let Some(v) = self.length {
            problem.length = v;
        }
        if let Some(v) = self.h {
            problem.h = v;
        }
        if let Some(v) = self.tau {
            problem.tau = v;
        }
        if let Some(v) = self.time {
            problem.total_time = v;
        }
        if let Some(v) = self.t_left {
            problem.t_left = v;
        }
        if let Some(v) = self.t_right {
            problem.t_right = v;
        }
        if let Some(v) = self.t_start {
            problem.t_start = v;
        }
        Ok(problem)
    }
}

fn select_case<'a>(file: &'a CaseFile, id: Option<&str>) -> Result<&'a RodCase, ValidationError> {
    match id {
        Some(id) => file.case(id).ok_or_else(|| ValidationError::MissingCase {
            id: id.to_string(),
        }),
        None => file.cases.first().ok_or(ValidationError::Empty),
    }
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            problem,
            format,
            output,
            progress,
        } => cmd_run(&problem.resolve()?, format, output.as_deref(), progress),
        Commands::Compare { path } => cmd_compare(&path),
        Commands::Validate { path } => cmd_validate(&path),
        Commands::Init { path, name } => cmd_init(&path, &name),
    }
}

fn cmd_run(
    problem: &RodProblem,
    format: OutputFormat,
    output: Option<&Path>,
    progress: bool,
) -> CliResult<()> {
    problem.validate()?;
    println!(
        "Rod: L = {} m, h = {} m, tau = {} s, time = {} s",
        problem.length, problem.h, problem.tau, problem.total_time
    );
    println!(
        "  {} nodes, {} steps",
        problem.node_count(),
        problem.step_count()
    );

    let start = Instant::now();
    let profile = if progress {
        let mut last_emit = Instant::now();
        let profile = march_with_progress(
            problem,
            &Material::steel(),
            Some(&mut |p| {
                if p.step == p.steps || last_emit.elapsed().as_millis() >= 100 {
                    print!("{}", progress_line(&p, start.elapsed().as_secs_f64()));
                    let _ = io::stdout().flush();
                    last_emit = Instant::now();
                }
            }),
        )?;
        clear_progress_line();
        profile
    } else {
        solve(problem)?
    };
    let elapsed = start.elapsed().as_secs_f64();
    tracing::info!(
        nodes = profile.len(),
        steps = profile.steps,
        elapsed_s = elapsed,
        "run finished"
    );

    print_summary(&profile, elapsed);

    let text = render(&profile, format)?;
    if let Some(path) = output {
        std::fs::write(path, text)?;
        println!("✓ Exported {} points to {}", profile.len(), path.display());
    } else {
        print!("{}", text);
    }
    Ok(())
}

fn print_summary(profile: &Profile, elapsed_s: f64) {
    if let Some(center) = profile.center() {
        println!(
            "Center temperature: {:.4} (x = {} m)",
            center.temperature, center.x
        );
    }
    println!("Computation time: {:.6} s", elapsed_s);
}

fn cmd_compare(path: &Path) -> CliResult<()> {
    let file = rh_project::load(path)?;
    println!("Comparing {} cases from '{}'", file.cases.len(), file.name);

    let runs: Vec<_> = file
        .cases
        .par_iter()
        .map(|case| {
            let start = Instant::now();
            let result = solve(&case.to_problem());
            let elapsed = start.elapsed().as_secs_f64();
            match &result {
                Ok(profile) => tracing::info!(
                    case = %case.id,
                    nodes = profile.len(),
                    steps = profile.steps,
                    elapsed_s = elapsed,
                    "case finished"
                ),
                Err(err) => tracing::warn!(case = %case.id, error = %err, "case failed"),
            }
            (case, result, elapsed)
        })
        .collect();

    println!(
        "{:<16} {:>10} {:>10} {:>7} {:>8} {:>12} {:>12} {:>11}",
        "case", "h [m]", "tau [s]", "nodes", "steps", "T center", "max dev", "time [s]"
    );
    let mut first_error = None;
    for (case, result, elapsed) in runs {
        match result {
            Ok(profile) => {
                let center = profile.center().map_or(f64::NAN, |p| p.temperature);
                println!(
                    "{:<16} {:>10} {:>10} {:>7} {:>8} {:>12.4} {:>12.4e} {:>11.6}",
                    case.id,
                    case.discretization.h_m,
                    case.discretization.tau_s,
                    profile.len(),
                    profile.steps,
                    center,
                    profile.steady_state_deviation(),
                    elapsed
                );
            }
            Err(err) => {
                println!("{:<16} FAILED: {}", case.id, err);
                first_error.get_or_insert(err);
            }
        }
    }

    match first_error {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

fn cmd_validate(path: &Path) -> CliResult<()> {
    println!("Validating case file: {}", path.display());
    let file = rh_project::load(path)?;
    println!("✓ Case file is valid ({} cases)", file.cases.len());
    Ok(())
}

fn cmd_init(path: &Path, name: &str) -> CliResult<()> {
    let file = CaseFile::with_default_case(name);
    rh_project::save(path, &file)?;
    println!("✓ Wrote {}", path.display());
    Ok(())
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(100));
    let _ = io::stdout().flush();
}
