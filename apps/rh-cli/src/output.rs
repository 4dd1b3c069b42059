//! Text renderings of a profile and of march progress.

use clap::ValueEnum;
use rh_solver::{MarchProgress, Profile};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns
    #[default]
    Table,
    /// `x_m,temperature` rows
    Csv,
    /// Profile as JSON
    Json,
}

pub fn render(profile: &Profile, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Table => {
            let mut out = format!("{:>10} {:>14}\n", "x [m]", "T");
            for p in &profile.points {
                out.push_str(&format!("{:>10.5} {:>14.6}\n", p.x, p.temperature));
            }
            Ok(out)
        }
        OutputFormat::Csv => {
            let mut out = String::from("x_m,temperature\n");
            for p in &profile.points {
                out.push_str(&format!("{},{}\n", p.x, p.temperature));
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(profile)?;
            out.push('\n');
            Ok(out)
        }
    }
}

pub fn progress_line(p: &MarchProgress, elapsed_wall_s: f64) -> String {
    let width = 28usize;
    let fraction = if p.steps == 0 {
        1.0
    } else {
        p.step as f64 / p.steps as f64
    };
    let filled = ((fraction * width as f64).round() as usize).min(width);
    let bar = format!(
        "{}{}",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled))
    );
    format!(
        "\r[{}] {:>6.2}%  t={:.3}s  step={}/{}  elapsed={:.1}s",
        bar,
        fraction * 100.0,
        p.sim_time_s,
        p.step,
        p.steps,
        elapsed_wall_s
    )
}
