//! Case file schema definitions.

use rh_solver::RodProblem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseFile {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub cases: Vec<RodCase>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RodCase {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub boundary: BoundaryDef,
    pub initial_c: f64,
    pub geometry: GeometryDef,
    pub discretization: DiscretizationDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoundaryDef {
    pub left_c: f64,
    pub right_c: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeometryDef {
    pub length_m: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscretizationDef {
    pub h_m: f64,
    pub tau_s: f64,
    pub total_time_s: f64,
}

impl CaseFile {
    /// A file holding only [`RodCase::default`].
    pub fn with_default_case(name: impl Into<String>) -> Self {
        Self {
            version: crate::validate::LATEST_VERSION,
            name: name.into(),
            cases: vec![RodCase::default()],
        }
    }

    pub fn case(&self, id: &str) -> Option<&RodCase> {
        self.cases.iter().find(|c| c.id == id)
    }
}

impl Default for RodCase {
    fn default() -> Self {
        Self::from_problem("default", &RodProblem::default())
    }
}

impl RodCase {
    pub fn from_problem(id: impl Into<String>, problem: &RodProblem) -> Self {
        Self {
            id: id.into(),
            description: None,
            boundary: BoundaryDef {
                left_c: problem.t_left,
                right_c: problem.t_right,
            },
            initial_c: problem.t_start,
            geometry: GeometryDef {
                length_m: problem.length,
            },
            discretization: DiscretizationDef {
                h_m: problem.h,
                tau_s: problem.tau,
                total_time_s: problem.total_time,
            },
        }
    }

    pub fn to_problem(&self) -> RodProblem {
        RodProblem {
            t_left: self.boundary.left_c,
            t_right: self.boundary.right_c,
            t_start: self.initial_c,
            length: self.geometry.length_m,
            h: self.discretization.h_m,
            tau: self.discretization.tau_s,
            total_time: self.discretization.total_time_s,
        }
    }
}
