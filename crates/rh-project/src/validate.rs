//! Case file validation logic.

use crate::schema::CaseFile;
use std::collections::HashSet;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Case file has no cases")]
    Empty,

    #[error("Case not found: {id}")]
    MissingCase { id: String },
}

pub fn validate_case_file(file: &CaseFile) -> Result<(), ValidationError> {
    if file.version == 0 || file.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }
    if file.cases.is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut ids = HashSet::new();
    for case in &file.cases {
        if case.id.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "cases.id".to_string(),
                value: format!("{:?}", case.id),
                reason: "must not be empty".to_string(),
            });
        }
        if !ids.insert(case.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: case.id.clone(),
                context: "cases".to_string(),
            });
        }

        let problem = case.to_problem();
        if let Err(err) = problem.validate() {
            return Err(ValidationError::InvalidValue {
                field: format!("cases.{}", case.id),
                value: format!(
                    "h_m={}, tau_s={}, length_m={}, total_time_s={}",
                    problem.h, problem.tau, problem.length, problem.total_time
                ),
                reason: err.to_string(),
            });
        }
    }

    Ok(())
}
