//! Testcase response DTOs
//!
//! These carry everything a front-end (template layer, CLI, or test harness)
//! needs to render each page; no HTML is produced here.

use serde::Serialize;

use crate::models::Problem;

/// Problem summary for listings
#[derive(Debug, Serialize)]
pub struct ProblemSummary {
    pub problem_id: i64,
    pub title: String,
    pub statement: String,
    pub uploaded_by: String,
}

impl From<&Problem> for ProblemSummary {
    fn from(problem: &Problem) -> Self {
        Self {
            problem_id: problem.problem_id,
            title: problem.title.clone(),
            statement: problem.statement_preview(256),
            uploaded_by: problem.uploaded_by.clone(),
        }
    }
}

/// Problems index response
#[derive(Debug, Serialize)]
pub struct ProblemsIndexResponse {
    pub problems: Vec<ProblemSummary>,
    pub total: usize,
}

/// Test-case listing for one problem
#[derive(Debug, Serialize)]
pub struct TestcaseListingResponse {
    pub problem: ProblemSummary,
    pub case_count: usize,
    /// Index range `[0, case_count)` the listing links to
    pub case_numbers: Vec<usize>,
}

/// One input/output pair alongside its problem
#[derive(Debug, Serialize)]
pub struct TestcasePairResponse {
    pub problem: ProblemSummary,
    pub case_no: usize,
    /// Numeral embedded in the on-disk filenames
    pub suffix: u32,
    pub input: String,
    pub output: String,
}

/// Blank add-form data bound to a problem
#[derive(Debug, Serialize)]
pub struct AddTestcaseFormResponse {
    pub problem: ProblemSummary,
    pub input_text: String,
    pub output_text: String,
}
