//! Testcase request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_TESTCASE_INPUT_LENGTH, MAX_TESTCASE_OUTPUT_LENGTH};

/// Save test case form submission
///
/// Both fields are required; validation gates execution, so nothing is
/// written to disk for an invalid submission.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveTestcaseRequest {
    #[validate(length(min = 1, max = MAX_TESTCASE_INPUT_LENGTH))]
    pub input_text: String,

    #[validate(length(min = 1, max = MAX_TESTCASE_OUTPUT_LENGTH))]
    pub output_text: String,
}
