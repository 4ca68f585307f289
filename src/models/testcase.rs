//! Test case model

use serde::{Deserialize, Serialize};

/// A test-case input/output pair as stored on disk
///
/// `case_no` is the position of the pair within the numerically sorted
/// directory listing; `suffix` is the numeral embedded in the filenames
/// (`input<N>` / `output<N>`). The two diverge once pairs are removed,
/// since positions shift while suffixes stay fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestcasePair {
    pub case_no: usize,
    pub suffix: u32,
    pub input: String,
    pub output: String,
}
