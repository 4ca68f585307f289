//! Test-case file storage
//!
//! One directory per problem under a configured base path, each holding
//! numbered `input<N>` / `output<N>` file pairs. The two files of a pair are
//! always read, written, and deleted together. Suffixes are compared
//! numerically, so ordering and max-suffix computation stay correct past 9.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::constants::{INPUT_FILE_PREFIX, OUTPUT_FILE_PREFIX};
use crate::error::{AppError, AppResult};
use crate::models::TestcasePair;

/// Filesystem store for test-case pairs
///
/// Save and remove for the same problem are serialized through a per-problem
/// mutex, so two concurrent saves cannot observe the same maximum suffix and
/// clobber each other's files.
#[derive(Clone)]
pub struct TestcaseStore {
    base_dir: PathBuf,
    locks: Arc<Mutex<HashMap<i64, Arc<Mutex<()>>>>>,
}

impl TestcaseStore {
    /// Create a store rooted at `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Directory holding the test-case files of one problem
    pub fn problem_dir(&self, problem_id: i64) -> PathBuf {
        self.base_dir.join(problem_id.to_string())
    }

    /// Ensure the problem's directory exists, creating it if absent
    pub async fn ensure_dir(&self, problem_id: i64) -> AppResult<PathBuf> {
        let dir = self.problem_dir(problem_id);
        if !fs::try_exists(&dir).await? {
            fs::create_dir_all(&dir).await?;
            tracing::info!("Created test-case directory for problem {}", problem_id);
        }
        Ok(dir)
    }

    /// Number of test-case pairs stored for a problem
    ///
    /// Creates the directory if it does not exist yet, so an unpopulated
    /// problem lists as zero cases rather than erroring.
    pub async fn case_count(&self, problem_id: i64) -> AppResult<usize> {
        let dir = self.ensure_dir(problem_id).await?;
        Ok(self.input_suffixes(&dir).await?.len())
    }

    /// Read the pair at position `case_no` in the sorted listing
    pub async fn read_case(&self, problem_id: i64, case_no: usize) -> AppResult<TestcasePair> {
        let dir = self.problem_dir(problem_id);
        let suffix = self.resolve_suffix(&dir, problem_id, case_no).await?;

        let input = fs::read_to_string(dir.join(input_name(suffix))).await?;
        let output = fs::read_to_string(dir.join(output_name(suffix))).await?;

        Ok(TestcasePair {
            case_no,
            suffix,
            input,
            output,
        })
    }

    /// Write a new pair, assigning the next free suffix
    ///
    /// The suffix is the numeric maximum of the existing `input*` files plus
    /// one; an empty (or missing) directory starts at 1. Gaps left by removed
    /// pairs are never reused.
    pub async fn save_case(&self, problem_id: i64, input: &str, output: &str) -> AppResult<u32> {
        let _guard = self.lock_for(problem_id).await;

        let dir = self.ensure_dir(problem_id).await?;
        let suffix = self
            .input_suffixes(&dir)
            .await?
            .last()
            .copied()
            .unwrap_or(0)
            + 1;

        fs::write(dir.join(input_name(suffix)), input).await?;
        fs::write(dir.join(output_name(suffix)), output).await?;

        tracing::info!(
            "Saved test case {} for problem {}",
            suffix,
            problem_id
        );
        Ok(suffix)
    }

    /// Delete both files of the pair at position `case_no`
    ///
    /// Remaining pairs keep their suffixes; positions above `case_no` shift
    /// down by one in subsequent listings.
    pub async fn remove_case(&self, problem_id: i64, case_no: usize) -> AppResult<u32> {
        let _guard = self.lock_for(problem_id).await;

        let dir = self.problem_dir(problem_id);
        let suffix = self.resolve_suffix(&dir, problem_id, case_no).await?;

        fs::remove_file(dir.join(input_name(suffix))).await?;
        fs::remove_file(dir.join(output_name(suffix))).await?;

        tracing::info!(
            "Removed test case {} for problem {}",
            suffix,
            problem_id
        );
        Ok(suffix)
    }

    /// Map a listing position to the numeric suffix of its pair
    async fn resolve_suffix(
        &self,
        dir: &Path,
        problem_id: i64,
        case_no: usize,
    ) -> AppResult<u32> {
        let suffixes = if fs::try_exists(dir).await? {
            self.input_suffixes(dir).await?
        } else {
            Vec::new()
        };

        suffixes.get(case_no).copied().ok_or_else(|| {
            AppError::NotFound(format!(
                "Test case {} not found for problem {}",
                case_no, problem_id
            ))
        })
    }

    /// Numeric suffixes of all `input*` files in a directory, sorted ascending
    async fn input_suffixes(&self, dir: &Path) -> AppResult<Vec<u32>> {
        let mut suffixes = Vec::new();
        let mut entries = fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Some(suffix) = parse_suffix(name, INPUT_FILE_PREFIX) {
                suffixes.push(suffix);
            }
        }
        suffixes.sort_unstable();
        Ok(suffixes)
    }

    async fn lock_for(&self, problem_id: i64) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks.entry(problem_id).or_default().clone()
        };
        lock.lock_owned().await
    }
}

fn input_name(suffix: u32) -> String {
    format!("{}{}", INPUT_FILE_PREFIX, suffix)
}

fn output_name(suffix: u32) -> String {
    format!("{}{}", OUTPUT_FILE_PREFIX, suffix)
}

/// Parse the numeric tail of a `input<N>` / `output<N>` filename
fn parse_suffix(name: &str, prefix: &str) -> Option<u32> {
    name.strip_prefix(prefix)?.parse().ok()
}
