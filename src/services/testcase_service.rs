//! Testcase service
//!
//! The six administrative operations as a plain interface: problem id, case
//! index, and form fields in; response DTOs or a structured error out. Any
//! front-end can drive this without depending on the web layer.

use validator::Validate;

use crate::{
    db::repositories::ProblemBank,
    error::{AppError, AppResult},
    handlers::testcases::{
        request::SaveTestcaseRequest,
        response::{
            AddTestcaseFormResponse, ProblemsIndexResponse, TestcaseListingResponse,
            TestcasePairResponse,
        },
    },
    models::Problem,
    storage::TestcaseStore,
};

/// Testcase service for business logic
pub struct TestcaseService;

impl TestcaseService {
    /// List every problem in the bank
    pub async fn list_problems(bank: &dyn ProblemBank) -> AppResult<ProblemsIndexResponse> {
        let problems = bank.list().await?;
        let total = problems.len();

        Ok(ProblemsIndexResponse {
            problems: problems.iter().map(Into::into).collect(),
            total,
        })
    }

    /// List the test cases of one problem
    ///
    /// The problem's directory is created if it does not exist yet, so a
    /// freshly uploaded problem lists as zero cases.
    pub async fn list_testcases(
        bank: &dyn ProblemBank,
        store: &TestcaseStore,
        problem_id: i64,
    ) -> AppResult<TestcaseListingResponse> {
        let problem = Self::get_problem(bank, problem_id).await?;
        let case_count = store.case_count(problem_id).await?;

        Ok(TestcaseListingResponse {
            problem: (&problem).into(),
            case_count,
            case_numbers: (0..case_count).collect(),
        })
    }

    /// Read the pair at position `case_no` of the sorted listing
    pub async fn view_testcase(
        bank: &dyn ProblemBank,
        store: &TestcaseStore,
        problem_id: i64,
        case_no: usize,
    ) -> AppResult<TestcasePairResponse> {
        let problem = Self::get_problem(bank, problem_id).await?;
        let pair = store.read_case(problem_id, case_no).await?;

        Ok(TestcasePairResponse {
            problem: (&problem).into(),
            case_no: pair.case_no,
            suffix: pair.suffix,
            input: pair.input,
            output: pair.output,
        })
    }

    /// Blank add-form data bound to a problem (no file-system access)
    pub async fn add_testcase_form(
        bank: &dyn ProblemBank,
        problem_id: i64,
    ) -> AppResult<AddTestcaseFormResponse> {
        let problem = Self::get_problem(bank, problem_id).await?;

        Ok(AddTestcaseFormResponse {
            problem: (&problem).into(),
            input_text: String::new(),
            output_text: String::new(),
        })
    }

    /// Validate and persist a new pair, returning the assigned suffix
    pub async fn save_testcase(
        bank: &dyn ProblemBank,
        store: &TestcaseStore,
        problem_id: i64,
        payload: SaveTestcaseRequest,
    ) -> AppResult<u32> {
        payload.validate()?;
        Self::get_problem(bank, problem_id).await?;

        store
            .save_case(problem_id, &payload.input_text, &payload.output_text)
            .await
    }

    /// Delete the pair at position `case_no`, returning its suffix
    pub async fn remove_testcase(
        bank: &dyn ProblemBank,
        store: &TestcaseStore,
        problem_id: i64,
        case_no: usize,
    ) -> AppResult<u32> {
        Self::get_problem(bank, problem_id).await?;
        store.remove_case(problem_id, case_no).await
    }

    async fn get_problem(bank: &dyn ProblemBank, problem_id: i64) -> AppResult<Problem> {
        bank.find(problem_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Problem {} does not exist", problem_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::problem_repo::MockProblemBank;
    use chrono::Utc;
    use tempfile::tempdir;

    fn problem(problem_id: i64) -> Problem {
        Problem {
            problem_id,
            title: format!("Problem {}", problem_id),
            statement: "Add two numbers".to_string(),
            uploaded_by: "alice".to_string(),
            created_at: Utc::now(),
        }
    }

    fn bank_with(problem_id: i64) -> MockProblemBank {
        let mut bank = MockProblemBank::new();
        bank.expect_find()
            .returning(move |id| Ok((id == problem_id).then(|| problem(problem_id))));
        bank
    }

    fn bank_without_problems() -> MockProblemBank {
        let mut bank = MockProblemBank::new();
        bank.expect_find().returning(|_| Ok(None));
        bank
    }

    #[tokio::test]
    async fn test_list_problems() {
        let mut bank = MockProblemBank::new();
        bank.expect_list()
            .returning(|| Ok(vec![problem(1), problem(2)]));

        let index = TestcaseService::list_problems(&bank).await.unwrap();
        assert_eq!(index.total, 2);
        assert_eq!(index.problems[0].problem_id, 1);
        assert_eq!(index.problems[1].title, "Problem 2");
    }

    #[tokio::test]
    async fn test_list_problems_empty_bank() {
        let mut bank = MockProblemBank::new();
        bank.expect_list().returning(|| Ok(Vec::new()));

        let index = TestcaseService::list_problems(&bank).await.unwrap();
        assert_eq!(index.total, 0);
        assert!(index.problems.is_empty());
    }

    #[tokio::test]
    async fn test_listing_unknown_problem_is_not_found() {
        let tmp = tempdir().unwrap();
        let store = TestcaseStore::new(tmp.path());
        let bank = bank_without_problems();

        let err = TestcaseService::list_testcases(&bank, &store, 42)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        // No directory gets fabricated for an unknown problem
        assert!(!tmp.path().join("42").exists());
    }

    #[tokio::test]
    async fn test_listing_creates_empty_directory() {
        let tmp = tempdir().unwrap();
        let store = TestcaseStore::new(tmp.path());
        let bank = bank_with(42);

        let listing = TestcaseService::list_testcases(&bank, &store, 42)
            .await
            .unwrap();
        assert_eq!(listing.case_count, 0);
        assert!(listing.case_numbers.is_empty());
        assert!(tmp.path().join("42").is_dir());
    }

    #[tokio::test]
    async fn test_save_and_view() {
        let tmp = tempdir().unwrap();
        let store = TestcaseStore::new(tmp.path());
        let bank = bank_with(42);

        let payload = SaveTestcaseRequest {
            input_text: "3\n5".to_string(),
            output_text: "8".to_string(),
        };
        let suffix = TestcaseService::save_testcase(&bank, &store, 42, payload)
            .await
            .unwrap();
        assert_eq!(suffix, 1);

        let view = TestcaseService::view_testcase(&bank, &store, 42, 0)
            .await
            .unwrap();
        assert_eq!(view.input, "3\n5");
        assert_eq!(view.output, "8");
        assert_eq!(view.problem.problem_id, 42);
    }

    #[tokio::test]
    async fn test_invalid_submission_is_rejected_before_io() {
        let tmp = tempdir().unwrap();
        let store = TestcaseStore::new(tmp.path());
        let bank = bank_with(42);

        let payload = SaveTestcaseRequest {
            input_text: String::new(),
            output_text: "8".to_string(),
        };
        let err = TestcaseService::save_testcase(&bank, &store, 42, payload)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        // Nothing was written
        assert!(!tmp.path().join("42").exists());
    }

    #[tokio::test]
    async fn test_add_form_is_blank() {
        let bank = bank_with(7);

        let form = TestcaseService::add_testcase_form(&bank, 7).await.unwrap();
        assert_eq!(form.problem.problem_id, 7);
        assert!(form.input_text.is_empty());
        assert!(form.output_text.is_empty());
    }

    #[tokio::test]
    async fn test_remove_unknown_case_is_not_found() {
        let tmp = tempdir().unwrap();
        let store = TestcaseStore::new(tmp.path());
        let bank = bank_with(42);

        let err = TestcaseService::remove_testcase(&bank, &store, 42, 0)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
