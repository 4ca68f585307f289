//! Testcase handler implementations

use axum::{
    Form, Json,
    extract::{Path, State, rejection::FormRejection},
    response::Redirect,
};

use crate::{
    constants::{ADMIN_BASE_PATH, MAX_CASE_NO},
    error::{AppError, AppResult},
    services::TestcaseService,
    state::AppState,
};

use super::{
    request::SaveTestcaseRequest,
    response::{
        AddTestcaseFormResponse, ProblemsIndexResponse, TestcaseListingResponse,
        TestcasePairResponse,
    },
};

/// List all problems
pub async fn index(State(state): State<AppState>) -> AppResult<Json<ProblemsIndexResponse>> {
    let problems = TestcaseService::list_problems(state.bank()).await?;
    Ok(Json(problems))
}

/// List test cases for a problem
pub async fn list_testcases(
    State(state): State<AppState>,
    Path(problem_id): Path<i64>,
) -> AppResult<Json<TestcaseListingResponse>> {
    let listing = TestcaseService::list_testcases(state.bank(), state.store(), problem_id).await?;
    Ok(Json(listing))
}

/// View one input/output pair
pub async fn view_testcase(
    State(state): State<AppState>,
    Path((problem_id, case_no)): Path<(i64, usize)>,
) -> AppResult<Json<TestcasePairResponse>> {
    check_case_no(case_no)?;

    let pair =
        TestcaseService::view_testcase(state.bank(), state.store(), problem_id, case_no).await?;
    Ok(Json(pair))
}

/// Render the add-testcase form data
pub async fn add_testcase(
    State(state): State<AppState>,
    Path(problem_id): Path<i64>,
) -> AppResult<Json<AddTestcaseFormResponse>> {
    let form = TestcaseService::add_testcase_form(state.bank(), problem_id).await?;
    Ok(Json(form))
}

/// Persist a new pair, then redirect to the problem's listing
///
/// A malformed form body (e.g. a missing field) is reported through the
/// structured error envelope rather than the extractor's default rejection.
pub async fn save_testcase(
    State(state): State<AppState>,
    Path(problem_id): Path<i64>,
    payload: Result<Form<SaveTestcaseRequest>, FormRejection>,
) -> AppResult<Redirect> {
    let Form(payload) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;

    TestcaseService::save_testcase(state.bank(), state.store(), problem_id, payload).await?;
    Ok(listing_redirect(problem_id))
}

/// Delete one pair, then redirect to the problem's listing
pub async fn remove_testcase(
    State(state): State<AppState>,
    Path((problem_id, case_no)): Path<(i64, usize)>,
) -> AppResult<Redirect> {
    check_case_no(case_no)?;

    TestcaseService::remove_testcase(state.bank(), state.store(), problem_id, case_no).await?;
    Ok(listing_redirect(problem_id))
}

/// View and removal address cases by a single-digit index
fn check_case_no(case_no: usize) -> AppResult<()> {
    if case_no > MAX_CASE_NO {
        return Err(AppError::InvalidInput(format!(
            "Case number must be a single digit (0-{})",
            MAX_CASE_NO
        )));
    }
    Ok(())
}

fn listing_redirect(problem_id: i64) -> Redirect {
    Redirect::to(&format!("{}/testcases/{}", ADMIN_BASE_PATH, problem_id))
}
