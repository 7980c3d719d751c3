use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use super::dto::{CreateStudent, StudentResponse, UpdateStudent};
use super::repo::Student;
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/students/", post(create_student).get(list_students))
        .route("/students/byname/:name", get(read_student_byname))
        .route(
            "/students/:student_id",
            get(read_student)
                .put(update_student)
                .delete(delete_student),
        )
}

#[instrument(skip(state, payload))]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudent>,
) -> Result<Json<StudentResponse>, ApiError> {
    if Student::get(&state.db, payload.student_id).await?.is_some() {
        warn!(student_id = payload.student_id, "duplicate create");
        return Err(ApiError::Conflict("Student already registered".into()));
    }

    let student = Student::create(&state.db, &payload).await?;
    info!(student_id = student.student_id, "student created");
    Ok(Json(student.into()))
}

#[instrument(skip(state))]
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let students = Student::list(&state.db).await?;
    Ok(Json(students.into_iter().map(Into::into).collect()))
}

#[instrument(skip(state))]
pub async fn read_student(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = Student::get(&state.db, student_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".into()))?;
    Ok(Json(student.into()))
}

#[instrument(skip(state))]
pub async fn read_student_byname(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = Student::get_by_name(&state.db, &name)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".into()))?;
    Ok(Json(student.into()))
}

#[instrument(skip(state, payload))]
pub async fn update_student(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
    Json(payload): Json<UpdateStudent>,
) -> Result<Json<StudentResponse>, ApiError> {
    let patch = payload.into_patch()?;
    let student = Student::update(&state.db, student_id, patch)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".into()))?;
    info!(student_id, "student updated");
    Ok(Json(student.into()))
}

#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    if Student::get(&state.db, student_id).await?.is_none() {
        return Err(ApiError::NotFound("Student not found".into()));
    }

    Student::delete(&state.db, student_id).await?;
    info!(student_id, "student deleted");
    Ok(Json(json!({ "message": "Student deleted" })))
}
