//! HTTP handlers and wire DTOs for the task endpoints.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::json;

use super::AppState;
use super::error::{ApiError, ApiSubError, format_local_datetime};
use crate::task::domain::{Task, TaskTitle};
use crate::task::ports::{CreateTaskRequest, UpdateTaskRequest};

/// Request body shared by create and update.
///
/// Create requires a non-blank title; update treats every field as
/// optional and merges only what is present.
#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct TaskBody {
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
}

/// Wire representation of a task.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TaskResponse {
    id: String,
    title: String,
    description: Option<String>,
    status: String,
    #[serde(serialize_with = "serialize_local_datetime")]
    created_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_local_datetime")]
    updated_at: DateTime<Utc>,
}

impl TaskResponse {
    fn from_domain(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(ToOwned::to_owned),
            status: task.status().to_owned(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

fn serialize_local_datetime<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_local_datetime(*value))
}

const REQUEST_OBJECT: &str = "taskRequest";

fn title_violation(body: &TaskBody, message: &str) -> ApiSubError {
    ApiSubError {
        object: REQUEST_OBJECT.to_owned(),
        field: "title".to_owned(),
        rejected_value: body.title.as_ref().map(|value| json!(value)),
        message: message.to_owned(),
    }
}

/// Field checks for task creation: title required, non-blank, bounded.
fn validate_create(body: &TaskBody) -> Vec<ApiSubError> {
    let mut violations = Vec::new();
    match body.title.as_deref() {
        None => violations.push(title_violation(body, "The task title is required")),
        Some(title) if title.trim().is_empty() => {
            violations.push(title_violation(body, "The task title must not be blank"));
        }
        Some(title) if title.chars().count() > TaskTitle::MAX_LENGTH => {
            violations.push(title_violation(
                body,
                "The title must not exceed 255 characters",
            ));
        }
        Some(_) => {}
    }
    violations
}

/// Field checks for task update: only bounds a title when one is present.
fn validate_update(body: &TaskBody) -> Vec<ApiSubError> {
    let mut violations = Vec::new();
    let oversized = body
        .title
        .as_deref()
        .is_some_and(|title| title.chars().count() > TaskTitle::MAX_LENGTH);
    if oversized {
        violations.push(title_violation(
            body,
            "The title must not exceed 255 characters",
        ));
    }
    violations
}

fn body_rejection(err: &JsonRejection) -> ApiError {
    ApiError::bad_request(
        "Could not process the request body. Check that the JSON is well formed.",
        err.body_text(),
    )
}

pub(super) async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<TaskBody>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let Json(body) = payload.map_err(|err| body_rejection(&err))?;
    let violations = validate_create(&body);
    if !violations.is_empty() {
        return Err(ApiError::validation(violations));
    }

    let request = CreateTaskRequest {
        title: body.title.unwrap_or_default(),
        description: body.description,
        status: body.status,
    };
    let task = state.tasks.create(request).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from_domain(&task))))
}

pub(super) async fn list_tasks(
    State(state): State<AppState>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = state.tasks.find_all().await?;
    Ok(Json(tasks.iter().map(TaskResponse::from_domain).collect()))
}

pub(super) async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let task = state.tasks.find_by_id(&id).await?;
    Ok(task.map_or_else(
        || StatusCode::NOT_FOUND.into_response(),
        |found| Json(TaskResponse::from_domain(&found)).into_response(),
    ))
}

pub(super) async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TaskBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload.map_err(|err| body_rejection(&err))?;
    let violations = validate_update(&body);
    if !violations.is_empty() {
        return Err(ApiError::validation(violations));
    }

    let request = UpdateTaskRequest {
        title: body.title,
        description: body.description,
        status: body.status,
    };
    let task = state.tasks.update(&id, request).await?;
    Ok(task.map_or_else(
        || StatusCode::NOT_FOUND.into_response(),
        |updated| Json(TaskResponse::from_domain(&updated)).into_response(),
    ))
}

pub(super) async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let deleted = state.tasks.delete(&id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
