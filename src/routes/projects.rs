use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::AppError;
use crate::models::Project;
use crate::state::SharedState;
use crate::validate::ProjectId;

#[derive(Deserialize)]
pub struct ListProjects {
    pub title: Option<String>,
}

/// Body accepted by create and update. Neither field is required; a missing
/// value is stored as absent. A request without a JSON content type is read
/// as an empty body.
#[derive(Default, Deserialize)]
pub struct ProjectInput {
    pub title: Option<String>,
    pub owner: Option<String>,
}

pub async fn list(
    State(state): State<SharedState>,
    Query(query): Query<ListProjects>,
) -> Json<Vec<Project>> {
    let projects = state.projects.read().await;
    Json(filter_by_title(projects.all(), query.title.as_deref()))
}

pub async fn create(
    State(state): State<SharedState>,
    body: Option<Json<ProjectInput>>,
) -> Json<Project> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let project = Project::new(req.title, req.owner);
    state.projects.write().await.append(project.clone());

    tracing::debug!(id = %project.id, "project created");

    Json(project)
}

pub async fn update(
    State(state): State<SharedState>,
    ProjectId(id): ProjectId,
    body: Option<Json<ProjectInput>>,
) -> Result<Json<Project>, AppError> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let mut projects = state.projects.write().await;
    let index = projects.position(&id).ok_or_else(not_found)?;

    let project = Project {
        id: projects.all()[index].id,
        title: req.title,
        owner: req.owner,
    };
    projects.replace(index, project.clone());

    Ok(Json(project))
}

pub async fn delete(
    State(state): State<SharedState>,
    ProjectId(id): ProjectId,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut projects = state.projects.write().await;
    let index = projects.position(&id).ok_or_else(not_found)?;
    projects.remove(index);

    Ok(Json(serde_json::json!({ "message": "Project deleted" })))
}

/// An absent or empty `title` keeps every project.
fn filter_by_title(projects: &[Project], title: Option<&str>) -> Vec<Project> {
    match title {
        Some(needle) if !needle.is_empty() => projects
            .iter()
            .filter(|p| p.title_contains(needle))
            .cloned()
            .collect(),
        _ => projects.to_vec(),
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Project not found".to_string())
}
