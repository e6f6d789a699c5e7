use axum::{Json, extract::State};
use tracing::info;

use crate::db::models::{Instructor, InstructorCreate, Student};
use crate::error::{ApiError, Entity};
use crate::middleware::{ValidJson, ValidPath, ValidQuery};
use crate::router::ClassroomState;
use crate::types::{Message, Pagination};

/// POST /instructors/
pub async fn create_instructor(
    State(state): State<ClassroomState>,
    ValidJson(input): ValidJson<InstructorCreate>,
) -> Result<Json<Instructor>, ApiError> {
    let instructor = state.instructors.create(input).await?;
    info!(id = instructor.id, "instructor created");
    Ok(Json(instructor))
}

/// GET /instructors/?skip=&limit=
pub async fn list_instructors(
    State(state): State<ClassroomState>,
    ValidQuery(page): ValidQuery<Pagination>,
) -> Result<Json<Vec<Instructor>>, ApiError> {
    let instructors = state.instructors.list(page.skip, page.limit).await?;
    Ok(Json(instructors))
}

/// GET /instructors/{id}
pub async fn get_instructor(
    State(state): State<ClassroomState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<Instructor>, ApiError> {
    state
        .instructors
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(Entity::Instructor))
}

/// PUT /instructors/{id}
pub async fn update_instructor(
    State(state): State<ClassroomState>,
    ValidPath(id): ValidPath<i64>,
    ValidJson(input): ValidJson<InstructorCreate>,
) -> Result<Json<Instructor>, ApiError> {
    let instructor = state
        .instructors
        .update(id, input)
        .await?
        .ok_or(ApiError::NotFound(Entity::Instructor))?;
    info!(id, "instructor updated");
    Ok(Json(instructor))
}

/// DELETE /instructors/{id}
pub async fn delete_instructor(
    State(state): State<ClassroomState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<Message>, ApiError> {
    if !state.instructors.delete(id).await? {
        return Err(ApiError::NotFound(Entity::Instructor));
    }
    info!(id, "instructor deleted");
    Ok(Json(Message::new("Instructor deleted successfully")))
}

/// GET /instructors/{id}/students/
pub async fn list_students_by_instructor(
    State(state): State<ClassroomState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = state.students.list_by_instructor(id).await?;
    Ok(Json(students))
}
