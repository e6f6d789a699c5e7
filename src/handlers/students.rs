use axum::{Json, extract::State};
use tracing::info;

use crate::db::models::{Student, StudentCreate};
use crate::error::{ApiError, Entity};
use crate::middleware::{ValidJson, ValidPath, ValidQuery};
use crate::router::ClassroomState;
use crate::types::{Message, Pagination};

pub async fn create_student(
    State(state): State<ClassroomState>,
    ValidJson(input): ValidJson<StudentCreate>,
) -> Result<Json<Student>, ApiError> {
    let student = state.students.create(input).await?;
    info!(
        id = student.id,
        instructor_id = student.instructor_id,
        "student created"
    );
    Ok(Json(student))
}

pub async fn list_students(
    State(state): State<ClassroomState>,
    ValidQuery(page): ValidQuery<Pagination>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = state.students.list(page.skip, page.limit).await?;
    Ok(Json(students))
}

pub async fn get_student(
    State(state): State<ClassroomState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<Student>, ApiError> {
    state
        .students
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(Entity::Student))
}

pub async fn update_student(
    State(state): State<ClassroomState>,
    ValidPath(id): ValidPath<i64>,
    ValidJson(input): ValidJson<StudentCreate>,
) -> Result<Json<Student>, ApiError> {
    let student = state
        .students
        .update(id, input)
        .await?
        .ok_or(ApiError::NotFound(Entity::Student))?;
    info!(id, "student updated");
    Ok(Json(student))
}

pub async fn delete_student(
    State(state): State<ClassroomState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<Message>, ApiError> {
    if !state.students.delete(id).await? {
        return Err(ApiError::NotFound(Entity::Student));
    }
    info!(id, "student deleted");
    Ok(Json(Message::new("Student deleted successfully")))
}
