use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::types::image;

/// Accepted payload for creating or replacing an instructor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstructorCreate {
    pub name: String,
    pub age: i64,
    pub class_assignment: String,
    #[serde(default, with = "image")]
    pub image: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Instructor {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub class_assignment: String,
    #[serde(default, with = "image")]
    pub image: Option<Vec<u8>>,
}

/// Accepted payload for creating or replacing a student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentCreate {
    pub name: String,
    pub age: i64,
    #[serde(default, with = "image")]
    pub image: Option<Vec<u8>>,
    pub instructor_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: i64,
    #[serde(default, with = "image")]
    pub image: Option<Vec<u8>>,
    pub instructor_id: i64,
}

impl Instructor {
    pub fn from_input(id: i64, input: InstructorCreate) -> Self {
        Self {
            id,
            name: input.name,
            age: input.age,
            class_assignment: input.class_assignment,
            image: input.image,
        }
    }
}

impl Student {
    pub fn from_input(id: i64, input: StudentCreate) -> Self {
        Self {
            id,
            name: input.name,
            age: input.age,
            image: input.image,
            instructor_id: input.instructor_id,
        }
    }
}
