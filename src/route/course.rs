use crate::assign::code::derive_code;
use rocket::serde::json::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseCodeResponse {
    pub name: String,
    /// Empty when the name has no letters or digits.
    pub code: String,
}

/// Preview the class code a course name produces
#[utoipa::path(
    params(
        ("name", description = "course display name")
    ),
    responses(
        (status = 200, description = "Derived code", body = CourseCodeResponse),
    )
)]
#[get("/course/code/<name>")]
#[tracing::instrument]
pub fn course_code(name: &str) -> Json<CourseCodeResponse> {
    Json(CourseCodeResponse {
        code: derive_code(name),
        name: name.to_string(),
    })
}
