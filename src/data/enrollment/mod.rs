use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A student waiting to be placed in a class of some course.
///
/// Enrollments are served in the order they're supplied, callers should pass
/// them sorted by registration time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseEnrollment {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    #[serde(default)]
    pub registered_at: Option<DateTime<Utc>>,
}

impl CourseEnrollment {
    pub fn new(student_id: Uuid, course_id: Uuid) -> Self {
        CourseEnrollment {
            id: Uuid::new_v4(),
            student_id,
            course_id,
            registered_at: None,
        }
    }
}
