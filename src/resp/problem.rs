use std::io::Cursor;

use rocket::http::ContentType;
use rocket::http::Status;
use rocket::response::Responder;
use rocket::{response, Request, Response};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};
use utoipa::ToSchema;

use crate::error::AssignError;

/// Implements [RFC7807](https://tools.ietf.org/html/rfc7807).
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Problem {
    #[serde(skip)]
    pub status: Status,
    pub type_uri: String,
    pub title: String,

    pub detail: Option<String>,
    pub instance_uri: Option<String>,

    #[schema(value_type = Object)]
    pub body: Map<String, Value>,
}

impl Default for Problem {
    fn default() -> Self {
        Problem {
            status: Status::InternalServerError,
            type_uri: "about:blank".to_string(),
            title: "Problem".to_string(),
            detail: None,
            instance_uri: None,
            body: Map::new(),
        }
    }
}

impl Problem {
    pub fn new(status: Status, type_uri: impl ToString, title: impl ToString) -> Problem {
        Problem {
            status,
            type_uri: type_uri.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    pub fn new_untyped(status: Status, title: impl ToString) -> Problem {
        Problem::new(status, "about:blank", title)
    }

    pub fn detail(&mut self, value: impl ToString) -> &mut Problem {
        self.detail = Some(value.to_string());
        self
    }

    pub fn instance_uri(&mut self, value: String) -> &mut Problem {
        self.instance_uri = Some(value);
        self
    }

    pub fn insert<V: Serialize>(&mut self, key: impl ToString, value: V) -> &mut Problem {
        self.body.insert(
            key.to_string(),
            serde_json::to_value(value).expect("data must be JSON serializable"),
        );
        self
    }
}

impl Display for Problem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.title)
    }
}

impl std::error::Error for Problem {}

impl<'r> Responder<'r, 'static> for Problem {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let mut body = self.body;

        // Following are required by rfc7807
        body.insert(String::from("type"), Value::from(self.type_uri));
        body.insert(String::from("title"), Value::from(self.title));

        // Optional parameters as specified by rfc7807
        if let Some(detail) = self.detail {
            body.insert(String::from("detail"), Value::from(detail));
        }
        body.insert(String::from("status"), Value::from(self.status.code));
        if let Some(instance) = self.instance_uri {
            body.insert(String::from("instance"), Value::from(instance));
        }

        let body_string = serde_json::to_string(&body)
            .expect("JSON map keys and values must be JSON serializable");

        Response::build()
            .status(self.status)
            .header(ContentType::new("application", "problem+json"))
            .raw_header("Content-Language", "en")
            .sized_body(body_string.len(), Cursor::new(body_string))
            .ok()
    }
}

pub mod problems {
    use crate::resp::problem::Problem;
    use rocket::http::Status;

    pub const INVALID_CAPACITY: &str = "/problems/invalid-capacity";
    pub const EMPTY_COURSE_CODE: &str = "/problems/empty-course-code";
    pub const SEQUENCE_EXHAUSTED: &str = "/problems/sequence-exhausted";
    pub const NO_UPCOMING_PERIOD: &str = "/problems/no-upcoming-period";

    #[inline]
    pub fn parse_problem() -> Problem {
        Problem::new_untyped(
            Status::BadRequest,
            "There was a problem parsing part of the request.",
        )
    }

    #[inline]
    pub fn unprocessable_problem() -> Problem {
        Problem::new_untyped(
            Status::UnprocessableEntity,
            "Request body doesn't match the expected shape.",
        )
    }

    #[inline]
    pub fn no_upcoming_period() -> Problem {
        Problem::new(
            Status::NotFound,
            NO_UPCOMING_PERIOD,
            "None of the supplied periods is upcoming.",
        )
    }
}

impl From<AssignError> for Problem {
    fn from(e: AssignError) -> Self {
        match &e {
            AssignError::InvalidCapacity(size) => problems_for(
                problems::INVALID_CAPACITY,
                "Class size is out of range.",
                &e,
            )
            .insert("class_size", size)
            .clone(),
            AssignError::EmptyNameDerivation { course, .. } => problems_for(
                problems::EMPTY_COURSE_CODE,
                "Course name can't be turned into a class code.",
                &e,
            )
            .insert("course", course)
            .clone(),
            AssignError::SequenceExhausted { course } => problems_for(
                problems::SEQUENCE_EXHAUSTED,
                "Course has no class numbers left.",
                &e,
            )
            .insert("course", course)
            .clone(),
        }
    }
}

fn problems_for(type_uri: &str, title: &str, e: &AssignError) -> Problem {
    let mut problem = Problem::new(Status::UnprocessableEntity, type_uri, title);
    problem.detail(e);
    problem
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn invalid_capacity_is_unprocessable() {
        let problem = Problem::from(AssignError::InvalidCapacity(0));
        assert_eq!(problem.status, Status::UnprocessableEntity);
        assert_eq!(problem.type_uri, problems::INVALID_CAPACITY);
        assert_eq!(problem.body.get("class_size"), Some(&Value::from(0)));
        assert!(problem.detail.unwrap().contains("at least 1"));
    }

    #[test]
    fn empty_code_names_course() {
        let course = Uuid::new_v4();
        let problem = Problem::from(AssignError::EmptyNameDerivation { course, name: None });
        assert_eq!(problem.type_uri, problems::EMPTY_COURSE_CODE);
        assert_eq!(
            problem.body.get("course"),
            Some(&Value::from(course.to_string()))
        );
    }

    #[test]
    fn exhausted_sequence_is_unprocessable() {
        let course = Uuid::new_v4();
        let problem = Problem::from(AssignError::SequenceExhausted { course });
        assert_eq!(problem.status, Status::UnprocessableEntity);
        assert_eq!(problem.type_uri, problems::SEQUENCE_EXHAUSTED);
    }
}
