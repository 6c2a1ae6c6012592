use std::collections::BTreeMap;

use rocket::{Build, Request, Rocket, Route};

pub mod class;
pub mod course;

use class::*;
use course::*;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    data::{
        class::{request as cd, Assignment, ProposedClass},
        course::Course,
        enrollment::CourseEnrollment,
        period::Period,
        schedule::{InstructorSlot, SlotFilter},
    },
    resp::problem::{problems, Problem},
};

#[derive(OpenApi)]
#[openapi(
    paths(class_generate, class_schedules, course_code),
    components(schemas(
        Course,
        CourseEnrollment,
        InstructorSlot,
        SlotFilter,
        Period,
        ProposedClass,
        Assignment,
        cd::GenerateClassesData,
        cd::ScheduleQueryData,
        CourseCodeResponse,
        Problem
    )),
    modifiers(&V1_PREFIX)
)]
pub struct ApiDocV1;

pub struct PathPrefix(pub &'static str);
static V1_PREFIX: PathPrefix = PathPrefix("/api/v1");

impl utoipa::Modify for PathPrefix {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let mut new_paths = BTreeMap::new();

        for (path, item) in std::mem::take(&mut openapi.paths.paths) {
            new_paths.insert(self.0.to_string() + &path, item);
        }

        openapi.paths.paths = new_paths;
    }
}

pub fn api_v1() -> Vec<Route> {
    routes![class_generate, class_schedules, course_code]
}

#[catch(400)]
fn bad_request(_: &Request<'_>) -> Problem {
    problems::parse_problem()
}

#[catch(422)]
fn unprocessable(_: &Request<'_>) -> Problem {
    problems::unprocessable_problem()
}

pub fn mount_api(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket
        .mount("/api/v1", api_v1())
        .register("/api/v1", catchers![bad_request, unprocessable])
        .mount(
            "/",
            SwaggerUi::new("/swagger/<_..>").url("/api/v1/openapi.json", ApiDocV1::openapi()),
        )
}
