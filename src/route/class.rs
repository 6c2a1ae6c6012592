use crate::assign::ClassAssigner;
use crate::config::Config;
use crate::data::class::request::{GenerateClassesData, ScheduleQueryData, SlotSelection};
use crate::data::class::Assignment;
use crate::data::schedule::InstructorSlot;
use crate::resp::problem::problems::no_upcoming_period;
use crate::resp::problem::Problem;
use rocket::serde::json::Json;
use rocket::State;

/// Generate class rosters from waiting enrollments
///
/// Nothing is stored, the proposal is returned for review.
#[utoipa::path(
    request_body = GenerateClassesData,
    responses(
        (status = 200, description = "Proposed classes", body = Assignment),
        (status = 404, description = "Periods given but none is upcoming", body = Problem),
        (status = 422, description = "Unusable class size or course name", body = Problem),
    )
)]
#[post("/class/generate", format = "application/json", data = "<request>")]
#[tracing::instrument(skip(request, config))]
pub fn class_generate(
    request: Json<GenerateClassesData>,
    config: &State<Config>,
) -> Result<Json<Assignment>, Problem> {
    let request = request.into_inner();
    let assigner = ClassAssigner::from_config(config, request.class_size)?;

    let slots = match request.schedule.select() {
        SlotSelection::Slots(slots) => slots,
        SlotSelection::NoUpcomingPeriod => {
            return Err(no_upcoming_period()
                .instance_uri("/api/v1/class/generate".to_string())
                .clone())
        }
    };

    let assignment = assigner.assign(
        &request.courses,
        &request.enrollments,
        slots,
        &request.sequence,
    )?;

    Ok(Json(assignment))
}

/// List instructor slots classes can be generated for
#[utoipa::path(
    request_body = ScheduleQueryData,
    responses(
        (status = 200, description = "Matching slots in input order", body = Vec<InstructorSlot>),
        (status = 404, description = "Periods given but none is upcoming", body = Problem),
    )
)]
#[post("/class/schedules", format = "application/json", data = "<query>")]
#[tracing::instrument(skip(query))]
pub fn class_schedules(query: Json<ScheduleQueryData>) -> Result<Json<Vec<InstructorSlot>>, Problem> {
    match query.select() {
        SlotSelection::Slots(slots) => Ok(Json(slots.into_iter().cloned().collect())),
        SlotSelection::NoUpcomingPeriod => Err(no_upcoming_period()
            .instance_uri("/api/v1/class/schedules".to_string())
            .clone()),
    }
}
