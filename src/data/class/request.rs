use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::SequenceMap;
use crate::data::course::Course;
use crate::data::enrollment::CourseEnrollment;
use crate::data::period::{next_period, Period};
use crate::data::schedule::{InstructorSlot, SlotFilter};

/// Slots and the criteria used to choose between them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ScheduleQueryData {
    #[serde(default)]
    pub slots: Vec<InstructorSlot>,
    #[serde(default)]
    pub filter: SlotFilter,
    /// When set without a period filter, only slots of the next upcoming
    /// period are considered.
    #[serde(default)]
    pub periods: Vec<Period>,
    /// Reference date for picking the upcoming period, defaults to today (UTC).
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Outcome of narrowing slots down.
pub enum SlotSelection<'a> {
    Slots(Vec<&'a InstructorSlot>),
    NoUpcomingPeriod,
}

impl ScheduleQueryData {
    pub fn select(&self) -> SlotSelection<'_> {
        let mut filter = self.filter.clone();

        if filter.period.is_none() && !self.periods.is_empty() {
            let today = self.today.unwrap_or_else(|| Utc::now().date_naive());
            match next_period(&self.periods, today) {
                Some(period) => {
                    tracing::debug!(period = %period.name, "Limiting slots to upcoming period.");
                    filter.period = Some(period.id);
                }
                None => return SlotSelection::NoUpcomingPeriod,
            }
        }

        SlotSelection::Slots(filter.apply(&self.slots))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct GenerateClassesData {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub enrollments: Vec<CourseEnrollment>,
    /// Maximum students per class, the configured size when absent.
    #[serde(default)]
    pub class_size: Option<i64>,
    /// Classes already generated per course.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub sequence: SequenceMap,

    #[serde(flatten)]
    pub schedule: ScheduleQueryData,
}
