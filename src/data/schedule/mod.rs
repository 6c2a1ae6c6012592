use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// An instructor's open teaching slot for a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InstructorSlot {
    pub id: Uuid,
    pub instructor_id: Uuid,
    /// Courses the instructor is qualified to teach, in priority order.
    #[serde(default)]
    pub courses: Vec<Uuid>,

    #[serde(default)]
    pub period_id: Option<Uuid>,
    #[serde(default)]
    pub day_id: Option<Uuid>,
    #[serde(default)]
    pub shift_id: Option<Uuid>,
    /// Class already occupying this slot.
    #[serde(default)]
    pub class_id: Option<Uuid>,
}

impl InstructorSlot {
    pub fn new(instructor_id: Uuid, courses: Vec<Uuid>) -> Self {
        InstructorSlot {
            id: Uuid::new_v4(),
            instructor_id,
            courses,
            period_id: None,
            day_id: None,
            shift_id: None,
            class_id: None,
        }
    }

    pub fn teaches(&self, course: &Uuid) -> bool {
        self.courses.contains(course)
    }

    pub fn is_booked(&self) -> bool {
        self.class_id.is_some()
    }
}

/// Criteria for picking the slots classes get generated for.
///
/// Unset criteria match everything. Booked slots are excluded unless
/// `include_booked` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SlotFilter {
    #[serde(default)]
    pub period: Option<Uuid>,
    #[serde(default)]
    pub day: Option<Uuid>,
    #[serde(default)]
    pub shift: Option<Uuid>,
    #[serde(default)]
    pub course: Option<Uuid>,
    #[serde(default)]
    pub include_booked: bool,
}

impl SlotFilter {
    pub fn matches(&self, slot: &InstructorSlot) -> bool {
        fn criterion(wanted: Option<Uuid>, actual: Option<Uuid>) -> bool {
            wanted.map_or(true, |wanted| actual == Some(wanted))
        }

        (self.include_booked || !slot.is_booked())
            && criterion(self.period, slot.period_id)
            && criterion(self.day, slot.day_id)
            && criterion(self.shift, slot.shift_id)
            && self.course.map_or(true, |course| slot.teaches(&course))
    }

    pub fn apply<'s>(&self, slots: &'s [InstructorSlot]) -> Vec<&'s InstructorSlot> {
        slots.iter().filter(|slot| self.matches(slot)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_skips_booked_slots() {
        let open = InstructorSlot::new(Uuid::new_v4(), vec![]);
        let mut booked = InstructorSlot::new(Uuid::new_v4(), vec![]);
        booked.class_id = Some(Uuid::new_v4());

        let slots = vec![open.clone(), booked.clone()];
        assert_eq!(SlotFilter::default().apply(&slots), vec![&open]);

        let all = SlotFilter {
            include_booked: true,
            ..Default::default()
        };
        assert_eq!(all.apply(&slots).len(), 2);
    }

    #[test]
    fn matches_period_day_and_shift() {
        let period = Uuid::new_v4();
        let day = Uuid::new_v4();
        let shift = Uuid::new_v4();

        let mut slot = InstructorSlot::new(Uuid::new_v4(), vec![]);
        slot.period_id = Some(period);
        slot.day_id = Some(day);
        slot.shift_id = Some(shift);

        let filter = SlotFilter {
            period: Some(period),
            day: Some(day),
            shift: Some(shift),
            ..Default::default()
        };
        assert!(filter.matches(&slot));

        let other_day = SlotFilter {
            day: Some(Uuid::new_v4()),
            ..filter.clone()
        };
        assert!(!other_day.matches(&slot));

        slot.shift_id = None;
        assert!(!filter.matches(&slot));
    }

    #[test]
    fn course_criterion_checks_qualification() {
        let web = Uuid::new_v4();
        let mobile = Uuid::new_v4();
        let slot = InstructorSlot::new(Uuid::new_v4(), vec![web]);

        let wants_web = SlotFilter {
            course: Some(web),
            ..Default::default()
        };
        let wants_mobile = SlotFilter {
            course: Some(mobile),
            ..Default::default()
        };
        assert!(wants_web.matches(&slot));
        assert!(!wants_mobile.matches(&slot));
    }
}
