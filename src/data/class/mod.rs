use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::data::enrollment::CourseEnrollment;

pub mod request;

/// Number of classes already generated per course, keyed by course id.
pub type SequenceMap = BTreeMap<Uuid, u32>;

/// A generated roster awaiting operator review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProposedClass {
    /// Course code followed by the zero padded sequence, e.g. `WEB001`.
    pub name: String,
    pub course_id: Uuid,
    pub slot_id: Uuid,
    pub instructor_id: Uuid,
    pub sequence: u32,
    pub enrollments: Vec<CourseEnrollment>,
}

impl ProposedClass {
    pub fn enrollment_ids(&self) -> Vec<Uuid> {
        self.enrollments.iter().map(|enrollment| enrollment.id).collect()
    }

    pub fn len(&self) -> usize {
        self.enrollments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enrollments.is_empty()
    }
}

/// Result of a single generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Assignment {
    pub classes: Vec<ProposedClass>,
    /// Running counts to pass into the next run.
    #[schema(value_type = Object)]
    pub sequence: SequenceMap,
    /// Enrollments that didn't fit into any class, in input order.
    pub unassigned: Vec<Uuid>,
}

pub fn class_name(code: &str, sequence: u32) -> String {
    format!("{}{:03}", code, sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_zero_padded() {
        assert_eq!(class_name("WEB", 1), "WEB001");
        assert_eq!(class_name("MOB", 42), "MOB042");
        assert_eq!(class_name("TEX", 1234), "TEX1234");
    }
}
