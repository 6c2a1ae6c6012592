//! Greedy generation of class rosters from waiting enrollments and open
//! instructor slots.
//!
//! Slots are processed in the order given. Each slot takes the first course
//! its instructor teaches that still has waiting students and fills a class
//! with up to `class_size` of them, earliest enrollment first. There's no
//! backtracking, a slot commits to the first eligible course.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;
use crate::data::class::{class_name, Assignment, ProposedClass, SequenceMap};
use crate::data::course::{Course, CourseCatalog};
use crate::data::enrollment::CourseEnrollment;
use crate::data::schedule::InstructorSlot;
use crate::error::AssignError;

pub mod code;

use code::EmptyCodePolicy;

/// How a class size below 1 is handled.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityPolicy {
    /// Fail with [`AssignError::InvalidCapacity`].
    Reject,
    /// Raise the size to 1.
    Clamp,
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        CapacityPolicy::Reject
    }
}

/// Order in which a slot's courses are tried.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseOrder {
    /// As listed in [`InstructorSlot::courses`].
    Listed,
    /// Ascending course id.
    CourseId,
}

impl Default for CourseOrder {
    fn default() -> Self {
        CourseOrder::Listed
    }
}

impl CourseOrder {
    fn arrange(self, courses: &[Uuid]) -> Vec<Uuid> {
        let mut courses = courses.to_vec();
        if let CourseOrder::CourseId = self {
            courses.sort();
        }
        courses
    }
}

/// Validated class size ceiling, always at least 1.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct ClassSize(usize);

impl ClassSize {
    pub fn new(size: i64, policy: CapacityPolicy) -> Result<ClassSize, AssignError> {
        if size >= 1 {
            return Ok(ClassSize(size as usize));
        }

        match policy {
            CapacityPolicy::Reject => Err(AssignError::InvalidCapacity(size)),
            CapacityPolicy::Clamp => {
                tracing::warn!(size, "Class size below 1, clamping.");
                Ok(ClassSize(1))
            }
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

pub struct ClassAssigner {
    class_size: ClassSize,
    course_order: CourseOrder,
    empty_code: EmptyCodePolicy,
}

impl ClassAssigner {
    pub fn new(class_size: ClassSize) -> Self {
        ClassAssigner {
            class_size,
            course_order: CourseOrder::default(),
            empty_code: EmptyCodePolicy::default(),
        }
    }

    /// Builds an assigner using configured policies. `class_size` overrides
    /// the configured size.
    pub fn from_config(config: &Config, class_size: Option<i64>) -> Result<Self, AssignError> {
        let size = ClassSize::new(
            class_size.unwrap_or(config.class_size),
            config.capacity_policy,
        )?;

        Ok(ClassAssigner::new(size)
            .with_course_order(config.course_order)
            .with_empty_code(config.empty_code_policy))
    }

    pub fn with_course_order(mut self, order: CourseOrder) -> Self {
        self.course_order = order;
        self
    }

    pub fn with_empty_code(mut self, policy: EmptyCodePolicy) -> Self {
        self.empty_code = policy;
        self
    }

    pub fn class_size(&self) -> ClassSize {
        self.class_size
    }

    /// Generates classes for `slots` from waiting `enrollments`.
    ///
    /// `sequence` holds how many classes each course already has, naming
    /// continues after it. The returned assignment carries the updated counts.
    pub fn assign<'a, S>(
        &self,
        courses: &[Course],
        enrollments: &[CourseEnrollment],
        slots: S,
        sequence: &SequenceMap,
    ) -> Result<Assignment, AssignError>
    where
        S: IntoIterator<Item = &'a InstructorSlot>,
    {
        let catalog = CourseCatalog::new(courses);

        let mut buckets: HashMap<Uuid, VecDeque<&CourseEnrollment>> = HashMap::new();
        let mut seen = HashSet::new();
        for enrollment in enrollments {
            if !seen.insert(enrollment.id) {
                tracing::debug!(enrollment = %enrollment.id, "Skipping repeated enrollment.");
                continue;
            }
            buckets
                .entry(enrollment.course_id)
                .or_default()
                .push_back(enrollment);
        }

        let slots: Vec<&InstructorSlot> = slots.into_iter().collect();

        // Resolve codes up front so naming problems fail before any class
        // exists. Only courses some slot could teach need one, walked in slot
        // order so the reported course doesn't depend on hashing.
        let mut codes = HashMap::new();
        for course in slots.iter().flat_map(|slot| slot.courses.iter()) {
            if codes.contains_key(course) || !buckets.contains_key(course) {
                continue;
            }
            let code = self.empty_code.resolve(*course, catalog.name(course))?;
            codes.insert(*course, code);
        }

        let mut sequence = sequence.clone();
        let mut classes = Vec::new();
        let mut used_slots = HashSet::new();

        for slot in slots {
            if !used_slots.insert(slot.id) {
                tracing::debug!(slot = %slot.id, "Slot listed twice, ignoring repeat.");
                continue;
            }

            let chosen = self
                .course_order
                .arrange(&slot.courses)
                .into_iter()
                .find(|course| buckets.get(course).map_or(false, |b| !b.is_empty()))
                .and_then(|course| buckets.get_mut(&course).map(|bucket| (course, bucket)));

            let (course, bucket) = match chosen {
                Some(chosen) => chosen,
                None => {
                    tracing::debug!(slot = %slot.id, "No waiting students for slot.");
                    continue;
                }
            };

            let running = sequence.entry(course).or_insert(0);
            *running = running
                .checked_add(1)
                .ok_or(AssignError::SequenceExhausted { course })?;

            let count = self.class_size.get().min(bucket.len());
            let roster: Vec<CourseEnrollment> = bucket.drain(..count).cloned().collect();

            let class = ProposedClass {
                name: class_name(&codes[&course], *running),
                course_id: course,
                slot_id: slot.id,
                instructor_id: slot.instructor_id,
                sequence: *running,
                enrollments: roster,
            };
            tracing::debug!(class = %class.name, students = class.len(), "Proposed class.");
            classes.push(class);
        }

        let waiting: HashSet<Uuid> = buckets.values().flatten().map(|e| e.id).collect();
        let mut reported = HashSet::new();
        let unassigned: Vec<Uuid> = enrollments
            .iter()
            .map(|enrollment| enrollment.id)
            .filter(|id| waiting.contains(id) && reported.insert(*id))
            .collect();

        tracing::info!(
            classes = classes.len(),
            unassigned = unassigned.len(),
            "Generated classes."
        );

        Ok(Assignment {
            classes,
            sequence,
            unassigned,
        })
    }
}

/// Runs a single generation with default policies.
pub fn assign_classes(
    courses: &[Course],
    enrollments: &[CourseEnrollment],
    slots: &[InstructorSlot],
    class_size: i64,
    sequence: &SequenceMap,
) -> Result<Assignment, AssignError> {
    let size = ClassSize::new(class_size, CapacityPolicy::default())?;
    ClassAssigner::new(size).assign(courses, enrollments, slots, sequence)
}
