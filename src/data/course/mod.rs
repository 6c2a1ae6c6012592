use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::assign::code::derive_code;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Course {
    pub id: Uuid,
    /// Display name, e.g. "Web Programming".
    pub name: String,
}

impl Course {
    pub fn new(id: Uuid, name: impl ToString) -> Course {
        Course {
            id,
            name: name.to_string(),
        }
    }

    pub fn short_code(&self) -> String {
        derive_code(&self.name)
    }
}

/// Course lookup by id.
#[derive(Debug, Default)]
pub struct CourseCatalog<'a> {
    courses: HashMap<Uuid, &'a Course>,
}

impl<'a> CourseCatalog<'a> {
    pub fn new(courses: &'a [Course]) -> Self {
        let mut catalog = CourseCatalog::default();
        for course in courses {
            // first entry wins for repeated ids
            catalog.courses.entry(course.id).or_insert(course);
        }
        catalog
    }

    pub fn get(&self, id: &Uuid) -> Option<&'a Course> {
        self.courses.get(id).copied()
    }

    pub fn name(&self, id: &Uuid) -> Option<&'a str> {
        self.get(id).map(|course| course.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_keeps_first_duplicate() {
        let id = Uuid::new_v4();
        let courses = vec![Course::new(id, "Web Programming"), Course::new(id, "Other")];
        let catalog = CourseCatalog::new(&courses);
        assert_eq!(catalog.name(&id), Some("Web Programming"));
        assert_eq!(catalog.get(&Uuid::new_v4()), None);
    }

    #[test]
    fn short_code_from_name() {
        assert_eq!(Course::new(Uuid::new_v4(), "Text Programming").short_code(), "TEX");
    }
}
