use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AssignError;

/// Maximum number of characters in a derived course code.
pub const CODE_LENGTH: usize = 3;

/// Derives a short course code from a display name.
///
/// The name is uppercased, everything that isn't an ASCII letter or digit is
/// dropped and the result is cut to [`CODE_LENGTH`] characters. Names without
/// any usable characters produce an empty code.
pub fn derive_code(name: &str) -> String {
    name.to_uppercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(CODE_LENGTH)
        .collect()
}

/// What to do when a course yields an empty code.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyCodePolicy {
    /// Use the leading characters of the course id instead.
    Fallback,
    /// Fail with [`AssignError::EmptyNameDerivation`].
    Reject,
}

impl Default for EmptyCodePolicy {
    fn default() -> Self {
        EmptyCodePolicy::Fallback
    }
}

impl EmptyCodePolicy {
    /// Resolves the code for `course`. `name` is `None` when the course isn't
    /// present in the catalog.
    pub fn resolve(self, course: Uuid, name: Option<&str>) -> Result<String, AssignError> {
        let code = name.map(derive_code).unwrap_or_default();
        if !code.is_empty() {
            return Ok(code);
        }

        match self {
            EmptyCodePolicy::Fallback => {
                let code = fallback_code(course);
                tracing::warn!(%course, %code, "Course name yields no code, using id prefix.");
                Ok(code)
            }
            EmptyCodePolicy::Reject => Err(AssignError::EmptyNameDerivation {
                course,
                name: name.map(str::to_string),
            }),
        }
    }
}

fn fallback_code(course: Uuid) -> String {
    course
        .simple()
        .to_string()
        .to_uppercase()
        .chars()
        .take(CODE_LENGTH)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_leading_letters() {
        assert_eq!(derive_code("Web Programming"), "WEB");
        assert_eq!(derive_code("Mobile Programming"), "MOB");
    }

    #[test]
    fn strips_symbols_and_spaces() {
        assert_eq!(derive_code("c++ basics"), "CBA");
        assert_eq!(derive_code("  3D modelling"), "3DM");
        assert_eq!(derive_code("A-1"), "A1");
    }

    #[test]
    fn drops_non_ascii() {
        assert_eq!(derive_code("Über Kurs"), "BER");
        // uppercasing happens first, ß becomes SS
        assert_eq!(derive_code("ß"), "SS");
    }

    #[test]
    fn empty_for_symbol_only_names() {
        assert_eq!(derive_code(""), "");
        assert_eq!(derive_code("!!! ???"), "");
    }

    #[test]
    fn fallback_uses_course_id() {
        let id = Uuid::parse_str("a1c09573-3b08-4a14-a822-9b17f824efa5").unwrap();
        let code = EmptyCodePolicy::Fallback.resolve(id, Some("***")).unwrap();
        assert_eq!(code, "A1C");

        let missing = EmptyCodePolicy::Fallback.resolve(id, None).unwrap();
        assert_eq!(missing, "A1C");
    }

    #[test]
    fn reject_reports_course() {
        let id = Uuid::new_v4();
        let err = EmptyCodePolicy::Reject.resolve(id, Some("--")).unwrap_err();
        assert_eq!(
            err,
            AssignError::EmptyNameDerivation {
                course: id,
                name: Some("--".to_string())
            }
        );
    }

    #[test]
    fn usable_names_ignore_policy() {
        let id = Uuid::new_v4();
        assert_eq!(
            EmptyCodePolicy::Reject.resolve(id, Some("Web")).unwrap(),
            "WEB"
        );
    }
}
