//! Role classification for authenticated users.

use crate::{extension::TomlTableExt, state::State};
use std::collections::BTreeSet;

/// Environment variable holding the user id of a single teacher.
pub const TEACHER_ID_VAR: &str = "CLASSDECK_TEACHER_ID";

/// A capability to decide whether a user may enter the teacher mode.
///
/// An absent user id stands for an unauthenticated visitor.
///
/// # Examples
///
/// ```rust
/// use classdeck_core::auth::TeacherClassifier;
///
/// let classifier = |user_id: &str| user_id.starts_with("staff_");
/// assert!(classifier.is_teacher(Some("staff_42")));
/// assert!(!classifier.is_teacher(None));
/// ```
pub trait TeacherClassifier {
    /// Returns `true` if the user is a teacher.
    fn is_teacher(&self, user_id: Option<&str>) -> bool;
}

impl<F> TeacherClassifier for F
where
    F: Fn(&str) -> bool,
{
    #[inline]
    fn is_teacher(&self, user_id: Option<&str>) -> bool {
        user_id.is_some_and(self)
    }
}

/// An allow-list of teacher user ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherRoster {
    /// Teacher user ids.
    user_ids: BTreeSet<String>,
}

impl TeacherRoster {
    /// Creates a new instance with the user ids.
    pub fn new<I, S>(user_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut roster = Self::default();
        for user_id in user_ids {
            roster.add(user_id);
        }
        roster
    }

    /// Creates a new instance from the `[teacher]` config and the `CLASSDECK_TEACHER_ID` variable.
    pub fn from_state(state: &State) -> Self {
        let mut roster = state
            .get_config("teacher")
            .and_then(|config| config.get_str_array("user-ids"))
            .map(Self::new)
            .unwrap_or_default();
        if let Ok(user_id) = std::env::var(TEACHER_ID_VAR) {
            roster.add(user_id);
        }
        if roster.is_empty() {
            tracing::warn!(env = state.env().as_str(), "no teacher has been configured");
        }
        roster
    }

    /// Adds a user id to the roster, ignoring blank ids.
    pub fn add(&mut self, user_id: impl Into<String>) {
        let user_id = user_id.into();
        let user_id = user_id.trim();
        if !user_id.is_empty() {
            self.user_ids.insert(user_id.to_owned());
        }
    }

    /// Returns `true` if the roster contains the user id.
    #[inline]
    pub fn contains(&self, user_id: &str) -> bool {
        self.user_ids.contains(user_id)
    }

    /// Returns `true` if no teacher has been registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.user_ids.is_empty()
    }

    /// Returns the number of teachers.
    #[inline]
    pub fn len(&self) -> usize {
        self.user_ids.len()
    }
}

impl TeacherClassifier for TeacherRoster {
    #[inline]
    fn is_teacher(&self, user_id: Option<&str>) -> bool {
        user_id.is_some_and(|user_id| self.contains(user_id))
    }
}
