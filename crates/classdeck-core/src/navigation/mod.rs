//! Navigation rules for the dashboard shell.

use crate::auth::TeacherClassifier;

mod navbar;
mod search;
mod sidebar;

pub use navbar::{AccountMenuConfig, NavbarAction, NavbarAffordances};
pub use search::SearchQuery;
pub use sidebar::{GUEST_ROUTES, RouteIcon, SidebarRoute, TEACHER_ROUTES};

/// The root path, which is also the search page.
pub const ROOT_PATH: &str = "/";

/// The prefix shared by all pages of the teacher section.
pub const TEACHER_PREFIX: &str = "/teacher";

/// The segment contained in the path of any course page.
pub const COURSE_SEGMENT: &str = "/courses";

/// The course list of the teacher section.
pub const TEACHER_COURSES_PATH: &str = "/teacher/courses";

/// The per-render view of the current route and identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationContext {
    /// The current URL path.
    current_path: String,
    /// The authenticated user id.
    user_id: Option<String>,
    /// Whether the user is classified as a teacher.
    is_teacher: bool,
}

impl NavigationContext {
    /// Creates a new instance, classifying the user with the supplied classifier.
    /// Any query string or fragment in the path is dropped.
    pub fn new<C>(current_path: impl Into<String>, user_id: Option<&str>, classifier: &C) -> Self
    where
        C: TeacherClassifier + ?Sized,
    {
        let mut current_path = current_path.into();
        if let Some(index) = current_path.find(|c: char| c == '?' || c == '#') {
            current_path.truncate(index);
        }
        Self {
            current_path,
            user_id: user_id.map(|s| s.to_owned()),
            is_teacher: classifier.is_teacher(user_id),
        }
    }

    /// Returns the current path.
    #[inline]
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Returns the user id.
    #[inline]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Returns `true` if the user is signed in.
    #[inline]
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Returns `true` if the user is a teacher.
    #[inline]
    pub fn is_teacher(&self) -> bool {
        self.is_teacher
    }

    /// Returns `true` if the current path is the search page.
    #[inline]
    pub fn is_search_page(&self) -> bool {
        is_search_page(&self.current_path)
    }

    /// Returns `true` if the current path belongs to the teacher section.
    #[inline]
    pub fn is_teacher_page(&self) -> bool {
        is_teacher_page(&self.current_path)
    }

    /// Returns `true` if the current path is a course page.
    #[inline]
    pub fn is_course_page(&self) -> bool {
        is_course_page(&self.current_path)
    }
}

/// Returns `true` if the path is the search page.
#[inline]
pub fn is_search_page(path: &str) -> bool {
    path == ROOT_PATH
}

/// Returns `true` if the path belongs to the teacher section.
#[inline]
pub fn is_teacher_page(path: &str) -> bool {
    path.starts_with(TEACHER_PREFIX)
}

/// Returns `true` if the path is a course page.
#[inline]
pub fn is_course_page(path: &str) -> bool {
    path.contains(COURSE_SEGMENT)
}

#[cfg(test)]
mod tests {
    use super::NavigationContext;
    use crate::auth::TeacherRoster;

    #[test]
    fn it_derives_teacher_flag() {
        let roster = TeacherRoster::new(["u1"]);
        let context = NavigationContext::new("/teacher/analytics", Some("u1"), &roster);
        assert!(context.is_authenticated());
        assert!(context.is_teacher());
        assert!(context.is_teacher_page());
        assert!(!context.is_course_page());
        assert!(!context.is_search_page());

        let context = NavigationContext::new("/", None, &roster);
        assert!(!context.is_authenticated());
        assert!(!context.is_teacher());
        assert!(context.is_search_page());
        assert_eq!(context.user_id(), None);
    }

    #[test]
    fn it_uses_dynamic_classifiers() {
        let classifier: &dyn crate::auth::TeacherClassifier = &TeacherRoster::new(["u2"]);
        let context = NavigationContext::new("/courses/7/chapters/1", Some("u2"), classifier);
        assert!(context.is_teacher());
        assert!(context.is_course_page());
        assert_eq!(context.current_path(), "/courses/7/chapters/1");
    }

    #[test]
    fn it_drops_query_strings() {
        let roster = TeacherRoster::default();
        let context = NavigationContext::new("/?title=rust&categoryId=c1", None, &roster);
        assert_eq!(context.current_path(), "/");
        assert!(context.is_search_page());

        let context = NavigationContext::new("/browse#top", None, &roster);
        assert_eq!(context.current_path(), "/browse");
    }
}
