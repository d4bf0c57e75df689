use super::{NavigationContext, ROOT_PATH, TEACHER_COURSES_PATH};
use crate::auth::TeacherClassifier;
use std::fmt;

/// The action button shown at the right side of the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavbarAction {
    /// Leaves the teacher section or a course page.
    Exit,
    /// Enters the teacher section.
    TeacherMode,
}

impl NavbarAction {
    /// Returns the button label.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Exit => "Exit",
            Self::TeacherMode => "Teacher mode",
        }
    }

    /// Returns the link target.
    #[inline]
    pub fn href(&self) -> &'static str {
        match self {
            Self::Exit => ROOT_PATH,
            Self::TeacherMode => TEACHER_COURSES_PATH,
        }
    }
}

impl fmt::Display for NavbarAction {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.label().fmt(f)
    }
}

/// Settings handed over to the identity provider's account menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountMenuConfig {
    /// Where to go once the user has signed out.
    after_sign_out_url: &'static str,
}

impl AccountMenuConfig {
    /// Returns the redirect target after signing out.
    #[inline]
    pub fn after_sign_out_url(&self) -> &'static str {
        self.after_sign_out_url
    }
}

impl Default for AccountMenuConfig {
    #[inline]
    fn default() -> Self {
        Self {
            after_sign_out_url: ROOT_PATH,
        }
    }
}

/// The affordances of the navbar for a single render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarAffordances {
    /// Whether the search input is mounted.
    search: bool,
    /// The action button, if any.
    action: Option<NavbarAction>,
    /// The account menu, which is always present.
    account_menu: AccountMenuConfig,
}

impl NavbarAffordances {
    /// Selects the affordances for the path and the user.
    ///
    /// The search input is shown on the root path only. The `Exit` action wins
    /// over the `TeacherMode` action, so a teacher visiting a course page sees `Exit`.
    pub fn select<C>(path: &str, user_id: Option<&str>, classifier: &C) -> Self
    where
        C: TeacherClassifier + ?Sized,
    {
        let context = NavigationContext::new(path, user_id, classifier);
        Self::from_context(&context)
    }

    /// Selects the affordances for the navigation context.
    pub fn from_context(context: &NavigationContext) -> Self {
        let action = if context.is_teacher_page() || context.is_course_page() {
            Some(NavbarAction::Exit)
        } else if context.is_teacher() {
            Some(NavbarAction::TeacherMode)
        } else {
            None
        };
        let affordances = Self {
            search: context.is_search_page(),
            action,
            account_menu: AccountMenuConfig::default(),
        };
        tracing::debug!(
            path = context.current_path(),
            authenticated = context.is_authenticated(),
            search = affordances.search,
            action = action.map(|action| action.label()),
            "navbar affordances selected",
        );
        affordances
    }

    /// Returns `true` if the search input should be shown.
    #[inline]
    pub fn shows_search(&self) -> bool {
        self.search
    }

    /// Returns the action button.
    #[inline]
    pub fn action(&self) -> Option<NavbarAction> {
        self.action
    }

    /// Returns the account menu settings.
    #[inline]
    pub fn account_menu(&self) -> AccountMenuConfig {
        self.account_menu
    }
}
