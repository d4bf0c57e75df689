use super::{AccountMenu, MobileSidebar, SearchInput};
use crate::{auth::SharedClassifier, class::Class, form::Button};
use classdeck_core::{
    SharedString,
    navigation::{NavbarAction, NavbarAffordances},
};
use dioxus::prelude::*;
use dioxus_free_icons::icons::bs_icons::BsBoxArrowRight;
use dioxus_router::components::Link;

/// The top navigation bar of the dashboard.
pub fn Navbar(props: NavbarProps) -> Element {
    rsx! {
        nav {
            class: props.class,
            MobileSidebar { path: props.path.clone(), name: props.name }
            NavbarRoutes {
                path: props.path,
                user_id: props.user_id,
                classifier: props.classifier,
                on_sign_out: props.on_sign_out,
            }
        }
    }
}

/// The [`Navbar`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct NavbarProps {
    /// The class attribute for the component.
    #[props(into, default = "navbar")]
    pub class: Class,
    /// The current path, optionally followed by a query string.
    #[props(into)]
    pub path: String,
    /// The signed-in user id.
    #[props(into)]
    pub user_id: Option<String>,
    /// The classifier deciding whether the user is a teacher.
    #[props(default)]
    pub classifier: SharedClassifier,
    /// The dashboard name rendered in the mobile sidebar.
    #[props(into, default = "classdeck")]
    pub name: SharedString,
    /// An event handler to be called with the user id when signing out.
    pub on_sign_out: Option<EventHandler<String>>,
}

/// The search input, the action button and the account menu of the navbar.
pub fn NavbarRoutes(props: NavbarRoutesProps) -> Element {
    let affordances =
        NavbarAffordances::select(&props.path, props.user_id.as_deref(), &props.classifier);
    rsx! {
        if affordances.shows_search() {
            div {
                class: "navbar-search is-hidden-mobile",
                SearchInput { path: props.path.clone() }
            }
        }
        div {
            class: props.class,
            match affordances.action() {
                Some(action @ NavbarAction::Exit) => rsx! {
                    Link {
                        to: action.href(),
                        Button {
                            size: "sm",
                            span {
                                class: "icon mr-2",
                                dioxus_free_icons::Icon { icon: BsBoxArrowRight, width: 16, height: 16 }
                            }
                            "{action}"
                        }
                    }
                },
                Some(action @ NavbarAction::TeacherMode) => rsx! {
                    Link {
                        to: action.href(),
                        Button { size: "sm", "{action}" }
                    }
                },
                None => rsx! {},
            }
            AccountMenu {
                user_id: props.user_id,
                config: affordances.account_menu(),
                on_sign_out: props.on_sign_out,
            }
        }
    }
}

/// The [`NavbarRoutes`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct NavbarRoutesProps {
    /// The class attribute for the component.
    #[props(into, default = "navbar-actions")]
    pub class: Class,
    /// The current path, optionally followed by a query string.
    #[props(into)]
    pub path: String,
    /// The signed-in user id.
    #[props(into)]
    pub user_id: Option<String>,
    /// The classifier deciding whether the user is a teacher.
    #[props(default)]
    pub classifier: SharedClassifier,
    /// An event handler to be called with the user id when signing out.
    pub on_sign_out: Option<EventHandler<String>>,
}

#[cfg(test)]
mod tests {
    use super::{Navbar, NavbarRoutes};
    use crate::{auth::SharedClassifier, testing::render};
    use classdeck_core::auth::TeacherRoster;
    use dioxus::prelude::*;

    fn classifier() -> SharedClassifier {
        SharedClassifier::new(TeacherRoster::new(["u1"]))
    }

    fn guest_page(path: String) -> Element {
        rsx! { NavbarRoutes { path, classifier: classifier() } }
    }

    fn student_page(path: String) -> Element {
        rsx! { NavbarRoutes { path, user_id: Some("u2".to_owned()), classifier: classifier() } }
    }

    fn teacher_page(path: String) -> Element {
        rsx! { NavbarRoutes { path, user_id: Some("u1".to_owned()), classifier: classifier() } }
    }

    fn navbar_page(path: String) -> Element {
        rsx! { Navbar { path, user_id: Some("u1".to_owned()), classifier: classifier() } }
    }

    #[test]
    fn it_shows_search_on_the_root_page() {
        let html = render("/", guest_page);
        assert!(html.contains("navbar-search"));
        assert!(html.contains("search-input"));
        assert!(!html.contains("Exit"));
        assert!(!html.contains("Teacher mode"));

        let html = render("/?title=rust", guest_page);
        assert!(html.contains("search-input"));

        let html = render("/dashboard", guest_page);
        assert!(!html.contains("search-input"));
    }

    #[test]
    fn it_shows_exit_in_the_teacher_section() {
        let html = render("/teacher/courses", teacher_page);
        assert!(html.contains("href=\"/\""));
        assert!(html.contains("Exit"));
        assert!(!html.contains("Teacher mode"));
        assert!(!html.contains("search-input"));
    }

    #[test]
    fn it_shows_exit_on_course_pages() {
        for html in [
            render("/courses/42/chapters/7", student_page),
            render("/courses/42", teacher_page),
        ] {
            assert!(html.contains("href=\"/\""));
            assert!(html.contains("Exit"));
            assert!(!html.contains("Teacher mode"));
        }
    }

    #[test]
    fn it_offers_teacher_mode_to_teachers() {
        let html = render("/dashboard", teacher_page);
        assert!(html.contains("href=\"/teacher/courses\""));
        assert!(html.contains("Teacher mode"));
        assert!(!html.contains("Exit"));

        let html = render("/dashboard", student_page);
        assert!(!html.contains("Teacher mode"));
        assert!(!html.contains("Exit"));
    }

    #[test]
    fn it_always_mounts_the_account_menu() {
        let html = render("/dashboard", student_page);
        assert!(html.contains("account-menu"));
        assert!(html.contains("account-menu-trigger"));
        assert!(!html.contains("is-signed-out"));

        let html = render("/dashboard", guest_page);
        assert!(html.contains("account-menu is-signed-out"));
        assert!(!html.contains("account-menu-trigger"));
    }

    #[test]
    fn it_renders_the_navbar() {
        let html = render("/dashboard", navbar_page);
        assert!(html.contains("class=\"navbar\""));
        assert!(html.contains("mobile-sidebar-toggle"));
        assert!(html.contains("Teacher mode"));
        assert!(html.contains("account-menu"));
    }
}
