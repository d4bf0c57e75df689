use crate::{
    auth::SharedClassifier,
    class::Class,
    navigation::{Navbar, Sidebar},
};
use classdeck_core::SharedString;
use dioxus::prelude::*;

/// The dashboard shell with a fixed sidebar, a top navbar and the page content.
pub fn DashboardShell(props: DashboardShellProps) -> Element {
    rsx! {
        div {
            class: props.class,
            header {
                class: "dashboard-navbar",
                Navbar {
                    path: props.path.clone(),
                    user_id: props.user_id,
                    classifier: props.classifier,
                    name: props.name.clone(),
                    on_sign_out: props.on_sign_out,
                }
            }
            div {
                class: "dashboard-sidebar is-hidden-mobile",
                Sidebar { path: props.path, name: props.name }
            }
            main {
                class: "dashboard-main",
                { props.children }
            }
        }
    }
}

/// The [`DashboardShell`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct DashboardShellProps {
    /// The class attribute for the component.
    #[props(into, default = "dashboard")]
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
    /// The dashboard name rendered next to the logo.
    #[props(into, default = "classdeck")]
    pub name: SharedString,
    /// An event handler to be called with the user id when signing out.
    pub on_sign_out: Option<EventHandler<String>>,
    /// The page content.
    children: Element,
}
