use crate::{class::Class, icon::RouteIconView};
use classdeck_core::{
    SharedString,
    navigation::{ROOT_PATH, RouteIcon, SidebarRoute},
};
use dioxus::prelude::*;
use dioxus_free_icons::icons::bs_icons::BsList;
use dioxus_router::components::Link;

/// A vertical panel with the brand mark and the routes list.
pub fn Sidebar(props: SidebarProps) -> Element {
    rsx! {
        aside {
            class: props.class,
            div {
                class: "sidebar-logo",
                Logo { name: props.name }
            }
            div {
                class: "sidebar-routes",
                SidebarRoutes { path: props.path }
            }
        }
    }
}

/// The [`Sidebar`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct SidebarProps {
    /// The class attribute for the component.
    #[props(into, default = "sidebar")]
    pub class: Class,
    /// The current path used to highlight the active route.
    #[props(into)]
    pub path: String,
    /// The dashboard name rendered next to the logo.
    #[props(into, default = "classdeck")]
    pub name: SharedString,
}

/// The brand mark linking to the root page.
pub fn Logo(props: LogoProps) -> Element {
    rsx! {
        Link {
            class: props.class.to_string(),
            to: ROOT_PATH,
            img {
                src: "{props.src}",
                alt: "{props.name}",
                width: 130,
                height: 130,
            }
        }
    }
}

/// The [`Logo`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct LogoProps {
    /// The class attribute for the component.
    #[props(into, default = "logo")]
    pub class: Class,
    /// The image source.
    #[props(into, default = "/logo.svg")]
    pub src: SharedString,
    /// The dashboard name used as the alternative text.
    #[props(into, default = "classdeck")]
    pub name: SharedString,
}

/// The guest or teacher routes, depending on the current path.
pub fn SidebarRoutes(props: SidebarRoutesProps) -> Element {
    let routes = SidebarRoute::routes_for(&props.path);
    rsx! {
        nav {
            class: props.class,
            for route in routes.iter() {
                SidebarItem {
                    key: "{route.href()}",
                    label: route.label(),
                    href: route.href(),
                    icon: route.icon(),
                    active: route.is_active(&props.path),
                }
            }
        }
    }
}

/// The [`SidebarRoutes`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct SidebarRoutesProps {
    /// The class attribute for the component.
    #[props(into, default = "sidebar-menu")]
    pub class: Class,
    /// The current path.
    #[props(into)]
    pub path: String,
}

/// A single link of the sidebar.
pub fn SidebarItem(props: SidebarItemProps) -> Element {
    let class = props.class.with_if(props.active, "is-active");
    rsx! {
        Link {
            class: class.to_string(),
            to: props.href,
            div {
                class: "sidebar-item-label",
                RouteIconView { icon: props.icon }
                span { "{props.label}" }
            }
            if props.active {
                div { class: "sidebar-item-marker" }
            }
        }
    }
}

/// The [`SidebarItem`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct SidebarItemProps {
    /// The class attribute for the component.
    #[props(into, default = "sidebar-item")]
    pub class: Class,
    /// The label of the link.
    pub label: &'static str,
    /// The link target.
    pub href: &'static str,
    /// The icon next to the label.
    pub icon: RouteIcon,
    /// A flag to indicate whether the route is active.
    #[props(default)]
    pub active: bool,
}

/// A toggle which opens the sidebar as a drawer on narrow screens.
pub fn MobileSidebar(props: MobileSidebarProps) -> Element {
    let mut open = use_signal(|| false);
    rsx! {
        div {
            class: props.class,
            button {
                class: "mobile-sidebar-toggle",
                r#type: "button",
                aria_label: "Toggle navigation",
                onclick: move |_| {
                    let visible = open();
                    open.set(!visible);
                },
                dioxus_free_icons::Icon { icon: BsList, width: 24, height: 24 }
            }
            if open() {
                div {
                    class: "mobile-sidebar-backdrop",
                    onclick: move |_| open.set(false),
                }
                div {
                    class: "mobile-sidebar-drawer",
                    onclick: move |_| open.set(false),
                    Sidebar { path: props.path, name: props.name }
                }
            }
        }
    }
}

/// The [`MobileSidebar`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct MobileSidebarProps {
    /// The class attribute for the component.
    #[props(into, default = "mobile-sidebar is-hidden-desktop")]
    pub class: Class,
    /// The current path.
    #[props(into)]
    pub path: String,
    /// The dashboard name rendered next to the logo.
    #[props(into, default = "classdeck")]
    pub name: SharedString,
}

#[cfg(test)]
mod tests {
    use super::{Sidebar, SidebarRoutes};
    use crate::testing::render;
    use dioxus::prelude::*;

    fn routes_page(path: String) -> Element {
        rsx! { SidebarRoutes { path } }
    }

    fn sidebar_page(path: String) -> Element {
        rsx! { Sidebar { path, name: "LMS" } }
    }

    #[test]
    fn it_lists_guest_routes() {
        let html = render("/dashboard", routes_page);
        assert!(html.contains("Browse"));
        assert!(html.contains("Dashboard"));
        assert!(!html.contains("Courses"));
        assert!(html.contains("href=\"/dashboard\""));
        assert!(html.contains("class=\"sidebar-item is-active\""));
        assert_eq!(html.matches("is-active").count(), 1);
        assert_eq!(html.matches("sidebar-item-marker").count(), 1);
    }

    #[test]
    fn it_switches_to_teacher_routes() {
        let html = render("/teacher/analytics", routes_page);
        assert!(html.contains("Courses"));
        assert!(html.contains("Analytics"));
        assert!(!html.contains("Browse"));
        assert!(html.contains("href=\"/teacher/courses\""));
        assert!(html.contains("href=\"/teacher/analytics\""));
        assert_eq!(html.matches("is-active").count(), 1);
    }

    #[test]
    fn it_renders_the_logo_and_routes() {
        let html = render("/", sidebar_page);
        assert!(html.contains("class=\"sidebar\""));
        assert!(html.contains("src=\"/logo.svg\""));
        assert!(html.contains("alt=\"LMS\""));
        assert!(html.contains("Browse"));
        assert_eq!(html.matches("is-active").count(), 1);
    }
}
