//! Re-exports of components and common types.

pub use crate::{
    auth::SharedClassifier,
    class::Class,
    form::Button,
    icon::{RouteIconView, SvgIcon},
    layout::DashboardShell,
    navigation::{
        AccountMenu, Logo, MobileSidebar, Navbar, NavbarRoutes, SearchInput, Sidebar, SidebarItem,
        SidebarRoutes,
    },
};

#[doc(no_inline)]
pub use dioxus_router::components::Router;
