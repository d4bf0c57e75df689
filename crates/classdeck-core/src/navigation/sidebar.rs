use super::ROOT_PATH;

/// Icons available to sidebar routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteIcon {
    /// A compass for browsing.
    Compass,
    /// A layout grid for the dashboard.
    Layout,
    /// A list for course management.
    List,
    /// A bar chart for analytics.
    BarChart,
}

/// A link in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarRoute {
    /// Label of the link.
    label: &'static str,
    /// Link target.
    href: &'static str,
    /// Icon next to the label.
    icon: RouteIcon,
}

/// Routes for students and visitors.
pub const GUEST_ROUTES: [SidebarRoute; 2] = [
    SidebarRoute::new("Browse", "/", RouteIcon::Compass),
    SidebarRoute::new("Dashboard", "/dashboard", RouteIcon::Layout),
];

/// Routes of the teacher section.
pub const TEACHER_ROUTES: [SidebarRoute; 2] = [
    SidebarRoute::new("Courses", "/teacher/courses", RouteIcon::List),
    SidebarRoute::new("Analytics", "/teacher/analytics", RouteIcon::BarChart),
];

impl SidebarRoute {
    /// Creates a new instance.
    #[inline]
    pub const fn new(label: &'static str, href: &'static str, icon: RouteIcon) -> Self {
        Self { label, href, icon }
    }

    /// Returns the routes listed in the sidebar for the path.
    pub fn routes_for(path: &str) -> &'static [SidebarRoute] {
        if path.contains("/teacher") {
            &TEACHER_ROUTES
        } else {
            &GUEST_ROUTES
        }
    }

    /// Returns the label.
    #[inline]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the link target.
    #[inline]
    pub fn href(&self) -> &'static str {
        self.href
    }

    /// Returns the icon.
    #[inline]
    pub fn icon(&self) -> RouteIcon {
        self.icon
    }

    /// Returns `true` if the route is active for the path.
    /// Any query string or fragment in the path is ignored.
    pub fn is_active(&self, path: &str) -> bool {
        let href = self.href;
        let path = path
            .split(|c: char| c == '?' || c == '#')
            .next()
            .unwrap_or(path);
        if href == ROOT_PATH {
            return path == ROOT_PATH;
        }
        path.strip_prefix(href)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::{GUEST_ROUTES, SidebarRoute, TEACHER_ROUTES};

    #[test]
    fn it_switches_route_sets() {
        assert_eq!(SidebarRoute::routes_for("/"), &GUEST_ROUTES);
        assert_eq!(SidebarRoute::routes_for("/courses/1"), &GUEST_ROUTES);
        assert_eq!(SidebarRoute::routes_for("/teacher/courses"), &TEACHER_ROUTES);
        assert_eq!(SidebarRoute::routes_for("/teacher/analytics"), &TEACHER_ROUTES);
    }

    #[test]
    fn it_matches_active_routes() {
        let [browse, dashboard] = GUEST_ROUTES;
        assert!(browse.is_active("/"));
        assert!(browse.is_active("/?title=rust"));
        assert!(!browse.is_active("/dashboard"));
        assert!(dashboard.is_active("/dashboard"));
        assert!(dashboard.is_active("/dashboard/progress"));
        assert!(!dashboard.is_active("/dashboards"));

        let [courses, analytics] = TEACHER_ROUTES;
        assert!(courses.is_active("/teacher/courses/42"));
        assert!(!courses.is_active("/teacher/analytics"));
        assert!(analytics.is_active("/teacher/analytics"));
    }
}
