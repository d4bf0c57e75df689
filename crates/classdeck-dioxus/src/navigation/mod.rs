//! Navigation bars and menus of the dashboard shell.

mod account;
mod navbar;
mod search;
mod sidebar;

pub use account::{AccountMenu, AccountMenuProps};
pub use navbar::{Navbar, NavbarProps, NavbarRoutes, NavbarRoutesProps};
pub use search::{SearchInput, SearchInputProps};
pub use sidebar::{
    Logo, LogoProps, MobileSidebar, MobileSidebarProps, Sidebar, SidebarItem, SidebarItemProps,
    SidebarProps, SidebarRoutes, SidebarRoutesProps,
};
