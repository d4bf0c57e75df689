//! SVG icons.

use crate::class::Class;
use classdeck_core::navigation::RouteIcon;
use dioxus::prelude::*;
use dioxus_free_icons::{
    IconShape,
    icons::bs_icons::{BsBarChart, BsCompass, BsGrid, BsListUl},
};

/// A container for a SVG icon.
pub fn SvgIcon<T: IconShape + Clone + PartialEq + 'static>(props: SvgIconProps<T>) -> Element {
    let width = props.width;
    let height = props.height.unwrap_or(width);
    rsx! {
        span {
            class: props.class,
            dioxus_free_icons::Icon {
                icon: props.shape,
                width: width,
                height: height,
            }
        }
    }
}

/// The [`SvgIcon`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct SvgIconProps<T: IconShape + Clone + PartialEq + 'static> {
    /// The class attribute for the component.
    #[props(into, default = "icon")]
    pub class: Class,
    /// The icon shape to use.
    pub shape: T,
    /// The width of the `<svg>` element. Defaults to 20.
    #[props(default = 20)]
    pub width: u32,
    /// The height of the `<svg>` element.
    #[props(into)]
    pub height: Option<u32>,
}

/// The icon of a sidebar route.
pub fn RouteIconView(props: RouteIconViewProps) -> Element {
    let class = props.class;
    let width = props.width;
    match props.icon {
        RouteIcon::Compass => rsx! { SvgIcon { class, shape: BsCompass, width } },
        RouteIcon::Layout => rsx! { SvgIcon { class, shape: BsGrid, width } },
        RouteIcon::List => rsx! { SvgIcon { class, shape: BsListUl, width } },
        RouteIcon::BarChart => rsx! { SvgIcon { class, shape: BsBarChart, width } },
    }
}

/// The [`RouteIconView`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct RouteIconViewProps {
    /// The class attribute for the component.
    #[props(into, default = "icon")]
    pub class: Class,
    /// The route icon.
    pub icon: RouteIcon,
    /// The width of the `<svg>` element. Defaults to 22.
    #[props(default = 22)]
    pub width: u32,
}
