use crate::class::Class;
use classdeck_core::SharedString;
use dioxus::prelude::*;

/// A button in different sizes.
pub fn Button(props: ButtonProps) -> Element {
    let class = if props.size == "default" {
        props.class.to_string()
    } else {
        format!("{} is-{}", props.class, props.size)
    };
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            { props.children }
        }
    }
}

/// The [`Button`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// The class attribute for the component.
    #[props(into, default = "button")]
    pub class: Class,
    /// The size of the button: `sm` | `default` | `lg`.
    #[props(into, default = "default")]
    pub size: SharedString,
    /// The children to render within the component.
    children: Element,
}
