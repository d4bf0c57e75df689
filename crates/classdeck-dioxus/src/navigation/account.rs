use crate::class::Class;
use classdeck_core::navigation::AccountMenuConfig;
use dioxus::prelude::*;
use dioxus_router::prelude::use_navigator;

/// The account menu of the signed-in user.
///
/// Session management belongs to the identity provider. The menu only
/// reports sign-out requests and then redirects to the configured page.
pub fn AccountMenu(props: AccountMenuProps) -> Element {
    let navigator = use_navigator();
    let mut expanded = use_signal(|| false);
    let Some(user_id) = props.user_id.clone() else {
        return rsx! {
            div { class: props.class.with_if(true, "is-signed-out") }
        };
    };
    let initial = user_id
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    let after_sign_out_url = props.config.after_sign_out_url();
    let signed_in_user = user_id.clone();
    rsx! {
        div {
            class: props.class.with_if(expanded(), "is-active"),
            button {
                class: "account-menu-trigger",
                r#type: "button",
                title: "{user_id}",
                onclick: move |_| {
                    let visible = expanded();
                    expanded.set(!visible);
                },
                span { class: "account-avatar", "{initial}" }
            }
            if expanded() {
                div {
                    class: "account-menu-content",
                    button {
                        class: "account-menu-item",
                        r#type: "button",
                        onclick: move |_| {
                            expanded.set(false);
                            if let Some(handler) = props.on_sign_out.as_ref() {
                                handler.call(signed_in_user.clone());
                            }
                            tracing::info!(after_sign_out_url, "user signed out");
                            if let Some(failure) = navigator.push(after_sign_out_url) {
                                tracing::error!("fail to redirect after signing out: {failure:?}");
                            }
                        },
                        "Sign out"
                    }
                }
            }
        }
    }
}

/// The [`AccountMenu`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct AccountMenuProps {
    /// The class attribute for the component.
    #[props(into, default = "account-menu")]
    pub class: Class,
    /// The signed-in user id.
    #[props(into)]
    pub user_id: Option<String>,
    /// Settings supplied by the navbar.
    #[props(default)]
    pub config: AccountMenuConfig,
    /// An event handler to be called with the user id when signing out.
    pub on_sign_out: Option<EventHandler<String>>,
}
