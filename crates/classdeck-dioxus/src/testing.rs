//! Server-side rendering of components inside a router.

use dioxus::prelude::*;
use dioxus_router::prelude::*;

/// A page rendered for the current path.
pub(crate) type Page = fn(String) -> Element;

#[derive(Clone, PartialEq, Props)]
struct AppRootProps {
    path: String,
    page: Page,
}

#[derive(Clone, PartialEq, Routable)]
enum Route {
    #[route("/:..segments")]
    CatchAll { segments: Vec<String> },
}

#[component]
fn CatchAll(segments: Vec<String>) -> Element {
    let AppRootProps { path, page } = use_context::<AppRootProps>();
    tracing::debug!(?segments, "render the page");
    page(path)
}

fn app_root(props: AppRootProps) -> Element {
    use_context_provider(|| props);
    rsx! { Router::<Route> {} }
}

/// Renders the page for a path to HTML.
pub(crate) fn render(path: &str, page: Page) -> String {
    let props = AppRootProps {
        path: path.to_owned(),
        page,
    };
    let mut vdom = VirtualDom::new_with_props(app_root, props);
    vdom.rebuild_in_place();
    dioxus_ssr::render(&vdom)
}
