use crate::class::Class;
use classdeck_core::{navigation::SearchQuery, state::State};
use dioxus::prelude::*;
use dioxus_free_icons::icons::bs_icons::BsSearch;
use dioxus_router::prelude::use_navigator;
use std::time::Duration;

/// A course search input which updates the `title` query after a short delay.
pub fn SearchInput(props: SearchInputProps) -> Element {
    let navigator = use_navigator();
    let (path, query) = match props.path.split_once('?') {
        Some((path, query)) => (path.to_owned(), query.to_owned()),
        None => (props.path.clone(), String::new()),
    };
    let debounce = props
        .debounce
        .unwrap_or_else(|| State::shared().search_debounce());
    let mut composing = use_signal(|| false);
    let mut generation = use_signal(|| 0_u64);
    let mut draft = use_signal(|| None::<SearchDraft>);
    let text = search_text(&query, draft.read().as_ref());
    let draft_query = query.clone();
    let apply_search = use_callback(move |title: String| {
        let current = generation() + 1;
        generation.set(current);
        let url = SearchQuery::parse(&query).with_title(title).to_url(&path);
        spawn(async move {
            tokio::time::sleep(debounce).await;
            if generation() != current {
                return;
            }
            tracing::debug!(url = url.as_str(), "apply the search query");
            if let Some(failure) = navigator.push(url) {
                tracing::error!("fail to navigate to the search result: {failure:?}");
            }
        });
    });
    rsx! {
        div {
            class: props.class,
            span {
                class: "search-icon",
                dioxus_free_icons::Icon { icon: BsSearch, width: 16, height: 16 }
            }
            input {
                class: "search-field",
                r#type: "search",
                placeholder: "{props.placeholder}",
                value: "{text}",
                oninput: move |event| {
                    let title = event.value();
                    draft.set(Some(SearchDraft {
                        query: draft_query.clone(),
                        title: title.clone(),
                    }));
                    if !composing() {
                        apply_search.call(title);
                    }
                },
                oncompositionstart: move |_event| {
                    composing.set(true);
                },
                oncompositionend: move |_event| {
                    composing.set(false);
                    let title = draft
                        .read()
                        .as_ref()
                        .map(|draft| draft.title.clone())
                        .unwrap_or_default();
                    apply_search.call(title);
                },
            }
        }
    }
}

/// The [`SearchInput`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// The class attribute for the component.
    #[props(into, default = "search-input")]
    pub class: Class,
    /// The current path, optionally followed by a query string.
    #[props(into)]
    pub path: String,
    /// The placeholder text.
    #[props(into, default = "Search for a course".to_owned())]
    pub placeholder: String,
    /// The delay before the query is applied. Defaults to the `[search]` config.
    #[props(into)]
    pub debounce: Option<Duration>,
}

/// Text typed into the search field, along with the query it was typed against.
#[derive(Debug, Clone, PartialEq)]
struct SearchDraft {
    query: String,
    title: String,
}

/// Returns the text of the search field. A draft typed against another query
/// is discarded, so the field follows the `title` of the current query.
fn search_text(query: &str, draft: Option<&SearchDraft>) -> String {
    match draft {
        Some(draft) if draft.query == query => draft.title.clone(),
        _ => SearchQuery::parse(query)
            .title()
            .unwrap_or_default()
            .to_owned(),
    }
}
