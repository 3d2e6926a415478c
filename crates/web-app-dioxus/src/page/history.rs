use dioxus::prelude::*;

use ignite_domain as domain;

use crate::{
    HISTORY, HISTORY_SCREEN,
    component::element::{NoData, Spinner, Title},
    sync_history,
};

#[component]
pub fn History() -> Element {
    use_hook(|| {
        if HISTORY_SCREEN.write().show() {
            spawn(sync_history());
        }
    });
    use_drop(|| {
        if HISTORY_SCREEN.write().hide() {
            HISTORY.write().invalidate();
        }
    });

    let history = HISTORY.read();

    if history.is_loading() {
        return rsx! { Spinner { large: true } };
    }

    match domain::HistoryContent::of(history.items()) {
        domain::HistoryContent::Placeholder(message) => rsx! {
            NoData { message: "{message}" }
        },
        domain::HistoryContent::Sections(sections) => rsx! {
            for section in sections.iter().cloned() {
                Title { title: section.title }
                for entry in section.data {
                    HistoryCard { entry }
                }
            }
        },
    }
}

#[component]
fn HistoryCard(entry: domain::HistoryEntry) -> Element {
    rsx! {
        div {
            class: "mx-3 my-2",
            div {
                class: "box px-4 py-3 is-flex is-justify-content-space-between is-align-items-center",
                div {
                    p { class: "title is-size-6 is-uppercase mb-1", "{entry.group}" }
                    p { class: "subtitle is-size-6", "{entry.name}" }
                }
                span { class: "has-text-grey", "{entry.hour}" }
            }
        }
    }
}
