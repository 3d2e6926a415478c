use dioxus::prelude::*;
use strum::Display;

use ignite_domain as domain;

#[derive(Display, Clone, Copy, PartialEq)]
pub enum Color {
    #[strum(to_string = "primary")]
    Primary,
    #[strum(to_string = "success")]
    Success,
    #[strum(to_string = "danger")]
    Danger,
}

impl From<domain::NotificationKind> for Color {
    fn from(kind: domain::NotificationKind) -> Self {
        match kind {
            domain::NotificationKind::Error => Color::Danger,
            domain::NotificationKind::Success => Color::Success,
        }
    }
}

/// Busy indicator. Shown instead of a screen's content while its fetch is in flight.
#[component]
pub fn Spinner(large: Option<bool>) -> Element {
    let size = if large.unwrap_or_default() { 2 } else { 4 };
    rsx! {
        div {
            class: "is-size-{size} has-text-centered",
            class: if large.unwrap_or_default() { "m-6" },
            i { class: "fas fa-spinner fa-pulse" }
        }
    }
}

#[component]
pub fn Toast(notification: domain::Notification, close_event: EventHandler<MouseEvent>) -> Element {
    let color = Color::from(notification.kind);
    rsx! {
        div {
            class: "toast notification is-{color} is-light has-line-breaks",
            button {
                aria_label: "close",
                class: "delete",
                onclick: close_event,
            }
            "{notification.message}"
        }
    }
}

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        article {
            class: "message is-danger mx-2",
            div {
                class: "message-body title is-size-4 has-text-danger",
                "{message}"
            }
        }
    }
}

#[component]
pub fn NoData(message: String) -> Element {
    rsx! {
        p {
            class: "block has-text-centered has-text-grey-light has-line-breaks my-6",
            "{message}"
        }
    }
}

#[component]
pub fn Icon(name: String, px: Option<u8>, onclick: Option<EventHandler<MouseEvent>>) -> Element {
    rsx! {
        span {
            class: "icon",
            class: if let Some(px) = px { "px-{px}" },
            onclick: move |evt| {
                if let Some(event_handler) = onclick {
                    event_handler.call(evt);
                }
            },
            i { class: "fas fa-{name}" }
        }
    }
}

/// Modal with a colored frame, closed by clicking the background or the close button.
#[component]
pub fn Dialog(children: Element, title: String, close_event: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div {
            class: "modal is-active",
            div { class: "modal-background", onclick: close_event }
            div {
                class: "modal-content",
                div {
                    class: "box mx-2 has-background-scheme-main",
                    h2 { class: "title has-text-{Color::Primary}", "{title}" }
                    {children}
                }
            }
            button { aria_label: "close", class: "modal-close", onclick: close_event }
        }
    }
}

/// Section heading with an optional figure aligned to the right, e.g. a count.
#[component]
pub fn Title(title: String, subtitle: Option<String>) -> Element {
    rsx! {
        div {
            class: "level is-mobile px-3 mb-4",
            h1 { class: "level-left title is-5", "{title}" }
            if let Some(subtitle) = subtitle {
                span { class: "level-right subtitle is-6 has-text-grey", "{subtitle}" }
            }
        }
    }
}
