use dioxus::prelude::*;

use ignite_domain as domain;
use ignite_web_app as web_app;
use ignite_web_app::SettingsService;

use crate::{
    DOMAIN_SERVICE, GROUPS, NO_CONNECTION, NOTIFICATION_TIMEOUT, Notifier, Route,
    WEB_APP_SERVICE,
    component::element::{Dialog, ErrorMessage, Icon, Spinner},
};

#[component]
pub fn Navbar() -> Element {
    let mut menu_visible = use_signal(|| false);
    let mut settings_visible = use_signal(|| false);
    let mut session = use_context::<Signal<domain::SessionContext>>();
    let settings = use_resource(|| async { WEB_APP_SERVICE.read().get_settings().await });
    let navigator = use_navigator();

    let user = session.read().user().cloned();
    let page_title = match use_route::<Route>() {
        Route::Home {} => {
            if let Some(ref user) = user {
                format!("Hello, {}", user.name)
            } else {
                "Exercises".to_string()
            }
        }
        Route::History {} => "Exercise history".to_string(),
        Route::Exercise { .. } => "Exercise".to_string(),
        Route::NotFound { .. } => String::new(),
    };
    let go_up_target = match use_route::<Route>() {
        Route::Home {} | Route::History {} => None,
        Route::Exercise { .. } | Route::NotFound { .. } => Some(Route::Home {}),
    };

    rsx! {
        nav {
            class: "navbar is-fixed-top is-primary has-shadow has-text-weight-bold",
            div {
                class: "container",
                div {
                    class: "navbar-brand is-flex-grow-1",
                    a {
                        class: "navbar-item is-size-5",
                        class: if go_up_target.is_none() { "has-text-primary" },
                        Icon {
                            name: "chevron-left",
                            onclick: {
                                let go_up_target = go_up_target.clone();
                                move |_| {
                                    if let Some(go_up_target) = &go_up_target {
                                        navigator.push(go_up_target.clone());
                                    }
                                }
                            },
                        }
                    }
                    div { class: "navbar-item is-size-5", "{page_title}" }
                    div { class: "mx-auto" }
                    if NO_CONNECTION() {
                        a {
                            class: "navbar-item is-size-5 mx-1",
                            title: "No connection to server",
                            Icon { name: "plug-circle-xmark" }
                        }
                    }
                    a {
                        aria_expanded: menu_visible(),
                        aria_label: "menu",
                        class: "navbar-burger ml-0",
                        class: if menu_visible() { "is-active" },
                        role: "button",
                        onclick: move |_| { *menu_visible.write() = !menu_visible() },
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                    }
                }
                div {
                    class: "navbar-menu is-flex-grow-0",
                    class: if menu_visible() { "is-active" },
                    div {
                        class: "navbar-end",
                        a {
                            class: "navbar-item",
                            onclick: move |_| {
                                *menu_visible.write() = false;
                                navigator.push(Route::Home {});
                            },
                            Icon { name: "dumbbell", px: 5 }
                            "Exercises"
                        }
                        a {
                            class: "navbar-item",
                            onclick: move |_| {
                                *menu_visible.write() = false;
                                navigator.push(Route::History {});
                            },
                            Icon { name: "calendar-days", px: 5 }
                            "History"
                        }
                        a {
                            class: "navbar-item",
                            onclick: move |_| {
                                *settings_visible.write() = true;
                                *menu_visible.write() = false;
                            },
                            Icon { name: "gear", px: 5 }
                            "Settings"
                        }
                        if let Some(user) = user {
                            a {
                                class: "navbar-item",
                                onclick: move |_| {
                                    async move {
                                        let mut context = session();
                                        let result =
                                            domain::sign_out(&*DOMAIN_SERVICE.read(), &mut context).await;
                                        match result {
                                            Ok(user) => {
                                                session.set(context);
                                                domain::NotificationSink::notify(
                                                    &Notifier,
                                                    &format!("Signed out {}", user.name),
                                                    domain::NotificationKind::Success,
                                                );
                                                navigator.push(Route::Home {});
                                            }
                                            Err(err) => {
                                                domain::NotificationSink::notify(
                                                    &Notifier,
                                                    &format!("Failed to sign out: {err}"),
                                                    domain::NotificationKind::Error,
                                                );
                                            }
                                        }
                                        *menu_visible.write() = false;
                                    }
                                },
                                Icon { name: "sign-out-alt", px: 5 }
                                "Sign out ({user.name})"
                            }
                        }
                    }
                }
            }
        }

        if *settings_visible.read() {
            Settings { settings, settings_visible }
        }

        div {
            class: "mt-6 pt-2",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Settings(
    settings: Resource<Result<web_app::Settings, String>>,
    settings_visible: Signal<bool>,
) -> Element {
    match settings.read().clone() {
        Some(Ok(settings)) => rsx! {
            Dialog {
                title: "Settings",
                close_event: move |_| {
                    *settings_visible.write() = false;
                },
                p {
                    class: "mb-5",
                    h1 { class: "subtitle", "Muscle group on start" }
                    div {
                        class: "buttons",
                        for group in GROUPS.read().items().iter().cloned() {
                            button {
                                class: "button",
                                class: if group == settings.default_group() { "is-link" },
                                onclick: {
                                    let settings = settings.clone();
                                    let group = group.clone();
                                    move |_| {
                                        let mut settings = settings.clone();
                                        settings.default_group = group.label().to_string();
                                        save(settings)
                                    }
                                },
                                "{group}"
                            }
                        }
                    }
                }
                p {
                    class: "mb-5",
                    h1 { class: "subtitle", "Notification duration ({settings.notification_timeout} s)" }
                    input {
                        class: "slider is-fullwidth is-info",
                        max: "10",
                        min: "1",
                        r#type: "range",
                        step: "1",
                        value: settings.notification_timeout,
                        oninput: {
                            let settings = settings.clone();
                            move |event: FormEvent| {
                                let mut settings = settings.clone();
                                settings.notification_timeout = event.value().parse().unwrap_or(3);
                                *NOTIFICATION_TIMEOUT.write() = settings.notification_timeout_millis();
                                save(settings)
                            }
                        },
                    }
                }
                p {
                    class: "mb-5",
                    h1 { class: "subtitle", "Overlapping requests" }
                    div {
                        class: "field has-addons",
                        p {
                            class: "control",
                            button {
                                class: "button",
                                class: if settings.fetch_policy == web_app::FetchPolicy::LastIssuedWins { "is-link" },
                                onclick: {
                                    let settings = settings.clone();
                                    move |_| {
                                        let mut settings = settings.clone();
                                        settings.fetch_policy = web_app::FetchPolicy::LastIssuedWins;
                                        save(settings)
                                    }
                                },
                                span { "Latest request" }
                            }
                        }
                        p {
                            class: "control",
                            button {
                                class: "button",
                                class: if settings.fetch_policy == web_app::FetchPolicy::LastSettledWins { "is-link" },
                                onclick: {
                                    let settings = settings.clone();
                                    move |_| {
                                        let mut settings = settings.clone();
                                        settings.fetch_policy = web_app::FetchPolicy::LastSettledWins;
                                        save(settings)
                                    }
                                },
                                span { "Latest response" }
                            }
                        }
                    }
                    p { class: "help", "Takes effect after reloading the page." }
                }
            }
        },
        Some(Err(err)) => rsx! {
            ErrorMessage { message: "Failed to get settings: {err}" }
        },
        None => rsx! { Spinner {} },
    }
}

async fn save(settings: web_app::Settings) {
    if let Err(err) = WEB_APP_SERVICE.write().set_settings(settings).await {
        log::error!("failed to save settings: {err}");
    }
}
