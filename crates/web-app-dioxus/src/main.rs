#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use dioxus::{core::spawn_forever, prelude::*};
use gloo_timers::future::TimeoutFuture;
use log::{LevelFilter, error};

use ignite_domain as domain;
use ignite_domain::SessionService;
use ignite_storage as storage;
use ignite_web_app as web_app;
use ignite_web_app::SettingsService;

use component::{
    element::{Spinner, Toast},
    navbar::Navbar,
};
use page::{exercise::Exercise, history::History, home::Home, not_found::NotFound};

mod component;
mod page;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home {},
    #[route("/history")]
    History {},
    #[route("/exercise#:id")]
    Exercise { id: domain::ExerciseID },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

static DOMAIN_SERVICE: GlobalSignal<
    domain::Service<storage::rest::REST<storage::rest::GlooNetSendRequest>>,
> = Signal::global(|| domain::Service::new(storage::rest::REST::new()));
static WEB_APP_SERVICE: GlobalSignal<web_app::Service<storage::local_storage::LocalStorage>> =
    Signal::global(|| web_app::Service::new(storage::local_storage::LocalStorage));

static GROUPS: GlobalSignal<domain::FetchState<domain::Group>> =
    Signal::global(domain::FetchState::default);
static EXERCISES: GlobalSignal<domain::FetchState<domain::ExerciseSummary>> =
    Signal::global(domain::FetchState::default);
static HISTORY: GlobalSignal<domain::FetchState<domain::HistorySection>> =
    Signal::global(domain::FetchState::default);
static EXERCISES_SCREEN: GlobalSignal<domain::ExercisesScreen> =
    Signal::global(|| domain::ExercisesScreen::new(web_app::Settings::default().default_group()));
static HISTORY_SCREEN: GlobalSignal<domain::HistoryScreen> =
    Signal::global(domain::HistoryScreen::default);

static NOTIFICATION: GlobalSignal<Option<(usize, domain::Notification)>> =
    Signal::global(|| None);
static NOTIFICATION_TIMEOUT: GlobalSignal<u32> =
    Signal::global(|| web_app::Settings::default().notification_timeout_millis());
static NOTIFICATION_ID: AtomicUsize = AtomicUsize::new(0);
static NO_CONNECTION: GlobalSignal<bool> = Signal::global(|| false);

fn main() {
    init_logging();
    dioxus::launch(App);
}

fn init_logging() {
    let _ = web_app::log::init(
        Arc::new(storage::local_storage::LocalStorage),
        LevelFilter::Debug,
    );
}

#[component]
fn App() -> Element {
    std::panic::set_hook(Box::new(|info| {
        error!("{info}");
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("main"))
            .map(|el| {
                el.set_inner_html(&format!("
                    <section class=\"section\">
                        <div class=\"container\">
                            <div class=\"message is-danger\">
                                <div class=\"message-header\">
                                    <p>Something went wrong</p>
                                </div>
                                <div class=\"message-body\">
                                    <div class=\"block\">
                                        The application stopped because of an unexpected error.
                                    </div>
                                    <div class=\"block\">
                                        <pre>{info}</pre>
                                    </div>
                                    <div class=\"block field is-grouped is-grouped-centered\">
                                        <button class=\"button\" onclick=\"location.reload()\">
                                            <span class=\"icon\">
                                                <i class=\"fa fa-arrow-rotate-right\"></i>
                                            </span>
                                            <span>Reload page</span>
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </section>
                "));
                Some(())
            });
    }));

    // Settings changed later take effect on the next start.
    let settings = use_resource(|| async { WEB_APP_SERVICE.peek().get_settings().await });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "container is-max-desktop py-4",
            match &*settings.read() {
                Some(Ok(settings)) => rsx! { Main { settings: settings.clone() } },
                Some(Err(err)) => {
                    error!("failed to read settings: {err}");
                    rsx! { Main { settings: web_app::Settings::default() } }
                }
                None => rsx! { Spinner { large: true } },
            }
        }
    }
}

#[component]
fn Main(settings: web_app::Settings) -> Element {
    use_hook(|| {
        let policy = domain::SettlePolicy::from(settings.fetch_policy);
        *GROUPS.write() = domain::FetchState::new(policy);
        *EXERCISES.write() = domain::FetchState::new(policy);
        *HISTORY.write() = domain::FetchState::new(policy);
        *EXERCISES_SCREEN.write() = domain::ExercisesScreen::new(settings.default_group());
        *NOTIFICATION_TIMEOUT.write() = settings.notification_timeout_millis();
    });

    let mut session = use_context_provider(|| Signal::new(domain::SessionContext::default()));
    use_future(move || async move {
        match DOMAIN_SERVICE.read().get_session().await {
            Ok(user) => session.set(domain::SessionContext::start(user)),
            Err(domain::ReadError::Storage(domain::StorageError::NoConnection)) => {
                *NO_CONNECTION.write() = true;
            }
            Err(_) => {}
        }
    });

    rsx! {
        Router::<Route> {},
        Notification {}
    }
}

#[component]
fn Notification() -> Element {
    let notification = NOTIFICATION.read().clone();

    rsx! {
        if let Some((_, notification)) = notification {
            Toast {
                notification,
                close_event: move |_| { *NOTIFICATION.write() = None; },
            }
        }
    }
}

/// Shows the latest message as toast until it expires or is replaced.
struct Notifier;

impl domain::NotificationSink for Notifier {
    fn notify(&self, message: &str, kind: domain::NotificationKind) {
        let id = NOTIFICATION_ID.fetch_add(1, Ordering::Relaxed);
        *NOTIFICATION.write() = Some((
            id,
            domain::Notification {
                message: message.to_string(),
                kind,
            },
        ));
        let timeout = *NOTIFICATION_TIMEOUT.peek();
        spawn_forever(async move {
            TimeoutFuture::new(timeout).await;
            let mut notification = NOTIFICATION.write();
            if notification
                .as_ref()
                .is_some_and(|(current, _)| *current == id)
            {
                *notification = None;
            }
        });
    }
}

/// A fetch state shared by all components through a global signal.
struct GlobalCell<T: 'static>(&'static GlobalSignal<domain::FetchState<T>>);

impl<T: 'static> domain::FetchStateCell<T> for GlobalCell<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut domain::FetchState<T>) -> R) -> R {
        f(&mut self.0.write())
    }
}

async fn load_groups() {
    let _ = domain::load_groups(&*DOMAIN_SERVICE.read(), &mut GlobalCell(&GROUPS), &Notifier).await;
}

// The loading flag is set before the task is first polled, so no stale frame is rendered.
fn sync_exercises(group: domain::Group) -> impl Future<Output = ()> {
    EXERCISES.write().announce();
    async move {
        let _ = domain::sync_exercises(
            &*DOMAIN_SERVICE.read(),
            &mut GlobalCell(&EXERCISES),
            &group,
            &Notifier,
        )
        .await;
    }
}

fn sync_history() -> impl Future<Output = ()> {
    HISTORY.write().announce();
    async {
        let _ =
            domain::sync_history(&*DOMAIN_SERVICE.read(), &mut GlobalCell(&HISTORY), &Notifier)
                .await;
    }
}
