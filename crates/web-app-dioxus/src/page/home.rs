use dioxus::{core::spawn_forever, prelude::*};

use ignite_domain as domain;

use crate::{
    EXERCISES, EXERCISES_SCREEN, GROUPS, Route,
    component::element::{Icon, NoData, Spinner, Title},
    load_groups, sync_exercises,
};

#[component]
pub fn Home() -> Element {
    use_hook(|| {
        let mut screen = EXERCISES_SCREEN.write();
        if screen.mount() {
            spawn_forever(load_groups());
        }
        if let Some(group) = screen.show() {
            spawn(sync_exercises(group));
        }
    });
    use_drop(|| {
        if EXERCISES_SCREEN.write().hide() {
            EXERCISES.write().invalidate();
        }
    });

    let exercises = EXERCISES.read();

    if exercises.is_loading() {
        return rsx! { Spinner { large: true } };
    }

    let groups = GROUPS.read().items().to_vec();
    let screen = EXERCISES_SCREEN.read();

    rsx! {
        div {
            class: "tags are-medium is-justify-content-center group-strip px-3 mb-5",
            for group in groups {
                a {
                    class: "tag is-uppercase",
                    class: if screen.is_active(&group) { "is-link" },
                    onclick: {
                        let group = group.clone();
                        move |_| {
                            let next = EXERCISES_SCREEN.write().select_group(group.clone());
                            if let Some(group) = next {
                                spawn(sync_exercises(group));
                            }
                        }
                    },
                    "{group}"
                }
            }
        }
        Title { title: "Exercises", subtitle: exercises.len().to_string() }
        if exercises.is_empty() {
            NoData { message: "No exercises in this group." }
        }
        for exercise in exercises.items().iter().cloned() {
            ExerciseCard { exercise }
        }
    }
}

#[component]
fn ExerciseCard(exercise: domain::ExerciseSummary) -> Element {
    let navigator = use_navigator();
    let id = exercise.id.clone();

    rsx! {
        div {
            class: "mx-3 my-3",
            a {
                class: "box px-4 py-3 is-flex is-align-items-center",
                onclick: move |_| { navigator.push(Route::Exercise { id: id.clone() }); },
                figure {
                    class: "image is-64x64 mr-4",
                    img {
                        class: "exercise-thumbnail is-rounded",
                        src: "api/exercise/thumb/{exercise.thumbnail}",
                        alt: "{exercise.name}",
                    }
                }
                div {
                    class: "is-flex-grow-1",
                    p { class: "title is-size-5 has-text-link", "{exercise.name}" }
                    if let Some(prescription) = exercise.prescription() {
                        p { class: "subtitle is-size-6", "{prescription}" }
                    }
                }
                Icon { name: "chevron-right" }
            }
        }
    }
}
