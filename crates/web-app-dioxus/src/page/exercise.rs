use dioxus::prelude::*;

use ignite_domain as domain;

use crate::{EXERCISES, component::element::ErrorMessage};

/// Shows an exercise of the current list. Exercises are not fetched individually.
#[component]
pub fn Exercise(id: domain::ExerciseID) -> Element {
    let exercise = EXERCISES
        .read()
        .items()
        .iter()
        .find(|exercise| exercise.id == id)
        .cloned();

    let Some(exercise) = exercise else {
        return rsx! { ErrorMessage { message: "Exercise not found" } };
    };

    rsx! {
        div {
            class: "container px-3",
            div {
                class: "block",
                h1 { class: "title is-4", "{exercise.name}" }
                p { class: "subtitle is-6 is-uppercase", "{exercise.group}" }
            }
            figure {
                class: "block image",
                img {
                    class: "exercise-thumbnail",
                    src: "api/exercise/thumb/{exercise.thumbnail}",
                    alt: "{exercise.name}",
                }
            }
            if let Some(prescription) = exercise.prescription() {
                div {
                    class: "block box has-text-centered",
                    "{prescription}"
                }
            }
        }
    }
}
