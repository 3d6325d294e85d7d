use dioxus::prelude::*;
use lingo_services::delegate::QUIZ_MODAL_ID;
use lingo_services::{QuizPhase, Region};

use crate::vm::{QuestionVm, ResultsVm, map_question_view, map_results_view};

use super::super::actions::SiteActions;

#[derive(Clone, Debug, PartialEq)]
enum QuizBody {
    Empty,
    Question(QuestionVm),
    Results(ResultsVm),
}

#[component]
pub fn QuizModalView() -> Element {
    let actions = use_context::<SiteActions>();
    let state = actions.state();

    let body = {
        let quiz = state.quiz.read();
        match quiz.phase() {
            QuizPhase::Idle => QuizBody::Empty,
            QuizPhase::InProgress => map_question_view(&quiz).map_or(QuizBody::Empty, QuizBody::Question),
            QuizPhase::Finished => quiz
                .results()
                .map_or(QuizBody::Empty, |results| QuizBody::Results(map_results_view(&results))),
        }
    };
    let visible = (state.quiz_visible)();
    let class = if visible { "modal show" } else { "modal" };
    let display = if visible { "flex" } else { "none" };
    let hidden = !visible;
    let actions_for_close = actions.clone();

    rsx! {
        div {
            id: QUIZ_MODAL_ID,
            class: "{class}",
            style: "display: {display}",
            role: "dialog",
            aria_modal: "true",
            aria_hidden: "{hidden}",
            div { class: "modal-content quiz-modal-content",
                button {
                    class: "modal-close",
                    r#type: "button",
                    aria_label: "Close quiz",
                    onmounted: actions.on_mounted(Region::QuizModalClose),
                    onclick: move |_| actions_for_close.close_quiz_modal(),
                    "×"
                }
                match body {
                    QuizBody::Empty => rsx! {},
                    QuizBody::Question(view) => rsx! { QuestionPanel { view } },
                    QuizBody::Results(view) => rsx! { ResultsPanel { view } },
                }
            }
        }
    }
}

#[component]
fn QuestionPanel(view: QuestionVm) -> Element {
    let actions = use_context::<SiteActions>();
    let actions_for_previous = actions.clone();
    let actions_for_next = actions.clone();
    let progress = view.progress_percent;

    rsx! {
        div { class: "quiz-panel",
            div { class: "quiz-header",
                h2 { class: "modal-title", "{view.title}" }
                span { class: "quiz-counter", "{view.counter_label}" }
            }
            div { class: "quiz-progress",
                div { class: "quiz-progress-bar", style: "width: {progress}%" }
            }
            p { class: "quiz-question", "{view.text}" }
            div { class: "quiz-options",
                for option in view.options.iter() {
                    button {
                        key: "{option.index}",
                        class: if option.selected { "quiz-option selected" } else { "quiz-option" },
                        r#type: "button",
                        onclick: {
                            let actions = actions.clone();
                            let index = option.index;
                            move |_| actions.select_answer(index)
                        },
                        span { class: "option-letter", "{option.letter}" }
                        span { class: "option-text", "{option.text}" }
                    }
                }
            }
            div { class: "quiz-nav",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: view.previous_disabled,
                    onclick: move |_| actions_for_previous.previous_question(),
                    "Previous"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: view.next_disabled,
                    onclick: move |_| actions_for_next.next_question(),
                    "{view.next_label}"
                }
            }
        }
    }
}

#[component]
fn ResultsPanel(view: ResultsVm) -> Element {
    let actions = use_context::<SiteActions>();
    let actions_for_restart = actions.clone();
    let actions_for_close = actions.clone();

    rsx! {
        div { class: "quiz-results {view.tier_class}",
            h2 { class: "modal-title", "{view.title}" }
            div { class: "result-score",
                span { class: "result-percentage", "{view.percentage_label}" }
                span { class: "result-fraction", "{view.score_label}" }
            }
            h3 { class: "result-headline", "{view.headline}" }
            p { class: "result-message", "{view.message}" }
            ol { class: "result-review",
                for item in view.review.iter() {
                    li {
                        key: "{item.number}",
                        class: if item.is_correct { "review-item correct" } else { "review-item incorrect" },
                        p { class: "review-question", "{item.question}" }
                        p { class: "review-answer", "Your answer: {item.chosen_label}" }
                        if !item.is_correct {
                            p { class: "review-correct", "Correct answer: {item.correct_answer}" }
                        }
                        if !item.explanation.is_empty() {
                            p { class: "review-explanation", "{item.explanation}" }
                        }
                    }
                }
            }
            div { class: "quiz-nav",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| actions_for_restart.restart_quiz(),
                    "Try again"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| actions_for_close.close_quiz_modal(),
                    "Close"
                }
            }
        }
    }
}
