use dioxus::prelude::*;

use crate::catalog::CURRICULUM;
use crate::components::component_translator::chip_class;
use crate::core::curriculum::{visible_topics, DifficultyFilter, Progress, EMPTY_FILTER_MESSAGE};
use crate::core::format::{format_minutes, lesson_badge, overflow_chip};
use crate::core::routing::lesson_href;
use crate::t;

/// Difficulty-filtered lesson grid followed by the progress panel.
#[component]
pub fn CurriculumOverview() -> Element {
    let mut filter = use_signal(DifficultyFilter::default);
    let active = filter();
    let lessons = active.apply(&CURRICULUM);
    let progress = Progress::SHOWCASE;
    let percent = progress.percent();
    let summary = progress.summary();

    rsx! {
        div { class: "curriculum",
            div { class: "curriculum__filters",
                for option in DifficultyFilter::options() {
                    button {
                        key: "{option.key()}",
                        class: chip_class(option == active),
                        onclick: move |_| filter.set(option),
                        {option.label()}
                    }
                }
            }

            if lessons.is_empty() {
                p { class: "curriculum__empty", {EMPTY_FILTER_MESSAGE} }
            } else {
                div { class: "curriculum__grid",
                    {lessons.into_iter().map(|lesson| {
                        let (topics, hidden) = visible_topics(lesson);
                        let overflow = overflow_chip(hidden);
                        let duration = format_minutes(lesson.duration_minutes);
                        let badge = lesson_badge(lesson.id);
                        rsx! {
                            Link {
                                key: "{lesson.id}",
                                class: "lesson-card",
                                to: lesson_href(lesson.id),
                                div { class: "lesson-card__header",
                                    span { class: "lesson-card__icon", {lesson.icon} }
                                    span { class: lesson.difficulty.badge_class(), {lesson.difficulty.label()} }
                                }
                                span { class: "lesson-card__number", "{badge}" }
                                h3 { class: "lesson-card__title", {lesson.title} }
                                p { class: "lesson-card__description", {lesson.description} }
                                div { class: "lesson-card__topics",
                                    for topic in topics.iter() {
                                        span { key: "{topic}", class: "topic-chip", {*topic} }
                                    }
                                    if let Some(more) = overflow {
                                        span { class: "topic-chip topic-chip--more", "{more}" }
                                    }
                                }
                                div { class: "lesson-card__footer",
                                    span { class: "lesson-card__duration", "⏱ {duration}" }
                                    span { class: "lesson-card__explore", {t!("curriculum-explore")} " →" }
                                }
                            }
                        }
                    })}
                }
            }

            div { class: "glass-panel progress",
                div { class: "progress__text",
                    h3 { class: "progress__title", {t!("progress-title")} }
                    p { class: "progress__summary", "{summary}" }
                }
                div { class: "progress__meter",
                    div { class: "progress__track",
                        div { class: "progress__fill", style: "width: {percent}%;" }
                    }
                    span { class: "progress__label", "{percent}% " {t!("progress-complete")} }
                }
            }
        }
    }
}
