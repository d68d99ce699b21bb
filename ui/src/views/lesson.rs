use dioxus::prelude::*;
use tracing::debug;

use crate::catalog::{content_for, LessonContent, LessonRecord};
use crate::components::component_translator::chip_class;
use crate::components::CodeBlock;
use crate::core::browser::CatalogBrowser;
use crate::core::format::lesson_badge;
use crate::core::routing::{
    lesson_href, neighbours, resolve_lesson, ResolvedLesson, HOME_HREF, PLAYGROUND_HREF,
};
use crate::i18n::use_language_marker;
use crate::t;

/// `/lessons/:id`. Unknown ids render the "Coming Soon" page.
#[component]
pub fn Lesson(id: String) -> Element {
    let lang = use_language_marker();
    let resolved = resolve_lesson(&id);
    debug!(param = %id, placeholder = resolved.is_placeholder(), "Lesson render");

    let body = match resolved {
        ResolvedLesson::Found(record) => match content_for(record.id) {
            Some(content) => rsx! {
                LessonArticle { key: "{record.id}", record, content }
            },
            None => rsx! {
                LessonSummary { badge: lesson_badge(record.id), record }
            },
        },
        ResolvedLesson::Placeholder(record) => rsx! {
            LessonSummary { badge: format!("Lesson {}", id.trim()), record }
        },
    };

    rsx! {
        div { style: "display:none", "{lang}" }
        {body}
    }
}

#[component]
fn LessonArticle(record: &'static LessonRecord, content: &'static LessonContent) -> Element {
    let mut tabs = use_signal(|| CatalogBrowser::new(content.examples));
    let state = tabs();
    let around = neighbours(record.id);
    let accent_style = format!("--lesson-accent: {};", content.accent);
    let badge = lesson_badge(record.id);

    rsx! {
        main { class: "page page-lesson", style: "{accent_style}",
            Link { class: "back-link", to: HOME_HREF, {t!("lesson-back-to-courses")} }

            header { class: "glass-panel lesson-hero",
                span { class: "badge badge--live",
                    span { class: "badge__dot" }
                    "{badge}"
                }
                h1 { class: "lesson-hero__title gradient-text", {content.headline} }
                p { class: "lesson-hero__intro", {content.intro} }
            }

            section { class: "section lesson-examples",
                div { class: "lesson-examples__tabs",
                    {content.examples.iter().enumerate().map(|(index, example)| rsx! {
                        button {
                            key: "{index}",
                            class: chip_class(state.is_selected(index)),
                            onclick: move |_| tabs.with_mut(|b| b.select(index)),
                            {example.title}
                        }
                    })}
                }
                if let Some(example) = state.current() {
                    div { class: "lesson-examples__panes",
                        div { class: "lesson-examples__pane",
                            h3 { class: "lesson-examples__platform lesson-examples__platform--web", "React Web" }
                            CodeBlock { code: example.web, tone: "web" }
                        }
                        div { class: "lesson-examples__pane",
                            h3 { class: "lesson-examples__platform lesson-examples__platform--native", "React Native" }
                            CodeBlock { code: example.native, tone: "native" }
                        }
                    }
                    div { class: "callout callout--accent",
                        span { class: "callout__icon", "💡" }
                        div {
                            h4 { class: "callout__title", {t!("lesson-key-insight")} }
                            p { {example.explanation} }
                        }
                    }
                }
            }

            section { class: "section takeaway-grid",
                for takeaway in content.takeaways.iter() {
                    div { key: "{takeaway.title}", class: "takeaway-card",
                        div { class: "takeaway-card__icon", {takeaway.icon} }
                        h4 { class: "takeaway-card__title", {takeaway.title} }
                        p { class: "takeaway-card__description", {takeaway.description} }
                    }
                }
            }

            if let Some(capstone) = content.capstone.as_ref() {
                section { class: "section glass-panel capstone",
                    h2 { class: "capstone__title", "🎓 " {t!("lesson-capstone-title")} }
                    p { class: "capstone__summary", {capstone.summary} }
                    div { class: "capstone__listing",
                        div { class: "capstone__listing-header",
                            h3 { {capstone.title} }
                            span { class: "pill", {t!("lesson-capstone-full-code")} }
                        }
                        CodeBlock { code: capstone.source, scroll: true }
                    }
                    div { class: "capstone__actions",
                        Link { class: "button button--light", to: PLAYGROUND_HREF, {t!("lesson-capstone-cta")} }
                        p { class: "capstone__mastery", {t!("lesson-capstone-mastery")} }
                    }
                }
            } else {
                section { class: "section glass-panel try-it",
                    h2 { {t!("lesson-try-title")} }
                    p { {t!("lesson-try-text")} }
                    Link { class: "button button--primary", to: PLAYGROUND_HREF, {t!("lesson-try-cta")} }
                }
            }

            nav { class: "lesson-footer",
                if let Some(previous) = around.previous {
                    Link {
                        class: "button button--ghost",
                        to: lesson_href(previous.id),
                        "← "
                        {lesson_badge(previous.id)}
                    }
                } else {
                    Link { class: "button button--ghost", to: HOME_HREF, {t!("lesson-back-home")} }
                }
                if let Some(next) = around.next {
                    Link { class: "button button--primary", to: lesson_href(next.id), {t!("lesson-next")} }
                } else {
                    Link { class: "button button--primary", to: HOME_HREF, {t!("lesson-finish")} }
                }
            }
        }
    }
}

/// Title, description and topic tiles only. Used for the placeholder lesson.
#[component]
pub(crate) fn LessonSummary(#[props(into)] badge: String, record: &'static LessonRecord) -> Element {
    rsx! {
        main { class: "page page-lesson page-lesson--summary",
            Link { class: "back-link", to: HOME_HREF, {t!("lesson-back-home")} }
            div { class: "glass-panel lesson-hero",
                span { class: "badge", "{badge}" }
                h1 { class: "lesson-hero__title gradient-text", {record.title} }
                p { class: "lesson-hero__intro", {record.description} }
                div { class: "topic-grid",
                    for topic in record.topics.iter() {
                        div { key: "{topic}", class: "topic-tile", {*topic} }
                    }
                }
                div { class: "construction-banner", {t!("lesson-under-construction")} }
            }
        }
    }
}
