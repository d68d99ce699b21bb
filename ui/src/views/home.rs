use dioxus::prelude::*;
use tracing::debug;

use crate::catalog::{FEATURES, STATS};
use crate::components::{ComponentTranslator, CurriculumOverview, FeaturedProjects, FlexboxVisualizer};
use crate::core::routing::{lesson_href, PLAYGROUND_HREF};
use crate::core::site::SiteConfig;
use crate::i18n::use_language_marker;
use crate::t;

#[component]
fn SectionHeading(title: String, subtitle: Option<Element>) -> Element {
    rsx! {
        div { class: "section__heading",
            h2 { class: "section__title gradient-text", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "section__subtitle", {subtitle} }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    let lang = use_language_marker();
    debug!(lang = %lang, "Home render");

    let first_lesson = lesson_href(1);

    rsx! {
        div { style: "display:none", "{lang}" }
        main { class: "page page-home",
            section { class: "hero",
                div { class: "hero__badges",
                    span { class: "badge badge--live",
                        span { class: "badge__dot" }
                        {t!("home-badge-learn-once")}
                    }
                    span { class: "badge badge--secure", {t!("home-badge-security")} }
                }
                h1 { class: "hero__title",
                    span { class: "gradient-text", "React Native" }
                    br {}
                    span { "Academy" }
                }
                p { class: "hero__subtitle", {t!("home-subtitle")} }
                div { class: "hero__actions",
                    Link { class: "button button--primary", to: first_lesson.clone(), {t!("home-cta-start")} }
                    Link { class: "button button--ghost", to: PLAYGROUND_HREF, {t!("home-cta-playground")} }
                    a {
                        class: "button button--ghost",
                        href: SiteConfig::GITHUB_REPOSITORIES_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "GitHub"
                    }
                }
                div { class: "hero__stats",
                    for stat in STATS.iter() {
                        div { key: "{stat.label}", class: "stat",
                            div { class: "stat__value gradient-text", {stat.value} }
                            div { class: "stat__label", {stat.label} }
                        }
                    }
                }
            }

            section { class: "section",
                SectionHeading {
                    title: t!("home-translation-title"),
                    subtitle: rsx! { {t!("home-translation-subtitle")} },
                }
                ComponentTranslator {}
            }

            section { class: "section",
                SectionHeading {
                    title: t!("home-flexbox-title"),
                    subtitle: rsx! {
                        {t!("home-flexbox-subtitle-native")}
                        " "
                        code { "flexDirection: column" }
                        " "
                        {t!("home-flexbox-subtitle-web")}
                        " "
                        code { "row" }
                    },
                }
                FlexboxVisualizer {}
            }

            section { class: "section",
                SectionHeading {
                    title: t!("home-curriculum-title"),
                    subtitle: rsx! { {t!("home-curriculum-subtitle")} },
                }
                CurriculumOverview {}
            }

            section { class: "section",
                SectionHeading {
                    title: t!("home-showcase-title"),
                    subtitle: rsx! { {t!("home-showcase-subtitle")} },
                }
                FeaturedProjects {}
            }

            section { class: "section",
                SectionHeading { title: t!("home-why-title") }
                div { class: "feature-grid",
                    for feature in FEATURES.iter() {
                        div { key: "{feature.title}", class: "feature-card",
                            div { class: "feature-card__icon", {feature.icon} }
                            h3 { class: "feature-card__title", {feature.title} }
                            p { class: "feature-card__description", {feature.description} }
                        }
                    }
                }
            }

            section { class: "section final-cta",
                h2 { class: "final-cta__title",
                    {t!("home-final-title")}
                    br {}
                    span { class: "gradient-text", {t!("home-final-title-accent")} }
                }
                p { class: "final-cta__subtitle", {t!("home-final-subtitle")} }
                Link { class: "button button--primary button--large", to: first_lesson, {t!("home-final-cta")} }
            }
        }
    }
}
