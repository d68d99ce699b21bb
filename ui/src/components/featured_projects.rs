use dioxus::prelude::*;

use crate::catalog::PROJECTS;
use crate::core::site::SiteConfig;
use crate::t;

#[component]
pub fn FeaturedProjects() -> Element {
    rsx! {
        div { class: "projects",
            div { class: "projects__grid",
                for project in PROJECTS.iter() {
                    a {
                        key: "{project.title}",
                        class: "project-card",
                        href: project.link,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        div { class: "project-card__header",
                            span { class: "project-card__icon", {project.icon} }
                            span { class: project.category.badge_class(), {project.category.label()} }
                        }
                        h3 { class: "project-card__title", {project.title} }
                        p { class: "project-card__description", {project.description} }
                        div { class: "project-card__tags",
                            for tag in project.tech_tags.iter() {
                                span { key: "{tag}", class: "topic-chip", {*tag} }
                            }
                        }
                        span { class: "project-card__cta", {t!("projects-view-repository")} " ↗" }
                    }
                }
            }
            div { class: "projects__more",
                a {
                    class: "button button--ghost",
                    href: SiteConfig::GITHUB_REPOSITORIES_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    {t!("projects-view-all")}
                }
            }
        }
    }
}
