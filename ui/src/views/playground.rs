use dioxus::prelude::*;
use tracing::debug;

use crate::core::playground::PlaygroundState;
use crate::core::routing::HOME_HREF;
use crate::i18n::use_language_marker;
use crate::t;

fn template_class(active: bool) -> &'static str {
    if active {
        "template-card template-card--active"
    } else {
        "template-card"
    }
}

/// Starter templates, a plain-text editor and the Expo Snack hand-off.
#[component]
pub fn Playground() -> Element {
    let lang = use_language_marker();
    let mut state = use_signal(PlaygroundState::default);
    let snack_url = state.read().snack_url();
    let selected = state.read().template_index();
    let code = state.read().code().to_string();
    let templates = state.read().templates();

    debug!(template = selected, bytes = code.len(), "Playground render");

    rsx! {
        div { style: "display:none", "{lang}" }
        main { class: "page page-playground",
            Link { class: "back-link", to: HOME_HREF, {t!("lesson-back-home")} }

            header { class: "glass-panel lesson-hero",
                span { class: "badge badge--live",
                    span { class: "badge__dot" }
                    {t!("playground-badge")}
                }
                h1 { class: "lesson-hero__title gradient-text", {t!("playground-title")} }
                p { class: "lesson-hero__intro", {t!("playground-intro")} }
            }

            section { class: "section",
                h2 { class: "playground__heading", {t!("playground-templates")} }
                div { class: "template-grid",
                    {templates.iter().enumerate().map(|(index, template)| rsx! {
                        button {
                            key: "{template.id}",
                            class: template_class(index == selected),
                            onclick: move |_| state.with_mut(|s| s.select_template(index)),
                            h3 { {template.title} }
                            p { {template.description} }
                        }
                    })}
                }
            }

            section { class: "section playground__workspace",
                div { class: "glass-panel playground__editor",
                    div { class: "playground__bar",
                        h3 { {t!("playground-editor")} }
                        button {
                            class: "button button--ghost button--small",
                            onclick: move |_| state.with_mut(|s| s.reset()),
                            {t!("playground-reset")}
                        }
                    }
                    textarea {
                        class: "playground__textarea",
                        spellcheck: "false",
                        value: "{code}",
                        oninput: move |evt: FormEvent| state.with_mut(|s| s.edit(evt.value())),
                    }
                }

                div { class: "glass-panel playground__preview",
                    div { class: "playground__bar",
                        h3 { {t!("playground-preview")} }
                        a {
                            class: "button button--primary button--small",
                            href: "{snack_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            {t!("playground-open-snack")}
                        }
                    }
                    div { class: "playground__phone",
                        div { class: "playground__phone-icon", "📱" }
                        h4 { {t!("playground-run-title")} }
                        p { {t!("playground-run-text")} }
                        div { class: "quick-start",
                            h5 { {t!("playground-quick-start")} }
                            ol {
                                li { {t!("playground-step-install")} }
                                li { {t!("playground-step-open")} }
                                li { {t!("playground-step-scan")} }
                                li { {t!("playground-step-run")} }
                            }
                        }
                    }
                }
            }

            section { class: "section glass-panel",
                h2 { class: "playground__heading", {t!("playground-how-title")} }
                div { class: "how-grid",
                    div { class: "how-step how-step--write",
                        div { class: "how-step__icon", "✍️" }
                        h3 { {t!("playground-how-write")} }
                        p { {t!("playground-how-write-text")} }
                    }
                    div { class: "how-step how-step--build",
                        div { class: "how-step__icon", "☁️" }
                        h3 { {t!("playground-how-build")} }
                        p { {t!("playground-how-build-text")} }
                    }
                    div { class: "how-step how-step--run",
                        div { class: "how-step__icon", "📱" }
                        h3 { {t!("playground-how-run")} }
                        p { {t!("playground-how-run-text")} }
                    }
                }
            }

            section { class: "section tip-grid",
                div { class: "callout callout--web",
                    span { class: "callout__icon", "💡" }
                    div {
                        h3 { class: "callout__title", {t!("playground-tip-title")} }
                        p { {t!("playground-tip-text")} }
                    }
                }
                div { class: "callout callout--native",
                    span { class: "callout__icon", "🚀" }
                    div {
                        h3 { class: "callout__title", {t!("playground-setup-title")} }
                        p { {t!("playground-setup-text")} }
                    }
                }
            }
        }
    }
}
