use dioxus::prelude::*;

use crate::catalog::COMPONENT_MAPPINGS;
use crate::components::CodeBlock;
use crate::core::browser::CatalogBrowser;
use crate::t;

pub(crate) fn chip_class(active: bool) -> &'static str {
    if active {
        "chip chip--active"
    } else {
        "chip"
    }
}

/// Side-by-side web element and native primitive, one mapping at a time.
#[component]
pub fn ComponentTranslator() -> Element {
    let mut browser = use_signal(|| CatalogBrowser::new(&COMPONENT_MAPPINGS));
    let state = browser();
    let Some(selected) = state.current() else {
        return rsx! {};
    };
    let position = state.position_label();

    rsx! {
        div { class: "glass-panel translator",
            div { class: "translator__selector",
                {COMPONENT_MAPPINGS.iter().enumerate().map(|(index, mapping)| rsx! {
                    button {
                        key: "{index}",
                        class: chip_class(state.is_selected(index)),
                        onclick: move |_| browser.with_mut(|b| b.select(index)),
                        {mapping.web_tag}
                    }
                })}
            }

            div { class: "translator__panes",
                div { class: "translator__pane translator__pane--web",
                    h3 { class: "translator__platform", "React Web" }
                    code { class: "translator__tag", {selected.web_tag} }
                    p { class: "translator__purpose", {selected.purpose} }
                    CodeBlock { code: selected.web_example, tone: "web" }
                }
                div { class: "translator__pane translator__pane--native",
                    h3 { class: "translator__platform", "React Native" }
                    code { class: "translator__tag", {selected.native_tag} }
                    p { class: "translator__purpose", {selected.purpose} }
                    CodeBlock { code: selected.native_example, tone: "native" }
                }
            }

            if let Some(note) = selected.note {
                div { class: "callout callout--warning",
                    span { class: "callout__icon", "💡" }
                    div {
                        h4 { class: "callout__title", {t!("translator-note-title")} }
                        p { {note} }
                    }
                }
            }

            div { class: "pager",
                button {
                    class: "button button--ghost",
                    disabled: !state.can_retreat(),
                    onclick: move |_| browser.with_mut(|b| b.retreat()),
                    {t!("pager-previous")}
                }
                span { class: "pager__position", "{position}" }
                button {
                    class: "button button--ghost",
                    disabled: !state.can_advance(),
                    onclick: move |_| browser.with_mut(|b| b.advance()),
                    {t!("pager-next")}
                }
            }
        }
    }
}
