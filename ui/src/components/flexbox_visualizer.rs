use dioxus::prelude::*;

use crate::components::component_translator::chip_class;
use crate::components::CodeBlock;
use crate::core::flexbox::{AlignItems, FlexDirection, FlexboxPreview, JustifyContent};
use crate::core::platform::PlatformPreset;
use crate::t;

fn preset_class(preset: PlatformPreset, active: bool) -> String {
    if active {
        format!("flexbox__preset flexbox__preset--active flexbox__preset--{preset}")
    } else {
        "flexbox__preset".to_string()
    }
}

/// Toggle direction/justify/align and watch three boxes rearrange.
#[component]
pub fn FlexboxVisualizer() -> Element {
    let mut preview = use_signal(FlexboxPreview::default);
    let current = preview();

    let container_style = current.declaration().web_css();
    let code = current.declaration().native_object();
    let code_label = current.code_label();
    let main_axis = current.main_axis().label();
    let cross_axis = current.cross_axis().label();

    rsx! {
        div { class: "glass-panel flexbox",
            div { class: "flexbox__presets",
                for preset in PlatformPreset::ALL.iter().copied() {
                    button {
                        key: "{preset}",
                        class: preset_class(preset, current.preset() == preset),
                        onclick: move |_| preview.with_mut(|p| p.select_preset(preset)),
                        {preset.label()}
                    }
                }
            }

            div { class: "callout callout--warning",
                span { class: "callout__icon", "⚠️" }
                div {
                    h4 { class: "callout__title", {t!("flexbox-alert-title")} }
                    p {
                        "Web: "
                        code { class: "flexbox__keyword flexbox__keyword--web", "row" }
                        br {}
                        "Native: "
                        code { class: "flexbox__keyword flexbox__keyword--native", "column" }
                    }
                }
            }

            div { class: "flexbox__grid",
                div { class: "flexbox__controls",
                    h3 { {t!("flexbox-properties-title")} }

                    label { class: "flexbox__label", {t!("flexbox-direction-label")} }
                    div { class: "flexbox__options",
                        for direction in FlexDirection::ALL.iter().copied() {
                            button {
                                key: "{direction}",
                                class: chip_class(current.direction() == direction),
                                onclick: move |_| preview.with_mut(|p| p.set_direction(direction)),
                                "{direction}"
                            }
                        }
                    }

                    label { class: "flexbox__label", {t!("flexbox-justify-label")} }
                    div { class: "flexbox__options",
                        for justify in JustifyContent::ALL.iter().copied() {
                            button {
                                key: "{justify}",
                                class: chip_class(current.justify() == justify),
                                onclick: move |_| preview.with_mut(|p| p.set_justify(justify)),
                                "{justify}"
                            }
                        }
                    }

                    label { class: "flexbox__label", {t!("flexbox-align-label")} }
                    div { class: "flexbox__options",
                        for align in AlignItems::ALL.iter().copied() {
                            button {
                                key: "{align}",
                                class: chip_class(current.align() == align),
                                onclick: move |_| preview.with_mut(|p| p.set_align(align)),
                                "{align}"
                            }
                        }
                    }

                    div { class: "flexbox__code",
                        span { class: "flexbox__code-label", "{code_label}" }
                        CodeBlock { code }
                    }
                }

                div { class: "flexbox__preview",
                    h3 { {t!("flexbox-preview-title")} }
                    div { class: "flexbox__stage",
                        div { class: "flexbox__container", style: "{container_style}",
                            {current.boxes().into_iter().map(|b| {
                                let id = b.id;
                                rsx! {
                                    div { key: "{id}", class: "flexbox__box", style: b.style(), "{id}" }
                                }
                            })}
                        }
                    }

                    div { class: "flexbox__axes",
                        div { class: "axis-card axis-card--main",
                            div { class: "axis-card__title", {t!("flexbox-main-axis")} }
                            div { class: "axis-card__direction", "{main_axis}" }
                            div { class: "axis-card__hint",
                                {t!("flexbox-controlled-by")}
                                " "
                                code { "justifyContent" }
                            }
                        }
                        div { class: "axis-card axis-card--cross",
                            div { class: "axis-card__title", {t!("flexbox-cross-axis")} }
                            div { class: "axis-card__direction", "{cross_axis}" }
                            div { class: "axis-card__hint",
                                {t!("flexbox-controlled-by")}
                                " "
                                code { "alignItems" }
                            }
                        }
                    }
                }
            }
        }
    }
}
