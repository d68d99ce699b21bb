use dioxus::prelude::*;

/// Read-only code listing. `tone` picks the border accent
/// (`web`, `native`, or empty for neutral).
#[component]
pub fn CodeBlock(
    #[props(into)] code: String,
    #[props(default)] tone: &'static str,
    #[props(default)] scroll: bool,
) -> Element {
    let mut class = String::from("code-block");
    if !tone.is_empty() {
        class.push_str(" code-block--");
        class.push_str(tone);
    }
    if scroll {
        class.push_str(" code-block--scroll");
    }

    rsx! {
        div { class: "{class}",
            pre { code { "{code}" } }
        }
    }
}
