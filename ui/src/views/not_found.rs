use dioxus::prelude::*;
use tracing::debug;

use super::lesson::LessonSummary;
use crate::catalog::PLACEHOLDER_LESSON;

/// Catch-all route. Unmatched paths get the placeholder lesson page.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let lang = crate::i18n::use_language_marker();
    debug!(path = %segments.join("/"), "no route matched");

    rsx! {
        div { style: "display:none", "{lang}" }
        LessonSummary { badge: "404", record: &PLACEHOLDER_LESSON }
    }
}
